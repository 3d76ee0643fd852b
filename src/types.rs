// Core types shared by the canvas, the controller, and the window layer.

/// A position in buffer pixel space.
/// Coordinates are `i32` because a captured drag may leave the window:
/// values can go negative or past the buffer edge and are clipped on draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

// Fixed stroke style. There is no UI to change any of this; the constants
// hold for the lifetime of the program.

/// Canvas background color, 0x00RRGGBB as minifb expects (white).
pub const BACKGROUND: u32 = 0x00FF_FFFF;

/// Stroke ink (black).
pub const STROKE_COLOR: u32 = 0x0000_0000;

/// Stroke thickness in logical pixels.
pub const STROKE_WIDTH: i32 = 6;
