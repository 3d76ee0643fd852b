// Window plumbing over minifb. Everything platform-flavored lives here so
// the canvas and controller never see a window handle.

use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

use crate::canvas::Canvas;
use crate::error::Error;
use crate::types::Point;

/// Frame rate the window paces itself to.
const TARGET_FPS: usize = 60;

pub struct Screen {
    window: Window, // the one on-screen window
}

impl Screen {
    /// Create a resizable window at the given client size.
    /// Visual: an empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let mut window = Window::new(
            title,
            width,
            height,
            WindowOptions {
                resize: true,
                ..WindowOptions::default()
            },
        )
        .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(TARGET_FPS);
        Ok(Self { window })
    }

    /// Push the canvas pixels to the screen.
    /// Visual: the window shows the board as drawn so far; it keeps showing
    /// this image until the next `present`. A zero-sized canvas has nothing
    /// to show, so only the event pump runs.
    pub fn present(&mut self, canvas: &Canvas) -> Result<(), Error> {
        if canvas.is_empty() {
            self.pump();
            return Ok(());
        }
        let (width, height) = canvas.size();
        self.window
            .update_with_buffer(canvas.pixels(), width, height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))
    }

    /// Process window events without touching what is on screen.
    pub fn pump(&mut self) {
        self.window.update();
    }

    /// Returns false once the user closes the window (so the loop can stop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while the window has input focus.
    pub fn is_active(&mut self) -> bool {
        self.window.is_active()
    }

    /// Current client-area size in pixels. Tracks live window resizing.
    pub fn size(&self) -> (usize, usize) {
        self.window.get_size()
    }

    /// True while the left pointer button is held down.
    pub fn left_down(&self) -> bool {
        self.window.get_mouse_down(MouseButton::Left)
    }

    /// Pointer position in client pixel coordinates. While captured,
    /// positions outside the window still come through (and may be negative
    /// or past the edge); otherwise outside positions are dropped.
    pub fn mouse_pos(&self, captured: bool) -> Option<Point> {
        let mode = if captured {
            MouseMode::Pass
        } else {
            MouseMode::Discard
        };
        self.window
            .get_mouse_pos(mode)
            .map(|(x, y)| Point::new(x.round() as i32, y.round() as i32))
    }

    /// Visual: when pressed, every stroke vanishes (the board turns blank).
    pub fn clear_pressed(&self) -> bool {
        self.window.is_key_pressed(Key::C, KeyRepeat::No)
    }

    /// Pressed once to leave the program.
    pub fn quit_pressed(&self) -> bool {
        self.window.is_key_pressed(Key::Escape, KeyRepeat::No)
    }
}
