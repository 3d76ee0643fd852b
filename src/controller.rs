// The drawing state machine. This layer owns the canvas and decides what
// each inbound event does to it; whatever the host must do afterwards comes
// back in a `Response`. No platform types appear here, which keeps the
// whole protocol testable without a window.

use log::debug;

use crate::canvas::Canvas;
use crate::types::Point;

/// Keyboard commands, already translated from raw keys by the window layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Clear,
    Quit,
}

/// Where a stroke stands: either nothing is happening, or the pointer is
/// held down and `last` is the most recent position a segment reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerState {
    Idle,
    Drawing { last: Point },
}

/// Pointer-capture requests handed back to the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Capture {
    Acquire,
    Release,
}

/// What the host should do after an event was handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Response {
    /// The buffer changed; copy it to the window.
    pub repaint: bool,
    /// Start or stop routing pointer events here regardless of bounds.
    pub capture: Option<Capture>,
    /// Tear the application down.
    pub exit: bool,
}

impl Response {
    /// Fold another event's requests into this one. Capture requests from
    /// later events win; the boolean requests accumulate.
    pub fn merge(&mut self, other: Response) {
        self.repaint |= other.repaint;
        self.exit |= other.exit;
        if other.capture.is_some() {
            self.capture = other.capture;
        }
    }
}

/// Owns the back buffer and the pointer state machine; every window event
/// funnels through here.
pub struct Controller {
    canvas: Canvas,
    state: PointerState,
}

impl Controller {
    /// Start idle with a white canvas at the initial client size.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            canvas: Canvas::new(width, height),
            state: PointerState::Idle,
        }
    }

    /// Pointer went down: remember the spot and ask for capture. Nothing is
    /// drawn yet; the first segment appears on the first move. A second
    /// down mid-stroke restarts the stroke from the new spot.
    pub fn on_pointer_down(&mut self, p: Point) -> Response {
        debug!("stroke started at ({}, {})", p.x, p.y);
        self.state = PointerState::Drawing { last: p };
        Response {
            capture: Some(Capture::Acquire),
            ..Response::default()
        }
    }

    /// Pointer moved: extend the stroke by one segment. Ignored while idle.
    pub fn on_pointer_move(&mut self, p: Point) -> Response {
        match self.state {
            PointerState::Drawing { last } => {
                self.canvas.stroke_segment(last, p);
                self.state = PointerState::Drawing { last: p };
                Response {
                    repaint: true,
                    ..Response::default()
                }
            }
            PointerState::Idle => Response::default(),
        }
    }

    /// Pointer released: draw the final segment to the release point, give
    /// capture back, and return to idle. Ignored while idle.
    pub fn on_pointer_up(&mut self, p: Point) -> Response {
        match self.state {
            PointerState::Drawing { last } => {
                self.canvas.stroke_segment(last, p);
                self.state = PointerState::Idle;
                debug!("stroke finished at ({}, {})", p.x, p.y);
                Response {
                    repaint: true,
                    capture: Some(Capture::Release),
                    ..Response::default()
                }
            }
            PointerState::Idle => Response::default(),
        }
    }

    /// The platform stopped routing pointer events here (focus lost while
    /// drawing). The stroke ends where it was; no final segment is drawn.
    pub fn on_capture_lost(&mut self) -> Response {
        match self.state {
            PointerState::Drawing { .. } => {
                debug!("stroke cancelled, capture lost");
                self.state = PointerState::Idle;
                Response {
                    capture: Some(Capture::Release),
                    ..Response::default()
                }
            }
            PointerState::Idle => Response::default(),
        }
    }

    /// Keyboard commands. Neither one touches the pointer state machine.
    pub fn on_command(&mut self, command: Command) -> Response {
        match command {
            Command::Clear => {
                debug!("canvas cleared");
                self.canvas.clear();
                Response {
                    repaint: true,
                    ..Response::default()
                }
            }
            Command::Quit => Response {
                exit: true,
                ..Response::default()
            },
        }
    }

    /// Client area changed: start over with a blank buffer at the new size.
    /// The state machine is deliberately left alone: a resize mid-stroke
    /// stays `Drawing` with its recorded point, so the next move draws from
    /// that stale spot into the fresh buffer.
    pub fn on_resize(&mut self, width: usize, height: usize) -> Response {
        debug!("canvas resized to {width}x{height}");
        self.canvas.resize(width, height);
        Response {
            repaint: true,
            ..Response::default()
        }
    }

    /// Read-only view of the buffer for the paint path.
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, PointerState::Drawing { .. })
    }
}
