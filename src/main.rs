// What you SEE:
// • A white board. Hold Left Mouse and move: a black stroke follows.
// • C clears the board. ESC quits. Resizing starts over blank.

mod canvas;
mod controller;
mod error;
mod screen;
mod types;

use log::info;

use controller::{Capture, Command, Controller, Response};
use error::Error;
use screen::Screen;
use types::Point;

const TITLE: &str = "Whiteboard - draw with pointer. Press C to clear, Esc to quit";
const INITIAL_WIDTH: usize = 800;
const INITIAL_HEIGHT: usize = 600;

fn main() -> Result<(), Error> {
    env_logger::init();

    /* --- Controller + window setup ---
       Visual: window opens showing a blank white board. */
    let mut controller = Controller::new(INITIAL_WIDTH, INITIAL_HEIGHT);
    let mut screen = Screen::new(TITLE, INITIAL_WIDTH, INITIAL_HEIGHT)?;
    let (width, height) = screen.size();
    info!("whiteboard open at {width}x{height}");

    /* --- Loop state ---
       Visual: nothing here is drawn; it turns polled input into events. */
    let mut dirty = true; // first frame paints the blank canvas
    let mut captured = false;
    let mut was_down = false;
    let mut last_pos: Option<Point> = None;

    /* ------------------------------ Main loop ------------------------------ */
    while screen.is_open() {
        let mut response = Response::default();

        /* 1) Client size. Checked first so a resize swaps in the fresh
           buffer before anything draws into it this frame. */
        let (width, height) = screen.size();
        if (width, height) != controller.canvas().size() {
            response.merge(controller.on_resize(width, height)); // visual: board goes blank
        }

        /* 2) Keys */
        if screen.clear_pressed() {
            response.merge(controller.on_command(Command::Clear)); // visual: strokes vanish
        }
        if screen.quit_pressed() {
            response.merge(controller.on_command(Command::Quit));
        }

        /* 3) Pointer. Polled button state becomes discrete events; a move
           event only exists when the position actually changed. */
        let down = screen.left_down();
        let pos = screen.mouse_pos(captured);
        match (was_down, down) {
            (false, true) => {
                if let Some(p) = pos {
                    response.merge(controller.on_pointer_down(p));
                }
            }
            (true, true) => {
                if let Some(p) = pos {
                    if last_pos != Some(p) {
                        response.merge(controller.on_pointer_move(p)); // visual: stroke grows
                    }
                }
            }
            (true, false) => match pos {
                Some(p) => response.merge(controller.on_pointer_up(p)),
                None => response.merge(controller.on_capture_lost()),
            },
            (false, false) => {}
        }
        was_down = down;
        last_pos = pos;

        // A drag cannot outlive the window's focus. `was_down` keeps the
        // polled value: a button still held when focus returns does not
        // resume the stroke, it takes a fresh press.
        if controller.is_drawing() && !screen.is_active() {
            response.merge(controller.on_capture_lost());
        }

        /* 4) Apply what the controller asked for. */
        match response.capture {
            Some(Capture::Acquire) => captured = true,
            Some(Capture::Release) => captured = false,
            None => {}
        }
        if response.repaint {
            dirty = true;
        }
        if response.exit {
            info!("quit requested");
            return Ok(());
        }

        /* 5) Present only when something changed; otherwise just keep the
           window responsive. */
        if dirty {
            screen.present(controller.canvas())?;
            dirty = false;
        } else {
            screen.pump();
        }
    }

    info!("window closed");
    Ok(())
}
