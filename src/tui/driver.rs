//! Frame driver: the single cooperative loop.
//!
//! One tick = drain input → dispatch → one sort step → redraw. A tick
//! that regenerated the bars skips its step, so the fresh array is drawn
//! as generated. The loop then sleeps out the rest of the frame budget. Input sources and
//! renderers are traits so ticks run in tests without a terminal.

use std::io;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::KeyEvent;
use tracing::trace;

use super::run::map_key;
use super::state::{App, Transition};
use super::update::{advance, update};

/// Queued key events, drained once per tick.
pub trait InputSource {
    /// Return every event queued since the last call. Never blocks.
    fn drain(&mut self) -> io::Result<Vec<KeyEvent>>;
}

/// Draws one frame from the current App state.
pub trait Renderer {
    fn draw(&mut self, app: &App) -> io::Result<()>;
}

/// Whether the loop should keep going after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Continue,
    Quit,
}

/// Run one frame.
///
/// Input is applied before the step, and the step before the redraw, so
/// the drawn frame always reflects the latest action and step.
pub fn tick<I, R>(app: &mut App, input: &mut I, renderer: &mut R) -> io::Result<Tick>
where
    I: InputSource,
    R: Renderer,
{
    let mut regenerated = false;
    for key in input.drain()? {
        let Some(action) = map_key(key) else {
            continue;
        };
        trace!(?action, "dispatch");
        match update(app, &action) {
            Transition::Quit => return Ok(Tick::Quit),
            Transition::Regenerated => regenerated = true,
            Transition::Continue => {}
        }
    }

    // Regenerate already wrote the bars this tick.
    if !regenerated {
        advance(app);
    }
    renderer.draw(app)?;
    Ok(Tick::Continue)
}

/// Tick until quit, pacing each frame to at least `frame`.
pub fn run_loop<I, R>(app: &mut App, input: &mut I, renderer: &mut R, frame: Duration) -> io::Result<()>
where
    I: InputSource,
    R: Renderer,
{
    renderer.draw(app)?;
    loop {
        let started = Instant::now();
        if tick(app, input, renderer)? == Tick::Quit {
            return Ok(());
        }
        if let Some(rest) = frame.checked_sub(started.elapsed()) {
            thread::sleep(rest);
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
