//! TUI effects boundary: terminal lifecycle, key mapping, crossterm input.
//!
//! This is the only module that touches the real terminal. It plugs
//! crossterm and ratatui into the frame driver's traits and leaves all
//! the logic to the pure layers (state, update, view).
//!
//! Everything runs on the calling thread. Input is polled without
//! blocking once per frame, so a slow sort step never delays a key and
//! a key never interrupts a step halfway.

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{info, warn};

use crate::error::{AppError, Result};
use crate::types::{Algorithm, RunConfig};

use super::driver::{InputSource, Renderer, run_loop};
use super::state::{Action, App};
use super::update::generate;
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits (raw mode swallows SIGINT)
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Regenerate),
        KeyCode::Char(c) => Algorithm::from_key(c).map(Action::Select),
        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<CrosstermTerminal> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// CROSSTERM ADAPTERS
// ============================================================================

/// Non-blocking key reader over crossterm's event queue.
pub struct CrosstermInput;

impl InputSource for CrosstermInput {
    fn drain(&mut self) -> io::Result<Vec<KeyEvent>> {
        let mut keys = Vec::new();
        while event::poll(Duration::ZERO)? {
            // Key repeat and release events would double-trigger actions.
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    keys.push(key);
                }
            }
        }
        Ok(keys)
    }
}

/// Draws frames to the real terminal.
pub struct TerminalRenderer {
    terminal: CrosstermTerminal,
}

impl Renderer for TerminalRenderer {
    fn draw(&mut self, app: &App) -> io::Result<()> {
        self.terminal.draw(|frame| render(app, frame))?;
        Ok(())
    }
}

// ============================================================================
// ENTRY POINT
// ============================================================================

/// Run the interactive visualizer until the user quits.
///
/// # Errors
/// [`AppError::TerminalInit`] if the terminal cannot enter TUI mode,
/// [`AppError::Terminal`] if drawing or polling fails later.
pub fn run(config: &RunConfig) -> Result<()> {
    install_panic_hook();
    let terminal = match setup_terminal() {
        Ok(t) => t,
        Err(e) => {
            let _ = restore_terminal();
            return Err(AppError::TerminalInit(e));
        }
    };
    let mut renderer = TerminalRenderer { terminal };

    let mut app = App::new(config);
    generate(&mut app);
    info!(bars = config.bars, algorithm = %config.algorithm, "visualizer started");

    let result = run_loop(&mut app, &mut CrosstermInput, &mut renderer, config.frame);

    let _ = renderer.terminal.show_cursor();
    let restored = restore_terminal();
    finish(result, restored)?;

    info!("visualizer stopped");
    Ok(())
}

/// Report the loop's own failure first; a restore failure only surfaces
/// when the loop ended cleanly.
fn finish(result: io::Result<()>, restored: io::Result<()>) -> Result<()> {
    if let Err(e) = &restored {
        warn!(error = %e, "terminal restore failed");
    }
    result?;
    restored?;
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn press(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    #[test]
    fn ctrl_c_maps_to_quit() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key), Some(Action::Quit));
    }

    #[test]
    fn esc_and_q_quit() {
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(map_key(esc), Some(Action::Quit));
        assert_eq!(map_key(press('q')), Some(Action::Quit));
    }

    #[test]
    fn r_regenerates() {
        assert_eq!(map_key(press('r')), Some(Action::Regenerate));
        let shifted = KeyEvent::new(KeyCode::Char('R'), KeyModifiers::SHIFT);
        assert_eq!(map_key(shifted), Some(Action::Regenerate));
    }

    #[test]
    fn number_keys_select_algorithms_in_order() {
        let expected = [
            Algorithm::Selection,
            Algorithm::Insertion,
            Algorithm::Bubble,
            Algorithm::Merge,
            Algorithm::Quick,
            Algorithm::Heap,
        ];
        for (n, alg) in (1..=6u8).zip(expected) {
            let key = press((b'0' + n) as char);
            assert_eq!(map_key(key), Some(Action::Select(alg)));
        }
    }

    #[test]
    fn loop_error_wins_over_restore_error() {
        let err = finish(
            Err(io::Error::other("draw failed")),
            Err(io::Error::other("restore failed")),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "terminal I/O failed: draw failed");
    }

    #[test]
    fn restore_error_surfaces_after_a_clean_loop() {
        let err = finish(Ok(()), Err(io::Error::other("restore failed"))).unwrap_err();
        assert!(matches!(err, AppError::Terminal(_)));
        assert!(finish(Ok(()), Ok(())).is_ok());
    }

    #[test]
    fn unmapped_key_returns_none() {
        assert_eq!(map_key(press('z')), None);
        assert_eq!(map_key(press('7')), None);
        assert_eq!(map_key(press('0')), None);
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(map_key(enter), None);
    }
}
