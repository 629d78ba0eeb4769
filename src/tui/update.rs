//! State transitions: actions from the dispatcher, steps from the driver.
//!
//! Fully testable without a terminal. Every action that touches the run
//! cancels the active sorter first. A regenerate reports
//! [`Transition::Regenerated`] so the driver skips that tick's step:
//! the bars have at most one writer (the sorter or the regenerate
//! action) per tick.

use tracing::{debug, info};

use crate::sorter::Sorter;
use crate::types::Step;

use super::state::{Action, App, RunState, Transition};

/// Apply one user action.
pub fn update(app: &mut App, action: &Action) -> Transition {
    match action {
        Action::Quit => {
            cancel_run(app);
            app.should_quit = true;
            Transition::Quit
        }
        Action::Regenerate => {
            cancel_run(app);
            generate(app);
            Transition::Regenerated
        }
        Action::Select(algorithm) => {
            cancel_run(app);
            app.algorithm = *algorithm;
            debug!(algorithm = %algorithm, "algorithm selected");
            // Without an array there is nothing to sort yet.
            if !matches!(app.run, RunState::Idle) {
                start_run(app);
            }
            Transition::Continue
        }
    }
}

/// Fill the bars with fresh heights and start the selected algorithm.
pub fn generate(app: &mut App) {
    app.bars.refill(&mut app.generator);
    info!(bars = app.bars.len(), "array generated");
    start_run(app);
}

/// Advance the active run by exactly one step.
///
/// Returns the step outcome, or None if nothing is running.
pub fn advance(app: &mut App) -> Option<Step> {
    let RunState::Running(sorter) = &mut app.run else {
        return None;
    };

    let step = sorter.step(app.bars.as_mut_slice());
    match step {
        Step::Yielded(highlight) => app.highlight = Some(highlight),
        Step::Finished => {
            let steps = sorter.steps();
            info!(algorithm = %app.algorithm, steps, "run finished");
            debug_assert!(app.bars.is_sorted());
            app.run = RunState::Completed { steps };
            app.highlight = None;
        }
        // Only reachable between a cancel and the run being replaced.
        Step::Cancelled => app.highlight = None,
    }
    Some(step)
}

fn start_run(app: &mut App) {
    app.run = RunState::Running(Sorter::new(app.algorithm, app.bars.len()));
    app.highlight = None;
    info!(algorithm = %app.algorithm, "run started");
}

fn cancel_run(app: &mut App) {
    if let RunState::Running(sorter) = &mut app.run {
        sorter.cancel(app.bars.as_mut_slice());
    }
    app.highlight = None;
}

// ============================================================================
// TESTS
// ============================================================================
