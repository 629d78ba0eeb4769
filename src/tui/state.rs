//! TUI state: the whole application model in one struct.
//!
//! The frame driver owns an [`App`] and lends it to the dispatcher, the
//! sorter and the renderer in turn. Nothing lives in globals.
//!
//! Design principle: the active sorter lives inside [`RunState::Running`],
//! so "running without a sorter" and "completed with a stale sorter" are
//! unrepresentable. Replacing the run state drops the old sorter and all
//! of its step-local state.

use crate::bars::BarSequence;
use crate::generator::ArrayGenerator;
use crate::sorter::Sorter;
use crate::types::{Algorithm, Highlight, RunConfig};

// ============================================================================
// RUN STATE
// ============================================================================

/// Where the current sort run stands.
#[derive(Debug)]
pub enum RunState {
    /// No array generated yet.
    Idle,
    /// A sort is in progress; the sorter holds its cursors and stacks.
    Running(Sorter),
    /// The array is sorted. `steps` is the yield count of the finished run.
    Completed { steps: u64 },
}

impl RunState {
    pub fn is_running(&self) -> bool {
        matches!(self, RunState::Running(_))
    }

    pub fn label(&self) -> &'static str {
        match self {
            RunState::Idle => "idle",
            RunState::Running(_) => "running",
            RunState::Completed { .. } => "sorted",
        }
    }
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug)]
pub struct App {
    /// The bar sequence being sorted.
    pub bars: BarSequence,

    /// Source of fresh arrays (startup and regenerate).
    pub generator: ArrayGenerator,

    /// Currently selected algorithm.
    pub algorithm: Algorithm,

    /// Progress of the current run.
    pub run: RunState,

    /// Bars touched by the most recent step. None when idle or sorted.
    pub highlight: Option<Highlight>,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the visualizer.
    Quit,
    /// Fill the bars with fresh random heights and restart the run.
    Regenerate,
    /// Switch algorithm and restart on the current bars.
    Select(Algorithm),
}

/// What an applied action leaves for the rest of the tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The sorter may take this tick's step.
    Continue,
    /// The bars were refilled. The fresh array is drawn before any step.
    Regenerated,
    /// Stop the visualizer.
    Quit,
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl App {
    /// Create an idle App. No array exists until the first generation.
    pub fn new(config: &RunConfig) -> Self {
        App {
            bars: BarSequence::default(),
            generator: ArrayGenerator::new(config.bars, config.seed),
            algorithm: config.algorithm,
            run: RunState::Idle,
            highlight: None,
            should_quit: false,
        }
    }

    /// Create an App already running `algorithm` over `values`.
    #[cfg(test)]
    pub fn with_values(values: Vec<u32>, algorithm: Algorithm) -> Self {
        let len = values.len();
        App {
            bars: BarSequence::new(values),
            generator: ArrayGenerator::new(len, Some(0)),
            algorithm,
            run: RunState::Running(Sorter::new(algorithm, len)),
            highlight: None,
            should_quit: false,
        }
    }

    /// Yield count of the current (or just finished) run.
    pub fn steps(&self) -> u64 {
        match &self.run {
            RunState::Idle => 0,
            RunState::Running(sorter) => sorter.steps(),
            RunState::Completed { steps } => *steps,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
