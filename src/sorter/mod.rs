//! Step-yielding sorters.
//!
//! Each algorithm is an explicit state machine. One call to `advance`
//! performs the smallest visible unit of work (a comparison, a swap, a
//! write-back), then returns the bars it touched. The frame driver
//! renders that state and polls input before asking for the next unit.
//!
//! Recursive algorithms keep their pending work on an explicit stack
//! instead of the call stack, so a run can be suspended between frames
//! and cancelled by dropping the stack.

mod bubble;
mod heap;
mod insertion;
mod merge;
mod quick;
mod selection;

use std::fmt;

use tracing::debug;

use crate::types::{Algorithm, Highlight, Step};

pub use bubble::BubbleSort;
pub use heap::HeapSort;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use quick::QuickSort;
pub use selection::SelectionSort;

/// A resumable sort over a fixed-length slice.
///
/// Implementations must leave `bars` fully ascending by the time
/// `advance` first returns `None`, and keep returning `None` after that.
pub trait StepSort: fmt::Debug {
    /// Run one unit of work. `None` means the sort is complete.
    fn advance(&mut self, bars: &mut [u32]) -> Option<Highlight>;

    /// Write back any value held outside `bars` by an unfinished step.
    ///
    /// Called once on cancellation. After it returns, `bars` holds the
    /// same multiset it held when the run started.
    fn release(&mut self, _bars: &mut [u32]) {}
}

/// Build the state machine for `algorithm` over `len` bars.
pub fn step_sort_for(algorithm: Algorithm, len: usize) -> Box<dyn StepSort> {
    match algorithm {
        Algorithm::Selection => Box::new(SelectionSort::new()),
        Algorithm::Insertion => Box::new(InsertionSort::new()),
        Algorithm::Bubble => Box::new(BubbleSort::new()),
        Algorithm::Merge => Box::new(MergeSort::new(len)),
        Algorithm::Quick => Box::new(QuickSort::new(len)),
        Algorithm::Heap => Box::new(HeapSort::new(len)),
    }
}

/// One run of one algorithm: the state machine plus run bookkeeping.
#[derive(Debug)]
pub struct Sorter {
    algorithm: Algorithm,
    inner: Box<dyn StepSort>,
    steps: u64,
    state: RunProgress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunProgress {
    Active,
    Finished,
    Cancelled,
}

impl Sorter {
    /// Start `algorithm` over a sequence of `len` bars.
    pub fn new(algorithm: Algorithm, len: usize) -> Self {
        Sorter {
            algorithm,
            inner: step_sort_for(algorithm, len),
            steps: 0,
            state: RunProgress::Active,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Number of units of work performed so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Advance by exactly one unit of work.
    pub fn step(&mut self, bars: &mut [u32]) -> Step {
        match self.state {
            RunProgress::Cancelled => Step::Cancelled,
            RunProgress::Finished => Step::Finished,
            RunProgress::Active => match self.inner.advance(bars) {
                Some(highlight) => {
                    self.steps += 1;
                    Step::Yielded(highlight)
                }
                None => {
                    self.state = RunProgress::Finished;
                    Step::Finished
                }
            },
        }
    }

    /// Abandon the run. Mutations already applied stay in place.
    pub fn cancel(&mut self, bars: &mut [u32]) {
        if self.state == RunProgress::Active {
            self.inner.release(bars);
            debug!(algorithm = %self.algorithm, steps = self.steps, "run cancelled");
        }
        self.state = RunProgress::Cancelled;
    }

    /// Drive to completion without rendering. Returns the yield count.
    pub fn run_to_end(&mut self, bars: &mut [u32]) -> u64 {
        while let Step::Yielded(_) = self.step(bars) {}
        self.steps
    }
}

// ============================================================================
// TESTS
// ============================================================================
