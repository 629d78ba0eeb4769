//! Domain types for sortviz.
//!
//! Shared vocabulary between the sorters, the TUI and the headless
//! summary. Nothing in here performs I/O.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Smallest bar height the generator produces.
pub const MIN_HEIGHT: u32 = 10;

/// Largest bar height the generator produces.
pub const MAX_HEIGHT: u32 = 599;

/// Default frame budget (~60 frames per second).
pub const DEFAULT_FRAME_MS: u64 = 16;

/// Default bar count for the interactive visualizer.
///
/// Smaller than the headless default so each bar stays wide enough to
/// read on an 80-column terminal.
pub const DEFAULT_TUI_BARS: usize = 64;

/// Default bar count for headless traces.
pub const DEFAULT_TRACE_BARS: usize = 200;

// ============================================================================
// ALGORITHM SELECTOR
// ============================================================================

/// The six sorting algorithms the visualizer can animate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Selection,
    Insertion,
    Bubble,
    Merge,
    Quick,
    Heap,
}

impl Algorithm {
    /// Every algorithm, in select-key order (`1`..`6`).
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Bubble,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
    ];

    /// Human-readable name, as shown in the title bar.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Selection => "Selection Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Heap => "Heap Sort",
        }
    }

    /// Number key that selects this algorithm.
    pub fn key(self) -> char {
        match self {
            Algorithm::Selection => '1',
            Algorithm::Insertion => '2',
            Algorithm::Bubble => '3',
            Algorithm::Merge => '4',
            Algorithm::Quick => '5',
            Algorithm::Heap => '6',
        }
    }

    /// Inverse of [`Algorithm::key`].
    pub fn from_key(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.key() == c)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// HIGHLIGHTS & STEPS
// ============================================================================

/// Indices touched by the most recent step.
///
/// Roles map to colors: primary red, secondary blue, tertiary green.
/// When two roles name the same bar, the earlier role wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Highlight {
    pub primary: Option<usize>,
    pub secondary: Option<usize>,
    pub tertiary: Option<usize>,
}

impl Highlight {
    pub fn one(i: usize) -> Self {
        Highlight {
            primary: Some(i),
            ..Default::default()
        }
    }

    pub fn pair(i: usize, j: usize) -> Self {
        Highlight {
            primary: Some(i),
            secondary: Some(j),
            tertiary: None,
        }
    }

    pub fn triple(i: usize, j: usize, k: usize) -> Self {
        Highlight {
            primary: Some(i),
            secondary: Some(j),
            tertiary: Some(k),
        }
    }

    /// Role of bar `index`, if any.
    pub fn role_of(&self, index: usize) -> Option<Role> {
        if self.primary == Some(index) {
            Some(Role::Primary)
        } else if self.secondary == Some(index) {
            Some(Role::Secondary)
        } else if self.tertiary == Some(index) {
            Some(Role::Tertiary)
        } else {
            None
        }
    }
}

/// Highlight role of a single bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Primary,
    Secondary,
    Tertiary,
}

/// Outcome of advancing a sorter by one unit of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// One unit of work ran; these bars were involved.
    Yielded(Highlight),
    /// The sequence is fully sorted. No further work.
    Finished,
    /// The run was cancelled. No further work.
    Cancelled,
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Output format for headless summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable table.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

/// Configuration for the interactive visualizer.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Number of bars.
    pub bars: usize,
    /// Algorithm active at startup.
    pub algorithm: Algorithm,
    /// Minimum time per frame.
    pub frame: Duration,
    /// Generator seed (None = entropy).
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            bars: DEFAULT_TUI_BARS,
            algorithm: Algorithm::default(),
            frame: Duration::from_millis(DEFAULT_FRAME_MS),
            seed: None,
        }
    }
}

/// Configuration for headless traces.
#[derive(Debug, Clone)]
pub struct TraceConfig {
    /// Number of bars.
    pub bars: usize,
    /// Algorithms to run, each on its own copy of the same array.
    pub algorithms: Vec<Algorithm>,
    /// Generator seed (None = entropy).
    pub seed: Option<u64>,
    /// How to print the summary.
    pub format: OutputFormat,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            bars: DEFAULT_TRACE_BARS,
            algorithms: Algorithm::ALL.to_vec(),
            seed: None,
            format: OutputFormat::default(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_for_every_algorithm() {
        for alg in Algorithm::ALL {
            assert_eq!(Algorithm::from_key(alg.key()), Some(alg));
        }
        assert_eq!(Algorithm::from_key('7'), None);
    }

    #[test]
    fn earlier_role_wins_on_overlap() {
        let hl = Highlight::triple(3, 3, 5);
        assert_eq!(hl.role_of(3), Some(Role::Primary));
        assert_eq!(hl.role_of(5), Some(Role::Tertiary));
        assert_eq!(hl.role_of(4), None);
    }

    #[test]
    fn single_highlight_has_only_primary() {
        let hl = Highlight::one(2);
        assert_eq!(hl.primary, Some(2));
        assert_eq!(hl.secondary, None);
        assert_eq!(hl.tertiary, None);
    }

    #[test]
    fn algorithm_serializes_lowercase() {
        let json = serde_json::to_string(&Algorithm::Quick).unwrap();
        assert_eq!(json, "\"quick\"");
    }

    #[test]
    fn trace_config_defaults_to_all_algorithms() {
        let config = TraceConfig::default();
        assert_eq!(config.algorithms.len(), 6);
        assert_eq!(config.bars, DEFAULT_TRACE_BARS);
    }
}
