//! Headless run summaries.
//!
//! `summarize_run` drives one sorter to completion with no rendering;
//! `format_report` is a pure (TraceReport, OutputFormat) → String.

use serde::Serialize;

use crate::sorter::Sorter;
use crate::types::{Algorithm, OutputFormat};

// ============================================================================
// TYPES
// ============================================================================

/// Outcome of one algorithm on one array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub algorithm: Algorithm,
    /// Yields (visible steps) the run took.
    pub steps: u64,
    /// Result is non-decreasing.
    pub sorted: bool,
    /// Result holds the same multiset as the input.
    pub permutation: bool,
}

/// Summaries for every algorithm run on the same input.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TraceReport {
    /// Generator seed, if one was given.
    pub seed: Option<u64>,
    /// Number of bars in the input.
    pub bars: usize,
    pub runs: Vec<RunSummary>,
}

// ============================================================================
// RUNNING
// ============================================================================

/// Sort a copy of `values` with `algorithm` and record what happened.
pub fn summarize_run(algorithm: Algorithm, values: &[u32]) -> RunSummary {
    let mut bars = values.to_vec();
    let mut sorter = Sorter::new(algorithm, bars.len());
    let steps = sorter.run_to_end(&mut bars);

    let mut expected = values.to_vec();
    expected.sort_unstable();
    let mut actual = bars.clone();
    actual.sort_unstable();

    RunSummary {
        algorithm,
        steps,
        sorted: bars.windows(2).all(|w| w[0] <= w[1]),
        permutation: actual == expected,
    }
}

// ============================================================================
// FORMATTING
// ============================================================================

/// Format a trace report for output.
pub fn format_report(report: &TraceReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(report),
        OutputFormat::Json => format_json(report),
    }
}

fn format_human(report: &TraceReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== {} bars", report.bars));
    if let Some(seed) = report.seed {
        out.push_str(&format!(", seed {}", seed));
    }
    out.push_str(" ===\n");

    out.push_str(&format!("{:<16}{:>10}  {}\n", "Algorithm", "Steps", "Result"));
    for run in &report.runs {
        let result = match (run.sorted, run.permutation) {
            (true, true) => "ok",
            (false, _) => "NOT SORTED",
            (true, false) => "VALUES CHANGED",
        };
        out.push_str(&format!(
            "{:<16}{:>10}  {}\n",
            run.algorithm.name(),
            run.steps,
            result
        ));
    }

    out
}

fn format_json(report: &TraceReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|e| {
        // This should never happen with our types, but fail explicitly
        panic!("Failed to serialize report to JSON: {}", e)
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> TraceReport {
        TraceReport {
            seed: Some(7),
            bars: 5,
            runs: vec![
                summarize_run(Algorithm::Insertion, &[5, 3, 4, 1, 2]),
                summarize_run(Algorithm::Bubble, &[5, 3, 4, 1, 2]),
            ],
        }
    }

    #[test]
    fn summarize_counts_insertion_steps() {
        let summary = summarize_run(Algorithm::Insertion, &[5, 3, 4, 1, 2]);
        assert_eq!(summary.steps, 12);
        assert!(summary.sorted);
        assert!(summary.permutation);
    }

    #[test]
    fn summarize_bubble_on_sorted_input() {
        let values: Vec<u32> = (0..50).collect();
        let summary = summarize_run(Algorithm::Bubble, &values);
        assert_eq!(summary.steps, 49);
    }

    #[test]
    fn human_format_lists_every_run() {
        let out = format_report(&sample_report(), OutputFormat::Human);
        assert!(out.contains("5 bars, seed 7"));
        assert!(out.contains("Insertion Sort"));
        assert!(out.contains("Bubble Sort"));
        assert!(out.contains("ok"));
        assert!(!out.contains("NOT SORTED"));
    }

    #[test]
    fn json_format_is_valid_json() {
        let out = format_report(&sample_report(), OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("valid JSON");
        assert_eq!(parsed["bars"], 5);
        assert_eq!(parsed["runs"][0]["algorithm"], "insertion");
        assert_eq!(parsed["runs"][0]["steps"], 12);
        assert_eq!(parsed["runs"][1]["sorted"], true);
    }

    #[test]
    fn empty_report_formats() {
        let out = format_report(&TraceReport::default(), OutputFormat::Human);
        assert!(out.contains("0 bars"));
        let json = format_report(&TraceReport::default(), OutputFormat::Json);
        assert!(json.contains("\"runs\": []"));
    }
}
