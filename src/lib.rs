//! sortviz: watch six classic sorting algorithms run, one step per frame.

pub mod bars;
pub mod error;
pub mod generator;
pub mod logging;
pub mod report;
pub mod sorter;
pub mod tui;
pub mod types;
