//! TUI module for the interactive visualizer.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: the App model, run state and actions
//! - `update`: transitions (actions and sort steps)
//! - `view`: pure rendering
//! - `driver`: the frame loop, generic over input and renderer
//! - `run`: effects (terminal lifecycle, crossterm input, key mapping)

pub mod driver;
pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
