//! TUI color semantics and style constants.
//!
//! Color semantics:
//! - Orange: resting bar
//! - Red: primary highlight (current / write position)
//! - Blue: secondary highlight (comparing)
//! - Green: tertiary highlight (pivot / running minimum)
//! - Dim: help and status text

use ratatui::style::{Color, Modifier, Style};

use crate::types::Role;

// ============================================================================
// BAR STYLES
// ============================================================================

/// Resting bar. 214 is orange in the 256-color palette.
pub const STYLE_BAR: Style = Style::new().fg(Color::Indexed(214));

/// Primary highlight.
pub const STYLE_PRIMARY: Style = Style::new().fg(Color::Red);

/// Secondary highlight.
pub const STYLE_SECONDARY: Style = Style::new().fg(Color::Blue);

/// Tertiary highlight.
pub const STYLE_TERTIARY: Style = Style::new().fg(Color::Green);

/// Bar style for a highlight role (or none).
pub fn bar_style(role: Option<Role>) -> Style {
    match role {
        Some(Role::Primary) => STYLE_PRIMARY,
        Some(Role::Secondary) => STYLE_SECONDARY,
        Some(Role::Tertiary) => STYLE_TERTIARY,
        None => STYLE_BAR,
    }
}

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Title bar / header.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Run state badge while sorting.
pub const STYLE_RUNNING: Style = Style::new().fg(Color::Cyan);

/// Run state badge once sorted.
pub const STYLE_DONE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// TESTS
// ============================================================================
