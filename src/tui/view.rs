//! Pure rendering: map App state to ratatui widgets.
//!
//! The bar chart is a custom widget writing block glyphs straight into
//! the buffer. Heights are scaled against the generator's maximum so a
//! bar keeps its size across frames; eighth-blocks give sub-cell
//! resolution. Rendering the same App twice produces the same buffer.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::types::{Algorithm, Highlight, MAX_HEIGHT};

use super::state::{App, RunState};
use super::theme;

/// Partial block glyphs indexed by filled eighths.
const BLOCKS: [&str; 9] = [" ", "▁", "▂", "▃", "▄", "▅", "▆", "▇", "█"];

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the whole screen.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Min(0),    // bars
        Constraint::Length(1), // status
        Constraint::Length(1), // help
    ])
    .split(area);

    frame.render_widget(render_title(app), chunks[0]);

    // Highlights only exist mid-run; idle and sorted states draw plain bars.
    let bars = Bars {
        values: app.bars.values(),
        highlight: app.highlight.as_ref(),
        scale: MAX_HEIGHT.max(app.bars.max()),
    };
    frame.render_widget(bars, chunks[1]);

    frame.render_widget(render_status(app), chunks[2]);
    frame.render_widget(render_help(), chunks[3]);
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

fn render_title(app: &App) -> Paragraph<'static> {
    let badge_style = match app.run {
        RunState::Completed { .. } => theme::STYLE_DONE,
        _ => theme::STYLE_RUNNING,
    };

    Paragraph::new(Line::from(vec![
        Span::styled("sortviz  ", theme::STYLE_TITLE),
        Span::styled(app.algorithm.name(), theme::STYLE_TITLE),
        Span::raw("  "),
        Span::styled(format!("[{}]", app.run.label()), badge_style),
    ]))
}

fn render_status(app: &App) -> Paragraph<'static> {
    Paragraph::new(Span::styled(
        format!("bars: {}  steps: {}", app.bars.len(), app.steps()),
        theme::STYLE_HELP,
    ))
}

fn render_help() -> Paragraph<'static> {
    let mut text: String = Algorithm::ALL
        .iter()
        .map(|a| format!("[{}] {}  ", a.key(), short_name(*a)))
        .collect();
    text.push_str("[r] regenerate  [q] quit");
    Paragraph::new(Span::styled(text, theme::STYLE_HELP))
}

fn short_name(algorithm: Algorithm) -> &'static str {
    match algorithm {
        Algorithm::Selection => "selection",
        Algorithm::Insertion => "insertion",
        Algorithm::Bubble => "bubble",
        Algorithm::Merge => "merge",
        Algorithm::Quick => "quick",
        Algorithm::Heap => "heap",
    }
}

// ============================================================================
// BAR CHART
// ============================================================================

/// Vertical bars, one per value, spread across the area width.
///
/// With fewer columns than bars, several bars share a column. Highlighted
/// bars are drawn last, so they win over plain ones; otherwise the
/// right-most bar wins.
pub struct Bars<'a> {
    pub values: &'a [u32],
    pub highlight: Option<&'a Highlight>,
    /// Value that fills the full height.
    pub scale: u32,
}

impl Bars<'_> {
    fn draw_bar(&self, i: usize, area: Rect, buf: &mut Buffer) {
        let width = area.width as usize;
        let height = area.height as usize;
        let scale = u64::from(self.scale.max(1));

        let (x0, x1) = column_span(i, self.values.len(), width);
        let eighths = (u64::from(self.values[i]) * height as u64 * 8 / scale).min(height as u64 * 8) as usize;
        let style = theme::bar_style(self.highlight.and_then(|h| h.role_of(i)));

        for dx in x0..x1 {
            let x = area.x + dx as u16;
            for row in 0..height {
                let y = area.bottom() - 1 - row as u16;
                let filled = eighths.saturating_sub(row * 8).min(8);
                if let Some(cell) = buf.cell_mut((x, y)) {
                    if filled == 0 {
                        cell.reset();
                    } else {
                        cell.set_symbol(BLOCKS[filled]).set_style(style);
                    }
                }
            }
        }
    }
}

impl Widget for Bars<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let n = self.values.len();
        if n == 0 || area.is_empty() {
            return;
        }

        let lit = |i: &usize| self.highlight.and_then(|h| h.role_of(*i)).is_some();
        for i in (0..n).filter(|i| !lit(i)) {
            self.draw_bar(i, area, buf);
        }
        for i in (0..n).filter(|i| lit(i)) {
            self.draw_bar(i, area, buf);
        }
    }
}

/// Columns `[x0, x1)` occupied by bar `i` of `n` across `width` columns.
///
/// Bars three or more columns wide give up their last column as a gap.
fn column_span(i: usize, n: usize, width: usize) -> (usize, usize) {
    let x0 = i * width / n;
    let x1 = ((i + 1) * width / n).max(x0 + 1).min(width);
    if x1 - x0 >= 3 { (x0, x1 - 1) } else { (x0, x1) }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::update::advance;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::style::Color;

    fn make_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(40, 12);
        Terminal::new(backend).unwrap()
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol().to_string())
            .collect()
    }

    #[test]
    fn idle_app_renders_without_panic() {
        let mut terminal = make_terminal();
        let app = App::new(&Default::default());
        terminal
            .draw(|frame| render(&app, frame))
            .expect("render should not panic");
        assert!(buffer_text(&terminal).contains("[idle]"));
    }

    #[test]
    fn title_shows_algorithm_and_state() {
        let mut terminal = make_terminal();
        let app = App::with_values(vec![3, 1, 2], Algorithm::Quick);
        terminal.draw(|frame| render(&app, frame)).unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("Quick Sort"));
        assert!(text.contains("[running]"));
    }

    #[test]
    fn highlighted_bars_use_role_colors() {
        let mut terminal = make_terminal();
        let mut app = App::with_values(vec![599, 300], Algorithm::Bubble);
        app.highlight = Some(Highlight::pair(0, 1));
        terminal.draw(|frame| render(&app, frame)).unwrap();

        // Chart occupies rows 1..=9; row 9 is its bottom.
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(0, 9)].fg, Color::Red);
        assert_eq!(buffer[(0, 9)].symbol(), "█");
        assert_eq!(buffer[(20, 9)].fg, Color::Blue);
        // 300/599 of 9 rows: top of bar 1 is below the top of bar 0.
        assert_eq!(buffer[(0, 1)].symbol(), "█");
        assert_eq!(buffer[(20, 1)].symbol(), " ");
    }

    #[test]
    fn completed_run_draws_plain_bars() {
        let mut terminal = make_terminal();
        let mut app = App::with_values(vec![599, 500], Algorithm::Bubble);
        while app.run.is_running() {
            advance(&mut app);
        }
        terminal.draw(|frame| render(&app, frame)).unwrap();
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(0, 9)].fg, Color::Indexed(214));
        assert_eq!(buffer[(20, 9)].fg, Color::Indexed(214));
        assert!(buffer_text(&terminal).contains("[sorted]"));
    }

    #[test]
    fn redraw_is_idempotent() {
        let mut terminal = make_terminal();
        let mut app = App::with_values(vec![120, 599, 45, 300, 10], Algorithm::Selection);
        advance(&mut app);

        terminal.draw(|frame| render(&app, frame)).unwrap();
        let first = terminal.backend().buffer().clone();
        terminal.draw(|frame| render(&app, frame)).unwrap();
        let second = terminal.backend().buffer().clone();
        assert_eq!(first, second);
    }

    #[test]
    fn status_shows_step_count() {
        let mut terminal = make_terminal();
        let mut app = App::with_values(vec![5, 4, 3, 2, 1], Algorithm::Bubble);
        for _ in 0..3 {
            advance(&mut app);
        }
        terminal.draw(|frame| render(&app, frame)).unwrap();
        assert!(buffer_text(&terminal).contains("steps: 3"));
    }

    #[test]
    fn more_bars_than_columns_renders() {
        let mut terminal = make_terminal();
        let values: Vec<u32> = (0..200).map(|v| v * 3).collect();
        let app = App::with_values(values, Algorithm::Heap);
        terminal
            .draw(|frame| render(&app, frame))
            .expect("render should not panic");
    }

    #[test]
    fn highlight_survives_a_shared_column() {
        let mut terminal = make_terminal();
        let mut app = App::with_values(vec![599; 80], Algorithm::Merge);
        // Bars 0 and 1 share column 0.
        app.highlight = Some(Highlight::one(0));
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(0, 9)].fg, Color::Red);
        assert_eq!(buffer[(1, 9)].fg, Color::Indexed(214));
    }

    #[test]
    fn column_spans_cover_width_without_overlap() {
        let spans: Vec<_> = (0..4).map(|i| column_span(i, 4, 40)).collect();
        assert_eq!(spans, vec![(0, 9), (10, 19), (20, 29), (30, 39)]);
        // Narrow bars keep every column.
        assert_eq!(column_span(0, 20, 40), (0, 2));
        // Crowded bars share columns.
        assert_eq!(column_span(1, 80, 40), (0, 1));
    }
}
