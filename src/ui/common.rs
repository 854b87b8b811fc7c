//! Shared UI pieces: the header bar, the help overlay, and the span
//! renderers that turn bar/sparkline primitives into styled text.

use chrono::Local;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::format::fmt_uptime;
use crate::data::{BarSpec, SeverityBand, SparkCell};

use super::theme::Theme;

/// Sparkline intensity glyphs, blank to full block (9 levels).
const SPARK_GLYPHS: [char; 9] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Bar fill and track glyphs.
const BAR_FILL: char = '━';
const BAR_TRACK: char = '─';

/// Render a bar primitive as styled spans: `filled` cells in the band
/// color, the rest as a muted track. An overfilled bar (unclamped input
/// above 100) simply extends past its nominal width.
pub fn bar_spans(bar: &BarSpec, theme: &Theme) -> Vec<Span<'static>> {
    let track = bar.width.saturating_sub(bar.filled);
    vec![
        Span::styled(
            BAR_FILL.to_string().repeat(bar.filled),
            theme.band_style(bar.band),
        ),
        Span::styled(BAR_TRACK.to_string().repeat(track), theme.muted_style()),
    ]
}

/// Render sparkline cells as styled spans; filler cells use the muted
/// track glyph so an empty history reads as a flat line.
pub fn spark_spans(cells: &[SparkCell], theme: &Theme) -> Vec<Span<'static>> {
    cells
        .iter()
        .map(|cell| match cell.band {
            Some(band) => Span::styled(
                SPARK_GLYPHS[cell.level.min(8) as usize].to_string(),
                theme.band_style(band),
            ),
            None => Span::styled(BAR_TRACK.to_string(), theme.muted_style()),
        })
        .collect()
}

/// Colored percentage readout, e.g. ` 42.3%`.
pub fn percent_span(percent: f64, theme: &Theme) -> Span<'static> {
    Span::styled(
        format!("{percent:5.1}%"),
        theme.band_style(SeverityBand::of(percent)),
    )
}

/// Render the header bar: title, clock, uptime, and quick CPU/MEM
/// readouts with band coloring.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(theme.muted_style());

    let Some(ref data) = app.data else {
        let line = Line::from(vec![
            Span::styled(
                "  SYSTEM DASHBOARD ",
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled("│ loading...", theme.muted_style()),
        ]);
        frame.render_widget(Paragraph::new(line).block(block), area);
        return;
    };

    let now = Local::now().format("%a %b %d  %H:%M:%S").to_string();
    let cpu = data.cpu.average;
    let mem = data.memory.percent;

    let line = Line::from(vec![
        Span::styled(
            "  SYSTEM DASHBOARD ",
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" │ ", theme.muted_style()),
        Span::raw(now),
        Span::styled("  │  up ", theme.muted_style()),
        Span::styled(
            fmt_uptime(data.uptime_secs),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled("  │  CPU ", theme.muted_style()),
        Span::styled(
            format!("{cpu:.0}%"),
            theme.band_style(SeverityBand::of(cpu)),
        ),
        Span::styled("  MEM ", theme.muted_style()),
        Span::styled(
            format!("{mem:.0}%"),
            theme.band_style(SeverityBand::of(mem)),
        ),
        Span::styled("  │  q:quit ?:help", theme.muted_style()),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the dashboard.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let help_text = vec![
        Line::from(vec![Span::styled(
            "Keyboard Shortcuts",
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from("  s         Cycle process sort (cpu/mem/pid)"),
        Line::from("  t         Toggle dark/light theme"),
        Line::from("  ?         Toggle this help"),
        Line::from("  q / Esc   Quit"),
        Line::from("  Ctrl+C    Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.accent));

    let paragraph = Paragraph::new(help_text).block(block);

    // Center the help overlay - responsive to terminal size
    let help_width = 46u16.min(area.width.saturating_sub(4));
    let help_height = 11u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    // Clear the area behind the help
    frame.render_widget(Clear, help_area);
    frame.render_widget(paragraph, help_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sparkline;

    #[test]
    fn test_bar_spans_cover_width() {
        let theme = Theme::dark();
        let spans = bar_spans(&BarSpec::new(50.0, 20), &theme);
        let rendered: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        assert_eq!(rendered, 20);
    }

    #[test]
    fn test_overfilled_bar_extends() {
        let theme = Theme::dark();
        let spans = bar_spans(&BarSpec::new(150.0, 10), &theme);
        let rendered: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        assert_eq!(rendered, 15);
    }

    #[test]
    fn test_empty_sparkline_renders_forty_muted_cells() {
        let theme = Theme::dark();
        let spans = spark_spans(&sparkline(&[], 40), &theme);
        assert_eq!(spans.len(), 40);
        assert!(spans.iter().all(|s| s.content == "─"));
    }
}
