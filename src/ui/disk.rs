//! Disk panel: per-partition usage bars and lifetime I/O totals.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::format::fmt_bytes;
use crate::data::BarSpec;

use super::common::{bar_spans, percent_span};

/// Width of each partition bar.
const DISK_BAR_WIDTH: usize = 20;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let block = Block::default()
        .title(Span::styled(
            " DISK ",
            Style::default().fg(theme.disk).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.disk))
        .padding(Padding::uniform(1));

    let Some(ref data) = app.data else {
        frame.render_widget(block, area);
        return;
    };
    let disk = &data.disk;

    if disk.partitions.is_empty() && disk.io.is_none() {
        let placeholder =
            Paragraph::new(Line::from(Span::styled("No disks", theme.muted_style()))).block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let mut lines: Vec<Line> = disk
        .partitions
        .iter()
        .map(|partition| {
            let mut spans = vec![Span::styled(
                format!("{:<8}", partition.label),
                Style::default().add_modifier(Modifier::BOLD),
            )];
            spans.extend(bar_spans(&BarSpec::new(partition.percent, DISK_BAR_WIDTH), theme));
            spans.push(Span::raw(" "));
            spans.push(percent_span(partition.percent, theme));
            spans.push(Span::styled(
                format!(
                    "  {} / {}",
                    fmt_bytes(partition.used as f64),
                    fmt_bytes(partition.total as f64)
                ),
                theme.muted_style(),
            ));
            Line::from(spans)
        })
        .collect();

    // Cumulative lifetime totals, shown as-is rather than a rate.
    if let Some(io) = disk.io {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("IO:  ", theme.muted_style()),
            Span::styled("▲ ", Style::default().fg(theme.good)),
            Span::raw(fmt_bytes(io.written_bytes as f64)),
            Span::styled("  ▼ ", Style::default().fg(theme.network)),
            Span::raw(fmt_bytes(io.read_bytes as f64)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
