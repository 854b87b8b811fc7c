//! CPU panel: per-core bars, aggregate average with sparkline, and the
//! frequency/cores/load readout.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::{sparkline, BarSpec, SeverityBand, HISTORY_LEN};

use super::common::{bar_spans, percent_span, spark_spans};

/// Width of each per-core bar.
const CORE_BAR_WIDTH: usize = 25;
/// Cores paired per row. Presentation policy, not an engine rule.
const CORES_PER_ROW: usize = 2;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let block = Block::default()
        .title(Span::styled(
            " CPU ",
            Style::default().fg(theme.cpu).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.cpu))
        .padding(Padding::uniform(1));

    let Some(ref data) = app.data else {
        frame.render_widget(block, area);
        return;
    };
    let cpu = &data.cpu;

    // Wider core index column once the host has 10+ cores.
    let index_width = if cpu.core_count >= 10 { 3 } else { 2 };

    let mut lines: Vec<Line> = Vec::new();
    for (row, cores) in cpu.per_core.chunks(CORES_PER_ROW).enumerate() {
        let mut spans: Vec<Span> = Vec::new();
        for (i, &percent) in cores.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("   "));
            }
            let core = row * CORES_PER_ROW + i;
            spans.push(Span::styled(
                format!("C{core:<index_width$}"),
                theme.muted_style(),
            ));
            spans.extend(bar_spans(&BarSpec::new(percent, CORE_BAR_WIDTH), theme));
            spans.push(Span::raw(" "));
            spans.push(percent_span(percent, theme));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));

    // Aggregate average plus its rolling sparkline.
    let mut avg_spans = vec![Span::styled(
        "AVG ",
        Style::default().add_modifier(Modifier::BOLD),
    )];
    avg_spans.extend(bar_spans(&BarSpec::new(cpu.average, CORE_BAR_WIDTH), theme));
    avg_spans.push(Span::raw(" "));
    avg_spans.push(percent_span(cpu.average, theme));
    avg_spans.push(Span::raw("  "));
    avg_spans.extend(spark_spans(
        &sparkline(&app.cpu_history(), HISTORY_LEN),
        theme,
    ));
    lines.push(Line::from(avg_spans));

    let mut info_spans: Vec<Span> = Vec::new();
    if let Some(freq) = cpu.frequency_mhz {
        info_spans.push(Span::styled("Freq: ", theme.muted_style()));
        info_spans.push(Span::styled(
            format!("{freq}"),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        info_spans.push(Span::styled(" MHz", theme.muted_style()));
        info_spans.push(Span::styled("  │  ", theme.muted_style()));
    }
    info_spans.push(Span::styled("Cores: ", theme.muted_style()));
    info_spans.push(Span::styled(
        format!("{}", cpu.core_count),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    info_spans.push(Span::styled("  │  ", theme.muted_style()));
    info_spans.push(Span::styled("Load: ", theme.muted_style()));
    info_spans.push(Span::styled(
        format!("{:.2}", cpu.load_avg.0),
        theme.band_style(SeverityBand::of(cpu.load_percent)),
    ));
    info_spans.push(Span::styled(" / ", theme.muted_style()));
    info_spans.push(Span::raw(format!("{:.2}", cpu.load_avg.1)));
    info_spans.push(Span::styled(" / ", theme.muted_style()));
    info_spans.push(Span::raw(format!("{:.2}", cpu.load_avg.2)));
    lines.push(Line::from(info_spans));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
