//! Temperature panel: one row per sensor, banded by the temperature
//! policy (≤40°C always reads Good).

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::BarSpec;

use super::common::bar_spans;

/// Width of each sensor bar.
const TEMP_BAR_WIDTH: usize = 20;
/// Sensor labels are cut to this many characters.
const LABEL_WIDTH: usize = 16;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let block = Block::default()
        .title(Span::styled(
            " TEMPS ",
            Style::default().fg(theme.temps).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.temps))
        .padding(Padding::uniform(1));

    let Some(ref data) = app.data else {
        frame.render_widget(block, area);
        return;
    };

    if data.sensors.is_empty() {
        let placeholder = Paragraph::new(Line::from(Span::styled(
            "No sensors detected",
            theme.muted_style(),
        )))
        .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let lines: Vec<Line> = data
        .sensors
        .iter()
        .map(|sensor| {
            let label: String = sensor.label.chars().take(LABEL_WIDTH).collect();
            // Fill is pre-clamped to the bar width; the band still comes
            // from the policy clamp, not the raw percentage.
            let bar = BarSpec::with_band(sensor.celsius.min(100.0), TEMP_BAR_WIDTH, sensor.band);

            let mut spans = vec![Span::raw(format!("{label:<LABEL_WIDTH$} "))];
            spans.extend(bar_spans(&bar, theme));
            spans.push(Span::styled(
                format!("{:4.0}°C", sensor.celsius),
                theme.band_style(sensor.band),
            ));
            if let Some(high) = sensor.high {
                spans.push(Span::styled(format!("  H:{high:.0}°"), theme.muted_style()));
            }
            if let Some(critical) = sensor.critical {
                spans.push(Span::styled(
                    format!(" C:{critical:.0}°"),
                    theme.muted_style(),
                ));
            }
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
