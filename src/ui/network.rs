//! Network panel: up/down rates with sparklines, connection counts, and
//! the error line that only appears when something actually dropped.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::format::{fmt_bytes, fmt_rate};
use crate::data::sparkline;

use super::common::spark_spans;

/// Width of the rate sparklines.
const NET_SPARK_WIDTH: usize = 30;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let block = Block::default()
        .title(Span::styled(
            " NETWORK ",
            Style::default().fg(theme.network).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.network))
        .padding(Padding::uniform(1));

    let Some(ref data) = app.data else {
        frame.render_widget(block, area);
        return;
    };
    let network = &data.network;

    let mut lines = vec![
        Line::from(vec![
            Span::styled("▲ UP   ", Style::default().fg(theme.good)),
            Span::raw(format!("{:>12}", fmt_rate(network.up_rate))),
            Span::styled("   total: ", theme.muted_style()),
            Span::raw(fmt_bytes(network.total_sent as f64)),
        ]),
        Line::from(vec![
            Span::styled("▼ DOWN ", Style::default().fg(theme.network)),
            Span::raw(format!("{:>12}", fmt_rate(network.down_rate))),
            Span::styled("   total: ", theme.muted_style()),
            Span::raw(fmt_bytes(network.total_recv as f64)),
        ]),
        Line::from(""),
    ];

    let mut up_spans = vec![Span::styled("Upload   ", theme.muted_style())];
    up_spans.extend(spark_spans(
        &sparkline(&app.net_up_history(), NET_SPARK_WIDTH),
        theme,
    ));
    lines.push(Line::from(up_spans));

    let mut down_spans = vec![Span::styled("Download ", theme.muted_style())];
    down_spans.extend(spark_spans(
        &sparkline(&app.net_down_history(), NET_SPARK_WIDTH),
        theme,
    ));
    lines.push(Line::from(down_spans));

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Connections: ", theme.muted_style()),
        Span::styled(
            network.established.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(" established  ", theme.muted_style()),
        Span::styled(
            network.listening.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(" listening", theme.muted_style()),
    ]));

    if network.has_errors() {
        lines.push(Line::from(vec![
            Span::styled("Errors: ", Style::default().fg(theme.critical)),
            Span::raw(format!("in:{} out:{}", network.err_in, network.err_out)),
            Span::styled("  Drops: ", Style::default().fg(theme.critical)),
            Span::raw(format!("{}/{}", network.drop_in, network.drop_out)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
