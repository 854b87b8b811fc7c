//! Memory panel: usage bar, byte breakdown, and the optional swap bar.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::format::gib;
use crate::data::BarSpec;

use super::common::{bar_spans, percent_span};

/// Width of the main usage bar.
const MEM_BAR_WIDTH: usize = 35;
/// Width of the secondary swap bar.
const SWAP_BAR_WIDTH: usize = 20;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let block = Block::default()
        .title(Span::styled(
            " MEMORY ",
            Style::default().fg(theme.memory).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.memory))
        .padding(Padding::uniform(1));

    let Some(ref data) = app.data else {
        frame.render_widget(block, area);
        return;
    };
    let memory = &data.memory;

    let mut usage_spans = bar_spans(&BarSpec::new(memory.percent, MEM_BAR_WIDTH), theme);
    usage_spans.push(Span::raw(" "));
    usage_spans.push(percent_span(memory.percent, theme));

    let mut lines = vec![
        Line::from(usage_spans),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("{:.1}", gib(memory.used)),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(" GB used of ", theme.muted_style()),
            Span::styled(
                format!("{:.1}", gib(memory.total)),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(" GB", theme.muted_style()),
        ]),
        Line::from(vec![
            Span::styled(format!("{:.1}", gib(memory.available)), Style::default().fg(theme.good)),
            Span::styled(" GB available", theme.muted_style()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Cached   ", theme.muted_style()),
            Span::styled(
                format!("{:.1}", gib(memory.cached)),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(" GB   ", theme.muted_style()),
            Span::styled("Buffers  ", theme.muted_style()),
            Span::styled(
                format!("{:.1}", gib(memory.buffers)),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(" GB", theme.muted_style()),
        ]),
    ];

    // Secondary swap bar only when the host has swap capacity.
    if let Some(swap) = memory.swap {
        let mut swap_spans = vec![
            Span::styled("Swap     ", theme.muted_style()),
            Span::raw(format!("{:.1}", gib(swap.used))),
            Span::styled(" / ", theme.muted_style()),
            Span::raw(format!("{:.1}", gib(swap.total))),
            Span::styled(" GB  ", theme.muted_style()),
        ];
        swap_spans.extend(bar_spans(&BarSpec::new(swap.percent, SWAP_BAR_WIDTH), theme));
        swap_spans.push(Span::raw(" "));
        swap_spans.push(percent_span(swap.percent, theme));
        lines.push(Line::from(swap_spans));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
