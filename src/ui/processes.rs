//! Process panel: top-N table by the active sort key.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Padding, Row, Table},
    Frame,
};

use crate::app::App;
use crate::data::SeverityBand;

/// Process names are cut to this many characters.
const NAME_WIDTH: usize = 20;
/// Cells in the per-row CPU mini-bar.
const MINI_BAR_WIDTH: usize = 8;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let title = format!(" PROCESSES [s:sort {}] ", app.sort.label());
    let block = Block::default()
        .title(Span::styled(
            title,
            Style::default().fg(theme.processes).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.processes))
        .padding(Padding::horizontal(1));

    let Some(ref data) = app.data else {
        frame.render_widget(block, area);
        return;
    };
    let processes = &data.processes;

    let header = Row::new(vec![
        Cell::from("PID"),
        Cell::from("PROCESS"),
        Cell::from("CPU"),
        Cell::from("MEM"),
        Cell::from(""),
    ])
    .height(1)
    .style(theme.table_header);

    let rows: Vec<Row> = processes
        .top
        .iter()
        .map(|process| {
            let cpu_band = SeverityBand::of(process.cpu_percent);
            // Memory share is doubled for banding so a 40% process
            // already reads as critical.
            let mem_band = SeverityBand::of(process.mem_percent * 2.0);

            let mini = "█".repeat(((process.cpu_percent / 10.0) as usize).min(MINI_BAR_WIDTH));
            let name: String = process.name.chars().take(NAME_WIDTH).collect();

            Row::new(vec![
                Cell::from(process.pid.to_string()).style(theme.muted_style()),
                Cell::from(name),
                Cell::from(format!("{:5.1}%", process.cpu_percent))
                    .style(theme.band_style(cpu_band)),
                Cell::from(format!("{:5.1}%", process.mem_percent))
                    .style(theme.band_style(mem_band)),
                Cell::from(mini).style(theme.band_style(cpu_band)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(7),
        Constraint::Fill(1),
        Constraint::Length(8),
        Constraint::Length(8),
        Constraint::Length(10),
    ];

    let footer = Row::new(vec![
        Cell::from(""),
        Cell::from(Span::styled(
            format!("{} active processes", processes.total_active),
            theme.muted_style(),
        )),
        Cell::from(""),
        Cell::from(""),
        Cell::from(""),
    ]);

    let table = Table::new(rows.into_iter().chain(std::iter::once(footer)), widths)
        .header(header)
        .block(block);

    frame.render_widget(table, area);
}
