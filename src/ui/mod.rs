//! Terminal rendering: panel assembly on top of ratatui.
//!
//! One module per panel; [`render`] lays out the header plus the 2×3
//! grid and delegates. Panels are pure functions of the [`App`] state -
//! a degraded subsystem renders an empty or placeholder section, never
//! an error.

pub mod common;
pub mod cpu;
pub mod disk;
pub mod memory;
pub mod network;
pub mod processes;
pub mod temps;
pub mod theme;

pub use theme::Theme;

use ratatui::{
    layout::{Constraint, Layout},
    Frame,
};

use crate::app::App;

/// Header bar height in rows.
const HEADER_HEIGHT: u16 = 3;

/// Render the full dashboard for this tick.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let rows = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Fill(3),
        Constraint::Fill(2),
    ])
    .split(area);

    common::render_header(frame, app, rows[0]);

    let top = Layout::horizontal([
        Constraint::Fill(3),
        Constraint::Fill(2),
        Constraint::Fill(2),
    ])
    .split(rows[1]);

    cpu::render(frame, app, top[0]);
    memory::render(frame, app, top[1]);
    temps::render(frame, app, top[2]);

    let bottom = Layout::horizontal([
        Constraint::Fill(3),
        Constraint::Fill(2),
        Constraint::Fill(2),
    ])
    .split(rows[2]);

    processes::render(frame, app, bottom[0]);
    network::render(frame, app, bottom[1]);
    disk::render(frame, app, bottom[2]);

    if app.show_help {
        common::render_help(frame, app, area);
    }
}
