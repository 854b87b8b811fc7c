//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::data::SeverityBand;

/// Color and style theme for the dashboard.
///
/// Use [`Theme::auto_detect()`] for automatic selection based on the
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// True when this theme targets a dark terminal background.
    pub dark_background: bool,
    /// Color for the Good severity band.
    pub good: Color,
    /// Color for the Warn severity band.
    pub warn: Color,
    /// Color for the Critical severity band.
    pub critical: Color,
    /// Color for muted elements: bar tracks, sparkline padding, hints.
    pub muted: Color,
    /// Accent color for the header title.
    pub accent: Color,
    /// Per-panel border/title accents.
    pub cpu: Color,
    pub memory: Color,
    pub temps: Color,
    pub processes: Color,
    pub network: Color,
    pub disk: Color,
    /// Style for table header rows.
    pub table_header: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            dark_background: true,
            good: Color::Green,
            warn: Color::Yellow,
            critical: Color::Red,
            muted: Color::DarkGray,
            accent: Color::Cyan,
            cpu: Color::Cyan,
            memory: Color::Magenta,
            temps: Color::LightRed,
            processes: Color::Green,
            network: Color::Blue,
            disk: Color::Yellow,
            table_header: Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            dark_background: false,
            good: Color::Green,
            warn: Color::Yellow,
            critical: Color::Red,
            muted: Color::Gray,
            accent: Color::Blue,
            cpu: Color::Blue,
            memory: Color::Magenta,
            temps: Color::Red,
            processes: Color::Green,
            network: Color::Blue,
            disk: Color::DarkGray,
            table_header: Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        // Use terminal-light crate to detect background luminance
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Get the style for a severity band
    pub fn band_style(&self, band: SeverityBand) -> Style {
        match band {
            SeverityBand::Good => Style::default().fg(self.good),
            SeverityBand::Warn => Style::default().fg(self.warn),
            SeverityBand::Critical => {
                Style::default().fg(self.critical).add_modifier(Modifier::BOLD)
            }
        }
    }

    /// Muted style for bar tracks and padding.
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }
}
