//! Bar and sparkline primitives.
//!
//! The derivation engine emits *structured* visual primitives - cell
//! counts and severity bands - and leaves glyph and color choices to the
//! render layer. No color markup is ever embedded in strings.

use super::severity::SeverityBand;

/// Intensity levels a sparkline cell can take (0..=MAX_SPARK_LEVEL maps
/// onto 9 glyphs, from blank to full block).
pub const MAX_SPARK_LEVEL: u8 = 8;

/// A horizontal percentage bar of `width` cells, `filled` of which carry
/// the band color; the remainder render as a muted track.
///
/// The input percent is not clamped: values above 100 overfill (`filled`
/// exceeds `width`) and negative values produce an empty bar. Callers
/// pre-clamp when bounded output is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarSpec {
    pub filled: usize,
    pub width: usize,
    pub band: SeverityBand,
}

impl BarSpec {
    pub fn new(percent: f64, width: usize) -> Self {
        Self::with_band(percent, width, SeverityBand::of(percent))
    }

    /// Bar whose fill comes from `percent` but whose color band was
    /// decided elsewhere (e.g. temperature policy banding).
    pub fn with_band(percent: f64, width: usize, band: SeverityBand) -> Self {
        let filled = (percent / 100.0 * width as f64).floor().max(0.0) as usize;
        Self {
            filled,
            width,
            band,
        }
    }
}

/// One sparkline cell: an intensity level plus the band coloring it.
/// `band == None` marks a muted filler cell (padding for short series).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SparkCell {
    pub level: u8,
    pub band: Option<SeverityBand>,
}

impl SparkCell {
    const FILLER: Self = Self {
        level: 0,
        band: None,
    };
}

/// Map a sample series onto exactly `width` sparkline cells.
///
/// Levels interpolate linearly between the observed min and max of the
/// series (a flat series degenerates to level 0 throughout). Each cell's
/// band comes from the sample itself when the series maximum is a
/// plausible percentage (<= 100), otherwise from its min/max-normalized
/// position. Series shorter than `width` are left-padded with muted
/// filler; longer series keep only the most recent `width` samples.
pub fn sparkline(values: &[f64], width: usize) -> Vec<SparkCell> {
    let start = values.len().saturating_sub(width);
    let window = &values[start..];

    let mut cells = vec![SparkCell::FILLER; width.saturating_sub(window.len())];

    if window.is_empty() {
        return cells;
    }

    let min = window.iter().copied().fold(f64::INFINITY, f64::min);
    let max = window.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = if max > min { max - min } else { 1.0 };

    for &value in window {
        let level = ((value - min) / range * f64::from(MAX_SPARK_LEVEL)) as u8;
        let percent = if max <= 100.0 {
            value
        } else {
            (value - min) / range * 100.0
        };
        cells.push(SparkCell {
            level: level.min(MAX_SPARK_LEVEL),
            band: Some(SeverityBand::of(percent)),
        });
    }

    cells
}
