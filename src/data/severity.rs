//! Severity banding of percentage values.
//!
//! Every color decision in the dashboard goes through [`SeverityBand`]:
//! a percentage is classified once, and the renderer maps the band to a
//! theme color. Bands are recomputed from scratch every tick.

/// Severity classification of a percentage value.
///
/// Boundary values belong to the higher band: exactly 50 is `Warn`,
/// exactly 80 is `Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SeverityBand {
    Good,
    Warn,
    Critical,
}

/// Warn threshold (percent).
pub const WARN_AT: f64 = 50.0;
/// Critical threshold (percent).
pub const CRITICAL_AT: f64 = 80.0;

impl SeverityBand {
    /// Classify a percentage. Total over all finite inputs; negative
    /// values land in `Good`.
    pub fn of(percent: f64) -> Self {
        if percent >= CRITICAL_AT {
            SeverityBand::Critical
        } else if percent >= WARN_AT {
            SeverityBand::Warn
        } else {
            SeverityBand::Good
        }
    }
}

/// Band a temperature reading in Celsius.
///
/// The literal reading is used as the percent-equivalent input, except
/// that readings at or below 40°C are clamped to 0 so idle sensors
/// always show as `Good`.
pub fn temperature_band(celsius: f64) -> SeverityBand {
    SeverityBand::of(if celsius > 40.0 { celsius } else { 0.0 })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(SeverityBand::of(0.0), SeverityBand::Good);
        assert_eq!(SeverityBand::of(49.9), SeverityBand::Good);
        assert_eq!(SeverityBand::of(50.0), SeverityBand::Warn);
        assert_eq!(SeverityBand::of(79.9), SeverityBand::Warn);
        assert_eq!(SeverityBand::of(80.0), SeverityBand::Critical);
        assert_eq!(SeverityBand::of(100.0), SeverityBand::Critical);
    }

    #[test]
    fn test_band_out_of_range_inputs() {
        assert_eq!(SeverityBand::of(-5.0), SeverityBand::Good);
        assert_eq!(SeverityBand::of(250.0), SeverityBand::Critical);
    }

    #[test]
    fn test_band_ordering() {
        assert!(SeverityBand::Good < SeverityBand::Warn);
        assert!(SeverityBand::Warn < SeverityBand::Critical);
    }

    #[test]
    fn test_temperature_clamp() {
        // At or below 40°C the banding input is clamped to zero.
        assert_eq!(temperature_band(35.0), SeverityBand::Good);
        assert_eq!(temperature_band(40.0), SeverityBand::Good);
        // Above 40°C the literal reading is banded directly.
        assert_eq!(temperature_band(55.0), SeverityBand::Warn);
        assert_eq!(temperature_band(85.0), SeverityBand::Critical);
    }
}
