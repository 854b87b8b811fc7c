//! Cumulative counter to instantaneous rate conversion.

use tracing::debug;

/// Derives per-second rates from a monotonically increasing counter by
/// remembering the previous sample.
///
/// The stored value is replaced unconditionally on every sample, even
/// when the counter decreased (reset or overflow) - in that case the
/// computed rate goes negative and is reported as-is; the next sample
/// self-corrects.
#[derive(Debug, Clone, Copy, Default)]
pub struct RateMeter {
    previous: Option<f64>,
}

impl RateMeter {
    pub fn new() -> Self {
        Self { previous: None }
    }

    /// Feed the current cumulative value and the elapsed seconds since
    /// the previous sample; returns the instantaneous rate.
    ///
    /// The very first sample seeds the meter and returns 0 - no delta
    /// is computable yet. A non-positive elapsed time also yields 0.
    pub fn sample(&mut self, cumulative: f64, elapsed_secs: f64) -> f64 {
        let rate = match self.previous {
            Some(previous) if elapsed_secs > 0.0 => {
                let delta = cumulative - previous;
                if delta < 0.0 {
                    debug!(previous, cumulative, "counter went backwards");
                }
                delta / elapsed_secs
            }
            _ => 0.0,
        };
        self.previous = Some(cumulative);
        rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sample_seeds_and_returns_zero() {
        let mut meter = RateMeter::new();
        assert_eq!(meter.sample(1000.0, 1.0), 0.0);
    }

    #[test]
    fn test_second_sample_computes_rate() {
        let mut meter = RateMeter::new();
        meter.sample(1000.0, 1.0);
        assert_eq!(meter.sample(1500.0, 1.0), 500.0);
    }

    #[test]
    fn test_elapsed_scales_rate() {
        let mut meter = RateMeter::new();
        meter.sample(0.0, 1.0);
        assert_eq!(meter.sample(1000.0, 2.0), 500.0);
    }

    #[test]
    fn test_counter_decrease_goes_negative() {
        // Counter reset produces a negative rate; it is reported raw,
        // and the stored value is still replaced.
        let mut meter = RateMeter::new();
        meter.sample(5000.0, 1.0);
        assert_eq!(meter.sample(1000.0, 1.0), -4000.0);
        assert_eq!(meter.sample(2000.0, 1.0), 1000.0);
    }

    #[test]
    fn test_zero_elapsed_yields_zero() {
        let mut meter = RateMeter::new();
        meter.sample(1000.0, 1.0);
        assert_eq!(meter.sample(2000.0, 0.0), 0.0);
        // The stored value was still replaced.
        assert_eq!(meter.sample(3000.0, 1.0), 1000.0);
    }
}
