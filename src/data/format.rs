//! Human-readable formatting of byte counts, rates, and durations.

/// Bytes per binary unit step.
const STEP: f64 = 1024.0;

/// Format a byte count with a binary unit suffix, e.g. `3.2 GB`.
///
/// Negative inputs keep their sign (rates derived from a counter reset
/// can go negative).
pub fn fmt_bytes(bytes: f64) -> String {
    let mut value = bytes;
    for unit in ["B", "KB", "MB", "GB", "TB"] {
        if value.abs() < STEP {
            return format!("{value:.1} {unit}");
        }
        value /= STEP;
    }
    format!("{value:.1} PB")
}

/// Format a byte rate, e.g. `12.4 MB/s`.
pub fn fmt_rate(bytes_per_sec: f64) -> String {
    let mut value = bytes_per_sec;
    for unit in ["B/s", "KB/s", "MB/s", "GB/s"] {
        if value.abs() < STEP {
            return format!("{value:.1} {unit}");
        }
        value /= STEP;
    }
    format!("{value:.1} TB/s")
}

/// Whole gibibytes as a float, for `x.y GB` panel rows.
pub fn gib(bytes: u64) -> f64 {
    bytes as f64 / (STEP * STEP * STEP)
}

/// Format an uptime as `3d 4h 17m`.
pub fn fmt_uptime(secs: u64) -> String {
    let days = secs / 86_400;
    let hours = (secs % 86_400) / 3_600;
    let mins = (secs % 3_600) / 60;
    format!("{days}d {hours}h {mins}m")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_bytes_units() {
        assert_eq!(fmt_bytes(0.0), "0.0 B");
        assert_eq!(fmt_bytes(512.0), "512.0 B");
        assert_eq!(fmt_bytes(2048.0), "2.0 KB");
        assert_eq!(fmt_bytes(3.5 * 1024.0 * 1024.0), "3.5 MB");
        assert_eq!(fmt_bytes(1024.0_f64.powi(4)), "1.0 TB");
    }

    #[test]
    fn test_fmt_bytes_negative() {
        assert_eq!(fmt_bytes(-2048.0), "-2.0 KB");
    }

    #[test]
    fn test_fmt_rate_units() {
        assert_eq!(fmt_rate(100.0), "100.0 B/s");
        assert_eq!(fmt_rate(1536.0), "1.5 KB/s");
    }

    #[test]
    fn test_gib() {
        assert_eq!(gib(16 * 1024 * 1024 * 1024), 16.0);
    }

    #[test]
    fn test_fmt_uptime() {
        assert_eq!(fmt_uptime(0), "0d 0h 0m");
        assert_eq!(fmt_uptime(86_400 + 3_600 * 2 + 60 * 5 + 30), "1d 2h 5m");
    }
}
