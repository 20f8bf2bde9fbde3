//! Shared measurement helpers.
//!
//! Measurements are wall-clock [`Duration`]s taken from a monotonic clock and
//! reported in microseconds.

use std::time::{Duration, Instant};

/// Read the current timestamp
#[inline(always)]
pub fn now() -> Instant {
    Instant::now()
}

/// Time elapsed since `start`
#[inline(always)]
pub fn elapsed(start: Instant) -> Duration {
    start.elapsed()
}

/// Convert a duration to fractional microseconds for display
pub fn to_micros(d: Duration) -> f64 {
    d.as_nanos() as f64 / 1e3
}

/// Get the measurement unit name
pub const fn unit_name() -> &'static str {
    "us"
}

/// Get a seed from current time for randomization
pub fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x12345678)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_micros() {
        assert_eq!(to_micros(Duration::from_millis(3)), 3000.0);
        assert_eq!(to_micros(Duration::from_nanos(1500)), 1.5);
        assert_eq!(to_micros(Duration::ZERO), 0.0);
    }

    #[test]
    fn test_elapsed_monotonic() {
        let start = now();
        let a = elapsed(start);
        let b = elapsed(start);
        assert!(b >= a);
    }
}
