//! Duration formatting.

use std::time::Duration;

/// Format `d` with the largest unit that keeps the value at or above 1.
///
/// Nanoseconds are printed as integers; larger units with two decimals
/// (three for seconds).
pub fn format_duration(d: Duration) -> String {
    let nanos = d.as_nanos();
    if nanos < 1_000 {
        format!("{nanos} ns")
    } else if nanos < 1_000_000 {
        format!("{:.2} µs", nanos as f64 / 1e3)
    } else if nanos < 1_000_000_000 {
        format!("{:.2} ms", nanos as f64 / 1e6)
    } else {
        format!("{:.3} s", d.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_unit_by_magnitude() {
        assert_eq!(format_duration(Duration::ZERO), "0 ns");
        assert_eq!(format_duration(Duration::from_nanos(999)), "999 ns");
        assert_eq!(format_duration(Duration::from_nanos(1_500)), "1.50 µs");
        assert_eq!(format_duration(Duration::from_micros(2_250)), "2.25 ms");
        assert_eq!(format_duration(Duration::from_millis(1_234)), "1.234 s");
    }
}
