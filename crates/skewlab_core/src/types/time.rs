//! Time conversion at the kernel boundary.
//!
//! All timestamps cross the boundary as integer milliseconds since the Unix
//! epoch and are converted to year fractions on a fixed 365.2425-day year
//! (31,556,952 seconds). The constant is load-bearing: every consumer of the
//! kernel must observe the same year fraction for the same pair of
//! timestamps, so no calendar or day-count convention is applied.

use chrono::{DateTime, NaiveDate, Utc};

/// Seconds in a 365.2425-day Gregorian mean year.
pub const SECONDS_PER_YEAR: i64 = 31_556_952;

/// Milliseconds in a 365.2425-day Gregorian mean year.
pub const MILLIS_PER_YEAR: f64 = (SECONDS_PER_YEAR * 1000) as f64;

/// Converts a millisecond duration to a year fraction.
///
/// # Examples
/// ```
/// use skewlab_core::types::time::{year_fraction, MILLIS_PER_YEAR};
///
/// assert_eq!(year_fraction(MILLIS_PER_YEAR as i64), 1.0);
/// assert_eq!(year_fraction(0), 0.0);
/// ```
#[inline]
pub fn year_fraction(duration_ms: i64) -> f64 {
    duration_ms as f64 / MILLIS_PER_YEAR
}

/// Year fraction between two millisecond timestamps.
///
/// Negative when `to_ms` precedes `from_ms`; callers validating expiries
/// should reject non-positive results themselves.
///
/// # Examples
/// ```
/// use skewlab_core::types::time::year_fraction_between;
///
/// let one_day_ms = 86_400_000;
/// let t = year_fraction_between(0, one_day_ms);
/// assert!((t - 1.0 / 365.2425).abs() < 1e-12);
/// ```
#[inline]
pub fn year_fraction_between(from_ms: i64, to_ms: i64) -> f64 {
    year_fraction(to_ms - from_ms)
}

/// Current wall-clock time in milliseconds since the Unix epoch.
///
/// The kernel itself never calls this implicitly; valuation timestamps are
/// injected by callers, with this helper as the conventional default.
#[inline]
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Calendar date (UTC) of a millisecond timestamp.
///
/// Used to bucket instrument expirations into volatility-surface rows, which
/// are keyed by date rather than exact timestamp.
///
/// # Examples
/// ```
/// use skewlab_core::types::time::date_of_millis;
///
/// let date = date_of_millis(0).unwrap();
/// assert_eq!(date.to_string(), "1970-01-01");
/// ```
#[inline]
pub fn date_of_millis(timestamp_ms: i64) -> Option<NaiveDate> {
    DateTime::<Utc>::from_timestamp_millis(timestamp_ms).map(|dt| dt.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_year_constant_exact() {
        // 365.2425 days * 86400 s/day
        assert_eq!(SECONDS_PER_YEAR, 31_556_952);
        assert_eq!(MILLIS_PER_YEAR, 31_556_952_000.0);
    }

    #[test]
    fn test_year_fraction_round_numbers() {
        assert_relative_eq!(
            year_fraction(SECONDS_PER_YEAR * 1000 / 4),
            0.25,
            epsilon = 1e-12
        );
        assert_relative_eq!(year_fraction(3_600_000), 3600.0 / 31_556_952.0, epsilon = 1e-15);
    }

    #[test]
    fn test_year_fraction_between_negative() {
        assert!(year_fraction_between(1_000, 0) < 0.0);
    }

    #[test]
    fn test_date_of_millis() {
        // 2021-06-25 08:00:00 UTC
        let date = date_of_millis(1_624_608_000_000).unwrap();
        assert_eq!(date.to_string(), "2021-06-25");
    }

    #[test]
    fn test_date_of_millis_out_of_range() {
        assert!(date_of_millis(i64::MAX).is_none());
    }
}
