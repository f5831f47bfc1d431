//! Julian Day arithmetic.
//!
//! Calendar conversion follows the standard Gregorian algorithm
//! (Meeus, "Astronomical Algorithms", ch. 7). Instants cross into and out of
//! `chrono` with millisecond resolution.

use chrono::{DateTime, TimeZone, Utc};

use crate::error::TimeError;

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Day of the Unix epoch (1970-01-01 00:00 UTC).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

pub const SECONDS_PER_DAY: f64 = 86_400.0;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Julian Day for a Gregorian calendar date with fractional day.
///
/// `day` may carry a fraction: `15.25` is the 15th at 06:00.
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = (y as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor() + day + b
        - 1524.5
}

/// Gregorian calendar date for a Julian Day.
///
/// Returns `(year, month, day_with_fraction)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;
    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    (year as i32, month as u32, day)
}

/// Julian centuries elapsed since J2000.0.
pub fn centuries_since_j2000(jd: f64) -> f64 {
    (jd - J2000_JD) / 36_525.0
}

/// Julian Day (UT) of a UTC instant.
pub fn datetime_to_jd(instant: DateTime<Utc>) -> f64 {
    UNIX_EPOCH_JD + instant.timestamp_millis() as f64 / MILLIS_PER_DAY
}

/// UTC instant of a Julian Day (UT), rounded to the millisecond.
pub fn jd_to_datetime(jd: f64) -> Result<DateTime<Utc>, TimeError> {
    if !jd.is_finite() {
        return Err(TimeError::OutOfRange(jd));
    }
    let millis = ((jd - UNIX_EPOCH_JD) * MILLIS_PER_DAY).round();
    if millis.abs() > 8.0e15 {
        return Err(TimeError::OutOfRange(jd));
    }
    Utc.timestamp_millis_opt(millis as i64)
        .single()
        .ok_or(TimeError::OutOfRange(jd))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_calendar() {
        let jd = calendar_to_jd(2000, 1, 1.5);
        assert!((jd - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn meeus_example_7a() {
        // Sputnik launch, 1957 October 4.81
        let jd = calendar_to_jd(1957, 10, 4.81);
        assert!((jd - 2_436_116.31).abs() < 1e-6);
    }

    #[test]
    fn calendar_roundtrip_march() {
        let jd = calendar_to_jd(2025, 3, 14.75);
        let (y, m, d) = jd_to_calendar(jd);
        assert_eq!((y, m), (2025, 3));
        assert!((d - 14.75).abs() < 1e-6);
    }

    #[test]
    fn unix_epoch_matches() {
        let epoch = Utc.timestamp_millis_opt(0).single().expect("epoch");
        assert_eq!(datetime_to_jd(epoch), UNIX_EPOCH_JD);
    }

    #[test]
    fn datetime_keeps_milliseconds() {
        let t = Utc.timestamp_millis_opt(1_735_689_600_123).single().expect("instant");
        let back = jd_to_datetime(datetime_to_jd(t)).expect("valid jd");
        assert_eq!(back.timestamp_millis(), t.timestamp_millis());
    }

    #[test]
    fn non_finite_jd_rejected() {
        assert!(jd_to_datetime(f64::NAN).is_err());
    }
}
