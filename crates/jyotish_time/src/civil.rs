//! Civil-time boundary.
//!
//! Callers speak in civil dates, local clock times and fixed UTC offsets;
//! the engine speaks in Julian Days (UT). Everything location-bound defaults
//! to Indian Standard Time (+05:30).

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Offset, TimeZone, Utc};

use crate::error::TimeError;
use crate::julian::{datetime_to_jd, jd_to_datetime};

/// IST offset from UTC in seconds (+05:30).
pub const IST_OFFSET_SECONDS: i32 = 19_800;

const MAX_OFFSET_MINUTES: i32 = 14 * 60;

/// The Indian Standard Time zone.
pub fn ist() -> FixedOffset {
    FixedOffset::east_opt(IST_OFFSET_SECONDS).unwrap_or_else(|| Utc.fix())
}

/// Build a fixed zone from an offset in minutes east of UTC.
pub fn zone_from_minutes(minutes: i32) -> Result<FixedOffset, TimeError> {
    if minutes.abs() > MAX_OFFSET_MINUTES {
        return Err(TimeError::InvalidOffset(minutes));
    }
    FixedOffset::east_opt(minutes * 60).ok_or(TimeError::InvalidOffset(minutes))
}

/// Parse an ISO `YYYY-MM-DD` civil date.
pub fn parse_date(s: &str) -> Result<NaiveDate, TimeError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| TimeError::InvalidDate(s.into()))
}

/// Parse a local clock time, `HH:MM` or `HH:MM:SS`.
pub fn parse_time(s: &str) -> Result<NaiveTime, TimeError> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|_| TimeError::InvalidTime(s.into()))
}

/// Julian Day (UT) of a local civil date and clock time in `zone`.
pub fn local_datetime_to_jd(date: NaiveDate, time: NaiveTime, zone: FixedOffset) -> f64 {
    let local = date.and_time(time);
    let utc = local - chrono::Duration::seconds(i64::from(zone.local_minus_utc()));
    datetime_to_jd(Utc.from_utc_datetime(&utc))
}

/// Julian Days (UT) of local midnight at the start of `date` and of the
/// following day.
pub fn civil_day_bounds_jd(date: NaiveDate, zone: FixedOffset) -> (f64, f64) {
    let start = local_datetime_to_jd(date, NaiveTime::default(), zone);
    (start, start + 1.0)
}

/// Express a Julian Day (UT) as a local date-time in `zone`.
pub fn jd_to_local(jd: f64, zone: FixedOffset) -> Result<DateTime<FixedOffset>, TimeError> {
    Ok(jd_to_datetime(jd)?.with_timezone(&zone))
}

/// Local civil date in `zone` on which a Julian Day (UT) falls.
pub fn local_date_of_jd(jd: f64, zone: FixedOffset) -> Result<NaiveDate, TimeError> {
    Ok(jd_to_local(jd, zone)?.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn ist_is_five_thirty() {
        assert_eq!(ist().local_minus_utc(), 19_800);
    }

    #[test]
    fn ist_midnight_is_previous_utc_evening() {
        let (start, end) = civil_day_bounds_jd(date(2025, 10, 5), ist());
        let utc = jd_to_datetime(start).expect("valid");
        assert_eq!(utc.date_naive(), date(2025, 10, 4));
        assert_eq!((utc.hour(), utc.minute()), (18, 30));
        assert!((end - start - 1.0).abs() < 1e-12);
    }

    #[test]
    fn local_roundtrip() {
        let t = NaiveTime::from_hms_opt(23, 1, 0).expect("valid time");
        let jd = local_datetime_to_jd(date(1997, 8, 16), t, ist());
        let local = jd_to_local(jd, ist()).expect("valid");
        assert_eq!(local.date_naive(), date(1997, 8, 16));
        assert_eq!((local.hour(), local.minute()), (23, 1));
    }

    #[test]
    fn parses_iso_date_and_clock_time() {
        assert_eq!(parse_date("2025-10-05").expect("date"), date(2025, 10, 5));
        assert!(parse_date("2025-02-30").is_err());
        assert!(parse_date("05/10/2025").is_err());
        assert_eq!(
            parse_time("23:01").expect("time"),
            NaiveTime::from_hms_opt(23, 1, 0).expect("valid")
        );
        assert!(parse_time("07:15:30").is_ok());
        assert!(parse_time("25:00").is_err());
    }

    #[test]
    fn offsets_are_bounded() {
        assert!(zone_from_minutes(330).is_ok());
        assert!(zone_from_minutes(-300).is_ok());
        assert_eq!(zone_from_minutes(900), Err(TimeError::InvalidOffset(900)));
    }

    #[test]
    fn local_date_crosses_midnight() {
        let jd = local_datetime_to_jd(
            date(2025, 1, 1),
            NaiveTime::from_hms_opt(0, 10, 0).expect("valid"),
            ist(),
        );
        assert_eq!(local_date_of_jd(jd, ist()).expect("valid"), date(2025, 1, 1));
        assert_eq!(
            local_date_of_jd(jd, Utc.fix()).expect("valid"),
            date(2024, 12, 31)
        );
    }
}
