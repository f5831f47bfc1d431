//! Local instants and windows in the caller's zone.

use chrono::{DateTime, FixedOffset, Utc};
use jyotish_time::{datetime_to_jd, jd_to_local};
use serde::Serialize;

use crate::error::SearchError;

/// Julian Day (UT) as a local date-time in `zone`, rounded to the
/// millisecond.
pub fn local_instant(jd: f64, zone: FixedOffset) -> Result<DateTime<FixedOffset>, SearchError> {
    Ok(jd_to_local(jd, zone)?)
}

/// A half-open interval of local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeWindow {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
}

impl TimeWindow {
    pub fn from_jd(start_jd: f64, end_jd: f64, zone: FixedOffset) -> Result<Self, SearchError> {
        Ok(Self {
            start: local_instant(start_jd, zone)?,
            end: local_instant(end_jd, zone)?,
        })
    }

    /// A zero-length window at one instant.
    pub fn instant(jd: f64, zone: FixedOffset) -> Result<Self, SearchError> {
        Self::from_jd(jd, jd, zone)
    }

    pub fn duration_minutes(&self) -> f64 {
        (self.end - self.start).num_milliseconds() as f64 / 60_000.0
    }

    pub fn contains(&self, t: DateTime<FixedOffset>) -> bool {
        self.start <= t && t < self.end
    }

    pub fn start_jd(&self) -> f64 {
        datetime_to_jd(self.start.with_timezone(&Utc))
    }

    pub fn end_jd(&self) -> f64 {
        datetime_to_jd(self.end.with_timezone(&Utc))
    }
}
