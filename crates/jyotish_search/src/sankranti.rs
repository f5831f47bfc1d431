//! Sankranti: the Sun's ingress into a sidereal sign.
//!
//! A civil date carries a Sankranti when the Sun's sign at local midnight
//! differs from its sign at the following midnight. The instant is bisected
//! inside that day. Punya kaal runs from the ingress to sunset when the
//! ingress falls before sunset, and otherwise covers the first 96 minutes
//! after the next sunrise. Maha-punya is the first 40 minutes of punya.

use chrono::{Days, FixedOffset, NaiveDate};
use jyotish_core::Engine;
use jyotish_time::civil_day_bounds_jd;
use jyotish_vedic_base::{GeoLocation, Graha, Rashi};
use serde::Serialize;
use tracing::debug;

use crate::error::SearchError;
use crate::panchang::solar_day;
use crate::positions::sign_at;
use crate::search_util::bisect_change;
use crate::time_window::{TimeWindow, local_instant};

const PUNYA_AFTER_SUNRISE_DAYS: f64 = 96.0 / 1440.0;
const MAHA_PUNYA_DAYS: f64 = 40.0 / 1440.0;

/// Days searched by [`find_next_sankranti`].
pub const SANKRANTI_HORIZON_DAYS: u32 = 60;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sankranti {
    pub date: NaiveDate,
    /// Sign the Sun enters.
    pub rashi: Rashi,
    pub name: String,
    pub instant: chrono::DateTime<FixedOffset>,
    pub punya_kaal: TimeWindow,
    pub maha_punya_kaal: TimeWindow,
}

/// Traditional name, e.g. "Makara Sankranti".
pub fn sankranti_name(rashi: Rashi) -> String {
    format!("{} Sankranti", rashi.sanskrit_name())
}

/// The Sankranti falling on `date`, if any.
pub fn sankranti_on(
    engine: &Engine,
    date: NaiveDate,
    location: &GeoLocation,
    zone: FixedOffset,
) -> Result<Option<Sankranti>, SearchError> {
    location.validate()?;
    let (start, end) = civil_day_bounds_jd(date, zone);
    let mut key = |t: f64| sign_at(engine, t, Graha::Sun);
    let from = key(start)?;
    let to = key(end)?;
    if from == to {
        return Ok(None);
    }
    let ingress = bisect_change(&mut key, start, end, &from)?;
    debug!(%date, rashi = to.name(), ingress, "sankranti bracketed");

    let day = solar_day(engine, date, zone, location)?;
    let punya = if ingress <= day.sunset {
        (ingress, day.sunset)
    } else {
        let next = date
            .checked_add_days(Days::new(1))
            .ok_or(SearchError::NoConvergence("date overflow"))?;
        let sr = solar_day(engine, next, zone, location)?.sunrise;
        (sr, sr + PUNYA_AFTER_SUNRISE_DAYS)
    };
    let maha_end = (punya.0 + MAHA_PUNYA_DAYS).min(punya.1);

    Ok(Some(Sankranti {
        date,
        rashi: to,
        name: sankranti_name(to),
        instant: local_instant(ingress, zone)?,
        punya_kaal: TimeWindow::from_jd(punya.0, punya.1, zone)?,
        maha_punya_kaal: TimeWindow::from_jd(punya.0, maha_end, zone)?,
    }))
}

/// First Sankranti on or after `from`, within [`SANKRANTI_HORIZON_DAYS`].
pub fn find_next_sankranti(
    engine: &Engine,
    from: NaiveDate,
    location: &GeoLocation,
    zone: FixedOffset,
) -> Result<Option<Sankranti>, SearchError> {
    for date in from.iter_days().take(SANKRANTI_HORIZON_DAYS as usize) {
        if let Some(s) = sankranti_on(engine, date, location, zone)? {
            return Ok(Some(s));
        }
    }
    Ok(None)
}
