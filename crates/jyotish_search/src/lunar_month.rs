//! Amanta lunar months and Adhik Maas.
//!
//! A month opens at the end of an Amavasya (the elongation passing 0°) and
//! is named after the Sun's sidereal sign just after that instant. When the
//! Sun is still in the same sign at the next new moon no Sankranti fell
//! inside the month, which makes it Adhik (intercalary).

use chrono::{Datelike, FixedOffset, NaiveDate};
use jyotish_core::Engine;
use jyotish_time::civil_day_bounds_jd;
use jyotish_vedic_base::{Graha, Masa, Rashi};
use serde::Serialize;
use tracing::debug;

use crate::error::SearchError;
use crate::positions::{MEAN_ELONGATION_RATE, elongation_at, sign_at};
use crate::search_util::bisect_change;
use crate::time_window::TimeWindow;

// Half-width of the bracket around the mean-rate estimate. The true new
// moon stays within about a day of it.
const NEW_MOON_BRACKET_DAYS: f64 = 3.0;

fn waxing(engine: &Engine, jd: f64) -> Result<bool, SearchError> {
    Ok(elongation_at(engine, jd)? < 180.0)
}

fn bisect_new_moon(engine: &Engine, lo: f64, hi: f64) -> Result<f64, SearchError> {
    let mut key = |t: f64| waxing(engine, t);
    if key(lo)? || !key(hi)? {
        return Err(SearchError::NoConvergence("new moon not bracketed"));
    }
    bisect_change(&mut key, lo, hi, &false)
}

/// Most recent new moon (Amavasya end) at or before `jd`.
pub fn prev_new_moon(engine: &Engine, jd: f64) -> Result<f64, SearchError> {
    let e = elongation_at(engine, jd)?;
    let guess = jd - e / MEAN_ELONGATION_RATE;
    let hi = (guess + NEW_MOON_BRACKET_DAYS).min(jd);
    bisect_new_moon(engine, guess - NEW_MOON_BRACKET_DAYS, hi)
}

/// First new moon after `jd`.
pub fn next_new_moon(engine: &Engine, jd: f64) -> Result<f64, SearchError> {
    let e = elongation_at(engine, jd)?;
    let guess = jd + (360.0 - e) / MEAN_ELONGATION_RATE;
    let lo = (guess - NEW_MOON_BRACKET_DAYS).max(jd);
    bisect_new_moon(engine, lo, guess + NEW_MOON_BRACKET_DAYS)
}

/// The Amanta month in force at an instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LunarMonth {
    pub masa: Masa,
    pub name: &'static str,
    pub is_adhik: bool,
    /// Sun's sidereal sign at the opening new moon.
    pub sun_sign: Rashi,
    #[serde(skip)]
    pub start_jd: f64,
    #[serde(skip)]
    pub end_jd: f64,
}

fn month_between(engine: &Engine, start_jd: f64, end_jd: f64) -> Result<LunarMonth, SearchError> {
    let sun_sign = sign_at(engine, start_jd, Graha::Sun)?;
    let closing_sign = sign_at(engine, end_jd, Graha::Sun)?;
    let masa = Masa::from_sun_sign(sun_sign);
    Ok(LunarMonth {
        masa,
        name: masa.name(),
        is_adhik: sun_sign == closing_sign,
        sun_sign,
        start_jd,
        end_jd,
    })
}

pub fn lunar_month_at(engine: &Engine, jd: f64) -> Result<LunarMonth, SearchError> {
    let start = prev_new_moon(engine, jd)?;
    let end = next_new_moon(engine, jd)?;
    month_between(engine, start, end)
}

/// An intercalary month found in a civil year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AdhikMaas {
    pub masa: Masa,
    pub name: &'static str,
    pub window: TimeWindow,
}

/// All Adhik months that open in the civil `year`.
pub fn adhik_maas(engine: &Engine, year: i32, zone: FixedOffset) -> Result<Vec<AdhikMaas>, SearchError> {
    let first = NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(|| SearchError::InvalidInput {
        field: "year",
        reason: format!("{year} is outside the supported calendar"),
    })?;
    let (year_start, _) = civil_day_bounds_jd(first, zone);

    let mut new_moons = Vec::with_capacity(14);
    let mut nm = next_new_moon(engine, year_start)?;
    loop {
        let date = jyotish_time::local_date_of_jd(nm, zone)?;
        new_moons.push(nm);
        // keep the first new moon after the year as the closing bound
        if date.year() > year {
            break;
        }
        nm = next_new_moon(engine, nm + 1.0)?;
    }
    debug!(year, count = new_moons.len(), "new moons collected");

    let mut found = Vec::new();
    for pair in new_moons.windows(2) {
        let month = month_between(engine, pair[0], pair[1])?;
        let opens_in_year = jyotish_time::local_date_of_jd(pair[0], zone)?.year() == year;
        if month.is_adhik && opens_in_year {
            found.push(AdhikMaas {
                masa: month.masa,
                name: month.name,
                window: TimeWindow::from_jd(pair[0], pair[1], zone)?,
            });
        }
    }
    Ok(found)
}
