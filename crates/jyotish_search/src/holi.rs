//! Holika Dahan and Dhulandi.
//!
//! Dahan falls on the Phalguna Purnima evening. Bhadra (the Vishti karana)
//! is avoided: when it covers sunset the following evening is tried, and if
//! Purnima has ended by then the fire is lit after Bhadra ends on the
//! first evening.

use chrono::{Datelike, Days, FixedOffset, NaiveDate};
use jyotish_core::Engine;
use jyotish_vedic_base::{GeoLocation, Masa, PURNIMA};
use serde::Serialize;
use tracing::debug;

use crate::error::SearchError;
use crate::lunar_month::lunar_month_at;
use crate::panchang::{karana_end, solar_day, tithi_end};
use crate::positions::{karana_at, tithi_at};
use crate::time_window::TimeWindow;

const DAHAN_DAYS: f64 = 144.0 / 1440.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Holi {
    pub year: i32,
    pub dahan_date: NaiveDate,
    pub dahan_window: TimeWindow,
    pub dhulandi_date: NaiveDate,
    /// Bhadra covered sunset on the first Purnima evening.
    pub bhadra_at_sunset: bool,
}

fn day_after(date: NaiveDate) -> Result<NaiveDate, SearchError> {
    date.checked_add_days(Days::new(1))
        .ok_or(SearchError::NoConvergence("date overflow"))
}

fn season(year: i32) -> Result<(NaiveDate, NaiveDate), SearchError> {
    let bound = |m, d| {
        NaiveDate::from_ymd_opt(year, m, d).ok_or_else(|| SearchError::InvalidInput {
            field: "year",
            reason: format!("{year} is outside the supported calendar"),
        })
    };
    Ok((bound(2, 20)?, bound(4, 10)?))
}

/// Purnima is active at `sunset` and the Amanta month is Phalguna.
fn phalguna_purnima_at(engine: &Engine, sunset: f64) -> Result<bool, SearchError> {
    if tithi_at(engine, sunset)? != PURNIMA {
        return Ok(false);
    }
    Ok(lunar_month_at(engine, sunset)?.masa == Masa::Phalguna)
}

/// Holi of the civil `year`, searched between 20 February and 10 April.
pub fn holi_for_year(
    engine: &Engine,
    year: i32,
    location: &GeoLocation,
    zone: FixedOffset,
) -> Result<Option<Holi>, SearchError> {
    location.validate()?;
    let (first, last) = season(year)?;

    for date in first.iter_days().take_while(|d| *d <= last) {
        let day = solar_day(engine, date, zone, location)?;
        if !phalguna_purnima_at(engine, day.sunset)? {
            continue;
        }
        let purnima_end = tithi_end(engine, day.sunset)?;
        let bhadra = karana_at(engine, day.sunset)?.karana.is_bhadra();

        let (dahan_date, start, end) = if !bhadra {
            (date, day.sunset, (day.sunset + DAHAN_DAYS).min(purnima_end))
        } else {
            let next = day_after(date)?;
            let next_day = solar_day(engine, next, zone, location)?;
            let next_clear = tithi_at(engine, next_day.sunset)? == PURNIMA
                && !karana_at(engine, next_day.sunset)?.karana.is_bhadra();
            if next_clear {
                let start = next_day.sunset;
                (next, start, (start + DAHAN_DAYS).min(purnima_end))
            } else {
                let bhadra_end = karana_end(engine, day.sunset)?;
                let close = purnima_end.min(next_day.sunrise).max(bhadra_end);
                (date, bhadra_end, close)
            }
        };
        debug!(year, %dahan_date, bhadra, "holika dahan");

        return Ok(Some(Holi {
            year,
            dahan_date,
            dahan_window: TimeWindow::from_jd(start, end, zone)?,
            dhulandi_date: day_after(dahan_date)?,
            bhadra_at_sunset: bhadra,
        }));
    }
    Ok(None)
}

/// First Holi whose Dahan is on or after `from`, looking at the year of
/// `from` and the following one.
pub fn find_next_holi(
    engine: &Engine,
    from: NaiveDate,
    location: &GeoLocation,
    zone: FixedOffset,
) -> Result<Option<Holi>, SearchError> {
    for year in [from.year(), from.year() + 1] {
        if let Some(h) = holi_for_year(engine, year, location, zone)? {
            if h.dahan_date >= from {
                return Ok(Some(h));
            }
        }
    }
    Ok(None)
}
