//! Daily panchang for a civil date and location.
//!
//! Every limb is read at local sunrise (the udaya convention). Tithi,
//! nakshatra and yoga boundaries are found by scanning in 30-minute steps
//! from sunrise and bisecting the step in which the index changes.

use chrono::{Datelike, FixedOffset, NaiveDate};
use jyotish_core::Engine;
use jyotish_vedic_base::{
    GeoLocation, Graha, Vaar, day_slot, moonrise, moonset, nakshatra_from_longitude,
    rashi_from_longitude, sunrise, sunset, tithi_from_elongation, yoga_from_sum,
};
use tracing::debug;

use crate::error::SearchError;
use crate::lunar_month::lunar_month_at;
use crate::panchang_types::{KaranaAtSunrise, NakshatraSpan, PanchangDay, TithiSpan, YogaSpan};
use crate::positions::{
    elongation_at, karana_at, nakshatra_at, sidereal_longitude_at, tithi_at, yoga_at,
};
use crate::search_util::{HALF_HOUR_DAYS, find_change};
use crate::time_window::{TimeWindow, local_instant};

/// Longest tithi, nakshatra or yoga is under 28 hours.
const LIMB_SCAN_STEPS: usize = 64;

/// Half of the Abhijit muhurta, in days.
const ABHIJIT_HALF_DAYS: f64 = 24.0 / 1440.0;

/// Sunrise and sunset of one civil date, as Julian Days (UT).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarDay {
    pub sunrise: f64,
    pub sunset: f64,
}

impl SolarDay {
    pub fn daylight(&self) -> f64 {
        self.sunset - self.sunrise
    }

    pub fn solar_noon(&self) -> f64 {
        0.5 * (self.sunrise + self.sunset)
    }
}

/// Sunrise and sunset, failing with [`SearchError::NoSunrise`] where the
/// Sun stays up or down all day.
pub fn solar_day(
    engine: &Engine,
    date: NaiveDate,
    zone: FixedOffset,
    location: &GeoLocation,
) -> Result<SolarDay, SearchError> {
    let rise = sunrise(engine, date, zone, location)?.ok_or(SearchError::NoSunrise(date))?;
    let set = sunset(engine, date, zone, location)?.ok_or(SearchError::NoSunrise(date))?;
    if set <= rise {
        return Err(SearchError::NoSunrise(date));
    }
    Ok(SolarDay {
        sunrise: rise,
        sunset: set,
    })
}

fn limb_boundary<K, F>(key: F, from: f64, forward: bool, what: &'static str) -> Result<f64, SearchError>
where
    K: PartialEq,
    F: FnMut(f64) -> Result<K, SearchError>,
{
    let step = if forward { HALF_HOUR_DAYS } else { -HALF_HOUR_DAYS };
    find_change(key, from, step, LIMB_SCAN_STEPS)?.ok_or(SearchError::NoConvergence(what))
}

/// Start and end (JD UT) of the tithi prevailing at `jd`.
pub fn tithi_bounds(engine: &Engine, jd: f64) -> Result<(f64, f64), SearchError> {
    let start = limb_boundary(|t| tithi_at(engine, t), jd, false, "tithi start")?;
    Ok((start, tithi_end(engine, jd)?))
}

pub fn tithi_end(engine: &Engine, jd: f64) -> Result<f64, SearchError> {
    limb_boundary(|t| tithi_at(engine, t), jd, true, "tithi end")
}

/// End (JD UT) of the karana prevailing at `jd`.
pub fn karana_end(engine: &Engine, jd: f64) -> Result<f64, SearchError> {
    limb_boundary(|t| Ok(karana_at(engine, t)?.slot), jd, true, "karana end")
}

/// Panchang of `date` at `location`, with times in `zone`.
pub fn panchang(
    engine: &Engine,
    date: NaiveDate,
    location: &GeoLocation,
    zone: FixedOffset,
) -> Result<PanchangDay, SearchError> {
    location.validate()?;
    let day = solar_day(engine, date, zone, location)?;
    let sr = day.sunrise;

    let sun = sidereal_longitude_at(engine, sr, Graha::Sun)?;
    let moon = sidereal_longitude_at(engine, sr, Graha::Moon)?;

    let tithi = tithi_from_elongation(elongation_at(engine, sr)?);
    let (tithi_start, tithi_end) = tithi_bounds(engine, sr)?;

    let nak = nakshatra_from_longitude(moon);
    let nak_end = limb_boundary(|t| nakshatra_at(engine, t), sr, true, "nakshatra end")?;

    let yoga = yoga_from_sum(sun, moon);
    let yoga_end = limb_boundary(|t| yoga_at(engine, t), sr, true, "yoga end")?;

    let karana = karana_at(engine, sr)?;
    let vaar = Vaar::from_weekday(date.weekday());
    let slot = |n: u8| {
        let (a, b) = day_slot(day.sunrise, day.sunset, n);
        TimeWindow::from_jd(a, b, zone)
    };
    let noon = day.solar_noon();

    let moonrise = moonrise(engine, date, zone, location)?
        .map(|jd| local_instant(jd, zone))
        .transpose()?;
    let moonset = moonset(engine, date, zone, location)?
        .map(|jd| local_instant(jd, zone))
        .transpose()?;

    debug!(%date, tithi = tithi.number, nakshatra = nak.nakshatra.name(), "panchang computed");

    Ok(PanchangDay {
        date,
        vaar,
        sunrise: local_instant(day.sunrise, zone)?,
        sunset: local_instant(day.sunset, zone)?,
        moonrise,
        moonset,
        tithi: TithiSpan {
            number: tithi.number,
            name: tithi.name,
            paksha: tithi.paksha,
            start: local_instant(tithi_start, zone)?,
            end: local_instant(tithi_end, zone)?,
        },
        nakshatra: NakshatraSpan {
            nakshatra: nak.nakshatra,
            number: nak.nakshatra.number(),
            name: nak.nakshatra.name(),
            pada: nak.pada,
            end: local_instant(nak_end, zone)?,
        },
        yoga: YogaSpan {
            number: yoga.number,
            name: yoga.name,
            end: local_instant(yoga_end, zone)?,
        },
        karana: KaranaAtSunrise {
            karana: karana.karana,
            name: karana.karana.name(),
            slot: karana.slot,
        },
        rahu_kaal: slot(vaar.rahu_kaal_slot())?,
        gulika_kaal: slot(vaar.gulika_slot())?,
        yamaganda: slot(vaar.yamaganda_slot())?,
        abhijit: TimeWindow::from_jd(noon - ABHIJIT_HALF_DAYS, noon + ABHIJIT_HALF_DAYS, zone)?,
        lunar_month: lunar_month_at(engine, sr)?,
        is_panchak: nak.nakshatra.is_panchak(),
        sun_sign: rashi_from_longitude(sun).rashi,
        moon_sign: rashi_from_longitude(moon).rashi,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use jyotish_time::ist;
    use jyotish_vedic_base::Paksha;

    fn delhi() -> GeoLocation {
        GeoLocation::new(28.6139, 77.2090)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("date")
    }

    #[test]
    fn new_year_2025_in_delhi() {
        let engine = Engine::analytic();
        let p = panchang(&engine, date(2025, 1, 1), &delhi(), ist()).expect("panchang");
        assert_eq!(p.vaar, Vaar::Wednesday);
        assert_eq!(p.sunrise.format("%H").to_string(), "07");
        assert!(p.tithi.start <= p.sunrise && p.sunrise < p.tithi.end);
        assert!(p.nakshatra.end > p.sunrise);
        assert!(p.yoga.end > p.sunrise);
        assert_eq!(p.tithi.paksha == Paksha::Shukla, p.tithi.number <= 15);
        assert!((p.abhijit.duration_minutes() - 48.0).abs() < 0.01);
        let rahu = p.rahu_kaal.duration_minutes();
        let day = (p.sunset - p.sunrise).num_milliseconds() as f64 / 60_000.0;
        assert!((rahu - day / 8.0).abs() < 0.01);
        // Wednesday: Rahu Kaal is the fifth eighth
        assert!(p.rahu_kaal.start > p.abhijit.start);
    }

    #[test]
    fn full_moon_day_is_purnima() {
        let engine = Engine::analytic();
        // Purnima runs from 2025-03-13 10:35 to 2025-03-14 12:23 IST
        let p = panchang(&engine, date(2025, 3, 14), &delhi(), ist()).expect("panchang");
        assert_eq!(p.tithi.number, 15);
        assert_eq!(p.tithi.name, "Purnima");
        assert_eq!(p.tithi.end.format("%Y-%m-%d").to_string(), "2025-03-14");
    }

    #[test]
    fn polar_night_has_no_panchang() {
        let engine = Engine::analytic();
        let svalbard = GeoLocation::new(78.2, 15.6);
        let r = panchang(&engine, date(2024, 12, 21), &svalbard, ist());
        assert!(matches!(r, Err(SearchError::NoSunrise(_))));
    }

    #[test]
    fn invalid_location_is_rejected() {
        let engine = Engine::analytic();
        let r = panchang(&engine, date(2025, 1, 1), &GeoLocation::new(95.0, 0.0), ist());
        assert!(matches!(r, Err(SearchError::Vedic(_))));
    }

    #[test]
    fn tithi_bounds_bracket_the_instant() {
        let engine = Engine::analytic();
        let jd = 2_460_676.5;
        let (start, end) = tithi_bounds(&engine, jd).expect("bounds");
        assert!(start < jd && jd < end);
        let hours = (end - start) * 24.0;
        assert!((19.0..27.0).contains(&hours), "{hours}");
    }
}
