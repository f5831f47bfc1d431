//! Vrat (fast-day) detectors.
//!
//! Each detector answers for one civil date. Tithi-based days use the
//! udaya rule: the tithi prevailing at sunrise names the day, and a tithi
//! that begins and ends between two sunrises (kshaya) is observed on the
//! day it begins. The others sample a single instant of the day: sunset for
//! Pradosh, moonrise for Sankashti, the madhyahna midpoint for Vinayaka and
//! the nishita midpoint for Shivratri.

use chrono::{Datelike, Days, FixedOffset, NaiveDate};
use jyotish_core::Engine;
use jyotish_vedic_base::{GeoLocation, Masa, Vaar, moonrise};
use tracing::{debug, warn};

use crate::error::SearchError;
use crate::lunar_month::lunar_month_at;
use crate::panchang::{SolarDay, solar_day, tithi_bounds, tithi_end};
use crate::positions::tithi_at;
use crate::time_window::TimeWindow;
use crate::vrat_types::{VratKind, VratObservance};

/// Days walked by [`find_next_vrat`].
pub const VRAT_HORIZON_DAYS: u32 = 60;

const PRADOSH_DAYS: f64 = 144.0 / 1440.0;
const NISHITA_HALF_DAYS: f64 = 24.0 / 1440.0;
// Offset past a tithi end that lands safely inside the following tithi.
const PAST_BOUNDARY_DAYS: f64 = 1.0 / 1440.0;

const SHUKLA_EKADASHI: u8 = 11;
const KRISHNA_EKADASHI: u8 = 26;
const SHUKLA_CHATURTHI: u8 = 4;
const KRISHNA_CHATURTHI: u8 = 19;
const KRISHNA_CHATURDASHI: u8 = 29;
const PRADOSH_TITHIS: [u8; 2] = [13, 28];

fn next_date(date: NaiveDate) -> Result<NaiveDate, SearchError> {
    date.checked_add_days(Days::new(1))
        .ok_or(SearchError::NoConvergence("date overflow"))
}

struct TithiDay {
    number: u8,
    start: f64,
    end: f64,
    kshaya: bool,
}

/// The target tithi owning `date` under the udaya/kshaya rule.
fn udaya_tithi(
    engine: &Engine,
    date: NaiveDate,
    location: &GeoLocation,
    zone: FixedOffset,
    targets: &[u8],
) -> Result<Option<TithiDay>, SearchError> {
    let sr = solar_day(engine, date, zone, location)?.sunrise;
    let next_sr = solar_day(engine, next_date(date)?, zone, location)?.sunrise;

    let at_sunrise = tithi_at(engine, sr)?;
    let (start, end) = tithi_bounds(engine, sr)?;
    if targets.contains(&at_sunrise) {
        return Ok(Some(TithiDay {
            number: at_sunrise,
            start,
            end,
            kshaya: false,
        }));
    }
    if end >= next_sr {
        return Ok(None);
    }

    let following = at_sunrise % 30 + 1;
    if !targets.contains(&following) {
        return Ok(None);
    }
    let following_end = tithi_end(engine, end + PAST_BOUNDARY_DAYS)?;
    if following_end < next_sr {
        debug!(%date, tithi = following, "kshaya tithi");
        return Ok(Some(TithiDay {
            number: following,
            start: end,
            end: following_end,
            kshaya: true,
        }));
    }
    Ok(None)
}

fn tithi_observance(
    engine: &Engine,
    date: NaiveDate,
    location: &GeoLocation,
    zone: FixedOffset,
    kind: VratKind,
    targets: &[u8],
    name: impl Fn(u8) -> String,
) -> Result<Option<VratObservance>, SearchError> {
    let Some(day) = udaya_tithi(engine, date, location, zone, targets)? else {
        return Ok(None);
    };
    Ok(Some(VratObservance {
        kind,
        name: name(day.number),
        date,
        tithi: day.number,
        window: TimeWindow::from_jd(day.start, day.end, zone)?,
        kshaya: day.kshaya,
    }))
}

pub fn detect_ekadashi(
    engine: &Engine,
    date: NaiveDate,
    location: &GeoLocation,
    zone: FixedOffset,
) -> Result<Option<VratObservance>, SearchError> {
    tithi_observance(
        engine,
        date,
        location,
        zone,
        VratKind::Ekadashi,
        &[SHUKLA_EKADASHI, KRISHNA_EKADASHI],
        |n| {
            if n == SHUKLA_EKADASHI {
                "Shukla Ekadashi".to_string()
            } else {
                "Krishna Ekadashi".to_string()
            }
        },
    )
}

pub fn detect_purnima(
    engine: &Engine,
    date: NaiveDate,
    location: &GeoLocation,
    zone: FixedOffset,
) -> Result<Option<VratObservance>, SearchError> {
    tithi_observance(
        engine,
        date,
        location,
        zone,
        VratKind::Purnima,
        &[jyotish_vedic_base::PURNIMA],
        |_| VratKind::Purnima.name().to_string(),
    )
}

pub fn detect_amavasya(
    engine: &Engine,
    date: NaiveDate,
    location: &GeoLocation,
    zone: FixedOffset,
) -> Result<Option<VratObservance>, SearchError> {
    tithi_observance(
        engine,
        date,
        location,
        zone,
        VratKind::Amavasya,
        &[jyotish_vedic_base::AMAVASYA],
        |_| VratKind::Amavasya.name().to_string(),
    )
}

/// Weekday-qualified Pradosh name.
pub fn pradosh_name(vaar: Vaar) -> &'static str {
    match vaar {
        Vaar::Monday => "Soma Pradosh",
        Vaar::Tuesday => "Bhauma Pradosh",
        Vaar::Saturday => "Shani Pradosh",
        _ => "Pradosh",
    }
}

/// Trayodashi (13 or 28) prevailing at sunset.
pub fn detect_pradosh(
    engine: &Engine,
    date: NaiveDate,
    location: &GeoLocation,
    zone: FixedOffset,
) -> Result<Option<VratObservance>, SearchError> {
    let day = solar_day(engine, date, zone, location)?;
    let tithi = tithi_at(engine, day.sunset)?;
    if !PRADOSH_TITHIS.contains(&tithi) {
        return Ok(None);
    }
    let vaar = Vaar::from_weekday(date.weekday());
    Ok(Some(VratObservance {
        kind: VratKind::Pradosh,
        name: pradosh_name(vaar).to_string(),
        date,
        tithi,
        window: TimeWindow::from_jd(day.sunset, day.sunset + PRADOSH_DAYS, zone)?,
        kshaya: false,
    }))
}

/// Krishna Chaturthi prevailing at moonrise. Days without a moonrise never
/// qualify.
pub fn detect_sankashti(
    engine: &Engine,
    date: NaiveDate,
    location: &GeoLocation,
    zone: FixedOffset,
) -> Result<Option<VratObservance>, SearchError> {
    location.validate()?;
    let Some(rise) = moonrise(engine, date, zone, location)? else {
        return Ok(None);
    };
    let tithi = tithi_at(engine, rise)?;
    if tithi != KRISHNA_CHATURTHI {
        return Ok(None);
    }
    Ok(Some(VratObservance {
        kind: VratKind::Sankashti,
        name: VratKind::Sankashti.name().to_string(),
        date,
        tithi,
        window: TimeWindow::instant(rise, zone)?,
        kshaya: false,
    }))
}

/// Madhyahna: the third fifth of daylight.
pub fn madhyahna(day: &SolarDay) -> (f64, f64) {
    let fifth = day.daylight() / 5.0;
    (day.sunrise + 2.0 * fifth, day.sunrise + 3.0 * fifth)
}

/// Shukla Chaturthi prevailing at the madhyahna midpoint.
pub fn detect_vinayaka(
    engine: &Engine,
    date: NaiveDate,
    location: &GeoLocation,
    zone: FixedOffset,
) -> Result<Option<VratObservance>, SearchError> {
    let day = solar_day(engine, date, zone, location)?;
    let (a, b) = madhyahna(&day);
    let tithi = tithi_at(engine, 0.5 * (a + b))?;
    if tithi != SHUKLA_CHATURTHI {
        return Ok(None);
    }
    Ok(Some(VratObservance {
        kind: VratKind::Vinayaka,
        name: VratKind::Vinayaka.name().to_string(),
        date,
        tithi,
        window: TimeWindow::from_jd(a, b, zone)?,
        kshaya: false,
    }))
}

/// Krishna Chaturdashi prevailing at the nishita midpoint of the night
/// following `date`. Maha Shivratri in the Amanta month Magha.
pub fn detect_shivratri(
    engine: &Engine,
    date: NaiveDate,
    location: &GeoLocation,
    zone: FixedOffset,
) -> Result<Option<VratObservance>, SearchError> {
    let day = solar_day(engine, date, zone, location)?;
    let next_sr = solar_day(engine, next_date(date)?, zone, location)?.sunrise;
    let mid = 0.5 * (day.sunset + next_sr);
    let tithi = tithi_at(engine, mid)?;
    if tithi != KRISHNA_CHATURDASHI {
        return Ok(None);
    }
    let month = lunar_month_at(engine, mid)?;
    let name = if month.masa == Masa::Magha && !month.is_adhik {
        "Maha Shivratri"
    } else {
        "Masik Shivratri"
    };
    Ok(Some(VratObservance {
        kind: VratKind::Shivratri,
        name: name.to_string(),
        date,
        tithi,
        window: TimeWindow::from_jd(mid - NISHITA_HALF_DAYS, mid + NISHITA_HALF_DAYS, zone)?,
        kshaya: false,
    }))
}

/// Runs the detector for `kind` on one date.
pub fn detect_vrat(
    kind: VratKind,
    engine: &Engine,
    date: NaiveDate,
    location: &GeoLocation,
    zone: FixedOffset,
) -> Result<Option<VratObservance>, SearchError> {
    match kind {
        VratKind::Ekadashi => detect_ekadashi(engine, date, location, zone),
        VratKind::Purnima => detect_purnima(engine, date, location, zone),
        VratKind::Amavasya => detect_amavasya(engine, date, location, zone),
        VratKind::Pradosh => detect_pradosh(engine, date, location, zone),
        VratKind::Sankashti => detect_sankashti(engine, date, location, zone),
        VratKind::Vinayaka => detect_vinayaka(engine, date, location, zone),
        VratKind::Shivratri => detect_shivratri(engine, date, location, zone),
    }
}

/// First observance of `kind` on or after `from`, walking day by day for
/// at most [`VRAT_HORIZON_DAYS`].
pub fn find_next_vrat(
    kind: VratKind,
    engine: &Engine,
    from: NaiveDate,
    location: &GeoLocation,
    zone: FixedOffset,
) -> Result<Option<VratObservance>, SearchError> {
    location.validate()?;
    for date in from.iter_days().take(VRAT_HORIZON_DAYS as usize) {
        if let Some(found) = detect_vrat(kind, engine, date, location, zone)? {
            return Ok(Some(found));
        }
    }
    warn!(kind = kind.name(), %from, "no observance within the horizon");
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jyotish_time::ist;

    fn delhi() -> GeoLocation {
        GeoLocation::new(28.6139, 77.2090)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("date")
    }

    fn next(kind: VratKind, from: NaiveDate) -> VratObservance {
        find_next_vrat(kind, &Engine::analytic(), from, &delhi(), ist())
            .expect("search")
            .expect("observance")
    }

    #[test]
    fn pausha_putrada_ekadashi_2025() {
        // Shukla Ekadashi 2025-01-09 12:22 to 2025-01-10 10:19 IST
        let e = next(VratKind::Ekadashi, date(2025, 1, 1));
        assert_eq!(e.date, date(2025, 1, 10));
        assert_eq!(e.tithi, 11);
        assert_eq!(e.name, "Shukla Ekadashi");
        assert!(!e.kshaya);
        assert!(e.window.start < e.window.end);
    }

    #[test]
    fn shani_pradosh_2025() {
        // Trayodashi covers the evening of Saturday 2025-01-11
        let p = next(VratKind::Pradosh, date(2025, 1, 1));
        assert_eq!(p.date, date(2025, 1, 11));
        assert_eq!(p.name, "Shani Pradosh");
        assert!((p.window.duration_minutes() - 144.0).abs() < 0.01);
    }

    #[test]
    fn purnima_follows_sunrise() {
        let engine = Engine::analytic();
        // Purnima 2025-03-13 10:35 to 2025-03-14 12:23 IST
        let before = detect_purnima(&engine, date(2025, 3, 13), &delhi(), ist()).expect("13th");
        assert!(before.is_none());
        let on = detect_purnima(&engine, date(2025, 3, 14), &delhi(), ist())
            .expect("14th")
            .expect("purnima");
        assert_eq!(on.tithi, 15);
        assert_eq!(on.window.start.format("%Y-%m-%d").to_string(), "2025-03-13");
    }

    #[test]
    fn maha_shivratri_2025() {
        let s = next(VratKind::Shivratri, date(2025, 2, 20));
        assert_eq!(s.date, date(2025, 2, 26));
        assert_eq!(s.name, "Maha Shivratri");
        assert!((s.window.duration_minutes() - 48.0).abs() < 0.01);
    }

    #[test]
    fn vinayaka_chaturthi_in_madhyahna() {
        // Shukla Chaturthi 2025-02-01 11:38 to 2025-02-02 09:14 IST
        let v = next(VratKind::Vinayaka, date(2025, 1, 25));
        assert_eq!(v.date, date(2025, 2, 1));
        assert!(v.window.start < v.window.end);
    }

    #[test]
    fn sankashti_at_moonrise() {
        // Krishna Chaturthi 2025-02-15 23:52 to 2025-02-17 02:15 IST
        let s = next(VratKind::Sankashti, date(2025, 2, 10));
        assert_eq!(s.date, date(2025, 2, 16));
        assert_eq!(s.window.start, s.window.end);
    }

    #[test]
    fn madhyahna_is_the_middle_fifth() {
        let day = SolarDay {
            sunrise: 10.0,
            sunset: 10.5,
        };
        let (a, b) = madhyahna(&day);
        assert!((a - 10.2).abs() < 1e-12);
        assert!((b - 10.3).abs() < 1e-12);
    }

    #[test]
    fn pradosh_names() {
        assert_eq!(pradosh_name(Vaar::Monday), "Soma Pradosh");
        assert_eq!(pradosh_name(Vaar::Tuesday), "Bhauma Pradosh");
        assert_eq!(pradosh_name(Vaar::Thursday), "Pradosh");
    }

    #[test]
    fn every_found_day_is_within_horizon() {
        let from = date(2024, 6, 1);
        for kind in VratKind::ALL {
            let found = next(kind, from);
            assert!(found.date >= from);
            assert!((found.date - from).num_days() < i64::from(VRAT_HORIZON_DAYS));
            assert_eq!(found.kind, kind);
        }
    }
}
