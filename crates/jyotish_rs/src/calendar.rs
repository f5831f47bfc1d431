//! Panchang and festival entry points.

use jyotish_search::{
    AdhikMaas, Holi, PanchangDay, Sankranti, VratKind, VratObservance, find_next_holi as next_holi,
    find_next_sankranti as next_sankranti, find_next_vrat,
};
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use jyotish_yoga::{Language, narrative};

use crate::error::JyotishError;
use crate::global::runtime;
use crate::input;

/// Longest span [`panchang_range`] accepts, both ends included.
pub const MAX_RANGE_DAYS: i64 = 366;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TodayAndTomorrow {
    pub selected_date: Titled<PanchangDay>,
    pub next_date: Titled<PanchangDay>,
}

/// An event with its localized title.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Titled<T> {
    pub title: String,
    #[serde(flatten)]
    pub event: T,
}

fn titled<T>(event: T, key: &str, fallback: &str, language: &str) -> Titled<T> {
    let title = narrative::lookup(Language::from_tag(language), &format!("event.{key}"))
        .unwrap_or(fallback)
        .to_string();
    Titled { title, event }
}

// The limbs keep their canonical names; only the sentence around them is
// localized.
fn summarized(day: PanchangDay, language: &str) -> Titled<PanchangDay> {
    let limbs = format!(
        "{} {}, {}, {}, {}",
        day.tithi.paksha.name(),
        day.tithi.name,
        day.nakshatra.name,
        day.yoga.name,
        day.karana.name
    );
    let title = narrative::narrate(Language::from_tag(language), "panchang", "summary", Some(&limbs));
    Titled { title, event: day }
}

/// Panchang for a civil date (`YYYY-MM-DD`) at a location, with a one-line
/// summary in `language`.
pub fn panchang(date: &str, lat: f64, lon: f64, language: &str) -> Result<Titled<PanchangDay>, JyotishError> {
    let date = input::date("date", date)?;
    let location = input::location(lat, lon)?;
    let rt = runtime();
    let day = jyotish_search::panchang(&rt.engine, date, &location, rt.zone)?;
    Ok(summarized(day, language))
}

pub fn today_and_tomorrow(
    today: &str,
    lat: f64,
    lon: f64,
    language: &str,
) -> Result<TodayAndTomorrow, JyotishError> {
    let date = input::date("today", today)?;
    let next = date
        .succ_opt()
        .ok_or_else(|| JyotishError::invalid("today", "no following date"))?;
    let location = input::location(lat, lon)?;
    let rt = runtime();
    let selected = jyotish_search::panchang(&rt.engine, date, &location, rt.zone)?;
    let following = jyotish_search::panchang(&rt.engine, next, &location, rt.zone)?;
    Ok(TodayAndTomorrow {
        selected_date: summarized(selected, language),
        next_date: summarized(following, language),
    })
}

/// Panchang for every date from `start` to `end` inclusive, in date order.
///
/// Days are computed in parallel.
pub fn panchang_range(start: &str, end: &str, lat: f64, lon: f64) -> Result<Vec<PanchangDay>, JyotishError> {
    let first = input::date("start", start)?;
    let last = input::date("end", end)?;
    let days = (last - first).num_days() + 1;
    if days < 1 {
        return Err(JyotishError::invalid("end", "is before start"));
    }
    if days > MAX_RANGE_DAYS {
        return Err(JyotishError::invalid(
            "end",
            format!("range of {days} days exceeds {MAX_RANGE_DAYS}"),
        ));
    }
    let location = input::location(lat, lon)?;
    let rt = runtime();
    debug!(%first, days, "panchang range");
    let dates: Vec<_> = first.iter_days().take(days as usize).collect();
    dates
        .par_iter()
        .map(|d| jyotish_search::panchang(&rt.engine, *d, &location, rt.zone).map_err(JyotishError::from))
        .collect()
}

fn next_vrat(
    kind: VratKind,
    key: &str,
    from: &str,
    lat: f64,
    lon: f64,
    language: &str,
) -> Result<Option<Titled<VratObservance>>, JyotishError> {
    let from = input::date("from_date", from)?;
    let location = input::location(lat, lon)?;
    let rt = runtime();
    let found = find_next_vrat(kind, &rt.engine, from, &location, rt.zone)?;
    Ok(found.map(|v| {
        let name = v.name.clone();
        titled(v, key, &name, language)
    }))
}

pub fn find_next_ekadashi(
    from: &str,
    lat: f64,
    lon: f64,
    language: &str,
) -> Result<Option<Titled<VratObservance>>, JyotishError> {
    next_vrat(VratKind::Ekadashi, "ekadashi", from, lat, lon, language)
}

pub fn find_next_pradosh(
    from: &str,
    lat: f64,
    lon: f64,
    language: &str,
) -> Result<Option<Titled<VratObservance>>, JyotishError> {
    next_vrat(VratKind::Pradosh, "pradosh", from, lat, lon, language)
}

pub fn find_next_sankashti(
    from: &str,
    lat: f64,
    lon: f64,
    language: &str,
) -> Result<Option<Titled<VratObservance>>, JyotishError> {
    next_vrat(VratKind::Sankashti, "sankashti", from, lat, lon, language)
}

pub fn find_next_amavasya(
    from: &str,
    lat: f64,
    lon: f64,
    language: &str,
) -> Result<Option<Titled<VratObservance>>, JyotishError> {
    next_vrat(VratKind::Amavasya, "amavasya", from, lat, lon, language)
}

pub fn find_next_purnima(
    from: &str,
    lat: f64,
    lon: f64,
    language: &str,
) -> Result<Option<Titled<VratObservance>>, JyotishError> {
    next_vrat(VratKind::Purnima, "purnima", from, lat, lon, language)
}

pub fn find_next_vinayaka(
    from: &str,
    lat: f64,
    lon: f64,
    language: &str,
) -> Result<Option<Titled<VratObservance>>, JyotishError> {
    next_vrat(VratKind::Vinayaka, "vinayaka", from, lat, lon, language)
}

pub fn find_next_shivratri(
    from: &str,
    lat: f64,
    lon: f64,
    language: &str,
) -> Result<Option<Titled<VratObservance>>, JyotishError> {
    next_vrat(VratKind::Shivratri, "shivratri", from, lat, lon, language)
}

pub fn find_next_holi(
    from: &str,
    lat: f64,
    lon: f64,
    language: &str,
) -> Result<Option<Titled<Holi>>, JyotishError> {
    let from = input::date("from_date", from)?;
    let location = input::location(lat, lon)?;
    let rt = runtime();
    let found = next_holi(&rt.engine, from, &location, rt.zone)?;
    Ok(found.map(|h| titled(h, "holi", "Holi", language)))
}

pub fn find_next_sankranti(
    from: &str,
    lat: f64,
    lon: f64,
    language: &str,
) -> Result<Option<Titled<Sankranti>>, JyotishError> {
    let from = input::date("from_date", from)?;
    let location = input::location(lat, lon)?;
    let rt = runtime();
    let found = next_sankranti(&rt.engine, from, &location, rt.zone)?;
    Ok(found.map(|s| {
        let name = s.name.clone();
        titled(s, "sankranti", &name, language)
    }))
}

/// Adhik (intercalary) months whose span touches `year`.
pub fn adhik_maas(year: i32) -> Result<Vec<AdhikMaas>, JyotishError> {
    let rt = runtime();
    Ok(jyotish_search::adhik_maas(&rt.engine, year, rt.zone)?)
}

