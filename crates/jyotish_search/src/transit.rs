//! Current positions and sign-ingress scans.
//!
//! Ingress scans step one civil day at a time from local midnight and
//! compare the sidereal sign at consecutive midnights. A change brackets
//! the ingress, which is then bisected. Scans stop at a fixed horizon and
//! return what they found rather than failing.

use chrono::{DateTime, Days, FixedOffset, NaiveDate, Utc};
use jyotish_core::Engine;
use jyotish_time::{civil_day_bounds_jd, datetime_to_jd, ist, local_date_of_jd};
use jyotish_vedic_base::{ALL_GRAHAS, Graha, Rashi, rashi_from_longitude};
use tracing::{debug, warn};

use crate::error::SearchError;
use crate::positions::{Motion, sign_at};
use crate::search_util::bisect_change;
use crate::time_window::local_instant;
use crate::transit_types::{CurrentPositions, PlanetNow, TransitEvent};

/// Horizon of [`next_ingresses`] and [`prev_ingresses`].
pub const INGRESS_HORIZON_YEARS: u32 = 40;

pub(crate) const DAYS_PER_YEAR: f64 = 365.25;

/// A bisected ingress before it is dressed up as a [`TransitEvent`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Ingress {
    pub jd: f64,
    pub from: Rashi,
    pub to: Rashi,
}

/// Sidereal positions of the nine grahas at `instant`.
pub fn current_positions(
    engine: &Engine,
    instant: DateTime<Utc>,
) -> Result<CurrentPositions, SearchError> {
    let jd = datetime_to_jd(instant);
    let positions = ALL_GRAHAS
        .iter()
        .map(|&graha| {
            let state = engine.sidereal_state(jd, graha.body())?;
            let info = rashi_from_longitude(state.longitude_deg);
            Ok(PlanetNow {
                graha,
                longitude_deg: state.longitude_deg,
                sign: info.rashi,
                degree_in_sign: info.degree_in_sign,
                speed_deg_per_day: state.speed_deg_per_day,
                motion: Motion::from_retrograde(state.retrograde),
            })
        })
        .collect::<Result<Vec<_>, SearchError>>()?;
    Ok(CurrentPositions {
        timestamp_ist: instant.with_timezone(&ist()),
        positions,
    })
}

/// Scans day by day from the midnight `start_jd`, returning up to `count`
/// ingresses in scan order.
pub(crate) fn scan_ingresses(
    engine: &Engine,
    graha: Graha,
    start_jd: f64,
    forward: bool,
    count: usize,
    horizon_days: u32,
) -> Result<Vec<Ingress>, SearchError> {
    let mut found = Vec::with_capacity(count.min(64));
    if count == 0 {
        return Ok(found);
    }
    let step = if forward { 1.0 } else { -1.0 };
    let mut key = |t: f64| sign_at(engine, t, graha);

    let mut t = start_jd;
    let mut sign = key(t)?;
    for _ in 0..horizon_days {
        let next_t = t + step;
        let next_sign = key(next_t)?;
        if next_sign != sign {
            let (earlier, later, from, to) = if forward {
                (t, next_t, sign, next_sign)
            } else {
                (next_t, t, next_sign, sign)
            };
            let jd = bisect_change(&mut key, earlier, later, &from)?;
            debug!(graha = graha.name(), from = from.name(), to = to.name(), jd, "ingress");
            found.push(Ingress { jd, from, to });
            if found.len() == count {
                return Ok(found);
            }
        }
        t = next_t;
        sign = next_sign;
    }
    warn!(graha = graha.name(), forward, found = found.len(), "ingress horizon reached");
    Ok(found)
}

fn horizon_days(years: u32) -> u32 {
    (f64::from(years) * DAYS_PER_YEAR).ceil() as u32
}

fn day_before(date: NaiveDate) -> Result<NaiveDate, SearchError> {
    date.checked_sub_days(Days::new(1))
        .ok_or(SearchError::NoConvergence("date underflow"))
}

fn to_event(
    engine: &Engine,
    graha: Graha,
    ingress: &Ingress,
    next: Option<&Ingress>,
    zone: FixedOffset,
) -> Result<TransitEvent, SearchError> {
    let state = engine.sidereal_state(ingress.jd, graha.body())?;
    let exit_date = match next {
        Some(n) => Some(day_before(local_date_of_jd(n.jd, zone)?)?),
        None => None,
    };
    Ok(TransitEvent {
        graha,
        from_sign: ingress.from,
        to_sign: ingress.to,
        entering_date: local_date_of_jd(ingress.jd, zone)?,
        entering_instant: local_instant(ingress.jd, zone)?,
        exit_date,
        motion: Motion::from_retrograde(state.retrograde),
    })
}

/// Next `n` ingresses of `graha` from the start of `from`, chronological.
/// Fewer than `n` events come back when the 40-year horizon is reached.
pub fn next_ingresses(
    engine: &Engine,
    graha: Graha,
    n: usize,
    from: NaiveDate,
    zone: FixedOffset,
) -> Result<Vec<TransitEvent>, SearchError> {
    if n == 0 {
        return Ok(Vec::new());
    }
    let (start, _) = civil_day_bounds_jd(from, zone);
    // one extra ingress closes the last event
    let raw = scan_ingresses(
        engine,
        graha,
        start,
        true,
        n + 1,
        horizon_days(INGRESS_HORIZON_YEARS),
    )?;
    raw.iter()
        .take(n)
        .enumerate()
        .map(|(i, ing)| to_event(engine, graha, ing, raw.get(i + 1), zone))
        .collect()
}

/// Previous `n` ingresses of `graha` before the start of `from`, returned
/// in chronological order.
pub fn prev_ingresses(
    engine: &Engine,
    graha: Graha,
    n: usize,
    from: NaiveDate,
    zone: FixedOffset,
) -> Result<Vec<TransitEvent>, SearchError> {
    let horizon = horizon_days(INGRESS_HORIZON_YEARS);
    let (start, _) = civil_day_bounds_jd(from, zone);
    let mut raw = scan_ingresses(engine, graha, start, false, n, horizon)?;
    raw.reverse();
    let Some(last) = raw.last() else {
        return Ok(Vec::new());
    };

    // probe forward from the midnight after the latest ingress
    let last_date = local_date_of_jd(last.jd, zone)?;
    let probe_from = last_date
        .checked_add_days(Days::new(1))
        .ok_or(SearchError::NoConvergence("date overflow"))?;
    let (probe_start, _) = civil_day_bounds_jd(probe_from, zone);
    let closing = scan_ingresses(engine, graha, probe_start, true, 1, horizon)?;

    raw.iter()
        .enumerate()
        .map(|(i, ing)| {
            let next = raw.get(i + 1).or_else(|| closing.first());
            to_event(engine, graha, ing, next, zone)
        })
        .collect()
}
