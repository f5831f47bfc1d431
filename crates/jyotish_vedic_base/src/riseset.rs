//! Sunrise, sunset, moonrise and moonset.
//!
//! The primary method scans the apparent altitude of the body over the local
//! civil day in 10-minute steps and bisects the first crossing of the
//! target altitude `h0` in the requested direction. Positions come from the
//! engine, so both backends are honoured.
//!
//! For the Sun a closed-form NOAA solar-geometry solution is kept as the
//! secondary method. It is iterated at the event time and is used when the
//! scan finds nothing; when both exist and differ by more than a minute a
//! warning is logged.
//!
//! Target altitudes:
//! - Sun: −0.8333° (34′ refraction plus 16′ semidiameter)
//! - Moon: 0.7275·π − 0.5667°, π the horizontal parallax

use chrono::{Datelike, FixedOffset, NaiveDate};
use jyotish_core::{Body, Engine};
use jyotish_frames::{ecliptic_to_equatorial, equation_of_equinoxes_deg, true_obliquity_deg};
use jyotish_time::{
    calendar_to_jd, centuries_since_j2000, civil_day_bounds_jd, jd_ut_to_tt,
    local_sidereal_time_deg,
};
use tracing::{debug, warn};

use crate::error::VedicError;
use crate::riseset_types::{GeoLocation, RiseSetEvent, RiseSetResult};

/// Sun's target altitude for rise and set, degrees.
pub const SUN_H0_DEG: f64 = -50.0 / 60.0;

/// Largest acceptable gap between the scan and the NOAA solution, seconds.
pub const FALLBACK_TOLERANCE_S: f64 = 60.0;

const EARTH_EQUATORIAL_RADIUS_KM: f64 = 6378.14;
const SCAN_STEP_DAYS: f64 = 10.0 / 1440.0;
const BISECTION_ITERATIONS: usize = 24;
const NOAA_ITERATIONS: usize = 4;

/// Apparent geocentric altitude of `body` in degrees, no refraction.
pub fn altitude_deg(
    engine: &Engine,
    jd_ut: f64,
    body: Body,
    location: &GeoLocation,
) -> Result<f64, VedicError> {
    Ok(altitude_and_target(engine, jd_ut, body, location)?.0)
}

fn target_altitude_deg(body: Body, distance_km: f64) -> f64 {
    match body {
        Body::Moon => {
            let parallax = (EARTH_EQUATORIAL_RADIUS_KM / distance_km)
                .clamp(-1.0, 1.0)
                .asin()
                .to_degrees();
            0.7275 * parallax - 0.5667
        }
        _ => SUN_H0_DEG,
    }
}

fn altitude_and_target(
    engine: &Engine,
    jd_ut: f64,
    body: Body,
    location: &GeoLocation,
) -> Result<(f64, f64), VedicError> {
    let p = engine.apparent(jd_ut, body)?;
    let t = centuries_since_j2000(jd_ut_to_tt(jd_ut));
    let (ra, dec) = ecliptic_to_equatorial(p.longitude_deg, p.latitude_deg, true_obliquity_deg(t));
    let last = local_sidereal_time_deg(jd_ut, location.longitude_deg, equation_of_equinoxes_deg(t));
    let hour_angle = (last - ra).to_radians();
    let phi = location.latitude_rad();
    let dec = dec.to_radians();
    let sin_alt = phi.sin() * dec.sin() + phi.cos() * dec.cos() * hour_angle.cos();
    Ok((
        sin_alt.clamp(-1.0, 1.0).asin().to_degrees(),
        target_altitude_deg(body, p.distance_km),
    ))
}

fn above_target(
    engine: &Engine,
    jd_ut: f64,
    body: Body,
    location: &GeoLocation,
) -> Result<f64, VedicError> {
    let (alt, h0) = altitude_and_target(engine, jd_ut, body, location)?;
    Ok(alt - h0)
}

/// Find `event` on the civil `date` in `zone` by altitude scan.
pub fn compute_rise_set(
    engine: &Engine,
    date: NaiveDate,
    zone: FixedOffset,
    location: &GeoLocation,
    event: RiseSetEvent,
) -> Result<RiseSetResult, VedicError> {
    location.validate()?;
    let body = event.body();
    let rising = event.is_rising();
    let (start, end) = civil_day_bounds_jd(date, zone);

    let mut t0 = start;
    let mut f0 = above_target(engine, t0, body, location)?;
    let mut seen_above = f0 >= 0.0;
    let mut seen_below = f0 < 0.0;

    while t0 < end {
        let t1 = (t0 + SCAN_STEP_DAYS).min(end);
        let f1 = above_target(engine, t1, body, location)?;
        seen_above |= f1 >= 0.0;
        seen_below |= f1 < 0.0;

        let crossed = if rising {
            f0 < 0.0 && f1 >= 0.0
        } else {
            f0 >= 0.0 && f1 < 0.0
        };
        if crossed && t1 < end {
            let jd_ut = bisect(engine, body, location, t0, t1, f0)?;
            debug!(?event, %date, jd_ut, "rise/set bracket resolved");
            return Ok(RiseSetResult::Event { jd_ut });
        }
        t0 = t1;
        f0 = f1;
    }

    Ok(match (seen_above, seen_below) {
        (false, _) => RiseSetResult::NeverRises,
        (_, false) => RiseSetResult::NeverSets,
        _ => RiseSetResult::NotOnThisDay,
    })
}

fn bisect(
    engine: &Engine,
    body: Body,
    location: &GeoLocation,
    mut lo: f64,
    mut hi: f64,
    f_lo: f64,
) -> Result<f64, VedicError> {
    let lo_sign = f_lo >= 0.0;
    for _ in 0..BISECTION_ITERATIONS {
        let mid = 0.5 * (lo + hi);
        if (above_target(engine, mid, body, location)? >= 0.0) == lo_sign {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    Ok(0.5 * (lo + hi))
}

/// Sunrise or sunset with the NOAA cross-check.
///
/// Returns `None` when the Sun does not cross the horizon in the requested
/// direction on that civil day.
pub fn sun_event(
    engine: &Engine,
    date: NaiveDate,
    zone: FixedOffset,
    location: &GeoLocation,
    event: RiseSetEvent,
) -> Result<Option<f64>, VedicError> {
    let rising = event.is_rising();
    let primary = compute_rise_set(engine, date, zone, location, event)?.jd();
    let secondary = noaa_sun_event(date, location, rising);
    match (primary, secondary) {
        (Some(p), Some(s)) => {
            let gap_s = (p - s).abs() * 86_400.0;
            if gap_s > FALLBACK_TOLERANCE_S {
                warn!(?event, %date, gap_s, "rise/set methods disagree");
            }
            Ok(Some(p))
        }
        (Some(p), None) => Ok(Some(p)),
        (None, Some(s)) => {
            let (start, end) = civil_day_bounds_jd(date, zone);
            if (start..end).contains(&s) {
                debug!(?event, %date, "using NOAA fallback");
                Ok(Some(s))
            } else {
                Ok(None)
            }
        }
        (None, None) => Ok(None),
    }
}

pub fn sunrise(
    engine: &Engine,
    date: NaiveDate,
    zone: FixedOffset,
    location: &GeoLocation,
) -> Result<Option<f64>, VedicError> {
    sun_event(engine, date, zone, location, RiseSetEvent::Sunrise)
}

pub fn sunset(
    engine: &Engine,
    date: NaiveDate,
    zone: FixedOffset,
    location: &GeoLocation,
) -> Result<Option<f64>, VedicError> {
    sun_event(engine, date, zone, location, RiseSetEvent::Sunset)
}

/// Moonrise on the civil date, if the Moon rises that day.
pub fn moonrise(
    engine: &Engine,
    date: NaiveDate,
    zone: FixedOffset,
    location: &GeoLocation,
) -> Result<Option<f64>, VedicError> {
    Ok(compute_rise_set(engine, date, zone, location, RiseSetEvent::Moonrise)?.jd())
}

pub fn moonset(
    engine: &Engine,
    date: NaiveDate,
    zone: FixedOffset,
    location: &GeoLocation,
) -> Result<Option<f64>, VedicError> {
    Ok(compute_rise_set(engine, date, zone, location, RiseSetEvent::Moonset)?.jd())
}

// NOAA solar geometry. Returns (declination, equation of time in minutes).
fn noaa_declination_and_eot(jd_ut: f64) -> (f64, f64) {
    let t = centuries_since_j2000(jd_ut);
    let l0 = (280.46646 + t * (36000.76983 + 0.0003032 * t)).rem_euclid(360.0);
    let m = 357.52911 + t * (35999.05029 - 0.0001537 * t);
    let e = 0.016708634 - t * (0.000042037 + 0.0000001267 * t);
    let m_r = m.to_radians();
    let center = m_r.sin() * (1.914602 - t * (0.004817 + 0.000014 * t))
        + (2.0 * m_r).sin() * (0.019993 - 0.000101 * t)
        + (3.0 * m_r).sin() * 0.000289;
    let omega = (125.04 - 1934.136 * t).to_radians();
    let app_long = (l0 + center - 0.00569 - 0.00478 * omega.sin()).to_radians();
    let eps0 = 23.0 + (26.0 + (21.448 - t * (46.815 + t * (0.00059 - t * 0.001813))) / 60.0) / 60.0;
    let eps = (eps0 + 0.00256 * omega.cos()).to_radians();
    let decl = (eps.sin() * app_long.sin()).asin();

    let y = (eps / 2.0).tan().powi(2);
    let l0_r = l0.to_radians();
    let eot = y * (2.0 * l0_r).sin() - 2.0 * e * m_r.sin()
        + 4.0 * e * y * m_r.sin() * (2.0 * l0_r).cos()
        - 0.5 * y * y * (4.0 * l0_r).sin()
        - 1.25 * e * e * (2.0 * m_r).sin();
    (decl, 4.0 * eot.to_degrees())
}

/// NOAA closed-form sunrise/sunset for the solar day nearest the civil date.
///
/// Returns `None` when the Sun does not reach the horizon (polar day or
/// night).
pub fn noaa_sun_event(date: NaiveDate, location: &GeoLocation, rising: bool) -> Option<f64> {
    let jd0 = calendar_to_jd(date.year(), date.month(), f64::from(date.day()));
    let phi = location.latitude_rad();
    let cos_zenith = (90.0 + 50.0 / 60.0_f64).to_radians().cos();
    let mut jd = jd0 + 0.5 - location.longitude_deg / 360.0;
    for _ in 0..NOAA_ITERATIONS {
        let (decl, eot) = noaa_declination_and_eot(jd);
        let cos_ha = cos_zenith / (phi.cos() * decl.cos()) - phi.tan() * decl.tan();
        if !(-1.0..=1.0).contains(&cos_ha) {
            return None;
        }
        let ha = cos_ha.acos().to_degrees();
        let noon_min = 720.0 - 4.0 * location.longitude_deg - eot;
        let event_min = if rising {
            noon_min - 4.0 * ha
        } else {
            noon_min + 4.0 * ha
        };
        jd = jd0 + event_min / 1440.0;
    }
    Some(jd)
}
