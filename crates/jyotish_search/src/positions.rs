//! Engine queries shared by the calendar, chart and transit searches.

use jyotish_core::{Body, Engine};
use jyotish_vedic_base::{
    Graha, KaranaPosition, Nakshatra, Rashi, elongation, karana_from_elongation,
    nakshatra_from_longitude, rashi_from_longitude, tithi_number, yoga_number,
};
use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Mean synodic rate of the Moon relative to the Sun.
pub const MEAN_ELONGATION_RATE: f64 = 360.0 / 29.530_588;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Motion {
    Direct,
    Retrograde,
}

impl Motion {
    pub const fn from_retrograde(retrograde: bool) -> Self {
        if retrograde {
            Self::Retrograde
        } else {
            Self::Direct
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Direct => "Direct",
            Self::Retrograde => "Retrograde",
        }
    }
}

/// Moon − Sun in [0, 360). Tropical positions suffice: the ayanamsa
/// cancels.
pub fn elongation_at(engine: &Engine, jd: f64) -> Result<f64, SearchError> {
    let moon = engine.apparent(jd, Body::Moon)?.longitude_deg;
    let sun = engine.apparent(jd, Body::Sun)?.longitude_deg;
    Ok(elongation(moon, sun))
}

pub fn sidereal_longitude_at(engine: &Engine, jd: f64, graha: Graha) -> Result<f64, SearchError> {
    Ok(engine.sidereal_longitude(jd, graha.body())?)
}

/// Sidereal Sun + Moon in [0, 360), the argument of the nitya yoga.
pub fn sidereal_sum_at(engine: &Engine, jd: f64) -> Result<f64, SearchError> {
    let sun = sidereal_longitude_at(engine, jd, Graha::Sun)?;
    let moon = sidereal_longitude_at(engine, jd, Graha::Moon)?;
    Ok((sun + moon).rem_euclid(360.0))
}

pub fn tithi_at(engine: &Engine, jd: f64) -> Result<u8, SearchError> {
    Ok(tithi_number(elongation_at(engine, jd)?))
}

pub fn karana_at(engine: &Engine, jd: f64) -> Result<KaranaPosition, SearchError> {
    Ok(karana_from_elongation(elongation_at(engine, jd)?))
}

pub fn nakshatra_at(engine: &Engine, jd: f64) -> Result<Nakshatra, SearchError> {
    let moon = sidereal_longitude_at(engine, jd, Graha::Moon)?;
    Ok(nakshatra_from_longitude(moon).nakshatra)
}

pub fn yoga_at(engine: &Engine, jd: f64) -> Result<u8, SearchError> {
    Ok(yoga_number(sidereal_sum_at(engine, jd)?))
}

pub fn sign_at(engine: &Engine, jd: f64, graha: Graha) -> Result<Rashi, SearchError> {
    Ok(rashi_from_longitude(sidereal_longitude_at(engine, jd, graha)?).rashi)
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2025-03-14 06:55 UT, full moon
    const FULL_MOON_JD: f64 = 2_460_748.788;

    #[test]
    fn full_moon_elongation() {
        let engine = Engine::analytic();
        let e = elongation_at(&engine, FULL_MOON_JD).expect("elongation");
        assert!((e - 180.0).abs() < 0.5, "{e}");
    }

    #[test]
    fn tithi_steps_across_a_day() {
        let engine = Engine::analytic();
        let a = tithi_at(&engine, FULL_MOON_JD - 0.5).expect("tithi");
        let b = tithi_at(&engine, FULL_MOON_JD + 0.5).expect("tithi");
        assert_eq!(a, 15);
        assert_eq!(b, 16);
    }

    #[test]
    fn yoga_is_in_range() {
        let engine = Engine::analytic();
        for k in 0..30 {
            let y = yoga_at(&engine, FULL_MOON_JD + f64::from(k)).expect("yoga");
            assert!((1..=27).contains(&y));
        }
    }

    #[test]
    fn motion_flags() {
        assert_eq!(Motion::from_retrograde(true), Motion::Retrograde);
        assert_eq!(Motion::Direct.name(), "Direct");
    }
}
