//! Natal chart types.

use chrono::{FixedOffset, NaiveDate, NaiveTime};
use jyotish_time::local_datetime_to_jd;
use jyotish_vedic_base::{Dignity, GeoLocation, Graha, HouseCusps, Nakshatra, Rashi, house_lord};
use serde::Serialize;

use crate::positions::Motion;

/// A birth: local civil date and time at a place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BirthEvent {
    pub name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: GeoLocation,
    /// Civil zone of `date` and `time`.
    #[serde(rename = "utc_offset_seconds", with = "jyotish_time::serde_offset")]
    pub zone: FixedOffset,
}

impl BirthEvent {
    pub fn new(
        name: impl Into<String>,
        date: NaiveDate,
        time: NaiveTime,
        location: GeoLocation,
        zone: FixedOffset,
    ) -> Self {
        Self {
            name: name.into(),
            date,
            time,
            location,
            zone,
        }
    }

    /// Birth instant as a Julian Day (UT).
    pub fn jd(&self) -> f64 {
        local_datetime_to_jd(self.date, self.time, self.zone)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AscendantPosition {
    /// Sidereal longitude, [0, 360).
    pub longitude_deg: f64,
    pub tropical_deg: f64,
    pub sign: Rashi,
    pub degree_in_sign: f64,
    pub nakshatra: Nakshatra,
    pub nakshatra_number: u8,
    pub pada: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanetPosition {
    pub graha: Graha,
    /// Sidereal longitude, [0, 360).
    pub longitude_deg: f64,
    pub sign: Rashi,
    pub degree_in_sign: f64,
    /// Whole-sign house, 1..=12.
    pub house: u8,
    pub nakshatra: Nakshatra,
    pub nakshatra_number: u8,
    pub pada: u8,
    pub motion: Motion,
    pub speed_deg_per_day: f64,
    pub dignity: Dignity,
    /// Positional ordering proxy, house + degree/30.
    pub strength: f64,
    /// Houses this graha aspects.
    pub aspect_houses: Vec<u8>,
    /// Grahas sitting in those houses.
    pub aspects: Vec<Graha>,
    /// Grahas whose aspect falls on this graha's house.
    pub aspected_by: Vec<Graha>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NatalChart {
    pub name: String,
    #[serde(rename = "birth_utc", with = "jyotish_time::serde_jd")]
    pub birth_jd: f64,
    pub location: GeoLocation,
    pub ayanamsa_deg: f64,
    pub ascendant: AscendantPosition,
    /// The nine grahas in Sun..Ketu order.
    pub planets: Vec<PlanetPosition>,
    /// Sidereal Placidus cusps; absent beyond the polar circles.
    pub placidus: Option<HouseCusps>,
}

impl NatalChart {
    pub fn planet(&self, graha: Graha) -> Option<&PlanetPosition> {
        self.planets.iter().find(|p| p.graha == graha)
    }

    pub fn house_of(&self, graha: Graha) -> Option<u8> {
        self.planet(graha).map(|p| p.house)
    }

    pub fn ascendant_sign(&self) -> Rashi {
        self.ascendant.sign
    }

    /// Lord of a whole-sign house.
    pub fn lord_of(&self, house: u8) -> Graha {
        house_lord(self.ascendant.sign, house)
    }

    pub fn occupants(&self, house: u8) -> Vec<Graha> {
        self.planets
            .iter()
            .filter(|p| p.house == house)
            .map(|p| p.graha)
            .collect()
    }

    /// Bodies per house, index 0 = house 1, the ascendant counted in the
    /// first.
    pub fn house_occupancy(&self) -> [u8; 12] {
        let mut counts = [0u8; 12];
        counts[0] = 1;
        for p in &self.planets {
            counts[usize::from(p.house - 1)] += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jyotish_time::ist;

    #[test]
    fn birth_event_writes_zone_as_offset_seconds() {
        let birth = BirthEvent::new(
            "Warangal",
            NaiveDate::from_ymd_opt(1997, 8, 16).expect("date"),
            NaiveTime::from_hms_opt(23, 1, 0).expect("time"),
            GeoLocation::new(17.9787, 79.5581),
            ist(),
        );
        let v = serde_json::to_value(&birth).expect("json");
        assert_eq!(v["utc_offset_seconds"], 19_800);
        assert_eq!(v["date"], "1997-08-16");
        assert!(v.get("zone").is_none());
    }
}
