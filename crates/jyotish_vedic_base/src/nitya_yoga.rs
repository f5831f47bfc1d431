//! Nitya yoga: the sum of the Sun's and Moon's sidereal longitudes divided
//! into 27 equal parts.

use serde::Serialize;

use crate::nakshatra::NAKSHATRA_SPAN;
use crate::util::normalize_360;

/// Span of one yoga (same as a nakshatra).
pub const YOGA_SPAN: f64 = NAKSHATRA_SPAN;

const YOGA_NAMES: [&str; 27] = [
    "Vishkambha",
    "Priti",
    "Ayushman",
    "Saubhagya",
    "Shobhana",
    "Atiganda",
    "Sukarma",
    "Dhriti",
    "Shoola",
    "Ganda",
    "Vriddhi",
    "Dhruva",
    "Vyaghata",
    "Harshana",
    "Vajra",
    "Siddhi",
    "Vyatipata",
    "Variyana",
    "Parigha",
    "Shiva",
    "Siddha",
    "Sadhya",
    "Shubha",
    "Shukla",
    "Brahma",
    "Indra",
    "Vaidhriti",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NityaYoga {
    /// 1..=27.
    pub number: u8,
    pub name: &'static str,
}

/// Yoga number (1..=27) for a longitude sum.
pub fn yoga_number(sum_deg: f64) -> u8 {
    ((normalize_360(sum_deg) / YOGA_SPAN).floor() as u8).min(26) + 1
}

pub fn yoga_from_sum(sun_lon: f64, moon_lon: f64) -> NityaYoga {
    let number = yoga_number(sun_lon + moon_lon);
    NityaYoga {
        number,
        name: YOGA_NAMES[(number - 1) as usize],
    }
}
