//! Tithi (lunar day) and paksha.
//!
//! A tithi is each 12° step of the Moon's elongation from the Sun, giving
//! 30 tithis per synodic month. Tithis 1..=15 form the bright half (Shukla
//! paksha, ending at Purnima) and 16..=30 the dark half (Krishna paksha,
//! ending at Amavasya).

use serde::{Deserialize, Serialize};

use crate::util::normalize_360;

/// Elongation covered by one tithi.
pub const TITHI_SPAN: f64 = 12.0;

pub const PURNIMA: u8 = 15;
pub const AMAVASYA: u8 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Paksha {
    Shukla,
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

const TITHI_NAMES: [&str; 15] = [
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
    "Purnima",
];

/// Name of tithi `number` (1..=30). Tithi 30 is Amavasya; the other Krishna
/// tithis reuse the Shukla names.
pub fn tithi_name(number: u8) -> &'static str {
    match number {
        AMAVASYA => "Amavasya",
        1..=29 => TITHI_NAMES[((number - 1) % 15) as usize],
        _ => "",
    }
}

/// Paksha of tithi `number`.
pub const fn paksha_of(number: u8) -> Paksha {
    if number <= PURNIMA {
        Paksha::Shukla
    } else {
        Paksha::Krishna
    }
}

/// Moon − Sun, normalised to [0, 360).
pub fn elongation(moon_lon: f64, sun_lon: f64) -> f64 {
    normalize_360(moon_lon - sun_lon)
}

/// Tithi number (1..=30) for an elongation.
pub fn tithi_number(elongation_deg: f64) -> u8 {
    ((normalize_360(elongation_deg) / TITHI_SPAN).floor() as u8).min(29) + 1
}

/// Tithi position for an elongation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TithiPosition {
    /// 1..=30.
    pub number: u8,
    pub name: &'static str,
    pub paksha: Paksha,
    /// Number within the paksha, 1..=15.
    pub paksha_day: u8,
    /// Degrees of elongation already covered in this tithi.
    pub degrees_in: f64,
}

pub fn tithi_from_elongation(elongation_deg: f64) -> TithiPosition {
    let e = normalize_360(elongation_deg);
    let number = tithi_number(e);
    TithiPosition {
        number,
        name: tithi_name(number),
        paksha: paksha_of(number),
        paksha_day: (number - 1) % 15 + 1,
        degrees_in: e - f64::from(number - 1) * TITHI_SPAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_moon_starts_pratipada() {
        let t = tithi_from_elongation(0.0);
        assert_eq!(t.number, 1);
        assert_eq!(t.name, "Pratipada");
        assert_eq!(t.paksha, Paksha::Shukla);
    }

    #[test]
    fn purnima_and_amavasya() {
        let p = tithi_from_elongation(175.0);
        assert_eq!(p.number, PURNIMA);
        assert_eq!(p.name, "Purnima");
        assert_eq!(p.paksha, Paksha::Shukla);
        let a = tithi_from_elongation(359.5);
        assert_eq!(a.number, AMAVASYA);
        assert_eq!(a.name, "Amavasya");
        assert_eq!(a.paksha, Paksha::Krishna);
        assert_eq!(a.paksha_day, 15);
    }

    #[test]
    fn krishna_names_repeat() {
        assert_eq!(tithi_name(26), "Ekadashi");
        assert_eq!(tithi_name(19), "Chaturthi");
        assert_eq!(paksha_of(16), Paksha::Krishna);
    }

    #[test]
    fn paksha_matches_number_everywhere() {
        for i in 0..720 {
            let t = tithi_from_elongation(i as f64 * 0.5);
            assert!((1..=30).contains(&t.number));
            assert_eq!(t.paksha == Paksha::Shukla, t.number <= 15);
            assert!(t.degrees_in >= 0.0 && t.degrees_in < TITHI_SPAN);
        }
    }

    #[test]
    fn elongation_wraps() {
        assert!((elongation(10.0, 350.0) - 20.0).abs() < 1e-12);
        assert!((elongation(350.0, 10.0) - 340.0).abs() < 1e-12);
    }
}
