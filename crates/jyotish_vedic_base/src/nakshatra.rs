//! Nakshatra (lunar mansion) and pada computation.
//!
//! The sidereal ecliptic is divided into 27 equal nakshatras of 13°20′,
//! each split into 4 padas of 3°20′.

use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::graha::Graha;
use crate::util::normalize_360;

/// Span of one nakshatra: 360/27 degrees.
pub const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;

/// Span of one pada: a quarter nakshatra.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN / 4.0;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

/// Nakshatras during which the Moon marks Panchak.
pub const PANCHAK_NAKSHATRAS: [Nakshatra; 5] = [
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (Ashwini = 0).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 1-based number (Ashwini = 1 .. Revati = 27).
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    pub const fn from_index(index: u8) -> Self {
        ALL_NAKSHATRAS[(index % 27) as usize]
    }

    /// Vimshottari ruler: the dasha sequence repeated three times.
    pub const fn lord(self) -> Graha {
        crate::dasha::VIMSHOTTARI_SEQUENCE[(self.index() % 9) as usize].0
    }

    pub fn is_panchak(self) -> bool {
        PANCHAK_NAKSHATRAS.contains(&self)
    }

    /// Case-insensitive lookup; spaces are optional ("PurvaPhalguni" or
    /// "Purva Phalguni").
    pub fn from_name(name: &str) -> Result<Self, VedicError> {
        let squash = |s: &str| -> String {
            s.chars()
                .filter(|c| !c.is_whitespace())
                .collect::<String>()
                .to_ascii_lowercase()
        };
        let wanted = squash(name);
        ALL_NAKSHATRAS
            .iter()
            .copied()
            .find(|n| squash(n.name()) == wanted)
            .ok_or_else(|| VedicError::UnknownName {
                kind: "nakshatra",
                name: name.into(),
            })
    }
}

impl std::fmt::Display for Nakshatra {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Nakshatra position of a sidereal longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    /// 1..=4.
    pub pada: u8,
    /// Degrees elapsed inside the nakshatra, [0, 13.33).
    pub degrees_in: f64,
}

impl NakshatraInfo {
    /// Fraction of the nakshatra already traversed, [0, 1).
    pub fn elapsed_fraction(&self) -> f64 {
        self.degrees_in / NAKSHATRA_SPAN
    }
}

/// Determine nakshatra and pada of a sidereal longitude.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let idx = ((lon / NAKSHATRA_SPAN).floor() as u8).min(26);
    let degrees_in = (lon - f64::from(idx) * NAKSHATRA_SPAN).max(0.0);
    let pada = ((degrees_in / PADA_SPAN).floor() as u8).min(3) + 1;
    NakshatraInfo {
        nakshatra: ALL_NAKSHATRAS[idx as usize],
        pada,
        degrees_in,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_values() {
        assert!((NAKSHATRA_SPAN - 13.333_333_333_333).abs() < 1e-9);
        assert!((PADA_SPAN * 4.0 - NAKSHATRA_SPAN).abs() < 1e-12);
    }

    #[test]
    fn first_and_last() {
        let a = nakshatra_from_longitude(0.0);
        assert_eq!(a.nakshatra, Nakshatra::Ashwini);
        assert_eq!(a.pada, 1);
        let r = nakshatra_from_longitude(359.999);
        assert_eq!(r.nakshatra, Nakshatra::Revati);
        assert_eq!(r.pada, 4);
    }

    #[test]
    fn pada_boundaries() {
        assert_eq!(nakshatra_from_longitude(3.4).pada, 2);
        assert_eq!(nakshatra_from_longitude(6.7).pada, 3);
        assert_eq!(nakshatra_from_longitude(10.1).pada, 4);
        assert_eq!(nakshatra_from_longitude(13.34).nakshatra, Nakshatra::Bharani);
    }

    #[test]
    fn ranges_hold_over_the_circle() {
        for i in 0..3600 {
            let info = nakshatra_from_longitude(i as f64 * 0.1);
            assert!((1..=27).contains(&info.nakshatra.number()));
            assert!((1..=4).contains(&info.pada));
        }
    }

    #[test]
    fn lords_repeat_every_nine() {
        assert_eq!(Nakshatra::Ashwini.lord(), Graha::Ketu);
        assert_eq!(Nakshatra::Magha.lord(), Graha::Ketu);
        assert_eq!(Nakshatra::Rohini.lord(), Graha::Moon);
        assert_eq!(Nakshatra::Revati.lord(), Graha::Mercury);
        assert_eq!(Nakshatra::Shravana.lord(), Graha::Moon);
    }

    #[test]
    fn panchak_set() {
        assert!(Nakshatra::Revati.is_panchak());
        assert!(!Nakshatra::Shravana.is_panchak());
    }

    #[test]
    fn lookup_ignores_spacing() {
        assert_eq!(
            Nakshatra::from_name("purvaphalguni").expect("name"),
            Nakshatra::PurvaPhalguni
        );
        assert_eq!(
            Nakshatra::from_name("Uttara Bhadrapada").expect("name"),
            Nakshatra::UttaraBhadrapada
        );
        assert!(Nakshatra::from_name("Abhijit").is_err());
    }
}
