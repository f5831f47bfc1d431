//! The nine grahas, rashi lordship and special aspects.
//!
//! Planet-specific behaviour lives in data tables keyed by [`Graha`]
//! rather than in per-planet code paths.

use jyotish_core::Body;
use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::rashi::Rashi;

/// The 9 Vedic grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Graha {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
    Rahu,
    Ketu,
}

/// All 9 grahas in traditional order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Sun,
    Graha::Moon,
    Graha::Mars,
    Graha::Mercury,
    Graha::Jupiter,
    Graha::Venus,
    Graha::Saturn,
    Graha::Rahu,
    Graha::Ketu,
];

/// The 7 classical grahas, excluding the nodes.
pub const SAPTA_GRAHAS: [Graha; 7] = [
    Graha::Sun,
    Graha::Moon,
    Graha::Mars,
    Graha::Mercury,
    Graha::Jupiter,
    Graha::Venus,
    Graha::Saturn,
];

impl Graha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mars => "Mars",
            Self::Mercury => "Mercury",
            Self::Jupiter => "Jupiter",
            Self::Venus => "Venus",
            Self::Saturn => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    pub const fn sanskrit_name(self) -> &'static str {
        match self {
            Self::Sun => "Surya",
            Self::Moon => "Chandra",
            Self::Mars => "Mangal",
            Self::Mercury => "Budh",
            Self::Jupiter => "Guru",
            Self::Venus => "Shukra",
            Self::Saturn => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// 0-based index in [`ALL_GRAHAS`].
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn is_node(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }

    /// Ephemeris body for this graha.
    pub const fn body(self) -> Body {
        match self {
            Self::Sun => Body::Sun,
            Self::Moon => Body::Moon,
            Self::Mars => Body::Mars,
            Self::Mercury => Body::Mercury,
            Self::Jupiter => Body::Jupiter,
            Self::Venus => Body::Venus,
            Self::Saturn => Body::Saturn,
            Self::Rahu => Body::Rahu,
            Self::Ketu => Body::Ketu,
        }
    }

    /// Graha for an ephemeris body; `None` for the ascendant.
    pub const fn from_body(body: Body) -> Option<Self> {
        match body {
            Body::Sun => Some(Self::Sun),
            Body::Moon => Some(Self::Moon),
            Body::Mars => Some(Self::Mars),
            Body::Mercury => Some(Self::Mercury),
            Body::Jupiter => Some(Self::Jupiter),
            Body::Venus => Some(Self::Venus),
            Body::Saturn => Some(Self::Saturn),
            Body::Rahu => Some(Self::Rahu),
            Body::Ketu => Some(Self::Ketu),
            Body::Ascendant => None,
        }
    }

    /// Case-insensitive lookup by English or Sanskrit name.
    pub fn from_name(name: &str) -> Result<Self, VedicError> {
        let wanted = name.trim();
        ALL_GRAHAS
            .iter()
            .copied()
            .find(|g| {
                g.name().eq_ignore_ascii_case(wanted) || g.sanskrit_name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| VedicError::UnknownName {
                kind: "planet",
                name: name.into(),
            })
    }

    /// House offsets this graha aspects, counted inclusively from its own
    /// house. Every graha casts the 7th; Mars, Jupiter, Saturn and the nodes
    /// add their special aspects.
    pub const fn aspect_offsets(self) -> &'static [u8] {
        match self {
            Self::Mars => &[4, 7, 8],
            Self::Jupiter => &[5, 7, 9],
            Self::Saturn => &[3, 7, 10],
            Self::Rahu | Self::Ketu => &[5, 7, 9],
            _ => &[7],
        }
    }

    /// Jupiter, Venus and Mercury. The Moon's benefic status depends on its
    /// phase and is decided by the caller.
    pub const fn is_natural_benefic(self) -> bool {
        matches!(self, Self::Jupiter | Self::Venus | Self::Mercury)
    }

    pub const fn is_natural_malefic(self) -> bool {
        matches!(
            self,
            Self::Sun | Self::Mars | Self::Saturn | Self::Rahu | Self::Ketu
        )
    }
}

impl std::fmt::Display for Graha {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Planetary lord of a rashi.
pub const fn rashi_lord(rashi: Rashi) -> Graha {
    match rashi {
        Rashi::Aries | Rashi::Scorpio => Graha::Mars,
        Rashi::Taurus | Rashi::Libra => Graha::Venus,
        Rashi::Gemini | Rashi::Virgo => Graha::Mercury,
        Rashi::Cancer => Graha::Moon,
        Rashi::Leo => Graha::Sun,
        Rashi::Sagittarius | Rashi::Pisces => Graha::Jupiter,
        Rashi::Capricorn | Rashi::Aquarius => Graha::Saturn,
    }
}

/// Lord of the `house`-th whole-sign house for an ascendant sign.
pub const fn house_lord(asc: Rashi, house: u8) -> Graha {
    rashi_lord(asc.nth(house))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rashi::ALL_RASHIS;

    #[test]
    fn body_round_trip() {
        for g in ALL_GRAHAS {
            assert_eq!(Graha::from_body(g.body()), Some(g));
        }
        assert_eq!(Graha::from_body(Body::Ascendant), None);
    }

    #[test]
    fn every_graha_casts_the_seventh() {
        for g in ALL_GRAHAS {
            assert!(g.aspect_offsets().contains(&7), "{g}");
        }
        assert_eq!(Graha::Saturn.aspect_offsets(), &[3, 7, 10]);
        assert_eq!(Graha::Sun.aspect_offsets(), &[7]);
    }

    #[test]
    fn each_classical_graha_rules_one_or_two_signs() {
        for g in SAPTA_GRAHAS {
            let n = ALL_RASHIS.iter().filter(|r| rashi_lord(**r) == g).count();
            let expected = if matches!(g, Graha::Sun | Graha::Moon) { 1 } else { 2 };
            assert_eq!(n, expected, "{g}");
        }
    }

    #[test]
    fn house_lords_from_leo_ascendant() {
        assert_eq!(house_lord(Rashi::Leo, 1), Graha::Sun);
        assert_eq!(house_lord(Rashi::Leo, 9), Graha::Mars);
        assert_eq!(house_lord(Rashi::Leo, 10), Graha::Venus);
        assert_eq!(house_lord(Rashi::Leo, 12), Graha::Moon);
    }

    #[test]
    fn names_resolve() {
        assert_eq!(Graha::from_name("shani").expect("sa"), Graha::Saturn);
        assert_eq!(Graha::from_name("JUPITER").expect("en"), Graha::Jupiter);
        assert!(Graha::from_name("Pluto").is_err());
    }
}
