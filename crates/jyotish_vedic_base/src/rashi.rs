//! Rashi (sidereal zodiac sign) and DMS computation.
//!
//! The ecliptic is divided into 12 equal signs of 30 degrees, starting from
//! Aries (Mesha) at sidereal 0°. A sidereal longitude is resolved to its sign
//! and to the position inside that sign.

use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::util::normalize_360;

/// The 12 rashis starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rashi {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 rashis in order (0 = Aries, 11 = Pisces).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Aries,
    Rashi::Taurus,
    Rashi::Gemini,
    Rashi::Cancer,
    Rashi::Leo,
    Rashi::Virgo,
    Rashi::Libra,
    Rashi::Scorpio,
    Rashi::Sagittarius,
    Rashi::Capricorn,
    Rashi::Aquarius,
    Rashi::Pisces,
];

impl Rashi {
    /// English name, also the serialized form.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// Sanskrit name.
    pub const fn sanskrit_name(self) -> &'static str {
        match self {
            Self::Aries => "Mesha",
            Self::Taurus => "Vrishabha",
            Self::Gemini => "Mithuna",
            Self::Cancer => "Karka",
            Self::Leo => "Simha",
            Self::Virgo => "Kanya",
            Self::Libra => "Tula",
            Self::Scorpio => "Vrishchika",
            Self::Sagittarius => "Dhanu",
            Self::Capricorn => "Makara",
            Self::Aquarius => "Kumbha",
            Self::Pisces => "Meena",
        }
    }

    /// 0-based index (Aries = 0 .. Pisces = 11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Rashi for a 0-based index taken modulo 12.
    pub const fn from_index(index: u8) -> Self {
        ALL_RASHIS[(index % 12) as usize]
    }

    /// The sign `n` places forward, counting this sign as 1.
    pub const fn nth(self, n: u8) -> Self {
        Self::from_index((self.index() + (n % 12) + 11) % 12)
    }

    /// Case-insensitive lookup by English or Sanskrit name.
    pub fn from_name(name: &str) -> Result<Self, VedicError> {
        let wanted = name.trim();
        ALL_RASHIS
            .iter()
            .copied()
            .find(|r| {
                r.name().eq_ignore_ascii_case(wanted) || r.sanskrit_name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| VedicError::UnknownName {
                kind: "rashi",
                name: name.into(),
            })
    }
}

impl std::fmt::Display for Rashi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dms {
    pub degrees: u16,
    pub minutes: u8,
    /// May carry a fractional part.
    pub seconds: f64,
}

/// Rashi position of a sidereal longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RashiInfo {
    pub rashi: Rashi,
    /// Decimal degrees within the rashi, [0, 30).
    pub degree_in_sign: f64,
    pub dms: Dms,
}

/// Convert decimal degrees to degrees-minutes-seconds (absolute value).
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let degrees = d.floor() as u16;
    let rem = (d - f64::from(degrees)) * 60.0;
    let minutes = rem.floor() as u8;
    Dms {
        degrees,
        minutes,
        seconds: (rem - f64::from(minutes)) * 60.0,
    }
}

/// Sign index of a sidereal longitude: ⌊lon/30⌋ after normalisation.
pub fn sign_index(sidereal_lon_deg: f64) -> u8 {
    ((normalize_360(sidereal_lon_deg) / 30.0).floor() as u8).min(11)
}

/// Determine the rashi of a sidereal longitude.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let idx = sign_index(lon);
    let degree_in_sign = lon - f64::from(idx) * 30.0;
    RashiInfo {
        rashi: ALL_RASHIS[idx as usize],
        degree_in_sign,
        dms: deg_to_dms(degree_in_sign),
    }
}
