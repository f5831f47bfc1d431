//! Dignity tables and natural friendship.
//!
//! Exaltation and debilitation, moolatrikona ranges, own signs and the
//! naisargika (natural) friendship matrix for the seven classical grahas.
//! The nodes have no dignity and are neutral to everyone.

use serde::{Deserialize, Serialize};

use crate::graha::{Graha, rashi_lord};
use crate::rashi::{Rashi, rashi_from_longitude};

/// Natural relationship of one graha towards another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Relation {
    Friend,
    Neutral,
    Enemy,
}

/// Placement dignity, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dignity {
    Exalted,
    Debilitated,
    Moolatrikona,
    OwnSign,
    Friend,
    Neutral,
    Enemy,
}

impl Dignity {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Exalted => "Exalted",
            Self::Debilitated => "Debilitated",
            Self::Moolatrikona => "Moolatrikona",
            Self::OwnSign => "Own Sign",
            Self::Friend => "Friend",
            Self::Neutral => "Neutral",
            Self::Enemy => "Enemy",
        }
    }

    /// Own sign, moolatrikona or exaltation.
    pub const fn is_strong(self) -> bool {
        matches!(self, Self::Exalted | Self::Moolatrikona | Self::OwnSign)
    }
}

/// Exaltation point as (sign, degree within the sign).
pub const fn exaltation(graha: Graha) -> Option<(Rashi, f64)> {
    match graha {
        Graha::Sun => Some((Rashi::Aries, 10.0)),
        Graha::Moon => Some((Rashi::Taurus, 3.0)),
        Graha::Mars => Some((Rashi::Capricorn, 28.0)),
        Graha::Mercury => Some((Rashi::Virgo, 15.0)),
        Graha::Jupiter => Some((Rashi::Cancer, 5.0)),
        Graha::Venus => Some((Rashi::Pisces, 27.0)),
        Graha::Saturn => Some((Rashi::Libra, 20.0)),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Sign of debilitation: the seventh from the exaltation sign.
pub const fn debilitation_sign(graha: Graha) -> Option<Rashi> {
    match exaltation(graha) {
        Some((sign, _)) => Some(sign.nth(7)),
        None => None,
    }
}

/// Moolatrikona range as (sign, start degree, end degree), end exclusive.
pub const fn moolatrikona(graha: Graha) -> Option<(Rashi, f64, f64)> {
    match graha {
        Graha::Sun => Some((Rashi::Leo, 0.0, 20.0)),
        Graha::Moon => Some((Rashi::Taurus, 4.0, 20.0)),
        Graha::Mars => Some((Rashi::Aries, 0.0, 12.0)),
        Graha::Mercury => Some((Rashi::Virgo, 16.0, 20.0)),
        Graha::Jupiter => Some((Rashi::Sagittarius, 0.0, 10.0)),
        Graha::Venus => Some((Rashi::Libra, 0.0, 15.0)),
        Graha::Saturn => Some((Rashi::Aquarius, 0.0, 20.0)),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Signs ruled by the graha.
pub const fn own_signs(graha: Graha) -> &'static [Rashi] {
    match graha {
        Graha::Sun => &[Rashi::Leo],
        Graha::Moon => &[Rashi::Cancer],
        Graha::Mars => &[Rashi::Aries, Rashi::Scorpio],
        Graha::Mercury => &[Rashi::Gemini, Rashi::Virgo],
        Graha::Jupiter => &[Rashi::Sagittarius, Rashi::Pisces],
        Graha::Venus => &[Rashi::Taurus, Rashi::Libra],
        Graha::Saturn => &[Rashi::Capricorn, Rashi::Aquarius],
        Graha::Rahu | Graha::Ketu => &[],
    }
}

pub fn is_own_sign(graha: Graha, sign: Rashi) -> bool {
    own_signs(graha).contains(&sign)
}

pub fn is_exalted_in(graha: Graha, sign: Rashi) -> bool {
    exaltation(graha).is_some_and(|(s, _)| s == sign)
}

pub fn is_debilitated_in(graha: Graha, sign: Rashi) -> bool {
    debilitation_sign(graha) == Some(sign)
}

// Rows: graha, columns: other, both in SAPTA_GRAHAS order
// (Sun, Moon, Mars, Mercury, Jupiter, Venus, Saturn). 1 friend, 0 neutral,
// -1 enemy.
const NAISARGIKA: [[i8; 7]; 7] = [
    [0, 1, 1, 0, 1, -1, -1],
    [1, 0, 0, 1, 0, 0, 0],
    [1, 1, 0, -1, 1, 0, 0],
    [1, -1, 0, 0, 0, 1, 0],
    [1, 1, 1, -1, 0, -1, 0],
    [-1, -1, 0, 1, 0, 0, 1],
    [-1, -1, -1, 1, 0, 1, 0],
];

/// How `graha` naturally regards `other`. Not symmetric.
pub const fn naisargika_maitri(graha: Graha, other: Graha) -> Relation {
    if graha.is_node() || other.is_node() {
        return Relation::Neutral;
    }
    match NAISARGIKA[graha.index() as usize][other.index() as usize] {
        1 => Relation::Friend,
        -1 => Relation::Enemy,
        _ => Relation::Neutral,
    }
}

/// Both grahas regard each other as friends.
pub const fn mutual_friends(a: Graha, b: Graha) -> bool {
    matches!(naisargika_maitri(a, b), Relation::Friend)
        && matches!(naisargika_maitri(b, a), Relation::Friend)
}

/// Dignity of a graha at a sidereal longitude.
///
/// Exaltation and debilitation are judged by sign, moolatrikona by its
/// degree range; otherwise own sign, then the natural relation to the sign
/// lord.
pub fn dignity_at(graha: Graha, sidereal_lon: f64) -> Dignity {
    if graha.is_node() {
        return Dignity::Neutral;
    }
    let info = rashi_from_longitude(sidereal_lon);
    let sign = info.rashi;
    if is_exalted_in(graha, sign) {
        return Dignity::Exalted;
    }
    if is_debilitated_in(graha, sign) {
        return Dignity::Debilitated;
    }
    if let Some((mt, start, end)) = moolatrikona(graha) {
        if mt == sign && info.degree_in_sign >= start && info.degree_in_sign < end {
            return Dignity::Moolatrikona;
        }
    }
    if is_own_sign(graha, sign) {
        return Dignity::OwnSign;
    }
    match naisargika_maitri(graha, rashi_lord(sign)) {
        Relation::Friend => Dignity::Friend,
        Relation::Neutral => Dignity::Neutral,
        Relation::Enemy => Dignity::Enemy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graha::SAPTA_GRAHAS;

    #[test]
    fn debilitation_opposes_exaltation() {
        assert_eq!(debilitation_sign(Graha::Sun), Some(Rashi::Libra));
        assert_eq!(debilitation_sign(Graha::Mars), Some(Rashi::Cancer));
        assert_eq!(debilitation_sign(Graha::Jupiter), Some(Rashi::Capricorn));
        assert_eq!(debilitation_sign(Graha::Saturn), Some(Rashi::Aries));
        assert_eq!(debilitation_sign(Graha::Rahu), None);
    }

    #[test]
    fn natural_friendship_rows() {
        assert_eq!(naisargika_maitri(Graha::Sun, Graha::Jupiter), Relation::Friend);
        assert_eq!(naisargika_maitri(Graha::Sun, Graha::Mercury), Relation::Neutral);
        assert_eq!(naisargika_maitri(Graha::Sun, Graha::Saturn), Relation::Enemy);
        assert_eq!(naisargika_maitri(Graha::Moon, Graha::Saturn), Relation::Neutral);
        assert_eq!(naisargika_maitri(Graha::Mercury, Graha::Moon), Relation::Enemy);
        assert_eq!(naisargika_maitri(Graha::Saturn, Graha::Mars), Relation::Enemy);
        assert_eq!(naisargika_maitri(Graha::Venus, Graha::Saturn), Relation::Friend);
        assert_eq!(naisargika_maitri(Graha::Rahu, Graha::Sun), Relation::Neutral);
    }

    #[test]
    fn self_relation_is_neutral() {
        for g in SAPTA_GRAHAS {
            assert_eq!(naisargika_maitri(g, g), Relation::Neutral);
        }
    }

    #[test]
    fn mutual_friendship() {
        assert!(mutual_friends(Graha::Sun, Graha::Moon));
        assert!(mutual_friends(Graha::Venus, Graha::Saturn));
        // Moon likes Mercury, Mercury does not return it
        assert!(!mutual_friends(Graha::Moon, Graha::Mercury));
    }

    #[test]
    fn dignity_priority() {
        // Sun at 15° Aries
        assert_eq!(dignity_at(Graha::Sun, 15.0), Dignity::Exalted);
        // Sun at 10° Leo: moolatrikona, at 25° Leo: own sign
        assert_eq!(dignity_at(Graha::Sun, 130.0), Dignity::Moolatrikona);
        assert_eq!(dignity_at(Graha::Sun, 145.0), Dignity::OwnSign);
        // Moon in Scorpio
        assert_eq!(dignity_at(Graha::Moon, 215.0), Dignity::Debilitated);
        // Saturn in Leo: the Sun is its enemy
        assert_eq!(dignity_at(Graha::Saturn, 125.0), Dignity::Enemy);
        // Mars in Sagittarius: Jupiter is its friend
        assert_eq!(dignity_at(Graha::Mars, 250.0), Dignity::Friend);
        assert_eq!(dignity_at(Graha::Ketu, 10.0), Dignity::Neutral);
    }
}
