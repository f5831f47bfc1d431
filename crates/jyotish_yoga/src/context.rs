//! Chart view shared by the evaluators: house lords, sambandha and the
//! house groups the rules are phrased in.

use chrono::NaiveDate;
use jyotish_search::{NatalChart, PlanetPosition, SadeSatiCycle};
use jyotish_vedic_base::{
    Graha, Rashi, aspects_house, is_exalted_in, is_own_sign, mutual_aspect, nth_house, rashi_lord,
};

pub const KENDRAS: [u8; 4] = [1, 4, 7, 10];
pub const TRIKONAS: [u8; 3] = [1, 5, 9];
pub const DUSTHANAS: [u8; 3] = [6, 8, 12];

pub fn is_kendra(house: u8) -> bool {
    KENDRAS.contains(&house)
}

pub fn is_trikona(house: u8) -> bool {
    TRIKONAS.contains(&house)
}

pub fn is_dusthana(house: u8) -> bool {
    DUSTHANAS.contains(&house)
}

/// House of `target` counted from `reference`, the reference being the 1st.
pub fn house_from(reference: u8, target: u8) -> u8 {
    ((i16::from(target) - i16::from(reference)).rem_euclid(12) + 1) as u8
}

/// How two grahas are connected, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Sambandha {
    Parivartan,
    Conjunction,
    Aspect,
}

impl Sambandha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Parivartan => "parivartan",
            Self::Conjunction => "conjunction",
            Self::Aspect => "mutual aspect",
        }
    }
}

/// Saturn's transit at the query date, for the Sade-Sati reading.
#[derive(Debug, Clone, Copy)]
pub struct SaturnTransit<'a> {
    pub saturn_sign: Rashi,
    pub query_date: NaiveDate,
    pub cycles: &'a [SadeSatiCycle],
}

#[derive(Debug, Clone, Copy)]
pub struct EvaluationContext<'a> {
    pub chart: &'a NatalChart,
    pub transit: Option<SaturnTransit<'a>>,
}

impl<'a> EvaluationContext<'a> {
    pub fn new(chart: &'a NatalChart) -> Self {
        Self {
            chart,
            transit: None,
        }
    }

    pub fn with_transit(mut self, transit: SaturnTransit<'a>) -> Self {
        self.transit = Some(transit);
        self
    }

    pub fn planet(&self, graha: Graha) -> Option<&'a PlanetPosition> {
        self.chart.planet(graha)
    }

    pub fn house(&self, graha: Graha) -> Option<u8> {
        self.chart.house_of(graha)
    }

    pub fn lord(&self, house: u8) -> Graha {
        self.chart.lord_of(house)
    }

    /// House of `target` counted from the house of `reference`.
    pub fn house_from_graha(&self, reference: Graha, target: Graha) -> Option<u8> {
        Some(house_from(self.house(reference)?, self.house(target)?))
    }

    pub fn conjunct(&self, a: Graha, b: Graha) -> bool {
        a != b && matches!((self.house(a), self.house(b)), (Some(x), Some(y)) if x == y)
    }

    /// `by` casts an aspect on the house `target` occupies.
    pub fn aspects(&self, by: Graha, target: Graha) -> bool {
        match (self.house(by), self.house(target)) {
            (Some(from), Some(to)) => by != target && aspects_house(by, from, to),
            _ => false,
        }
    }

    /// Each sits in a sign the other rules.
    pub fn parivartan(&self, a: Graha, b: Graha) -> bool {
        match (self.planet(a), self.planet(b)) {
            (Some(pa), Some(pb)) => {
                a != b && rashi_lord(pa.sign) == b && rashi_lord(pb.sign) == a
            }
            _ => false,
        }
    }

    /// Strongest connection between two distinct grahas.
    pub fn sambandha(&self, a: Graha, b: Graha) -> Option<Sambandha> {
        if a == b {
            return None;
        }
        if self.parivartan(a, b) {
            return Some(Sambandha::Parivartan);
        }
        if self.conjunct(a, b) {
            return Some(Sambandha::Conjunction);
        }
        let (ha, hb) = (self.house(a)?, self.house(b)?);
        mutual_aspect(a, ha, b, hb).then_some(Sambandha::Aspect)
    }

    /// Own sign or exaltation sign, judged by sign.
    pub fn own_or_exalted(&self, graha: Graha) -> bool {
        self.planet(graha)
            .is_some_and(|p| is_own_sign(graha, p.sign) || is_exalted_in(graha, p.sign))
    }

    /// Moon ahead of the Sun by less than 180°.
    pub fn moon_waxing(&self) -> bool {
        match (self.planet(Graha::Moon), self.planet(Graha::Sun)) {
            (Some(m), Some(s)) => (m.longitude_deg - s.longitude_deg).rem_euclid(360.0) < 180.0,
            _ => false,
        }
    }

    /// Houses `offset` places from the house of `reference`, counting it as 1.
    pub fn nth_from(&self, reference: Graha, offset: u8) -> Option<u8> {
        self.house(reference).map(|h| nth_house(h, offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_houses() {
        assert_eq!(house_from(1, 1), 1);
        assert_eq!(house_from(10, 4), 7);
        assert_eq!(house_from(12, 1), 2);
    }

    #[test]
    fn house_groups() {
        assert!(is_kendra(1) && is_trikona(1));
        assert!(is_dusthana(8) && !is_kendra(8));
        assert!(!is_trikona(4));
    }
}
