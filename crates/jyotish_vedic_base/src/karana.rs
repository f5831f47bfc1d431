//! Karana (half-tithi).
//!
//! The 60 half-tithis of a synodic month are numbered from the new moon.
//! Slot 1 is the fixed karana Kimstughna, slots 2..=57 cycle through the
//! seven movable karanas, and slots 58..=60 are the fixed Shakuni,
//! Chatushpada and Naga.

use serde::{Deserialize, Serialize};

use crate::util::normalize_360;

/// Elongation covered by one karana.
pub const KARANA_SPAN: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Karana {
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Garaja,
    Vanija,
    /// Also called Bhadra.
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
    Kimstughna,
}

/// The movable karanas in cycle order.
pub const MOVABLE_KARANAS: [Karana; 7] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Garaja,
    Karana::Vanija,
    Karana::Vishti,
];

impl Karana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Garaja => "Garaja",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Shakuni => "Shakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Naga => "Naga",
            Self::Kimstughna => "Kimstughna",
        }
    }

    pub const fn is_bhadra(self) -> bool {
        matches!(self, Self::Vishti)
    }

    /// Karana occupying half-tithi slot `slot` (1..=60).
    pub const fn from_slot(slot: u8) -> Self {
        match slot {
            0 | 1 => Self::Kimstughna,
            58 => Self::Shakuni,
            59 => Self::Chatushpada,
            60.. => Self::Naga,
            s => MOVABLE_KARANAS[((s - 2) % 7) as usize],
        }
    }
}

/// Karana position for an elongation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KaranaPosition {
    /// 1..=60.
    pub slot: u8,
    pub karana: Karana,
}

/// Half-tithi slot `⌊Δ/6⌋ + 1` with Kimstughna in slot 1, so Vishti can fall on Purnima.
pub fn karana_from_elongation(elongation_deg: f64) -> KaranaPosition {
    let slot = ((normalize_360(elongation_deg) / KARANA_SPAN).floor() as u8).min(59) + 1;
    KaranaPosition {
        slot,
        karana: Karana::from_slot(slot),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_slots() {
        assert_eq!(karana_from_elongation(1.0).karana, Karana::Kimstughna);
        assert_eq!(karana_from_elongation(342.5).karana, Karana::Shakuni);
        assert_eq!(karana_from_elongation(348.5).karana, Karana::Chatushpada);
        assert_eq!(karana_from_elongation(359.9).karana, Karana::Naga);
    }

    #[test]
    fn movable_cycle_starts_with_bava() {
        assert_eq!(karana_from_elongation(6.5).karana, Karana::Bava);
        assert_eq!(karana_from_elongation(12.5).karana, Karana::Balava);
        assert_eq!(Karana::from_slot(8), Karana::Vishti);
        assert_eq!(Karana::from_slot(9), Karana::Bava);
        assert_eq!(Karana::from_slot(57), Karana::Vishti);
    }

    #[test]
    fn vishti_appears_eight_times() {
        let n = (1..=60)
            .filter(|&s| Karana::from_slot(s).is_bhadra())
            .count();
        assert_eq!(n, 8);
    }

    #[test]
    fn first_half_of_purnima_is_vishti() {
        let k = karana_from_elongation(171.0);
        assert_eq!(k.slot, 29);
        assert_eq!(k.karana, Karana::Vishti);
        assert_eq!(karana_from_elongation(177.0).karana, Karana::Bava);
    }
}
