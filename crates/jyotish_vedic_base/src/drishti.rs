//! Whole-sign graha drishti (aspects).
//!
//! A graha in house `h` aspects the houses `offset` places forward for each
//! entry of [`Graha::aspect_offsets`], counting its own house as the first.

use crate::graha::Graha;
use crate::util::nth_house;

/// Houses (1..=12) aspected by `graha` sitting in `from_house`.
pub fn aspected_houses(graha: Graha, from_house: u8) -> Vec<u8> {
    graha
        .aspect_offsets()
        .iter()
        .map(|&offset| nth_house(from_house, offset))
        .collect()
}

/// Whether `graha` in `from_house` aspects `target_house`.
pub fn aspects_house(graha: Graha, from_house: u8, target_house: u8) -> bool {
    graha
        .aspect_offsets()
        .iter()
        .any(|&offset| nth_house(from_house, offset) == target_house)
}

/// Whether `graha` in `from_house` casts its aspect with the given offset on
/// `target_house`. Used by rules that only accept particular aspects.
pub fn aspects_with_offset(graha: Graha, offset: u8, from_house: u8, target_house: u8) -> bool {
    graha.aspect_offsets().contains(&offset) && nth_house(from_house, offset) == target_house
}

/// Each graha aspects the other's house.
pub fn mutual_aspect(a: Graha, a_house: u8, b: Graha, b_house: u8) -> bool {
    aspects_house(a, a_house, b_house) && aspects_house(b, b_house, a_house)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seventh_house_aspect() {
        assert_eq!(aspected_houses(Graha::Sun, 1), vec![7]);
        assert_eq!(aspected_houses(Graha::Moon, 9), vec![3]);
    }

    #[test]
    fn special_aspects_wrap() {
        assert_eq!(aspected_houses(Graha::Saturn, 11), vec![1, 5, 8]);
        assert_eq!(aspected_houses(Graha::Mars, 10), vec![1, 4, 5]);
        assert_eq!(aspected_houses(Graha::Jupiter, 2), vec![6, 8, 10]);
        assert_eq!(aspected_houses(Graha::Rahu, 12), vec![4, 6, 8]);
    }

    #[test]
    fn targets_are_always_valid_houses() {
        for g in crate::graha::ALL_GRAHAS {
            for h in 1..=12 {
                for t in aspected_houses(g, h) {
                    assert!((1..=12).contains(&t));
                }
            }
        }
    }

    #[test]
    fn offset_specific_aspect() {
        assert!(aspects_with_offset(Graha::Mars, 4, 1, 4));
        assert!(!aspects_with_offset(Graha::Sun, 4, 1, 4));
    }

    #[test]
    fn opposite_planets_see_each_other() {
        assert!(mutual_aspect(Graha::Moon, 1, Graha::Jupiter, 7));
        // Mars on 1 aspects 4, the Moon on 4 does not aspect 1
        assert!(!mutual_aspect(Graha::Mars, 1, Graha::Moon, 4));
    }
}
