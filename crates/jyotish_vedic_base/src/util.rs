//! Angle helpers shared by the vedic calculations.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    // rem_euclid rounds tiny negatives up to exactly 360
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// Whole-sign house (1..=12) of a sign counted from the ascendant's sign.
pub fn house_from_signs(sign_index: u8, asc_sign_index: u8) -> u8 {
    ((i16::from(sign_index) - i16::from(asc_sign_index)).rem_euclid(12) + 1) as u8
}

/// The house `offset` places forward from `house`, counting `house` as 1.
///
/// An offset of 7 from house 1 lands on 7; from house 10 it lands on 4.
pub fn nth_house(house: u8, offset: u8) -> u8 {
    ((u16::from(house) + u16::from(offset) + 22) % 12 + 1) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_wraps_both_ways() {
        assert!(normalize_360(360.0).abs() < 1e-15);
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-12);
        assert!((normalize_360(730.0) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn tiny_negative_stays_below_360() {
        let r = normalize_360(-1e-20);
        assert!((0.0..360.0).contains(&r), "{r}");
    }

    #[test]
    fn house_of_ascendant_sign_is_first() {
        assert_eq!(house_from_signs(4, 4), 1);
        assert_eq!(house_from_signs(3, 4), 12);
        assert_eq!(house_from_signs(0, 11), 2);
    }

    #[test]
    fn nth_house_counts_inclusively() {
        assert_eq!(nth_house(1, 7), 7);
        assert_eq!(nth_house(10, 7), 4);
        assert_eq!(nth_house(12, 1), 12);
        assert_eq!(nth_house(6, 12), 5);
        for h in 1..=12 {
            for o in 1..=12 {
                assert!((1..=12).contains(&nth_house(h, o)));
            }
        }
    }
}
