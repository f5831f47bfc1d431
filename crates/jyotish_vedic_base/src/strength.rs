//! Positional strength proxy.
//!
//! Not Shadbala: a monotonic score of house number plus progress through the
//! sign, used to order planets and to gate a few yogas.

/// Threshold above which a planet counts as strong.
pub const STRONG_PROXY: f64 = 6.0;

/// `house + degree_in_sign / 30`.
pub fn strength_proxy(house: u8, degree_in_sign: f64) -> f64 {
    f64::from(house) + degree_in_sign.clamp(0.0, 30.0) / 30.0
}

pub fn is_strong(house: u8, degree_in_sign: f64) -> bool {
    strength_proxy(house, degree_in_sign) >= STRONG_PROXY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proxy_orders_by_house_first() {
        assert!(strength_proxy(3, 29.9) < strength_proxy(4, 0.0));
        assert!((strength_proxy(5, 15.0) - 5.5).abs() < 1e-12);
    }

    #[test]
    fn threshold_is_inclusive() {
        assert!(is_strong(6, 0.0));
        assert!(!is_strong(5, 29.0));
        assert!(is_strong(10, 2.0));
    }
}
