//! Obliquity of the ecliptic.
//!
//! Mean obliquity from Lieske et al. 1977 (Meeus eq. 22.2); the true value
//! adds nutation in obliquity.

use crate::nutation::nutation;

/// Mean obliquity at J2000.0: 23° 26′ 21.448″.
pub const OBLIQUITY_J2000_DEG: f64 = 23.439_291_111;

/// Mean obliquity of the ecliptic in degrees.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let arcsec = 21.448 - 46.8150 * t - 0.00059 * t * t + 0.001813 * t.powi(3);
    23.0 + 26.0 / 60.0 + arcsec / 3600.0
}

/// True obliquity (mean + Δε) in degrees.
pub fn true_obliquity_deg(t: f64) -> f64 {
    mean_obliquity_deg(t) + nutation(t).obliquity_deg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_value() {
        assert!((mean_obliquity_deg(0.0) - OBLIQUITY_J2000_DEG).abs() < 1e-8);
    }

    #[test]
    fn decreases_over_time() {
        assert!(mean_obliquity_deg(1.0) < mean_obliquity_deg(0.0));
    }

    #[test]
    fn meeus_example_22a() {
        // 1987 April 10, 0h TD: ε₀ = 23°26′27.407″
        let t = -0.127_296_372_348;
        let eps = mean_obliquity_deg(t);
        let expected = 23.0 + 26.0 / 60.0 + 27.407 / 3600.0;
        assert!((eps - expected).abs() < 1e-5, "ε₀ = {eps}");
    }
}
