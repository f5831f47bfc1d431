//! Nutation in longitude and obliquity.
//!
//! Short series of Meeus, "Astronomical Algorithms" ch. 22 (accuracy 0.5″
//! in Δψ, 0.1″ in Δε), which is ample for sidereal longitudes quoted to
//! arc-seconds.

use crate::obliquity::mean_obliquity_deg;

/// Nutation components in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutation {
    /// Δψ, nutation in longitude.
    pub longitude_deg: f64,
    /// Δε, nutation in obliquity.
    pub obliquity_deg: f64,
}

/// Nutation at `t` Julian centuries (TT) from J2000.0.
pub fn nutation(t: f64) -> Nutation {
    let omega = (125.04452 - 1934.136261 * t + 0.0020708 * t * t + t.powi(3) / 450_000.0)
        .to_radians();
    let sun_mean = (280.4665 + 36_000.7698 * t).to_radians();
    let moon_mean = (218.3165 + 481_267.8813 * t).to_radians();

    let dpsi = -17.20 * omega.sin() - 1.32 * (2.0 * sun_mean).sin() - 0.23 * (2.0 * moon_mean).sin()
        + 0.21 * (2.0 * omega).sin();
    let deps = 9.20 * omega.cos() + 0.57 * (2.0 * sun_mean).cos() + 0.10 * (2.0 * moon_mean).cos()
        - 0.09 * (2.0 * omega).cos();

    Nutation {
        longitude_deg: dpsi / 3600.0,
        obliquity_deg: deps / 3600.0,
    }
}

/// Equation of the equinoxes (Δψ·cos ε) in degrees.
pub fn equation_of_equinoxes_deg(t: f64) -> f64 {
    let n = nutation(t);
    let eps = (mean_obliquity_deg(t) + n.obliquity_deg).to_radians();
    n.longitude_deg * eps.cos()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_22a() {
        // 1987 April 10, 0h TD: Δψ = −3.788″, Δε = +9.443″
        let n = nutation(-0.127_296_372_348);
        assert!((n.longitude_deg * 3600.0 + 3.788).abs() < 0.5);
        assert!((n.obliquity_deg * 3600.0 - 9.443).abs() < 0.2);
    }

    #[test]
    fn amplitude_bounded() {
        for i in 0..200 {
            let t = -1.0 + i as f64 * 0.01;
            let n = nutation(t);
            assert!(n.longitude_deg.abs() * 3600.0 < 19.5);
            assert!(n.obliquity_deg.abs() * 3600.0 < 10.5);
        }
    }

    #[test]
    fn equation_of_equinoxes_smaller_than_dpsi() {
        let t = 0.25;
        assert!(equation_of_equinoxes_deg(t).abs() <= nutation(t).longitude_deg.abs());
    }
}
