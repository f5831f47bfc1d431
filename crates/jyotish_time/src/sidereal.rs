//! Sidereal time.
//!
//! UT is used in place of UT1; the difference (< 0.9 s) is below the
//! resolution of every calendar quantity derived from it.
//!
//! - ERA: IERS Conventions 2010, eq. 5.15.
//! - GMST polynomial: Capitaine et al. 2003.

use crate::julian::{J2000_JD, centuries_since_j2000};

/// Earth Rotation Angle in degrees, [0, 360).
pub fn earth_rotation_angle_deg(jd_ut: f64) -> f64 {
    let du = jd_ut - J2000_JD;
    // Split the integer day count so the turn fraction keeps its precision.
    let turns = 0.779_057_273_264_0 + 0.002_737_811_911_354_48 * du + du.fract();
    (turns.rem_euclid(1.0)) * 360.0
}

/// Greenwich Mean Sidereal Time in degrees, [0, 360).
pub fn gmst_deg(jd_ut: f64) -> f64 {
    let t = centuries_since_j2000(jd_ut);
    let poly_arcsec = 0.014506 + 4612.156534 * t + 1.3915817 * t * t
        - 0.00000044 * t.powi(3)
        - 0.000029956 * t.powi(4)
        - 0.0000000368 * t.powi(5);
    (earth_rotation_angle_deg(jd_ut) + poly_arcsec / 3600.0).rem_euclid(360.0)
}

/// Local sidereal time in degrees for an east-positive longitude.
///
/// `equation_of_equinoxes_deg` turns mean into apparent sidereal time; pass
/// `0.0` for the mean value.
pub fn local_sidereal_time_deg(
    jd_ut: f64,
    longitude_east_deg: f64,
    equation_of_equinoxes_deg: f64,
) -> f64 {
    (gmst_deg(jd_ut) + longitude_east_deg + equation_of_equinoxes_deg).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gmst_at_j2000_midnight() {
        // 2000-01-01 0h UT: 6h 39m 51.2s = 99.9635°
        let g = gmst_deg(2_451_544.5);
        assert!((g - 99.9635).abs() < 0.01, "GMST = {g}");
    }

    #[test]
    fn meeus_example_12a() {
        // 1987 April 10, 0h UT: 13h 10m 46.3668s = 197.693195°
        let g = gmst_deg(2_446_895.5);
        assert!((g - 197.693195).abs() < 0.001, "GMST = {g}");
    }

    #[test]
    fn sidereal_day_gains_about_one_degree() {
        let a = gmst_deg(2_460_000.5);
        let b = gmst_deg(2_460_001.5);
        let gain = (b - a).rem_euclid(360.0);
        assert!((gain - 0.9856).abs() < 0.001, "daily gain {gain}");
    }

    #[test]
    fn local_time_adds_longitude() {
        let jd = 2_460_000.5;
        let lst = local_sidereal_time_deg(jd, 77.209, 0.0);
        let expected = (gmst_deg(jd) + 77.209).rem_euclid(360.0);
        assert!((lst - expected).abs() < 1e-9);
    }

    #[test]
    fn outputs_in_range() {
        for &jd in &[2_440_000.5, 2_451_545.0, 2_460_000.25, 2_470_000.75] {
            let g = gmst_deg(jd);
            assert!((0.0..360.0).contains(&g));
        }
    }
}
