//! Solar coordinates, Meeus ch. 25 (about 0.01°).

/// Aberration constant over one AU, degrees (20.4898″).
pub(crate) const ABERRATION_DEG_AU: f64 = 0.005_691_611;

/// Geometric solar longitude (mean equinox of date) and distance.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SolarCoords {
    pub true_longitude_deg: f64,
    pub distance_au: f64,
}

impl SolarCoords {
    pub(crate) fn at(t: f64) -> Self {
        let t2 = t * t;
        let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t2;
        let m = 357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t2;
        let e = 0.016_708_634 - 0.000_042_037 * t - 0.000_000_126_7 * t2;

        let mr = m.to_radians();
        let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t2) * mr.sin()
            + (0.019_993 - 0.000_101 * t) * (2.0 * mr).sin()
            + 0.000_289 * (3.0 * mr).sin();
        let nu = (m + c).to_radians();
        Self {
            true_longitude_deg: (l0 + c).rem_euclid(360.0),
            distance_au: 1.000_001_018 * (1.0 - e * e) / (1.0 + e * nu.cos()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_25a() {
        // 1992 October 13, 0h TD: ☉ = 199.90988°, R = 0.99766 AU
        let s = SolarCoords::at(-0.072_183_436);
        assert!((s.true_longitude_deg - 199.909_88).abs() < 1e-4);
        assert!((s.distance_au - 0.997_66).abs() < 2e-5);
    }

    #[test]
    fn distance_within_orbit_extremes() {
        for i in 0..366 {
            let s = SolarCoords::at(0.25 + i as f64 / 36_525.0);
            assert!((0.983..1.017).contains(&s.distance_au));
        }
    }
}
