//! Truncated VSOP87D series (Bretagnon & Francou 1988).
//!
//! Heliocentric ecliptic spherical coordinates referred to the dynamical
//! ecliptic and equinox of date, τ in Julian millennia (TT) from J2000.0.
//! A term is kept when `A·|τ|ⁿ` reaches 1e-7 rad at |τ| = 0.2, radius terms
//! scaled by the mean distance. Over 1900–2150 geocentric longitudes stay
//! within about 1″ of the full theory.

mod earth;
mod jupiter;
mod mars;
mod mercury;
mod saturn;
mod venus;

pub(crate) use earth::EARTH;
pub(crate) use jupiter::JUPITER;
pub(crate) use mars::MARS;
pub(crate) use mercury::MERCURY;
pub(crate) use saturn::SATURN;
pub(crate) use venus::VENUS;

use std::f64::consts::TAU;

/// One periodic term `A·cos(B + C·τ)`.
pub(crate) type Term = (f64, f64, f64);

/// Poisson series for one body, each indexed by the power of τ.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Series {
    pub longitude: &'static [&'static [Term]],
    pub latitude: &'static [&'static [Term]],
    pub radius: &'static [&'static [Term]],
}

/// Heliocentric position: longitude and latitude in radians, radius in AU.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Heliocentric {
    pub longitude_rad: f64,
    pub latitude_rad: f64,
    pub radius_au: f64,
}

impl Heliocentric {
    /// Rectangular ecliptic-of-date coordinates, AU.
    pub(crate) fn rectangular(&self) -> [f64; 3] {
        let (sl, cl) = self.longitude_rad.sin_cos();
        let (sb, cb) = self.latitude_rad.sin_cos();
        [
            self.radius_au * cb * cl,
            self.radius_au * cb * sl,
            self.radius_au * sb,
        ]
    }
}

/// Julian millennia (TT) from J2000.0.
pub(crate) fn millennia_since_j2000(jd_tt: f64) -> f64 {
    (jd_tt - 2_451_545.0) / 365_250.0
}

fn sum(powers: &[&[Term]], tau: f64) -> f64 {
    powers.iter().rev().fold(0.0, |acc, terms| {
        acc * tau
            + terms
                .iter()
                .map(|&(a, b, c)| a * (b + c * tau).cos())
                .sum::<f64>()
    })
}

impl Series {
    pub(crate) fn at(&self, tau: f64) -> Heliocentric {
        Heliocentric {
            longitude_rad: sum(self.longitude, tau).rem_euclid(TAU),
            latitude_rad: sum(self.latitude, tau),
            radius_au: sum(self.radius, tau),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARCSEC: f64 = 1.0 / 206_264.806;

    /// Full-theory VSOP87D values: (series, JD TT, l rad, b rad, r AU).
    const FULL_THEORY: [(Series, f64, f64, f64, f64); 4] = [
        (EARTH, 2_460_764.5, 3.308_156_220_9, 2.8e-9, 0.998_656_819),
        (SATURN, 2_460_764.5, 6.155_494_628_8, -0.037_098_989_6, 9.603_761_718),
        (MARS, 2_452_879.5, 5.839_027_230_5, -0.031_186_254_7, 1.381_191_185),
        (MERCURY, 2_451_545.0, 4.429_348_103_6, -0.040_528_945_6, 0.466_471_475),
    ];

    #[test]
    fn truncation_stays_within_an_arcsecond() {
        for (series, jd, l, b, r) in FULL_THEORY {
            let h = series.at(millennia_since_j2000(jd));
            assert!((h.longitude_rad - l).abs() < ARCSEC, "l = {}", h.longitude_rad);
            assert!((h.latitude_rad - b).abs() < ARCSEC, "b = {}", h.latitude_rad);
            assert!((h.radius_au - r).abs() < 2e-5, "r = {}", h.radius_au);
        }
    }

    #[test]
    fn radius_vectors_stay_in_orbit() {
        let bounds = [
            (MERCURY, 0.30, 0.47),
            (VENUS, 0.71, 0.73),
            (EARTH, 0.983, 1.017),
            (MARS, 1.37, 1.68),
            (JUPITER, 4.9, 5.5),
            (SATURN, 9.0, 10.1),
        ];
        for (series, lo, hi) in bounds {
            for k in 0..50 {
                let h = series.at(millennia_since_j2000(2_451_545.0 + k as f64 * 211.0));
                assert!((lo..hi).contains(&h.radius_au), "r = {}", h.radius_au);
                assert!((0.0..TAU).contains(&h.longitude_rad));
            }
        }
    }
}
