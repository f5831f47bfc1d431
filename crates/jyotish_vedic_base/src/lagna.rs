//! Lagna (ascendant) and MC (midheaven).
//!
//! Both are tropical ecliptic longitudes of date derived from the local
//! apparent sidereal time (LST, equal to the right ascension of the MC) and
//! the true obliquity:
//!
//! - `Asc = atan2(−cos LST, sin LST·cos ε + tan φ·sin ε)`, taken on the
//!   eastern horizon (the result is turned by 180° into the rising point)
//! - `MC = atan2(sin LST, cos LST·cos ε)`

use jyotish_core::Engine;
use jyotish_frames::{equation_of_equinoxes_deg, true_obliquity_deg};
use jyotish_time::{centuries_since_j2000, jd_ut_to_tt, local_sidereal_time_deg};

use crate::error::VedicError;
use crate::riseset_types::GeoLocation;
use crate::util::normalize_360;

/// Sidereal-time inputs shared by the ascendant, the MC and house cusps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalSky {
    /// Local apparent sidereal time (= RAMC), degrees.
    pub lst_deg: f64,
    /// True obliquity of date, degrees.
    pub obliquity_deg: f64,
    pub latitude_deg: f64,
}

impl LocalSky {
    pub fn at(jd_ut: f64, location: &GeoLocation) -> Result<Self, VedicError> {
        location.validate()?;
        let t = centuries_since_j2000(jd_ut_to_tt(jd_ut));
        Ok(Self {
            lst_deg: local_sidereal_time_deg(
                jd_ut,
                location.longitude_deg,
                equation_of_equinoxes_deg(t),
            ),
            obliquity_deg: true_obliquity_deg(t),
            latitude_deg: location.latitude_deg,
        })
    }

    /// Tropical ascendant, degrees in [0, 360).
    pub fn ascendant_deg(&self) -> f64 {
        let lst = self.lst_deg.to_radians();
        let eps = self.obliquity_deg.to_radians();
        let phi = self.latitude_deg.to_radians();
        let y = -lst.cos();
        let x = lst.sin() * eps.cos() + phi.tan() * eps.sin();
        normalize_360(y.atan2(x).to_degrees() + 180.0)
    }

    /// Tropical MC, degrees in [0, 360).
    pub fn mc_deg(&self) -> f64 {
        let lst = self.lst_deg.to_radians();
        let eps = self.obliquity_deg.to_radians();
        normalize_360(lst.sin().atan2(lst.cos() * eps.cos()).to_degrees())
    }
}

/// Tropical and sidereal ascendant at an instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lagna {
    pub tropical_deg: f64,
    pub sidereal_deg: f64,
    pub mc_tropical_deg: f64,
    pub ayanamsa_deg: f64,
}

pub fn lagna(engine: &Engine, jd_ut: f64, location: &GeoLocation) -> Result<Lagna, VedicError> {
    let sky = LocalSky::at(jd_ut, location)?;
    let ayanamsa_deg = engine.ayanamsa(jd_ut)?;
    let tropical_deg = sky.ascendant_deg();
    Ok(Lagna {
        tropical_deg,
        sidereal_deg: normalize_360(tropical_deg - ayanamsa_deg),
        mc_tropical_deg: sky.mc_deg(),
        ayanamsa_deg,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sky(lst: f64, lat: f64) -> LocalSky {
        LocalSky {
            lst_deg: lst,
            obliquity_deg: 23.44,
            latitude_deg: lat,
        }
    }

    #[test]
    fn equator_with_aries_culminating() {
        // LST 0 at the equator: MC 0°, Cancer 0° rising
        let s = sky(0.0, 0.0);
        assert!(s.mc_deg().abs() < 1e-9 || (s.mc_deg() - 360.0).abs() < 1e-9);
        assert!((s.ascendant_deg() - 90.0).abs() < 1e-9);
    }

    #[test]
    fn equinoctial_points_rise_at_lst_18h_and_6h() {
        // LST 270°: MC 270° (Capricorn 0°), Aries 0° on the eastern horizon
        let s = sky(270.0, 28.6);
        assert!((s.mc_deg() - 270.0).abs() < 1e-9);
        let asc = s.ascendant_deg();
        assert!(asc < 1e-9 || (asc - 360.0).abs() < 1e-9, "{asc}");
        // LST 90°: Libra 0° rising
        assert!((sky(90.0, 28.6).ascendant_deg() - 180.0).abs() < 1e-9);
    }

    #[test]
    fn ascendant_is_ahead_of_mc() {
        for i in 0..36 {
            let s = sky(i as f64 * 10.0, 40.0);
            let ahead = normalize_360(s.ascendant_deg() - s.mc_deg());
            assert!(ahead > 0.0 && ahead < 180.0, "lst {} ahead {ahead}", s.lst_deg);
        }
    }

    #[test]
    fn sidereal_lagna_subtracts_ayanamsa() {
        let e = Engine::analytic();
        let l = lagna(&e, 2_451_545.0, &GeoLocation::new(28.6, 77.2)).expect("lagna");
        assert!((normalize_360(l.tropical_deg - l.ayanamsa_deg) - l.sidereal_deg).abs() < 1e-9);
        assert!((23.8..23.9).contains(&l.ayanamsa_deg));
    }
}
