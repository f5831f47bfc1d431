//! File-free analytic ephemeris.
//!
//! Combines the solar, lunar, planetary and nodal theories in this module
//! into apparent ecliptic coordinates of date: geometric positions plus
//! nutation in longitude plus annual aberration.

mod moon;
mod nodes;
mod planets;
mod sun;
mod vsop87;

use jyotish_frames::nutation;
use jyotish_time::{centuries_since_j2000, jd_ut_to_tt};

use crate::{Body, EclipticPoint, Ephemeris, EphemerisError, NodeMode};

use planets::Planet;
use sun::{ABERRATION_DEG_AU, SolarCoords};

pub(crate) use nodes::{mean_node_deg, true_node_deg};

pub(crate) const AU_KM: f64 = 149_597_870.7;

/// Analytic backend. Needs no data files and is reentrant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalyticEphemeris {
    node_mode: NodeMode,
}

impl AnalyticEphemeris {
    pub fn new(node_mode: NodeMode) -> Self {
        Self { node_mode }
    }
}

/// Annual aberration in longitude for a point at (λ, β) given the Sun's
/// geometric longitude. All degrees.
pub(crate) fn annual_aberration_deg(lon: f64, lat: f64, sun_lon: f64) -> f64 {
    let cos_b = lat.to_radians().cos().max(1e-6);
    -ABERRATION_DEG_AU * (sun_lon - lon).to_radians().cos() / cos_b
}

/// Rahu under the requested node model, equinox of date (no nutation).
pub(crate) fn node_longitude_deg(mode: NodeMode, t: f64) -> f64 {
    match mode {
        NodeMode::Mean => mean_node_deg(t),
        NodeMode::True => true_node_deg(t),
    }
}

impl Ephemeris for AnalyticEphemeris {
    fn name(&self) -> &'static str {
        "analytic"
    }

    fn apparent(&self, jd_ut: f64, body: Body) -> Result<EclipticPoint, EphemerisError> {
        let jd_tt = jd_ut_to_tt(jd_ut);
        let t = centuries_since_j2000(jd_tt);
        let dpsi = nutation(t).longitude_deg;

        let (lon, lat, distance_km) = match body {
            Body::Sun => {
                let s = SolarCoords::at(t);
                (
                    s.true_longitude_deg - ABERRATION_DEG_AU / s.distance_au,
                    0.0,
                    s.distance_au * AU_KM,
                )
            }
            Body::Moon => {
                let m = moon::geometric(t);
                (m.longitude_deg, m.latitude_deg, m.distance_km)
            }
            Body::Mercury | Body::Venus | Body::Mars | Body::Jupiter | Body::Saturn => {
                let planet = match body {
                    Body::Mercury => Planet::Mercury,
                    Body::Venus => Planet::Venus,
                    Body::Mars => Planet::Mars,
                    Body::Jupiter => Planet::Jupiter,
                    _ => Planet::Saturn,
                };
                let sun = SolarCoords::at(t);
                let (lon, lat, dist_au) = planets::geocentric(planet, jd_tt);
                (
                    lon + annual_aberration_deg(lon, lat, sun.true_longitude_deg),
                    lat,
                    dist_au * AU_KM,
                )
            }
            Body::Rahu => (node_longitude_deg(self.node_mode, t), 0.0, 0.0),
            Body::Ketu | Body::Ascendant => {
                return Err(EphemerisError::UnknownBody(body.name().into()));
            }
        };

        Ok(EclipticPoint {
            longitude_deg: (lon + dpsi).rem_euclid(360.0),
            latitude_deg: lat,
            distance_km,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jd(y: i32, m: u32, d: f64) -> f64 {
        jyotish_time::calendar_to_jd(y, m, d)
    }

    #[test]
    fn sun_at_march_equinox_2025() {
        // Equinox 2025-03-20 09:01 UT: apparent longitude 0°
        let p = AnalyticEphemeris::default()
            .apparent(jd(2025, 3, 20.376), Body::Sun)
            .expect("sun");
        let off = if p.longitude_deg > 180.0 {
            p.longitude_deg - 360.0
        } else {
            p.longitude_deg
        };
        assert!(off.abs() < 0.02, "λ☉ = {}", p.longitude_deg);
    }

    #[test]
    fn full_moon_opposes_sun() {
        // Full moon 2025-03-14 06:55 UT (total lunar eclipse)
        let e = AnalyticEphemeris::default();
        let t = jd(2025, 3, 14.288);
        let sun = e.apparent(t, Body::Sun).expect("sun").longitude_deg;
        let moon = e.apparent(t, Body::Moon).expect("moon").longitude_deg;
        let elong = (moon - sun).rem_euclid(360.0);
        assert!((elong - 180.0).abs() < 0.1, "elongation {elong}");
    }

    #[test]
    fn rahu_only_node_is_answered_directly() {
        let e = AnalyticEphemeris::new(NodeMode::True);
        assert!(e.apparent(2_451_545.0, Body::Rahu).is_ok());
        assert!(matches!(
            e.apparent(2_451_545.0, Body::Ketu),
            Err(EphemerisError::UnknownBody(_))
        ));
        assert!(matches!(
            e.apparent(2_451_545.0, Body::Ascendant),
            Err(EphemerisError::UnknownBody(_))
        ));
    }
}
