//! House division.
//!
//! Charts use whole-sign houses counted from the ascendant's sign. Placidus
//! cusps are computed alongside for reference by trisecting the diurnal and
//! nocturnal semi-arcs; cusps 11, 12, 2 and 3 are found by fixed-point
//! iteration on right ascension, and the remaining cusps are their
//! opposites.

use serde::Serialize;

use crate::lagna::LocalSky;
use crate::util::normalize_360;

/// Placidus fails beyond the polar circles, where some ecliptic degrees
/// never rise.
pub const PLACIDUS_MAX_LATITUDE_DEG: f64 = 66.0;

const MAX_ITERATIONS: usize = 60;
const CONVERGENCE_DEG: f64 = 1e-9;

/// Twelve cusp longitudes, index 0 = house 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HouseCusps {
    pub cusps_deg: [f64; 12],
}

impl HouseCusps {
    /// Shift every cusp by `-offset_deg` (tropical to sidereal).
    pub fn shifted(&self, offset_deg: f64) -> Self {
        let mut cusps_deg = self.cusps_deg;
        for c in &mut cusps_deg {
            *c = normalize_360(*c - offset_deg);
        }
        Self { cusps_deg }
    }

    /// Placidus house (1..=12) containing a longitude.
    pub fn house_of(&self, lon_deg: f64) -> u8 {
        for i in 0..12 {
            let start = self.cusps_deg[i];
            let width = normalize_360(self.cusps_deg[(i + 1) % 12] - start);
            if normalize_360(lon_deg - start) < width {
                return i as u8 + 1;
            }
        }
        1
    }
}

fn ecliptic_longitude_of_ra(ra_deg: f64, eps_deg: f64) -> f64 {
    let ra = ra_deg.to_radians();
    normalize_360(ra.sin().atan2(ra.cos() * eps_deg.to_radians().cos()).to_degrees())
}

fn declination_of_longitude(lon_deg: f64, eps_deg: f64) -> f64 {
    (eps_deg.to_radians().sin() * lon_deg.to_radians().sin()).asin()
}

fn semi_diurnal_arc_deg(decl_rad: f64, lat_deg: f64) -> f64 {
    (-lat_deg.to_radians().tan() * decl_rad.tan())
        .clamp(-1.0, 1.0)
        .acos()
        .to_degrees()
}

// Cusp at a fraction of the semi-arc. Above the horizon the cusp's RA is
// RAMC + f·SDA; below it is RAMC + 180 − f·SNA.
fn placidus_cusp(sky: &LocalSky, fraction: f64, above: bool) -> f64 {
    let eps = sky.obliquity_deg;
    let initial = if above {
        sky.lst_deg + fraction * 90.0
    } else {
        sky.lst_deg + 180.0 - fraction * 90.0
    };
    let mut lon = ecliptic_longitude_of_ra(initial, eps);
    for _ in 0..MAX_ITERATIONS {
        let sda = semi_diurnal_arc_deg(declination_of_longitude(lon, eps), sky.latitude_deg);
        let ra = if above {
            sky.lst_deg + fraction * sda
        } else {
            sky.lst_deg + 180.0 - fraction * (180.0 - sda)
        };
        let next = ecliptic_longitude_of_ra(ra, eps);
        let delta = normalize_360(next - lon + 180.0) - 180.0;
        lon = next;
        if delta.abs() < CONVERGENCE_DEG {
            break;
        }
    }
    lon
}

/// Tropical Placidus cusps. Returns `None` beyond
/// [`PLACIDUS_MAX_LATITUDE_DEG`].
pub fn placidus_cusps(sky: &LocalSky) -> Option<HouseCusps> {
    if sky.latitude_deg.abs() > PLACIDUS_MAX_LATITUDE_DEG {
        return None;
    }
    let mut c = [0.0; 12];
    c[0] = sky.ascendant_deg();
    c[9] = sky.mc_deg();
    c[10] = placidus_cusp(sky, 1.0 / 3.0, true);
    c[11] = placidus_cusp(sky, 2.0 / 3.0, true);
    c[1] = placidus_cusp(sky, 2.0 / 3.0, false);
    c[2] = placidus_cusp(sky, 1.0 / 3.0, false);
    for i in [0, 1, 2, 9, 10, 11] {
        c[(i + 6) % 12] = normalize_360(c[i] + 180.0);
    }
    Some(HouseCusps { cusps_deg: c })
}

/// Whole-sign cusps: house `n` starts at 0° of the `n`-th sign.
pub fn whole_sign_cusps(asc_sidereal_deg: f64) -> HouseCusps {
    let first = (normalize_360(asc_sidereal_deg) / 30.0).floor() * 30.0;
    let mut cusps_deg = [0.0; 12];
    for (i, c) in cusps_deg.iter_mut().enumerate() {
        *c = normalize_360(first + 30.0 * i as f64);
    }
    HouseCusps { cusps_deg }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sky(lst: f64, lat: f64) -> LocalSky {
        LocalSky {
            lst_deg: lst,
            obliquity_deg: 23.4393,
            latitude_deg: lat,
        }
    }

    #[test]
    fn equator_cusps_are_near_equal_ra_steps() {
        // At the equator every semi-arc is 90°, so cusp RAs step by 30°
        let h = placidus_cusps(&sky(0.0, 0.0)).expect("cusps");
        let eleventh_ra = 30.0;
        let expected = ecliptic_longitude_of_ra(eleventh_ra, 23.4393);
        assert!((h.cusps_deg[10] - expected).abs() < 1e-6);
    }

    #[test]
    fn cusps_are_in_zodiacal_order() {
        for lat in [-40.0, 0.0, 19.0, 28.6, 51.5] {
            for k in 0..12 {
                let h = placidus_cusps(&sky(k as f64 * 30.0 + 7.0, lat)).expect("cusps");
                let mut total = 0.0;
                for i in 0..12 {
                    let w = normalize_360(h.cusps_deg[(i + 1) % 12] - h.cusps_deg[i]);
                    assert!(w > 0.0 && w < 90.0, "lat {lat} house {} width {w}", i + 1);
                    total += w;
                }
                assert!((total - 360.0).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn opposite_cusps_differ_by_180() {
        let h = placidus_cusps(&sky(123.0, 28.6)).expect("cusps");
        for i in 0..6 {
            let d = normalize_360(h.cusps_deg[i + 6] - h.cusps_deg[i]);
            assert!((d - 180.0).abs() < 1e-9);
        }
    }

    #[test]
    fn polar_latitudes_are_refused() {
        assert!(placidus_cusps(&sky(0.0, 70.0)).is_none());
    }

    #[test]
    fn whole_sign_and_house_lookup() {
        let h = whole_sign_cusps(125.0);
        assert_eq!(h.cusps_deg[0], 120.0);
        assert_eq!(h.cusps_deg[11], 90.0);
        assert_eq!(h.house_of(125.0), 1);
        assert_eq!(h.house_of(95.0), 12);
        assert_eq!(h.house_of(300.0), 7);
    }

    #[test]
    fn shifting_moves_every_cusp() {
        let h = whole_sign_cusps(10.0).shifted(24.0);
        assert!((h.cusps_deg[0] - 336.0).abs() < 1e-12);
    }
}
