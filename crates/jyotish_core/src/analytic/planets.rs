//! Geocentric planets from the truncated VSOP87D series.
//!
//! Heliocentric positions of the planet and of the Earth are differenced
//! in the ecliptic of date, with the planet taken at the light-time
//! retarded instant (Meeus ch. 33), then reduced to the FK5 frame
//! (Meeus ch. 32). Nutation and aberration are applied by the caller.

use super::vsop87::{
    EARTH, JUPITER, MARS, MERCURY, SATURN, Series, VENUS, millennia_since_j2000,
};

/// Light time for one AU, days.
const LIGHT_DAYS_PER_AU: f64 = 0.005_775_518_3;

const DAYS_PER_MILLENNIUM: f64 = 365_250.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Planet {
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

impl Planet {
    fn series(self) -> Series {
        match self {
            Planet::Mercury => MERCURY,
            Planet::Venus => VENUS,
            Planet::Mars => MARS,
            Planet::Jupiter => JUPITER,
            Planet::Saturn => SATURN,
        }
    }
}

/// VSOP87 dynamical frame to FK5: (Δλ, Δβ) in degrees.
fn fk5_correction(lon_deg: f64, lat_deg: f64, tau: f64) -> (f64, f64) {
    let t = tau * 10.0;
    let lp = (lon_deg - 1.397 * t - 0.000_31 * t * t).to_radians();
    let (s, c) = lp.sin_cos();
    let dlon = -0.090_33 + 0.039_16 * (c + s) * lat_deg.to_radians().tan();
    let dlat = 0.039_16 * (c - s);
    (dlon / 3600.0, dlat / 3600.0)
}

/// Geocentric geometric-of-date (longitude°, latitude°, distance AU),
/// corrected for light time.
pub(crate) fn geocentric(p: Planet, jd_tt: f64) -> (f64, f64, f64) {
    let tau = millennia_since_j2000(jd_tt);
    let earth = EARTH.at(tau).rectangular();
    let series = p.series();
    let from_earth = |retard_days: f64| {
        let h = series.at(tau - retard_days / DAYS_PER_MILLENNIUM).rectangular();
        [h[0] - earth[0], h[1] - earth[1], h[2] - earth[2]]
    };

    let g = from_earth(0.0);
    let dist = (g[0] * g[0] + g[1] * g[1] + g[2] * g[2]).sqrt();
    let g = from_earth(dist * LIGHT_DAYS_PER_AU);

    let rho = g[0].hypot(g[1]);
    let lon = g[1].atan2(g[0]).to_degrees();
    let lat = g[2].atan2(rho).to_degrees();
    let (dlon, dlat) = fk5_correction(lon, lat, tau);
    ((lon + dlon).rem_euclid(360.0), lat + dlat, rho.hypot(g[2]))
}
