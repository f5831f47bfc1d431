//! Lahiri (Chitrapaksha) ayanamsa.
//!
//! Anchored at the Indian Astronomical Ephemeris reference value for
//! 1956-03-21 0h TT and carried by IAU 2006 general precession. The "true"
//! ayanamsa adds nutation in longitude so that apparent tropical longitudes
//! minus it give sidereal longitudes against the mean equinox.

use jyotish_frames::{general_precession_longitude_deg, nutation};
use jyotish_time::{centuries_since_j2000, jd_ut_to_tt};

/// Reference epoch (JD TT) for the Lahiri value.
pub const LAHIRI_EPOCH_JD: f64 = 2_435_553.5;

/// Lahiri mean ayanamsa at [`LAHIRI_EPOCH_JD`], degrees.
pub const LAHIRI_AT_EPOCH_DEG: f64 = 23.245_524_743;

/// Mean Lahiri ayanamsa at a TT Julian Day.
pub fn lahiri_mean_deg(jd_tt: f64) -> f64 {
    let t = centuries_since_j2000(jd_tt);
    let t0 = centuries_since_j2000(LAHIRI_EPOCH_JD);
    LAHIRI_AT_EPOCH_DEG + general_precession_longitude_deg(t) - general_precession_longitude_deg(t0)
}

/// True Lahiri ayanamsa (mean + Δψ) at a UT Julian Day.
pub fn lahiri_true_deg(jd_ut: f64) -> f64 {
    let jd_tt = jd_ut_to_tt(jd_ut);
    lahiri_mean_deg(jd_tt) + nutation(centuries_since_j2000(jd_tt)).longitude_deg
}
