//! IAU 2006 general precession in ecliptic longitude.
//!
//! p_A is the accumulated motion of the equinox along the ecliptic since
//! J2000.0. Ayanamsa values and the J2000 → of-date longitude shift are both
//! built on it.
//!
//! Source: Capitaine, Wallace & Chapront 2003 (IERS Conventions 2010, ch. 5).

/// General precession in longitude, degrees, at `t` Julian centuries (TT)
/// from J2000.0. About 1.397° per century.
pub fn general_precession_longitude_deg(t: f64) -> f64 {
    let arcsec = t * (5028.796195
        + t * (1.1054348 + t * (0.00007964 + t * (-0.000023857 + t * -0.0000000383))));
    arcsec / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_at_epoch() {
        assert_eq!(general_precession_longitude_deg(0.0), 0.0);
    }

    #[test]
    fn annual_rate() {
        let per_year = general_precession_longitude_deg(0.01) * 3600.0;
        assert!((per_year - 50.29).abs() < 0.05, "rate {per_year}″/yr");
    }

    #[test]
    fn sign_follows_time() {
        assert!(general_precession_longitude_deg(-0.5) < 0.0);
        assert!(general_precession_longitude_deg(0.5) > 0.0);
    }
}
