//! ΔT = TT − UT.
//!
//! Piecewise polynomials of Espenak & Meeus (NASA eclipse canon, 2006),
//! valid from 1800 to 2150, with the long-term parabola outside that span.

use crate::julian::jd_to_calendar;

/// ΔT in seconds for a decimal year.
pub fn delta_t_seconds(year: f64) -> f64 {
    let y = year;
    if y < 1800.0 {
        long_term(y)
    } else if y < 1860.0 {
        let t = y - 1800.0;
        13.72 - 0.332447 * t + 0.0068612 * t.powi(2) + 0.0041116 * t.powi(3)
            - 0.00037436 * t.powi(4)
            + 0.0000121272 * t.powi(5)
            - 0.0000001699 * t.powi(6)
            + 0.000000000875 * t.powi(7)
    } else if y < 1900.0 {
        let t = y - 1860.0;
        7.62 + 0.5737 * t - 0.251754 * t.powi(2) + 0.01680668 * t.powi(3)
            - 0.0004473624 * t.powi(4)
            + t.powi(5) / 233_174.0
    } else if y < 1920.0 {
        let t = y - 1900.0;
        -2.79 + 1.494119 * t - 0.0598939 * t.powi(2) + 0.0061966 * t.powi(3)
            - 0.000197 * t.powi(4)
    } else if y < 1941.0 {
        let t = y - 1920.0;
        21.20 + 0.84493 * t - 0.076100 * t.powi(2) + 0.0020936 * t.powi(3)
    } else if y < 1961.0 {
        let t = y - 1950.0;
        29.07 + 0.407 * t - t.powi(2) / 233.0 + t.powi(3) / 2547.0
    } else if y < 1986.0 {
        let t = y - 1975.0;
        45.45 + 1.067 * t - t.powi(2) / 260.0 - t.powi(3) / 718.0
    } else if y < 2005.0 {
        let t = y - 2000.0;
        63.86 + 0.3345 * t - 0.060374 * t.powi(2)
            + 0.0017275 * t.powi(3)
            + 0.000651814 * t.powi(4)
            + 0.00002373599 * t.powi(5)
    } else if y < 2050.0 {
        let t = y - 2000.0;
        62.92 + 0.32217 * t + 0.005589 * t.powi(2)
    } else if y < 2150.0 {
        long_term(y) - 0.5628 * (2150.0 - y)
    } else {
        long_term(y)
    }
}

fn long_term(year: f64) -> f64 {
    let u = (year - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u
}

/// Convert a Julian Day in UT to Terrestrial Time.
pub fn jd_ut_to_tt(jd_ut: f64) -> f64 {
    let (year, month, _) = jd_to_calendar(jd_ut);
    let decimal_year = year as f64 + (month as f64 - 0.5) / 12.0;
    jd_ut + delta_t_seconds(decimal_year) / 86_400.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modern_value_near_seventy_seconds() {
        let dt = delta_t_seconds(2020.0);
        assert!((dt - 70.0).abs() < 5.0, "ΔT(2020) = {dt}");
    }

    #[test]
    fn year_2000_value() {
        let dt = delta_t_seconds(2000.0);
        assert!((dt - 63.86).abs() < 0.01);
    }

    #[test]
    fn segments_join_smoothly() {
        for &edge in &[1860.0, 1900.0, 1920.0, 1941.0, 1961.0, 1986.0, 2005.0, 2050.0, 2150.0] {
            let before = delta_t_seconds(edge - 1e-6);
            let after = delta_t_seconds(edge);
            assert!(
                (before - after).abs() < 2.0,
                "jump of {} s at {edge}",
                before - after
            );
        }
    }

    #[test]
    fn tt_is_ahead_of_ut() {
        let jd = 2_460_000.5;
        let tt = jd_ut_to_tt(jd);
        assert!(tt > jd);
        assert!((tt - jd) * 86_400.0 < 100.0);
    }
}
