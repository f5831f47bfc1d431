//! Lunar nodes (Meeus ch. 47).

use super::moon::LunarArguments;

/// Mean ascending node of the lunar orbit, degrees, equinox of date.
pub(crate) fn mean_node_deg(t: f64) -> f64 {
    let t2 = t * t;
    (125.044_547_9 - 1934.136_289_1 * t + 0.002_075_4 * t2 + t2 * t / 467_441.0
        - t2 * t2 / 60_616_000.0)
        .rem_euclid(360.0)
}

/// True node: mean node plus the principal periodic terms.
pub(crate) fn true_node_deg(t: f64) -> f64 {
    let a = LunarArguments::at(t);
    let d = a.elongation.to_radians();
    let m = a.sun_anomaly.to_radians();
    let mp = a.moon_anomaly.to_radians();
    let f = a.latitude_argument.to_radians();
    let correction = -1.4979 * (2.0 * (d - f)).sin() - 0.1500 * m.sin()
        + 0.1226 * (2.0 * d).sin()
        + 0.1176 * (2.0 * f).sin()
        - 0.0801 * (2.0 * (mp - f)).sin();
    (mean_node_deg(t) + correction).rem_euclid(360.0)
}
