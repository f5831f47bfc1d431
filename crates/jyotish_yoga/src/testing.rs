//! Hand-placed charts for rule tests.

use jyotish_search::{AscendantPosition, Motion, NatalChart, PlanetPosition};
use jyotish_vedic_base::{
    GeoLocation, Graha, Rashi, aspected_houses, dignity_at, house_from_signs,
    nakshatra_from_longitude, rashi_from_longitude, strength_proxy,
};

/// Chart with the ascendant at 15° of `asc` and each graha at the given
/// sidereal longitude. Grahas left out are absent from the chart.
pub(crate) fn chart(asc: Rashi, placements: &[(Graha, f64)]) -> NatalChart {
    let asc_lon = f64::from(asc.index()) * 30.0 + 15.0;
    let asc_nak = nakshatra_from_longitude(asc_lon);
    let planets = placements
        .iter()
        .map(|&(graha, lon)| {
            let info = rashi_from_longitude(lon);
            let nak = nakshatra_from_longitude(lon);
            let house = house_from_signs(info.rashi.index(), asc.index());
            PlanetPosition {
                graha,
                longitude_deg: lon,
                sign: info.rashi,
                degree_in_sign: info.degree_in_sign,
                house,
                nakshatra: nak.nakshatra,
                nakshatra_number: nak.nakshatra.number(),
                pada: nak.pada,
                motion: Motion::Direct,
                speed_deg_per_day: 1.0,
                dignity: dignity_at(graha, lon),
                strength: strength_proxy(house, info.degree_in_sign),
                aspect_houses: aspected_houses(graha, house),
                aspects: Vec::new(),
                aspected_by: Vec::new(),
            }
        })
        .collect();
    NatalChart {
        name: "fixture".into(),
        birth_jd: 2_451_545.0,
        location: GeoLocation::new(28.6139, 77.2090),
        ayanamsa_deg: 23.85,
        ascendant: AscendantPosition {
            longitude_deg: asc_lon,
            tropical_deg: asc_lon + 23.85,
            sign: asc,
            degree_in_sign: 15.0,
            nakshatra: asc_nak.nakshatra,
            nakshatra_number: asc_nak.nakshatra.number(),
            pada: asc_nak.pada,
        },
        planets,
        placidus: None,
    }
}

/// Longitude at `deg` inside `sign`.
pub(crate) fn at(sign: Rashi, deg: f64) -> f64 {
    f64::from(sign.index()) * 30.0 + deg
}
