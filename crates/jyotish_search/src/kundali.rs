//! Natal chart: ascendant, whole-sign houses and the nine grahas.

use jyotish_core::Engine;
use jyotish_vedic_base::{
    ALL_GRAHAS, LocalSky, aspected_houses, dignity_at, house_from_signs, lagna,
    nakshatra_from_longitude, placidus_cusps, rashi_from_longitude, strength_proxy,
};
use tracing::debug;

use crate::error::SearchError;
use crate::kundali_types::{AscendantPosition, BirthEvent, NatalChart, PlanetPosition};
use crate::positions::Motion;

/// Computes the chart for a birth.
///
/// The birth instant is the local date and time converted to UT. Houses are
/// whole signs counted from the ascendant's sign; Placidus cusps are shifted
/// to the sidereal zodiac and reported alongside.
pub fn natal_chart(engine: &Engine, birth: &BirthEvent) -> Result<NatalChart, SearchError> {
    birth.location.validate()?;
    let jd = birth.jd();
    let asc = lagna(engine, jd, &birth.location)?;
    let asc_info = rashi_from_longitude(asc.sidereal_deg);
    let asc_nak = nakshatra_from_longitude(asc.sidereal_deg);
    let ascendant = AscendantPosition {
        longitude_deg: asc.sidereal_deg,
        tropical_deg: asc.tropical_deg,
        sign: asc_info.rashi,
        degree_in_sign: asc_info.degree_in_sign,
        nakshatra: asc_nak.nakshatra,
        nakshatra_number: asc_nak.nakshatra.number(),
        pada: asc_nak.pada,
    };

    let mut planets = Vec::with_capacity(ALL_GRAHAS.len());
    for graha in ALL_GRAHAS {
        let state = engine.sidereal_state(jd, graha.body())?;
        let info = rashi_from_longitude(state.longitude_deg);
        let nak = nakshatra_from_longitude(state.longitude_deg);
        let house = house_from_signs(info.rashi.index(), asc_info.rashi.index());
        planets.push(PlanetPosition {
            graha,
            longitude_deg: state.longitude_deg,
            sign: info.rashi,
            degree_in_sign: info.degree_in_sign,
            house,
            nakshatra: nak.nakshatra,
            nakshatra_number: nak.nakshatra.number(),
            pada: nak.pada,
            motion: Motion::from_retrograde(state.retrograde),
            speed_deg_per_day: state.speed_deg_per_day,
            dignity: dignity_at(graha, state.longitude_deg),
            strength: strength_proxy(house, info.degree_in_sign),
            aspect_houses: aspected_houses(graha, house),
            aspects: Vec::new(),
            aspected_by: Vec::new(),
        });
    }
    link_aspects(&mut planets);

    let placidus = placidus_cusps(&LocalSky::at(jd, &birth.location)?)
        .map(|c| c.shifted(asc.ayanamsa_deg));
    debug!(
        name = %birth.name,
        ascendant = asc_info.rashi.name(),
        placidus = placidus.is_some(),
        "natal chart computed"
    );

    Ok(NatalChart {
        name: birth.name.clone(),
        birth_jd: jd,
        location: birth.location,
        ayanamsa_deg: asc.ayanamsa_deg,
        ascendant,
        planets,
        placidus,
    })
}

// A graha aspects every other graha sitting in one of its aspect houses.
fn link_aspects(planets: &mut [PlanetPosition]) {
    let placed: Vec<_> = planets
        .iter()
        .map(|p| (p.graha, p.house, p.aspect_houses.clone()))
        .collect();
    for p in planets.iter_mut() {
        p.aspects = placed
            .iter()
            .filter(|(g, house, _)| *g != p.graha && p.aspect_houses.contains(house))
            .map(|(g, _, _)| *g)
            .collect();
        p.aspected_by = placed
            .iter()
            .filter(|(g, _, targets)| *g != p.graha && targets.contains(&p.house))
            .map(|(g, _, _)| *g)
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use jyotish_time::ist;
    use jyotish_vedic_base::{GeoLocation, Graha};

    fn birth() -> BirthEvent {
        BirthEvent::new(
            "Test",
            NaiveDate::from_ymd_opt(1990, 1, 1).expect("date"),
            NaiveTime::from_hms_opt(12, 0, 0).expect("time"),
            GeoLocation::new(28.6139, 77.2090),
            ist(),
        )
    }

    #[test]
    fn chart_invariants() {
        let chart = natal_chart(&Engine::analytic(), &birth()).expect("chart");
        assert_eq!(chart.planets.len(), 9);
        assert_eq!(chart.house_occupancy().iter().map(|&c| u32::from(c)).sum::<u32>(), 10);
        for p in &chart.planets {
            assert!((1..=12).contains(&p.house));
            assert!((1..=27).contains(&p.nakshatra_number));
            assert!((1..=4).contains(&p.pada));
            assert_eq!(p.sign.index(), (p.longitude_deg / 30.0).floor() as u8);
        }
        let rahu = chart.planet(Graha::Rahu).expect("rahu");
        let ketu = chart.planet(Graha::Ketu).expect("ketu");
        assert!(((ketu.longitude_deg - rahu.longitude_deg).rem_euclid(360.0) - 180.0).abs() < 1e-6);
        assert_eq!(ketu.motion, Motion::Retrograde);
        assert_eq!(chart.house_of(Graha::Rahu).map(|h| (h + 5) % 12 + 1), chart.house_of(Graha::Ketu));
    }

    #[test]
    fn aspects_are_mirrored() {
        let chart = natal_chart(&Engine::analytic(), &birth()).expect("chart");
        for p in &chart.planets {
            for target in &p.aspects {
                let other = chart.planet(*target).expect("target");
                assert!(other.aspected_by.contains(&p.graha));
                assert!(p.aspect_houses.contains(&other.house));
            }
        }
    }

    #[test]
    fn placidus_first_cusp_is_the_ascendant() {
        let chart = natal_chart(&Engine::analytic(), &birth()).expect("chart");
        let cusps = chart.placidus.expect("placidus at Delhi");
        let d = (cusps.cusps_deg[0] - chart.ascendant.longitude_deg).rem_euclid(360.0);
        assert!(d < 1e-6 || d > 360.0 - 1e-6);
    }

    #[test]
    fn polar_birth_has_no_placidus() {
        let mut b = birth();
        b.location = GeoLocation::new(70.0, 25.0);
        let chart = natal_chart(&Engine::analytic(), &b).expect("chart");
        assert!(chart.placidus.is_none());
    }

    #[test]
    fn bad_latitude_is_rejected() {
        let mut b = birth();
        b.location = GeoLocation::new(-91.0, 0.0);
        assert!(matches!(natal_chart(&Engine::analytic(), &b), Err(SearchError::Vedic(_))));
    }
}
