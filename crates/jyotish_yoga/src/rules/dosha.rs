//! Manglik, Kaalsarp and the Sade-Sati reading.

use jyotish_search::{SadeSatiPhase, sade_sati_phase};
use jyotish_vedic_base::{Graha, SAPTA_GRAHAS};

use super::{BENEFICS, join_names};
use crate::context::{EvaluationContext, house_from, is_kendra};
use crate::finding::{Evaluation, YogaStrength};
use crate::registry::YogaEvaluator;

const MANGLIK_HOUSES: [u8; 6] = [1, 2, 4, 7, 8, 12];

/// Kaalsarp types indexed by Rahu's house.
pub const KAALSARP_TYPES: [&str; 12] = [
    "Anant",
    "Kulik",
    "Vasuki",
    "Shankhpal",
    "Padma",
    "Mahapadma",
    "Takshak",
    "Karkotak",
    "Shankhachud",
    "Ghatak",
    "Vishdhar",
    "Sheshnag",
];

pub struct Manglik;

impl YogaEvaluator for Manglik {
    fn id(&self) -> &'static str {
        "manglik"
    }

    fn name(&self) -> &'static str {
        "Manglik Dosha"
    }

    fn evaluate(&self, ctx: &EvaluationContext) -> Evaluation {
        let Some(mars) = ctx.planet(Graha::Mars) else {
            return Evaluation::missing(Graha::Mars);
        };
        let Some(moon_house) = ctx.house(Graha::Moon) else {
            return Evaluation::missing(Graha::Moon);
        };

        let mut reasons = Vec::new();
        let mut triggers = 0u8;
        if MANGLIK_HOUSES.contains(&mars.house) {
            triggers += 1;
            reasons.push(format!("Mars in house {} from the ascendant", mars.house));
        }
        let from_moon = house_from(moon_house, mars.house);
        if MANGLIK_HOUSES.contains(&from_moon) {
            triggers += 1;
            reasons.push(format!("Mars in house {from_moon} from the Moon"));
        }
        if triggers == 0 {
            return Evaluation::inactive(
                "Mars is outside houses 1, 2, 4, 7, 8 and 12 from both the ascendant and the Moon",
            );
        }

        let mut mitigations = 0u8;
        if ctx.own_or_exalted(Graha::Mars) {
            mitigations += 1;
            reasons.push(format!("Mars in its own or exaltation sign ({})", mars.sign.name()));
        }
        let jupiter_in_kendra = ctx
            .house(Graha::Jupiter)
            .is_some_and(|j| is_kendra(j) || is_kendra(house_from(moon_house, j)));
        if jupiter_in_kendra {
            mitigations += 1;
            reasons.push("Jupiter in a kendra from the ascendant or the Moon".into());
        }
        if let Some(b) = BENEFICS
            .into_iter()
            .find(|&b| ctx.conjunct(b, Graha::Mars) || ctx.aspects(b, Graha::Mars))
        {
            mitigations += 1;
            reasons.push(format!("{} conjunct or aspecting Mars", b.name()));
        }

        match triggers.saturating_sub(mitigations) {
            0 => Evaluation::active(YogaStrength::Cancelled, reasons).with_key("cancelled"),
            1 => Evaluation::active(YogaStrength::Partial, reasons).with_key("partial"),
            _ => Evaluation::active(YogaStrength::Strong, reasons),
        }
    }
}

pub struct Kaalsarp;

impl YogaEvaluator for Kaalsarp {
    fn id(&self) -> &'static str {
        "kaalsarp"
    }

    fn name(&self) -> &'static str {
        "Kaalsarp Dosha"
    }

    fn evaluate(&self, ctx: &EvaluationContext) -> Evaluation {
        let Some(rahu) = ctx.house(Graha::Rahu) else {
            return Evaluation::missing(Graha::Rahu);
        };
        let Some(ketu) = ctx.house(Graha::Ketu) else {
            return Evaluation::missing(Graha::Ketu);
        };
        // houses from Rahu forward to Ketu, both ends included
        let span = house_from(rahu, ketu);

        let mut outside = Vec::new();
        let mut beside_node = Vec::new();
        for g in SAPTA_GRAHAS {
            let Some(h) = ctx.house(g) else {
                return Evaluation::missing(g);
            };
            if house_from(rahu, h) > span {
                outside.push(g);
            }
            if h == rahu || h == ketu {
                beside_node.push(g);
            }
        }
        if !outside.is_empty() {
            return Evaluation::inactive(format!(
                "{} outside the arc from Rahu to Ketu",
                join_names(&outside)
            ));
        }

        let kind = KAALSARP_TYPES[usize::from(rahu - 1)];
        let mut reasons = vec![
            format!("all seven planets lie from Rahu (house {rahu}) to Ketu (house {ketu})"),
            format!("{kind} type, named by Rahu in house {rahu}"),
        ];
        let strength = if beside_node.is_empty() {
            YogaStrength::High
        } else {
            reasons.push(format!("{} share a house with a node", join_names(&beside_node)));
            YogaStrength::Partial
        };
        Evaluation::active(strength, reasons).with_detail(kind)
    }
}

pub struct SadeSati;

impl YogaEvaluator for SadeSati {
    fn id(&self) -> &'static str {
        "sade_sati"
    }

    fn name(&self) -> &'static str {
        "Sade-Sati"
    }

    fn evaluate(&self, ctx: &EvaluationContext) -> Evaluation {
        let Some(moon) = ctx.planet(Graha::Moon) else {
            return Evaluation::missing(Graha::Moon);
        };
        let Some(transit) = ctx.transit else {
            return Evaluation::missing("Saturn transit");
        };
        let Some(phase) = sade_sati_phase(transit.saturn_sign, moon.sign) else {
            return Evaluation::inactive(format!(
                "Saturn in {} is not within one sign of the Moon sign {}",
                transit.saturn_sign.name(),
                moon.sign.name()
            ));
        };

        let (strength, key) = match phase {
            SadeSatiPhase::Rising => (YogaStrength::Moderate, "rising"),
            SadeSatiPhase::Peak => (YogaStrength::High, "peak"),
            SadeSatiPhase::Setting => (YogaStrength::Moderate, "setting"),
        };
        let reasons = vec![
            format!(
                "Saturn in {} with the Moon in {}",
                transit.saturn_sign.name(),
                moon.sign.name()
            ),
            format!("phase {} ({})", phase.number(), phase.name()),
        ];
        let cycle = transit
            .cycles
            .iter()
            .find(|c| c.moon_sign == moon.sign && c.contains(transit.query_date))
            .copied();
        Evaluation {
            sade_sati: cycle,
            ..Evaluation::active(strength, reasons)
                .with_key(key)
                .with_detail(phase.name())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::SaturnTransit;
    use crate::testing::{at, chart};
    use chrono::NaiveDate;
    use jyotish_vedic_base::Rashi;

    #[test]
    fn manglik_from_both_references_is_strong() {
        // Mars with the Moon in the 7th from a Leo ascendant.
        let c = chart(
            Rashi::Leo,
            &[
                (Graha::Mars, at(Rashi::Aquarius, 5.0)),
                (Graha::Moon, at(Rashi::Aquarius, 20.0)),
                (Graha::Jupiter, at(Rashi::Virgo, 10.0)),
                (Graha::Venus, at(Rashi::Virgo, 12.0)),
                (Graha::Mercury, at(Rashi::Virgo, 14.0)),
            ],
        );
        let e = Manglik.evaluate(&EvaluationContext::new(&c));
        assert!(e.is_active);
        assert_eq!(e.strength, YogaStrength::Strong);
    }

    #[test]
    fn manglik_mitigated_to_cancelled() {
        // Mars in Aries (own) in the 1st from an Aries ascendant, Moon in
        // Taurus (Mars 12th from it), Jupiter in the 1st with Mars.
        let c = chart(
            Rashi::Aries,
            &[
                (Graha::Mars, at(Rashi::Aries, 5.0)),
                (Graha::Moon, at(Rashi::Taurus, 20.0)),
                (Graha::Jupiter, at(Rashi::Aries, 10.0)),
            ],
        );
        let e = Manglik.evaluate(&EvaluationContext::new(&c));
        assert!(e.is_active);
        assert_eq!(e.strength, YogaStrength::Cancelled);
        assert_eq!(e.narrative_key, "cancelled");
    }

    #[test]
    fn manglik_absent() {
        // Mars 3rd from the ascendant and 11th from the Moon.
        let c = chart(
            Rashi::Aries,
            &[
                (Graha::Mars, at(Rashi::Gemini, 5.0)),
                (Graha::Moon, at(Rashi::Leo, 20.0)),
            ],
        );
        let e = Manglik.evaluate(&EvaluationContext::new(&c));
        assert!(!e.is_active);
        assert_eq!(e.strength, YogaStrength::None);
    }

    fn hemmed(sun_sign: Rashi) -> jyotish_search::NatalChart {
        chart(
            Rashi::Aries,
            &[
                (Graha::Rahu, at(Rashi::Aries, 10.0)),
                (Graha::Ketu, at(Rashi::Libra, 10.0)),
                (Graha::Sun, at(sun_sign, 10.0)),
                (Graha::Moon, at(Rashi::Gemini, 10.0)),
                (Graha::Mars, at(Rashi::Cancer, 10.0)),
                (Graha::Mercury, at(Rashi::Leo, 10.0)),
                (Graha::Jupiter, at(Rashi::Virgo, 10.0)),
                (Graha::Venus, at(Rashi::Taurus, 10.0)),
                (Graha::Saturn, at(Rashi::Gemini, 20.0)),
            ],
        )
    }

    #[test]
    fn kaalsarp_named_by_rahu_house() {
        let c = hemmed(Rashi::Taurus);
        let e = Kaalsarp.evaluate(&EvaluationContext::new(&c));
        assert!(e.is_active);
        assert_eq!(e.strength, YogaStrength::High);
        assert_eq!(e.detail.as_deref(), Some("Anant"));
    }

    #[test]
    fn kaalsarp_partial_beside_a_node() {
        let c = hemmed(Rashi::Libra);
        let e = Kaalsarp.evaluate(&EvaluationContext::new(&c));
        assert_eq!(e.strength, YogaStrength::Partial);
    }

    #[test]
    fn kaalsarp_broken_by_one_planet() {
        let c = hemmed(Rashi::Capricorn);
        let e = Kaalsarp.evaluate(&EvaluationContext::new(&c));
        assert!(!e.is_active);
        assert!(e.reasons[0].starts_with("Sun"));
    }

    #[test]
    fn sade_sati_reads_the_transit() {
        let c = chart(Rashi::Aries, &[(Graha::Moon, at(Rashi::Capricorn, 10.0))]);
        let query = NaiveDate::from_ymd_opt(2025, 1, 1).expect("date");
        let transit = SaturnTransit {
            saturn_sign: Rashi::Aquarius,
            query_date: query,
            cycles: &[],
        };
        let ctx = EvaluationContext::new(&c).with_transit(transit);
        let e = SadeSati.evaluate(&ctx);
        assert!(e.is_active);
        assert_eq!(e.detail.as_deref(), Some("Setting"));
        assert_eq!(e.strength, YogaStrength::Moderate);

        let far = SaturnTransit {
            saturn_sign: Rashi::Leo,
            ..transit
        };
        assert!(!SadeSati.evaluate(&EvaluationContext::new(&c).with_transit(far)).is_active);
        assert_eq!(
            SadeSati.evaluate(&EvaluationContext::new(&c)).narrative_key,
            "missing"
        );
    }
}
