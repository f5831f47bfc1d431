//! Yogas read from the luminaries: Budh-Aditya, Chandra-Mangal, Adhi and
//! Gajakesari.

use jyotish_core::signed_separation;
use jyotish_vedic_base::{Graha, aspects_with_offset};

use super::{BENEFICS, join_names};
use crate::context::{EvaluationContext, house_from, is_kendra, is_trikona};
use crate::finding::{Evaluation, YogaStrength};
use crate::registry::YogaEvaluator;

/// Widest Sun-Mercury separation that still forms Budh-Aditya.
pub const BUDH_ADITYA_MAX_SEPARATION_DEG: f64 = 14.0;

pub struct BudhAditya;

impl YogaEvaluator for BudhAditya {
    fn id(&self) -> &'static str {
        "budh_aditya"
    }

    fn name(&self) -> &'static str {
        "Budh-Aditya Yoga"
    }

    fn evaluate(&self, ctx: &EvaluationContext) -> Evaluation {
        let Some(sun) = ctx.planet(Graha::Sun) else {
            return Evaluation::missing(Graha::Sun);
        };
        let Some(mercury) = ctx.planet(Graha::Mercury) else {
            return Evaluation::missing(Graha::Mercury);
        };
        if sun.house != mercury.house {
            return Evaluation::inactive("Sun and Mercury occupy different houses");
        }
        let separation = signed_separation(sun.longitude_deg, mercury.longitude_deg).abs();
        if separation > BUDH_ADITYA_MAX_SEPARATION_DEG {
            return Evaluation::inactive(format!(
                "Sun and Mercury are {separation:.2}° apart, beyond {BUDH_ADITYA_MAX_SEPARATION_DEG}°"
            ));
        }
        let reasons = vec![
            format!("Sun and Mercury together in house {}", sun.house),
            format!("separation {separation:.2}°"),
        ];
        let strength = if is_kendra(sun.house) || is_trikona(sun.house) {
            YogaStrength::High
        } else {
            YogaStrength::Moderate
        };
        Evaluation::active(strength, reasons)
    }
}

pub struct ChandraMangal;

impl YogaEvaluator for ChandraMangal {
    fn id(&self) -> &'static str {
        "chandra_mangal"
    }

    fn name(&self) -> &'static str {
        "Chandra-Mangal Yoga"
    }

    fn evaluate(&self, ctx: &EvaluationContext) -> Evaluation {
        let Some(moon) = ctx.house(Graha::Moon) else {
            return Evaluation::missing(Graha::Moon);
        };
        let Some(mars) = ctx.house(Graha::Mars) else {
            return Evaluation::missing(Graha::Mars);
        };
        if moon == mars {
            return Evaluation::active(
                YogaStrength::High,
                vec![format!("Moon and Mars together in house {moon}")],
            );
        }
        let mut reasons: Vec<String> = [4u8, 7, 8]
            .into_iter()
            .filter(|&offset| aspects_with_offset(Graha::Mars, offset, mars, moon))
            .map(|offset| format!("Mars casts its {offset}th aspect on the Moon"))
            .collect();
        if aspects_with_offset(Graha::Moon, 7, moon, mars) {
            reasons.push("the Moon casts its 7th aspect on Mars".into());
        }
        if reasons.is_empty() {
            return Evaluation::inactive("Moon and Mars are neither together nor in aspect");
        }
        Evaluation::active(YogaStrength::Moderate, reasons)
    }
}

pub struct Adhi;

impl YogaEvaluator for Adhi {
    fn id(&self) -> &'static str {
        "adhi"
    }

    fn name(&self) -> &'static str {
        "Adhi Yoga"
    }

    fn evaluate(&self, ctx: &EvaluationContext) -> Evaluation {
        let Some(moon) = ctx.house(Graha::Moon) else {
            return Evaluation::missing(Graha::Moon);
        };
        let placed: Vec<(Graha, u8)> = BENEFICS
            .into_iter()
            .filter_map(|b| ctx.house(b).map(|h| (b, house_from(moon, h))))
            .filter(|(_, from_moon)| (6..=8).contains(from_moon))
            .collect();
        if placed.is_empty() {
            return Evaluation::inactive("no benefic in the 6th, 7th or 8th from the Moon");
        }
        let reasons = placed
            .iter()
            .map(|(b, from_moon)| format!("{} in the {from_moon}th from the Moon", b.name()))
            .collect();
        let strength = match placed.len() {
            1 => YogaStrength::Low,
            2 => YogaStrength::Moderate,
            _ => YogaStrength::High,
        };
        let names: Vec<Graha> = placed.iter().map(|(b, _)| *b).collect();
        Evaluation::active(strength, reasons).with_detail(join_names(&names))
    }
}

pub struct Gajakesari;

impl YogaEvaluator for Gajakesari {
    fn id(&self) -> &'static str {
        "gajakesari"
    }

    fn name(&self) -> &'static str {
        "Gajakesari Yoga"
    }

    fn evaluate(&self, ctx: &EvaluationContext) -> Evaluation {
        let Some(moon) = ctx.house(Graha::Moon) else {
            return Evaluation::missing(Graha::Moon);
        };
        let Some(jupiter) = ctx.planet(Graha::Jupiter) else {
            return Evaluation::missing(Graha::Jupiter);
        };
        let relation = match house_from(moon, jupiter.house) {
            1 => "Moon and Jupiter together",
            7 => "Moon and Jupiter in mutual 7th",
            _ => return Evaluation::inactive("Moon and Jupiter are neither together nor opposite"),
        };
        if !is_kendra(moon) && !is_kendra(jupiter.house) {
            return Evaluation::inactive(format!("{relation}, but neither in a kendra"));
        }
        let mut reasons = vec![format!(
            "{relation} (Moon in house {moon}, Jupiter in house {})",
            jupiter.house
        )];
        let strength = if jupiter.dignity.is_strong() {
            reasons.push(format!("Jupiter is {}", jupiter.dignity.name()));
            YogaStrength::High
        } else {
            YogaStrength::Moderate
        };
        Evaluation::active(strength, reasons)
    }
}
