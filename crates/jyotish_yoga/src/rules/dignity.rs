//! Dignity-driven yogas: Neechbhang and the five Mahapurush yogas.

use jyotish_vedic_base::{Graha, SAPTA_GRAHAS, exaltation, is_debilitated_in, rashi_lord};

use super::join_names;
use crate::context::{EvaluationContext, is_kendra};
use crate::finding::{Evaluation, YogaStrength};
use crate::registry::YogaEvaluator;

pub const MAHAPURUSH: [(Graha, &str); 5] = [
    (Graha::Mars, "Ruchaka"),
    (Graha::Mercury, "Bhadra"),
    (Graha::Jupiter, "Hamsa"),
    (Graha::Venus, "Malavya"),
    (Graha::Saturn, "Shasha"),
];

pub struct Neechbhang;

impl Neechbhang {
    /// Cancellation conditions met by a debilitated graha.
    fn conditions(ctx: &EvaluationContext, graha: Graha) -> Vec<String> {
        let Some(p) = ctx.planet(graha) else {
            return Vec::new();
        };
        let sign_lord = rashi_lord(p.sign);
        let exalt_lord = exaltation(graha).map(|(sign, _)| rashi_lord(sign));
        let name = graha.name();

        let mut met = Vec::new();
        if is_kendra(p.house) {
            met.push(format!("{name} sits in a kendra (house {})", p.house));
        }
        let mut lords = vec![sign_lord];
        if let Some(l) = exalt_lord.filter(|&l| l != sign_lord) {
            lords.push(l);
        }
        for lord in lords {
            if ctx.house(lord).is_some_and(is_kendra) && ctx.aspects(lord, graha) {
                met.push(format!("{name} aspected by {} from a kendra", lord.name()));
            }
        }
        if let Some(l) = exalt_lord.filter(|&l| ctx.conjunct(l, graha)) {
            met.push(format!("{name} conjunct its exaltation lord {}", l.name()));
        }
        if ctx.parivartan(graha, sign_lord) {
            met.push(format!("{name} exchanges signs with {}", sign_lord.name()));
        }
        met
    }
}

impl YogaEvaluator for Neechbhang {
    fn id(&self) -> &'static str {
        "neechbhang"
    }

    fn name(&self) -> &'static str {
        "Neechbhang Raj Yoga"
    }

    fn evaluate(&self, ctx: &EvaluationContext) -> Evaluation {
        let debilitated: Vec<Graha> = SAPTA_GRAHAS
            .into_iter()
            .filter(|&g| ctx.planet(g).is_some_and(|p| is_debilitated_in(g, p.sign)))
            .collect();
        if debilitated.is_empty() {
            return Evaluation::inactive("no planet is debilitated");
        }

        let mut reasons = Vec::new();
        let mut cancelled = Vec::new();
        let mut best = 0;
        for g in &debilitated {
            let met = Self::conditions(ctx, *g);
            if !met.is_empty() {
                cancelled.push(*g);
                best = best.max(met.len());
                reasons.extend(met);
            }
        }
        if cancelled.is_empty() {
            return Evaluation::inactive(format!(
                "{} debilitated without cancellation",
                join_names(&debilitated)
            ));
        }
        Evaluation::active(YogaStrength::from_count(best), reasons).with_detail(join_names(&cancelled))
    }
}

pub struct PanchMahapurush;

impl YogaEvaluator for PanchMahapurush {
    fn id(&self) -> &'static str {
        "panch_mahapurush"
    }

    fn name(&self) -> &'static str {
        "Panch Mahapurush Yoga"
    }

    fn evaluate(&self, ctx: &EvaluationContext) -> Evaluation {
        let formed: Vec<(Graha, &str, u8)> = MAHAPURUSH
            .into_iter()
            .filter_map(|(g, yoga)| {
                let house = ctx.house(g)?;
                (is_kendra(house) && ctx.own_or_exalted(g)).then_some((g, yoga, house))
            })
            .collect();
        if formed.is_empty() {
            return Evaluation::inactive(
                "none of Mars, Mercury, Jupiter, Venus or Saturn is dignified in a kendra",
            );
        }
        let reasons = formed
            .iter()
            .map(|(g, yoga, house)| format!("{yoga}: {} dignified in house {house}", g.name()))
            .collect();
        let names: Vec<&str> = formed.iter().map(|(_, yoga, _)| *yoga).collect();
        let strength = if formed.len() == 1 {
            YogaStrength::High
        } else {
            YogaStrength::Strong
        };
        Evaluation::active(strength, reasons).with_detail(names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{at, chart};
    use jyotish_vedic_base::Rashi;

    #[test]
    fn debilitated_in_kendra_is_cancelled() {
        // Sun debilitated in Libra, the 7th from Aries.
        let c = chart(Rashi::Aries, &[(Graha::Sun, at(Rashi::Libra, 10.0))]);
        let e = Neechbhang.evaluate(&EvaluationContext::new(&c));
        assert!(e.is_active);
        assert_eq!(e.strength, YogaStrength::Moderate);
        assert_eq!(e.detail.as_deref(), Some("Sun"));
    }

    #[test]
    fn exaltation_lord_conjunction() {
        // Mars debilitated in Cancer (house 3 from Taurus) with Saturn,
        // lord of Capricorn where Mars exalts.
        let c = chart(
            Rashi::Taurus,
            &[
                (Graha::Mars, at(Rashi::Cancer, 10.0)),
                (Graha::Saturn, at(Rashi::Cancer, 12.0)),
                (Graha::Moon, at(Rashi::Taurus, 12.0)),
            ],
        );
        let e = Neechbhang.evaluate(&EvaluationContext::new(&c));
        assert!(e.is_active);
        assert!(e.reasons.iter().any(|r| r.contains("exaltation lord Saturn")));
    }

    #[test]
    fn uncancelled_debility() {
        // Saturn debilitated in Aries, house 3 from Aquarius, alone.
        let c = chart(Rashi::Aquarius, &[(Graha::Saturn, at(Rashi::Aries, 10.0))]);
        let e = Neechbhang.evaluate(&EvaluationContext::new(&c));
        assert!(!e.is_active);
        assert!(e.reasons[0].contains("without cancellation"));
    }

    #[test]
    fn hamsa_and_malavya() {
        let c = chart(
            Rashi::Aries,
            &[
                (Graha::Jupiter, at(Rashi::Cancer, 5.0)),
                (Graha::Venus, at(Rashi::Libra, 5.0)),
                (Graha::Mars, at(Rashi::Taurus, 5.0)),
            ],
        );
        let e = PanchMahapurush.evaluate(&EvaluationContext::new(&c));
        assert!(e.is_active);
        assert_eq!(e.strength, YogaStrength::Strong);
        assert_eq!(e.detail.as_deref(), Some("Hamsa, Malavya"));
    }
}
