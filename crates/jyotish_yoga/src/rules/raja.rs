//! Raja yogas from house lordship, plus Vipreet and Shubh-Kartari.

use jyotish_vedic_base::{Graha, STRONG_PROXY};

use super::{BENEFICS, join_names};
use crate::context::{EvaluationContext, Sambandha, is_dusthana, is_kendra, is_trikona};
use crate::finding::{Evaluation, YogaStrength};
use crate::registry::YogaEvaluator;

pub(crate) const KENDRA_LORD_HOUSES: [u8; 4] = [1, 4, 7, 10];
pub(crate) const TRIKONA_LORD_HOUSES: [u8; 2] = [5, 9];

/// Distinct unordered lord pairs between two house groups that share a
/// sambandha, with a reason for each.
pub(crate) fn connected_lords(ctx: &EvaluationContext, left: &[u8], right: &[u8]) -> Vec<String> {
    let mut seen: Vec<(Graha, Graha)> = Vec::new();
    let mut reasons = Vec::new();
    for &lh in left {
        for &rh in right {
            let (a, b) = (ctx.lord(lh), ctx.lord(rh));
            let key = if a.index() <= b.index() { (a, b) } else { (b, a) };
            if a == b || seen.contains(&key) {
                continue;
            }
            seen.push(key);
            if let Some(s) = ctx.sambandha(a, b) {
                reasons.push(format!(
                    "{} (lord of {lh}) and {} (lord of {rh}) in {}",
                    a.name(),
                    b.name(),
                    s.name()
                ));
            }
        }
    }
    reasons
}

fn lords_placed(
    ctx: &EvaluationContext,
    houses: &[u8],
    wanted: fn(u8) -> bool,
    label: &str,
) -> Vec<String> {
    houses
        .iter()
        .filter_map(|&h| {
            let lord = ctx.lord(h);
            let at = ctx.house(lord)?;
            wanted(at).then(|| format!("{} (lord of {h}) in {label} house {at}", lord.name()))
        })
        .collect()
}

pub struct Parashari;

impl YogaEvaluator for Parashari {
    fn id(&self) -> &'static str {
        "parashari"
    }

    fn name(&self) -> &'static str {
        "Parashari Raj Yoga"
    }

    fn evaluate(&self, ctx: &EvaluationContext) -> Evaluation {
        let lagna_lord = ctx.lord(1);
        let Some(ll) = ctx.planet(lagna_lord) else {
            return Evaluation::missing(lagna_lord);
        };
        if is_dusthana(ll.house) {
            return Evaluation::inactive(format!(
                "lagna lord {} in dusthana house {}",
                lagna_lord.name(),
                ll.house
            ));
        }

        let trikona_in_kendra = lords_placed(ctx, &TRIKONA_LORD_HOUSES, is_kendra, "kendra");
        let kendra_in_trikona = lords_placed(ctx, &[4, 7, 10], is_trikona, "trikona");
        if trikona_in_kendra.is_empty() || kendra_in_trikona.is_empty() {
            return Evaluation::inactive(
                "needs a trikona lord in a kendra and a kendra lord in a trikona",
            );
        }

        let mut reasons = trikona_in_kendra;
        reasons.extend(kendra_in_trikona);
        let strength = if ll.strength >= STRONG_PROXY {
            reasons.push(format!("lagna lord strength {:.2}", ll.strength));
            YogaStrength::High
        } else {
            YogaStrength::Moderate
        };
        Evaluation::active(strength, reasons)
    }
}

pub struct RajyaSambandh;

impl YogaEvaluator for RajyaSambandh {
    fn id(&self) -> &'static str {
        "rajya_sambandh"
    }

    fn name(&self) -> &'static str {
        "Rajya-Sambandh Yoga"
    }

    fn evaluate(&self, ctx: &EvaluationContext) -> Evaluation {
        let reasons = connected_lords(ctx, &KENDRA_LORD_HOUSES, &TRIKONA_LORD_HOUSES);
        if reasons.is_empty() {
            return Evaluation::inactive("no kendra lord is connected to a trikona lord");
        }
        let count = reasons.len();
        Evaluation::active(YogaStrength::from_count(count), reasons).with_detail(count.to_string())
    }
}

pub struct DharmaKarmadhipati;

impl YogaEvaluator for DharmaKarmadhipati {
    fn id(&self) -> &'static str {
        "dharma_karmadhipati"
    }

    fn name(&self) -> &'static str {
        "Dharma-Karmadhipati Yoga"
    }

    fn evaluate(&self, ctx: &EvaluationContext) -> Evaluation {
        let (ninth, tenth) = (ctx.lord(9), ctx.lord(10));
        if ninth == tenth {
            return Evaluation::active(
                YogaStrength::High,
                vec![format!("{} rules both the 9th and the 10th", ninth.name())],
            );
        }
        let Some(s) = ctx.sambandha(ninth, tenth) else {
            return Evaluation::inactive(format!(
                "9th lord {} and 10th lord {} are not connected",
                ninth.name(),
                tenth.name()
            ));
        };
        let strength = match s {
            Sambandha::Parivartan => YogaStrength::Strong,
            Sambandha::Conjunction => YogaStrength::High,
            Sambandha::Aspect => YogaStrength::Moderate,
        };
        Evaluation::active(
            strength,
            vec![format!(
                "9th lord {} and 10th lord {} in {}",
                ninth.name(),
                tenth.name(),
                s.name()
            )],
        )
        .with_detail(s.name())
    }
}

pub struct Vipreet;

impl YogaEvaluator for Vipreet {
    fn id(&self) -> &'static str {
        "vipreet"
    }

    fn name(&self) -> &'static str {
        "Vipreet Raj Yoga"
    }

    fn evaluate(&self, ctx: &EvaluationContext) -> Evaluation {
        let mut formed = Vec::new();
        let mut reasons = Vec::new();
        for (house, yoga) in [(6u8, "Harsha"), (8, "Sarala"), (12, "Vimala")] {
            let lord = ctx.lord(house);
            if let Some(at) = ctx.house(lord).filter(|&h| is_dusthana(h)) {
                formed.push(yoga);
                reasons.push(format!("{yoga}: {} (lord of {house}) in house {at}", lord.name()));
            }
        }
        if formed.is_empty() {
            return Evaluation::inactive("no dusthana lord sits in a dusthana");
        }
        Evaluation::active(YogaStrength::from_count(formed.len()), reasons)
            .with_detail(formed.join(", "))
    }
}

pub struct ShubhKartari;

impl YogaEvaluator for ShubhKartari {
    fn id(&self) -> &'static str {
        "shubh_kartari"
    }

    fn name(&self) -> &'static str {
        "Shubh-Kartari Yoga"
    }

    fn evaluate(&self, ctx: &EvaluationContext) -> Evaluation {
        let waxing = ctx.moon_waxing();
        let is_benefic = |g: &Graha| BENEFICS.contains(g) || (*g == Graha::Moon && waxing);
        let twelfth = ctx.chart.occupants(12);
        let second = ctx.chart.occupants(2);
        let benefic_12: Vec<Graha> = twelfth.iter().copied().filter(is_benefic).collect();
        let benefic_2: Vec<Graha> = second.iter().copied().filter(is_benefic).collect();
        if benefic_12.is_empty() || benefic_2.is_empty() {
            return Evaluation::inactive("the ascendant is not flanked by benefics in the 12th and 2nd");
        }

        let mut reasons = vec![
            format!("benefics in the 12th: {}", join_names(&benefic_12)),
            format!("benefics in the 2nd: {}", join_names(&benefic_2)),
        ];
        let malefics: Vec<Graha> = twelfth
            .iter()
            .chain(&second)
            .copied()
            .filter(|g| g.is_natural_malefic())
            .collect();
        let strength = if malefics.is_empty() {
            YogaStrength::Strong
        } else {
            reasons.push(format!("malefics alongside: {}", join_names(&malefics)));
            YogaStrength::Moderate
        };
        Evaluation::active(strength, reasons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{at, chart};
    use jyotish_vedic_base::Rashi;

    #[test]
    fn parashari_for_aries() {
        // Aries: Sun lords the 5th, placed in the 10th; Saturn lords the
        // 10th, placed in the 9th; Mars (lagna lord) in the 1st.
        let c = chart(
            Rashi::Aries,
            &[
                (Graha::Mars, at(Rashi::Aries, 10.0)),
                (Graha::Sun, at(Rashi::Capricorn, 10.0)),
                (Graha::Saturn, at(Rashi::Sagittarius, 10.0)),
            ],
        );
        let e = Parashari.evaluate(&EvaluationContext::new(&c));
        assert!(e.is_active);
        // proxy 1.33 is below the threshold
        assert_eq!(e.strength, YogaStrength::Moderate);
    }

    #[test]
    fn parashari_blocked_by_dusthana_lagna_lord() {
        let c = chart(
            Rashi::Aries,
            &[
                (Graha::Mars, at(Rashi::Virgo, 10.0)),
                (Graha::Sun, at(Rashi::Capricorn, 10.0)),
                (Graha::Saturn, at(Rashi::Sagittarius, 10.0)),
            ],
        );
        assert!(!Parashari.evaluate(&EvaluationContext::new(&c)).is_active);
    }

    #[test]
    fn dharma_karmadhipati_by_parivartan() {
        // Aries: 9th lord Jupiter in Capricorn, 10th lord Saturn in
        // Sagittarius.
        let c = chart(
            Rashi::Aries,
            &[
                (Graha::Jupiter, at(Rashi::Capricorn, 10.0)),
                (Graha::Saturn, at(Rashi::Sagittarius, 10.0)),
            ],
        );
        let e = DharmaKarmadhipati.evaluate(&EvaluationContext::new(&c));
        assert_eq!(e.strength, YogaStrength::Strong);

        // Taurus: Saturn rules both the 9th and the 10th.
        let t = chart(Rashi::Taurus, &[(Graha::Saturn, at(Rashi::Aries, 1.0))]);
        assert_eq!(
            DharmaKarmadhipati.evaluate(&EvaluationContext::new(&t)).strength,
            YogaStrength::High
        );
    }

    #[test]
    fn rajya_sambandh_counts_pairs() {
        // Aries: Mars (1st, 8th) with Sun (5th) and Jupiter (9th, 12th).
        let c = chart(
            Rashi::Aries,
            &[
                (Graha::Mars, at(Rashi::Leo, 1.0)),
                (Graha::Sun, at(Rashi::Leo, 10.0)),
                (Graha::Jupiter, at(Rashi::Leo, 20.0)),
            ],
        );
        let e = RajyaSambandh.evaluate(&EvaluationContext::new(&c));
        assert!(e.is_active);
        assert_eq!(e.detail.as_deref(), Some("2"));
        assert_eq!(e.strength, YogaStrength::High);
    }

    #[test]
    fn vipreet_harsha() {
        // Aries: Mercury lords the 6th and sits in the 8th.
        let c = chart(Rashi::Aries, &[(Graha::Mercury, at(Rashi::Scorpio, 3.0))]);
        let e = Vipreet.evaluate(&EvaluationContext::new(&c));
        assert_eq!(e.detail.as_deref(), Some("Harsha"));
        assert_eq!(e.strength, YogaStrength::Moderate);
    }

    #[test]
    fn shubh_kartari_flanked_by_benefics() {
        let c = chart(
            Rashi::Aries,
            &[
                (Graha::Venus, at(Rashi::Pisces, 3.0)),
                (Graha::Jupiter, at(Rashi::Taurus, 3.0)),
            ],
        );
        let e = ShubhKartari.evaluate(&EvaluationContext::new(&c));
        assert_eq!(e.strength, YogaStrength::Strong);

        let mixed = chart(
            Rashi::Aries,
            &[
                (Graha::Venus, at(Rashi::Pisces, 3.0)),
                (Graha::Jupiter, at(Rashi::Taurus, 3.0)),
                (Graha::Saturn, at(Rashi::Taurus, 9.0)),
            ],
        );
        assert_eq!(
            ShubhKartari.evaluate(&EvaluationContext::new(&mixed)).strength,
            YogaStrength::Moderate
        );
    }
}
