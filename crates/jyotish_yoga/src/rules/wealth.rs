//! Wealth yogas: Dhan, Lakshmi and Kuber.

use jyotish_vedic_base::{Graha, STRONG_PROXY};

use super::raja::connected_lords;
use crate::context::{EvaluationContext, Sambandha, is_kendra, is_trikona};
use crate::finding::{Evaluation, YogaStrength};
use crate::registry::YogaEvaluator;

const WEALTH_HOUSES: [u8; 2] = [2, 11];
const FORTUNE_HOUSES: [u8; 3] = [1, 5, 9];

pub struct Dhan;

impl YogaEvaluator for Dhan {
    fn id(&self) -> &'static str {
        "dhan"
    }

    fn name(&self) -> &'static str {
        "Dhan Yoga"
    }

    fn evaluate(&self, ctx: &EvaluationContext) -> Evaluation {
        let reasons = connected_lords(ctx, &WEALTH_HOUSES, &FORTUNE_HOUSES);
        if reasons.is_empty() {
            return Evaluation::inactive("no 2nd or 11th lord is connected to a lagna or trikona lord");
        }
        let count = reasons.len();
        Evaluation::active(YogaStrength::from_count(count), reasons).with_detail(count.to_string())
    }
}

pub struct Lakshmi;

impl YogaEvaluator for Lakshmi {
    fn id(&self) -> &'static str {
        "lakshmi"
    }

    fn name(&self) -> &'static str {
        "Lakshmi Yoga"
    }

    fn evaluate(&self, ctx: &EvaluationContext) -> Evaluation {
        let ninth = ctx.lord(9);
        let Some(p9) = ctx.planet(ninth) else {
            return Evaluation::missing(ninth);
        };
        let lagna_lord = ctx.lord(1);
        let Some(ll) = ctx.planet(lagna_lord) else {
            return Evaluation::missing(lagna_lord);
        };
        if !ctx.own_or_exalted(ninth) {
            return Evaluation::inactive(format!(
                "9th lord {} is neither in its own sign nor exalted",
                ninth.name()
            ));
        }
        if !is_kendra(p9.house) && !is_trikona(p9.house) {
            return Evaluation::inactive(format!(
                "9th lord {} in house {}, outside the kendras and trikonas",
                ninth.name(),
                p9.house
            ));
        }
        if ll.strength < STRONG_PROXY {
            return Evaluation::inactive(format!(
                "lagna lord {} strength {:.2} below {STRONG_PROXY}",
                lagna_lord.name(),
                ll.strength
            ));
        }
        Evaluation::active(
            YogaStrength::High,
            vec![
                format!("9th lord {} dignified in house {}", ninth.name(), p9.house),
                format!("lagna lord {} strength {:.2}", lagna_lord.name(), ll.strength),
            ],
        )
    }
}

pub struct Kuber;

impl YogaEvaluator for Kuber {
    fn id(&self) -> &'static str {
        "kuber"
    }

    fn name(&self) -> &'static str {
        "Kuber Yoga"
    }

    fn evaluate(&self, ctx: &EvaluationContext) -> Evaluation {
        let (second, eleventh) = (ctx.lord(2), ctx.lord(11));
        let placed_well = |g: Graha| ctx.house(g).is_some_and(|h| is_kendra(h) || is_trikona(h));

        let (strength, link) = if second == eleventh {
            (YogaStrength::High, format!("{} rules both the 2nd and the 11th", second.name()))
        } else {
            let Some(s) = ctx.sambandha(second, eleventh) else {
                return Evaluation::inactive(format!(
                    "2nd lord {} and 11th lord {} are not connected",
                    second.name(),
                    eleventh.name()
                ));
            };
            let strength = match s {
                Sambandha::Parivartan => YogaStrength::Strong,
                Sambandha::Conjunction => YogaStrength::High,
                Sambandha::Aspect => YogaStrength::Moderate,
            };
            let link = format!(
                "2nd lord {} and 11th lord {} in {}",
                second.name(),
                eleventh.name(),
                s.name()
            );
            (strength, link)
        };
        if !placed_well(second) && !placed_well(eleventh) {
            return Evaluation::inactive(format!("{link}, but neither in a kendra or trikona"));
        }
        Evaluation::active(strength, vec![link])
    }
}
