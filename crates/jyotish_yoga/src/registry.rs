//! Evaluator trait and the catalog that runs them.

use tracing::trace;

use crate::context::EvaluationContext;
use crate::finding::{Evaluation, YogaFinding};
use crate::narrative::{self, Language};
use crate::rules;

/// A single yoga or dosha rule.
pub trait YogaEvaluator: Send + Sync {
    /// Stable identifier, also the narrative key prefix.
    fn id(&self) -> &'static str;

    /// Display name.
    fn name(&self) -> &'static str;

    fn evaluate(&self, ctx: &EvaluationContext) -> Evaluation;
}

/// Ordered collection of evaluators.
///
/// Every evaluation returns one finding per registered evaluator, in
/// registration order, active or not.
pub struct YogaRegistry {
    evaluators: Vec<Box<dyn YogaEvaluator>>,
}

impl YogaRegistry {
    pub fn new() -> Self {
        Self {
            evaluators: Vec::new(),
        }
    }

    /// The full catalog.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(rules::dosha::Manglik));
        registry.register(Box::new(rules::dosha::Kaalsarp));
        registry.register(Box::new(rules::dosha::SadeSati));
        registry.register(Box::new(rules::lunar::BudhAditya));
        registry.register(Box::new(rules::lunar::ChandraMangal));
        registry.register(Box::new(rules::lunar::Adhi));
        registry.register(Box::new(rules::lunar::Gajakesari));
        registry.register(Box::new(rules::dignity::Neechbhang));
        registry.register(Box::new(rules::dignity::PanchMahapurush));
        registry.register(Box::new(rules::raja::Parashari));
        registry.register(Box::new(rules::raja::RajyaSambandh));
        registry.register(Box::new(rules::raja::DharmaKarmadhipati));
        registry.register(Box::new(rules::wealth::Dhan));
        registry.register(Box::new(rules::wealth::Lakshmi));
        registry.register(Box::new(rules::wealth::Kuber));
        registry.register(Box::new(rules::raja::Vipreet));
        registry.register(Box::new(rules::raja::ShubhKartari));
        registry
    }

    /// Adds an evaluator. An evaluator with an id already present replaces
    /// the earlier one in place.
    pub fn register(&mut self, evaluator: Box<dyn YogaEvaluator>) {
        match self.evaluators.iter().position(|e| e.id() == evaluator.id()) {
            Some(i) => self.evaluators[i] = evaluator,
            None => self.evaluators.push(evaluator),
        }
    }

    pub fn get(&self, id: &str) -> Option<&dyn YogaEvaluator> {
        self.evaluators
            .iter()
            .find(|e| e.id() == id)
            .map(|e| e.as_ref())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.evaluators.iter().map(|e| e.id()).collect()
    }

    pub fn len(&self) -> usize {
        self.evaluators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.evaluators.is_empty()
    }

    /// Runs every evaluator and renders narratives in `language`.
    pub fn evaluate_all(&self, ctx: &EvaluationContext, language: Language) -> Vec<YogaFinding> {
        self.evaluators
            .iter()
            .map(|e| {
                let finding = finding_for(e.as_ref(), ctx, language);
                trace!(
                    id = finding.id,
                    active = finding.is_active,
                    strength = finding.strength.name(),
                    "evaluated"
                );
                finding
            })
            .collect()
    }
}

impl Default for YogaRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

/// Evaluates one rule and renders its narrative.
pub fn finding_for(
    evaluator: &dyn YogaEvaluator,
    ctx: &EvaluationContext,
    language: Language,
) -> YogaFinding {
    let evaluation = evaluator.evaluate(ctx);
    let narrative = narrative::narrate(
        language,
        evaluator.id(),
        evaluation.narrative_key,
        evaluation.detail.as_deref(),
    );
    YogaFinding {
        id: evaluator.id(),
        name: evaluator.name(),
        is_active: evaluation.is_active,
        strength: evaluation.strength,
        reasons: evaluation.reasons,
        narrative,
        detail: evaluation.detail,
        sade_sati: evaluation.sade_sati,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finding::YogaStrength;
    use crate::testing::{at, chart};
    use jyotish_vedic_base::{ALL_GRAHAS, Graha, Rashi};

    struct Always;

    impl YogaEvaluator for Always {
        fn id(&self) -> &'static str {
            "manglik"
        }
        fn name(&self) -> &'static str {
            "Always"
        }
        fn evaluate(&self, _ctx: &EvaluationContext) -> Evaluation {
            Evaluation::active(YogaStrength::High, vec!["always".into()])
        }
    }

    fn full_chart() -> jyotish_search::NatalChart {
        let placements: Vec<_> = ALL_GRAHAS
            .iter()
            .enumerate()
            .map(|(i, &g)| (g, at(Rashi::from_index(i as u8), 10.0)))
            .collect();
        chart(Rashi::Aries, &placements)
    }

    #[test]
    fn standard_catalog_is_complete_and_ordered() {
        let r = YogaRegistry::standard();
        assert_eq!(r.len(), 17);
        assert_eq!(r.ids()[0], "manglik");
        assert!(r.contains("shubh_kartari"));
        let mut ids = r.ids();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 17);
    }

    #[test]
    fn every_evaluator_reports() {
        let c = full_chart();
        let findings = YogaRegistry::standard().evaluate_all(&EvaluationContext::new(&c), Language::En);
        assert_eq!(findings.len(), 17);
        for f in &findings {
            assert!(!f.reasons.is_empty(), "{}", f.id);
            if !f.is_active {
                assert_eq!(f.strength, YogaStrength::None, "{}", f.id);
            }
        }
    }

    #[test]
    fn register_replaces_same_id() {
        let mut r = YogaRegistry::standard();
        r.register(Box::new(Always));
        assert_eq!(r.len(), 17);
        assert_eq!(r.get("manglik").map(|e| e.name()), Some("Always"));
    }

    #[test]
    fn language_changes_only_narratives() {
        let c = full_chart();
        let ctx = EvaluationContext::new(&c);
        let r = YogaRegistry::standard();
        let en = r.evaluate_all(&ctx, Language::En);
        let hi = r.evaluate_all(&ctx, Language::Hi);
        for (a, b) in en.iter().zip(&hi) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.is_active, b.is_active);
            assert_eq!(a.strength, b.strength);
            assert_eq!(a.reasons, b.reasons);
            assert_eq!(a.detail, b.detail);
            assert!(!a.narrative.is_empty() && !b.narrative.is_empty(), "{}", a.id);
        }
    }

    #[test]
    fn missing_moon_is_reported_not_panicked() {
        let c = chart(Rashi::Aries, &[(Graha::Mars, at(Rashi::Aries, 5.0))]);
        let findings = YogaRegistry::standard().evaluate_all(&EvaluationContext::new(&c), Language::En);
        let adhi = findings.iter().find(|f| f.id == "adhi").expect("adhi");
        assert!(!adhi.is_active);
        assert!(adhi.reasons[0].starts_with("missing reference"));
    }
}
