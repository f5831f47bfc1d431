//! Yoga and dosha evaluation over a natal chart.
//!
//! Each rule implements [`YogaEvaluator`] and is registered in
//! [`YogaRegistry::standard`]. Evaluating a chart returns one
//! [`YogaFinding`] per rule, active or not, in registration order.
//! Narratives are rendered from embedded English and Hindi bundles; the
//! language never changes ids, flags, strengths or reasons.

pub mod context;
pub mod finding;
pub mod gemstone;
pub mod narrative;
pub mod registry;
pub mod rules;

#[cfg(test)]
pub(crate) mod testing;

pub use context::{EvaluationContext, Sambandha, SaturnTransit};
pub use finding::{Evaluation, YogaFinding, YogaStrength};
pub use gemstone::{GemstoneRecommendation, StoneChoice, recommend_gemstone, stone_for};
pub use narrative::Language;
pub use registry::{YogaEvaluator, YogaRegistry, finding_for};
pub use rules::dosha::KAALSARP_TYPES;
