//! Evaluator output types.

use jyotish_search::SadeSatiCycle;
use serde::Serialize;

/// Graded strength of a finding. Inactive findings are always `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum YogaStrength {
    None,
    Low,
    Moderate,
    High,
    Strong,
    Partial,
    Cancelled,
}

impl YogaStrength {
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::Strong => "Strong",
            Self::Partial => "Partial",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Grade for a count of qualifying placements or pairs.
    pub const fn from_count(count: usize) -> Self {
        match count {
            0 => Self::None,
            1 => Self::Moderate,
            2 => Self::High,
            _ => Self::Strong,
        }
    }
}

impl std::fmt::Display for YogaStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// What an evaluator decides, before the narrative is rendered.
///
/// `narrative_key` selects the bundle entry `<id>.<narrative_key>`;
/// `detail` fills the `{detail}` placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub is_active: bool,
    pub strength: YogaStrength,
    pub reasons: Vec<String>,
    pub narrative_key: &'static str,
    pub detail: Option<String>,
    pub sade_sati: Option<SadeSatiCycle>,
}

impl Evaluation {
    pub fn active(strength: YogaStrength, reasons: Vec<String>) -> Self {
        Self {
            is_active: true,
            strength,
            reasons,
            narrative_key: "active",
            detail: None,
            sade_sati: None,
        }
    }

    pub fn inactive(reason: impl Into<String>) -> Self {
        Self {
            is_active: false,
            strength: YogaStrength::None,
            reasons: vec![reason.into()],
            narrative_key: "inactive",
            detail: None,
            sade_sati: None,
        }
    }

    /// A reference body or input the rule needs is absent.
    pub fn missing(what: impl std::fmt::Display) -> Self {
        Self {
            narrative_key: "missing",
            detail: Some(what.to_string()),
            ..Self::inactive(format!("missing reference: {what}"))
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_key(mut self, key: &'static str) -> Self {
        self.narrative_key = key;
        self
    }
}

/// One catalog entry, as returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YogaFinding {
    pub id: &'static str,
    pub name: &'static str,
    pub is_active: bool,
    pub strength: YogaStrength,
    pub reasons: Vec<String>,
    pub narrative: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sade_sati: Option<SadeSatiCycle>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inactive_is_graded_none() {
        let e = Evaluation::inactive("no match");
        assert!(!e.is_active);
        assert_eq!(e.strength, YogaStrength::None);
        let m = Evaluation::missing("Moon");
        assert_eq!(m.reasons, vec!["missing reference: Moon".to_string()]);
        assert_eq!(m.narrative_key, "missing");
        assert_eq!(m.detail.as_deref(), Some("Moon"));
    }

    #[test]
    fn count_grades() {
        assert_eq!(YogaStrength::from_count(0), YogaStrength::None);
        assert_eq!(YogaStrength::from_count(1), YogaStrength::Moderate);
        assert_eq!(YogaStrength::from_count(5), YogaStrength::Strong);
    }
}
