//! Core types for Vimshottari dasha periods.

use serde::Serialize;

use crate::graha::Graha;

/// Year length used for dasha arithmetic.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Hierarchical dasha levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum DashaLevel {
    Mahadasha,
    Antardasha,
    Pratyantardasha,
}

impl DashaLevel {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "Mahadasha",
            Self::Antardasha => "Antardasha",
            Self::Pratyantardasha => "Pratyantardasha",
        }
    }

    /// Next deeper level, if any.
    pub const fn child_level(self) -> Option<Self> {
        match self {
            Self::Mahadasha => Some(Self::Antardasha),
            Self::Antardasha => Some(Self::Pratyantardasha),
            Self::Pratyantardasha => None,
        }
    }

    /// Depth counted from 1 (mahadasha).
    pub const fn depth(self) -> u8 {
        self as u8 + 1
    }
}

/// A dasha period and, when generated, its sub-periods.
///
/// Instants are Julian Days (UT); they serialize as UTC timestamps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashaPeriod {
    pub lord: Graha,
    pub level: DashaLevel,
    #[serde(rename = "start", with = "jyotish_time::serde_jd")]
    pub start_jd: f64,
    #[serde(rename = "end", with = "jyotish_time::serde_jd")]
    pub end_jd: f64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sub_periods: Vec<DashaPeriod>,
}

impl DashaPeriod {
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    /// Half-open containment: start inclusive, end exclusive.
    pub fn contains(&self, jd: f64) -> bool {
        jd >= self.start_jd && jd < self.end_jd
    }
}

/// Active periods at one instant, outermost first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActiveDasha {
    pub mahadasha: DashaSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub antardasha: Option<DashaSnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pratyantardasha: Option<DashaSnapshot>,
}

/// A period without its children.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashaSnapshot {
    pub lord: Graha,
    #[serde(rename = "start", with = "jyotish_time::serde_jd")]
    pub start_jd: f64,
    #[serde(rename = "end", with = "jyotish_time::serde_jd")]
    pub end_jd: f64,
}

impl From<&DashaPeriod> for DashaSnapshot {
    fn from(p: &DashaPeriod) -> Self {
        Self {
            lord: p.lord,
            start_jd: p.start_jd,
            end_jd: p.end_jd,
        }
    }
}
