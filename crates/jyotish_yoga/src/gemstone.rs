//! Gemstone recommendation from the lagna and 9th lords.

use jyotish_search::NatalChart;
use jyotish_vedic_base::{Dignity, Graha};
use serde::Serialize;
use tracing::trace;

use crate::narrative::{self, Language};

const FAVORED_HOUSES: [u8; 6] = [1, 4, 5, 7, 9, 10];
const PENALTY_HOUSES: [u8; 3] = [6, 8, 12];

/// Stone traditionally worn for a graha.
pub const fn stone_for(graha: Graha) -> &'static str {
    match graha {
        Graha::Sun => "Ruby",
        Graha::Moon => "Pearl",
        Graha::Mars => "Red Coral",
        Graha::Mercury => "Emerald",
        Graha::Jupiter => "Yellow Sapphire",
        Graha::Venus => "Diamond",
        Graha::Saturn => "Blue Sapphire",
        Graha::Rahu => "Hessonite",
        Graha::Ketu => "Cat's Eye",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoneChoice {
    pub graha: Graha,
    /// House whose lordship put the graha forward.
    pub lord_of: u8,
    pub stone: &'static str,
    pub score: i32,
    pub reasons: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GemstoneRecommendation {
    pub primary: StoneChoice,
    pub secondary: StoneChoice,
    pub narrative: String,
}

fn score(chart: &NatalChart, graha: Graha, lord_of: u8) -> Option<StoneChoice> {
    let p = chart.planet(graha)?;
    let mut score = 0;
    let mut reasons = Vec::new();
    if FAVORED_HOUSES.contains(&p.house) {
        score += 2;
        reasons.push(format!("house {} favours it (+2)", p.house));
    } else if PENALTY_HOUSES.contains(&p.house) {
        score -= 2;
        reasons.push(format!("house {} weakens it (-2)", p.house));
    }
    let delta = match p.dignity {
        Dignity::Exalted => 2,
        Dignity::OwnSign | Dignity::Moolatrikona => 1,
        Dignity::Debilitated => -2,
        _ => 0,
    };
    if delta != 0 {
        score += delta;
        reasons.push(format!("{} ({delta:+})", p.dignity.name()));
    }
    Some(StoneChoice {
        graha,
        lord_of,
        stone: stone_for(graha),
        score,
        reasons,
    })
}

/// Primary and secondary stones, or `None` when a scored lord is absent
/// from the chart.
///
/// The lagna lord and the 9th lord compete; the higher score gives the
/// primary stone, ties going to the lagna lord. When one graha rules both
/// houses the 5th lord supplies the secondary.
pub fn recommend_gemstone(chart: &NatalChart, language: Language) -> Option<GemstoneRecommendation> {
    let lagna = score(chart, chart.lord_of(1), 1)?;
    let other_house = if chart.lord_of(9) == lagna.graha { 5 } else { 9 };
    let other = score(chart, chart.lord_of(other_house), other_house)?;
    let (primary, secondary) = if other.score > lagna.score {
        (other, lagna)
    } else {
        (lagna, other)
    };
    trace!(
        primary = primary.stone,
        secondary = secondary.stone,
        "gemstone scored"
    );
    let detail = format!("{} ({})", primary.stone, primary.graha.name());
    Some(GemstoneRecommendation {
        narrative: narrative::narrate(language, "gemstone", "recommendation", Some(&detail)),
        primary,
        secondary,
    })
}
