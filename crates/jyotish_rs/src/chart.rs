//! Birth-chart entry points: the full kundali, Sade-Sati and matching.

use std::sync::OnceLock;

use chrono::{DateTime, NaiveDate, Utc};
use jyotish_core::Engine;
use jyotish_search::{
    BirthEvent, DashaTable, NatalChart, SadeSatiCycle, SadeSatiPhase, current_positions as positions_at,
    dasha_table, natal_chart, sade_sati_cycles, sade_sati_phase,
};
use jyotish_vedic_base::{
    ActiveDasha, AshtakootResult, DashaLevel, Graha, MoonPosition, Rashi, ashtakoot as score_match,
};
use jyotish_yoga::{
    EvaluationContext, GemstoneRecommendation, Language, SaturnTransit, YogaFinding, YogaRegistry,
    recommend_gemstone,
};
use serde::Serialize;
use tracing::debug;

use crate::error::JyotishError;
use crate::global::{Runtime, runtime};
use crate::input;

static REGISTRY: OnceLock<YogaRegistry> = OnceLock::new();

fn registry() -> &'static YogaRegistry {
    REGISTRY.get_or_init(YogaRegistry::standard)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FullKundali {
    pub chart: NatalChart,
    pub dasha: DashaTable,
    pub current_dasha: Option<ActiveDasha>,
    pub yogas: Vec<YogaFinding>,
    pub gemstone: Option<GemstoneRecommendation>,
    pub language: Language,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SadeSatiReport {
    pub moon_sign: Rashi,
    pub saturn_sign: Rashi,
    pub query_date: NaiveDate,
    pub phase: Option<SadeSatiPhase>,
    /// The cycle running on the query date.
    pub current: Option<SadeSatiCycle>,
    /// Complete cycles within 120 years of birth.
    pub cycles: Vec<SadeSatiCycle>,
}

fn birth_event(
    name: &str,
    dob: &str,
    tob: &str,
    lat: f64,
    lon: f64,
    rt: &Runtime,
) -> Result<BirthEvent, JyotishError> {
    Ok(BirthEvent::new(
        name,
        input::date("dob", dob)?,
        input::time("tob", tob)?,
        input::location(lat, lon)?,
        rt.zone,
    ))
}

fn moon_sign(chart: &NatalChart) -> Result<Rashi, JyotishError> {
    chart
        .planet(Graha::Moon)
        .map(|p| p.sign)
        .ok_or_else(|| JyotishError::invalid("chart", "the Moon is missing"))
}

fn saturn_sign(engine: &Engine, instant: DateTime<Utc>) -> Result<Rashi, JyotishError> {
    positions_at(engine, instant)?
        .get(Graha::Saturn)
        .map(|p| p.sign)
        .ok_or_else(|| JyotishError::invalid("positions", "Saturn is missing"))
}

/// Chart, dasha timeline, yoga catalog and gemstone for a birth.
///
/// `query` fixes the instant for the running dasha and the Sade-Sati
/// reading. The language only selects narrative text.
pub fn calculate_full_kundali(
    name: &str,
    dob: &str,
    tob: &str,
    lat: f64,
    lon: f64,
    language: &str,
    query: DateTime<Utc>,
) -> Result<FullKundali, JyotishError> {
    let rt = runtime();
    let language = Language::from_tag(language);
    let birth = birth_event(name, dob, tob, lat, lon, rt)?;
    let chart = natal_chart(&rt.engine, &birth)?;
    let dasha = dasha_table(&chart, DashaLevel::Pratyantardasha)?;
    let current_dasha = dasha.current(query);

    let moon = moon_sign(&chart)?;
    let cycles = sade_sati_cycles(&rt.engine, birth.date, moon, rt.zone)?;
    let transit = SaturnTransit {
        saturn_sign: saturn_sign(&rt.engine, query)?,
        query_date: query.with_timezone(&rt.zone).date_naive(),
        cycles: &cycles,
    };
    let ctx = EvaluationContext::new(&chart).with_transit(transit);
    let yogas = registry().evaluate_all(&ctx, language);
    let gemstone = recommend_gemstone(&chart, language);
    debug!(
        name,
        active = yogas.iter().filter(|y| y.is_active).count(),
        "kundali assembled"
    );

    Ok(FullKundali {
        chart,
        dasha,
        current_dasha,
        yogas,
        gemstone,
        language,
    })
}

/// Sade-Sati status at `query` and every cycle of the native's life.
pub fn sade_sati(
    dob: &str,
    tob: &str,
    lat: f64,
    lon: f64,
    query: DateTime<Utc>,
) -> Result<SadeSatiReport, JyotishError> {
    let rt = runtime();
    let birth = birth_event("", dob, tob, lat, lon, rt)?;
    let chart = natal_chart(&rt.engine, &birth)?;
    let moon = moon_sign(&chart)?;
    let saturn = saturn_sign(&rt.engine, query)?;
    let query_date = query.with_timezone(&rt.zone).date_naive();
    let cycles = sade_sati_cycles(&rt.engine, birth.date, moon, rt.zone)?;
    let current = cycles.iter().find(|c| c.contains(query_date)).copied();
    Ok(SadeSatiReport {
        moon_sign: moon,
        saturn_sign: saturn,
        query_date,
        phase: sade_sati_phase(saturn, moon),
        current,
        cycles,
    })
}

/// Eight-koota matching between the bride's and groom's Moons.
pub fn ashtakoot(bride_moon: &MoonPosition, groom_moon: &MoonPosition) -> AshtakootResult {
    score_match(bride_moon, groom_moon)
}
