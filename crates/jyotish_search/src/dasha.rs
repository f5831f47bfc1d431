//! Vimshottari timeline for a natal chart.

use chrono::{DateTime, Utc};
use jyotish_time::datetime_to_jd;
use jyotish_vedic_base::{
    ActiveDasha, DashaLevel, DashaPeriod, Graha, active_dasha, birth_balance, mahadasha_years,
    vimshottari,
};
use serde::Serialize;

use crate::error::SearchError;
use crate::kundali_types::NatalChart;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashaTable {
    pub birth_lord: Graha,
    /// Years of the birth mahadasha still to run at birth.
    pub balance_years: f64,
    pub deepest: DashaLevel,
    pub periods: Vec<DashaPeriod>,
}

impl DashaTable {
    /// Periods running at `instant`, or `None` outside the timeline.
    pub fn current(&self, instant: DateTime<Utc>) -> Option<ActiveDasha> {
        active_dasha(&self.periods, datetime_to_jd(instant))
    }
}

/// Mahadashas covering birth to birth + 120 years, subdivided down to
/// `deepest`.
pub fn dasha_table(chart: &NatalChart, deepest: DashaLevel) -> Result<DashaTable, SearchError> {
    let moon = chart
        .planet(Graha::Moon)
        .ok_or(SearchError::InvalidInput {
            field: "chart",
            reason: "the Moon is missing".into(),
        })?
        .longitude_deg;
    let (birth_lord, elapsed) = birth_balance(moon);
    Ok(DashaTable {
        birth_lord,
        balance_years: (1.0 - elapsed) * mahadasha_years(birth_lord),
        deepest,
        periods: vimshottari(moon, chart.birth_jd, deepest),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kundali::natal_chart;
    use crate::kundali_types::BirthEvent;
    use chrono::{NaiveDate, NaiveTime, TimeZone};
    use jyotish_core::Engine;
    use jyotish_time::ist;
    use jyotish_vedic_base::{DAYS_PER_YEAR, GeoLocation};

    fn chart() -> NatalChart {
        let birth = BirthEvent::new(
            "Test",
            NaiveDate::from_ymd_opt(1990, 1, 1).expect("date"),
            NaiveTime::from_hms_opt(12, 0, 0).expect("time"),
            GeoLocation::new(28.6139, 77.2090),
            ist(),
        );
        natal_chart(&Engine::analytic(), &birth).expect("chart")
    }

    #[test]
    fn table_spans_a_lifetime() {
        let c = chart();
        let t = dasha_table(&c, DashaLevel::Antardasha).expect("table");
        assert_eq!(t.periods[0].lord, t.birth_lord);
        assert!(t.periods[0].contains(c.birth_jd));
        let last = t.periods.last().expect("last");
        assert!(last.end_jd >= c.birth_jd + 120.0 * DAYS_PER_YEAR);
        let nine: f64 = t.periods[..9].iter().map(DashaPeriod::duration_days).sum();
        assert!((nine - 120.0 * DAYS_PER_YEAR).abs() < 1.0 / 86_400.0);
        let first_end = t.periods[0].end_jd - c.birth_jd;
        assert!((first_end / DAYS_PER_YEAR - t.balance_years).abs() < 1e-9);
    }

    #[test]
    fn current_dasha_is_nested() {
        let t = dasha_table(&chart(), DashaLevel::Pratyantardasha).expect("table");
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).single().expect("now");
        let active = t.current(now).expect("active");
        let antar = active.antardasha.expect("antardasha");
        let pratyantar = active.pratyantardasha.expect("pratyantardasha");
        assert!(active.mahadasha.start_jd <= antar.start_jd);
        assert!(antar.start_jd <= pratyantar.start_jd && pratyantar.end_jd <= antar.end_jd);
    }
}
