//! Vimshottari dasha.
//!
//! The nine lords rule in a fixed cycle of 120 years. The birth mahadasha
//! belongs to the lord of the Moon's nakshatra; the part of the nakshatra
//! the Moon has already crossed is the part of that mahadasha already spent
//! at birth. Sub-periods divide their parent in proportion to the lords'
//! years, starting with the parent's own lord.

use crate::graha::Graha;
use crate::nakshatra::{NAKSHATRA_SPAN, nakshatra_from_longitude};

use super::types::{ActiveDasha, DAYS_PER_YEAR, DashaLevel, DashaPeriod, DashaSnapshot};

/// Lords and their years in cycle order.
pub const VIMSHOTTARI_SEQUENCE: [(Graha, f64); 9] = [
    (Graha::Ketu, 7.0),
    (Graha::Venus, 20.0),
    (Graha::Sun, 6.0),
    (Graha::Moon, 10.0),
    (Graha::Mars, 7.0),
    (Graha::Rahu, 18.0),
    (Graha::Jupiter, 16.0),
    (Graha::Saturn, 19.0),
    (Graha::Mercury, 17.0),
];

/// Length of the full cycle in years.
pub const VIMSHOTTARI_YEARS: f64 = 120.0;

fn position_of(lord: Graha) -> usize {
    VIMSHOTTARI_SEQUENCE
        .iter()
        .position(|(g, _)| *g == lord)
        .unwrap_or(0)
}

/// Years allotted to a lord's mahadasha (0 for a graha outside the cycle).
pub fn mahadasha_years(lord: Graha) -> f64 {
    VIMSHOTTARI_SEQUENCE
        .iter()
        .find(|(g, _)| *g == lord)
        .map_or(0.0, |(_, y)| *y)
}

/// Birth mahadasha lord and the fraction of it elapsed at birth.
pub fn birth_balance(moon_sidereal_deg: f64) -> (Graha, f64) {
    let n = nakshatra_from_longitude(moon_sidereal_deg);
    let lord = VIMSHOTTARI_SEQUENCE[(n.nakshatra.index() % 9) as usize].0;
    (lord, (n.degrees_in / NAKSHATRA_SPAN).clamp(0.0, 1.0))
}

/// Snap the last child's end to the parent's end to absorb rounding drift.
fn snap_last_child_end(children: &mut [DashaPeriod], parent_end_jd: f64) {
    if let Some(last) = children.last_mut() {
        last.end_jd = parent_end_jd;
    }
}

/// Proportional sub-periods of `parent`, beginning with the parent's lord.
pub fn proportional_children(parent: &DashaPeriod, level: DashaLevel) -> Vec<DashaPeriod> {
    let span = parent.duration_days();
    let first = position_of(parent.lord);
    let mut cursor = parent.start_jd;
    let mut children: Vec<DashaPeriod> = (0..9)
        .map(|k| {
            let (lord, years) = VIMSHOTTARI_SEQUENCE[(first + k) % 9];
            let end = cursor + span * years / VIMSHOTTARI_YEARS;
            let child = DashaPeriod {
                lord,
                level,
                start_jd: cursor,
                end_jd: end,
                sub_periods: Vec::new(),
            };
            cursor = end;
            child
        })
        .collect();
    snap_last_child_end(&mut children, parent.end_jd);
    children
}

fn fill_children(period: &mut DashaPeriod, deepest: DashaLevel) {
    let Some(level) = period.level.child_level() else {
        return;
    };
    if level > deepest {
        return;
    }
    let mut children = proportional_children(period, level);
    for child in &mut children {
        fill_children(child, deepest);
    }
    period.sub_periods = children;
}

/// Vimshottari timeline from the birth mahadasha until birth + 120 years,
/// with sub-periods down to `deepest`.
pub fn vimshottari(moon_sidereal_deg: f64, birth_jd: f64, deepest: DashaLevel) -> Vec<DashaPeriod> {
    let (lord, elapsed) = birth_balance(moon_sidereal_deg);
    let horizon = birth_jd + VIMSHOTTARI_YEARS * DAYS_PER_YEAR;
    let mut idx = position_of(lord);
    let mut start = birth_jd - elapsed * VIMSHOTTARI_SEQUENCE[idx].1 * DAYS_PER_YEAR;
    let mut periods = Vec::with_capacity(10);
    while start < horizon {
        let (lord, years) = VIMSHOTTARI_SEQUENCE[idx];
        let end = start + years * DAYS_PER_YEAR;
        let mut period = DashaPeriod {
            lord,
            level: DashaLevel::Mahadasha,
            start_jd: start,
            end_jd: end,
            sub_periods: Vec::new(),
        };
        fill_children(&mut period, deepest);
        periods.push(period);
        start = end;
        idx = (idx + 1) % 9;
    }
    periods
}

/// Periods active at `jd`, looked up level by level.
pub fn active_dasha(periods: &[DashaPeriod], jd: f64) -> Option<ActiveDasha> {
    let maha = periods.iter().find(|p| p.contains(jd))?;
    let antar = maha.sub_periods.iter().find(|p| p.contains(jd));
    let pratyantar = antar.and_then(|a| a.sub_periods.iter().find(|p| p.contains(jd)));
    Some(ActiveDasha {
        mahadasha: DashaSnapshot::from(maha),
        antardasha: antar.map(DashaSnapshot::from),
        pratyantardasha: pratyantar.map(DashaSnapshot::from),
    })
}
