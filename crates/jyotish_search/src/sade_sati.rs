//! Sade-Sati: Saturn's passage through the twelfth, first and second signs
//! from the natal Moon.
//!
//! Cycles are read off the Saturn ingresses of a 120-year scan from birth.
//! Three consecutive ingresses into (M−1, M, M+1) open a cycle; later
//! retrograde re-entries that stay inside those three signs extend it up
//! to `band_end`.

use chrono::{FixedOffset, NaiveDate};
use jyotish_core::Engine;
use jyotish_time::{civil_day_bounds_jd, local_date_of_jd};
use jyotish_vedic_base::{Graha, Rashi};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SearchError;
use crate::transit::{DAYS_PER_YEAR, Ingress, scan_ingresses};

pub const SADE_SATI_HORIZON_YEARS: u32 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SadeSatiPhase {
    /// Saturn in the twelfth from the Moon.
    Rising,
    /// Saturn over the Moon sign.
    Peak,
    /// Saturn in the second from the Moon.
    Setting,
}

impl SadeSatiPhase {
    pub const ALL: [Self; 3] = [Self::Rising, Self::Peak, Self::Setting];

    /// 1, 2 or 3.
    pub const fn number(self) -> u8 {
        match self {
            Self::Rising => 1,
            Self::Peak => 2,
            Self::Setting => 3,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Rising => "Rising",
            Self::Peak => "Peak",
            Self::Setting => "Setting",
        }
    }
}

/// Phase active for a Saturn sign, from (Saturn − Moon) mod 12.
pub fn sade_sati_phase(saturn_sign: Rashi, moon_sign: Rashi) -> Option<SadeSatiPhase> {
    match (saturn_sign.index() + 12 - moon_sign.index()) % 12 {
        11 => Some(SadeSatiPhase::Rising),
        0 => Some(SadeSatiPhase::Peak),
        1 => Some(SadeSatiPhase::Setting),
        _ => None,
    }
}

/// The three Saturn signs of a Sade-Sati for `moon_sign`, in order.
pub fn sade_sati_band(moon_sign: Rashi) -> [Rashi; 3] {
    [moon_sign.nth(12), moon_sign, moon_sign.nth(2)]
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhaseWindow {
    pub phase: SadeSatiPhase,
    pub saturn_sign: Rashi,
    pub entering_date: NaiveDate,
    pub exit_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SadeSatiCycle {
    pub moon_sign: Rashi,
    pub phases: [PhaseWindow; 3],
    /// Last day Saturn stays within the three signs, including retrograde
    /// re-entries after the third phase opened.
    pub band_end: Option<NaiveDate>,
}

impl SadeSatiCycle {
    pub fn start(&self) -> NaiveDate {
        self.phases[0].entering_date
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.band_end.or(self.phases[2].exit_date)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start() && self.end().is_none_or(|end| date <= end)
    }
}

fn day_before_ingress(ingress: &Ingress, zone: FixedOffset) -> Result<NaiveDate, SearchError> {
    local_date_of_jd(ingress.jd, zone)?
        .pred_opt()
        .ok_or(SearchError::NoConvergence("date underflow"))
}

/// Groups Saturn ingresses into cycles for `moon_sign`.
fn cycles_from_ingresses(
    ingresses: &[Ingress],
    moon_sign: Rashi,
    zone: FixedOffset,
) -> Result<Vec<SadeSatiCycle>, SearchError> {
    let band = sade_sati_band(moon_sign);
    let mut cycles = Vec::new();
    let mut i = 0;
    while i + 2 < ingresses.len() {
        let opens = (0..3).all(|k| ingresses[i + k].to == band[k]);
        if !opens {
            i += 1;
            continue;
        }

        let mut j = i + 3;
        while j < ingresses.len() && band.contains(&ingresses[j].to) {
            j += 1;
        }
        let band_end = ingresses
            .get(j)
            .map(|ing| day_before_ingress(ing, zone))
            .transpose()?;

        let mut phases = [None; 3];
        for (k, phase) in SadeSatiPhase::ALL.into_iter().enumerate() {
            let exit_date = ingresses
                .get(i + k + 1)
                .map(|ing| day_before_ingress(ing, zone))
                .transpose()?;
            phases[k] = Some(PhaseWindow {
                phase,
                saturn_sign: band[k],
                entering_date: local_date_of_jd(ingresses[i + k].jd, zone)?,
                exit_date,
            });
        }
        let [Some(a), Some(b), Some(c)] = phases else {
            return Err(SearchError::NoConvergence("sade-sati phases"));
        };
        cycles.push(SadeSatiCycle {
            moon_sign,
            phases: [a, b, c],
            band_end,
        });
        i = j;
    }
    Ok(cycles)
}

/// All complete Sade-Sati cycles within 120 years of `birth_date`.
pub fn sade_sati_cycles(
    engine: &Engine,
    birth_date: NaiveDate,
    moon_sign: Rashi,
    zone: FixedOffset,
) -> Result<Vec<SadeSatiCycle>, SearchError> {
    let (start, _) = civil_day_bounds_jd(birth_date, zone);
    let horizon = (f64::from(SADE_SATI_HORIZON_YEARS) * DAYS_PER_YEAR).ceil() as u32;
    let ingresses = scan_ingresses(engine, Graha::Saturn, start, true, usize::MAX, horizon)?;
    let cycles = cycles_from_ingresses(&ingresses, moon_sign, zone)?;
    debug!(
        moon = moon_sign.name(),
        ingresses = ingresses.len(),
        cycles = cycles.len(),
        "sade-sati cycles"
    );
    Ok(cycles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jyotish_time::{ist, local_datetime_to_jd};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("date")
    }

    fn ingress(y: i32, m: u32, d: u32, from: Rashi, to: Rashi) -> Ingress {
        let noon = chrono::NaiveTime::from_hms_opt(12, 0, 0).expect("noon");
        Ingress {
            jd: local_datetime_to_jd(date(y, m, d), noon, ist()),
            from,
            to,
        }
    }

    #[test]
    fn phase_from_sign_difference() {
        let moon = Rashi::Capricorn;
        assert_eq!(sade_sati_phase(Rashi::Sagittarius, moon), Some(SadeSatiPhase::Rising));
        assert_eq!(sade_sati_phase(Rashi::Capricorn, moon), Some(SadeSatiPhase::Peak));
        assert_eq!(sade_sati_phase(Rashi::Aquarius, moon), Some(SadeSatiPhase::Setting));
        assert_eq!(sade_sati_phase(Rashi::Pisces, moon), None);
        // wraps around Aries
        assert_eq!(sade_sati_phase(Rashi::Pisces, Rashi::Aries), Some(SadeSatiPhase::Rising));
    }

    #[test]
    fn retrograde_reentries_extend_the_band() {
        use Rashi::*;
        let list = [
            ingress(2017, 1, 26, Scorpio, Sagittarius),
            ingress(2017, 6, 21, Sagittarius, Scorpio),
            ingress(2017, 10, 26, Scorpio, Sagittarius),
            ingress(2020, 1, 24, Sagittarius, Capricorn),
            ingress(2022, 4, 29, Capricorn, Aquarius),
            ingress(2022, 7, 12, Aquarius, Capricorn),
            ingress(2023, 1, 17, Capricorn, Aquarius),
            ingress(2025, 3, 29, Aquarius, Pisces),
        ];
        let cycles = cycles_from_ingresses(&list, Capricorn, ist()).expect("cycles");
        assert_eq!(cycles.len(), 1);
        let c = &cycles[0];
        assert_eq!(c.phases[0].entering_date, date(2017, 10, 26));
        assert_eq!(c.phases[0].exit_date, Some(date(2020, 1, 23)));
        assert_eq!(c.phases[1].entering_date, date(2020, 1, 24));
        assert_eq!(c.phases[2].entering_date, date(2022, 4, 29));
        assert_eq!(c.phases[2].exit_date, Some(date(2022, 7, 11)));
        assert_eq!(c.band_end, Some(date(2025, 3, 28)));
        assert!(c.contains(date(2024, 6, 1)));
        assert!(!c.contains(date(2025, 4, 1)));
    }

    #[test]
    fn incomplete_triple_is_not_a_cycle() {
        use Rashi::*;
        let list = [
            ingress(2020, 1, 24, Sagittarius, Capricorn),
            ingress(2022, 4, 29, Capricorn, Aquarius),
        ];
        assert!(cycles_from_ingresses(&list, Capricorn, ist()).expect("cycles").is_empty());
    }

    #[test]
    fn capricorn_moon_cycles_from_1990() {
        let engine = Engine::analytic();
        let cycles = sade_sati_cycles(&engine, date(1990, 1, 1), Rashi::Capricorn, ist())
            .expect("cycles");
        // Saturn returns about every 29.5 years
        assert!((2..=4).contains(&cycles.len()), "{}", cycles.len());
        let current = cycles
            .iter()
            .find(|c| c.contains(date(2021, 1, 1)))
            .expect("cycle covering 2021");
        assert_eq!(current.phases[1].entering_date, date(2020, 1, 24));
        assert_eq!(current.band_end, Some(date(2025, 3, 28)));
        for pair in cycles.windows(2) {
            assert!(pair[0].start() < pair[1].start());
        }
    }
}
