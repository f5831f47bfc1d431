//! Transit output types.

use chrono::{DateTime, FixedOffset, NaiveDate};
use jyotish_vedic_base::{Graha, Rashi};
use serde::Serialize;

use crate::positions::Motion;

/// One sign ingress of a graha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransitEvent {
    pub graha: Graha,
    pub from_sign: Rashi,
    pub to_sign: Rashi,
    pub entering_date: NaiveDate,
    /// Bisected ingress instant.
    pub entering_instant: DateTime<FixedOffset>,
    /// Day before the next ingress of the same graha; `None` when that
    /// ingress lies beyond the search horizon.
    pub exit_date: Option<NaiveDate>,
    pub motion: Motion,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanetNow {
    pub graha: Graha,
    pub longitude_deg: f64,
    pub sign: Rashi,
    pub degree_in_sign: f64,
    pub speed_deg_per_day: f64,
    pub motion: Motion,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentPositions {
    pub timestamp_ist: DateTime<FixedOffset>,
    pub positions: Vec<PlanetNow>,
}

impl CurrentPositions {
    pub fn get(&self, graha: Graha) -> Option<&PlanetNow> {
        self.positions.iter().find(|p| p.graha == graha)
    }
}
