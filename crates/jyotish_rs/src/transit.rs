//! Transit entry points.

use chrono::{DateTime, Utc};
use jyotish_search::{CurrentPositions, TransitEvent};

use crate::error::JyotishError;
use crate::global::runtime;
use crate::input;

/// Sidereal positions of the nine grahas at `instant`.
pub fn current_positions(instant: DateTime<Utc>) -> Result<CurrentPositions, JyotishError> {
    Ok(jyotish_search::current_positions(&runtime().engine, instant)?)
}

/// The next `n` sign changes of `planet` on or after `from` (`YYYY-MM-DD`).
pub fn next_ingresses(planet: &str, n: usize, from: &str) -> Result<Vec<TransitEvent>, JyotishError> {
    let graha = input::planet(planet)?;
    let from = input::date("from", from)?;
    let rt = runtime();
    Ok(jyotish_search::next_ingresses(&rt.engine, graha, n, from, rt.zone)?)
}

/// The `n` sign changes of `planet` before `from`, oldest first.
pub fn prev_ingresses(planet: &str, n: usize, from: &str) -> Result<Vec<TransitEvent>, JyotishError> {
    let graha = input::planet(planet)?;
    let from = input::date("from", from)?;
    let rt = runtime();
    Ok(jyotish_search::prev_ingresses(&rt.engine, graha, n, from, rt.zone)?)
}
