//! Scan-and-bisect helpers shared by every boundary search.
//!
//! A search is described by a key function `jd -> K`. The scan walks from
//! a starting instant in fixed steps until the key differs from its value
//! at the start, then bisects the last step until the bracket is below a
//! millisecond for 30-minute steps (a few milliseconds for day steps).

use crate::error::SearchError;

/// Bisection iterations applied to a bracketing step.
pub const BISECTION_ITERATIONS: usize = 24;

/// 30 minutes, the coarse step for tithi, nakshatra and yoga boundaries.
pub const HALF_HOUR_DAYS: f64 = 1.0 / 48.0;

/// Find the first instant after `from_jd` (before it, for negative
/// `step_days`) at which `key` changes.
///
/// Returns the bisected boundary, or `None` if the key is unchanged after
/// `max_steps` steps.
pub fn find_change<K, F>(
    mut key: F,
    from_jd: f64,
    step_days: f64,
    max_steps: usize,
) -> Result<Option<f64>, SearchError>
where
    K: PartialEq,
    F: FnMut(f64) -> Result<K, SearchError>,
{
    let start = key(from_jd)?;
    let mut inside = from_jd;
    for _ in 0..max_steps {
        let probe = inside + step_days;
        if key(probe)? != start {
            return bisect_change(&mut key, inside, probe, &start).map(Some);
        }
        inside = probe;
    }
    Ok(None)
}

/// Bisect a bracket whose `inside` end has key `inside_key` and whose
/// `outside` end differs. Either end may be the earlier one.
pub fn bisect_change<K, F>(
    key: &mut F,
    inside: f64,
    outside: f64,
    inside_key: &K,
) -> Result<f64, SearchError>
where
    K: PartialEq,
    F: FnMut(f64) -> Result<K, SearchError>,
{
    let (mut a, mut b) = (inside, outside);
    for _ in 0..BISECTION_ITERATIONS {
        let mid = 0.5 * (a + b);
        if key(mid)? == *inside_key {
            a = mid;
        } else {
            b = mid;
        }
    }
    Ok(0.5 * (a + b))
}
