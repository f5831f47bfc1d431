//! Time handling for the jyotish workspace.
//!
//! This crate provides:
//! - Julian Date ↔ calendar conversions and the `chrono` boundary
//! - ΔT (TT − UT) so analytic theories can be evaluated in dynamical time
//! - Greenwich/local sidereal time
//! - Civil-time helpers for zone-bound calculations (IST by default)
//! - Serde adapters that write Julian Days as UTC instants and zones as
//!   offsets in seconds
//!
//! All internal instants are Julian Days in UT, carried as `f64`.

pub mod civil;
pub mod delta_t;
pub mod error;
pub mod julian;
pub mod serde_jd;
pub mod serde_offset;
pub mod sidereal;

pub use civil::{
    IST_OFFSET_SECONDS, civil_day_bounds_jd, ist, jd_to_local, local_date_of_jd,
    local_datetime_to_jd, parse_date, parse_time, zone_from_minutes,
};
pub use delta_t::{delta_t_seconds, jd_ut_to_tt};
pub use error::TimeError;
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, centuries_since_j2000,
    datetime_to_jd, jd_to_calendar, jd_to_datetime,
};
pub use sidereal::{earth_rotation_angle_deg, gmst_deg, local_sidereal_time_deg};
