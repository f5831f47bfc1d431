//! Error type for searches and orchestration.

use std::fmt;

use chrono::NaiveDate;
use jyotish_core::EphemerisError;
use jyotish_time::TimeError;
use jyotish_vedic_base::VedicError;

#[derive(Debug)]
#[non_exhaustive]
pub enum SearchError {
    Ephemeris(EphemerisError),
    Vedic(VedicError),
    Time(TimeError),
    /// The Sun does not rise (or set) at the location on this date.
    NoSunrise(NaiveDate),
    /// A caller-supplied value is out of range.
    InvalidInput {
        field: &'static str,
        reason: String,
    },
    /// A bracket or scan did not contain the expected change.
    NoConvergence(&'static str),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
            Self::Vedic(e) => write!(f, "{e}"),
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::NoSunrise(date) => write!(f, "no sunrise or sunset on {date} at this location"),
            Self::InvalidInput { field, reason } => write!(f, "invalid {field}: {reason}"),
            Self::NoConvergence(msg) => write!(f, "search did not converge: {msg}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Ephemeris(e) => Some(e),
            Self::Vedic(e) => Some(e),
            Self::Time(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EphemerisError> for SearchError {
    fn from(e: EphemerisError) -> Self {
        Self::Ephemeris(e)
    }
}

impl From<TimeError> for SearchError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<VedicError> for SearchError {
    fn from(e: VedicError) -> Self {
        match e {
            VedicError::Ephemeris(inner) => Self::Ephemeris(inner),
            VedicError::Time(inner) => Self::Time(inner),
            other => Self::Vedic(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vedic_wrapping_is_flattened() {
        let e: SearchError = VedicError::Ephemeris(EphemerisError::UnknownBody("X".into())).into();
        assert!(matches!(e, SearchError::Ephemeris(_)));
        let e: SearchError = VedicError::InvalidLocation("latitude").into();
        assert!(matches!(e, SearchError::Vedic(_)));
    }

    #[test]
    fn no_sunrise_names_the_date() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 21).expect("date");
        assert!(SearchError::NoSunrise(date).to_string().contains("2024-12-21"));
    }
}
