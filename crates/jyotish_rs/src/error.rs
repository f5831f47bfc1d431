use jyotish_core::EphemerisError;
use jyotish_search::SearchError;
use jyotish_time::TimeError;
use jyotish_vedic_base::VedicError;
use thiserror::Error;

/// Errors surfaced by the high-level API.
///
/// Scans that reach their horizon return `None` or an empty list, and rules
/// that lack a reference body report an inactive finding; neither is an
/// error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum JyotishError {
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("ephemeris failure: {0}")]
    EphemerisFailure(EphemerisError),

    #[error("search did not converge: {0}")]
    NoConvergence(&'static str),

    #[error("engine already initialised")]
    AlreadyInitialized,
}

impl JyotishError {
    pub(crate) fn invalid(field: &'static str, reason: impl ToString) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.to_string(),
        }
    }
}

impl From<EphemerisError> for JyotishError {
    fn from(e: EphemerisError) -> Self {
        match e {
            EphemerisError::UnknownBody(name) => Self::invalid("body", format!("unknown body '{name}'")),
            EphemerisError::Time(t) => t.into(),
            other => Self::EphemerisFailure(other),
        }
    }
}

impl From<TimeError> for JyotishError {
    fn from(e: TimeError) -> Self {
        match e {
            TimeError::InvalidDate(_) => Self::invalid("date", e),
            TimeError::InvalidTime(_) => Self::invalid("time", e),
            TimeError::InvalidOffset(_) => Self::invalid("utc_offset", e),
            _ => Self::invalid("instant", e),
        }
    }
}

impl From<VedicError> for JyotishError {
    fn from(e: VedicError) -> Self {
        match e {
            VedicError::Ephemeris(e) => e.into(),
            VedicError::Time(t) => t.into(),
            VedicError::InvalidLocation(msg) => Self::invalid("location", msg),
            VedicError::UnknownName { kind, name } => Self::invalid(kind, format!("unknown {kind} '{name}'")),
            VedicError::NoConvergence(msg) => Self::NoConvergence(msg),
            other => Self::invalid("input", other),
        }
    }
}

impl From<SearchError> for JyotishError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::Ephemeris(e) => e.into(),
            SearchError::Vedic(e) => e.into(),
            SearchError::Time(t) => t.into(),
            SearchError::NoSunrise(date) => {
                Self::invalid("location", format!("no sunrise or sunset on {date}"))
            }
            SearchError::InvalidInput { field, reason } => Self::InvalidInput { field, reason },
            SearchError::NoConvergence(msg) => Self::NoConvergence(msg),
            other => Self::invalid("input", other),
        }
    }
}
