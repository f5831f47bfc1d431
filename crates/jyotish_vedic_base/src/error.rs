//! Error type for derived Vedic calculations.

use std::fmt;

use jyotish_core::EphemerisError;
use jyotish_time::TimeError;

#[derive(Debug)]
#[non_exhaustive]
pub enum VedicError {
    /// The ephemeris refused a query.
    Ephemeris(EphemerisError),
    /// An instant could not be represented.
    Time(TimeError),
    /// Latitude, longitude or altitude outside the accepted range.
    InvalidLocation(&'static str),
    /// A name did not match any known entity.
    UnknownName { kind: &'static str, name: String },
    /// An iterative solver did not produce a result.
    NoConvergence(&'static str),
}

impl fmt::Display for VedicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::UnknownName { kind, name } => write!(f, "unknown {kind}: {name:?}"),
            Self::NoConvergence(msg) => write!(f, "no convergence: {msg}"),
        }
    }
}

impl std::error::Error for VedicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Ephemeris(e) => Some(e),
            Self::Time(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EphemerisError> for VedicError {
    fn from(e: EphemerisError) -> Self {
        Self::Ephemeris(e)
    }
}

impl From<TimeError> for VedicError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
