//! Ephemeris adapter errors.

use std::error::Error;
use std::fmt::{Display, Formatter};

use jpl_kernel::KernelError;
use jyotish_time::TimeError;

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemerisError {
    InvalidConfig(&'static str),
    /// The body is not something an ephemeris can locate.
    UnknownBody(String),
    /// A backend produced NaN or infinity.
    NonFinite {
        body: String,
        quantity: &'static str,
    },
    KernelLoad(String),
    Kernel(KernelError),
    Time(TimeError),
}

impl Display for EphemerisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid ephemeris config: {msg}"),
            Self::UnknownBody(name) => write!(f, "unknown body '{name}'"),
            Self::NonFinite { body, quantity } => {
                write!(f, "non-finite {quantity} for {body}")
            }
            Self::KernelLoad(msg) => write!(f, "kernel load error: {msg}"),
            Self::Kernel(e) => write!(f, "kernel error: {e}"),
            Self::Time(e) => write!(f, "time error: {e}"),
        }
    }
}

impl Error for EphemerisError {}

impl From<KernelError> for EphemerisError {
    fn from(e: KernelError) -> Self {
        Self::Kernel(e)
    }
}

impl From<TimeError> for EphemerisError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
