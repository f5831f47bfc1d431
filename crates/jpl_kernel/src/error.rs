//! Kernel loading and evaluation errors.

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum KernelError {
    /// File could not be read.
    Io(String),
    /// The bytes are not a DAF/SPK file this reader understands.
    InvalidFormat(String),
    /// Segment data type other than 2 or 3.
    UnsupportedType(i32),
    /// No segment links `target` to `center`.
    SegmentNotFound { target: i32, center: i32 },
    /// Segments exist but none covers the epoch.
    EpochOutOfRange {
        target: i32,
        center: i32,
        epoch_tdb_s: f64,
    },
}

impl Display for KernelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "kernel I/O error: {msg}"),
            Self::InvalidFormat(msg) => write!(f, "invalid kernel format: {msg}"),
            Self::UnsupportedType(t) => write!(f, "unsupported SPK segment type {t}"),
            Self::SegmentNotFound { target, center } => {
                write!(f, "no segment for target {target} relative to {center}")
            }
            Self::EpochOutOfRange {
                target,
                center,
                epoch_tdb_s,
            } => write!(
                f,
                "epoch {epoch_tdb_s} s outside coverage of {target} relative to {center}"
            ),
        }
    }
}

impl Error for KernelError {}

impl From<std::io::Error> for KernelError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
