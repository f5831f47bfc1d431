//! Minimal JPL SPK kernel reader.
//!
//! Parses the DAF container, collects SPK segment summaries and evaluates
//! Chebyshev segments (Type 2: position only, Type 3: position and
//! velocity). The whole file is read into memory at load time, so an
//! [`SpkKernel`] is immutable and can be shared across threads.

pub mod chebyshev;
mod daf;
pub mod error;
pub mod spk;

pub use error::KernelError;
pub use spk::{SpkEvaluation, SpkKernel, SpkSegment};

/// NAIF code of the solar-system barycenter.
pub const SSB: i32 = 0;

/// Map a planet body code (x99) to its system barycenter (x).
///
/// Codes that are not planet bodies are returned unchanged.
pub const fn planet_body_to_barycenter(code: i32) -> i32 {
    if code > 100 && code < 1000 && code % 100 == 99 {
        code / 100
    } else {
        code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn barycenter_mapping() {
        assert_eq!(planet_body_to_barycenter(499), 4);
        assert_eq!(planet_body_to_barycenter(599), 5);
        assert_eq!(planet_body_to_barycenter(301), 301);
        assert_eq!(planet_body_to_barycenter(10), 10);
    }
}
