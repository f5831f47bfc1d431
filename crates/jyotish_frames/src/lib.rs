//! Frame helpers for ephemeris computations.
//!
//! Provides the obliquity of the ecliptic, IAU 2006 general precession in
//! longitude, a short nutation series, ecliptic ↔ equatorial rotations and
//! Cartesian ↔ spherical conversion.
//!
//! All time arguments are Julian centuries of TT since J2000.0.

pub mod nutation;
pub mod obliquity;
pub mod precession;
pub mod spherical;

pub use nutation::{Nutation, equation_of_equinoxes_deg, nutation};
pub use obliquity::{OBLIQUITY_J2000_DEG, mean_obliquity_deg, true_obliquity_deg};
pub use precession::general_precession_longitude_deg;
pub use spherical::{
    SphericalCoords, cartesian_to_spherical, ecliptic_to_equatorial, equatorial_to_ecliptic,
    rotate_equatorial_to_ecliptic, spherical_to_cartesian,
};
