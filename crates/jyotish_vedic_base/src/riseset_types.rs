//! Types for rise/set calculations.

use jyotish_core::Body;
use serde::{Deserialize, Serialize};

use crate::error::VedicError;

/// Geographic location on the Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive, [-90, 90].
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive, [-180, 180].
    pub longitude_deg: f64,
}

impl GeoLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    /// Reject non-finite or out-of-range coordinates.
    pub fn validate(&self) -> Result<(), VedicError> {
        if !self.latitude_deg.is_finite() || self.latitude_deg.abs() > 90.0 {
            return Err(VedicError::InvalidLocation("latitude must lie in [-90, 90]"));
        }
        if !self.longitude_deg.is_finite() || self.longitude_deg.abs() > 180.0 {
            return Err(VedicError::InvalidLocation(
                "longitude must lie in [-180, 180]",
            ));
        }
        Ok(())
    }

    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }
}

/// Horizon crossings computed by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiseSetEvent {
    /// Upper limb of the Sun appears, refraction included.
    Sunrise,
    Sunset,
    /// Upper limb of the Moon appears, parallax and refraction included.
    Moonrise,
    Moonset,
}

impl RiseSetEvent {
    pub const fn is_rising(self) -> bool {
        matches!(self, Self::Sunrise | Self::Moonrise)
    }

    pub const fn body(self) -> Body {
        match self {
            Self::Sunrise | Self::Sunset => Body::Sun,
            Self::Moonrise | Self::Moonset => Body::Moon,
        }
    }
}

/// Outcome of a rise/set search over one civil day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RiseSetResult {
    /// The event happens at this Julian Day (UT).
    Event { jd_ut: f64 },
    /// The body stays below its target altitude all day.
    NeverRises,
    /// The body stays above its target altitude all day.
    NeverSets,
    /// The body crosses the horizon, but not in the requested direction.
    NotOnThisDay,
}

impl RiseSetResult {
    pub fn jd(self) -> Option<f64> {
        match self {
            Self::Event { jd_ut } => Some(jd_ut),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_ranges() {
        assert!(GeoLocation::new(28.6139, 77.209).validate().is_ok());
        assert!(GeoLocation::new(-90.0, 180.0).validate().is_ok());
        assert!(GeoLocation::new(95.0, 0.0).validate().is_err());
        assert!(GeoLocation::new(0.0, -181.0).validate().is_err());
        assert!(GeoLocation::new(f64::NAN, 0.0).validate().is_err());
    }

    #[test]
    fn event_direction_and_body() {
        assert!(RiseSetEvent::Moonrise.is_rising());
        assert!(!RiseSetEvent::Sunset.is_rising());
        assert_eq!(RiseSetEvent::Moonset.body(), Body::Moon);
    }

    #[test]
    fn only_events_carry_a_time() {
        assert_eq!(RiseSetResult::Event { jd_ut: 1.5 }.jd(), Some(1.5));
        assert_eq!(RiseSetResult::NeverRises.jd(), None);
    }
}
