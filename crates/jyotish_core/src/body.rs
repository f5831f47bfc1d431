//! Bodies the ephemeris adapter answers for.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Chart bodies: the nine grahas plus the ascendant.
///
/// The ascendant is a chart point, not something an ephemeris can return;
/// asking a backend for it yields [`crate::EphemerisError::UnknownBody`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Rahu,
    Ketu,
    Ascendant,
}

/// The nine grahas in chart order.
pub const GRAHA_BODIES: [Body; 9] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Rahu,
    Body::Ketu,
];

impl Body {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
            Self::Ascendant => "Ascendant",
        }
    }

    /// Case-insensitive lookup by English name.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        [Self::Ascendant]
            .into_iter()
            .chain(GRAHA_BODIES)
            .find(|b| b.name().eq_ignore_ascii_case(name))
    }

    /// Lunar nodes are mathematical points, always reported retrograde.
    pub const fn is_node(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }

    /// NAIF code used by the kernel backend. `None` for computed points.
    pub const fn naif_code(self) -> Option<i32> {
        match self {
            Self::Sun => Some(10),
            Self::Moon => Some(301),
            Self::Mercury => Some(199),
            Self::Venus => Some(299),
            Self::Mars => Some(499),
            Self::Jupiter => Some(599),
            Self::Saturn => Some(699),
            Self::Rahu | Self::Ketu | Self::Ascendant => None,
        }
    }
}

impl Display for Body {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_roundtrip() {
        for b in GRAHA_BODIES {
            assert_eq!(Body::from_name(b.name()), Some(b));
        }
        assert_eq!(Body::from_name("ascendant"), Some(Body::Ascendant));
        assert_eq!(Body::from_name(" jupiter "), Some(Body::Jupiter));
        assert_eq!(Body::from_name("Pluto"), None);
    }

    #[test]
    fn only_physical_bodies_have_codes() {
        assert!(GRAHA_BODIES[..7].iter().all(|b| b.naif_code().is_some()));
        assert!(Body::Rahu.naif_code().is_none());
        assert!(Body::Ascendant.naif_code().is_none());
        assert!(Body::Ketu.is_node() && !Body::Moon.is_node());
    }
}
