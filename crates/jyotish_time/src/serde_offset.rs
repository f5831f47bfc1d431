//! Serde adapter for civil zones.
//!
//! Use with `#[serde(with = "jyotish_time::serde_offset")]` on a
//! `FixedOffset` field to write it as whole seconds east of UTC.

use chrono::FixedOffset;
use serde::{Deserialize, Deserializer, Serializer};

pub fn serialize<S: Serializer>(zone: &FixedOffset, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_i32(zone.local_minus_utc())
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<FixedOffset, D::Error> {
    let seconds = i32::deserialize(deserializer)?;
    FixedOffset::east_opt(seconds)
        .ok_or_else(|| serde::de::Error::custom(format!("UTC offset of {seconds} s is out of range")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::civil::ist;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize)]
    struct Zoned {
        #[serde(with = "super")]
        zone: FixedOffset,
    }

    #[test]
    fn ist_is_19800_seconds() {
        let json = serde_json::to_string(&Zoned { zone: ist() }).expect("serialize");
        assert_eq!(json, r#"{"zone":19800}"#);
        let back: Zoned = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.zone, ist());
    }

    #[test]
    fn a_day_or_more_is_rejected() {
        assert!(serde_json::from_str::<Zoned>(r#"{"zone":86400}"#).is_err());
    }
}
