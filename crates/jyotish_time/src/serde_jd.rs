//! Serde adapter for Julian Day (UT) fields.
//!
//! Use with `#[serde(with = "jyotish_time::serde_jd")]` on an `f64` field to
//! write it as an RFC 3339 UTC instant rounded to the millisecond.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::julian::{datetime_to_jd, jd_to_datetime};

pub fn serialize<S: Serializer>(jd: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    jd_to_datetime(*jd)
        .map_err(serde::ser::Error::custom)?
        .serialize(serializer)
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(datetime_to_jd(DateTime::<Utc>::deserialize(deserializer)?))
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize)]
    struct Stamp {
        #[serde(with = "super")]
        at: f64,
    }

    #[test]
    fn j2000_is_noon_utc() {
        let json = serde_json::to_string(&Stamp { at: 2_451_545.0 }).expect("serialize");
        assert_eq!(json, r#"{"at":"2000-01-01T12:00:00Z"}"#);
        let back: Stamp = serde_json::from_str(&json).expect("deserialize");
        assert!((back.at - 2_451_545.0).abs() < 1e-9);
    }

    #[test]
    fn non_finite_is_a_serialization_error() {
        assert!(serde_json::to_string(&Stamp { at: f64::NAN }).is_err());
    }
}
