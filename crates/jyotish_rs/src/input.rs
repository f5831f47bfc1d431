//! Parsing and validation of caller-supplied values.

use chrono::{NaiveDate, NaiveTime};
use jyotish_time::{parse_date, parse_time};
use jyotish_vedic_base::{GeoLocation, Graha, MoonPosition, Nakshatra, Rashi};

use crate::error::JyotishError;

pub fn date(field: &'static str, s: &str) -> Result<NaiveDate, JyotishError> {
    parse_date(s).map_err(|e| JyotishError::invalid(field, e))
}

pub fn time(field: &'static str, s: &str) -> Result<NaiveTime, JyotishError> {
    parse_time(s).map_err(|e| JyotishError::invalid(field, e))
}

pub fn location(lat: f64, lon: f64) -> Result<GeoLocation, JyotishError> {
    let location = GeoLocation::new(lat, lon);
    location.validate()?;
    Ok(location)
}

pub fn planet(name: &str) -> Result<Graha, JyotishError> {
    Graha::from_name(name).map_err(|_| JyotishError::invalid("planet", format!("unknown planet '{name}'")))
}

/// A Moon position for matching, from sign and nakshatra names.
///
/// The nakshatra and pada must fall inside the sign at `degree_in_sign`.
pub fn moon_position(
    sign: &str,
    degree_in_sign: f64,
    nakshatra: &str,
    pada: u8,
) -> Result<MoonPosition, JyotishError> {
    let sign = Rashi::from_name(sign).map_err(|_| JyotishError::invalid("sign", format!("unknown sign '{sign}'")))?;
    let named = Nakshatra::from_name(nakshatra)
        .map_err(|_| JyotishError::invalid("nakshatra", format!("unknown nakshatra '{nakshatra}'")))?;
    if !(0.0..30.0).contains(&degree_in_sign) {
        return Err(JyotishError::invalid("degree_in_sign", "must lie in [0, 30)"));
    }
    if !(1..=4).contains(&pada) {
        return Err(JyotishError::invalid("pada", "must lie in 1..=4"));
    }
    let position = MoonPosition::from_longitude(f64::from(sign.index()) * 30.0 + degree_in_sign);
    if position.nakshatra != named || position.pada != pada {
        return Err(JyotishError::invalid(
            "nakshatra",
            format!(
                "{} pada {pada} does not fall at {degree_in_sign}° {}",
                named.name(),
                sign.name()
            ),
        ));
    }
    Ok(position)
}

/// A Moon position from a sidereal longitude.
pub fn moon_at(longitude_deg: f64) -> Result<MoonPosition, JyotishError> {
    if !longitude_deg.is_finite() {
        return Err(JyotishError::invalid("longitude", "must be finite"));
    }
    Ok(MoonPosition::from_longitude(longitude_deg.rem_euclid(360.0)))
}
