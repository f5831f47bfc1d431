//! Sidereal primitives built on the ephemeris engine.
//!
//! This crate provides:
//! - Rashi, nakshatra and pada lookup from sidereal longitude
//! - Panchang limbs: tithi, karana, nitya yoga, vaar, lunar month names
//! - Graha data tables: sign lords, dignities, natural friendship, drishti
//! - Lagna, whole-sign and Placidus houses
//! - Sunrise/sunset and moonrise/moonset
//! - Vimshottari dasha mathematics
//! - Ashtakoot compatibility tables and the positional strength proxy
//!
//! Everything except [`lagna`] and [`riseset`] is pure table lookup or
//! arithmetic and needs no engine.

pub mod ashtakoot;
pub mod bhava;
pub mod dasha;
pub mod dignity;
pub mod drishti;
pub mod error;
pub mod graha;
pub mod karana;
pub mod lagna;
pub mod masa;
pub mod nakshatra;
pub mod nitya_yoga;
pub mod rashi;
pub mod riseset;
pub mod riseset_types;
pub mod strength;
pub mod tithi;
pub mod util;
pub mod vaar;

pub use ashtakoot::{
    AshtakootResult, DoshaKind, Koota, KootaScore, KootaStatus, MAX_TOTAL, MoonPosition, Verdict,
    ashtakoot,
};
pub use bhava::{HouseCusps, PLACIDUS_MAX_LATITUDE_DEG, placidus_cusps, whole_sign_cusps};
pub use dasha::{
    ActiveDasha, DAYS_PER_YEAR, DashaLevel, DashaPeriod, DashaSnapshot, VIMSHOTTARI_SEQUENCE,
    VIMSHOTTARI_YEARS, active_dasha, birth_balance, mahadasha_years, vimshottari,
};
pub use dignity::{
    Dignity, Relation, debilitation_sign, dignity_at, exaltation, is_debilitated_in,
    is_exalted_in, is_own_sign, mutual_friends, naisargika_maitri, own_signs,
};
pub use drishti::{aspected_houses, aspects_house, aspects_with_offset, mutual_aspect};
pub use error::VedicError;
pub use graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS, house_lord, rashi_lord};
pub use karana::{Karana, KaranaPosition, karana_from_elongation};
pub use lagna::{Lagna, LocalSky, lagna};
pub use masa::{ALL_MASAS, Masa};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraInfo, PANCHAK_NAKSHATRAS, PADA_SPAN,
    nakshatra_from_longitude,
};
pub use nitya_yoga::{NityaYoga, YOGA_SPAN, yoga_from_sum, yoga_number};
pub use rashi::{ALL_RASHIS, Dms, Rashi, RashiInfo, deg_to_dms, rashi_from_longitude, sign_index};
pub use riseset::{compute_rise_set, moonrise, moonset, sunrise, sunset};
pub use riseset_types::{GeoLocation, RiseSetEvent, RiseSetResult};
pub use strength::{STRONG_PROXY, strength_proxy};
pub use tithi::{
    AMAVASYA, PURNIMA, Paksha, TITHI_SPAN, TithiPosition, elongation, tithi_from_elongation,
    tithi_number,
};
pub use util::{house_from_signs, normalize_360, nth_house};
pub use vaar::{Vaar, day_slot};
