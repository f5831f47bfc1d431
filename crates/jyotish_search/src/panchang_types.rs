//! Types for the daily panchang.

use chrono::{DateTime, FixedOffset, NaiveDate};
use jyotish_vedic_base::{Karana, Nakshatra, Paksha, Rashi, Vaar};
use serde::Serialize;

use crate::lunar_month::LunarMonth;
use crate::time_window::TimeWindow;

/// Tithi prevailing at sunrise, with its boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TithiSpan {
    /// 1..=30.
    pub number: u8,
    pub name: &'static str,
    pub paksha: Paksha,
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NakshatraSpan {
    pub nakshatra: Nakshatra,
    /// 1..=27.
    pub number: u8,
    pub name: &'static str,
    pub pada: u8,
    pub end: DateTime<FixedOffset>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YogaSpan {
    /// 1..=27.
    pub number: u8,
    pub name: &'static str,
    pub end: DateTime<FixedOffset>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KaranaAtSunrise {
    pub karana: Karana,
    pub name: &'static str,
    /// Half-tithi slot, 1..=60.
    pub slot: u8,
}

/// The five limbs and the day's muhurta windows, evaluated at local
/// sunrise.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanchangDay {
    pub date: NaiveDate,
    pub vaar: Vaar,
    pub sunrise: DateTime<FixedOffset>,
    pub sunset: DateTime<FixedOffset>,
    pub moonrise: Option<DateTime<FixedOffset>>,
    pub moonset: Option<DateTime<FixedOffset>>,
    pub tithi: TithiSpan,
    pub nakshatra: NakshatraSpan,
    pub yoga: YogaSpan,
    pub karana: KaranaAtSunrise,
    pub rahu_kaal: TimeWindow,
    pub gulika_kaal: TimeWindow,
    pub yamaganda: TimeWindow,
    pub abhijit: TimeWindow,
    pub lunar_month: LunarMonth,
    pub is_panchak: bool,
    pub sun_sign: Rashi,
    pub moon_sign: Rashi,
}
