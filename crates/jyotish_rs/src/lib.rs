//! High-level entry points for the jyotish workspace.
//!
//! Functions take dates as `YYYY-MM-DD`, times as `HH:MM[:SS]`, coordinates
//! in degrees and language tags (`en`, `hi`), and return serializable
//! results. "Now" is always an explicit argument. The engine is installed
//! once with [`init`]; without it the analytic backend and IST are used.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use chrono::{TimeZone, Utc};
//! use jyotish_rs::*;
//!
//! let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
//! let kundali =
//!     calculate_full_kundali("Asha", "1997-08-16", "23:01", 17.98, 79.56, "en", now).unwrap();
//! println!("{}", kundali.chart.ascendant.sign.name());
//! ```

pub mod calendar;
pub mod chart;
pub mod error;
pub mod global;
pub mod input;
pub mod transit;

pub use calendar::{
    MAX_RANGE_DAYS, Titled, TodayAndTomorrow, adhik_maas, find_next_amavasya, find_next_ekadashi,
    find_next_holi, find_next_pradosh, find_next_purnima, find_next_sankashti,
    find_next_sankranti, find_next_shivratri, find_next_vinayaka, panchang, panchang_range,
    today_and_tomorrow,
};
pub use chart::{FullKundali, SadeSatiReport, ashtakoot, calculate_full_kundali, sade_sati};
pub use error::JyotishError;
pub use global::{init, init_with_zone, is_initialized};
pub use input::{moon_at, moon_position};
pub use transit::{current_positions, next_ingresses, prev_ingresses};

// Types callers need without depending on the lower crates.
pub use jyotish_core::{BackendKind, EngineConfig, NodeMode};
pub use jyotish_search::{
    AdhikMaas, CurrentPositions, DashaTable, Holi, NatalChart, PanchangDay, SadeSatiCycle,
    SadeSatiPhase, Sankranti, TransitEvent, VratObservance,
};
pub use jyotish_vedic_base::{AshtakootResult, GeoLocation, Graha, MoonPosition, Rashi, Verdict};
pub use jyotish_yoga::{GemstoneRecommendation, Language, YogaFinding, YogaStrength};
