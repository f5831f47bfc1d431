//! Calendar, chart and transit searches built on the sidereal primitives.
//!
//! This crate provides:
//! - Daily panchang at local sunrise, with limb end times and muhurtas
//! - Amanta lunar months and Adhik Maas enumeration
//! - Sankranti instants with punya kaal
//! - Vrat detectors (Ekadashi, Purnima, Amavasya, Pradosh, Sankashti,
//!   Vinayaka, Shivratri) and Holi
//! - Natal charts and Vimshottari dasha tables
//! - Current positions, sign-ingress scans and Sade-Sati cycles
//!
//! Every search takes its query instant or date explicitly; nothing reads
//! the system clock.

pub mod dasha;
pub mod error;
pub mod holi;
pub mod kundali;
pub mod kundali_types;
pub mod lunar_month;
pub mod panchang;
pub mod panchang_types;
pub mod positions;
pub mod sade_sati;
pub mod sankranti;
pub(crate) mod search_util;
pub mod time_window;
pub mod transit;
pub mod transit_types;
pub mod vrat;
pub mod vrat_types;

pub use dasha::{DashaTable, dasha_table};
pub use error::SearchError;
pub use holi::{Holi, find_next_holi, holi_for_year};
pub use kundali::natal_chart;
pub use kundali_types::{AscendantPosition, BirthEvent, NatalChart, PlanetPosition};
pub use lunar_month::{AdhikMaas, LunarMonth, adhik_maas, lunar_month_at, next_new_moon, prev_new_moon};
pub use panchang::{SolarDay, panchang, solar_day, tithi_bounds};
pub use panchang_types::{KaranaAtSunrise, NakshatraSpan, PanchangDay, TithiSpan, YogaSpan};
pub use positions::Motion;
pub use sade_sati::{
    PhaseWindow, SADE_SATI_HORIZON_YEARS, SadeSatiCycle, SadeSatiPhase, sade_sati_band,
    sade_sati_cycles, sade_sati_phase,
};
pub use sankranti::{SANKRANTI_HORIZON_DAYS, Sankranti, find_next_sankranti, sankranti_on};
pub use time_window::TimeWindow;
pub use transit::{INGRESS_HORIZON_YEARS, current_positions, next_ingresses, prev_ingresses};
pub use transit_types::{CurrentPositions, PlanetNow, TransitEvent};
pub use vrat::{
    VRAT_HORIZON_DAYS, detect_amavasya, detect_ekadashi, detect_pradosh, detect_purnima,
    detect_sankashti, detect_shivratri, detect_vinayaka, detect_vrat, find_next_vrat,
};
pub use vrat_types::{VratKind, VratObservance};
