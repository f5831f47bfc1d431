//! Vimshottari dasha timelines.

pub mod types;
pub mod vimshottari;

pub use types::{ActiveDasha, DAYS_PER_YEAR, DashaLevel, DashaPeriod, DashaSnapshot};
pub use vimshottari::{
    VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_YEARS, active_dasha, birth_balance, mahadasha_years,
    proportional_children, vimshottari,
};
