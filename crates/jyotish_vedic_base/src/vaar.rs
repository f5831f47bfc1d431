//! Vaar (weekday), its lord, and the inauspicious day-eighths.
//!
//! Daylight from sunrise to sunset is split into eight equal slots. Rahu
//! Kaal, Gulika Kaal and Yamaganda each occupy one slot fixed by the
//! weekday.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::graha::Graha;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vaar {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

// Slot numbers (1..=8), indexed Sunday..Saturday.
const RAHU_KAAL_SLOT: [u8; 7] = [1, 2, 7, 5, 6, 4, 3];
const GULIKA_SLOT: [u8; 7] = [7, 6, 5, 4, 3, 2, 1];
const YAMAGANDA_SLOT: [u8; 7] = [5, 4, 3, 2, 1, 7, 6];

impl Vaar {
    pub const fn from_weekday(w: Weekday) -> Self {
        match w {
            Weekday::Sun => Self::Sunday,
            Weekday::Mon => Self::Monday,
            Weekday::Tue => Self::Tuesday,
            Weekday::Wed => Self::Wednesday,
            Weekday::Thu => Self::Thursday,
            Weekday::Fri => Self::Friday,
            Weekday::Sat => Self::Saturday,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }

    pub const fn sanskrit_name(self) -> &'static str {
        match self {
            Self::Sunday => "Ravivaar",
            Self::Monday => "Somvaar",
            Self::Tuesday => "Mangalvaar",
            Self::Wednesday => "Budhvaar",
            Self::Thursday => "Guruvaar",
            Self::Friday => "Shukravaar",
            Self::Saturday => "Shanivaar",
        }
    }

    /// 0-based index, Sunday = 0.
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn lord(self) -> Graha {
        match self {
            Self::Sunday => Graha::Sun,
            Self::Monday => Graha::Moon,
            Self::Tuesday => Graha::Mars,
            Self::Wednesday => Graha::Mercury,
            Self::Thursday => Graha::Jupiter,
            Self::Friday => Graha::Venus,
            Self::Saturday => Graha::Saturn,
        }
    }

    pub const fn rahu_kaal_slot(self) -> u8 {
        RAHU_KAAL_SLOT[self.index() as usize]
    }

    pub const fn gulika_slot(self) -> u8 {
        GULIKA_SLOT[self.index() as usize]
    }

    pub const fn yamaganda_slot(self) -> u8 {
        YAMAGANDA_SLOT[self.index() as usize]
    }
}

/// Bounds of day-eighth `slot` (1..=8) between sunrise and sunset, in the
/// same unit as the inputs.
pub fn day_slot(sunrise: f64, sunset: f64, slot: u8) -> (f64, f64) {
    let width = (sunset - sunrise) / 8.0;
    let k = f64::from(slot.clamp(1, 8) - 1);
    (sunrise + k * width, sunrise + (k + 1.0) * width)
}
