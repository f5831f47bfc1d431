//! Types shared by the vrat detectors.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::time_window::TimeWindow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VratKind {
    Ekadashi,
    Purnima,
    Amavasya,
    Pradosh,
    Sankashti,
    Vinayaka,
    Shivratri,
}

impl VratKind {
    pub const ALL: [Self; 7] = [
        Self::Ekadashi,
        Self::Purnima,
        Self::Amavasya,
        Self::Pradosh,
        Self::Sankashti,
        Self::Vinayaka,
        Self::Shivratri,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Ekadashi => "Ekadashi",
            Self::Purnima => "Purnima",
            Self::Amavasya => "Amavasya",
            Self::Pradosh => "Pradosh",
            Self::Sankashti => "Sankashti Chaturthi",
            Self::Vinayaka => "Vinayaka Chaturthi",
            Self::Shivratri => "Shivratri",
        }
    }

    /// Case-insensitive lookup by [`VratKind::name`] or its first word.
    pub fn from_name(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL.into_iter().find(|k| {
            let name = k.name();
            name.eq_ignore_ascii_case(s)
                || name
                    .split(' ')
                    .next()
                    .is_some_and(|first| first.eq_ignore_ascii_case(s))
        })
    }
}

/// One observance found on a civil date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VratObservance {
    pub kind: VratKind,
    /// Display name, e.g. "Shani Pradosh" or "Maha Shivratri".
    pub name: String,
    pub date: NaiveDate,
    /// Tithi that qualified the day, 1..=30.
    pub tithi: u8,
    pub window: TimeWindow,
    /// The tithi began and ended between two sunrises.
    pub kshaya: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_name() {
        assert_eq!(VratKind::from_name("ekadashi"), Some(VratKind::Ekadashi));
        assert_eq!(VratKind::from_name("Sankashti"), Some(VratKind::Sankashti));
        assert_eq!(
            VratKind::from_name("vinayaka chaturthi"),
            Some(VratKind::Vinayaka)
        );
        assert_eq!(VratKind::from_name("holi"), None);
    }
}
