//! First-day-of-week preference.

use std::str::FromStr;

use jiff::civil::Weekday;
use serde::{Deserialize, Serialize};

/// Which weekday a week begins on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    /// Weeks run Monday through Sunday
    #[default]
    Monday,

    /// Weeks run Sunday through Saturday
    Sunday,
}

impl FromStr for WeekStart {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monday" => Ok(WeekStart::Monday),
            "sunday" => Ok(WeekStart::Sunday),
            _ => Err(format!("Invalid week start: {s}")),
        }
    }
}

impl WeekStart {
    /// Preference string as exchanged with the settings API.
    pub fn as_str(&self) -> &'static str {
        match self {
            WeekStart::Monday => "monday",
            WeekStart::Sunday => "sunday",
        }
    }

    /// The weekday a week begins on.
    pub fn weekday(&self) -> Weekday {
        match self {
            WeekStart::Monday => Weekday::Monday,
            WeekStart::Sunday => Weekday::Sunday,
        }
    }

    /// Number of days `weekday` lies after the start of the week (0..=6).
    pub fn days_since_start(&self, weekday: Weekday) -> i8 {
        match self {
            WeekStart::Monday => weekday.to_monday_zero_offset(),
            WeekStart::Sunday => weekday.to_sunday_zero_offset(),
        }
    }
}
