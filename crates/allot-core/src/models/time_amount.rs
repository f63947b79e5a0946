//! Hours/minutes amounts entered in the allocation wizard.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Largest hour value accepted before clamping.
pub const MAX_HOURS: i64 = 1000;

/// Largest minute value accepted before clamping.
pub const MAX_MINUTES: i64 = 59;

/// Default number of days a daily amount repeats in a week.
pub const DAYS_PER_WEEK: i64 = 7;

/// Whether an amount is spent every day or once across the week.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// The amount repeats on each of `days_per_week` days
    #[default]
    Daily,

    /// The amount already covers the whole week
    Weekly,
}

impl FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" | "day" => Ok(Frequency::Daily),
            "weekly" | "week" => Ok(Frequency::Weekly),
            _ => Err(format!("Invalid frequency: {s}")),
        }
    }
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
        }
    }
}

/// An amount of time as typed into the wizard.
///
/// Fields are kept exactly as entered; [`TimeAmount::to_seconds`] clamps them,
/// so malformed values never surface as errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct TimeAmount {
    pub hours: i64,
    pub minutes: i64,
    #[serde(default)]
    pub frequency: Frequency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_per_week: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl TimeAmount {
    /// An amount repeated every day of the week.
    pub fn daily(hours: i64, minutes: i64) -> Self {
        Self {
            hours,
            minutes,
            frequency: Frequency::Daily,
            ..Self::default()
        }
    }

    /// An amount covering the whole week.
    pub fn weekly(hours: i64, minutes: i64) -> Self {
        Self {
            hours,
            minutes,
            frequency: Frequency::Weekly,
            ..Self::default()
        }
    }

    /// Limits a daily amount to `days` days of the week.
    pub fn on_days(mut self, days: i64) -> Self {
        self.days_per_week = Some(days);
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Amounts without an explicit toggle count as enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    /// Clamped day count, defaulting to the full week.
    pub fn days(&self) -> u64 {
        self.days_per_week
            .unwrap_or(DAYS_PER_WEEK)
            .clamp(0, DAYS_PER_WEEK) as u64
    }

    /// Seconds for a single occurrence after clamping hours and minutes.
    pub fn per_occurrence_seconds(&self) -> u64 {
        let hours = self.hours.clamp(0, MAX_HOURS) as u64;
        let minutes = self.minutes.clamp(0, MAX_MINUTES) as u64;
        hours * 3600 + minutes * 60
    }

    /// Total seconds per week.
    pub fn to_seconds(&self) -> u64 {
        match self.frequency {
            Frequency::Daily => self.per_occurrence_seconds() * self.days(),
            Frequency::Weekly => self.per_occurrence_seconds(),
        }
    }

    /// Number of sessions per week the amount is spread over.
    pub fn occurrences(&self) -> u32 {
        match (self.frequency, self.days_per_week) {
            (Frequency::Daily, _) => self.days() as u32,
            (Frequency::Weekly, Some(_)) => self.days() as u32,
            (Frequency::Weekly, None) => 1,
        }
    }
}
