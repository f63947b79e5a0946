//! Derived planned-vs-actual figures.

use serde::{Deserialize, Serialize};

use super::BudgetItem;

/// Planned, used and remaining time for one budget item over one week.
///
/// Never stored; always recomputed from a baseline, overrides and usage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReconciledStat {
    /// The baseline item the figures belong to
    pub item: BudgetItem,

    /// Override duration when present, otherwise the baseline duration
    pub planned: u64,

    /// Time actually tracked against the item
    pub used: u64,

    /// `planned - used`; negative when the budget is overrun
    pub remaining: i64,

    /// `round(used / planned * 100)`, or 0 when nothing is planned
    pub completion_percent: u64,

    /// Notes carried over from the weekly override, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ReconciledStat {
    /// Whether more time was used than planned.
    pub fn is_overrun(&self) -> bool {
        self.remaining < 0
    }
}

/// Result of summing a plan's planned durations against a full week.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TotalsCheck {
    /// Sum of planned durations, in seconds
    pub total_planned: u64,

    /// True only when the sum is exactly one week
    pub is_full_week: bool,

    /// `total_planned - WEEK_SECONDS`; positive means over-allocated
    pub difference: i64,
}
