//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use super::HoursMinutes;
use crate::{models::TotalsCheck, params::ReorderRequest};

/// Outcome of a reorder, naming the link that was submitted.
pub struct ReorderResult {
    pub request: ReorderRequest,
}

impl ReorderResult {
    pub fn new(request: ReorderRequest) -> Self {
        Self { request }
    }
}

impl fmt::Display for ReorderResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.request.preceding_id {
            Some(preceding) => writeln!(
                f,
                "Moved item {} to follow item {preceding}",
                self.request.item_id
            ),
            None => writeln!(f, "Moved item {} to the front", self.request.item_id),
        }
    }
}

/// Advisory banner for a plan that does not add up to one week.
///
/// Renders nothing when the plan is exactly a full week.
pub struct TotalsNotice(pub TotalsCheck);

impl fmt::Display for TotalsNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let check = &self.0;
        if check.is_full_week {
            return Ok(());
        }
        let direction = if check.difference > 0 { "over" } else { "short of" };
        writeln!(
            f,
            "> ⚠ Planned total is {}, {} {} a full week.",
            HoursMinutes::new(check.total_planned as i64),
            HoursMinutes::new(check.difference).absolute(true),
            direction
        )
    }
}
