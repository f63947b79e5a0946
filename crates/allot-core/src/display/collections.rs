//! Collection wrapper types for displaying groups of domain objects.
//!
//! Each wrapper renders a markdown list and handles the empty case with a
//! single sentence.

use std::{fmt, ops::Index};

use super::HoursMinutes;
use crate::models::{BudgetItem, ReconciledStat};

/// Newtype wrapper for displaying the reconciled rows of one week.
///
/// # Examples
///
/// ```rust
/// use allot_core::{
///     display::ReconciledStats,
///     models::{BudgetItem, ReconciledStat},
/// };
///
/// let stat = ReconciledStat {
///     item: BudgetItem::new("Reading", 7200, 2).with_id(1),
///     planned: 7200,
///     used: 3600,
///     remaining: 3600,
///     completion_percent: 50,
///     notes: None,
/// };
/// let output = ReconciledStats(vec![stat]).to_string();
/// assert!(output.contains("Reading"));
/// assert!(output.contains("(50%)"));
/// ```
pub struct ReconciledStats(pub Vec<ReconciledStat>);

impl ReconciledStats {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ReconciledStat> {
        self.0.iter()
    }
}

impl Index<usize> for ReconciledStats {
    type Output = ReconciledStat;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for ReconciledStats {
    type Item = ReconciledStat;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for ReconciledStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No budgets found.");
        }
        for stat in &self.0 {
            write!(f, "{stat}")?;
        }
        Ok(())
    }
}

/// Allocation records produced by the wizard, with their total.
pub struct AllocationRecords(pub Vec<BudgetItem>);

impl AllocationRecords {
    pub fn total(&self) -> u64 {
        self.0.iter().map(|item| item.weekly_duration).sum()
    }
}

impl fmt::Display for AllocationRecords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No allocations.");
        }
        for item in &self.0 {
            write!(f, "{item}")?;
        }
        writeln!(f)?;
        writeln!(f, "Total: {}", HoursMinutes::new(self.total() as i64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stats() {
        assert_eq!(ReconciledStats(vec![]).to_string(), "No budgets found.\n");
    }

    #[test]
    fn test_allocation_total() {
        let records = AllocationRecords(vec![
            BudgetItem::new("Sleep", 201_600, 7),
            BudgetItem::new("Free time", 403_200, 0),
        ]);
        assert_eq!(records.total(), 604_800);
        assert!(records.to_string().ends_with("Total: 168h 0m\n"));
    }
}
