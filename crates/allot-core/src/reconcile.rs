//! Planned-vs-actual figures for a weekly plan.
//!
//! Usage totals are aggregated by the budget API; this module only merges them
//! with the plan baseline and the week's overrides.

use std::collections::HashMap;

use log::warn;

use crate::{
    models::{BudgetItem, ReconciledStat, TotalsCheck, WeeklyOverride, WEEK_SECONDS},
    params::WeeklyPlanInput,
};

/// Rank given to items that do not appear in the recency list.
pub const UNRANKED: usize = 10_000;

/// Anything that contributes a planned duration to a week.
pub trait Planned {
    fn planned_seconds(&self) -> u64;
}

impl Planned for BudgetItem {
    fn planned_seconds(&self) -> u64 {
        self.weekly_duration
    }
}

impl Planned for ReconciledStat {
    fn planned_seconds(&self) -> u64 {
        self.planned
    }
}

/// Rounded `used / planned` percentage; zero when nothing is planned.
pub fn completion_percent(used: u64, planned: u64) -> u64 {
    if planned == 0 {
        return 0;
    }
    let (used, planned) = (u128::from(used), u128::from(planned));
    ((used * 100 + planned / 2) / planned) as u64
}

/// `a - b` as a signed value, saturating at the `i64` bounds.
fn signed_difference(a: u64, b: u64) -> i64 {
    let difference = i128::from(a) - i128::from(b);
    i64::try_from(difference).unwrap_or(if difference < 0 { i64::MIN } else { i64::MAX })
}

/// Merges baseline items with overrides and usage, one stat per item.
///
/// Output order follows `baseline`. Items without an id cannot be matched to
/// overrides or usage and reconcile against their baseline with zero usage.
pub fn reconcile(
    baseline: &[BudgetItem],
    overrides: &[WeeklyOverride],
    usage: &HashMap<u64, u64>,
) -> Vec<ReconciledStat> {
    let overrides: HashMap<u64, &WeeklyOverride> = overrides
        .iter()
        .map(|o| (o.budget_item_id, o))
        .collect();

    baseline
        .iter()
        .map(|item| {
            let weekly = item.id.and_then(|id| overrides.get(&id).copied());
            let planned = weekly.map_or(item.weekly_duration, |o| o.weekly_duration);
            let used = item
                .id
                .and_then(|id| usage.get(&id).copied())
                .unwrap_or(0);

            ReconciledStat {
                item: item.clone(),
                planned,
                used,
                remaining: signed_difference(planned, used),
                completion_percent: completion_percent(used, planned),
                notes: weekly
                    .filter(|o| !o.notes.is_empty())
                    .map(|o| o.notes.clone()),
            }
        })
        .collect()
}

/// Sums planned durations and compares them with one full week.
pub fn totals_check<T: Planned>(items: &[T]) -> TotalsCheck {
    let total_planned = items
        .iter()
        .map(Planned::planned_seconds)
        .fold(0, u64::saturating_add);
    let check = TotalsCheck {
        total_planned,
        is_full_week: total_planned == WEEK_SECONDS,
        difference: signed_difference(total_planned, WEEK_SECONDS),
    };
    if !check.is_full_week {
        warn!(
            "Plan covers {total_planned}s, {}s away from a full week",
            check.difference
        );
    }
    check
}

/// Orders stats for display: the running item first, then by recency.
///
/// Items missing from `recent_item_ids` share the [`UNRANKED`] rank and keep
/// their relative input order.
pub fn rank_by_recency(
    stats: Vec<ReconciledStat>,
    current_item_id: Option<u64>,
    recent_item_ids: &[u64],
) -> Vec<ReconciledStat> {
    let ranks: HashMap<u64, usize> = recent_item_ids
        .iter()
        .enumerate()
        .rev()
        .map(|(index, id)| (*id, index + 1))
        .collect();

    let mut stats = stats;
    stats.sort_by_key(|stat| match stat.item.id {
        Some(id) if Some(id) == current_item_id => 0,
        Some(id) => ranks.get(&id).copied().unwrap_or(UNRANKED),
        None => UNRANKED,
    });
    stats
}

/// Reconciled and ranked rows plus the full-week check for one plan week.
#[derive(Debug, Clone)]
pub struct WeeklyReport {
    pub stats: Vec<ReconciledStat>,
    pub totals: TotalsCheck,
}

impl WeeklyReport {
    /// Runs the whole pipeline over an API payload.
    pub fn build(input: &WeeklyPlanInput) -> Self {
        let stats = reconcile(&input.items, &input.overrides, &input.usage);
        let totals = totals_check(&stats);
        let stats = rank_by_recency(stats, input.current_item_id, &input.recent_item_ids);
        Self { stats, totals }
    }

    pub fn total_used(&self) -> u64 {
        self.stats.iter().map(|s| s.used).fold(0, u64::saturating_add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, name: &str, hours: u64) -> BudgetItem {
        BudgetItem::new(name, hours * 3600, 7).with_id(id)
    }

    #[test]
    fn test_baseline_without_override_or_usage() {
        let stats = reconcile(&[item(1, "Sleep", 56)], &[], &HashMap::new());
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].planned, 56 * 3600);
        assert_eq!(stats[0].used, 0);
        assert_eq!(stats[0].remaining, 56 * 3600);
        assert_eq!(stats[0].completion_percent, 0);
        assert!(stats[0].notes.is_none());
    }

    #[test]
    fn test_override_replaces_baseline() {
        let overrides = [WeeklyOverride {
            budget_item_id: 2,
            weekly_duration: 20 * 3600,
            notes: "holiday week".to_string(),
        }];
        let usage = HashMap::from([(2, 5 * 3600)]);
        let stats = reconcile(&[item(1, "Sleep", 56), item(2, "Work", 40)], &overrides, &usage);

        assert_eq!(stats[0].planned, 56 * 3600);
        assert_eq!(stats[1].planned, 20 * 3600);
        assert_eq!(stats[1].remaining, 15 * 3600);
        assert_eq!(stats[1].completion_percent, 25);
        assert_eq!(stats[1].notes.as_deref(), Some("holiday week"));
    }

    #[test]
    fn test_overrun_has_negative_remaining() {
        let usage = HashMap::from([(1, 3 * 3600)]);
        let stats = reconcile(&[item(1, "Leisure", 2)], &[], &usage);
        assert_eq!(stats[0].remaining, -3600);
        assert_eq!(stats[0].completion_percent, 150);
        assert!(stats[0].is_overrun());
    }

    #[test]
    fn test_zero_planned_is_zero_percent() {
        let usage = HashMap::from([(1, 0), (2, 600)]);
        let stats = reconcile(&[item(1, "Idle", 0), item(2, "Extra", 0)], &[], &usage);
        assert_eq!(stats[0].completion_percent, 0);
        assert_eq!(stats[1].completion_percent, 0);
        assert_eq!(stats[1].remaining, -600);
    }

    #[test]
    fn test_completion_rounds_half_up() {
        assert_eq!(completion_percent(1, 3), 33);
        assert_eq!(completion_percent(2, 3), 67);
        assert_eq!(completion_percent(1, 8), 13);
        assert_eq!(completion_percent(u64::MAX, u64::MAX), 100);
    }

    #[test]
    fn test_unsaved_items_ignore_usage() {
        let draft = BudgetItem::new("Draft", 3600, 1);
        let stats = reconcile(&[draft], &[], &HashMap::from([(0, 60)]));
        assert_eq!(stats[0].used, 0);
    }

    #[test]
    fn test_totals_check_full_week() {
        let items = [item(1, "Sleep", 56), item(2, "Work", 40), item(3, "Rest", 72)];
        let check = totals_check(&items);
        assert_eq!(check.total_planned, WEEK_SECONDS);
        assert!(check.is_full_week);
        assert_eq!(check.difference, 0);
    }

    #[test]
    fn test_totals_check_short_and_over() {
        let short = totals_check(&[item(1, "Sleep", 56)]);
        assert!(!short.is_full_week);
        assert_eq!(short.difference, -(112 * 3600));

        let over = totals_check(&[item(1, "Sleep", 100), item(2, "Work", 100)]);
        assert!(!over.is_full_week);
        assert_eq!(over.difference, 32 * 3600);
    }

    #[test]
    fn test_totals_check_uses_overridden_duration() {
        let overrides = [WeeklyOverride {
            budget_item_id: 1,
            weekly_duration: WEEK_SECONDS,
            notes: String::new(),
        }];
        let stats = reconcile(&[item(1, "Everything", 1)], &overrides, &HashMap::new());
        assert!(totals_check(&stats).is_full_week);
    }

    #[test]
    fn test_huge_durations_saturate() {
        let huge = BudgetItem::new("Forever", u64::MAX, 1).with_id(1);
        let stats = reconcile(&[huge.clone()], &[], &HashMap::new());
        assert_eq!(stats[0].remaining, i64::MAX);

        let usage = HashMap::from([(1, u64::MAX)]);
        let stats = reconcile(&[item(1, "Nothing", 0)], &[], &usage);
        assert_eq!(stats[0].remaining, i64::MIN);

        let check = totals_check(&[huge.clone(), huge]);
        assert_eq!(check.total_planned, u64::MAX);
        assert!(!check.is_full_week);
        assert_eq!(check.difference, i64::MAX);
    }

    #[test]
    fn test_rank_current_first_then_recent() {
        let stats = reconcile(
            &[item(1, "A", 1), item(2, "B", 1), item(3, "C", 1), item(4, "D", 1)],
            &[],
            &HashMap::new(),
        );
        let ranked = rank_by_recency(stats, Some(3), &[4, 1]);
        let ids: Vec<_> = ranked.iter().map(|s| s.item.id.unwrap()).collect();
        assert_eq!(ids, [3, 4, 1, 2]);
    }

    #[test]
    fn test_rank_is_stable_for_unranked_items() {
        let stats = reconcile(
            &[item(5, "E", 1), item(1, "A", 1), item(9, "I", 1), item(2, "B", 1)],
            &[],
            &HashMap::new(),
        );
        let ranked = rank_by_recency(stats, None, &[2]);
        let ids: Vec<_> = ranked.iter().map(|s| s.item.id.unwrap()).collect();
        assert_eq!(ids, [2, 5, 1, 9]);
    }

    #[test]
    fn test_rank_duplicate_recent_ids_use_first_position() {
        let stats = reconcile(&[item(1, "A", 1), item(2, "B", 1)], &[], &HashMap::new());
        let ranked = rank_by_recency(stats, None, &[2, 1, 2]);
        let ids: Vec<_> = ranked.iter().map(|s| s.item.id.unwrap()).collect();
        assert_eq!(ids, [2, 1]);
    }

    #[test]
    fn test_weekly_report_pipeline() {
        let input = WeeklyPlanInput {
            items: vec![item(1, "Sleep", 56), item(2, "Work", 40), item(3, "Rest", 72)],
            overrides: vec![],
            usage: HashMap::from([(1, 7 * 3600), (2, 3600)]),
            current_item_id: Some(2),
            recent_item_ids: vec![1],
        };
        let report = WeeklyReport::build(&input);
        assert!(report.totals.is_full_week);
        assert_eq!(report.stats[0].item.name, "Work");
        assert_eq!(report.stats[1].item.name, "Sleep");
        assert_eq!(report.total_used(), 8 * 3600);
    }
}
