//! Parameter structures exchanged with the budget API layer.
//!
//! These structures carry no framework-specific derives beyond serde, so the
//! CLI (or any other front end) can wrap them with its own argument types and
//! convert with `.into()`:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │   Core Logic    │
//! │  (clap derives) │───▶│ (serde only)    │───▶│ (pure functions)│
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{BudgetItem, WeeklyOverride};

/// Request to place an item directly after another one.
///
/// `preceding_id: None` moves the item to the front of the list.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReorderRequest {
    /// ID of the item being moved
    pub item_id: u64,
    /// ID of the item it should follow, if any
    #[serde(default)]
    pub preceding_id: Option<u64>,
}

/// Everything the reconciler needs to render one week of a plan.
///
/// Mirrors what the budget API returns for a weekly plan: the plan's baseline
/// items, this week's overrides, usage aggregates keyed by item id and the
/// recency information used to order rows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeeklyPlanInput {
    /// Baseline items in display order
    #[serde(default)]
    pub items: Vec<BudgetItem>,
    /// Per-week overrides
    #[serde(default)]
    pub overrides: Vec<WeeklyOverride>,
    /// Tracked seconds per budget item id
    #[serde(default)]
    pub usage: HashMap<u64, u64>,
    /// Item with a currently running event
    #[serde(default)]
    pub current_item_id: Option<u64>,
    /// Item ids by most recent event first
    #[serde(default)]
    pub recent_item_ids: Vec<u64>,
}
