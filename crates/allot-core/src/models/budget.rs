//! Budget item and weekly override models.

use serde::{Deserialize, Serialize};

/// A named, recurring weekly time allocation.
///
/// The position of an item inside its plan is not stored on the item; it is
/// the order of the list the item arrives in (see [`crate::ordering`]).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BudgetItem {
    /// Server-assigned identifier, absent until the item is persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Display name of the budget
    pub name: String,

    /// Planned time per week, in seconds
    pub weekly_duration: u64,

    /// How many sessions the weekly duration is split into
    #[serde(default)]
    pub weekly_occurrences: u32,

    /// Icon name used by the front end
    #[serde(default)]
    pub icon: String,

    /// Color used by the front end
    #[serde(default)]
    pub color: String,
}

impl BudgetItem {
    /// Creates an unpersisted item with no icon or color.
    pub fn new(name: impl Into<String>, weekly_duration: u64, weekly_occurrences: u32) -> Self {
        Self {
            id: None,
            name: name.into(),
            weekly_duration,
            weekly_occurrences,
            icon: String::new(),
            color: String::new(),
        }
    }

    /// Sets the server identifier.
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets icon and color.
    pub fn with_style(mut self, icon: impl Into<String>, color: impl Into<String>) -> Self {
        self.icon = icon.into();
        self.color = color.into();
        self
    }
}

/// A per-week deviation from a budget item's baseline duration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeeklyOverride {
    /// ID of the budget item being overridden
    pub budget_item_id: u64,

    /// Planned time for this week only, in seconds
    pub weekly_duration: u64,

    /// Free-form notes about the deviation
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
}
