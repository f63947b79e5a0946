//! Data models for budgets, weekly plans and wizard amounts.
//!
//! This module contains the value objects exchanged with the budget API and
//! produced by the reconciliation and wizard components. Display
//! implementations live in [`crate::display::models`] so that presentation
//! stays separate from the data structures.
//!
//! All durations are whole seconds. Planned and used figures are unsigned;
//! remaining time is signed because an overrun budget is shown as a deficit.
//!
//! # Examples
//!
//! ```rust
//! use allot_core::models::{BudgetItem, TimeAmount};
//!
//! let sleep = BudgetItem::new("Sleep", 8 * 3600 * 7, 7).with_id(1);
//! assert_eq!(sleep.weekly_duration, 201_600);
//!
//! let gym = TimeAmount::daily(1, 30).on_days(3);
//! assert_eq!(gym.to_seconds(), 3 * 5400);
//! ```

pub mod budget;
pub mod stat;
pub mod time_amount;
pub mod week_start;


/// Seconds in one seven-day week.
pub const WEEK_SECONDS: u64 = 7 * 24 * 3600;

pub use budget::{BudgetItem, WeeklyOverride};
pub use stat::{ReconciledStat, TotalsCheck};
pub use time_amount::{Frequency, TimeAmount};
pub use week_start::WeekStart;
