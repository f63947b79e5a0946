//! Display formatting wrappers and implementations.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! collections and operation outcomes go through newtype wrappers so the same
//! data can be rendered differently per context. Everything renders markdown
//! for the terminal renderer.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │    Wrappers     │    │   Formatted     │
//! │ (Stat, Item...) │───▶│ (Stats, Notice) │───▶│    Markdown     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`duration`]: `{hours}h {minutes}m` rendering
//! - [`collections`]: reconciled rows and allocation records
//! - [`results`]: reorder outcomes and the full-week notice
//! - [`datetime`]: calendar date labels
//! - [`models`]: Display implementations for domain models
//!
//! ```rust
//! use allot_core::{display::TotalsNotice, reconcile::totals_check, models::BudgetItem};
//!
//! let check = totals_check(&[BudgetItem::new("Sleep", 201_600, 7)]);
//! let notice = TotalsNotice(check).to_string();
//! assert!(notice.contains("short of a full week"));
//! ```

pub mod collections;
pub mod datetime;
pub mod duration;
pub mod models;
pub mod results;

pub use collections::{AllocationRecords, ReconciledStats};
pub use datetime::{DayLabel, LocalDate};
pub use duration::HoursMinutes;
pub use results::{ReorderResult, TotalsNotice};
