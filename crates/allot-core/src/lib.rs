//! Core library for the Allot weekly time budgeting client.
//!
//! A week is 168 hours. Plans divide it into budget items; each week the
//! planned figures are compared with tracked usage, and a guided wizard helps
//! allocate a fresh week from scratch.
//!
//! - [`duration`]: parsing and formatting of hour/minute durations
//! - [`calendar`]: week boundaries under a Monday or Sunday convention
//! - [`ordering`]: reorder targets for preceding-id ordered lists
//! - [`reconcile`]: planned-vs-used statistics and the full-week check
//! - [`wizard`]: the allocation wizard and its persisted snapshot
//! - [`display`]: markdown rendering for the terminal
//!
//! # Quick Start
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! use allot_core::{
//!     display::ReconciledStats,
//!     models::BudgetItem,
//!     params::WeeklyPlanInput,
//!     reconcile::WeeklyReport,
//! };
//!
//! let input = WeeklyPlanInput {
//!     items: vec![
//!         BudgetItem::new("Sleep", 201_600, 7).with_id(1),
//!         BudgetItem::new("Everything else", 403_200, 0).with_id(2),
//!     ],
//!     usage: HashMap::from([(1, 28_800)]),
//!     ..Default::default()
//! };
//!
//! let report = WeeklyReport::build(&input);
//! assert!(report.totals.is_full_week);
//! println!("{}", ReconciledStats(report.stats));
//! ```

pub mod calendar;
pub mod config;
pub mod display;
pub mod duration;
pub mod error;
pub mod models;
pub mod ordering;
pub mod params;
pub mod reconcile;
pub mod store;
pub mod wizard;

pub use config::{Config, ConfigBuilder};
pub use error::{AllotError, Result};
pub use reconcile::WeeklyReport;
pub use wizard::Wizard;
