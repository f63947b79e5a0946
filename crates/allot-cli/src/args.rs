use std::path::PathBuf;

use allot_core::models::WeekStart;
use clap::{Parser, Subcommand};

use crate::cli::{DurationCommands, PlanCommands, WeekArgs, WizardArgs};

/// Plan and reconcile a 168-hour weekly time budget
///
/// Allot splits each week into budget items, compares the plan with tracked
/// time, and walks through a guided wizard to allocate a fresh week. Wizard
/// progress is kept between invocations.
#[derive(Parser)]
#[command(version, about, name = "allot")]
pub struct Args {
    /// Directory for wizard snapshots. Defaults to $XDG_STATE_HOME/allot/store
    #[arg(long, global = true)]
    pub state_dir: Option<PathBuf>,

    /// Settings file. Defaults to $XDG_CONFIG_HOME/allot/config.json
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// First day of the week (monday or sunday)
    #[arg(long, global = true)]
    pub week_start: Option<WeekStart>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
///
/// - `duration`: parse and format hour/minute durations
/// - `week`: show week boundaries
/// - `plan`: reconcile and reorder a weekly plan file
/// - `wizard`: allocate a new week step by step
#[derive(Subcommand)]
pub enum Commands {
    /// Parse and format durations
    #[command(alias = "d")]
    Duration {
        #[command(subcommand)]
        command: DurationCommands,
    },
    /// Show the boundaries of a week
    #[command(alias = "w")]
    Week(WeekArgs),
    /// Reconcile and reorder a weekly plan
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Allocate a week with the guided wizard
    #[command(alias = "z")]
    Wizard(WizardArgs),
}
