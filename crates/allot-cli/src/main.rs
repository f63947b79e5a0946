//! Allot CLI Application
//!
//! Command-line front end for weekly time budgeting: duration parsing, week
//! boundaries, plan reconciliation and the allocation wizard.

mod args;
mod cli;
mod plan_file;
mod renderer;

use allot_core::ConfigBuilder;
use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::{Cli, WeekArgs};
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        state_dir,
        config,
        week_start,
        no_color,
        command,
    } = Args::parse();

    let config = ConfigBuilder::new()
        .with_config_file(config)
        .with_state_dir(state_dir)
        .with_week_start(week_start)
        .build()
        .context("Failed to load configuration")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Allot started");

    let cli = Cli::new(config, renderer);
    match command {
        Some(Duration { command }) => cli.handle_duration_command(command),
        Some(Week(args)) => cli.show_week(args),
        Some(Plan { command }) => cli.handle_plan_command(command),
        Some(Wizard(args)) => cli.handle_wizard_command(args),
        None => cli.show_week(WeekArgs {
            date: None,
            offset: 0,
            start: None,
        }),
    }
}
