//! Command definitions and their handlers.
//!
//! Argument structures carry the clap derives; each converts into a core type
//! with `From` so the core stays free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Types → Core Logic → Markdown → Renderer
//! ```

use std::path::PathBuf;

use allot_core::{
    calendar::Week,
    display::{AllocationRecords, HoursMinutes, ReconciledStats, ReorderResult, TotalsNotice},
    duration::{self, parse_fixed, parse_flexible},
    models::{BudgetItem, Frequency, TimeAmount, WeekStart},
    ordering::{apply_move, move_down_request, move_up_request},
    params::ReorderRequest,
    store::FileStore,
    wizard::{submit_in_order, Activity, Wizard},
    Config, WeeklyReport,
};
use anyhow::{anyhow, Context, Result};
use clap::{Args, Subcommand};
use jiff::{civil::Date, tz::TimeZone};
use log::info;

use crate::{plan_file::PlanFile, renderer::TerminalRenderer};

// ============================================================================
// Duration
// ============================================================================

#[derive(Subcommand)]
pub enum DurationCommands {
    /// Format seconds as hours and minutes
    #[command(alias = "f")]
    Format(FormatDurationArgs),
    /// Parse a duration into seconds
    #[command(alias = "p")]
    Parse(ParseDurationArgs),
    /// Seconds elapsed between two timestamps
    #[command(alias = "e")]
    Elapsed(ElapsedArgs),
}

#[derive(Args)]
pub struct FormatDurationArgs {
    #[arg(allow_negative_numbers = true, help = "Signed number of seconds")]
    pub seconds: i64,
    #[arg(long, help = "Drop the sign of negative values")]
    pub absolute: bool,
}

#[derive(Args)]
pub struct ParseDurationArgs {
    #[arg(
        allow_hyphen_values = true,
        help = "Duration such as '5h 30m', '90 minutes', '+15m' or '-2h'"
    )]
    pub text: String,
    #[arg(long, help = "Current value that '+'/'-' adjustments apply to")]
    pub base: Option<String>,
    #[arg(long, help = "Only accept the form-field grammar '5h 30m'")]
    pub strict: bool,
}

#[derive(Args)]
pub struct ElapsedArgs {
    #[arg(help = "Start timestamp, e.g. 2025-12-02T09:00:00Z")]
    pub start: String,
    #[arg(help = "End timestamp; defaults to now")]
    pub end: Option<String>,
}

// ============================================================================
// Week
// ============================================================================

#[derive(Args)]
pub struct WeekArgs {
    #[arg(long, help = "Any date inside the week (YYYY-MM-DD); defaults to today")]
    pub date: Option<Date>,
    #[arg(
        long,
        default_value_t = 0,
        allow_negative_numbers = true,
        help = "Weeks to move forward (negative moves back)"
    )]
    pub offset: i32,
    #[arg(long, help = "First day of the week, overriding the configuration")]
    pub start: Option<WeekStart>,
}

// ============================================================================
// Plan
// ============================================================================

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Show planned, used and remaining time for every budget
    #[command(alias = "s")]
    Show(PlanFileArgs),
    /// Move a budget one place up
    #[command(alias = "up")]
    MoveUp(MoveItemArgs),
    /// Move a budget one place down
    #[command(alias = "down")]
    MoveDown(MoveItemArgs),
}

#[derive(Args)]
pub struct PlanFileArgs {
    #[arg(help = "Weekly plan JSON file")]
    pub file: PathBuf,
}

#[derive(Args)]
pub struct MoveItemArgs {
    #[arg(help = "Weekly plan JSON file")]
    pub file: PathBuf,
    #[arg(help = "ID of the budget to move")]
    pub id: u64,
}

// ============================================================================
// Wizard
// ============================================================================

#[derive(Args)]
pub struct WizardArgs {
    /// Include the plan-name step
    #[arg(long)]
    pub new_plan: bool,
    #[command(subcommand)]
    pub command: Option<WizardCommands>,
}

#[derive(Subcommand)]
pub enum WizardCommands {
    /// Show the current step and allocation
    #[command(alias = "s")]
    Status,
    /// Set the plan name
    Name {
        #[arg(help = "Name of the new plan")]
        name: String,
    },
    /// Set the time spent sleeping
    Sleep(TimeAmountArgs),
    /// Set the time spent working
    Work(TimeAmountArgs),
    /// Switch an activity on or off, optionally changing its amount
    Activity(ActivityArgs),
    /// Manage custom entries
    Custom {
        #[command(subcommand)]
        command: CustomCommands,
    },
    /// Name the bucket that receives the unallocated time
    Remainder {
        #[arg(help = "Name of the remainder budget")]
        name: String,
    },
    /// Go to the next step
    #[command(alias = "n")]
    Next,
    /// Go back one step
    #[command(alias = "p")]
    Prev,
    /// Discard all progress
    Reset,
    /// Produce the allocation records
    Finish {
        #[arg(long, help = "Append the records to this weekly plan file")]
        plan_file: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum CustomCommands {
    /// Add a custom entry
    #[command(alias = "a")]
    Add {
        #[arg(help = "Name of the entry")]
        name: String,
        #[command(flatten)]
        amount: TimeAmountArgs,
    },
    /// Remove a custom entry by its 1-based number
    #[command(alias = "rm")]
    Remove {
        #[arg(help = "Entry number as shown by 'wizard status'")]
        number: usize,
    },
}

/// An amount of time per day or per week.
#[derive(Args)]
pub struct TimeAmountArgs {
    #[arg(help = "Hours")]
    pub hours: i64,
    #[arg(default_value_t = 0, help = "Minutes")]
    pub minutes: i64,
    #[arg(long, default_value = "daily", help = "daily or weekly")]
    pub every: Frequency,
    #[arg(long, help = "Days per week the amount repeats on (daily amounts)")]
    pub days: Option<i64>,
}

impl From<TimeAmountArgs> for TimeAmount {
    fn from(val: TimeAmountArgs) -> Self {
        TimeAmount {
            hours: val.hours,
            minutes: val.minutes,
            frequency: val.every,
            days_per_week: val.days,
            ..TimeAmount::default()
        }
    }
}

#[derive(Args)]
pub struct ActivityArgs {
    #[arg(help = "exercise, commute, meals, chores or family")]
    pub activity: Activity,
    #[arg(long, help = "Switch the activity off instead of on")]
    pub off: bool,
    #[arg(long, help = "Hours per occurrence")]
    pub hours: Option<i64>,
    #[arg(long, default_value_t = 0, help = "Minutes per occurrence")]
    pub minutes: i64,
    #[arg(long, default_value = "daily", help = "daily or weekly")]
    pub every: Frequency,
    #[arg(long, help = "Days per week the amount repeats on (daily amounts)")]
    pub days: Option<i64>,
}

impl ActivityArgs {
    /// The replacement amount, when hours were given.
    fn amount(&self) -> Option<TimeAmount> {
        self.hours.map(|hours| TimeAmount {
            hours,
            minutes: self.minutes,
            frequency: self.every,
            days_per_week: self.days,
            enabled: Some(!self.off),
            name: None,
        })
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Runs commands against a resolved configuration and renders the results.
pub struct Cli {
    config: Config,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(config: Config, renderer: TerminalRenderer) -> Self {
        Self { config, renderer }
    }

    pub fn handle_duration_command(&self, command: DurationCommands) -> Result<()> {
        let output = match command {
            DurationCommands::Format(args) => {
                format!("{}\n", duration::format(args.seconds, args.absolute))
            }
            DurationCommands::Parse(args) => self.parse_duration(args)?,
            DurationCommands::Elapsed(args) => {
                let seconds = duration::seconds_between_iso(&args.start, args.end.as_deref())?;
                format!("{seconds} seconds ({})\n", HoursMinutes::new(seconds as i64))
            }
        };
        self.renderer.render(&output)
    }

    fn parse_duration(&self, args: ParseDurationArgs) -> Result<String> {
        if args.strict {
            let seconds = parse_fixed(&args.text)?;
            return Ok(format!("{seconds} seconds\n"));
        }

        let base = match args.base.as_deref() {
            Some(text) => Some(
                parse_flexible(text, None)
                    .ok_or_else(|| anyhow!("Could not read base duration '{text}'"))?,
            ),
            None => None,
        };
        match parse_flexible(&args.text, base) {
            Some(seconds) => Ok(format!(
                "{seconds} seconds ({})\n",
                HoursMinutes::new(seconds as i64)
            )),
            None => Ok(format!("Unchanged: '{}' is not a duration\n", args.text)),
        }
    }

    pub fn show_week(&self, args: WeekArgs) -> Result<()> {
        let convention = args.start.unwrap_or(self.config.week_start);
        let week = match args.date {
            Some(date) => Week::containing(&date.to_zoned(TimeZone::system())?, convention)?,
            None => Week::current(convention)?,
        };
        let week = week.shifted(args.offset)?;
        self.renderer
            .render(&format!("# Week starting {convention}\n\n{week:#}"))
    }

    pub fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Show(args) => self.show_plan(args),
            PlanCommands::MoveUp(args) => self.move_item(args, move_up_request),
            PlanCommands::MoveDown(args) => self.move_item(args, move_down_request),
        }
    }

    fn show_plan(&self, args: PlanFileArgs) -> Result<()> {
        let plan = PlanFile::load(&args.file)?;
        let report = WeeklyReport::build(&plan.input);
        let used = report.total_used();

        let mut output = String::from("# Weekly plan\n\n");
        output.push_str(&TotalsNotice(report.totals).to_string());
        if !report.totals.is_full_week {
            output.push('\n');
        }
        output.push_str(&ReconciledStats(report.stats).to_string());
        output.push_str(&format!(
            "\nTracked {} of {} planned\n",
            HoursMinutes::new(used as i64),
            HoursMinutes::new(report.totals.total_planned as i64)
        ));
        self.renderer.render(&output)
    }

    fn move_item(
        &self,
        args: MoveItemArgs,
        request_for: fn(&[BudgetItem], u64) -> allot_core::Result<ReorderRequest>,
    ) -> Result<()> {
        let mut plan = PlanFile::load(&args.file)?;
        let request = request_for(&plan.input.items, args.id)
            .with_context(|| format!("Cannot move budget {}", args.id))?;
        apply_move(&mut plan.input.items, &request)?;
        plan.save()?;
        info!("Reordered budget {} in {}", args.id, args.file.display());
        self.renderer.render(&ReorderResult::new(request).to_string())
    }

    pub fn handle_wizard_command(&self, args: WizardArgs) -> Result<()> {
        let mut wizard = Wizard::open(self.config.store(), args.new_plan);

        match args.command.unwrap_or(WizardCommands::Status) {
            WizardCommands::Status => {}
            WizardCommands::Name { name } => wizard.set_plan_name(name),
            WizardCommands::Sleep(amount) => wizard.set_sleep(amount.into()),
            WizardCommands::Work(amount) => wizard.set_work(amount.into()),
            WizardCommands::Activity(args) => match args.amount() {
                Some(amount) => wizard.set_activity(args.activity, amount),
                None => wizard.toggle_activity(args.activity, !args.off),
            },
            WizardCommands::Custom { command } => match command {
                CustomCommands::Add { name, amount } => {
                    wizard.add_custom(TimeAmount::from(amount).named(name));
                }
                CustomCommands::Remove { number } => {
                    number
                        .checked_sub(1)
                        .and_then(|index| wizard.remove_custom(index))
                        .ok_or_else(|| anyhow!("No custom entry number {number}"))?;
                }
            },
            WizardCommands::Remainder { name } => wizard.set_remainder_name(name),
            WizardCommands::Next => {
                if !wizard.next() {
                    return Err(anyhow!(
                        "Cannot leave step '{}': complete it first",
                        wizard.current_step()
                    ));
                }
            }
            WizardCommands::Prev => {
                wizard.prev();
            }
            WizardCommands::Reset => wizard.reset(),
            WizardCommands::Finish { plan_file } => return self.finish_wizard(wizard, plan_file),
        }

        self.renderer.render(&wizard_status(&wizard))
    }

    fn finish_wizard(
        &self,
        mut wizard: Wizard<FileStore>,
        plan_file: Option<PathBuf>,
    ) -> Result<()> {
        let records = wizard.finish().context("Wizard is not finished")?;

        let records = match plan_file {
            Some(path) => {
                let mut plan = PlanFile::load_or_default(&path)?;
                let after = plan.last_id();
                let created = submit_in_order(&records, after, &mut plan)?;
                plan.save()?;
                info!("Added {} budgets to {}", created.len(), path.display());
                created
            }
            None => records,
        };

        self.renderer
            .render(&format!("# Allocation\n\n{}", AllocationRecords(records)))
    }
}

fn wizard_status(wizard: &Wizard<FileStore>) -> String {
    let state = wizard.state();
    let mut output = format!(
        "# Wizard: step {} of {} ({})\n\n",
        wizard.current_index() + 1,
        wizard.steps().len(),
        wizard.current_step()
    );

    for descriptor in wizard.steps() {
        let marker = if descriptor.step == wizard.current_step() {
            "▶"
        } else if descriptor.is_valid {
            "✓"
        } else {
            "✗"
        };
        output.push_str(&format!("- {marker} {}\n", descriptor.step));
    }

    output.push_str(&format!("\n- Sleep: {}\n", state.sleep));
    output.push_str(&format!("- Work: {}\n", state.work));
    for (activity, amount) in &state.activities {
        output.push_str(&format!("- {}: {amount}\n", activity.label()));
    }
    for (index, entry) in state.custom.iter().enumerate() {
        let name = entry.name.as_deref().unwrap_or("(unnamed)");
        output.push_str(&format!("- Custom {}: {name}, {entry}\n", index + 1));
    }

    output.push_str(&format!(
        "\nPlanned: {}\nRemaining: {} for '{}'\n",
        HoursMinutes::new(wizard.planned() as i64),
        HoursMinutes::new(wizard.remaining() as i64),
        state.remainder_name
    ));
    output
}
