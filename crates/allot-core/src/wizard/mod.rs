//! Guided allocation of a 168-hour week.
//!
//! The wizard walks a fixed, linear sequence of steps (see [`WizardStep`]),
//! collecting sleep, work, optional activities, custom entries and the name of
//! a remainder bucket. Navigation never skips ahead: `next` moves one step and
//! only when the current step is valid, `prev` moves one step back, and
//! `finish` on the last step produces the allocation records.
//!
//! Every change is written to a [`KeyValueStore`] under [`WIZARD_KEY`], so an
//! abandoned session resumes where it stopped. `reset` and a successful
//! `finish` remove the snapshot.
//!
//! ```rust
//! use allot_core::{
//!     models::TimeAmount,
//!     store::MemoryStore,
//!     wizard::{Activity, Wizard},
//! };
//!
//! let mut wizard = Wizard::open(MemoryStore::new(), false);
//! wizard.set_sleep(TimeAmount::daily(8, 0));
//! wizard.set_work(TimeAmount::daily(8, 0).on_days(5));
//! wizard.set_activity(Activity::Family, TimeAmount::daily(1, 0).with_enabled(true));
//!
//! assert_eq!(wizard.planned(), 370_800);
//! assert_eq!(wizard.remaining(), 234_000);
//! ```

pub mod sink;
pub mod state;

use log::{debug, warn};

use crate::{
    error::{AllotError, Result},
    models::{BudgetItem, TimeAmount, WEEK_SECONDS},
    store::KeyValueStore,
};

pub use sink::{submit_in_order, BudgetSink};
pub use state::{Activity, StepDescriptor, WizardState, WizardStep, DEFAULT_REMAINDER_NAME};

/// Store key holding the in-progress snapshot.
pub const WIZARD_KEY: &str = "allocation-wizard";

const CUSTOM_ICON: &str = "clock";
const CUSTOM_COLORS: [&str; 4] = ["#7e57c2", "#26a69a", "#ffa726", "#ef5350"];
const REMAINDER_ICON: &str = "sparkles";
const REMAINDER_COLOR: &str = "#bdbdbd";

/// Total seconds allocated by the state: sleep, work, enabled activities and
/// every custom entry.
pub fn compute_planned(state: &WizardState) -> u64 {
    let activities: u64 = state
        .enabled_activities()
        .map(|(_, amount)| amount.to_seconds())
        .sum();
    let custom: u64 = state.custom.iter().map(TimeAmount::to_seconds).sum();
    state.sleep.to_seconds() + state.work.to_seconds() + activities + custom
}

/// Unallocated seconds of the week, never below zero.
pub fn compute_remaining(state: &WizardState) -> u64 {
    WEEK_SECONDS.saturating_sub(compute_planned(state))
}

/// The budget items the wizard would create, in submission order.
///
/// Disabled activities are left out. The remainder record is added only when
/// time is left and carries zero occurrences.
pub fn build_allocation_records(state: &WizardState) -> Vec<BudgetItem> {
    let mut records = vec![
        BudgetItem::new("Sleep", state.sleep.to_seconds(), state.sleep.occurrences())
            .with_style("bed", "#5c6bc0"),
        BudgetItem::new("Work", state.work.to_seconds(), state.work.occurrences())
            .with_style("briefcase", "#1e88e5"),
    ];

    records.extend(state.enabled_activities().map(|(activity, amount)| {
        BudgetItem::new(activity.label(), amount.to_seconds(), amount.occurrences())
            .with_style(activity.icon(), activity.color())
    }));

    records.extend(state.custom.iter().enumerate().map(|(index, amount)| {
        let name = amount
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map_or_else(|| format!("Custom {}", index + 1), str::to_string);
        BudgetItem::new(name, amount.to_seconds(), amount.occurrences())
            .with_style(CUSTOM_ICON, CUSTOM_COLORS[index % CUSTOM_COLORS.len()])
    }));

    let remaining = compute_remaining(state);
    if remaining > 0 {
        let name = match state.remainder_name.trim() {
            "" => DEFAULT_REMAINDER_NAME,
            name => name,
        };
        records.push(BudgetItem::new(name, remaining, 0).with_style(REMAINDER_ICON, REMAINDER_COLOR));
    }

    records
}

/// Whether `step` currently allows moving forward.
pub fn is_step_valid(state: &WizardState, step: WizardStep) -> bool {
    let within_week = compute_planned(state) <= WEEK_SECONDS;
    match step {
        WizardStep::PlanName => !state.plan_name.trim().is_empty(),
        WizardStep::Sleep | WizardStep::Work | WizardStep::Activities => within_week,
        WizardStep::Custom => {
            within_week
                && state
                    .custom
                    .iter()
                    .all(|entry| entry.name.as_deref().is_some_and(|n| !n.trim().is_empty()))
        }
        WizardStep::Remainder => {
            compute_remaining(state) == 0 || !state.remainder_name.trim().is_empty()
        }
        WizardStep::Summary => true,
    }
}

/// One open wizard session bound to a snapshot store.
pub struct Wizard<S: KeyValueStore> {
    store: S,
    state: WizardState,
}

impl<S: KeyValueStore> Wizard<S> {
    /// Opens the wizard, resuming a stored snapshot when there is one.
    ///
    /// `creating_plan` decides whether the plan-name step is shown. A restored
    /// session resumes on the same step it was saved on; a saved plan-name step
    /// that is hidden in this context resumes on the first visible step.
    pub fn open(store: S, creating_plan: bool) -> Self {
        let mut state = Self::restore(&store).unwrap_or_else(|| WizardState::new(creating_plan));
        let saved = state.step();
        state.creating_plan = creating_plan;
        state.current_step = state
            .visible_steps()
            .iter()
            .position(|step| *step == saved)
            .unwrap_or(0);
        state.open = true;

        let mut wizard = Self { store, state };
        wizard.persist();
        wizard
    }

    fn restore(store: &S) -> Option<WizardState> {
        let snapshot = match store.get(WIZARD_KEY) {
            Ok(snapshot) => snapshot?,
            Err(e) => {
                warn!("Could not read wizard snapshot: {e}");
                return None;
            }
        };
        match serde_json::from_str(&snapshot) {
            Ok(state) => {
                debug!("Resuming wizard from stored snapshot");
                Some(state)
            }
            Err(e) => {
                warn!("Discarding unreadable wizard snapshot: {e}");
                None
            }
        }
    }

    fn persist(&mut self) {
        let result = serde_json::to_string(&self.state)
            .map_err(AllotError::from)
            .and_then(|json| self.store.set(WIZARD_KEY, &json));
        if let Err(e) = result {
            warn!("Could not save wizard snapshot: {e}");
        }
    }

    fn update(&mut self, change: impl FnOnce(&mut WizardState)) {
        change(&mut self.state);
        self.persist();
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// Releases the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Visible steps with their current validity.
    pub fn steps(&self) -> Vec<StepDescriptor> {
        self.state
            .visible_steps()
            .into_iter()
            .map(|step| StepDescriptor {
                step,
                is_valid: is_step_valid(&self.state, step),
            })
            .collect()
    }

    pub fn current_index(&self) -> usize {
        self.state.current_step
    }

    pub fn current_step(&self) -> WizardStep {
        self.state.step()
    }

    pub fn is_last_step(&self) -> bool {
        self.state.current_step + 1 >= self.state.visible_steps().len()
    }

    /// Whether `next` would advance.
    pub fn can_advance(&self) -> bool {
        !self.is_last_step() && is_step_valid(&self.state, self.current_step())
    }

    /// Moves one step forward. Returns false when the current step is invalid
    /// or already the last one.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> bool {
        if !self.can_advance() {
            debug!("Wizard cannot leave step '{}'", self.current_step());
            return false;
        }
        self.update(|state| state.current_step += 1);
        debug!("Wizard moved to step '{}'", self.current_step());
        true
    }

    /// Moves one step back. Returns false on the first step.
    pub fn prev(&mut self) -> bool {
        if self.state.current_step == 0 {
            return false;
        }
        self.update(|state| state.current_step -= 1);
        debug!("Wizard moved back to step '{}'", self.current_step());
        true
    }

    pub fn set_plan_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.update(|state| state.plan_name = name);
    }

    pub fn set_sleep(&mut self, amount: TimeAmount) {
        self.update(|state| state.sleep = amount);
    }

    pub fn set_work(&mut self, amount: TimeAmount) {
        self.update(|state| state.work = amount);
    }

    /// Replaces an activity's amount, including its enabled flag.
    pub fn set_activity(&mut self, activity: Activity, amount: TimeAmount) {
        self.update(|state| {
            state.activities.insert(activity, amount);
        });
    }

    /// Switches an activity on or off, keeping its amount.
    pub fn toggle_activity(&mut self, activity: Activity, enabled: bool) {
        self.update(|state| {
            state
                .activities
                .entry(activity)
                .or_insert_with(|| activity.default_amount())
                .enabled = Some(enabled);
        });
    }

    /// Appends a custom entry and returns its index.
    pub fn add_custom(&mut self, amount: TimeAmount) -> usize {
        self.update(|state| state.custom.push(amount));
        self.state.custom.len() - 1
    }

    /// Replaces the custom entry at `index`; returns false when out of range.
    pub fn update_custom(&mut self, index: usize, amount: TimeAmount) -> bool {
        if index >= self.state.custom.len() {
            return false;
        }
        self.update(|state| state.custom[index] = amount);
        true
    }

    pub fn remove_custom(&mut self, index: usize) -> Option<TimeAmount> {
        if index >= self.state.custom.len() {
            return None;
        }
        let removed = self.state.custom.remove(index);
        self.persist();
        Some(removed)
    }

    pub fn set_remainder_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.update(|state| state.remainder_name = name);
    }

    pub fn planned(&self) -> u64 {
        compute_planned(&self.state)
    }

    pub fn remaining(&self) -> u64 {
        compute_remaining(&self.state)
    }

    /// Records the wizard would emit right now.
    pub fn preview(&self) -> Vec<BudgetItem> {
        build_allocation_records(&self.state)
    }

    /// Discards all progress and starts over from the first step.
    pub fn reset(&mut self) {
        if let Err(e) = self.store.clear(WIZARD_KEY) {
            warn!("Could not clear wizard snapshot: {e}");
        }
        let mut state = WizardState::new(self.state.creating_plan);
        state.open = true;
        self.state = state;
        debug!("Wizard reset");
    }

    /// Emits the allocation records and closes the session.
    ///
    /// Only allowed on the last step with every visible step valid; the
    /// snapshot is removed once the records are produced.
    pub fn finish(&mut self) -> Result<Vec<BudgetItem>> {
        if !self.is_last_step() {
            return Err(AllotError::WizardIncomplete {
                step: format!("still on step '{}'", self.current_step()),
            });
        }
        if let Some(invalid) = self.steps().into_iter().find(|d| !d.is_valid) {
            return Err(AllotError::WizardIncomplete {
                step: format!("step '{}' is not valid", invalid.step),
            });
        }

        let records = build_allocation_records(&self.state);
        if let Err(e) = self.store.clear(WIZARD_KEY) {
            warn!("Could not clear wizard snapshot: {e}");
        }
        self.state = WizardState::new(self.state.creating_plan);
        debug!("Wizard finished with {} records", records.len());
        Ok(records)
    }
}
