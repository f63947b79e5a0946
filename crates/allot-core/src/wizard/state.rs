//! Wizard snapshot, steps and the closed set of optional activities.

use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

use crate::models::TimeAmount;

/// Remainder name offered until the user picks one.
pub const DEFAULT_REMAINDER_NAME: &str = "Free time";

/// One page of the wizard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    /// Name the new plan; shown only when creating a plan
    PlanName,
    Sleep,
    Work,
    /// Toggle and size the optional activities
    Activities,
    /// Free-form entries
    Custom,
    /// Name the bucket that absorbs unallocated time
    Remainder,
    Summary,
}

impl WizardStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            WizardStep::PlanName => "plan name",
            WizardStep::Sleep => "sleep",
            WizardStep::Work => "work",
            WizardStep::Activities => "activities",
            WizardStep::Custom => "custom",
            WizardStep::Remainder => "remainder",
            WizardStep::Summary => "summary",
        }
    }

    /// Steps in navigation order for the given context.
    pub fn visible(creating_plan: bool) -> Vec<WizardStep> {
        let all = [
            WizardStep::PlanName,
            WizardStep::Sleep,
            WizardStep::Work,
            WizardStep::Activities,
            WizardStep::Custom,
            WizardStep::Remainder,
            WizardStep::Summary,
        ];
        all.into_iter()
            .filter(|step| creating_plan || *step != WizardStep::PlanName)
            .collect()
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A visible step together with whether it currently allows `next`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDescriptor {
    pub step: WizardStep,
    pub is_valid: bool,
}

/// Optional activities the wizard offers as toggles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Activity {
    Exercise,
    Commute,
    Meals,
    Chores,
    Family,
}

impl Activity {
    pub const ALL: [Activity; 5] = [
        Activity::Exercise,
        Activity::Commute,
        Activity::Meals,
        Activity::Chores,
        Activity::Family,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Activity::Exercise => "exercise",
            Activity::Commute => "commute",
            Activity::Meals => "meals",
            Activity::Chores => "chores",
            Activity::Family => "family",
        }
    }

    /// Name given to the budget created for this activity.
    pub fn label(&self) -> &'static str {
        match self {
            Activity::Exercise => "Exercise",
            Activity::Commute => "Commute",
            Activity::Meals => "Meals",
            Activity::Chores => "Chores",
            Activity::Family => "Family",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Activity::Exercise => "dumbbell",
            Activity::Commute => "train",
            Activity::Meals => "utensils",
            Activity::Chores => "broom",
            Activity::Family => "users",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Activity::Exercise => "#43a047",
            Activity::Commute => "#8d6e63",
            Activity::Meals => "#fb8c00",
            Activity::Chores => "#78909c",
            Activity::Family => "#ec407a",
        }
    }

    /// Suggested amount, disabled until the user opts in.
    pub fn default_amount(&self) -> TimeAmount {
        let amount = match self {
            Activity::Exercise => TimeAmount::daily(1, 0).on_days(3),
            Activity::Commute => TimeAmount::daily(1, 0).on_days(5),
            Activity::Meals => TimeAmount::daily(1, 30),
            Activity::Chores => TimeAmount::weekly(3, 0),
            Activity::Family => TimeAmount::daily(1, 0),
        };
        amount.with_enabled(false)
    }
}

impl std::str::FromStr for Activity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Activity::ALL
            .into_iter()
            .find(|activity| activity.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown activity: {s}"))
    }
}

/// Everything the wizard has collected so far.
///
/// This is the value written to the key-value store on every change. Its JSON
/// shape is private to one installation and carries no version.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WizardState {
    /// Index into the visible steps
    pub current_step: usize,
    /// Whether the wizard creates a new plan (and so asks for its name)
    pub creating_plan: bool,
    pub plan_name: String,
    pub sleep: TimeAmount,
    pub work: TimeAmount,
    pub activities: BTreeMap<Activity, TimeAmount>,
    pub custom: Vec<TimeAmount>,
    pub remainder_name: String,
    pub open: bool,
}

impl WizardState {
    /// Fresh state with suggested amounts.
    pub fn new(creating_plan: bool) -> Self {
        Self {
            current_step: 0,
            creating_plan,
            plan_name: String::new(),
            sleep: TimeAmount::daily(8, 0),
            work: TimeAmount::daily(8, 0).on_days(5),
            activities: Activity::ALL
                .into_iter()
                .map(|activity| (activity, activity.default_amount()))
                .collect(),
            custom: Vec::new(),
            remainder_name: DEFAULT_REMAINDER_NAME.to_string(),
            open: false,
        }
    }

    pub fn visible_steps(&self) -> Vec<WizardStep> {
        WizardStep::visible(self.creating_plan)
    }

    /// The step at `current_step`, clamped to the visible range.
    pub fn step(&self) -> WizardStep {
        let steps = self.visible_steps();
        let index = self.current_step.min(steps.len() - 1);
        steps[index]
    }

    /// Activities switched on, in declaration order.
    pub fn enabled_activities(&self) -> impl Iterator<Item = (Activity, &TimeAmount)> {
        self.activities
            .iter()
            .filter(|(_, amount)| amount.is_enabled())
            .map(|(activity, amount)| (*activity, amount))
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new(false)
    }
}
