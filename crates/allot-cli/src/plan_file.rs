//! Weekly plan stored as a JSON file.
//!
//! The file holds exactly what the budget API would return for one plan week
//! (see [`WeeklyPlanInput`]). The CLI reads it for reconciliation, rewrites it
//! after a reorder and appends wizard records to it.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use allot_core::{
    models::BudgetItem,
    ordering::apply_move,
    params::{ReorderRequest, WeeklyPlanInput},
    wizard::BudgetSink,
};
use anyhow::{Context, Result};
use log::debug;

pub struct PlanFile {
    path: PathBuf,
    pub input: WeeklyPlanInput,
}

impl PlanFile {
    /// Reads an existing plan file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read plan file {}", path.display()))?;
        let input = serde_json::from_str(&contents)
            .with_context(|| format!("Invalid plan file {}", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
            input,
        })
    }

    /// Reads `path`, or starts an empty plan when it does not exist yet.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match fs::metadata(path) {
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self {
                path: path.to_path_buf(),
                input: WeeklyPlanInput::default(),
            }),
            _ => Self::load(path),
        }
    }

    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.input)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write plan file {}", self.path.display()))?;
        debug!("Saved {} items to {}", self.input.items.len(), self.path.display());
        Ok(())
    }

    /// Id of the last item, used to append after it.
    pub fn last_id(&self) -> Option<u64> {
        self.input.items.last().and_then(|item| item.id)
    }

    fn next_id(&self) -> u64 {
        self.input
            .items
            .iter()
            .filter_map(|item| item.id)
            .max()
            .unwrap_or(0)
            + 1
    }
}

impl BudgetSink for PlanFile {
    fn create_budget(
        &mut self,
        item: &BudgetItem,
        preceding_id: Option<u64>,
    ) -> allot_core::Result<u64> {
        let id = self.next_id();
        self.input.items.push(item.clone().with_id(id));
        let request = ReorderRequest {
            item_id: id,
            preceding_id,
        };
        if let Err(e) = apply_move(&mut self.input.items, &request) {
            self.input.items.pop();
            return Err(e);
        }
        Ok(id)
    }
}
