//! Ordered submission of finished allocation records.

use log::debug;

use crate::{error::Result, models::BudgetItem};

/// Receiver for new budget items, typically the budget API.
pub trait BudgetSink {
    /// Creates `item` directly after `preceding_id` (or first when `None`)
    /// and returns the id assigned to it.
    fn create_budget(&mut self, item: &BudgetItem, preceding_id: Option<u64>) -> Result<u64>;
}

/// Submits `records` one at a time, each linked after the previous one.
///
/// A record is only sent once the previous call has returned its id, so the
/// receiving side observes the wizard's order. The first failure stops the
/// loop; records already created stay created. `after` positions the first
/// record behind an existing item.
pub fn submit_in_order<K: BudgetSink + ?Sized>(
    records: &[BudgetItem],
    after: Option<u64>,
    sink: &mut K,
) -> Result<Vec<BudgetItem>> {
    let mut preceding = after;
    let mut created = Vec::with_capacity(records.len());

    for record in records {
        let id = sink.create_budget(record, preceding)?;
        debug!("Created budget '{}' with id {id}", record.name);
        created.push(record.clone().with_id(id));
        preceding = Some(id);
    }

    Ok(created)
}
