//! Reorder targets for lists ordered by "preceding id" links.
//!
//! The budget API stores order as links: each item optionally names the item
//! directly before it, and no link means "first". This module never edits
//! those links. It reads the order currently shown to the user and works out
//! which preceding id to submit so that the item moves one place.

use crate::{
    error::{AllotError, Result},
    models::{BudgetItem, ReconciledStat},
    params::ReorderRequest,
};

/// Items that can take part in a preceding-id ordering.
pub trait Identified {
    /// Stable identifier, `None` while the item is unsaved.
    fn identifier(&self) -> Option<u64>;
}

impl Identified for u64 {
    fn identifier(&self) -> Option<u64> {
        Some(*self)
    }
}

impl Identified for BudgetItem {
    fn identifier(&self) -> Option<u64> {
        self.id
    }
}

impl Identified for ReconciledStat {
    fn identifier(&self) -> Option<u64> {
        self.item.id
    }
}

fn position_of<T: Identified>(items: &[T], target: u64) -> Result<usize> {
    items
        .iter()
        .position(|item| item.identifier() == Some(target))
        .ok_or(AllotError::ItemNotFound { id: target })
}

fn id_at<T: Identified>(items: &[T], index: usize, target: u64) -> Result<u64> {
    items
        .get(index)
        .and_then(Identified::identifier)
        .ok_or_else(|| AllotError::InvalidMove {
            id: target,
            reason: format!("neighbour at position {index} has not been saved"),
        })
}

/// Whether `target` is the first item of `items`.
pub fn is_first_on_list<T: Identified>(items: &[T], target: u64) -> bool {
    items.first().and_then(Identified::identifier) == Some(target)
}

/// Whether `target` is the last item of `items`.
pub fn is_last_on_list<T: Identified>(items: &[T], target: u64) -> bool {
    items.last().and_then(Identified::identifier) == Some(target)
}

/// Preceding id that moves `target` one place towards the front.
///
/// Returns `Ok(None)` ("move to front") when the target is already first or
/// second.
pub fn move_up<T: Identified>(items: &[T], target: u64) -> Result<Option<u64>> {
    let index = position_of(items, target)?;
    if index < 2 {
        return Ok(None);
    }
    id_at(items, index - 2, target).map(Some)
}

/// Preceding id that moves `target` one place towards the back.
///
/// Moving the last item down is rejected with [`AllotError::InvalidMove`].
pub fn move_down<T: Identified>(items: &[T], target: u64) -> Result<u64> {
    let index = position_of(items, target)?;
    if index + 1 >= items.len() {
        return Err(AllotError::InvalidMove {
            id: target,
            reason: "item is already last on the list".to_string(),
        });
    }
    id_at(items, index + 1, target)
}

/// Builds the request for moving `target` up.
pub fn move_up_request<T: Identified>(items: &[T], target: u64) -> Result<ReorderRequest> {
    Ok(ReorderRequest {
        item_id: target,
        preceding_id: move_up(items, target)?,
    })
}

/// Builds the request for moving `target` down.
pub fn move_down_request<T: Identified>(items: &[T], target: u64) -> Result<ReorderRequest> {
    Ok(ReorderRequest {
        item_id: target,
        preceding_id: Some(move_down(items, target)?),
    })
}

/// Applies a reorder request to an in-memory list.
///
/// The item is placed directly after `preceding_id`, or at the front when
/// there is none. On error the list is left unchanged.
pub fn apply_move<T: Identified>(items: &mut Vec<T>, request: &ReorderRequest) -> Result<()> {
    let from = position_of(items, request.item_id)?;
    if let Some(preceding) = request.preceding_id {
        if preceding == request.item_id {
            return Err(AllotError::InvalidMove {
                id: request.item_id,
                reason: "an item cannot follow itself".to_string(),
            });
        }
        position_of(items, preceding)?;
    }

    let item = items.remove(from);
    let to = match request.preceding_id {
        Some(preceding) => position_of(items, preceding)? + 1,
        None => 0,
    };
    items.insert(to, item);
    Ok(())
}
