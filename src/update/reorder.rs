//! Speculative reordering while a drag is in progress
//!
//! Recomputed from the current board on every move-over, so repeating the
//! same input is a no-op once the item has landed in the hovered section.

use crate::model::{Board, Id};

/// Result of a cross-section speculative move
#[derive(Debug, Clone, PartialEq)]
pub struct SpeculativeMove {
    pub board: Board,
    /// Section the item was taken from
    pub from: Id,
    /// Section the item was placed in
    pub to: Id,
}

/// Tentatively move `active_id` into the section under `over_id`
///
/// Returns `None` when nothing changes: no over target, a section being
/// dragged, an id that no longer resolves, or a move within one section
/// (those are applied at commit time only).
pub fn speculative_move(
    board: &Board,
    active_id: &Id,
    over_id: Option<&Id>,
    pointer_below_midpoint: bool,
) -> Option<SpeculativeMove> {
    let over_id = over_id?;
    if board.is_section(active_id) {
        return None;
    }

    let active_container = board.find_container(active_id)?;
    let over_container = board.find_container(over_id)?;
    if active_container == over_container {
        return None;
    }

    let active_section = board.section(&active_container)?;
    let over_section = board.section(&over_container)?;

    let active_index = active_section.index_of(active_id)?;
    let active_item = active_section.items[active_index].clone();

    let mut from_items = active_section.items.clone();
    from_items.remove(active_index);

    let mut to_items = over_section.items.clone();
    let insert_at = if board.is_section(over_id) {
        to_items.len()
    } else {
        match over_section.index_of(over_id) {
            Some(index) if pointer_below_midpoint => index + 1,
            Some(index) => index,
            None => to_items.len(),
        }
    };
    to_items.insert(insert_at.min(to_items.len()), active_item);

    tracing::trace!(
        active = %active_id,
        from = %active_container,
        to = %over_container,
        index = insert_at,
        "speculative move"
    );

    let mut next = board.clone();
    next.set_items(&active_container, from_items);
    next.set_items(&over_container, to_items);

    Some(SpeculativeMove {
        board: next,
        from: active_container,
        to: over_container,
    })
}
