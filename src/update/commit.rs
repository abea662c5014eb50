//! Final board mutation when a drag gesture ends
//!
//! A commit that cannot resolve its target leaves the board exactly as the
//! speculative moves left it.

use std::collections::HashSet;

use crate::model::{Board, Id, Item, Selection};
use crate::util::{array_move, array_moved};

/// A committed board together with the sections it touched
#[derive(Debug, Clone, PartialEq)]
pub struct Commit {
    pub board: Board,
    /// Sections whose item lists changed (empty for container reorders)
    pub touched: Vec<Id>,
}

/// Move a whole section to the position of `over_id` in the container order
///
/// `over_id` may name a section or an item; an item resolves to its section.
pub fn commit_section_move(board: &Board, active_id: &Id, over_id: Option<&Id>) -> Option<Commit> {
    let over_id = over_id?;
    let target = board.find_container(over_id)?;

    let order = &board.container_order;
    let from = order.iter().position(|id| id == active_id)?;
    let to = order.iter().position(|id| *id == target)?;
    if from == to {
        return None;
    }

    tracing::debug!(section = %active_id, from, to, "reordering sections");

    let mut next = board.clone();
    next.container_order = array_moved(order, from, to);
    Some(Commit {
        board: next,
        touched: Vec::new(),
    })
}

/// Place the dragged item, and any co-selected items, at the drop target
///
/// `initial_container` is the section the drag started in. Co-selected items
/// still live there (only the active item moves speculatively) and follow
/// the active item in board order.
///
/// `placed_beside` is the card a cross-section move last placed the item
/// next to. Releasing over that card keeps the placement instead of moving
/// the item onto the card's index.
pub fn commit_item_move(
    board: &Board,
    active_id: &Id,
    initial_container: &Id,
    over_id: Option<&Id>,
    placed_beside: Option<&Id>,
    selection: &Selection,
) -> Option<Commit> {
    let Some(over_id) = over_id else {
        tracing::debug!(active = %active_id, "drop outside any target, keeping board");
        return None;
    };
    let active_container = board.find_container(active_id)?;
    let Some(over_container) = board.find_container(over_id) else {
        tracing::debug!(over = %over_id, "drop target no longer on board, keeping board");
        return None;
    };
    let active_item = board.item(active_id)?.clone();

    let co_selected: Vec<Item> = board
        .section(initial_container)
        .map(|section| {
            section
                .items
                .iter()
                .filter(|item| &item.id != active_id && selection.contains(&item.id))
                .cloned()
                .collect()
        })
        .unwrap_or_default();
    let co_ids: HashSet<&Id> = co_selected.iter().map(|item| &item.id).collect();

    let mut view: Vec<Item> = board
        .section(&over_container)?
        .items
        .iter()
        .filter(|item| !co_ids.contains(&item.id))
        .cloned()
        .collect();

    let over_index = view.iter().position(|item| &item.id == over_id);
    let active_index = view.iter().position(|item| &item.id == active_id);
    let keep_placement = active_container != *initial_container && placed_beside == Some(over_id);
    if let (Some(from), Some(to), false) = (active_index, over_index, keep_placement) {
        array_move(&mut view, from, to);
    }

    let insert_at = match view.iter().position(|item| &item.id == active_id) {
        Some(index) => {
            view.remove(index);
            index
        }
        // Dropped straight onto another section's card without a move-over
        None => over_index.map_or(view.len(), |index| index + 1),
    };

    let mut moving_ids: HashSet<Id> = co_ids.iter().map(|id| (*id).clone()).collect();
    moving_ids.insert(active_id.clone());

    let mut group = Vec::with_capacity(co_selected.len() + 1);
    group.push(active_item);
    group.extend(co_selected);
    let insert_at = insert_at.min(view.len());
    view.splice(insert_at..insert_at, group);

    let mut next = board.clone();
    let mut touched = Vec::new();
    for container in [initial_container, &active_container] {
        if *container == over_container || touched.contains(container) {
            continue;
        }
        if let Some(section) = board.section(container) {
            let remaining = section
                .items
                .iter()
                .filter(|item| !moving_ids.contains(&item.id))
                .cloned()
                .collect();
            next.set_items(container, remaining);
            touched.push(container.clone());
        }
    }
    next.set_items(&over_container, view);
    touched.push(over_container);

    if next == *board {
        return None;
    }

    Some(Commit {
        board: next,
        touched,
    })
}
