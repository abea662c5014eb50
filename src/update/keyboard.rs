//! Keyboard-driven drags
//!
//! Arrow keys step the drop target instead of a pointer hovering over it.
//! Up/Down walk the items of the target section, skipping the dragged item;
//! Left/Right jump to the neighbouring section. The chosen target goes
//! through the same move-over path as pointer events, with "below midpoint"
//! meaning the step was downwards.

use crate::commands::Cmd;
use crate::messages::Direction;
use crate::model::{Board, BoardModel, DragSession, DragTarget, Id};

use super::gesture::move_over;

/// Step the drop target of the current drag
pub fn keyboard_move(model: &mut BoardModel, direction: Direction) -> Option<Cmd> {
    let session = model.gesture.session()?;
    let active_id = session.active.id().clone();
    let is_section = session.active.is_section();
    let next = next_target(&model.board, session, direction)?;

    tracing::debug!(active = %active_id, ?direction, over = %next, "keyboard step");

    let cmd = move_over(
        model,
        &active_id,
        Some(next),
        direction == Direction::Down,
    );

    // The item now sits where the target was; dropping right away keeps it
    // there, and further steps reorder relative to that spot
    if cmd.is_some() && !is_section {
        if let Some(session) = model.gesture.session_mut() {
            session.over = Some(active_id);
            session.placed_beside = None;
        }
    }

    // The overlay follows the target even when the board is unchanged
    Some(cmd.unwrap_or(Cmd::Redraw))
}

fn next_target(board: &Board, session: &DragSession, direction: Direction) -> Option<Id> {
    let active = session.active.id();
    let current = session
        .over
        .as_ref()
        .filter(|id| board.find_container(id).is_some())
        .unwrap_or(active);

    match (&session.active, direction) {
        (DragTarget::Section(_), Direction::Left | Direction::Right) => {
            let section = board.find_container(current)?;
            neighbour_section(board, &section, direction)
        }
        (DragTarget::Section(_), _) => None,
        (DragTarget::Item(_), Direction::Up | Direction::Down) => {
            step_within_section(board, active, current, direction)
        }
        (DragTarget::Item(_), Direction::Left | Direction::Right) => {
            jump_to_section(board, active, current, direction)
        }
    }
}

/// Section next to `section` in container order
fn neighbour_section(board: &Board, section: &Id, direction: Direction) -> Option<Id> {
    let order = &board.container_order;
    let index = order.iter().position(|id| id == section)?;
    let next = match direction {
        Direction::Left => index.checked_sub(1)?,
        Direction::Right => index + 1,
        Direction::Up | Direction::Down => return None,
    };
    order.get(next).cloned()
}

fn step_within_section(board: &Board, active: &Id, current: &Id, direction: Direction) -> Option<Id> {
    let container = board.find_container(current)?;
    let section = board.section(&container)?;
    let others: Vec<&Id> = section
        .items
        .iter()
        .map(|item| &item.id)
        .filter(|id| *id != active)
        .collect();

    let next = match others.iter().position(|id| *id == current) {
        Some(cursor) => match direction {
            Direction::Up => cursor.checked_sub(1)?,
            _ => cursor + 1,
        },
        // Starting from the dragged item itself, or from an empty-ish section
        None if current == active => {
            let own = section.index_of(active)?;
            match direction {
                Direction::Up => own.checked_sub(1)?,
                _ => own,
            }
        }
        None => match direction {
            Direction::Up => others.len().checked_sub(1)?,
            _ => return None,
        },
    };
    others.get(next).map(|id| (*id).clone())
}

fn jump_to_section(board: &Board, active: &Id, current: &Id, direction: Direction) -> Option<Id> {
    let container = board.find_container(current)?;
    let neighbour = neighbour_section(board, &container, direction)?;
    let cursor = board
        .section(&container)
        .and_then(|section| section.index_of(current))
        .unwrap_or(0);

    let target = board.section(&neighbour)?;
    let others: Vec<&Id> = target
        .items
        .iter()
        .map(|item| &item.id)
        .filter(|id| *id != active)
        .collect();

    if others.is_empty() {
        return Some(neighbour);
    }
    Some(others[cursor.min(others.len() - 1)].clone())
}
