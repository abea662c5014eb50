//! Drag gesture message handlers (start, move-over, end, cancel)

use tracing::{debug, warn};

use crate::commands::Cmd;
use crate::messages::GestureMsg;
use crate::model::{BoardModel, DragSession, DragTarget, GestureState, Id};

use super::commit::{commit_item_move, commit_section_move};
use super::keyboard;
use super::reorder::speculative_move;

/// Handle drag gesture messages
pub fn update_gesture(model: &mut BoardModel, msg: GestureMsg) -> Option<Cmd> {
    match msg {
        GestureMsg::Start { id } => start_drag(model, id),
        GestureMsg::MoveOver {
            active_id,
            over_id,
            pointer_below_midpoint,
        } => move_over(model, &active_id, over_id, pointer_below_midpoint),
        GestureMsg::End { active_id, over_id } => end_drag(model, &active_id, over_id),
        GestureMsg::Cancel => cancel_drag(model),
        GestureMsg::KeyboardMove(direction) => keyboard::keyboard_move(model, direction),
        GestureMsg::Drop => {
            let session = model.gesture.session()?;
            let active_id = session.active.id().clone();
            let over_id = session.over.clone();
            end_drag(model, &active_id, over_id)
        }
    }
}

fn start_drag(model: &mut BoardModel, id: Id) -> Option<Cmd> {
    if let Some(active) = model.gesture.active_id() {
        warn!(%id, %active, "drag start while another drag is active, ignoring");
        return None;
    }

    let Some(target) = model.board.resolve(&id) else {
        debug!(%id, "drag start on unknown id, ignoring");
        return None;
    };

    let initial_container = match &target {
        DragTarget::Item(item) => model.board.find_container(item),
        DragTarget::Section(_) => None,
    };

    // The multi-select only survives a drag started in its own section
    let selection_section = model
        .selection
        .first()
        .and_then(|first| model.board.find_container(first));
    if initial_container.is_none() || initial_container != selection_section {
        model.selection.clear();
    }

    debug!(?target, initial = ?initial_container, selected = model.selection.len(), "drag started");

    model.gesture = GestureState::Dragging(DragSession {
        active: target.clone(),
        initial_container,
        over: None,
        placed_beside: None,
        snapshot: model.board.clone(),
    });

    Some(Cmd::batch(vec![Cmd::ShowDragOverlay(target), Cmd::Redraw]))
}

/// Record the hovered id and apply a speculative cross-section move
pub(super) fn move_over(
    model: &mut BoardModel,
    active_id: &Id,
    over_id: Option<Id>,
    pointer_below_midpoint: bool,
) -> Option<Cmd> {
    let session = current_session(model, active_id, "move-over")?;
    session.over = over_id.clone();
    if session.active.is_section() {
        return None;
    }

    let moved = speculative_move(
        &model.board,
        active_id,
        over_id.as_ref(),
        pointer_below_midpoint,
    );

    let session = model.gesture.session_mut()?;
    let Some(moved) = moved else {
        if session.placed_beside != over_id {
            session.placed_beside = None;
        }
        return None;
    };
    session.placed_beside = over_id;
    model.board = moved.board;
    Some(Cmd::redraw_sections([moved.from, moved.to]))
}

fn end_drag(model: &mut BoardModel, active_id: &Id, over_id: Option<Id>) -> Option<Cmd> {
    current_session(model, active_id, "end")?;
    let GestureState::Dragging(session) = std::mem::take(&mut model.gesture) else {
        return None;
    };

    let commit = match &session.active {
        DragTarget::Section(section) => {
            commit_section_move(&model.board, section, over_id.as_ref())
        }
        DragTarget::Item(item) => {
            let initial = session
                .initial_container
                .clone()
                .or_else(|| model.board.find_container(item));
            initial.and_then(|initial| {
                commit_item_move(
                    &model.board,
                    item,
                    &initial,
                    over_id.as_ref(),
                    session.placed_beside.as_ref(),
                    &model.selection,
                )
            })
        }
    };

    let had_selection = !model.selection.is_empty();
    model.selection.clear();

    let redraw = match commit {
        Some(commit) => {
            debug!(active = %active_id, over = ?over_id, touched = ?commit.touched, "drag committed");
            model.board = commit.board;
            if commit.touched.is_empty() || had_selection {
                Cmd::Redraw
            } else {
                Cmd::redraw_sections(commit.touched)
            }
        }
        None => {
            debug!(active = %active_id, over = ?over_id, "drag ended without commit");
            Cmd::Redraw
        }
    };

    Some(Cmd::batch(vec![Cmd::HideDragOverlay, redraw]))
}

fn cancel_drag(model: &mut BoardModel) -> Option<Cmd> {
    let GestureState::Dragging(session) = std::mem::take(&mut model.gesture) else {
        debug!("cancel with no drag in progress");
        return None;
    };

    debug!(active = %session.active.id(), "drag cancelled, restoring snapshot");
    model.board = session.snapshot;
    model.selection.clear();

    Some(Cmd::batch(vec![Cmd::HideDragOverlay, Cmd::Redraw]))
}

/// The in-flight session, if `active_id` belongs to it
fn current_session<'a>(
    model: &'a mut BoardModel,
    active_id: &Id,
    event: &str,
) -> Option<&'a mut DragSession> {
    let Some(session) = model.gesture.session_mut() else {
        debug!(%active_id, event, "no drag in progress, ignoring");
        return None;
    };
    if session.active.id() != active_id {
        warn!(
            %active_id,
            current = %session.active.id(),
            event,
            "stale gesture event, ignoring"
        );
        return None;
    }
    Some(session)
}
