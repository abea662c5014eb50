//! Drag gesture lifecycle tests
//!
//! Tests for start/move-over/end/cancel transitions including:
//! - Same-section and cross-section item moves
//! - Section (column) reordering
//! - Cancellation restoring the pre-gesture board
//! - Stale and out-of-order events

mod common;

use common::{cancel, end, items, move_over, order, selection, start, test_model, toggle};
use kanban_board::model::{DragTarget, Id};
use kanban_board::Cmd;

// ========================================================================
// Start
// ========================================================================

#[test]
fn test_start_item_enters_dragging() {
    let mut model = test_model(&[("a", &["x", "y"]), ("b", &["z"])]);

    let cmd = start(&mut model, "x");

    assert_eq!(model.active_id(), Some(&Id::from("x")));
    let session = model.gesture.session().unwrap();
    assert_eq!(session.active, DragTarget::Item("x".into()));
    assert_eq!(session.initial_container, Some(Id::from("a")));
    assert_eq!(session.snapshot, model.board);
    assert_eq!(
        cmd,
        Some(Cmd::Batch(vec![
            Cmd::ShowDragOverlay(DragTarget::Item("x".into())),
            Cmd::Redraw
        ]))
    );
}

#[test]
fn test_start_section_enters_dragging() {
    let mut model = test_model(&[("a", &["x"]), ("b", &[])]);

    start(&mut model, "b");

    let session = model.gesture.session().unwrap();
    assert_eq!(session.active, DragTarget::Section("b".into()));
    assert_eq!(session.initial_container, None);
}

#[test]
fn test_start_unknown_id_is_noop() {
    let mut model = test_model(&[("a", &["x"])]);

    assert_eq!(start(&mut model, "ghost"), None);
    assert!(!model.is_dragging());
}

#[test]
fn test_start_while_dragging_is_ignored() {
    let mut model = test_model(&[("a", &["x", "y"])]);
    start(&mut model, "x");

    assert_eq!(start(&mut model, "y"), None);
    assert_eq!(model.active_id(), Some(&Id::from("x")));
}

#[test]
fn test_start_in_selection_section_keeps_selection() {
    let mut model = test_model(&[("a", &["x", "y", "w"])]);
    toggle(&mut model, "y");
    toggle(&mut model, "w");

    start(&mut model, "x");

    assert_eq!(selection(&model), vec!["y", "w"]);
}

#[test]
fn test_start_outside_selection_section_clears_selection() {
    let mut model = test_model(&[("a", &["x", "y"]), ("b", &["z"])]);
    toggle(&mut model, "y");

    start(&mut model, "z");

    assert!(selection(&model).is_empty());
}

#[test]
fn test_section_drag_clears_selection() {
    let mut model = test_model(&[("a", &["x", "y"]), ("b", &["z"])]);
    toggle(&mut model, "x");

    start(&mut model, "a");

    assert!(selection(&model).is_empty());
}

#[test]
fn test_start_on_selected_item_keeps_selection() {
    let mut model = test_model(&[("a", &["x", "y", "w"])]);
    toggle(&mut model, "x");
    toggle(&mut model, "y");

    start(&mut model, "x");

    assert_eq!(selection(&model), vec!["x", "y"]);
}

// ========================================================================
// Move-over
// ========================================================================

#[test]
fn test_move_over_other_section_moves_speculatively() {
    let mut model = test_model(&[("a", &["x", "y"]), ("b", &["z"])]);
    start(&mut model, "x");

    let cmd = move_over(&mut model, "x", Some("z"), false);

    assert_eq!(items(&model, "a"), vec!["y"]);
    assert_eq!(items(&model, "b"), vec!["x", "z"]);
    assert_eq!(cmd, Some(Cmd::RedrawSections(vec!["a".into(), "b".into()])));
}

#[test]
fn test_move_over_same_section_is_deferred() {
    let mut model = test_model(&[("a", &["x", "y", "z"])]);
    start(&mut model, "x");

    assert_eq!(move_over(&mut model, "x", Some("z"), true), None);
    assert_eq!(items(&model, "a"), vec!["x", "y", "z"]);
}

#[test]
fn test_move_over_empty_space_is_noop() {
    let mut model = test_model(&[("a", &["x"]), ("b", &["z"])]);
    start(&mut model, "x");
    let before = model.board.clone();

    assert_eq!(move_over(&mut model, "x", None, false), None);
    assert_eq!(move_over(&mut model, "x", Some("nowhere"), false), None);
    assert_eq!(model.board, before);
}

#[test]
fn test_move_over_while_idle_is_noop() {
    let mut model = test_model(&[("a", &["x"]), ("b", &["z"])]);
    let before = model.clone();

    assert_eq!(move_over(&mut model, "x", Some("z"), false), None);
    assert_eq!(model, before);
}

#[test]
fn test_move_over_with_stale_active_id_is_ignored() {
    let mut model = test_model(&[("a", &["x", "y"]), ("b", &["z"])]);
    start(&mut model, "x");

    assert_eq!(move_over(&mut model, "y", Some("z"), false), None);
    assert_eq!(items(&model, "a"), vec!["x", "y"]);
}

#[test]
fn test_section_drag_move_over_leaves_board() {
    let mut model = test_model(&[("a", &["x"]), ("b", &["z"])]);
    start(&mut model, "a");
    let before = model.board.clone();

    assert_eq!(move_over(&mut model, "a", Some("b"), false), None);
    assert_eq!(model.board, before);
    assert_eq!(model.gesture.session().unwrap().over, Some(Id::from("b")));
}

#[test]
fn test_pointer_moving_back_self_corrects() {
    let mut model = test_model(&[("a", &["x", "y"]), ("b", &["z"])]);
    start(&mut model, "x");

    move_over(&mut model, "x", Some("z"), true);
    move_over(&mut model, "x", Some("y"), false);

    assert_eq!(items(&model, "a"), vec!["x", "y"]);
    assert_eq!(items(&model, "b"), vec!["z"]);
}

// ========================================================================
// End
// ========================================================================

#[test]
fn test_same_section_commit_reorders() {
    let mut model = test_model(&[("a", &["x", "y", "z"])]);

    start(&mut model, "x");
    move_over(&mut model, "x", Some("z"), true);
    let cmd = end(&mut model, "x", Some("z"));

    assert_eq!(items(&model, "a"), vec!["y", "z", "x"]);
    assert!(!model.is_dragging());
    assert_eq!(
        cmd,
        Some(Cmd::Batch(vec![
            Cmd::HideDragOverlay,
            Cmd::RedrawSections(vec!["a".into()])
        ]))
    );
}

#[test]
fn test_same_section_commit_moves_up() {
    let mut model = test_model(&[("a", &["x", "y", "z"])]);

    start(&mut model, "z");
    end(&mut model, "z", Some("x"));

    assert_eq!(items(&model, "a"), vec!["z", "x", "y"]);
}

#[test]
fn test_cross_section_single_move() {
    let mut model = test_model(&[("a", &["x", "y"]), ("b", &["z"])]);

    start(&mut model, "x");
    move_over(&mut model, "x", Some("z"), true);
    // The dragged card now occupies the slot under the pointer
    end(&mut model, "x", Some("x"));

    assert_eq!(items(&model, "a"), vec!["y"]);
    assert_eq!(items(&model, "b"), vec!["z", "x"]);
}

#[test]
fn test_release_over_hovered_card_keeps_placement_above() {
    let mut model = test_model(&[("a", &["x", "y"]), ("b", &["z"])]);

    start(&mut model, "x");
    move_over(&mut model, "x", Some("z"), false);
    assert_eq!(items(&model, "b"), vec!["x", "z"]);
    end(&mut model, "x", Some("z"));

    assert_eq!(items(&model, "a"), vec!["y"]);
    assert_eq!(items(&model, "b"), vec!["x", "z"]);
}

#[test]
fn test_release_over_hovered_card_keeps_placement_below() {
    let mut model = test_model(&[("a", &["x", "y"]), ("b", &["z"])]);

    start(&mut model, "x");
    move_over(&mut model, "x", Some("z"), true);
    assert_eq!(items(&model, "b"), vec!["z", "x"]);
    end(&mut model, "x", Some("z"));

    assert_eq!(items(&model, "a"), vec!["y"]);
    assert_eq!(items(&model, "b"), vec!["z", "x"]);
}

#[test]
fn test_hovering_another_card_after_placement_reorders_on_release() {
    let mut model = test_model(&[("a", &["x", "y"]), ("b", &["z", "w"])]);

    start(&mut model, "x");
    move_over(&mut model, "x", Some("z"), false);
    move_over(&mut model, "x", Some("w"), true);
    assert_eq!(items(&model, "b"), vec!["x", "z", "w"]);
    end(&mut model, "x", Some("w"));

    assert_eq!(items(&model, "b"), vec!["z", "w", "x"]);
}

#[test]
fn test_cross_section_drop_on_card_moves_to_its_index() {
    let mut model = test_model(&[("a", &["x", "y"]), ("b", &["z", "w"])]);

    start(&mut model, "x");
    move_over(&mut model, "x", Some("z"), false);
    assert_eq!(items(&model, "b"), vec!["x", "z", "w"]);
    end(&mut model, "x", Some("w"));

    assert_eq!(items(&model, "a"), vec!["y"]);
    assert_eq!(items(&model, "b"), vec!["z", "w", "x"]);
}

#[test]
fn test_cross_section_drop_into_empty_section() {
    let mut model = test_model(&[("a", &["x", "y"]), ("b", &[])]);

    start(&mut model, "y");
    move_over(&mut model, "y", Some("b"), false);
    end(&mut model, "y", Some("b"));

    assert_eq!(items(&model, "a"), vec!["x"]);
    assert_eq!(items(&model, "b"), vec!["y"]);
}

#[test]
fn test_end_without_target_keeps_speculative_state() {
    let mut model = test_model(&[("a", &["x", "y"]), ("b", &["z"])]);

    start(&mut model, "x");
    move_over(&mut model, "x", Some("z"), false);
    let cmd = end(&mut model, "x", None);

    assert_eq!(items(&model, "a"), vec!["y"]);
    assert_eq!(items(&model, "b"), vec!["x", "z"]);
    assert!(!model.is_dragging());
    assert_eq!(cmd, Some(Cmd::Batch(vec![Cmd::HideDragOverlay, Cmd::Redraw])));
}

#[test]
fn test_end_over_unknown_target_keeps_board() {
    let mut model = test_model(&[("a", &["x", "y"])]);

    start(&mut model, "x");
    end(&mut model, "x", Some("ghost"));

    assert_eq!(items(&model, "a"), vec!["x", "y"]);
    assert!(!model.is_dragging());
}

#[test]
fn test_end_while_idle_is_noop() {
    let mut model = test_model(&[("a", &["x", "y"])]);

    assert_eq!(end(&mut model, "x", Some("y")), None);
    assert_eq!(items(&model, "a"), vec!["x", "y"]);
}

#[test]
fn test_end_with_stale_active_id_keeps_gesture_open() {
    let mut model = test_model(&[("a", &["x", "y", "z"])]);
    start(&mut model, "x");

    assert_eq!(end(&mut model, "y", Some("z")), None);
    assert!(model.is_dragging());
    assert_eq!(items(&model, "a"), vec!["x", "y", "z"]);
}

#[test]
fn test_end_clears_selection() {
    let mut model = test_model(&[("a", &["x", "y"]), ("b", &["z"])]);
    toggle(&mut model, "x");

    start(&mut model, "x");
    end(&mut model, "x", Some("x"));

    assert!(selection(&model).is_empty());
    assert!(model.gesture.session().is_none());
}

// ========================================================================
// Section reordering
// ========================================================================

#[test]
fn test_container_reorder() {
    let mut model = test_model(&[("a", &[]), ("b", &[]), ("c", &[])]);

    start(&mut model, "b");
    move_over(&mut model, "b", Some("c"), false);
    let cmd = end(&mut model, "b", Some("c"));

    assert_eq!(order(&model), vec!["a", "c", "b"]);
    assert_eq!(cmd, Some(Cmd::Batch(vec![Cmd::HideDragOverlay, Cmd::Redraw])));
}

#[test]
fn test_container_reorder_backwards() {
    let mut model = test_model(&[("a", &[]), ("b", &[]), ("c", &[])]);

    start(&mut model, "c");
    end(&mut model, "c", Some("a"));

    assert_eq!(order(&model), vec!["c", "a", "b"]);
}

#[test]
fn test_container_reorder_over_card_uses_its_section() {
    let mut model = test_model(&[("a", &["x"]), ("b", &[]), ("c", &["z"])]);

    start(&mut model, "a");
    end(&mut model, "a", Some("z"));

    assert_eq!(order(&model), vec!["b", "c", "a"]);
    assert_eq!(items(&model, "a"), vec!["x"]);
}

#[test]
fn test_container_reorder_unknown_target_is_noop() {
    let mut model = test_model(&[("a", &[]), ("b", &[])]);

    start(&mut model, "a");
    end(&mut model, "a", Some("ghost"));

    assert_eq!(order(&model), vec!["a", "b"]);
    assert!(!model.is_dragging());
}

// ========================================================================
// Cancel
// ========================================================================

#[test]
fn test_cancel_restores_snapshot_exactly() {
    let mut model = test_model(&[("a", &["x", "y"]), ("b", &["z"]), ("c", &[])]);
    let before = model.board.clone();

    start(&mut model, "x");
    move_over(&mut model, "x", Some("z"), false);
    move_over(&mut model, "x", Some("c"), false);
    move_over(&mut model, "x", Some("z"), true);
    assert_ne!(model.board, before);

    let cmd = cancel(&mut model);

    assert_eq!(model.board, before);
    assert!(!model.is_dragging());
    assert_eq!(cmd, Some(Cmd::Batch(vec![Cmd::HideDragOverlay, Cmd::Redraw])));
}

#[test]
fn test_cancel_clears_selection() {
    let mut model = test_model(&[("a", &["x", "y"])]);
    toggle(&mut model, "x");
    toggle(&mut model, "y");

    start(&mut model, "x");
    cancel(&mut model);

    assert!(selection(&model).is_empty());
}

#[test]
fn test_cancel_while_idle_is_noop() {
    let mut model = test_model(&[("a", &["x"])]);
    assert_eq!(cancel(&mut model), None);
}
