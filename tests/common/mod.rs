//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use kanban_board::messages::{Direction, GestureMsg, Msg, SelectionMsg};
use kanban_board::model::{Board, BoardModel, Id, Item, Section};
use kanban_board::update::update;
use kanban_board::Cmd;

/// Create a test model from `(section id, [item ids])` pairs in display order
///
/// Item names are the uppercased ids and `status` is the owning section.
pub fn test_model(sections: &[(&str, &[&str])]) -> BoardModel {
    BoardModel::new(test_board(sections))
}

pub fn test_board(sections: &[(&str, &[&str])]) -> Board {
    let sections = sections
        .iter()
        .map(|(section, items)| {
            Section::new(
                *section,
                section.to_uppercase(),
                items
                    .iter()
                    .map(|id| Item::new(*id, id.to_uppercase(), *section))
                    .collect(),
            )
        })
        .collect();
    Board::from_sections(sections).expect("valid test board")
}

/// Item ids of a section, in order
pub fn items(model: &BoardModel, section: &str) -> Vec<String> {
    model
        .board
        .section(&section.into())
        .expect("section exists")
        .items
        .iter()
        .map(|item| item.id.0.clone())
        .collect()
}

/// Container order as plain strings
pub fn order(model: &BoardModel) -> Vec<String> {
    model
        .container_order()
        .iter()
        .map(|id| id.0.clone())
        .collect()
}

pub fn selection(model: &BoardModel) -> Vec<String> {
    model.selection.ids().iter().map(|id| id.0.clone()).collect()
}

pub fn start(model: &mut BoardModel, id: &str) -> Option<Cmd> {
    update(model, Msg::Gesture(GestureMsg::Start { id: id.into() }))
}

pub fn move_over(model: &mut BoardModel, active: &str, over: Option<&str>, below: bool) -> Option<Cmd> {
    update(
        model,
        Msg::Gesture(GestureMsg::MoveOver {
            active_id: active.into(),
            over_id: over.map(Id::from),
            pointer_below_midpoint: below,
        }),
    )
}

pub fn end(model: &mut BoardModel, active: &str, over: Option<&str>) -> Option<Cmd> {
    update(
        model,
        Msg::Gesture(GestureMsg::End {
            active_id: active.into(),
            over_id: over.map(Id::from),
        }),
    )
}

pub fn cancel(model: &mut BoardModel) -> Option<Cmd> {
    update(model, Msg::Gesture(GestureMsg::Cancel))
}

pub fn toggle(model: &mut BoardModel, id: &str) -> Option<Cmd> {
    update(model, Msg::Selection(SelectionMsg::Toggle { id: id.into() }))
}

pub fn key(model: &mut BoardModel, direction: Direction) -> Option<Cmd> {
    update(model, Msg::Gesture(GestureMsg::KeyboardMove(direction)))
}

pub fn keyboard_drop(model: &mut BoardModel) -> Option<Cmd> {
    update(model, Msg::Gesture(GestureMsg::Drop))
}

/// Every item appears exactly once and the container order is a permutation
pub fn assert_partition(model: &BoardModel) {
    if let Err(e) = model.board.check_invariants() {
        panic!("partition invariant broken: {}", e);
    }
}
