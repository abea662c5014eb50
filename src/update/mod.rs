//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

pub mod commit;
mod gesture;
mod keyboard;
pub mod reorder;
mod selection;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::BoardModel;

#[cfg(debug_assertions)]
use crate::tracing::BoardSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use gesture::update_gesture;
pub use keyboard::keyboard_move;
pub use selection::update_selection;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut BoardModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut BoardModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Gesture(m) => gesture::update_gesture(model, m),
        Msg::Selection(m) => selection::update_selection(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after board state, logs the diff and checks invariants.
#[cfg(debug_assertions)]
fn update_traced(model: &mut BoardModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = BoardSnapshot::from_model(model);
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(model, msg);

    let after = BoardSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "board", %diff, "state changed");
    }

    model.board.assert_invariants_with_context(&msg_name);

    result
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `Gesture::Start { id: Id("101") }`
/// - `Selection::Clear`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Gesture(m) => format!("Gesture::{:?}", m),
        Msg::Selection(m) => format!("Selection::{:?}", m),
    }
}
