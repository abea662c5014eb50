//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types. The input layer
//! (pointer or keyboard handling) turns raw events into these and feeds them
//! to [`crate::update::update`] one at a time.

use serde::Deserialize;

use crate::model::Id;

/// Direction for keyboard-driven drags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Drag gesture messages
#[derive(Debug, Clone, PartialEq)]
pub enum GestureMsg {
    /// Pick up the item or section under the pointer / key focus
    Start { id: Id },
    /// The drag moved over `over_id` (`None` when over empty space)
    MoveOver {
        active_id: Id,
        over_id: Option<Id>,
        /// Pointer is past the lower edge of the hovered card
        pointer_below_midpoint: bool,
    },
    /// Release over `over_id`
    End { active_id: Id, over_id: Option<Id> },
    /// Abort the drag and restore the board
    Cancel,

    // === Keyboard drags ===
    /// Step the drop target with an arrow key
    KeyboardMove(Direction),
    /// Release over the last target moved over
    Drop,
}

/// Multi-select messages
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionMsg {
    /// Click-toggle an item (independent of gesture state)
    Toggle { id: Id },
    /// Clear the selection
    Clear,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Gesture(GestureMsg),
    Selection(SelectionMsg),
}

impl From<GestureMsg> for Msg {
    fn from(msg: GestureMsg) -> Self {
        Msg::Gesture(msg)
    }
}

impl From<SelectionMsg> for Msg {
    fn from(msg: SelectionMsg) -> Self {
        Msg::Selection(msg)
    }
}

/// Inbound event as written in a replay script
///
/// ```yaml
/// - event: start
///   id: "101"
/// - event: move_over
///   active_id: "101"
///   over_id: status2
/// - event: end
///   active_id: "101"
///   over_id: status2
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum InputEvent {
    Start {
        id: Id,
    },
    MoveOver {
        active_id: Id,
        #[serde(default)]
        over_id: Option<Id>,
        #[serde(default)]
        pointer_below_midpoint: bool,
    },
    End {
        active_id: Id,
        #[serde(default)]
        over_id: Option<Id>,
    },
    Cancel,
    KeyboardMove {
        direction: Direction,
    },
    Drop,
    ToggleSelect {
        id: Id,
    },
    ClearSelection,
}

impl From<InputEvent> for Msg {
    fn from(event: InputEvent) -> Self {
        match event {
            InputEvent::Start { id } => GestureMsg::Start { id }.into(),
            InputEvent::MoveOver {
                active_id,
                over_id,
                pointer_below_midpoint,
            } => GestureMsg::MoveOver {
                active_id,
                over_id,
                pointer_below_midpoint,
            }
            .into(),
            InputEvent::End { active_id, over_id } => GestureMsg::End { active_id, over_id }.into(),
            InputEvent::Cancel => GestureMsg::Cancel.into(),
            InputEvent::KeyboardMove { direction } => GestureMsg::KeyboardMove(direction).into(),
            InputEvent::Drop => GestureMsg::Drop.into(),
            InputEvent::ToggleSelect { id } => SelectionMsg::Toggle { id }.into(),
            InputEvent::ClearSelection => SelectionMsg::Clear.into(),
        }
    }
}
