//! Drag gesture lifecycle

use super::board::{Board, DragTarget, Id};

/// Phase of the current drag gesture
#[derive(Debug, Clone, Default, PartialEq)]
pub enum GestureState {
    /// No gesture in progress
    #[default]
    Idle,
    /// A drag is in progress
    Dragging(DragSession),
}

/// Everything recorded for an in-flight drag
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    /// What is being dragged
    pub active: DragTarget,
    /// Section the dragged item started in (`None` for section drags)
    pub initial_container: Option<Id>,
    /// Last id the drag moved over, used by keyboard drops
    pub over: Option<Id>,
    /// Card the last cross-section move placed the item next to, until the
    /// pointer hovers something else
    pub placed_beside: Option<Id>,
    /// Board as it was when the gesture started, restored on cancel
    pub snapshot: Board,
}

impl GestureState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, GestureState::Dragging(_))
    }

    pub fn session(&self) -> Option<&DragSession> {
        match self {
            GestureState::Dragging(session) => Some(session),
            GestureState::Idle => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut DragSession> {
        match self {
            GestureState::Dragging(session) => Some(session),
            GestureState::Idle => None,
        }
    }

    /// Id of the dragged item or section
    pub fn active_id(&self) -> Option<&Id> {
        self.session().map(|s| s.active.id())
    }

    /// Short name for logging
    pub fn phase_name(&self) -> &'static str {
        match self {
            GestureState::Idle => "idle",
            GestureState::Dragging(s) if s.active.is_section() => "dragging-section",
            GestureState::Dragging(_) => "dragging-item",
        }
    }
}
