//! Board model - the complete state of the kanban board
//!
//! This module contains all the state types following the Elm Architecture pattern.
//! The board, the selection and the gesture phase live in one `BoardModel`
//! owned by whoever calls [`crate::update::update`].

pub mod board;
pub mod gesture;
pub mod selection;

pub use board::{Board, BoardError, DragTarget, Id, Item, Section};
pub use gesture::{DragSession, GestureState};
pub use selection::Selection;

use crate::config::BoardConfig;

/// The complete board model
#[derive(Debug, Clone, PartialEq)]
pub struct BoardModel {
    /// Sections, items and container order
    pub board: Board,
    /// Items co-selected with the dragged item
    pub selection: Selection,
    /// Current drag gesture
    pub gesture: GestureState,
}

impl BoardModel {
    /// Create a model around an already validated board
    pub fn new(board: Board) -> Self {
        Self {
            board,
            selection: Selection::new(),
            gesture: GestureState::Idle,
        }
    }

    /// Build the model from a seed configuration
    pub fn from_config(config: &BoardConfig) -> Result<Self, BoardError> {
        Ok(Self::new(config.to_board()?))
    }

    /// Id of the dragged item or section, shown in the drag overlay
    pub fn active_id(&self) -> Option<&Id> {
        self.gesture.active_id()
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    /// Container order for rendering columns
    pub fn container_order(&self) -> &[Id] {
        &self.board.container_order
    }

    /// Whether a card should render in its checked state
    pub fn is_selected(&self, id: &Id) -> bool {
        self.selection.contains(id)
    }
}
