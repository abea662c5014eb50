//! Multi-select message handlers

use crate::commands::Cmd;
use crate::messages::SelectionMsg;
use crate::model::BoardModel;

/// Handle selection messages
pub fn update_selection(model: &mut BoardModel, msg: SelectionMsg) -> Option<Cmd> {
    let next = match msg {
        SelectionMsg::Toggle { id } => model.selection.toggled(&model.board, &id),
        SelectionMsg::Clear => Default::default(),
    };

    if next == model.selection {
        return None;
    }

    tracing::debug!(selected = ?next.ids(), "selection changed");
    model.selection = next;
    Some(Cmd::Redraw)
}
