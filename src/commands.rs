//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! The rendering layer is the only consumer; the core never performs them.

use crate::model::{DragTarget, Id};

/// Side effect requested by an update
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Redraw the whole board
    Redraw,
    /// Redraw only the listed sections
    RedrawSections(Vec<Id>),
    /// Show the floating drag overlay for the dragged item or section
    ShowDragOverlay(DragTarget),
    /// Remove the drag overlay
    HideDragOverlay,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Combine commands, dropping `None`s and flattening single entries
    pub fn batch(cmds: Vec<Cmd>) -> Cmd {
        let mut cmds: Vec<Cmd> = cmds
            .into_iter()
            .filter(|c| !matches!(c, Cmd::None))
            .collect();
        match cmds.len() {
            0 => Cmd::None,
            1 => cmds.remove(0),
            _ => Cmd::Batch(cmds),
        }
    }

    /// Sections that need redrawing, deduplicated
    pub fn redraw_sections(sections: impl IntoIterator<Item = Id>) -> Cmd {
        let mut ids: Vec<Id> = Vec::new();
        for id in sections {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        Cmd::RedrawSections(ids)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw | Cmd::RedrawSections(_) => true,
            Cmd::ShowDragOverlay(_) | Cmd::HideDragOverlay => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }
}
