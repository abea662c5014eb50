//! Multi-select state - items that travel with the dragged item

use super::board::{Board, Id};

/// Insertion-ordered set of co-selected item ids
///
/// All members belong to one section. Selecting an item in a different
/// section starts a fresh selection instead of spanning sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<Id>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(id: Id) -> Self {
        Self { ids: vec![id] }
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn contains(&self, id: &Id) -> bool {
        self.ids.contains(id)
    }

    pub fn first(&self) -> Option<&Id> {
        self.ids.first()
    }

    pub fn ids(&self) -> &[Id] {
        &self.ids
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Toggle `id` in the selection, returning the new selection
    ///
    /// Ids that are not items on the board are ignored. When the selection is
    /// empty, or `id` lives in a different section than the first selected
    /// item, the result is a fresh selection holding only `id`.
    pub fn toggled(&self, board: &Board, id: &Id) -> Selection {
        if board.is_section(id) {
            return self.clone();
        }
        let Some(container) = board.find_container(id) else {
            return self.clone();
        };

        let scope = self.first().and_then(|first| board.find_container(first));
        if scope.as_ref() != Some(&container) {
            return Selection::single(id.clone());
        }

        let mut next = self.clone();
        if let Some(pos) = next.ids.iter().position(|selected| selected == id) {
            next.ids.remove(pos);
        } else {
            next.ids.push(id.clone());
        }
        next
    }
}
