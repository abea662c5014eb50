//! Board data - items, sections, and the container order
//!
//! Section membership is decided solely by which section's item list holds an
//! item. `Item::status` records the section an item was created in and is
//! never updated by moves.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// Identifiers
// ============================================================================

/// Opaque identifier shared by items and sections
///
/// Item ids and section ids live in one namespace: a section id must never
/// equal an item id, since lookup treats "is a section key" as the discriminator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Id(pub String);

/// Accepts strings and any number (`"101"`, `101`, `-3`, `2.5`) in
/// configuration files; numbers keep their decimal form
impl<'de> Deserialize<'de> for Id {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Unsigned(u64),
            Signed(i64),
            Float(f64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => Id(s),
            RawId::Unsigned(n) => Id(n.to_string()),
            RawId::Signed(n) => Id(n.to_string()),
            RawId::Float(n) => Id(n.to_string()),
        })
    }
}

impl Id {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Id {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<u64> for Id {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

/// What a gesture is dragging, resolved once when the gesture starts
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DragTarget {
    Item(Id),
    Section(Id),
}

impl DragTarget {
    pub fn id(&self) -> &Id {
        match self {
            DragTarget::Item(id) | DragTarget::Section(id) => id,
        }
    }

    pub fn is_section(&self) -> bool {
        matches!(self, DragTarget::Section(_))
    }
}

// ============================================================================
// Items and Sections
// ============================================================================

/// A single card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: Id,
    pub name: String,
    /// Section the item was created in (informational, may go stale)
    pub status: Id,
}

impl Item {
    pub fn new(id: impl Into<Id>, name: impl Into<String>, status: impl Into<Id>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status: status.into(),
        }
    }
}

/// A column holding an ordered list of items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: Id,
    pub name: String,
    pub items: Vec<Item>,
}

impl Section {
    pub fn new(id: impl Into<Id>, name: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            items,
        }
    }

    /// Position of an item in this section
    pub fn index_of(&self, id: &Id) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }

    pub fn contains(&self, id: &Id) -> bool {
        self.index_of(id).is_some()
    }

    pub fn item_ids(&self) -> Vec<Id> {
        self.items.iter().map(|item| item.id.clone()).collect()
    }
}

// ============================================================================
// Board
// ============================================================================

/// Errors found while building or validating a board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    DuplicateSection(Id),
    DuplicateItem(Id),
    /// An id used both as a section key and as an item id
    IdCollision(Id),
    /// Container order is not a permutation of the section keys
    ContainerOrderMismatch,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::DuplicateSection(id) => write!(f, "Duplicate section id: {}", id),
            BoardError::DuplicateItem(id) => write!(f, "Duplicate item id: {}", id),
            BoardError::IdCollision(id) => {
                write!(f, "Id used by both a section and an item: {}", id)
            }
            BoardError::ContainerOrderMismatch => {
                write!(f, "Container order is not a permutation of the sections")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// The full board: sections keyed by id, plus their display order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    pub sections: HashMap<Id, Section>,
    /// Display order of the section keys
    pub container_order: Vec<Id>,
}

impl Board {
    /// Build a board from sections in display order, validating ids
    pub fn from_sections(sections: Vec<Section>) -> Result<Self, BoardError> {
        let mut board = Board::default();
        for section in sections {
            if board.sections.contains_key(&section.id) {
                return Err(BoardError::DuplicateSection(section.id));
            }
            board.container_order.push(section.id.clone());
            board.sections.insert(section.id.clone(), section);
        }
        board.check_invariants()?;
        Ok(board)
    }

    pub fn section(&self, id: &Id) -> Option<&Section> {
        self.sections.get(id)
    }

    pub fn is_section(&self, id: &Id) -> bool {
        self.sections.contains_key(id)
    }

    /// Sections in display order
    pub fn ordered_sections(&self) -> impl Iterator<Item = &Section> {
        self.container_order
            .iter()
            .filter_map(|id| self.sections.get(id))
    }

    /// Find the section that owns `id`
    ///
    /// A section id resolves to itself; an item id resolves to the section
    /// whose list contains it. Returns `None` for ids not on the board.
    pub fn find_container(&self, id: &Id) -> Option<Id> {
        if self.is_section(id) {
            return Some(id.clone());
        }
        self.container_order
            .iter()
            .find(|key| self.sections.get(*key).is_some_and(|s| s.contains(id)))
            .cloned()
    }

    /// Resolve an id to a drag target
    pub fn resolve(&self, id: &Id) -> Option<DragTarget> {
        if self.is_section(id) {
            Some(DragTarget::Section(id.clone()))
        } else if self.find_container(id).is_some() {
            Some(DragTarget::Item(id.clone()))
        } else {
            None
        }
    }

    /// Look up an item anywhere on the board
    pub fn item(&self, id: &Id) -> Option<&Item> {
        let container = self.find_container(id)?;
        self.sections
            .get(&container)?
            .items
            .iter()
            .find(|item| &item.id == id)
    }

    pub fn item_count(&self) -> usize {
        self.sections.values().map(|s| s.items.len()).sum()
    }

    /// Replace a section's item list
    pub fn set_items(&mut self, section: &Id, items: Vec<Item>) {
        if let Some(s) = self.sections.get_mut(section) {
            s.items = items;
        }
    }

    /// Check the partition invariants
    ///
    /// Every item appears in exactly one section, no section has duplicates,
    /// no item shares an id with a section, and the container order is a
    /// permutation of the section keys.
    pub fn check_invariants(&self) -> Result<(), BoardError> {
        let mut seen = HashSet::new();
        for section in self.sections.values() {
            for item in &section.items {
                if self.sections.contains_key(&item.id) {
                    return Err(BoardError::IdCollision(item.id.clone()));
                }
                if !seen.insert(&item.id) {
                    return Err(BoardError::DuplicateItem(item.id.clone()));
                }
            }
        }

        if self.container_order.len() != self.sections.len() {
            return Err(BoardError::ContainerOrderMismatch);
        }
        let mut ordered = HashSet::new();
        for id in &self.container_order {
            if !self.sections.contains_key(id) || !ordered.insert(id) {
                return Err(BoardError::ContainerOrderMismatch);
            }
        }
        Ok(())
    }

    /// Assert board invariants (debug builds only)
    #[cfg(debug_assertions)]
    pub fn assert_invariants_with_context(&self, context: &str) {
        if let Err(e) = self.check_invariants() {
            panic!("Board invariant violated after {}: {}", context, e);
        }
    }

    /// No-op in release builds
    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants_with_context(&self, _context: &str) {}
}
