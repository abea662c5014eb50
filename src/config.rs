//! Board seed configuration
//!
//! The initial board is read from `~/.config/kanban-board/board.yaml`, or from
//! a path given on the command line. Without either the built-in sample board
//! is used.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config_paths::BoardPaths;
use crate::model::{Board, BoardError, Id, Item, Section};

/// Seed board as written in YAML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Sections in display order
    #[serde(default)]
    pub sections: Vec<SectionConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionConfig {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub items: Vec<ItemConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemConfig {
    pub id: Id,
    pub name: String,
    /// Defaults to the id of the enclosing section
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Id>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        let section = |id: &str, name: &str, items: &[(&str, &str)]| SectionConfig {
            id: id.into(),
            name: name.to_string(),
            items: items
                .iter()
                .map(|(item_id, item_name)| ItemConfig {
                    id: (*item_id).into(),
                    name: item_name.to_string(),
                    status: None,
                })
                .collect(),
        };

        Self {
            sections: vec![
                section(
                    "status1",
                    "Status 1",
                    &[
                        ("101", "Jorry"),
                        ("102", "Celestyna"),
                        ("104", "Lorne"),
                        ("109", "Flory"),
                        ("110", "Esmeralda"),
                        ("114", "Ingrid"),
                        ("117", "Babita"),
                        ("119", "Dione"),
                        ("121", "Dianemarie"),
                        ("123", "Fawne"),
                    ],
                ),
                section("status2", "Status 2", &[]),
                section(
                    "status3",
                    "Status 3",
                    &[
                        ("100", "Hildegaard"),
                        ("103", "Phylis"),
                        ("105", "Phedra"),
                        ("106", "Dede"),
                        ("107", "Konstance"),
                        ("108", "Calla"),
                        ("112", "Tybie"),
                        ("116", "Beth"),
                        ("124", "Johna"),
                    ],
                ),
            ],
        }
    }
}

impl BoardConfig {
    /// Load the board from the user config directory, or return the sample board
    pub fn load() -> Self {
        let Some(path) = BoardPaths::locate().map(|paths| paths.board_file()) else {
            tracing::debug!("No config directory available, using sample board");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Board file not found at {}, using sample board",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{}, using sample board", e);
                Self::default()
            }
        }
    }

    /// Load the board from an explicit path
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read board at {}: {}", path.display(), e))?;
        let config = Self::parse(&content)
            .map_err(|e| format!("Failed to parse board at {}: {}", path.display(), e))?;
        tracing::info!("Loaded board from {}", path.display());
        Ok(config)
    }

    /// Parse a board from a YAML string
    pub fn parse(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Save the board config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize board: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write board to {}: {}", path.display(), e))?;

        tracing::info!("Saved board to {}", path.display());
        Ok(())
    }

    /// Build and validate the board
    pub fn to_board(&self) -> Result<Board, BoardError> {
        let sections = self
            .sections
            .iter()
            .map(|section| {
                let items = section
                    .items
                    .iter()
                    .map(|item| Item {
                        id: item.id.clone(),
                        name: item.name.clone(),
                        status: item.status.clone().unwrap_or_else(|| section.id.clone()),
                    })
                    .collect();
                Section::new(section.id.clone(), section.name.clone(), items)
            })
            .collect();
        Board::from_sections(sections)
    }
}
