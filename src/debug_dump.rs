//! State dump for diagnostics
//!
//! Serializes a snapshot of the board model to JSON. Sections are listed in
//! container order so the dump reads like the rendered board.

use serde::Serialize;

use crate::model::{BoardModel, DragTarget, Section};

#[derive(Debug, Serialize)]
pub struct StateDump {
    pub gesture: GestureDump,
    pub container_order: Vec<String>,
    pub sections: Vec<SectionDump>,
    pub selection: Vec<String>,
    pub item_count: usize,
}

#[derive(Debug, Serialize)]
pub struct GestureDump {
    pub phase: &'static str,
    pub active_id: Option<String>,
    pub active_kind: Option<&'static str>,
    pub initial_container: Option<String>,
    pub over_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SectionDump {
    pub id: String,
    pub name: String,
    pub items: Vec<ItemDump>,
}

#[derive(Debug, Serialize)]
pub struct ItemDump {
    pub id: String,
    pub name: String,
    pub status: String,
    pub selected: bool,
}

impl StateDump {
    pub fn from_model(model: &BoardModel) -> Self {
        let session = model.gesture.session();
        Self {
            gesture: GestureDump {
                phase: model.gesture.phase_name(),
                active_id: model.active_id().map(|id| id.to_string()),
                active_kind: session.map(|s| match s.active {
                    DragTarget::Item(_) => "item",
                    DragTarget::Section(_) => "section",
                }),
                initial_container: session
                    .and_then(|s| s.initial_container.as_ref())
                    .map(|id| id.to_string()),
                over_id: session
                    .and_then(|s| s.over.as_ref())
                    .map(|id| id.to_string()),
            },
            container_order: model
                .container_order()
                .iter()
                .map(|id| id.to_string())
                .collect(),
            sections: model
                .board
                .ordered_sections()
                .map(|section| SectionDump::from_section(section, model))
                .collect(),
            selection: model.selection.ids().iter().map(|id| id.to_string()).collect(),
            item_count: model.board.item_count(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl SectionDump {
    fn from_section(section: &Section, model: &BoardModel) -> Self {
        Self {
            id: section.id.to_string(),
            name: section.name.clone(),
            items: section
                .items
                .iter()
                .map(|item| ItemDump {
                    id: item.id.to_string(),
                    name: item.name.clone(),
                    status: item.status.to_string(),
                    selected: model.is_selected(&item.id),
                })
                .collect(),
        }
    }
}

/// Render the board as plain text columns, one section per block
pub fn render_text(model: &BoardModel) -> String {
    let mut out = String::new();
    for section in model.board.ordered_sections() {
        out.push_str(&format!(
            "{} ({}) - {} items\n",
            section.name,
            section.id,
            section.items.len()
        ));
        for item in &section.items {
            let mark = if model.is_selected(&item.id) { "x" } else { " " };
            out.push_str(&format!("  [{}] {} {}\n", mark, item.id, item.name));
        }
    }
    out
}
