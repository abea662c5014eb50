//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! drag gestures, selection and board state transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=board=debug,message=debug` - scoped filtering
//! - `RUST_LOG=kanban_board::update=trace` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/kanban-board/logs/kanban.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config_paths::BoardPaths;
use crate::model::BoardModel;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG and defaults to `warn`.
/// File logging writes to `~/.config/kanban-board/logs/kanban.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG; stderr keeps stdout clean for board output
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let logs_dir = BoardPaths::locate()
        .ok_or_else(|| "No config directory available".to_string())
        .and_then(|paths| paths.ensure_logs_dir());
    let file_layer = match logs_dir {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "kanban.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of board/selection/gesture state for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct BoardSnapshot {
    pub phase: &'static str,
    pub active: Option<String>,
    pub order: Vec<String>,
    /// (section id, item ids) in container order
    pub sections: Vec<(String, Vec<String>)>,
    pub selection: Vec<String>,
}

impl BoardSnapshot {
    pub fn from_model(model: &BoardModel) -> Self {
        Self {
            phase: model.gesture.phase_name(),
            active: model.active_id().map(|id| id.to_string()),
            order: model
                .board
                .container_order
                .iter()
                .map(|id| id.to_string())
                .collect(),
            sections: model
                .board
                .ordered_sections()
                .map(|s| {
                    (
                        s.id.to_string(),
                        s.items.iter().map(|i| i.id.to_string()).collect(),
                    )
                })
                .collect(),
            selection: model.selection.ids().iter().map(|id| id.to_string()).collect(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &BoardSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.phase != other.phase || self.active != other.active {
            changes.push(format!(
                "gesture: {}({}) → {}({})",
                self.phase,
                self.active.as_deref().unwrap_or("-"),
                other.phase,
                other.active.as_deref().unwrap_or("-")
            ));
        }

        if self.order != other.order {
            changes.push(format!(
                "order: [{}] → [{}]",
                self.order.join(","),
                other.order.join(",")
            ));
        }

        for (before, after) in self.sections.iter().zip(&other.sections) {
            if before.0 == after.0 && before.1 != after.1 {
                changes.push(format!(
                    "{}: [{}] → [{}]",
                    after.0,
                    before.1.join(","),
                    after.1.join(",")
                ));
            }
        }

        if self.selection != other.selection {
            changes.push(format!(
                "selection: {{{}}} → {{{}}}",
                self.selection.join(","),
                other.selection.join(",")
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
