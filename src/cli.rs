//! Command-line argument parsing for the headless board driver
//!
//! Supports:
//! - Loading a seed board from a YAML file
//! - Replaying a script of gesture/selection events
//! - Printing the final state as text or JSON

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::messages::InputEvent;

/// Replay drag-and-drop gestures against a kanban board
#[derive(Parser, Debug)]
#[command(name = "kanban-board", version, about = "Replay drag-and-drop gestures against a kanban board")]
pub struct CliArgs {
    /// Seed board (defaults to ~/.config/kanban-board/board.yaml, then the sample board)
    #[arg(short = 'b', long, value_name = "FILE")]
    pub board: Option<PathBuf>,

    /// YAML list of events to replay
    #[arg(short = 's', long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Print the final state as JSON
    #[arg(long)]
    pub json: bool,
}

/// Output format for the final state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl CliArgs {
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Parse a replay script
pub fn parse_script(yaml: &str) -> Result<Vec<InputEvent>, serde_yaml::Error> {
    if yaml.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_yaml::from_str(yaml)
}

/// Read and parse a replay script from disk
pub fn load_script(path: &Path) -> Result<Vec<InputEvent>, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read script {}: {}", path.display(), e))?;
    parse_script(&content).map_err(|e| format!("Failed to parse script {}: {}", path.display(), e))
}
