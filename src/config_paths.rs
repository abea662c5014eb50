//! Where the seed board and logs live
//!
//! Unix/macOS: `$XDG_CONFIG_HOME/kanban-board/` or `~/.config/kanban-board/`.
//! Windows: `%APPDATA%\kanban-board\`.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "kanban-board";
const BOARD_FILE: &str = "board.yaml";
const LOGS_DIR: &str = "logs";

/// Paths under one kanban-board config directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardPaths {
    root: PathBuf,
}

impl BoardPaths {
    /// The user's config directory, if the platform has one
    pub fn locate() -> Option<Self> {
        #[cfg(target_os = "windows")]
        let base = env::var_os("APPDATA").map(PathBuf::from);

        #[cfg(not(target_os = "windows"))]
        let base = env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")));

        base.map(|base| Self::at(base.join(APP_DIR)))
    }

    /// Paths rooted at an explicit directory
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn board_file(&self) -> PathBuf {
        self.root.join(BOARD_FILE)
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.root.join(LOGS_DIR)
    }

    /// Create the logs directory if needed, returning it
    pub fn ensure_logs_dir(&self) -> Result<PathBuf, String> {
        let logs = self.logs_dir();
        fs::create_dir_all(&logs)
            .map_err(|e| format!("Failed to create directory {}: {}", logs.display(), e))?;
        Ok(logs)
    }
}
