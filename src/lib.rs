//! Kanban Board - Elm-style drag-and-drop reordering core
//!
//! This crate provides the board model and the drag gesture state machine
//! for a multi-column kanban board, implementing the Elm Architecture pattern:
//! the input layer sends [`Msg`]s to [`update::update`], which mutates the
//! [`BoardModel`] and returns a [`Cmd`] for the rendering layer.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod debug_dump;
pub mod messages;
pub mod model;
pub mod tracing;
pub mod update;
pub mod util;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::BoardConfig;
pub use messages::Msg;
pub use model::BoardModel;
