//! Table Block - Elm-style table tool for block editors
//!
//! This crate provides the grid model, a retained node view and the block
//! adapter (tunes, settings menu, save/render/destroy) for an editable
//! table, implementing the Elm Architecture pattern.

pub mod block;
pub mod commands;
pub mod config;
pub mod error;
pub mod host;
pub mod messages;
pub mod model;
pub mod paste;
pub mod table;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use block::{BlockState, TableBlock, ToolArgs, TuneKind};
pub use commands::Cmd;
pub use config::TableConfig;
pub use error::TableError;
pub use host::HostApi;
pub use messages::TableMsg;
pub use model::{GridModel, TableDocument, TableState};
pub use table::Table;
