//! View layer: node tree, table grid and settings menu

pub mod grid;
pub mod node;
pub mod settings;

pub use grid::{css, GridView, RenderStats, ToolbarAction, ViewEvent, ViewHandle};
pub use node::{EventKind, Node, NodeId, NodeTree};
pub use settings::SettingsMenu;
