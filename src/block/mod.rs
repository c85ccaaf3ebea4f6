//! Table block: the adapter between a host editor and a `Table`
//!
//! ```text
//! TableBlock
//! ├── BlockState   (with_headings, read_only)
//! ├── Container    (host block class + current Table)
//! └── SettingsMenu (tunes + extra settings)
//! ```
//!
//! Tune clicks go through [`transition`]; headings are restyled in place,
//! while an editing toggle destroys the table and builds a new one from a
//! content snapshot.

mod tunes;

pub use tunes::{
    icons, transition, tunes_for, BlockState, Transition, Tune, TuneEffect, TuneGroup, TuneKind,
};

use anyhow::Context;

use crate::config::{TableConfig, TuneContext};
use crate::error::Result;
use crate::host::HostApi;
use crate::model::TableDocument;
use crate::paste;
use crate::table::Table;
use crate::view::{node, NodeId, NodeTree, SettingsMenu, ViewEvent};

/// Toolbox entry shown by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toolbox {
    pub icon: &'static str,
    pub title: &'static str,
}

/// Constructor arguments supplied by the host
#[derive(Debug)]
pub struct ToolArgs {
    pub data: Option<TableDocument>,
    pub config: TableConfig,
    pub api: HostApi,
    pub read_only: bool,
}

/// Block root: carries the host's block class and holds the table
#[derive(Debug)]
pub struct Container {
    class: String,
    table: Table,
}

impl Container {
    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Markup of the block and the table inside it
    pub fn outer_html(&self) -> String {
        let inner = self
            .table
            .handle()
            .map(|h| self.table.view().tree().outer_html(h.root))
            .unwrap_or_default();
        format!("<div class=\"{}\">{}</div>", node::escape(&self.class), inner)
    }
}

#[derive(Debug)]
pub struct TableBlock {
    config: TableConfig,
    api: HostApi,
    host_read_only: bool,
    state: BlockState,
    container: Container,
    settings: Option<SettingsMenu>,
}

impl TableBlock {
    pub const IS_READ_ONLY_SUPPORTED: bool = true;
    pub const ENABLE_LINE_BREAKS: bool = true;

    pub fn toolbox() -> Toolbox {
        Toolbox {
            icon: icons::TABLE,
            title: "Table",
        }
    }

    /// Construct the block; fails when the host API lacks a style token
    pub fn new(args: ToolArgs) -> Result<Self> {
        let ToolArgs {
            data,
            config,
            api,
            read_only,
        } = args;
        api.validate()?;

        let (state, content) = match data {
            Some(doc) => (
                BlockState {
                    with_headings: doc.with_headings,
                    read_only: doc.read_only,
                },
                doc.content,
            ),
            None => (
                BlockState {
                    with_headings: config.with_headings,
                    read_only: false,
                },
                Vec::new(),
            ),
        };

        let table = Table::new(
            &content,
            &config,
            state.read_only || read_only,
            state.with_headings,
        );
        tracing::debug!(
            "Created table block ({} rows, with_headings={}, read_only={})",
            table.state().grid.row_count(),
            state.with_headings,
            state.read_only
        );

        Ok(Self {
            container: Container {
                class: api.styles.block.clone(),
                table,
            },
            config,
            api,
            host_read_only: read_only,
            state,
            settings: None,
        })
    }

    /// Build a block from a saved JSON document
    pub fn from_json(
        json: &str,
        config: TableConfig,
        api: HostApi,
        read_only: bool,
    ) -> anyhow::Result<Self> {
        let data = TableDocument::from_json(json)?;
        Self::new(ToolArgs {
            data: Some(data),
            config,
            api,
            read_only,
        })
        .context("Failed to construct table block")
    }

    pub fn state(&self) -> BlockState {
        self.state
    }

    pub fn table(&self) -> &Table {
        &self.container.table
    }

    pub fn render(&self) -> &Container {
        &self.container
    }

    pub fn save(&self) -> TableDocument {
        TableDocument {
            with_headings: self.state.with_headings,
            read_only: self.state.read_only,
            content: self.container.table.get_data(),
        }
    }

    /// Current tunes with translated titles
    pub fn tunes(&self) -> Vec<Tune> {
        let i18n = &self.api.i18n;
        tunes_for(self.state, |s| i18n.t(s))
    }

    /// Build the settings menu and return its tree
    pub fn render_settings(&mut self) -> &NodeTree {
        let tunes = self.tunes();
        let menu = SettingsMenu::render(&tunes, &self.config.settings, &mut self.api);
        self.settings.insert(menu).tree()
    }

    pub fn settings(&self) -> Option<&SettingsMenu> {
        self.settings.as_ref()
    }

    /// Apply a tune and run its effect
    pub fn toggle_tune(&mut self, kind: TuneKind) {
        let Transition { state, effect } = transition(self.state, kind, self.host_read_only);
        tracing::debug!("Tune {:?}: {:?} -> {:?} ({:?})", kind, self.state, state, effect);
        self.state = state;

        match effect {
            TuneEffect::RestyleHeadings => {
                self.container
                    .table
                    .set_headings_setting(state.with_headings);
            }
            TuneEffect::RebuildOnEditabilityChange => self.rebuild(),
            TuneEffect::RunExtra(index) => self.run_extra(index),
        }

        self.sync_settings();
    }

    /// Handle a click on a settings menu node
    pub fn click_setting(&mut self, node: NodeId) -> bool {
        let Some(kind) = self.settings.as_ref().and_then(|m| m.action_for(node)) else {
            return false;
        };
        self.toggle_tune(kind);
        true
    }

    /// Deliver a host event to the table
    pub fn handle_event(&mut self, node: NodeId, event: ViewEvent) -> bool {
        self.container.table.handle_event(node, event)
    }

    /// Replace the content with pasted delimited text
    ///
    /// Returns false, leaving the block untouched, when the text is not
    /// tabular or the block is read-only.
    pub fn on_paste(&mut self, text: &str) -> bool {
        if self.is_destroyed() || self.container.table.is_read_only() {
            return false;
        }
        let Some(mut rows) = paste::parse_rows(text) else {
            return false;
        };
        paste::clamp_to_limits(&mut rows, self.config.max_rows, self.config.max_cols);
        tracing::debug!("Pasted {} rows into table", rows.len());
        self.state.with_headings = false;
        self.replace_table(&rows);
        self.sync_settings();
        true
    }

    pub fn destroy(&mut self) {
        self.container.table.destroy();
    }

    pub fn is_destroyed(&self) -> bool {
        !self.container.table.view().is_mounted()
    }

    fn rebuild(&mut self) {
        if self.is_destroyed() {
            return;
        }
        let content = self.container.table.get_data();
        self.replace_table(&content);
    }

    fn replace_table(&mut self, content: &[Vec<String>]) {
        self.container.table.destroy();
        self.container.table = Table::new(
            content,
            &self.config,
            self.state.read_only || self.host_read_only,
            self.state.with_headings,
        );
    }

    fn sync_settings(&mut self) {
        let active_class = &self.api.styles.settings_button_active;
        if let Some(menu) = &mut self.settings {
            menu.sync_active(self.state, active_class);
        }
    }

    fn run_extra(&mut self, index: usize) {
        let context = TuneContext { data: self.save() };
        match self.config.settings.get_mut(index) {
            Some(setting) => setting.click(&context),
            None => tracing::warn!("No extra setting at index {}", index),
        }
    }
}
