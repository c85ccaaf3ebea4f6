//! Table tool configuration
//!
//! The serializable part (`rows`, `cols`, ...) comes from the host's tool
//! config, as YAML or JSON. Extra settings carry callbacks and are attached
//! in code with [`TableConfig::with_setting`].

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::model::TableDocument;

pub const DEFAULT_ROWS: usize = 2;
pub const DEFAULT_COLS: usize = 2;

/// What an extra setting's callback receives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TuneContext {
    pub data: TableDocument,
}

type SettingCallback = Box<dyn FnMut(&TuneContext)>;

/// A host-supplied button in the settings menu
pub struct ExtraSetting {
    pub icon: String,
    pub title: String,
    on_click: SettingCallback,
}

impl ExtraSetting {
    pub fn new(
        icon: impl Into<String>,
        title: impl Into<String>,
        on_click: impl FnMut(&TuneContext) + 'static,
    ) -> Self {
        Self {
            icon: icon.into(),
            title: title.into(),
            on_click: Box::new(on_click),
        }
    }

    pub fn click(&mut self, context: &TuneContext) {
        (self.on_click)(context);
    }
}

impl std::fmt::Debug for ExtraSetting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtraSetting")
            .field("icon", &self.icon)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

/// Table tool configuration
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableConfig {
    /// Initial row count for new tables
    #[serde(default = "default_rows")]
    pub rows: usize,
    /// Initial column count for new tables
    #[serde(default = "default_cols")]
    pub cols: usize,
    /// Heading state for tables created without saved data
    #[serde(default)]
    pub with_headings: bool,
    #[serde(default)]
    pub max_rows: Option<usize>,
    #[serde(default)]
    pub max_cols: Option<usize>,
    #[serde(skip)]
    pub settings: Vec<ExtraSetting>,
}

fn default_rows() -> usize {
    DEFAULT_ROWS
}

fn default_cols() -> usize {
    DEFAULT_COLS
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            cols: default_cols(),
            with_headings: false,
            max_rows: None,
            max_cols: None,
            settings: Vec::new(),
        }
    }
}

impl TableConfig {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Default::default()
        }
    }

    /// Parse the serializable part from YAML
    pub fn from_yaml(yaml: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse table config")
    }

    /// Parse the serializable part from JSON
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Failed to parse table config")
    }

    pub fn with_setting(mut self, setting: ExtraSetting) -> Self {
        self.settings.push(setting);
        self
    }

    /// Row count for a new table; zero falls back to the default
    pub fn initial_rows(&self) -> usize {
        if self.rows == 0 {
            DEFAULT_ROWS
        } else {
            self.rows
        }
    }

    /// Column count for a new table; zero falls back to the default
    pub fn initial_cols(&self) -> usize {
        if self.cols == 0 {
            DEFAULT_COLS
        } else {
            self.cols
        }
    }
}
