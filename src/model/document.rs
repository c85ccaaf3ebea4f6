//! Persisted table document

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// The saved form of a table block
///
/// `content` may be empty, meaning the block falls back to the configured
/// default size when it is constructed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableDocument {
    #[serde(default)]
    pub with_headings: bool,
    #[serde(default)]
    pub read_only: bool,
    #[serde(default)]
    pub content: Vec<Vec<String>>,
}

impl TableDocument {
    pub fn new(with_headings: bool, read_only: bool, content: Vec<Vec<String>>) -> Self {
        Self {
            with_headings,
            read_only,
            content,
        }
    }

    /// Parse a document saved as JSON
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Failed to parse table document")
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string(self).context("Failed to serialize table document")
    }

    /// Whether every row has the same number of cells
    pub fn is_rectangular(&self) -> bool {
        let width = self.content.first().map(|r| r.len()).unwrap_or(0);
        self.content.iter().all(|r| r.len() == width)
    }
}
