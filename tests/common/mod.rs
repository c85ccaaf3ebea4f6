//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use table_block::host::{HostApi, HostStyles, Tooltip, TooltipOptions, Translator};
use table_block::view::NodeId;
use table_block::{TableBlock, TableConfig, TableDocument, ToolArgs};

/// Host style tokens used by every test block
pub fn test_styles() -> HostStyles {
    HostStyles {
        block: "cdx-block".into(),
        settings_button: "cdx-settings-button".into(),
        settings_button_active: "cdx-settings-button--active".into(),
    }
}

pub fn test_api() -> HostApi {
    HostApi::new(test_styles())
}

/// Owned rows from string literals
pub fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
    data.iter()
        .map(|r| r.iter().map(|s| s.to_string()).collect())
        .collect()
}

pub fn doc(with_headings: bool, read_only: bool, data: &[&[&str]]) -> TableDocument {
    TableDocument::new(with_headings, read_only, rows(data))
}

/// Create a block from saved data with the default config
pub fn test_block(data: TableDocument) -> TableBlock {
    block_with(Some(data), TableConfig::default(), false)
}

pub fn block_with(data: Option<TableDocument>, config: TableConfig, read_only: bool) -> TableBlock {
    TableBlock::new(ToolArgs {
        data,
        config,
        api: test_api(),
        read_only,
    })
    .expect("test host is complete")
}

/// Tooltip service recording every registration
#[derive(Clone, Default)]
pub struct RecordingTooltip(pub Rc<RefCell<Vec<(NodeId, String, TooltipOptions)>>>);

impl Tooltip for RecordingTooltip {
    fn on_hover(&mut self, node: NodeId, text: &str, options: TooltipOptions) {
        self.0.borrow_mut().push((node, text.to_string(), options));
    }
}

/// Translator that upper-cases everything
pub struct ShoutingTranslator;

impl Translator for ShoutingTranslator {
    fn t(&self, text: &str) -> String {
        text.to_uppercase()
    }
}
