//! Host editor API consumed by the block
//!
//! The host supplies CSS class tokens, a translator and a tooltip service.
//! Everything here is applied verbatim; the block never interprets it.

use std::time::Duration;

use crate::error::{Result, TableError};
use crate::view::NodeId;

/// CSS class tokens provided by the host
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostStyles {
    pub block: String,
    pub settings_button: String,
    pub settings_button_active: String,
}

/// Tooltip placement relative to the anchor node
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Placement {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TooltipOptions {
    pub placement: Placement,
    pub hiding_delay: Duration,
}

impl Default for TooltipOptions {
    fn default() -> Self {
        Self {
            placement: Placement::Top,
            hiding_delay: Duration::from_millis(500),
        }
    }
}

/// Translates UI strings
pub trait Translator {
    fn t(&self, text: &str) -> String;
}

/// Shows a tooltip when the pointer hovers a node
pub trait Tooltip {
    fn on_hover(&mut self, node: NodeId, text: &str, options: TooltipOptions);
}

/// Translator that returns its input
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

impl Translator for IdentityTranslator {
    fn t(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Tooltip service that ignores every request
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTooltip;

impl Tooltip for NoTooltip {
    fn on_hover(&mut self, _node: NodeId, _text: &str, _options: TooltipOptions) {}
}

/// Host services handed to the block at construction
pub struct HostApi {
    pub styles: HostStyles,
    pub i18n: Box<dyn Translator>,
    pub tooltip: Box<dyn Tooltip>,
}

impl std::fmt::Debug for HostApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostApi")
            .field("styles", &self.styles)
            .finish_non_exhaustive()
    }
}

impl HostApi {
    pub fn new(styles: HostStyles) -> Self {
        Self {
            styles,
            i18n: Box::new(IdentityTranslator),
            tooltip: Box::new(NoTooltip),
        }
    }

    pub fn with_i18n(mut self, i18n: impl Translator + 'static) -> Self {
        self.i18n = Box::new(i18n);
        self
    }

    pub fn with_tooltip(mut self, tooltip: impl Tooltip + 'static) -> Self {
        self.tooltip = Box::new(tooltip);
        self
    }

    /// Check that every style token the block applies is present
    pub fn validate(&self) -> Result<()> {
        let styles = &self.styles;
        if styles.block.is_empty() {
            return Err(TableError::MissingHost("styles.block"));
        }
        if styles.settings_button.is_empty() {
            return Err(TableError::MissingHost("styles.settingsButton"));
        }
        if styles.settings_button_active.is_empty() {
            return Err(TableError::MissingHost("styles.settingsButtonActive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn styles() -> HostStyles {
        HostStyles {
            block: "cdx-block".into(),
            settings_button: "cdx-settings-button".into(),
            settings_button_active: "cdx-settings-button--active".into(),
        }
    }

    #[test]
    fn test_validate_accepts_complete_styles() {
        assert!(HostApi::new(styles()).validate().is_ok());
    }

    #[test]
    fn test_validate_reports_missing_token() {
        let mut s = styles();
        s.settings_button_active.clear();

        assert_eq!(
            HostApi::new(s).validate(),
            Err(TableError::MissingHost("styles.settingsButtonActive"))
        );
    }

    #[test]
    fn test_default_tooltip_options() {
        let opts = TooltipOptions::default();
        assert_eq!(opts.placement, Placement::Top);
        assert_eq!(opts.hiding_delay, Duration::from_millis(500));
    }
}
