//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! selection and state transition issues.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=selection=debug,message=debug` - scoped filtering
//! - `RUST_LOG=table_block::block=debug` - module-level filtering

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::TableState;

/// Initialize a console tracing subscriber
///
/// Hosts that already install their own subscriber should skip this.
/// Calling it twice is harmless; the second call is ignored.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(filter);

    if let Err(e) = tracing_subscriber::registry().with(console_layer).try_init() {
        tracing::debug!("Tracing already initialized: {}", e);
    }
}

/// Lightweight snapshot of selection and grid shape for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSnapshot {
    pub rows: usize,
    pub cols: usize,
    pub active: (Option<usize>, Option<usize>),
    pub focused: Option<(usize, usize)>,
}

impl SelectionSnapshot {
    pub fn from_state(state: &TableState) -> Self {
        Self {
            rows: state.grid.row_count(),
            cols: state.grid.column_count(),
            active: (state.selection.active_row, state.selection.active_col),
            focused: state.selection.focused.map(|p| (p.row, p.col)),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &SelectionSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if (self.rows, self.cols) != (other.rows, other.cols) {
            changes.push(format!(
                "shape: {}x{} → {}x{}",
                self.rows, self.cols, other.rows, other.cols
            ));
        }
        if self.active != other.active {
            changes.push(format!("active: {:?} → {:?}", self.active, other.active));
        }
        if self.focused != other.focused {
            changes.push(format!("focused: {:?} → {:?}", self.focused, other.focused));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
