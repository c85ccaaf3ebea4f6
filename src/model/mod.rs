//! Model types for the table block
//!
//! ```text
//! TableState
//! ├── GridModel      (cell content)
//! ├── SelectionState (active row/column, focused cell)
//! └── read_only / max sizes
//! ```

pub mod document;
pub mod grid;
pub mod selection;

pub use document::TableDocument;
pub use grid::{Cell, CellPosition, GridModel, Row};
pub use selection::{GestureGuard, GestureId, SelectionState};

/// Width used when a column without an explicit width is first resized
pub const DEFAULT_COLUMN_WIDTH: u32 = 120;

/// Columns can't be dragged narrower than this
pub const MIN_COLUMN_WIDTH: u32 = 40;

/// Everything the update functions operate on for one table
#[derive(Debug, Clone, Default)]
pub struct TableState {
    pub grid: GridModel,
    pub selection: SelectionState,
    pub gestures: GestureGuard,
    /// Per-column width in pixels, `None` means automatic (never persisted)
    pub column_widths: Vec<Option<u32>>,
    /// Read-only tables ignore every mutating message
    pub read_only: bool,
    pub max_rows: Option<usize>,
    pub max_cols: Option<usize>,
}

impl TableState {
    pub fn new(grid: GridModel, read_only: bool) -> Self {
        Self {
            column_widths: vec![None; grid.column_count()],
            grid,
            read_only,
            ..Default::default()
        }
    }

    pub fn with_limits(mut self, max_rows: Option<usize>, max_cols: Option<usize>) -> Self {
        self.max_rows = max_rows;
        self.max_cols = max_cols;
        self
    }

    pub fn can_add_row(&self) -> bool {
        self.max_rows.map_or(true, |max| self.grid.row_count() < max)
    }

    pub fn can_add_col(&self) -> bool {
        self.max_cols.map_or(true, |max| self.grid.column_count() < max)
    }
}
