//! Selection and toolbar state for the table view
//!
//! Pure UI state: which row/column the toolbars are attached to and which
//! cell has keyboard focus. Never persisted.

use super::grid::CellPosition;

/// Identifier of one pointer gesture (press → release) delivered by the host
pub type GestureId = u64;

/// Drops repeated dispatches of the same gesture
#[derive(Debug, Clone, Default)]
pub struct GestureGuard {
    last: Option<GestureId>,
}

impl GestureGuard {
    /// Returns true the first time a gesture is seen, false for repeats
    pub fn admit(&mut self, gesture: GestureId) -> bool {
        if self.last == Some(gesture) {
            return false;
        }
        self.last = Some(gesture);
        true
    }
}

/// Active row/column and focused cell
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub active_row: Option<usize>,
    pub active_col: Option<usize>,
    pub focused: Option<CellPosition>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Focus a cell; toolbars follow it
    pub fn focus_cell(&mut self, row: usize, col: usize) {
        self.focused = Some(CellPosition::new(row, col));
        self.active_row = Some(row);
        self.active_col = Some(col);
    }

    /// Hovering moves the toolbars without stealing focus
    pub fn hover_cell(&mut self, row: usize, col: usize) {
        self.active_row = Some(row);
        self.active_col = Some(col);
    }

    pub fn clear_focus(&mut self) {
        self.focused = None;
        self.active_row = None;
        self.active_col = None;
    }

    /// Pointer left the table: toolbars snap back to the focused cell, if any
    pub fn leave(&mut self) {
        self.active_row = self.focused.map(|p| p.row);
        self.active_col = self.focused.map(|p| p.col);
    }

    /// Keep indices valid after the grid shrank
    pub fn clamp(&mut self, rows: usize, cols: usize) {
        if rows == 0 || cols == 0 {
            self.clear_focus();
            return;
        }
        self.active_row = self.active_row.map(|r| r.min(rows - 1));
        self.active_col = self.active_col.map(|c| c.min(cols - 1));
        if let Some(pos) = &mut self.focused {
            pos.row = pos.row.min(rows - 1);
            pos.col = pos.col.min(cols - 1);
        }
    }

    /// Adjust row indices after a row was inserted at `at`
    pub fn row_inserted(&mut self, at: usize) {
        shift_up(&mut self.active_row, at);
        if let Some(pos) = &mut self.focused {
            if pos.row >= at {
                pos.row += 1;
            }
        }
    }

    /// Adjust column indices after a column was inserted at `at`
    pub fn col_inserted(&mut self, at: usize) {
        shift_up(&mut self.active_col, at);
        if let Some(pos) = &mut self.focused {
            if pos.col >= at {
                pos.col += 1;
            }
        }
    }

    /// Adjust row indices after the row at `at` was removed
    pub fn row_deleted(&mut self, at: usize, rows: usize, cols: usize) {
        shift_down(&mut self.active_row, at);
        if let Some(pos) = &mut self.focused {
            if pos.row > at {
                pos.row -= 1;
            }
        }
        self.clamp(rows, cols);
    }

    /// Adjust column indices after the column at `at` was removed
    pub fn col_deleted(&mut self, at: usize, rows: usize, cols: usize) {
        shift_down(&mut self.active_col, at);
        if let Some(pos) = &mut self.focused {
            if pos.col > at {
                pos.col -= 1;
            }
        }
        self.clamp(rows, cols);
    }

    /// The moved row keeps its selection
    pub fn row_moved(&mut self, from: usize, to: usize) {
        if let Some(r) = &mut self.active_row {
            *r = moved_index(*r, from, to);
        }
        if let Some(pos) = &mut self.focused {
            pos.row = moved_index(pos.row, from, to);
        }
    }

    /// The moved column keeps its selection
    pub fn col_moved(&mut self, from: usize, to: usize) {
        if let Some(c) = &mut self.active_col {
            *c = moved_index(*c, from, to);
        }
        if let Some(pos) = &mut self.focused {
            pos.col = moved_index(pos.col, from, to);
        }
    }
}

fn shift_up(index: &mut Option<usize>, at: usize) {
    if let Some(i) = index {
        if *i >= at {
            *i += 1;
        }
    }
}

fn shift_down(index: &mut Option<usize>, at: usize) {
    if let Some(i) = index {
        if *i > at {
            *i -= 1;
        }
    }
}

/// Where index `i` ends up after moving `from` to `to`
fn moved_index(i: usize, from: usize, to: usize) -> usize {
    if i == from {
        to
    } else if from < to && i > from && i <= to {
        i - 1
    } else if to < from && i >= to && i < from {
        i + 1
    } else {
        i
    }
}
