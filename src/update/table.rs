//! Structural and cell-content update functions
//!
//! Each handler mutates the grid first, then returns the damage the view
//! needs to patch. Out-of-range indices mean the view and the model
//! disagree; they are logged and the message becomes a no-op.

use crate::commands::{Cmd, DamageArea};
use crate::error::TableError;
use crate::messages::TableMsg;
use crate::model::{CellPosition, TableState, DEFAULT_COLUMN_WIDTH, MIN_COLUMN_WIDTH};

/// Handle cell edits and row/column structure changes
pub fn update_structure(state: &mut TableState, msg: TableMsg) -> Option<Cmd> {
    match msg {
        TableMsg::CellInput { row, col, text } => cell_input(state, row, col, &text),
        TableMsg::AddRow { at } => add_row(state, at),
        TableMsg::AddColumn { at } => add_column(state, at),
        TableMsg::DeleteRow(at) => delete_row(state, at),
        TableMsg::DeleteColumn(at) => delete_column(state, at),
        TableMsg::MoveRow { from, to } => move_row(state, from, to),
        TableMsg::MoveColumn { from, to } => move_column(state, from, to),
        TableMsg::ResizeColumn { col, delta_px } => resize_column(state, col, delta_px),
        other => {
            tracing::debug!("update_structure: unhandled {:?}", other);
            None
        }
    }
}

fn desync(action: &str, err: TableError) -> Option<Cmd> {
    tracing::warn!("Ignoring {}: {}", action, err);
    None
}

fn cell_input(state: &mut TableState, row: usize, col: usize, text: &str) -> Option<Cmd> {
    if let Err(e) = state.grid.set_cell_text(row, col, text) {
        return desync("cell input", e);
    }
    Some(Cmd::redraw_areas(vec![DamageArea::Cell(CellPosition::new(
        row, col,
    ))]))
}

/// Insert a row and report the damage; also used by Enter-to-append
pub(super) fn add_row(state: &mut TableState, at: usize) -> Option<Cmd> {
    if !state.can_add_row() {
        tracing::debug!("Row limit reached, not adding row");
        return None;
    }
    if let Err(e) = state.grid.insert_row(at) {
        return desync("add row", e);
    }
    state.selection.row_inserted(at);
    tracing::debug!("Inserted row at {}", at);

    let mut areas = vec![DamageArea::RowInserted(at), DamageArea::Toolbars];
    if at == 0 {
        areas.push(DamageArea::Headings);
    }
    Some(Cmd::redraw_areas(areas))
}

fn add_column(state: &mut TableState, at: usize) -> Option<Cmd> {
    if !state.can_add_col() {
        tracing::debug!("Column limit reached, not adding column");
        return None;
    }
    if let Err(e) = state.grid.insert_col(at) {
        return desync("add column", e);
    }
    state.column_widths.insert(at, None);
    state.selection.col_inserted(at);
    tracing::debug!("Inserted column at {}", at);

    Some(Cmd::redraw_areas(vec![
        DamageArea::ColumnInserted(at),
        DamageArea::Toolbars,
    ]))
}

fn delete_row(state: &mut TableState, at: usize) -> Option<Cmd> {
    if let Err(e) = state.grid.delete_row(at) {
        return desync("delete row", e);
    }
    let (rows, cols) = (state.grid.row_count(), state.grid.column_count());
    state.selection.row_deleted(at, rows, cols);
    tracing::debug!("Deleted row {}", at);

    let mut areas = vec![DamageArea::RowRemoved(at), DamageArea::Toolbars];
    if at == 0 {
        areas.push(DamageArea::Headings);
    }
    Some(Cmd::redraw_areas(areas))
}

fn delete_column(state: &mut TableState, at: usize) -> Option<Cmd> {
    if let Err(e) = state.grid.delete_col(at) {
        return desync("delete column", e);
    }
    state.column_widths.remove(at);
    let (rows, cols) = (state.grid.row_count(), state.grid.column_count());
    state.selection.col_deleted(at, rows, cols);
    tracing::debug!("Deleted column {}", at);

    Some(Cmd::redraw_areas(vec![
        DamageArea::ColumnRemoved(at),
        DamageArea::Toolbars,
    ]))
}

fn move_row(state: &mut TableState, from: usize, to: usize) -> Option<Cmd> {
    if from == to {
        return None;
    }
    if let Err(e) = state.grid.move_row(from, to) {
        return desync("move row", e);
    }
    state.selection.row_moved(from, to);
    tracing::debug!("Moved row {} to {}", from, to);

    let (lo, hi) = (from.min(to), from.max(to));
    let mut areas = vec![DamageArea::Rows(lo..hi + 1), DamageArea::Toolbars];
    if lo == 0 {
        areas.push(DamageArea::Headings);
    }
    Some(Cmd::redraw_areas(areas))
}

fn move_column(state: &mut TableState, from: usize, to: usize) -> Option<Cmd> {
    if from == to {
        return None;
    }
    if let Err(e) = state.grid.move_col(from, to) {
        return desync("move column", e);
    }
    let width = state.column_widths.remove(from);
    state.column_widths.insert(to, width);
    state.selection.col_moved(from, to);
    tracing::debug!("Moved column {} to {}", from, to);

    let (lo, hi) = (from.min(to), from.max(to));
    Some(Cmd::redraw_areas(vec![
        DamageArea::Columns(lo..hi + 1),
        DamageArea::Toolbars,
    ]))
}

fn resize_column(state: &mut TableState, col: usize, delta_px: i32) -> Option<Cmd> {
    if state.read_only {
        return None;
    }
    let Some(width) = state.column_widths.get_mut(col) else {
        return desync(
            "resize column",
            TableError::column(col, state.grid.column_count()),
        );
    };

    let current = width.unwrap_or(DEFAULT_COLUMN_WIDTH) as i64;
    let next =
        (current + delta_px as i64).clamp(MIN_COLUMN_WIDTH as i64, u32::MAX as i64) as u32;
    if *width == Some(next) {
        return None;
    }
    *width = Some(next);

    Some(Cmd::redraw_areas(vec![DamageArea::ColumnWidth(col)]))
}
