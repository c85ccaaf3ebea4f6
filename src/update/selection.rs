//! Focus, hover and keyboard navigation

use crate::commands::Cmd;
use crate::error::TableError;
use crate::messages::{Key, TableMsg};
use crate::model::{CellPosition, TableState};

use super::table::add_row;

/// Handle selection messages
pub fn update_selection(state: &mut TableState, msg: TableMsg) -> Option<Cmd> {
    match msg {
        TableMsg::FocusCell { row, col } => focus_cell(state, row, col),
        TableMsg::HoverCell { row, col } => hover_cell(state, row, col),
        TableMsg::PointerLeave => {
            let before = state.selection.clone();
            state.selection.leave();
            changed(before != state.selection)
        }
        TableMsg::ClearFocus => {
            let before = state.selection.clone();
            state.selection.clear_focus();
            changed(before != state.selection)
        }
        TableMsg::KeyDown(key) => key_down(state, key),
        other => {
            tracing::debug!("update_selection: unhandled {:?}", other);
            None
        }
    }
}

fn changed(yes: bool) -> Option<Cmd> {
    yes.then(Cmd::redraw_toolbars)
}

fn in_bounds(state: &TableState, row: usize, col: usize) -> Result<(), TableError> {
    if row >= state.grid.row_count() {
        return Err(TableError::row(row, state.grid.row_count()));
    }
    if col >= state.grid.column_count() {
        return Err(TableError::column(col, state.grid.column_count()));
    }
    Ok(())
}

fn focus_cell(state: &mut TableState, row: usize, col: usize) -> Option<Cmd> {
    if let Err(e) = in_bounds(state, row, col) {
        tracing::warn!("Ignoring focus: {}", e);
        return None;
    }
    let before = state.selection.clone();
    state.selection.focus_cell(row, col);
    changed(before != state.selection)
}

fn hover_cell(state: &mut TableState, row: usize, col: usize) -> Option<Cmd> {
    if in_bounds(state, row, col).is_err() {
        return None;
    }
    let before = (state.selection.active_row, state.selection.active_col);
    state.selection.hover_cell(row, col);
    changed(before != (Some(row), Some(col)))
}

fn key_down(state: &mut TableState, key: Key) -> Option<Cmd> {
    let Some(pos) = state.selection.focused else {
        return None;
    };
    let rows = state.grid.row_count();
    let cols = state.grid.column_count();

    let target = match key {
        Key::Tab => next_cell(pos, rows, cols),
        Key::ShiftTab => prev_cell(pos, cols),
        Key::Escape => {
            state.selection.clear_focus();
            return Some(Cmd::redraw_toolbars());
        }
        Key::Enter if pos.row + 1 < rows => Some(CellPosition::new(pos.row + 1, pos.col)),
        Key::Enter => return append_row_and_focus(state),
    }?;

    state.selection.focus_cell(target.row, target.col);
    Some(Cmd::batch(vec![
        Cmd::redraw_toolbars(),
        Cmd::FocusCell(target),
    ]))
}

/// Enter on the last row grows the table by one row
fn append_row_and_focus(state: &mut TableState) -> Option<Cmd> {
    if state.read_only {
        return None;
    }
    let at = state.grid.row_count();
    let added = add_row(state, at)?;
    if state.grid.column_count() == 0 {
        return Some(added);
    }
    let target = CellPosition::new(at, 0);
    state.selection.focus_cell(target.row, target.col);
    Some(Cmd::batch(vec![added, Cmd::FocusCell(target)]))
}

fn next_cell(pos: CellPosition, rows: usize, cols: usize) -> Option<CellPosition> {
    if pos.col + 1 < cols {
        Some(CellPosition::new(pos.row, pos.col + 1))
    } else if pos.row + 1 < rows {
        Some(CellPosition::new(pos.row + 1, 0))
    } else {
        None
    }
}

fn prev_cell(pos: CellPosition, cols: usize) -> Option<CellPosition> {
    if pos.col > 0 {
        Some(CellPosition::new(pos.row, pos.col - 1))
    } else if pos.row > 0 && cols > 0 {
        Some(CellPosition::new(pos.row - 1, cols - 1))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::DamageArea;
    use crate::model::GridModel;

    fn focused(rows: usize, cols: usize, at: (usize, usize)) -> TableState {
        let mut st = TableState::new(GridModel::blank(rows, cols), false);
        st.selection.focus_cell(at.0, at.1);
        st
    }

    #[test]
    fn test_tab_wraps_to_next_row() {
        let mut st = focused(2, 2, (0, 1));
        let cmd = key_down(&mut st, Key::Tab).unwrap();

        assert_eq!(cmd.focus_target(), Some(CellPosition::new(1, 0)));
        assert_eq!(st.selection.focused, Some(CellPosition::new(1, 0)));
    }

    #[test]
    fn test_tab_on_last_cell_is_noop() {
        let mut st = focused(2, 2, (1, 1));
        assert!(key_down(&mut st, Key::Tab).is_none());
    }

    #[test]
    fn test_shift_tab_wraps_to_previous_row() {
        let mut st = focused(2, 3, (1, 0));
        key_down(&mut st, Key::ShiftTab);
        assert_eq!(st.selection.focused, Some(CellPosition::new(0, 2)));
    }

    #[test]
    fn test_enter_on_last_row_appends() {
        let mut st = focused(2, 2, (1, 1));
        let cmd = key_down(&mut st, Key::Enter).unwrap();

        assert_eq!(st.grid.row_count(), 3);
        assert_eq!(cmd.focus_target(), Some(CellPosition::new(2, 0)));
        assert!(cmd.needs_redraw());
    }

    #[test]
    fn test_enter_on_read_only_last_row_does_nothing() {
        let mut st = focused(1, 1, (0, 0));
        st.read_only = true;

        assert!(key_down(&mut st, Key::Enter).is_none());
        assert_eq!(st.grid.row_count(), 1);
    }

    #[test]
    fn test_hover_out_of_bounds_ignored() {
        let mut st = TableState::new(GridModel::blank(1, 1), false);
        assert!(hover_cell(&mut st, 3, 0).is_none());
        assert_eq!(st.selection.active_row, None);
    }

    #[test]
    fn test_hover_same_cell_twice_redraws_once() {
        let mut st = TableState::new(GridModel::blank(2, 2), false);
        assert!(hover_cell(&mut st, 1, 1).is_some());
        assert!(hover_cell(&mut st, 1, 1).is_none());
    }

    #[test]
    fn test_escape_clears_focus() {
        let mut st = focused(1, 1, (0, 0));
        key_down(&mut st, Key::Escape);
        assert_eq!(st.selection.focused, None);
    }

    #[test]
    fn test_enter_on_columnless_grid_appends_without_focus() {
        let mut st = focused(1, 0, (0, 0));
        let cmd = key_down(&mut st, Key::Enter).unwrap();

        assert_eq!(st.grid.row_count(), 2);
        assert_eq!(cmd.focus_target(), None);
    }

    #[test]
    fn test_toolbars_damage_on_focus() {
        let mut st = TableState::new(GridModel::blank(1, 1), false);
        let cmd = focus_cell(&mut st, 0, 0).unwrap();
        assert_eq!(cmd, Cmd::RedrawAreas(vec![DamageArea::Toolbars]));
    }
}
