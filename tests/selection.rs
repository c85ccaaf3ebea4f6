//! Selection controller tests
//!
//! Focus, hover and the way the active row/column follows structure changes.

use table_block::messages::{Key, TableMsg};
use table_block::model::CellPosition;
use table_block::update::update;
use table_block::{Cmd, GridModel, TableState};

fn state(rows: usize, cols: usize) -> TableState {
    TableState::new(GridModel::blank(rows, cols), false)
}

#[test]
fn test_focus_sets_active_row_and_column() {
    let mut st = state(3, 3);
    update(&mut st, TableMsg::FocusCell { row: 1, col: 2 });

    assert_eq!(st.selection.focused, Some(CellPosition::new(1, 2)));
    assert_eq!(st.selection.active_row, Some(1));
    assert_eq!(st.selection.active_col, Some(2));
}

#[test]
fn test_focus_out_of_range_is_ignored() {
    let mut st = state(2, 2);

    assert_eq!(update(&mut st, TableMsg::FocusCell { row: 2, col: 0 }), None);
    assert_eq!(st.selection.focused, None);
}

#[test]
fn test_hover_then_leave_returns_to_focus() {
    let mut st = state(3, 3);
    update(&mut st, TableMsg::FocusCell { row: 0, col: 0 });
    update(&mut st, TableMsg::HoverCell { row: 2, col: 1 });
    assert_eq!(st.selection.active_row, Some(2));

    update(&mut st, TableMsg::PointerLeave);

    assert_eq!(st.selection.active_row, Some(0));
    assert_eq!(st.selection.active_col, Some(0));
}

#[test]
fn test_repeated_hover_produces_no_command() {
    let mut st = state(2, 2);

    assert!(update(&mut st, TableMsg::HoverCell { row: 1, col: 1 }).is_some());
    assert!(update(&mut st, TableMsg::HoverCell { row: 1, col: 1 }).is_none());
}

#[test]
fn test_delete_focused_last_row_clamps() {
    let mut st = state(3, 2);
    update(&mut st, TableMsg::FocusCell { row: 2, col: 1 });

    update(&mut st, TableMsg::DeleteRow(2));

    assert_eq!(st.selection.active_row, Some(1));
    assert_eq!(
        st.selection.focused.map(|p| p.row),
        Some(1),
        "focus moves to the new last row"
    );
}

#[test]
fn test_deleting_every_column_clears_selection() {
    let mut st = state(1, 1);
    update(&mut st, TableMsg::FocusCell { row: 0, col: 0 });

    update(&mut st, TableMsg::DeleteColumn(0));

    assert_eq!(st.selection.focused, None);
    assert_eq!(st.selection.active_col, None);
}

#[test]
fn test_selection_follows_moved_row() {
    let mut st = state(4, 1);
    update(&mut st, TableMsg::FocusCell { row: 1, col: 0 });

    update(&mut st, TableMsg::MoveRow { from: 1, to: 3 });

    assert_eq!(st.selection.focused, Some(CellPosition::new(3, 0)));
}

#[test]
fn test_insert_above_shifts_selection_down() {
    let mut st = state(2, 2);
    update(&mut st, TableMsg::FocusCell { row: 1, col: 0 });

    update(&mut st, TableMsg::AddRow { at: 0 });

    assert_eq!(st.selection.focused, Some(CellPosition::new(2, 0)));
}

#[test]
fn test_shift_tab_wraps_to_previous_row() {
    let mut st = state(2, 3);
    update(&mut st, TableMsg::FocusCell { row: 1, col: 0 });

    let cmd = update(&mut st, TableMsg::KeyDown(Key::ShiftTab)).unwrap();

    assert_eq!(cmd.focus_target(), Some(CellPosition::new(0, 2)));
}

#[test]
fn test_tab_on_last_cell_stays() {
    let mut st = state(1, 2);
    update(&mut st, TableMsg::FocusCell { row: 0, col: 1 });

    assert_eq!(update(&mut st, TableMsg::KeyDown(Key::Tab)), None);
}

#[test]
fn test_escape_clears_focus() {
    let mut st = state(2, 2);
    update(&mut st, TableMsg::FocusCell { row: 0, col: 0 });

    let cmd = update(&mut st, TableMsg::KeyDown(Key::Escape));

    assert_eq!(cmd, Some(Cmd::redraw_toolbars()));
    assert_eq!(st.selection.focused, None);
}

#[test]
fn test_enter_in_read_only_table_does_not_append() {
    let mut st = TableState::new(GridModel::blank(1, 1), true);
    update(&mut st, TableMsg::FocusCell { row: 0, col: 0 });

    assert_eq!(update(&mut st, TableMsg::KeyDown(Key::Enter)), None);
    assert_eq!(st.grid.row_count(), 1);
}
