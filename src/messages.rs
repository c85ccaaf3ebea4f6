//! Message types for the Elm-style architecture
//!
//! All table state changes flow through these message types.

/// Keys the table reacts to while a cell has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Tab,
    ShiftTab,
    Enter,
    Escape,
}

/// Table messages (cell editing, structure changes, selection)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableMsg {
    // === Cell Editing ===
    /// Cell text changed (one message per input event)
    CellInput { row: usize, col: usize, text: String },

    // === Selection ===
    /// Keyboard focus entered a cell
    FocusCell { row: usize, col: usize },
    /// Pointer moved over a cell
    HoverCell { row: usize, col: usize },
    /// Pointer left the table
    PointerLeave,
    /// Focus left the table
    ClearFocus,
    /// Navigation key pressed inside a cell
    KeyDown(Key),

    // === Structure ===
    /// Insert a blank row before `at`
    AddRow { at: usize },
    /// Insert a blank column before `at`
    AddColumn { at: usize },
    DeleteRow(usize),
    DeleteColumn(usize),
    MoveRow { from: usize, to: usize },
    MoveColumn { from: usize, to: usize },

    // === Presentation ===
    /// Drag a column border by `delta_px`
    ResizeColumn { col: usize, delta_px: i32 },
}

impl TableMsg {
    /// Whether this message changes table content or shape
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            TableMsg::CellInput { .. }
                | TableMsg::AddRow { .. }
                | TableMsg::AddColumn { .. }
                | TableMsg::DeleteRow(_)
                | TableMsg::DeleteColumn(_)
                | TableMsg::MoveRow { .. }
                | TableMsg::MoveColumn { .. }
        )
    }
}
