//! Command types for the Elm-style architecture
//!
//! Commands represent view work that should be performed after an update.

use std::ops::Range;

use crate::model::CellPosition;

// ============================================================================
// Damage Tracking (partial re-render)
// ============================================================================

/// Represents which parts of the table view need re-rendering
///
/// When in doubt, use `Damage::Full` for correctness.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Damage {
    /// No re-render needed (default state for accumulation)
    #[default]
    None,
    /// Rebuild every row and cell node
    Full,
    /// Patch specific areas only
    Areas(Vec<DamageArea>),
}

/// Table regions that can be patched independently
///
/// Structural variants (`RowInserted`, `ColumnRemoved`, ...) must be applied
/// in order; they add or remove nodes before text is refreshed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DamageArea {
    /// A row node was inserted at this index
    RowInserted(usize),
    /// The row node at this index was removed
    RowRemoved(usize),
    /// A cell was inserted into every row at this column
    ColumnInserted(usize),
    /// The cell at this column was removed from every row
    ColumnRemoved(usize),
    /// Refresh the text of these rows
    Rows(Range<usize>),
    /// Refresh the text of these columns
    Columns(Range<usize>),
    /// Refresh one cell
    Cell(CellPosition),
    /// Column width changed
    ColumnWidth(usize),
    /// Row/column toolbars moved, appeared or disappeared
    Toolbars,
    /// Heading styling must follow the current row 0
    Headings,
}

impl DamageArea {
    fn is_structural(&self) -> bool {
        matches!(
            self,
            DamageArea::RowInserted(_)
                | DamageArea::RowRemoved(_)
                | DamageArea::ColumnInserted(_)
                | DamageArea::ColumnRemoved(_)
        )
    }
}

impl Damage {
    /// Create damage for specific areas
    pub fn areas(areas: Vec<DamageArea>) -> Self {
        if areas.is_empty() {
            Damage::None
        } else {
            Damage::Areas(areas)
        }
    }

    /// Merge another damage into this one
    ///
    /// If either damage is Full, the result is Full.
    /// If either damage is None, the other takes precedence.
    /// Otherwise areas are appended; structural areas are kept even when
    /// repeated since each one is a separate node operation.
    pub fn merge(&mut self, other: Damage) {
        match (&mut *self, other) {
            (Damage::None, other) => *self = other,
            (_, Damage::None) => {}
            (Damage::Full, _) => {}
            (this, Damage::Full) => *this = Damage::Full,
            (Damage::Areas(areas), Damage::Areas(other_areas)) => {
                for area in other_areas {
                    if area.is_structural() || !areas.contains(&area) {
                        areas.push(area);
                    }
                }
            }
        }
    }

    pub fn is_full(&self) -> bool {
        matches!(self, Damage::Full)
    }

    /// Check if any re-render is needed
    pub fn needs_redraw(&self) -> bool {
        match self {
            Damage::None => false,
            Damage::Full => true,
            Damage::Areas(areas) => !areas.is_empty(),
        }
    }
}

// ============================================================================
// Commands (returned from update)
// ============================================================================

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a full re-render of the table body
    Redraw,
    /// Request a partial re-render of specific areas
    RedrawAreas(Vec<DamageArea>),
    /// Move keyboard focus to a cell after rendering
    FocusCell(CellPosition),
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Create a partial redraw command
    pub fn redraw_areas(areas: Vec<DamageArea>) -> Self {
        Cmd::RedrawAreas(areas)
    }

    /// Create a command to redraw just the toolbars
    pub fn redraw_toolbars() -> Self {
        Cmd::RedrawAreas(vec![DamageArea::Toolbars])
    }

    /// Check if this command requires a re-render
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::RedrawAreas(areas) => !areas.is_empty(),
            Cmd::FocusCell(_) => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Get the combined damage for this command
    pub fn damage(&self) -> Damage {
        match self {
            Cmd::None | Cmd::FocusCell(_) => Damage::None,
            Cmd::Redraw => Damage::Full,
            Cmd::RedrawAreas(areas) => Damage::areas(areas.clone()),
            Cmd::Batch(cmds) => {
                let mut damage = Damage::None;
                for cmd in cmds {
                    damage.merge(cmd.damage());
                    if damage.is_full() {
                        break;
                    }
                }
                damage
            }
        }
    }

    /// Cell that should receive focus once the damage is applied
    pub fn focus_target(&self) -> Option<CellPosition> {
        match self {
            Cmd::FocusCell(pos) => Some(*pos),
            Cmd::Batch(cmds) => cmds.iter().rev().find_map(|c| c.focus_target()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_none_is_identity() {
        let mut damage = Damage::None;
        damage.merge(Damage::Areas(vec![DamageArea::Toolbars]));
        assert_eq!(damage, Damage::Areas(vec![DamageArea::Toolbars]));
    }

    #[test]
    fn test_merge_full_absorbs() {
        let mut damage = Damage::Areas(vec![DamageArea::Headings]);
        damage.merge(Damage::Full);
        assert!(damage.is_full());
    }

    #[test]
    fn test_merge_dedups_refresh_but_keeps_structure() {
        let mut damage = Damage::Areas(vec![DamageArea::Toolbars, DamageArea::RowInserted(0)]);
        damage.merge(Damage::Areas(vec![
            DamageArea::Toolbars,
            DamageArea::RowInserted(0),
        ]));

        assert_eq!(
            damage,
            Damage::Areas(vec![
                DamageArea::Toolbars,
                DamageArea::RowInserted(0),
                DamageArea::RowInserted(0),
            ])
        );
    }

    #[test]
    fn test_batch_damage_and_focus() {
        let cmd = Cmd::batch(vec![
            Cmd::redraw_areas(vec![DamageArea::RowInserted(2)]),
            Cmd::FocusCell(CellPosition::new(2, 0)),
        ]);

        assert!(cmd.needs_redraw());
        assert_eq!(cmd.damage(), Damage::Areas(vec![DamageArea::RowInserted(2)]));
        assert_eq!(cmd.focus_target(), Some(CellPosition::new(2, 0)));
    }

    #[test]
    fn test_none_has_no_damage() {
        assert!(!Cmd::None.needs_redraw());
        assert!(!Cmd::None.damage().needs_redraw());
    }
}
