//! Grid data model
//!
//! Rectangular storage of cell text. Every row holds exactly `column_count`
//! cells, and the column count is tracked separately so a grid with zero
//! rows still remembers its width.

use crate::error::{Result, TableError};

/// Position of a cell in the grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CellPosition {
    pub row: usize,
    pub col: usize,
}

impl CellPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A single cell
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// One row of cells
pub type Row = Vec<Cell>;

/// Rectangular table content
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridModel {
    rows: Vec<Row>,
    column_count: usize,
}

impl GridModel {
    /// Create a grid, preferring `seed` content over the explicit counts
    ///
    /// An empty or absent seed yields `rows × cols` blank cells. Irregular
    /// seeds are padded with empty cells up to the widest row.
    pub fn new(rows: usize, cols: usize, seed: Option<&[Vec<String>]>) -> Self {
        match seed {
            Some(content) if !content.is_empty() => Self::normalized(content),
            _ => Self::blank(rows, cols),
        }
    }

    /// Create a grid of blank cells
    pub fn blank(rows: usize, cols: usize) -> Self {
        Self {
            rows: (0..rows).map(|_| vec![Cell::default(); cols]).collect(),
            column_count: cols,
        }
    }

    /// Build from possibly irregular rows, padding short rows
    pub fn normalized(content: &[Vec<String>]) -> Self {
        let column_count = content.iter().map(|r| r.len()).max().unwrap_or(0);

        let rows = content
            .iter()
            .enumerate()
            .map(|(idx, row)| {
                if row.len() != column_count {
                    let err = TableError::ShapeMismatch {
                        row: idx,
                        expected: column_count,
                        found: row.len(),
                    };
                    tracing::warn!("Normalizing table content: {}", err);
                }
                let mut cells: Row = row.iter().map(Cell::new).collect();
                cells.resize(column_count, Cell::default());
                cells
            })
            .collect();

        Self { rows, column_count }
    }

    /// Build from rows that must already be rectangular
    pub fn try_from_rows(content: &[Vec<String>]) -> Result<Self> {
        let expected = content.first().map(|r| r.len()).unwrap_or(0);
        if let Some((row, r)) = content
            .iter()
            .enumerate()
            .find(|(_, r)| r.len() != expected)
        {
            return Err(TableError::ShapeMismatch {
                row,
                expected,
                found: r.len(),
            });
        }
        Ok(Self::normalized(content))
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// True only for the fully empty 0×0 grid
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.column_count == 0
    }

    pub fn cell_text(&self, row: usize, col: usize) -> Result<&str> {
        self.check_cell(row, col)?;
        Ok(&self.rows[row][col].text)
    }

    pub fn set_cell_text(&mut self, row: usize, col: usize, text: &str) -> Result<()> {
        self.check_cell(row, col)?;
        let cell = &mut self.rows[row][col];
        cell.text.clear();
        cell.text.push_str(text);
        Ok(())
    }

    /// Iterate the cells of one row
    pub fn row_cells(&self, row: usize) -> impl Iterator<Item = &str> {
        self.rows
            .get(row)
            .into_iter()
            .flat_map(|r| r.iter().map(|c| c.text.as_str()))
    }

    /// Insert a blank row before `at` (`at == row_count` appends)
    pub fn insert_row(&mut self, at: usize) -> Result<()> {
        if at > self.rows.len() {
            return Err(TableError::row(at, self.rows.len()));
        }
        self.rows
            .insert(at, vec![Cell::default(); self.column_count]);
        Ok(())
    }

    pub fn delete_row(&mut self, at: usize) -> Result<Row> {
        self.check_row(at)?;
        Ok(self.rows.remove(at))
    }

    /// Insert a blank column before `at` (`at == column_count` appends)
    pub fn insert_col(&mut self, at: usize) -> Result<()> {
        if at > self.column_count {
            return Err(TableError::column(at, self.column_count));
        }
        for row in &mut self.rows {
            row.insert(at, Cell::default());
        }
        self.column_count += 1;
        Ok(())
    }

    pub fn delete_col(&mut self, at: usize) -> Result<()> {
        self.check_col(at)?;
        for row in &mut self.rows {
            row.remove(at);
        }
        self.column_count -= 1;
        Ok(())
    }

    /// Move a row so that it ends up at index `to`
    pub fn move_row(&mut self, from: usize, to: usize) -> Result<()> {
        self.check_row(from)?;
        self.check_row(to)?;
        let row = self.rows.remove(from);
        self.rows.insert(to, row);
        Ok(())
    }

    /// Move a column so that it ends up at index `to`
    pub fn move_col(&mut self, from: usize, to: usize) -> Result<()> {
        self.check_col(from)?;
        self.check_col(to)?;
        for row in &mut self.rows {
            let cell = row.remove(from);
            row.insert(to, cell);
        }
        Ok(())
    }

    /// Deep copy of the content for persistence
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|c| c.text.clone()).collect())
            .collect()
    }

    /// Panic if any row lost rectangularity (debug builds only)
    #[cfg(debug_assertions)]
    pub fn assert_invariants_with_context(&self, context: &str) {
        for (idx, row) in self.rows.iter().enumerate() {
            assert_eq!(
                row.len(),
                self.column_count,
                "row {} has wrong width after {}",
                idx,
                context
            );
        }
    }

    fn check_row(&self, row: usize) -> Result<()> {
        if row >= self.rows.len() {
            return Err(TableError::row(row, self.rows.len()));
        }
        Ok(())
    }

    fn check_col(&self, col: usize) -> Result<()> {
        if col >= self.column_count {
            return Err(TableError::column(col, self.column_count));
        }
        Ok(())
    }

    fn check_cell(&self, row: usize, col: usize) -> Result<()> {
        self.check_row(row)?;
        self.check_col(col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Axis;

    fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|r| r.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_seed_takes_precedence_over_counts() {
        let seed = rows(&[&["a", "b", "c"]]);
        let grid = GridModel::new(5, 5, Some(&seed));

        assert_eq!(grid.row_count(), 1);
        assert_eq!(grid.column_count(), 3);
    }

    #[test]
    fn test_empty_seed_uses_counts() {
        let grid = GridModel::new(2, 3, Some(&[]));

        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid.column_count(), 3);
        assert!(grid.row_cells(1).all(|c| c.is_empty()));
    }

    #[test]
    fn test_irregular_seed_is_padded() {
        let seed = rows(&[&["a"], &["b", "c", "d"], &[]]);
        let grid = GridModel::new(0, 0, Some(&seed));

        assert_eq!(grid.column_count(), 3);
        assert_eq!(grid.to_rows(), rows(&[&["a", "", ""], &["b", "c", "d"], &["", "", ""]]));
    }

    #[test]
    fn test_try_from_rows_rejects_irregular() {
        let seed = rows(&[&["a", "b"], &["c"]]);
        let err = GridModel::try_from_rows(&seed).unwrap_err();

        assert_eq!(
            err,
            TableError::ShapeMismatch {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_cell_read_write() {
        let mut grid = GridModel::blank(2, 2);
        grid.set_cell_text(1, 0, "hello").unwrap();

        assert_eq!(grid.cell_text(1, 0).unwrap(), "hello");
        assert_eq!(grid.cell_text(0, 0).unwrap(), "");
    }

    #[test]
    fn test_cell_out_of_range() {
        let mut grid = GridModel::blank(2, 2);

        assert!(matches!(
            grid.cell_text(2, 0),
            Err(TableError::OutOfRange { axis: Axis::Row, .. })
        ));
        assert!(matches!(
            grid.set_cell_text(0, 2, "x"),
            Err(TableError::OutOfRange { axis: Axis::Column, .. })
        ));
    }

    #[test]
    fn test_insert_row_appends_at_count() {
        let mut grid = GridModel::new(0, 0, Some(&rows(&[&["a", "b"]])));
        grid.insert_row(1).unwrap();

        assert_eq!(grid.to_rows(), rows(&[&["a", "b"], &["", ""]]));
        assert!(grid.insert_row(3).is_err());
    }

    #[test]
    fn test_insert_col_before() {
        let mut grid = GridModel::new(0, 0, Some(&rows(&[&["a", "b"], &["c", "d"]])));
        grid.insert_col(1).unwrap();

        assert_eq!(grid.to_rows(), rows(&[&["a", "", "b"], &["c", "", "d"]]));
    }

    #[test]
    fn test_delete_col() {
        let mut grid = GridModel::new(
            0,
            0,
            Some(&rows(&[&["a", "b", "c"], &["d", "e", "f"]])),
        );
        grid.delete_col(1).unwrap();

        assert_eq!(grid.to_rows(), rows(&[&["a", "c"], &["d", "f"]]));
    }

    #[test]
    fn test_delete_all_rows_keeps_width() {
        let mut grid = GridModel::blank(1, 3);
        grid.delete_row(0).unwrap();

        assert_eq!(grid.row_count(), 0);
        assert_eq!(grid.column_count(), 3);
        assert!(!grid.is_empty());

        grid.insert_row(0).unwrap();
        assert_eq!(grid.to_rows(), rows(&[&["", "", ""]]));
    }

    #[test]
    fn test_delete_all_columns() {
        let mut grid = GridModel::blank(2, 1);
        grid.delete_col(0).unwrap();

        assert_eq!(grid.column_count(), 0);
        assert_eq!(grid.row_count(), 2);
        assert!(grid.delete_col(0).is_err());
    }

    #[test]
    fn test_move_row_forward_and_back() {
        let mut grid = GridModel::new(0, 0, Some(&rows(&[&["1"], &["2"], &["3"]])));
        grid.move_row(0, 2).unwrap();
        assert_eq!(grid.to_rows(), rows(&[&["2"], &["3"], &["1"]]));

        grid.move_row(2, 0).unwrap();
        assert_eq!(grid.to_rows(), rows(&[&["1"], &["2"], &["3"]]));
    }

    #[test]
    fn test_move_col() {
        let mut grid = GridModel::new(0, 0, Some(&rows(&[&["a", "b", "c"]])));
        grid.move_col(2, 0).unwrap();

        assert_eq!(grid.to_rows(), rows(&[&["c", "a", "b"]]));
        assert!(grid.move_col(0, 3).is_err());
    }

    #[test]
    fn test_to_rows_is_deep_copy() {
        let grid = GridModel::new(0, 0, Some(&rows(&[&["a"]])));
        let mut snapshot = grid.to_rows();
        snapshot[0][0].push('!');

        assert_eq!(grid.cell_text(0, 0).unwrap(), "a");
    }
}
