//! Error types for grid and block operations

/// Which dimension of the grid an index refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

/// Errors raised by the table model and the block adapter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Index outside the valid bounds for a row/column operation
    OutOfRange { axis: Axis, index: usize, len: usize },
    /// Seed content is not rectangular
    ShapeMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A required host API field is absent
    MissingHost(&'static str),
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableError::OutOfRange { axis, index, len } => {
                write!(f, "{} index {} out of range (len {})", axis, index, len)
            }
            TableError::ShapeMismatch {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has {} cells, expected {}",
                row, found, expected
            ),
            TableError::MissingHost(field) => write!(f, "host api is missing `{}`", field),
        }
    }
}

impl std::error::Error for TableError {}

pub type Result<T> = std::result::Result<T, TableError>;

impl TableError {
    pub(crate) fn row(index: usize, len: usize) -> Self {
        TableError::OutOfRange {
            axis: Axis::Row,
            index,
            len,
        }
    }

    pub(crate) fn column(index: usize, len: usize) -> Self {
        TableError::OutOfRange {
            axis: Axis::Column,
            index,
            len,
        }
    }
}
