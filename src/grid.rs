use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("invalid shape: row {row} has {found} symbols, expected {expected}")]
    InvalidShape {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("invalid shape: {height} rows but no columns")]
    NoColumns { height: usize },
}

/// Immutable rectangular matrix of symbols, indexed `(row, col)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T>(Vec<Vec<T>>);

impl<T> Grid<T> {
    /// Builds a grid, rejecting ragged rows. Rows are never padded.
    pub fn new(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let Some(expected) = rows.first().map(Vec::len) else {
            return Ok(Self::empty());
        };
        if expected == 0 {
            return Err(GridError::NoColumns { height: rows.len() });
        }
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|(_, len)| *len != expected)
        {
            return Err(GridError::InvalidShape {
                row,
                expected,
                found,
            });
        }
        Ok(Self(rows))
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn height(&self) -> usize {
        self.0.len()
    }

    pub fn width(&self) -> usize {
        self.0.first().map(|row| row.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Signed so callers may probe past the top and left edges.
    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        (0..self.height() as isize).contains(&row) && (0..self.width() as isize).contains(&col)
    }

    /// Panics when `(row, col)` is out of bounds; check [`Grid::in_bounds`] first.
    pub fn symbol_at(&self, row: isize, col: isize) -> &T {
        &self.0[row as usize][col as usize]
    }
}
