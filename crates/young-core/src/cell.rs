//! Provides `Cell`, a single unit square of a Young diagram.

use std::fmt;

/// A unit cell at column `x` and row `y` of a Young diagram.
///
/// Rows are counted from the top and columns from the left, both starting
/// at zero. Cells compare structurally by their coordinates.
///
/// # Examples
///
/// ```
/// use young_core::Cell;
///
/// let cell = Cell::new(5, 2);
/// assert_eq!(cell.content(), 3);
/// assert_eq!(cell.to_string(), "(5, 2)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    x: usize,
    y: usize,
}

impl Cell {
    /// Creates a cell at column `x` and row `y`.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Get the column index
    pub fn x(&self) -> usize {
        self.x
    }

    /// Get the row index
    pub fn y(&self) -> usize {
        self.y
    }

    /// Returns the content of the cell, `x - y`.
    ///
    /// Cells on the same diagonal share the same content.
    pub fn content(&self) -> isize {
        self.x as isize - self.y as isize
    }

    /// Returns the cell mirrored across the main diagonal.
    pub fn transpose(&self) -> Self {
        Self::new(self.y, self.x)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(usize, usize)> for Cell {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}
