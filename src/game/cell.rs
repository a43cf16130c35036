//! Board cells.

use std::fmt;

use crate::game::Direction;

/// A cell on the board located at a row and column.
///
/// Row 0 is player 1's home row; rows grow towards player 2.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    row: i32,
    column: i32,
}

impl Cell {
    /// Sentinel for "no cell", used by pieces that aren't on the board.
    ///
    /// Not the same as `Cell::default()`, which is the on-board `(0, 0)`.
    pub const NONE: Cell = Cell { row: -1, column: -1 };

    /// Create a cell at the row and column.
    #[must_use]
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// Row of the cell.
    #[must_use]
    pub const fn row(&self) -> i32 {
        self.row
    }

    /// Column of the cell.
    #[must_use]
    pub const fn column(&self) -> i32 {
        self.column
    }

    /// The neighbouring cell one step in the direction.
    ///
    /// The result may be off the board.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let (d_row, d_column) = direction.offset();
        Self::new(self.row + d_row, self.column + d_column)
    }

    /// Check if the cell is inside a square board with sides of `size`.
    #[must_use]
    pub const fn on_board(&self, size: i32) -> bool {
        self.row >= 0 && self.row < size && self.column >= 0 && self.column < size
    }

    /// Manhattan distance between two cells.
    #[must_use]
    pub const fn manhattan_distance(&self, other: Cell) -> i32 {
        (self.row - other.row).abs() + (self.column - other.column).abs()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
