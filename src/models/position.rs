//! Addressing for grids and the cells inside them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position in grid coordinates (row-major, 0-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Row from the top
    pub row: u8,
    /// Column from the left
    pub col: u8,
}

impl Position {
    /// Creates a new Position with the given row and column.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Identifies one of the grids on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GridId {
    /// One of the Tile grids, by index (0-based)
    Tile(usize),
    /// The single Canvas grid
    Canvas,
}

impl fmt::Display for GridId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tile(index) => write!(f, "Tile {}", index + 1),
            Self::Canvas => write!(f, "Canvas"),
        }
    }
}

/// Identifies a single cell: which grid, and where in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellRef {
    /// Owning grid
    pub grid: GridId,
    /// Cell position within that grid
    pub position: Position,
}

impl CellRef {
    /// A cell in the Tile grid at `tile`.
    #[must_use]
    pub const fn tile(tile: usize, row: u8, col: u8) -> Self {
        Self {
            grid: GridId::Tile(tile),
            position: Position::new(row, col),
        }
    }

    /// A cell in the Canvas grid.
    #[must_use]
    pub const fn canvas(row: u8, col: u8) -> Self {
        Self {
            grid: GridId::Canvas,
            position: Position::new(row, col),
        }
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.grid, self.position)
    }
}
