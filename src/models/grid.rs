//! Square grids of cells and the snapshots dropped between them.

use serde::Serialize;

use super::{Border, Cell, Position, RgbColor};

/// Which role a grid plays on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GridKind {
    /// Small, paintable source grid
    Tile,
    /// Large composition grid that receives dropped tiles
    Canvas,
}

/// An N×N matrix of cells stored in row-major order.
///
/// # Invariants
///
/// - `cells.len() == density * density`
/// - Only Canvas cells ever carry nested content
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    kind: GridKind,
    density: u8,
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a grid of `density²` default cells.
    ///
    /// Callers go through [`GridFactory`](crate::factory::GridFactory), which
    /// owns the density rules.
    pub(crate) fn new(kind: GridKind, density: u8, border: Border) -> Self {
        let count = usize::from(density) * usize::from(density);
        Self {
            kind,
            density,
            cells: vec![Cell::new(border); count],
        }
    }

    /// Grid role.
    #[must_use]
    pub const fn kind(&self) -> GridKind {
        self.kind
    }

    /// Cells per side.
    #[must_use]
    pub const fn density(&self) -> u8 {
        self.density
    }

    /// All cells, row-major.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterates over rows of cells, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(usize::from(self.density).max(1))
    }

    /// Row-major index of `position`, if it lies inside the grid.
    #[must_use]
    pub fn index_of(&self, position: Position) -> Option<usize> {
        if position.row >= self.density || position.col >= self.density {
            return None;
        }
        Some(usize::from(position.row) * usize::from(self.density) + usize::from(position.col))
    }

    /// Gets the cell at `position`.
    #[must_use]
    pub fn cell(&self, position: Position) -> Option<&Cell> {
        self.index_of(position).map(|index| &self.cells[index])
    }

    /// Gets a mutable reference to the cell at `position`.
    pub fn cell_mut(&mut self, position: Position) -> Option<&mut Cell> {
        self.index_of(position).map(|index| &mut self.cells[index])
    }

    /// Overwrites the border of every cell.
    pub fn apply_border(&mut self, border: Border) {
        for cell in &mut self.cells {
            cell.border = border;
        }
    }

    /// Deep copy of this grid's cell layout.
    ///
    /// The snapshot shares nothing with the grid; later edits to either side
    /// stay independent.
    #[must_use]
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            density: self.density,
            cells: self
                .cells
                .iter()
                .map(|cell| SnapshotCell {
                    fill: cell.fill,
                    palette_index: cell.palette_index,
                    rotation_degrees: cell.rotation_degrees,
                })
                .collect(),
        }
    }

    /// Replaces the nested content of the cell at `position`.
    ///
    /// Returns `false` (and changes nothing) on Tile grids or when the
    /// position is outside the grid.
    pub fn install_snapshot(&mut self, position: Position, snapshot: GridSnapshot) -> bool {
        if self.kind != GridKind::Canvas {
            return false;
        }
        match self.cell_mut(position) {
            Some(cell) => {
                cell.nest(snapshot);
                true
            }
            None => false,
        }
    }
}

/// Visual state of one cell inside a [`GridSnapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SnapshotCell {
    /// Fill color at the time of the drop
    pub fill: Option<RgbColor>,
    /// Palette slot the fill came from
    pub palette_index: Option<usize>,
    /// Rotation at the time of the drop
    pub rotation_degrees: u64,
}

/// Frozen copy of a Tile grid, installed into a Canvas cell.
///
/// Carries no border of its own: it fills the host cell edge to edge and
/// adopts that cell's boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridSnapshot {
    density: u8,
    cells: Vec<SnapshotCell>,
}

impl GridSnapshot {
    /// Cells per side of the copied grid.
    #[must_use]
    pub const fn density(&self) -> u8 {
        self.density
    }

    /// Copied cells, row-major.
    #[must_use]
    pub fn cells(&self) -> &[SnapshotCell] {
        &self.cells
    }

    /// Gets the copied cell at `position`.
    #[must_use]
    pub fn cell(&self, position: Position) -> Option<&SnapshotCell> {
        if position.row >= self.density || position.col >= self.density {
            return None;
        }
        self.cells
            .get(usize::from(position.row) * usize::from(self.density) + usize::from(position.col))
    }
}
