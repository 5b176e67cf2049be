//! Grid construction and regeneration.
//!
//! Density changes never resize a grid in place: the affected grids are
//! rebuilt from scratch and every cell starts over in default state.

use serde::Serialize;
use tracing::debug;

use crate::config::GridConfig;
use crate::constants::TILE_COUNT;
use crate::models::{Border, Cell, CellRef, Grid, GridId, GridKind};

/// Parses a density input the way a numeric text field is read.
///
/// Surrounding whitespace is ignored, then an optional sign and the longest
/// run of leading digits are taken, so `"4abc"` reads as 4. Returns `None`
/// when there is no leading number at all.
#[must_use]
pub fn parse_density_input(input: &str) -> Option<i64> {
    let trimmed = input.trim();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    // Absurdly long digit runs saturate rather than fail; they are out of range either way.
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Builds Tile and Canvas grids according to the configured density rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridFactory {
    default_tile_density: u8,
    min_tile_density: u8,
    max_tile_density: u8,
    canvas_density: u8,
}

impl GridFactory {
    /// Creates a factory from the grid section of the configuration.
    #[must_use]
    pub const fn new(grid: &GridConfig) -> Self {
        Self {
            default_tile_density: grid.tile_density,
            min_tile_density: grid.tile_density_min,
            max_tile_density: grid.tile_density_max,
            canvas_density: grid.canvas_density,
        }
    }

    /// Density used whenever a Tile density request is unusable.
    #[must_use]
    pub const fn default_tile_density(&self) -> u8 {
        self.default_tile_density
    }

    /// Accepted Tile density range, inclusive.
    #[must_use]
    pub const fn tile_density_range(&self) -> (u8, u8) {
        (self.min_tile_density, self.max_tile_density)
    }

    /// Fixed Canvas density.
    #[must_use]
    pub const fn canvas_density(&self) -> u8 {
        self.canvas_density
    }

    /// Maps a requested Tile density onto the accepted range.
    ///
    /// Anything outside `[min, max]` becomes the default density.
    #[must_use]
    pub fn resolve_tile_density(&self, requested: i64) -> u8 {
        match u8::try_from(requested) {
            Ok(density) if (self.min_tile_density..=self.max_tile_density).contains(&density) => {
                density
            }
            _ => {
                debug!(
                    requested,
                    fallback = self.default_tile_density,
                    "tile density out of range"
                );
                self.default_tile_density
            }
        }
    }

    /// Reads a raw density input, falling back to the default on any
    /// parse failure, zero, or out-of-range value.
    #[must_use]
    pub fn density_from_input(&self, input: &str) -> u8 {
        match parse_density_input(input) {
            Some(value) if value != 0 => self.resolve_tile_density(value),
            _ => {
                debug!(input, fallback = self.default_tile_density, "unusable density input");
                self.default_tile_density
            }
        }
    }

    /// Builds a fresh Tile grid of `density²` default cells.
    #[must_use]
    pub fn build_tile(&self, density: i64, border: Border) -> Grid {
        Grid::new(GridKind::Tile, self.resolve_tile_density(density), border)
    }

    /// Builds a fresh Canvas grid at the fixed Canvas density.
    #[must_use]
    pub fn build_canvas(&self, border: Border) -> Grid {
        Grid::new(GridKind::Canvas, self.canvas_density, border)
    }

    /// Builds a complete board: every Tile at the default density plus the Canvas.
    #[must_use]
    pub fn build_board(&self, border: Border) -> Board {
        let density = self.default_tile_density;
        Board {
            tiles: (0..TILE_COUNT)
                .map(|_| self.build_tile(i64::from(density), border))
                .collect(),
            canvas: self.build_canvas(border),
            tile_density: density,
        }
    }

    /// Replaces all Tile grids with fresh ones at `density`.
    ///
    /// The resolved density becomes the board's global Tile density.
    pub fn regenerate_all_tiles(&self, board: &mut Board, density: i64, border: Border) {
        let density = self.resolve_tile_density(density);
        debug!(density, "regenerating all tiles");
        board.tile_density = density;
        for tile in &mut board.tiles {
            *tile = Grid::new(GridKind::Tile, density, border);
        }
    }

    /// Replaces a single Tile grid; every other grid is left alone.
    ///
    /// Returns `false` if `tile_index` does not name a Tile.
    pub fn regenerate_one_tile(
        &self,
        board: &mut Board,
        tile_index: usize,
        density: i64,
        border: Border,
    ) -> bool {
        let fresh = self.build_tile(density, border);
        match board.tiles.get_mut(tile_index) {
            Some(tile) => {
                debug!(tile_index, density = fresh.density(), "regenerating tile");
                *tile = fresh;
                true
            }
            None => false,
        }
    }

    /// Rebuilds every Tile (at the current global density) and the Canvas.
    pub fn reset_all(&self, board: &mut Board, border: Border) {
        let density = board.tile_density;
        self.regenerate_all_tiles(board, i64::from(density), border);
        board.canvas = self.build_canvas(border);
    }
}

impl Default for GridFactory {
    fn default() -> Self {
        Self::new(&GridConfig::default())
    }
}

/// All grids being edited: the Tile grids and the single Canvas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    tiles: Vec<Grid>,
    canvas: Grid,
    tile_density: u8,
}

impl Board {
    /// All Tile grids in order.
    #[must_use]
    pub fn tiles(&self) -> &[Grid] {
        &self.tiles
    }

    /// The Tile grid at `index`.
    #[must_use]
    pub fn tile(&self, index: usize) -> Option<&Grid> {
        self.tiles.get(index)
    }

    /// The Canvas grid.
    #[must_use]
    pub const fn canvas(&self) -> &Grid {
        &self.canvas
    }

    /// Density last requested through the global density control.
    #[must_use]
    pub const fn tile_density(&self) -> u8 {
        self.tile_density
    }

    /// Looks up a grid by id.
    #[must_use]
    pub fn grid(&self, id: GridId) -> Option<&Grid> {
        match id {
            GridId::Tile(index) => self.tiles.get(index),
            GridId::Canvas => Some(&self.canvas),
        }
    }

    /// Looks up a grid by id for mutation.
    pub fn grid_mut(&mut self, id: GridId) -> Option<&mut Grid> {
        match id {
            GridId::Tile(index) => self.tiles.get_mut(index),
            GridId::Canvas => Some(&mut self.canvas),
        }
    }

    /// Looks up a cell.
    #[must_use]
    pub fn cell(&self, cell: CellRef) -> Option<&Cell> {
        self.grid(cell.grid)?.cell(cell.position)
    }

    /// Looks up a cell for mutation.
    pub fn cell_mut(&mut self, cell: CellRef) -> Option<&mut Cell> {
        self.grid_mut(cell.grid)?.cell_mut(cell.position)
    }

    /// Every grid with its id: Tiles first, then the Canvas.
    pub fn grids(&self) -> impl Iterator<Item = (GridId, &Grid)> {
        self.tiles
            .iter()
            .enumerate()
            .map(|(index, grid)| (GridId::Tile(index), grid))
            .chain(std::iter::once((GridId::Canvas, &self.canvas)))
    }

    /// Overwrites the border of every cell on the board.
    pub fn apply_border(&mut self, border: Border) {
        for tile in &mut self.tiles {
            tile.apply_border(border);
        }
        self.canvas.apply_border(border);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Position, RgbColor};

    fn border() -> Border {
        Border::new(RgbColor::new(0xE8, 0xE8, 0xE8), 1)
    }

    #[test]
    fn test_parse_density_input() {
        assert_eq!(parse_density_input("5"), Some(5));
        assert_eq!(parse_density_input("  7 "), Some(7));
        assert_eq!(parse_density_input("4abc"), Some(4));
        assert_eq!(parse_density_input("+6"), Some(6));
        assert_eq!(parse_density_input("-3"), Some(-3));
        assert_eq!(parse_density_input(""), None);
        assert_eq!(parse_density_input("abc"), None);
        assert_eq!(parse_density_input("-"), None);
        assert_eq!(parse_density_input("99999999999999999999999"), Some(i64::MAX));
    }

    #[test]
    fn test_build_tile_in_range() {
        let factory = GridFactory::default();
        for density in 2..=10 {
            let tile = factory.build_tile(density, border());
            assert_eq!(i64::from(tile.density()), density);
            assert_eq!(tile.cells().len() as i64, density * density);
            assert!(tile.cells().iter().all(Cell::is_pristine));
            assert_eq!(tile.kind(), GridKind::Tile);
        }
    }

    #[test]
    fn test_build_tile_out_of_range_uses_default() {
        let factory = GridFactory::default();
        for density in [-4, 0, 1, 11, 300] {
            let tile = factory.build_tile(density, border());
            assert_eq!(tile.density(), 3);
            assert_eq!(tile.cells().len(), 9);
        }
    }

    #[test]
    fn test_density_from_input() {
        let factory = GridFactory::default();
        assert_eq!(factory.density_from_input("6"), 6);
        assert_eq!(factory.density_from_input("0"), 3);
        assert_eq!(factory.density_from_input(""), 3);
        assert_eq!(factory.density_from_input("lots"), 3);
        assert_eq!(factory.density_from_input("12"), 3);
    }

    #[test]
    fn test_build_canvas() {
        let canvas = GridFactory::default().build_canvas(border());
        assert_eq!(canvas.kind(), GridKind::Canvas);
        assert_eq!(canvas.density(), 20);
        assert_eq!(canvas.cells().len(), 400);
    }

    #[test]
    fn test_regenerate_one_tile_leaves_others() {
        let factory = GridFactory::default();
        let mut board = factory.build_board(border());
        let red = RgbColor::new(255, 0, 0);
        for index in 0..TILE_COUNT {
            board
                .cell_mut(CellRef::tile(index, 0, 0))
                .unwrap()
                .paint(red, 0);
        }
        board.cell_mut(CellRef::canvas(0, 0)).unwrap().rotate();

        assert!(factory.regenerate_one_tile(&mut board, 1, 5, border()));

        assert_eq!(board.tile(1).unwrap().density(), 5);
        assert!(board.tile(1).unwrap().cells().iter().all(Cell::is_pristine));
        for index in [0, 2, 3] {
            assert_eq!(board.tile(index).unwrap().density(), 3);
            assert_eq!(
                board.cell(CellRef::tile(index, 0, 0)).unwrap().fill,
                Some(red)
            );
        }
        assert_eq!(board.cell(CellRef::canvas(0, 0)).unwrap().rotation_degrees, 90);
        assert_eq!(board.tile_density(), 3);
    }

    #[test]
    fn test_regenerate_one_tile_rejects_bad_index() {
        let factory = GridFactory::default();
        let mut board = factory.build_board(border());
        let before = board.clone();
        assert!(!factory.regenerate_one_tile(&mut board, TILE_COUNT, 5, border()));
        assert_eq!(board, before);
    }

    #[test]
    fn test_reset_all_uses_global_density() {
        let factory = GridFactory::default();
        let mut board = factory.build_board(border());
        factory.regenerate_all_tiles(&mut board, 6, border());
        factory.regenerate_one_tile(&mut board, 2, 9, border());
        board
            .canvas
            .install_snapshot(Position::new(3, 3), board.tiles[0].snapshot());

        let fresh_border = Border::new(RgbColor::new(10, 10, 10), 2);
        factory.reset_all(&mut board, fresh_border);

        assert!(board.tiles().iter().all(|tile| tile.density() == 6));
        for (_, grid) in board.grids() {
            assert!(grid.cells().iter().all(Cell::is_pristine));
            assert!(grid.cells().iter().all(|cell| cell.border == fresh_border));
        }
    }

    #[test]
    fn test_grids_iterates_tiles_then_canvas() {
        let board = GridFactory::default().build_board(border());
        let ids: Vec<GridId> = board.grids().map(|(id, _)| id).collect();
        assert_eq!(
            ids,
            vec![
                GridId::Tile(0),
                GridId::Tile(1),
                GridId::Tile(2),
                GridId::Tile(3),
                GridId::Canvas
            ]
        );
    }
}
