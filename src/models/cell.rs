//! The atomic visual unit of a grid.

use serde::Serialize;

use super::{Border, GridSnapshot, RgbColor};
use crate::constants::ROTATION_STEP_DEGREES;

/// A single cell and all of its visual state.
///
/// Cells are only created by their owning [`Grid`](super::Grid) and are
/// replaced wholesale when that grid is regenerated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    /// Fill color; `None` shows the background
    pub fill: Option<RgbColor>,
    /// Palette slot the fill was taken from
    pub palette_index: Option<usize>,
    /// Accumulated rotation, always a multiple of 90 and never reduced mod 360
    pub rotation_degrees: u64,
    /// Current border
    pub border: Border,
    nested: Option<GridSnapshot>,
}

impl Cell {
    /// A cell in default state with the given border.
    #[must_use]
    pub const fn new(border: Border) -> Self {
        Self {
            fill: None,
            palette_index: None,
            rotation_degrees: 0,
            border,
            nested: None,
        }
    }

    /// Fills the cell with a palette color.
    pub fn paint(&mut self, color: RgbColor, palette_index: usize) {
        self.fill = Some(color);
        self.palette_index = Some(palette_index);
    }

    /// Turns the cell a quarter clockwise and returns the new total.
    pub fn rotate(&mut self) -> u64 {
        self.rotation_degrees = self.rotation_degrees.saturating_add(ROTATION_STEP_DEGREES);
        self.rotation_degrees
    }

    /// Clears fill, rotation and nested content, and re-anchors the border.
    pub fn reset(&mut self, border: Border) {
        *self = Self::new(border);
    }

    /// Rotation reduced to a quarter-turn count (0-3), for rendering only.
    #[must_use]
    pub fn quarter_turns(&self) -> u8 {
        u8::try_from((self.rotation_degrees / ROTATION_STEP_DEGREES) % 4).unwrap_or(0)
    }

    /// Copy of a Tile grid dropped onto this cell.
    ///
    /// Only Canvas cells ever hold one; [`Grid::install_snapshot`](super::Grid::install_snapshot)
    /// is the single way in.
    #[must_use]
    pub const fn nested(&self) -> Option<&GridSnapshot> {
        self.nested.as_ref()
    }

    pub(super) fn nest(&mut self, snapshot: GridSnapshot) {
        self.nested = Some(snapshot);
    }

    /// True when nothing but the border has been set.
    #[must_use]
    pub const fn is_pristine(&self) -> bool {
        self.fill.is_none()
            && self.palette_index.is_none()
            && self.rotation_degrees == 0
            && self.nested.is_none()
    }
}
