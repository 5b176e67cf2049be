//! Application-wide constants.
//!
//! This module defines the application name and the built-in editor defaults
//! that the configuration file can override.

use crate::models::RgbColor;

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Mosaic";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "mosaic";

/// Number of Tile grids on the board.
pub const TILE_COUNT: usize = 4;

/// Density a Tile grid falls back to when its input is unusable.
pub const DEFAULT_TILE_DENSITY: u8 = 3;

/// Smallest density a Tile grid accepts.
pub const MIN_TILE_DENSITY: u8 = 2;

/// Largest density a Tile grid accepts.
pub const MAX_TILE_DENSITY: u8 = 10;

/// Fixed density of the Canvas grid.
pub const CANVAS_DENSITY: u8 = 20;

/// Degrees a Canvas cell turns per click.
pub const ROTATION_STEP_DEGREES: u64 = 90;

/// Width of one palette slot; the selection indicator sits at `index * width`.
pub const PALETTE_SLOT_WIDTH: u16 = 38;

/// Palette shipped with the editor.
pub const DEFAULT_PALETTE: [RgbColor; 4] = [
    RgbColor::new(0xFF, 0x59, 0x38),
    RgbColor::new(0xFF, 0xD1, 0x38),
    RgbColor::new(0x63, 0xA2, 0xFF),
    RgbColor::new(0xD1, 0xED, 0xFF),
];

/// Light gray applied to fresh cell borders.
pub const DEFAULT_BORDER_COLOR: RgbColor = RgbColor::new(0xE8, 0xE8, 0xE8);

/// Initial border thickness in pixels.
pub const DEFAULT_BORDER_THICKNESS_PX: u16 = 1;
