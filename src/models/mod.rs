//! Data models for palettes, borders, grids and cells.
//!
//! This module contains all the core data structures used throughout the application.
//! Models are designed to be independent of UI and business logic.

pub mod border;
pub mod cell;
pub mod grid;
pub mod palette;
pub mod position;
pub mod rgb;

// Re-export all model types
pub use border::{Border, BorderSettings};
pub use cell::Cell;
pub use grid::{Grid, GridKind, GridSnapshot, SnapshotCell};
pub use palette::Palette;
pub use position::{CellRef, GridId, Position};
pub use rgb::RgbColor;
