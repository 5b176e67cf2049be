//! Mosaic Library
//!
//! This library provides the core of the Mosaic editor: a palette-driven
//! grid painter where small Tile grids are authored and then dropped into
//! the cells of one large Canvas grid, composing nested patterns.
//!
//! The editor state lives in [`controller::InteractionController`]; every
//! user interaction is an [`controller::EditorEvent`] fed to it. The
//! terminal front end in [`tui`] only renders that state.

// Module declarations
pub mod config;
pub mod constants;
pub mod controller;
pub mod factory;
pub mod models;
pub mod shortcuts;
#[cfg(feature = "ratatui")]
pub mod tui;
