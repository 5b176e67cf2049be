//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving editor defaults
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{
    CANVAS_DENSITY, DEFAULT_BORDER_COLOR, DEFAULT_BORDER_THICKNESS_PX, DEFAULT_PALETTE,
    DEFAULT_TILE_DENSITY, MAX_TILE_DENSITY, MIN_TILE_DENSITY, PALETTE_SLOT_WIDTH,
};
use crate::models::{BorderSettings, Palette, RgbColor};

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// Palette defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Fill colors in slot order
    pub colors: Vec<RgbColor>,
    /// Width of one palette slot in the picker row
    pub indicator_slot_width: u16,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            colors: DEFAULT_PALETTE.to_vec(),
            indicator_slot_width: PALETTE_SLOT_WIDTH,
        }
    }
}

/// Border defaults applied to fresh cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderConfig {
    /// Border color
    pub color: RgbColor,
    /// Border thickness in pixels
    pub thickness_px: u16,
}

impl Default for BorderConfig {
    fn default() -> Self {
        Self {
            color: DEFAULT_BORDER_COLOR,
            thickness_px: DEFAULT_BORDER_THICKNESS_PX,
        }
    }
}

/// Grid density rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Density for Tile grids at startup and whenever input is unusable
    pub tile_density: u8,
    /// Smallest accepted Tile density
    pub tile_density_min: u8,
    /// Largest accepted Tile density
    pub tile_density_max: u8,
    /// Fixed density of the Canvas grid
    pub canvas_density: u8,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            tile_density: DEFAULT_TILE_DENSITY,
            tile_density_min: MIN_TILE_DENSITY,
            tile_density_max: MAX_TILE_DENSITY,
            canvas_density: CANVAS_DENSITY,
        }
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/Mosaic/config.toml`
/// - macOS: `~/Library/Application Support/Mosaic/config.toml`
/// - Windows: `%APPDATA%\Mosaic\config.toml`
///
/// # Validation
///
/// - palette must have at least one color
/// - `tile_density_min` must be at least 1 and not above `tile_density_max`
/// - `tile_density` must lie within `[tile_density_min, tile_density_max]`
/// - `canvas_density` must be at least 1
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Palette defaults
    #[serde(default)]
    pub palette: PaletteConfig,
    /// Border defaults
    #[serde(default)]
    pub border: BorderConfig,
    /// Grid density rules
    #[serde(default)]
    pub grid: GridConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("Mosaic");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the default config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit path.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate().context(format!(
            "Invalid config file: {}",
            config_path.display()
        ))?;

        Ok(config)
    }

    /// Saves configuration to the default config file.
    pub fn save(&self) -> Result<PathBuf> {
        let config_path = Self::config_file_path()?;
        self.save_to(&config_path)?;
        Ok(config_path)
    }

    /// Saves configuration to `config_path` using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.palette.colors.is_empty() {
            anyhow::bail!("Palette must contain at least one color");
        }

        let grid = &self.grid;
        if grid.tile_density_min == 0 {
            anyhow::bail!("tile_density_min must be at least 1");
        }
        if grid.tile_density_min > grid.tile_density_max {
            anyhow::bail!(
                "tile_density_min ({}) exceeds tile_density_max ({})",
                grid.tile_density_min,
                grid.tile_density_max
            );
        }
        if !(grid.tile_density_min..=grid.tile_density_max).contains(&grid.tile_density) {
            anyhow::bail!(
                "tile_density {} is outside the allowed range {}..={}",
                grid.tile_density,
                grid.tile_density_min,
                grid.tile_density_max
            );
        }
        if grid.canvas_density == 0 {
            anyhow::bail!("canvas_density must be at least 1");
        }

        Ok(())
    }

    /// Palette built from the configured colors.
    #[must_use]
    pub fn palette(&self) -> Palette {
        Palette::new(self.palette.colors.clone())
    }

    /// Border settings built from the configured defaults.
    #[must_use]
    pub const fn border_settings(&self) -> BorderSettings {
        BorderSettings::new(self.border.color, self.border.thickness_px)
    }
}
