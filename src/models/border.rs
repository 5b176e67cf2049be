//! Cell borders and the global border defaults.

use serde::{Deserialize, Serialize};

use super::RgbColor;
use crate::constants::{DEFAULT_BORDER_COLOR, DEFAULT_BORDER_THICKNESS_PX};

/// Border drawn around a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Border {
    /// Stroke color
    pub color: RgbColor,
    /// Stroke width in pixels
    pub thickness_px: u16,
}

impl Border {
    /// Creates a new border.
    #[must_use]
    pub const fn new(color: RgbColor, thickness_px: u16) -> Self {
        Self {
            color,
            thickness_px,
        }
    }
}

/// Process-wide border defaults.
///
/// Every freshly generated cell starts with these values, and any change here
/// is broadcast to every existing cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderSettings {
    /// Default stroke color
    pub color: RgbColor,
    /// Default stroke width in pixels
    pub thickness_px: u16,
}

impl BorderSettings {
    /// Creates border settings with the given defaults.
    #[must_use]
    pub const fn new(color: RgbColor, thickness_px: u16) -> Self {
        Self {
            color,
            thickness_px,
        }
    }

    /// The border a cell gets from these settings right now.
    #[must_use]
    pub const fn border(&self) -> Border {
        Border::new(self.color, self.thickness_px)
    }

    /// Updates the default color. Returns whether it changed.
    pub fn set_color(&mut self, color: RgbColor) -> bool {
        let changed = self.color != color;
        self.color = color;
        changed
    }

    /// Updates the default thickness. Returns whether it changed.
    pub fn set_thickness(&mut self, thickness_px: u16) -> bool {
        let changed = self.thickness_px != thickness_px;
        self.thickness_px = thickness_px;
        changed
    }
}

impl Default for BorderSettings {
    fn default() -> Self {
        Self::new(DEFAULT_BORDER_COLOR, DEFAULT_BORDER_THICKNESS_PX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_border_settings() {
        let settings = BorderSettings::default();
        assert_eq!(settings.color, RgbColor::new(0xE8, 0xE8, 0xE8));
        assert_eq!(settings.thickness_px, 1);
        assert_eq!(settings.border(), Border::new(settings.color, 1));
    }

    #[test]
    fn test_setters_report_change() {
        let mut settings = BorderSettings::default();
        assert!(settings.set_thickness(4));
        assert!(!settings.set_thickness(4));
        assert!(settings.set_color(RgbColor::new(0, 0, 0)));
        assert!(!settings.set_color(RgbColor::new(0, 0, 0)));
        assert_eq!(settings.border(), Border::new(RgbColor::new(0, 0, 0), 4));
    }
}
