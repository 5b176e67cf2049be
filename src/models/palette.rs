//! Fill palette with a single selected slot.

use serde::Serialize;
use tracing::debug;

use super::RgbColor;
use crate::constants::DEFAULT_PALETTE;

/// Ordered list of fill colors plus the currently selected slot.
///
/// # Invariants
///
/// - `colors` is never empty
/// - `selected_index < colors.len()`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    colors: Vec<RgbColor>,
    selected_index: usize,
}

impl Palette {
    /// Creates a palette from the given colors, selecting the first slot.
    ///
    /// Falls back to the built-in palette when `colors` is empty.
    #[must_use]
    pub fn new(colors: Vec<RgbColor>) -> Self {
        let colors = if colors.is_empty() {
            DEFAULT_PALETTE.to_vec()
        } else {
            colors
        };
        Self {
            colors,
            selected_index: 0,
        }
    }

    /// All colors in slot order.
    #[must_use]
    pub fn colors(&self) -> &[RgbColor] {
        &self.colors
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette has no slots (never true for a constructed palette).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Index of the selected slot.
    #[must_use]
    pub const fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Color in the selected slot.
    #[must_use]
    pub fn selected_color(&self) -> RgbColor {
        self.colors[self.selected_index]
    }

    /// Replaces every slot color, as read back from all pickers in order.
    ///
    /// The selection is clamped to the last slot if the new list is shorter.
    /// An empty list is ignored. Returns whether the palette changed.
    pub fn set_colors(&mut self, colors: Vec<RgbColor>) -> bool {
        if colors.is_empty() {
            debug!("ignoring empty palette update");
            return false;
        }
        if colors == self.colors {
            return false;
        }
        self.colors = colors;
        self.selected_index = self.selected_index.min(self.colors.len() - 1);
        true
    }

    /// Selects a slot. Out-of-range indices leave the palette untouched.
    ///
    /// Returns `true` if the index was accepted.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.colors.len() {
            debug!(index, len = self.colors.len(), "palette index out of range");
            return false;
        }
        self.selected_index = index;
        true
    }

    /// Keyboard shortcut: digit `n` selects slot `n - 1`.
    ///
    /// Only `'1'..='4'` are shortcuts, and only while that slot exists.
    pub fn select_digit(&mut self, key: char) -> bool {
        match key {
            '1'..='4' => {
                let index = (key as usize) - ('1' as usize);
                self.select(index)
            }
            _ => false,
        }
    }

    /// Horizontal offset of the selection indicator.
    #[must_use]
    pub fn indicator_offset(&self, slot_width: u16) -> u32 {
        u32::try_from(self.selected_index).unwrap_or(u32::MAX) * u32::from(slot_width)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(DEFAULT_PALETTE.to_vec())
    }
}
