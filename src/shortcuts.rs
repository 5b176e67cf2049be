//! Centralized shortcut and action system.
//!
//! This module maps terminal key events onto editor actions. Keys with no
//! binding are forwarded to the editor as plain key presses, which is how
//! the digit palette shortcuts reach the controller.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// All possible actions in the terminal editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === NAVIGATION ===
    /// Move the cursor up one row
    NavigateUp,
    /// Move the cursor down one row
    NavigateDown,
    /// Move the cursor left one column
    NavigateLeft,
    /// Move the cursor right one column
    NavigateRight,
    /// Focus the next grid (Tile 1..4, then Canvas)
    FocusNextGrid,
    /// Focus the previous grid
    FocusPreviousGrid,

    // === CELLS ===
    /// Click the cell under the cursor
    ClickCell,
    /// Right-click the cell under the cursor
    ResetCell,

    // === DRAG & DROP ===
    /// Pick up the focused Tile, or drop the held Tile on the Canvas cursor
    DragOrDrop,

    // === DENSITY ===
    /// Raise the focused Tile's density
    TileDensityUp,
    /// Lower the focused Tile's density
    TileDensityDown,
    /// Raise the global Tile density
    GlobalDensityUp,
    /// Lower the global Tile density
    GlobalDensityDown,

    // === PALETTE & BORDERS ===
    /// Click the next palette slot
    CyclePaletteSlot,
    /// Thicken every border
    BorderThicker,
    /// Thin every border
    BorderThinner,
    /// Edit the selected palette slot's color
    EditPaletteColor,
    /// Edit the border color
    EditBorderColor,

    // === BOARD ===
    /// Regenerate every grid
    ResetAll,

    // === GENERAL ===
    /// Drop whatever is held
    Cancel,
    /// Leave the editor
    Quit,
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// Key code
    pub code: KeyCode,
    /// Required modifiers
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a KeyEvent.
    #[must_use]
    pub const fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

/// Shortcut registry that maps key events to actions.
///
/// This is the central source of truth for all keyboard shortcuts in the application.
pub struct ShortcutRegistry {
    bindings: HashMap<KeyBinding, Action>,
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
        };

        registry.register_shortcuts();
        registry
    }

    fn register_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        // === NAVIGATION ===
        self.register(K::Up, M::NONE, Action::NavigateUp);
        self.register(K::Down, M::NONE, Action::NavigateDown);
        self.register(K::Left, M::NONE, Action::NavigateLeft);
        self.register(K::Right, M::NONE, Action::NavigateRight);
        self.register(K::Char('k'), M::NONE, Action::NavigateUp);
        self.register(K::Char('j'), M::NONE, Action::NavigateDown);
        self.register(K::Char('h'), M::NONE, Action::NavigateLeft);
        self.register(K::Char('l'), M::NONE, Action::NavigateRight);
        self.register(K::Tab, M::NONE, Action::FocusNextGrid);
        self.register(K::BackTab, M::SHIFT, Action::FocusPreviousGrid);
        self.register(K::BackTab, M::NONE, Action::FocusPreviousGrid);

        // === CELLS ===
        self.register(K::Char(' '), M::NONE, Action::ClickCell);
        self.register(K::Enter, M::NONE, Action::ClickCell);
        self.register(K::Char('x'), M::NONE, Action::ResetCell);
        self.register(K::Delete, M::NONE, Action::ResetCell);

        // === DRAG & DROP ===
        self.register(K::Char('d'), M::NONE, Action::DragOrDrop);

        // === DENSITY ===
        self.register(K::Char('+'), M::NONE, Action::TileDensityUp);
        self.register(K::Char('+'), M::SHIFT, Action::TileDensityUp);
        self.register(K::Char('='), M::NONE, Action::TileDensityUp);
        self.register(K::Char('-'), M::NONE, Action::TileDensityDown);
        self.register(K::Char(']'), M::NONE, Action::GlobalDensityUp);
        self.register(K::Char('['), M::NONE, Action::GlobalDensityDown);

        // === PALETTE & BORDERS ===
        self.register(K::Char('c'), M::NONE, Action::CyclePaletteSlot);
        self.register(K::Char('b'), M::NONE, Action::BorderThicker);
        self.register(K::Char('B'), M::SHIFT, Action::BorderThinner);
        self.register(K::Char('e'), M::NONE, Action::EditPaletteColor);
        self.register(K::Char('E'), M::SHIFT, Action::EditBorderColor);

        // === BOARD ===
        self.register(K::Char('R'), M::SHIFT, Action::ResetAll);

        // === GENERAL ===
        self.register(K::Esc, M::NONE, Action::Cancel);
        self.register(K::Char('q'), M::NONE, Action::Quit);
        self.register(K::Char('q'), M::CONTROL, Action::Quit);
    }

    fn register(&mut self, code: KeyCode, modifiers: KeyModifiers, action: Action) {
        self.bindings.insert(KeyBinding::new(code, modifiers), action);
    }

    /// Look up an action for a key event.
    #[must_use]
    pub fn lookup(&self, event: KeyEvent) -> Option<Action> {
        self.bindings.get(&KeyBinding::from_event(event)).copied()
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_lookup() {
        let registry = ShortcutRegistry::new();

        let event = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(registry.lookup(event), Some(Action::NavigateUp));

        let event = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        assert_eq!(registry.lookup(event), Some(Action::ClickCell));

        let event = KeyEvent::new(KeyCode::Char('R'), KeyModifiers::SHIFT);
        assert_eq!(registry.lookup(event), Some(Action::ResetAll));
    }

    #[test]
    fn test_digits_are_not_bound() {
        let registry = ShortcutRegistry::new();
        for digit in '0'..='9' {
            let event = KeyEvent::new(KeyCode::Char(digit), KeyModifiers::NONE);
            assert_eq!(registry.lookup(event), None);
        }
    }

    #[test]
    fn test_vim_navigation() {
        let registry = ShortcutRegistry::new();
        let cases = [
            ('h', Action::NavigateLeft),
            ('j', Action::NavigateDown),
            ('k', Action::NavigateUp),
            ('l', Action::NavigateRight),
        ];
        for (key, action) in cases {
            assert_eq!(
                registry.lookup(KeyEvent::new(KeyCode::Char(key), KeyModifiers::NONE)),
                Some(action)
            );
        }
    }
}
