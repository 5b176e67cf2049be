//! Main UI input handler.

use anyhow::Result;
use crossterm::event::{self, KeyCode, KeyModifiers};

use crate::controller::EditorEvent;
use crate::shortcuts::ShortcutRegistry;
use crate::tui::{color_picker, AppState};

/// Handle input for main UI
///
/// Bound keys run their action; any other printable key reaches the editor
/// as a plain key press so the digit palette shortcuts work.
pub fn handle_main_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    if state.color_picker.is_some() {
        return color_picker::handle_input(state, key);
    }

    let registry = ShortcutRegistry::new();

    if let Some(action) = registry.lookup(key) {
        return super::dispatch_action(state, action);
    }

    if let KeyCode::Char(c) = key.code {
        if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            let outcome = state.dispatch(EditorEvent::KeyPressed(c));
            if !outcome.is_ignored() {
                let palette = state.controller.palette();
                let message = format!(
                    "Color {} selected ({})",
                    palette.selected_index() + 1,
                    palette.selected_color()
                );
                state.set_status(message);
            }
        }
    }
    Ok(false)
}
