//! Action dispatch: turns shortcut actions into editor events.

use anyhow::Result;

use crate::controller::EditorEvent;
use crate::models::{GridId, Position};
use crate::shortcuts::Action;
use crate::tui::{AppState, ColorPickerState, ColorPickerTarget};

/// Thickest border the keyboard controls will set.
const MAX_BORDER_THICKNESS_PX: u16 = 10;

/// Dispatch action to appropriate handler
pub fn dispatch_action(state: &mut AppState, action: Action) -> Result<bool> {
    match action {
        Action::NavigateUp => move_cursor(state, -1, 0),
        Action::NavigateDown => move_cursor(state, 1, 0),
        Action::NavigateLeft => move_cursor(state, 0, -1),
        Action::NavigateRight => move_cursor(state, 0, 1),
        Action::FocusNextGrid => state.cycle_focus(true),
        Action::FocusPreviousGrid => state.cycle_focus(false),

        Action::ClickCell => handle_click(state),
        Action::ResetCell => {
            let target = state.focused_cell_ref();
            if !state.dispatch(EditorEvent::CellContextMenu(target)).is_ignored() {
                state.set_status(format!("Reset {target}"));
            }
        }

        Action::DragOrDrop => handle_drag_or_drop(state),

        Action::TileDensityUp => step_tile_density(state, 1),
        Action::TileDensityDown => step_tile_density(state, -1),
        Action::GlobalDensityUp => step_global_density(state, 1),
        Action::GlobalDensityDown => step_global_density(state, -1),

        Action::CyclePaletteSlot => {
            let palette = state.controller.palette();
            let next = (palette.selected_index() + 1) % palette.len();
            state.dispatch(EditorEvent::PaletteSlotClicked(next));
            state.set_status(format!("Color {} selected", next + 1));
        }
        Action::BorderThicker | Action::BorderThinner => {
            let current = state.controller.border().thickness_px;
            let thickness = if action == Action::BorderThicker {
                current.saturating_add(1).min(MAX_BORDER_THICKNESS_PX)
            } else {
                current.saturating_sub(1)
            };
            state.dispatch(EditorEvent::BorderThicknessChanged(thickness));
            state.set_status(format!("Border thickness {thickness}px"));
        }
        Action::EditPaletteColor => {
            let palette = state.controller.palette();
            let index = palette.selected_index();
            state.color_picker = Some(ColorPickerState::new(
                ColorPickerTarget::PaletteSlot(index),
                palette.selected_color(),
            ));
        }
        Action::EditBorderColor => {
            state.color_picker = Some(ColorPickerState::new(
                ColorPickerTarget::Border,
                state.controller.border().color,
            ));
        }

        Action::ResetAll => {
            state.dispatch(EditorEvent::ResetRequested);
            state.held_tile = None;
            state.set_status("All grids reset");
        }

        Action::Cancel => {
            if state.held_tile.take().is_some() {
                state.set_status("Drag cancelled");
            }
        }
        Action::Quit => {
            state.should_quit = true;
            return Ok(true);
        }
    }
    Ok(false)
}

fn move_cursor(state: &mut AppState, rows: i16, cols: i16) {
    let max = i16::from(state.focused_density()) - 1;
    let step = |value: u8, delta: i16| -> u8 {
        u8::try_from((i16::from(value) + delta).clamp(0, max.max(0))).unwrap_or(0)
    };
    state.cursor = Position::new(step(state.cursor.row, rows), step(state.cursor.col, cols));
}

fn handle_click(state: &mut AppState) {
    let target = state.focused_cell_ref();
    if state.dispatch(EditorEvent::CellClicked(target)).is_ignored() {
        return;
    }
    let message = match (target.grid, state.focused_cell()) {
        (GridId::Canvas, Some(cell)) => format!("Rotated to {}°", cell.rotation_degrees),
        (_, Some(cell)) => match cell.fill {
            Some(fill) => format!("Painted {fill}"),
            None => String::new(),
        },
        (_, None) => String::new(),
    };
    state.set_status(message);
}

fn handle_drag_or_drop(state: &mut AppState) {
    match (state.focus, state.held_tile) {
        (GridId::Tile(index), _) => {
            state.held_tile = Some(index);
            state.set_status(format!(
                "Holding Tile {} - focus the Canvas and press d to drop",
                index + 1
            ));
        }
        (GridId::Canvas, Some(tile)) => {
            let target = state.cursor;
            let outcome = state.dispatch(EditorEvent::TileDropped { tile, target });
            if !outcome.is_ignored() {
                state.held_tile = None;
                state.set_status(format!("Dropped Tile {} at {target}", tile + 1));
            }
        }
        (GridId::Canvas, None) => {
            state.set_status("Pick up a Tile first (focus a Tile and press d)");
        }
    }
}

/// Adjusts the focused Tile's density field, clamped like a number input.
fn step_tile_density(state: &mut AppState, delta: i16) {
    let GridId::Tile(tile) = state.focus else {
        state.set_status("Focus a Tile to change its density");
        return;
    };
    let density = clamp_density(state, state.focused_density(), delta);
    state.dispatch(EditorEvent::TileDensityChanged {
        tile,
        input: density.to_string(),
    });
    state.set_status(format!("Tile {} density {density}", tile + 1));
}

fn step_global_density(state: &mut AppState, delta: i16) {
    let current = state.controller.board().tile_density();
    let density = clamp_density(state, current, delta);
    state.dispatch(EditorEvent::GlobalDensityChanged(density.to_string()));
    state.set_status(format!("All tiles density {density}"));
}

fn clamp_density(state: &AppState, current: u8, delta: i16) -> u8 {
    let (min, max) = state.controller.factory().tile_density_range();
    let next = (i16::from(current) + delta).clamp(i16::from(min), i16::from(max));
    u8::try_from(next).unwrap_or(min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::{CellRef, RgbColor};
    use crate::tui::Theme;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn state() -> AppState {
        AppState::with_theme(Config::default(), Theme::dark())
    }

    #[test]
    fn test_cursor_stays_inside_grid() {
        let mut state = state();
        dispatch_action(&mut state, Action::NavigateUp).unwrap();
        assert_eq!(state.cursor, Position::new(0, 0));
        for _ in 0..5 {
            dispatch_action(&mut state, Action::NavigateRight).unwrap();
        }
        assert_eq!(state.cursor, Position::new(0, 2));
    }

    #[test]
    fn test_click_paints_focused_tile_cell() {
        let mut state = state();
        dispatch_action(&mut state, Action::NavigateDown).unwrap();
        dispatch_action(&mut state, Action::ClickCell).unwrap();
        let cell = state.controller.board().cell(CellRef::tile(0, 1, 0)).unwrap();
        assert_eq!(cell.fill, Some(state.controller.palette().selected_color()));
    }

    #[test]
    fn test_drag_then_drop_onto_canvas() {
        let mut state = state();
        dispatch_action(&mut state, Action::ClickCell).unwrap();
        dispatch_action(&mut state, Action::DragOrDrop).unwrap();
        assert_eq!(state.held_tile, Some(0));

        state.focus = GridId::Canvas;
        state.cursor = Position::new(7, 3);
        dispatch_action(&mut state, Action::DragOrDrop).unwrap();

        assert_eq!(state.held_tile, None);
        let cell = state.controller.board().cell(CellRef::canvas(7, 3)).unwrap();
        assert!(cell.nested().is_some());
    }

    #[test]
    fn test_drop_without_held_tile_does_nothing() {
        let mut state = state();
        state.focus = GridId::Canvas;
        dispatch_action(&mut state, Action::DragOrDrop).unwrap();
        assert!(state
            .controller
            .board()
            .canvas()
            .cells()
            .iter()
            .all(|cell| cell.nested().is_none()));
    }

    #[test]
    fn test_tile_density_clamped_to_input_range() {
        let mut state = state();
        for _ in 0..20 {
            dispatch_action(&mut state, Action::TileDensityUp).unwrap();
        }
        assert_eq!(state.controller.board().tile(0).unwrap().density(), 10);
        assert_eq!(state.controller.board().tile(1).unwrap().density(), 3);

        for _ in 0..20 {
            dispatch_action(&mut state, Action::TileDensityDown).unwrap();
        }
        assert_eq!(state.controller.board().tile(0).unwrap().density(), 2);
    }

    #[test]
    fn test_global_density_step() {
        let mut state = state();
        dispatch_action(&mut state, Action::GlobalDensityUp).unwrap();
        assert!(state
            .controller
            .board()
            .tiles()
            .iter()
            .all(|tile| tile.density() == 4));
    }

    #[test]
    fn test_border_thickness_steps() {
        let mut state = state();
        dispatch_action(&mut state, Action::BorderThicker).unwrap();
        assert_eq!(state.controller.border().thickness_px, 2);
        for _ in 0..5 {
            dispatch_action(&mut state, Action::BorderThinner).unwrap();
        }
        assert_eq!(state.controller.border().thickness_px, 0);
    }

    #[test]
    fn test_cycle_palette_wraps() {
        let mut state = state();
        for _ in 0..4 {
            dispatch_action(&mut state, Action::CyclePaletteSlot).unwrap();
        }
        assert_eq!(state.controller.palette().selected_index(), 0);
    }

    fn picker_key(state: &mut AppState, code: KeyCode) {
        crate::tui::handlers::handle_main_input(state, KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap();
    }

    #[test]
    fn test_edit_palette_color_updates_selected_slot() {
        let mut state = state();
        dispatch_action(&mut state, Action::CyclePaletteSlot).unwrap();
        dispatch_action(&mut state, Action::EditPaletteColor).unwrap();
        assert_eq!(
            state.color_picker.as_ref().map(|picker| picker.target),
            Some(ColorPickerTarget::PaletteSlot(1))
        );

        // #FFD138 -> red +10 saturates, then blue -1
        picker_key(&mut state, KeyCode::Up);
        picker_key(&mut state, KeyCode::Tab);
        picker_key(&mut state, KeyCode::Tab);
        picker_key(&mut state, KeyCode::Left);
        picker_key(&mut state, KeyCode::Enter);

        assert!(state.color_picker.is_none());
        let palette = state.controller.palette();
        assert_eq!(palette.colors()[1], RgbColor::new(0xFF, 0xD1, 0x37));
        assert_eq!(palette.colors()[0], RgbColor::new(0xFF, 0x59, 0x38));
        assert_eq!(palette.selected_index(), 1);
    }

    #[test]
    fn test_edit_border_color_broadcasts_to_cells() {
        let mut state = state();
        dispatch_action(&mut state, Action::EditBorderColor).unwrap();
        picker_key(&mut state, KeyCode::Down);
        picker_key(&mut state, KeyCode::Enter);

        let expected = RgbColor::new(0xDE, 0xE8, 0xE8);
        assert_eq!(state.controller.border().color, expected);
        assert!(state
            .controller
            .board()
            .canvas()
            .cells()
            .iter()
            .all(|cell| cell.border.color == expected));
    }

    #[test]
    fn test_cancelled_picker_changes_nothing() {
        let mut state = state();
        let before = state.controller.clone();
        dispatch_action(&mut state, Action::EditBorderColor).unwrap();
        picker_key(&mut state, KeyCode::Up);
        picker_key(&mut state, KeyCode::Esc);

        assert!(state.color_picker.is_none());
        assert_eq!(state.controller, before);
    }
}
