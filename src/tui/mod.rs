//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui. The TUI only holds presentation state
//! (focus, cursor, the tile being dragged); everything it draws is read from
//! the [`InteractionController`].

// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]

pub mod color_picker;
pub mod grid_widget;
pub mod handlers;
pub mod palette_bar;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

use crate::config::Config;
use crate::constants::{APP_NAME, TILE_COUNT};
use crate::controller::{EditorEvent, InteractionController, Outcome};
use crate::models::{Cell, CellRef, GridId, Position};

pub use color_picker::{ColorPickerState, ColorPickerTarget};
pub use grid_widget::{GridHighlight, GridWidget};
pub use palette_bar::PaletteBar;
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Application state for the terminal editor.
pub struct AppState {
    /// Editor core; the single owner of palette, borders and grids
    pub controller: InteractionController,
    /// Loaded configuration
    pub config: Config,
    /// Active color theme
    pub theme: Theme,
    /// Grid the cursor is in
    pub focus: GridId,
    /// Cursor within the focused grid
    pub cursor: Position,
    /// Tile picked up for dropping onto the Canvas
    pub held_tile: Option<usize>,
    /// Open color picker dialog, if any
    pub color_picker: Option<ColorPickerState>,
    /// Last status message
    pub status_message: String,
    /// Set when the user asked to quit
    pub should_quit: bool,
}

impl AppState {
    /// Creates the TUI state and starts a fresh editor.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let theme = Theme::from_mode(config.ui.theme_mode);
        Self::with_theme(config, theme)
    }

    /// Creates the TUI state with an explicit theme (skips OS detection).
    #[must_use]
    pub fn with_theme(config: Config, theme: Theme) -> Self {
        Self {
            controller: InteractionController::new(&config),
            config,
            theme,
            focus: GridId::Tile(0),
            cursor: Position::new(0, 0),
            held_tile: None,
            color_picker: None,
            status_message: String::new(),
            should_quit: false,
        }
    }

    /// The cell under the cursor.
    #[must_use]
    pub fn focused_cell_ref(&self) -> CellRef {
        CellRef {
            grid: self.focus,
            position: self.cursor,
        }
    }

    /// The cell under the cursor, if it exists.
    #[must_use]
    pub fn focused_cell(&self) -> Option<&Cell> {
        self.controller.board().cell(self.focused_cell_ref())
    }

    /// Density of the focused grid.
    #[must_use]
    pub fn focused_density(&self) -> u8 {
        self.controller
            .board()
            .grid(self.focus)
            .map_or(1, |grid| grid.density())
    }

    /// Feeds an event to the editor and keeps the cursor inside its grid.
    pub fn dispatch(&mut self, event: EditorEvent) -> Outcome {
        let outcome = self.controller.handle(event);
        self.clamp_cursor();
        outcome
    }

    /// Pulls the cursor back inside the focused grid after a resize.
    pub fn clamp_cursor(&mut self) {
        let max = self.focused_density().saturating_sub(1);
        self.cursor = Position::new(self.cursor.row.min(max), self.cursor.col.min(max));
    }

    /// Cycles focus through Tile 1..n and the Canvas.
    pub fn cycle_focus(&mut self, forward: bool) {
        let order: Vec<GridId> = (0..TILE_COUNT)
            .map(GridId::Tile)
            .chain(std::iter::once(GridId::Canvas))
            .collect();
        let current = order.iter().position(|id| *id == self.focus).unwrap_or(0);
        let next = if forward {
            (current + 1) % order.len()
        } else {
            (current + order.len() - 1) % order.len()
        };
        self.focus = order[next];
        self.clamp_cursor();
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handlers::handle_main_input(state, key)? {
                    break; // User quit
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Length(4), // Palette
            Constraint::Min(10),   // Grids
            Constraint::Length(5), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);
    PaletteBar::render(f, chunks[1], state, &state.theme);
    render_grids(f, chunks[2], state);
    StatusBar::render(f, chunks[3], state, &state.theme);

    if let Some(picker) = &state.color_picker {
        color_picker::render_color_picker(f, picker, &state.theme);
    }
}

fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let title = format!(" {APP_NAME} - {} ", state.focus);

    let title_widget = Paragraph::new(title)
        .style(
            Style::default()
                .fg(state.theme.primary)
                .bg(state.theme.background),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(state.theme.background)),
        );

    f.render_widget(title_widget, area);
}

/// Tiles on the left in a 2×2 block, Canvas on the right.
fn render_grids(f: &mut Frame, area: Rect, state: &AppState) {
    let board = state.controller.board();
    let (_, tile_max) = state.controller.factory().tile_density_range();
    let (tile_width, _) = GridWidget::required_size(tile_max);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(tile_width * 2), Constraint::Min(10)])
        .split(area);

    let tile_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(columns[0]);

    for (index, tile) in board.tiles().iter().enumerate() {
        let row = tile_rows[index / 2];
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
            .split(row);
        let id = GridId::Tile(index);
        GridWidget::render(
            f,
            cells[index % 2],
            tile,
            &format!("{id} ({0}×{0})", tile.density()),
            highlight_for(state, id),
            &state.theme,
        );
    }

    GridWidget::render(
        f,
        columns[1],
        board.canvas(),
        "Canvas",
        highlight_for(state, GridId::Canvas),
        &state.theme,
    );
}

fn highlight_for(state: &AppState, id: GridId) -> GridHighlight {
    GridHighlight {
        cursor: (state.focus == id).then_some(state.cursor),
        held: matches!((id, state.held_tile), (GridId::Tile(index), Some(held)) if index == held),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::with_theme(Config::default(), Theme::dark())
    }

    #[test]
    fn test_cycle_focus_wraps() {
        let mut state = state();
        for expected in [
            GridId::Tile(1),
            GridId::Tile(2),
            GridId::Tile(3),
            GridId::Canvas,
            GridId::Tile(0),
        ] {
            state.cycle_focus(true);
            assert_eq!(state.focus, expected);
        }
        state.cycle_focus(false);
        assert_eq!(state.focus, GridId::Canvas);
    }

    #[test]
    fn test_cursor_clamped_when_leaving_canvas() {
        let mut state = state();
        state.focus = GridId::Canvas;
        state.cursor = Position::new(15, 19);
        state.cycle_focus(true);
        assert_eq!(state.focus, GridId::Tile(0));
        assert_eq!(state.cursor, Position::new(2, 2));
    }

    #[test]
    fn test_highlight_marks_held_tile() {
        let mut state = state();
        state.held_tile = Some(2);
        assert!(highlight_for(&state, GridId::Tile(2)).held);
        assert!(!highlight_for(&state, GridId::Tile(1)).held);
        assert!(!highlight_for(&state, GridId::Canvas).held);
        assert_eq!(highlight_for(&state, GridId::Tile(0)).cursor, Some(Position::new(0, 0)));
    }
}
