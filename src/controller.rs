//! Event handling for the editor.
//!
//! The presentation layer turns raw input into [`EditorEvent`]s and feeds them
//! to [`InteractionController::handle`], one at a time. Each event is a total
//! state transition: it either mutates the palette, border settings or board,
//! or is ignored. Nothing here ever fails.

use serde::Serialize;
use tracing::{debug, info};

use crate::config::Config;
use crate::factory::{Board, GridFactory};
use crate::models::{BorderSettings, CellRef, GridId, GridKind, Palette, Position, RgbColor};

/// A semantic input event, already resolved by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    /// The global Tile density field changed (raw field text)
    GlobalDensityChanged(String),
    /// One Tile's density field changed (raw field text)
    TileDensityChanged {
        /// Tile index (0-based)
        tile: usize,
        /// Raw field text
        input: String,
    },
    /// The border color picker changed
    BorderColorChanged(RgbColor),
    /// The border thickness slider changed
    BorderThicknessChanged(u16),
    /// Any palette picker changed; carries every picker's value in order
    PaletteColorsChanged(Vec<RgbColor>),
    /// A palette picker was clicked
    PaletteSlotClicked(usize),
    /// A key was pressed (digit shortcuts select palette slots)
    KeyPressed(char),
    /// The reset button was pressed
    ResetRequested,
    /// A cell was clicked
    CellClicked(CellRef),
    /// A cell received a context (right-click) action
    CellContextMenu(CellRef),
    /// A Tile grid was dropped onto a Canvas cell
    TileDropped {
        /// Source Tile index
        tile: usize,
        /// Target Canvas cell
        target: Position,
    },
}

/// Something the presentation layer should redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Mutation {
    /// Palette colors or selection changed
    Palette,
    /// Global border settings changed (every cell's border was rewritten)
    Border,
    /// A whole grid was regenerated
    Grid(GridId),
    /// A single cell changed
    Cell(CellRef),
}

/// Result of handling one event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    /// What changed, in the order it changed; empty if the event was ignored
    pub changed: Vec<Mutation>,
    /// The event must not reach any enclosing handler
    pub stop_propagation: bool,
    /// The platform's default action (e.g. its context menu) must be suppressed
    pub prevent_default: bool,
}

impl Outcome {
    /// An ignored event.
    #[must_use]
    pub fn ignored() -> Self {
        Self::default()
    }

    fn with_changes(mutations: impl IntoIterator<Item = Mutation>) -> Self {
        Self {
            changed: mutations.into_iter().collect(),
            ..Self::default()
        }
    }

    /// True when nothing changed.
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        self.changed.is_empty()
    }
}

/// Owns all editor state and applies events to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InteractionController {
    palette: Palette,
    border: BorderSettings,
    board: Board,
    #[serde(skip)]
    factory: GridFactory,
}

impl InteractionController {
    /// Starts an editor: builds the Tiles and the Canvas, then broadcasts
    /// the configured border settings to every cell.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let factory = GridFactory::new(&config.grid);
        let border = config.border_settings();
        let mut board = factory.build_board(border.border());
        board.apply_border(border.border());

        info!(
            tile_density = board.tile_density(),
            canvas_density = factory.canvas_density(),
            "editor started"
        );

        Self {
            palette: config.palette(),
            border,
            board,
            factory,
        }
    }

    /// Current palette.
    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Current global border settings.
    #[must_use]
    pub const fn border(&self) -> &BorderSettings {
        &self.border
    }

    /// Current grids.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Density rules in effect.
    #[must_use]
    pub const fn factory(&self) -> &GridFactory {
        &self.factory
    }

    /// Applies one event and reports what changed.
    pub fn handle(&mut self, event: EditorEvent) -> Outcome {
        debug!(?event, "handling event");
        match event {
            EditorEvent::GlobalDensityChanged(input) => self.on_global_density(&input),
            EditorEvent::TileDensityChanged { tile, input } => self.on_tile_density(tile, &input),
            EditorEvent::BorderColorChanged(color) => {
                self.border.set_color(color);
                self.broadcast_border()
            }
            EditorEvent::BorderThicknessChanged(thickness_px) => {
                self.border.set_thickness(thickness_px);
                self.broadcast_border()
            }
            EditorEvent::PaletteColorsChanged(colors) => {
                if self.palette.set_colors(colors) {
                    Outcome::with_changes([Mutation::Palette])
                } else {
                    Outcome::ignored()
                }
            }
            EditorEvent::PaletteSlotClicked(index) => {
                if self.palette.select(index) {
                    Outcome::with_changes([Mutation::Palette])
                } else {
                    Outcome::ignored()
                }
            }
            EditorEvent::KeyPressed(key) => {
                if self.palette.select_digit(key) {
                    Outcome::with_changes([Mutation::Palette])
                } else {
                    Outcome::ignored()
                }
            }
            EditorEvent::ResetRequested => self.on_reset(),
            EditorEvent::CellClicked(cell) => self.on_cell_click(cell),
            EditorEvent::CellContextMenu(cell) => self.on_context_menu(cell),
            EditorEvent::TileDropped { tile, target } => self.on_drop(tile, target),
        }
    }

    fn on_global_density(&mut self, input: &str) -> Outcome {
        let density = self.factory.density_from_input(input);
        self.factory.regenerate_all_tiles(
            &mut self.board,
            i64::from(density),
            self.border.border(),
        );
        Outcome::with_changes(
            (0..self.board.tiles().len()).map(|index| Mutation::Grid(GridId::Tile(index))),
        )
    }

    fn on_tile_density(&mut self, tile: usize, input: &str) -> Outcome {
        let density = self.factory.density_from_input(input);
        if self.factory.regenerate_one_tile(
            &mut self.board,
            tile,
            i64::from(density),
            self.border.border(),
        ) {
            Outcome::with_changes([Mutation::Grid(GridId::Tile(tile))])
        } else {
            debug!(tile, "density change for unknown tile");
            Outcome::ignored()
        }
    }

    /// Rewrites every cell's border from the current global settings.
    fn broadcast_border(&mut self) -> Outcome {
        self.board.apply_border(self.border.border());
        Outcome::with_changes([Mutation::Border])
    }

    fn on_reset(&mut self) -> Outcome {
        info!("resetting all grids");
        self.factory.reset_all(&mut self.board, self.border.border());
        let regenerated: Vec<Mutation> = self
            .board
            .grids()
            .map(|(id, _)| Mutation::Grid(id))
            .collect();
        Outcome::with_changes(regenerated)
    }

    fn on_cell_click(&mut self, target: CellRef) -> Outcome {
        let color = self.palette.selected_color();
        let index = self.palette.selected_index();

        let Some(grid) = self.board.grid_mut(target.grid) else {
            debug!(%target, "click on unknown grid");
            return Outcome::ignored();
        };
        let kind = grid.kind();
        let Some(cell) = grid.cell_mut(target.position) else {
            debug!(%target, "click outside grid");
            return Outcome::ignored();
        };

        match kind {
            GridKind::Tile => {
                cell.paint(color, index);
                Outcome::with_changes([Mutation::Cell(target)])
            }
            GridKind::Canvas => {
                let rotation = cell.rotate();
                debug!(%target, rotation, "rotated canvas cell");
                Outcome {
                    stop_propagation: true,
                    ..Outcome::with_changes([Mutation::Cell(target)])
                }
            }
        }
    }

    fn on_context_menu(&mut self, target: CellRef) -> Outcome {
        // Read the settings at reset time; cells do not remember an original border.
        let border = self.border.border();
        match self.board.cell_mut(target) {
            Some(cell) => {
                cell.reset(border);
                Outcome {
                    prevent_default: true,
                    ..Outcome::with_changes([Mutation::Cell(target)])
                }
            }
            None => {
                debug!(%target, "context action outside any grid");
                Outcome {
                    prevent_default: true,
                    ..Outcome::ignored()
                }
            }
        }
    }

    fn on_drop(&mut self, tile: usize, target: Position) -> Outcome {
        // Snapshot the source before touching the target.
        let Some(snapshot) = self.board.tile(tile).map(|grid| grid.snapshot()) else {
            debug!(tile, "drop from unknown tile");
            return Outcome::ignored();
        };

        let target_ref = CellRef {
            grid: GridId::Canvas,
            position: target,
        };
        let Some(canvas) = self.board.grid_mut(GridId::Canvas) else {
            return Outcome::ignored();
        };
        if canvas.install_snapshot(target, snapshot) {
            debug!(tile, %target, "dropped tile onto canvas");
            Outcome::with_changes([Mutation::Cell(target_ref)])
        } else {
            debug!(tile, %target, "drop outside canvas");
            Outcome::ignored()
        }
    }
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
