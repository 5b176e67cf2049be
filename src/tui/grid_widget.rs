//! Grid widget for rendering Tile and Canvas grids.
//!
//! Each cell is drawn as a two-column swatch. Canvas cells holding a dropped
//! tile show one glyph sampled from the snapshot, rotated with the host cell.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::Theme;
use crate::models::{Cell, Grid, GridSnapshot, Position, RgbColor};

/// Glyphs for a nested tile at each quarter turn.
const NESTED_GLYPHS: [&str; 4] = ["▛▘", "▜▝", "▟▗", "▙▖"];

/// Columns used per cell.
pub const CELL_WIDTH: u16 = 2;

/// What the widget should highlight.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridHighlight {
    /// Cursor position, if this grid has focus
    pub cursor: Option<Position>,
    /// This Tile is currently held for dropping
    pub held: bool,
}

/// Grid widget renders one grid inside a titled block
pub struct GridWidget;

impl GridWidget {
    /// Render a grid
    pub fn render(
        f: &mut Frame,
        area: Rect,
        grid: &Grid,
        title: &str,
        highlight: GridHighlight,
        theme: &Theme,
    ) {
        let border_style = if highlight.held {
            Style::default().fg(theme.warning)
        } else if highlight.cursor.is_some() {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.primary)
        };

        // Cells visible inside the block borders
        let visible_rows = area.height.saturating_sub(2);
        let visible_cols = area.width.saturating_sub(2) / CELL_WIDTH;

        let mut lines = Vec::with_capacity(usize::from(visible_rows));
        for (row_index, row) in grid.rows().enumerate().take(usize::from(visible_rows)) {
            let spans: Vec<Span> = row
                .iter()
                .enumerate()
                .take(usize::from(visible_cols))
                .map(|(col_index, cell)| {
                    let position = Position::new(
                        u8::try_from(row_index).unwrap_or(u8::MAX),
                        u8::try_from(col_index).unwrap_or(u8::MAX),
                    );
                    let selected = highlight.cursor == Some(position);
                    Self::cell_span(cell, selected, theme)
                })
                .collect();
            lines.push(Line::from(spans));
        }

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .title(format!(" {title} "))
                .borders(Borders::ALL)
                .border_style(border_style)
                .style(Style::default().bg(theme.background)),
        );

        f.render_widget(paragraph, area);
    }

    /// Size needed to show a whole grid of `density` cells, borders included.
    #[must_use]
    pub fn required_size(density: u8) -> (u16, u16) {
        let density = u16::from(density);
        (density * CELL_WIDTH + 2, density + 2)
    }

    fn cell_span<'a>(cell: &Cell, selected: bool, theme: &Theme) -> Span<'a> {
        let background = cell
            .fill
            .map_or(theme.empty_cell, |color| color.to_ratatui_color());

        let (text, foreground) = match cell.nested() {
            Some(snapshot) => {
                let glyph = NESTED_GLYPHS[usize::from(cell.quarter_turns())];
                (glyph.to_string(), Self::dominant_color(snapshot, theme))
            }
            None => (
                "  ".to_string(),
                Self::glyph_color(cell.fill.unwrap_or_default()),
            ),
        };

        let mut style = Style::default().fg(foreground).bg(background);
        if selected {
            style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
            if cell.nested().is_none() {
                return Span::styled("[]", style);
            }
        }
        Span::styled(text, style)
    }

    /// Most used fill in a snapshot, shown as the glyph color.
    fn dominant_color(snapshot: &GridSnapshot, theme: &Theme) -> Color {
        let mut counts: Vec<(RgbColor, usize)> = Vec::new();
        for fill in snapshot.cells().iter().filter_map(|cell| cell.fill) {
            match counts.iter_mut().find(|(color, _)| *color == fill) {
                Some((_, count)) => *count += 1,
                None => counts.push((fill, 1)),
            }
        }
        counts
            .into_iter()
            .max_by_key(|(_, count)| *count)
            .map_or(theme.text_muted, |(color, _)| color.to_ratatui_color())
    }

    /// Black or white, whichever reads better on `fill`.
    pub(crate) fn glyph_color(fill: RgbColor) -> Color {
        if fill.luminance() > 128 {
            Color::Black
        } else {
            Color::White
        }
    }
}
