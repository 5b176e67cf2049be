//! Palette bar showing the fill slots, the selection indicator and border settings.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, GridWidget, Theme};

/// Terminal columns per palette slot.
pub const SLOT_COLUMNS: u16 = 6;

/// Palette bar widget
pub struct PaletteBar;

impl PaletteBar {
    /// Render the palette bar
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let palette = state.controller.palette();
        let border = state.controller.border();

        let mut swatches: Vec<Span> = Vec::new();
        for (index, color) in palette.colors().iter().enumerate() {
            let label = format!(" {:<4} ", index + 1);
            swatches.push(Span::styled(
                label,
                Style::default()
                    .bg(color.to_ratatui_color())
                    .fg(GridWidget::glyph_color(*color)),
            ));
        }
        swatches.push(Span::raw("   "));
        swatches.push(Span::styled("Border: ", Style::default().fg(theme.primary)));
        swatches.push(Span::styled(
            "  ",
            Style::default().bg(border.color.to_ratatui_color()),
        ));
        swatches.push(Span::styled(
            format!(" {} {}px", border.color, border.thickness_px),
            Style::default().fg(theme.text),
        ));
        swatches.push(Span::raw("   "));
        swatches.push(Span::styled("Density: ", Style::default().fg(theme.primary)));
        swatches.push(Span::styled(
            state.controller.board().tile_density().to_string(),
            Style::default().fg(theme.text),
        ));

        let indicator_col = Self::indicator_column(
            palette.indicator_offset(state.config.palette.indicator_slot_width),
            state.config.palette.indicator_slot_width,
        );
        let indicator = Line::from(vec![
            Span::raw(" ".repeat(usize::from(indicator_col))),
            Span::styled(
                "▔".repeat(usize::from(SLOT_COLUMNS)),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);

        let paragraph = Paragraph::new(vec![Line::from(swatches), indicator]).block(
            Block::default()
                .title(" Palette ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary))
                .style(Style::default().bg(theme.background)),
        );

        f.render_widget(paragraph, area);
    }

    /// Maps the indicator offset (in palette slot units) onto terminal columns.
    #[must_use]
    pub fn indicator_column(offset: u32, slot_width: u16) -> u16 {
        if slot_width == 0 {
            return 0;
        }
        let slot = offset / u32::from(slot_width);
        u16::try_from(slot.saturating_mul(u32::from(SLOT_COLUMNS))).unwrap_or(u16::MAX)
    }
}
