//! Status bar widget for displaying status messages and help

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme};

/// Key hints shown on the bottom line.
const HINTS: [(&str, &str); 10] = [
    ("Tab", "grid"),
    ("Space", "click"),
    ("x", "reset cell"),
    ("d", "drag/drop"),
    ("+/-", "tile density"),
    ("[/]", "density"),
    ("1-4/c", "color"),
    ("e/E", "edit color"),
    ("R", "reset all"),
    ("q", "quit"),
];

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with contextual help
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let mut lines: Vec<Line> = Vec::new();

        let focus_line = {
            let mut spans = vec![
                Span::styled("Focus: ", Style::default().fg(theme.primary)),
                Span::raw(format!("{} {}", state.focus, state.cursor)),
            ];
            if let Some(cell) = state.focused_cell() {
                spans.push(Span::styled("  rotation ", Style::default().fg(theme.text_muted)));
                spans.push(Span::raw(format!("{}°", cell.rotation_degrees)));
                if let Some(fill) = cell.fill {
                    spans.push(Span::styled("  fill ", Style::default().fg(theme.text_muted)));
                    spans.push(Span::raw(fill.to_hex()));
                }
                spans.push(Span::styled("  border ", Style::default().fg(theme.text_muted)));
                spans.push(Span::raw(format!(
                    "{} {}px",
                    cell.border.color, cell.border.thickness_px
                )));
                if let Some(nested) = cell.nested() {
                    spans.push(Span::styled("  nested ", Style::default().fg(theme.text_muted)));
                    spans.push(Span::raw(format!("{0}×{0}", nested.density())));
                }
            }
            if let Some(tile) = state.held_tile {
                spans.push(Span::styled(
                    format!("  holding Tile {}", tile + 1),
                    Style::default().fg(theme.warning),
                ));
            }
            Line::from(spans)
        };
        lines.push(focus_line);

        lines.push(if state.status_message.is_empty() {
            Line::from("")
        } else {
            Line::from(Span::styled(
                state.status_message.as_str(),
                Style::default().fg(theme.success),
            ))
        });

        lines.push(Self::help_line(theme));

        let status = Paragraph::new(lines)
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    fn help_line(theme: &Theme) -> Line<'static> {
        let mut spans: Vec<Span<'static>> = Vec::new();
        for (i, &(key, action)) in HINTS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" | "));
            }
            spans.push(Span::styled(
                key,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(": "));
            spans.push(Span::styled(action, Style::default().fg(theme.text_muted)));
        }
        Line::from(spans)
    }
}
