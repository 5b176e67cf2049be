//! Color picker dialog for palette slots and the border color.
//!
//! Colors are tuned with RGB channel sliders and applied on Enter, which
//! sends the matching editor event.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph},
    Frame,
};

use super::{AppState, Theme};
use crate::controller::EditorEvent;
use crate::models::RgbColor;

/// What the picker edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorPickerTarget {
    /// A palette slot, by index
    PaletteSlot(usize),
    /// The global border color
    Border,
}

/// RGB channel being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RgbChannel {
    /// Red color channel
    Red,
    /// Green color channel
    Green,
    /// Blue color channel
    Blue,
}

/// State for the color picker dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPickerState {
    /// Color being edited
    pub target: ColorPickerTarget,
    /// Red channel value (0-255)
    pub r: u8,
    /// Green channel value (0-255)
    pub g: u8,
    /// Blue channel value (0-255)
    pub b: u8,
    /// Currently active RGB channel for editing
    pub active_channel: RgbChannel,
}

impl ColorPickerState {
    /// Create a picker for `target`, starting from its current color
    #[must_use]
    pub const fn new(target: ColorPickerTarget, color: RgbColor) -> Self {
        Self {
            target,
            r: color.r,
            g: color.g,
            b: color.b,
            active_channel: RgbChannel::Red,
        }
    }

    /// Get the current color
    #[must_use]
    pub const fn get_color(&self) -> RgbColor {
        RgbColor::new(self.r, self.g, self.b)
    }

    /// Switch to next RGB channel (Red -> Green -> Blue -> Red)
    pub const fn next_channel(&mut self) {
        self.active_channel = match self.active_channel {
            RgbChannel::Red => RgbChannel::Green,
            RgbChannel::Green => RgbChannel::Blue,
            RgbChannel::Blue => RgbChannel::Red,
        };
    }

    /// Switch to previous RGB channel (Red -> Blue -> Green -> Red)
    pub const fn previous_channel(&mut self) {
        self.active_channel = match self.active_channel {
            RgbChannel::Red => RgbChannel::Blue,
            RgbChannel::Green => RgbChannel::Red,
            RgbChannel::Blue => RgbChannel::Green,
        };
    }

    /// Increase the active channel value
    pub const fn increase_value(&mut self, amount: u8) {
        match self.active_channel {
            RgbChannel::Red => self.r = self.r.saturating_add(amount),
            RgbChannel::Green => self.g = self.g.saturating_add(amount),
            RgbChannel::Blue => self.b = self.b.saturating_add(amount),
        }
    }

    /// Decrease the active channel value
    pub const fn decrease_value(&mut self, amount: u8) {
        match self.active_channel {
            RgbChannel::Red => self.r = self.r.saturating_sub(amount),
            RgbChannel::Green => self.g = self.g.saturating_sub(amount),
            RgbChannel::Blue => self.b = self.b.saturating_sub(amount),
        }
    }

    fn title(&self) -> String {
        match self.target {
            ColorPickerTarget::PaletteSlot(index) => format!("Palette Color {}", index + 1),
            ColorPickerTarget::Border => "Border Color".to_string(),
        }
    }
}

/// Render the color picker dialog
pub fn render_color_picker(f: &mut Frame, picker: &ColorPickerState, theme: &Theme) {
    let area = centered_rect(60, 70, f.area());

    // Clear the background area first
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.primary))
        .style(Style::default().bg(theme.background));
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(2), // Red slider
            Constraint::Length(2), // Green slider
            Constraint::Length(2), // Blue slider
            Constraint::Length(4), // Color preview
            Constraint::Min(0),
            Constraint::Length(2), // Instructions
        ])
        .split(area);

    let title = Paragraph::new(picker.title()).style(
        Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(title, chunks[0]);

    let sliders = [
        ("Red", picker.r, Color::Red, RgbChannel::Red),
        ("Green", picker.g, Color::Green, RgbChannel::Green),
        ("Blue", picker.b, Color::Blue, RgbChannel::Blue),
    ];
    for (slot, (label, value, color, channel)) in sliders.into_iter().enumerate() {
        render_channel_slider(
            f,
            chunks[slot + 1],
            label,
            value,
            color,
            picker.active_channel == channel,
            theme.text_muted,
        );
    }

    let color = picker.get_color();
    let preview = Block::default()
        .title(format!(" {} ", color.to_hex()))
        .borders(Borders::ALL)
        .style(
            Style::default()
                .bg(color.to_ratatui_color())
                .fg(super::GridWidget::glyph_color(color)),
        );
    f.render_widget(preview, chunks[4]);

    let instructions = Line::from(vec![
        Span::styled("↑↓", Style::default().fg(theme.accent)),
        Span::raw(" ±10  "),
        Span::styled("←→", Style::default().fg(theme.accent)),
        Span::raw(" ±1  "),
        Span::styled("Tab", Style::default().fg(theme.accent)),
        Span::raw(" Channel  "),
        Span::styled("Enter", Style::default().fg(theme.accent)),
        Span::raw(" Apply  "),
        Span::styled("Esc", Style::default().fg(theme.accent)),
        Span::raw(" Cancel"),
    ]);
    f.render_widget(Paragraph::new(instructions), chunks[6]);
}

fn render_channel_slider(
    f: &mut Frame,
    area: Rect,
    label: &str,
    value: u8,
    color: Color,
    is_active: bool,
    inactive_color: Color,
) {
    let percentage = u16::from(value) * 100 / 255;
    let label_text = format!("{label}: {value:3}");

    let style = if is_active {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(inactive_color)
    };

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::NONE))
        .gauge_style(style)
        .label(label_text)
        .percent(percentage);

    f.render_widget(gauge, area);
}

/// Handle input for the color picker
pub fn handle_input(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    let Some(picker) = state.color_picker.as_mut() else {
        return Ok(false);
    };

    match key.code {
        KeyCode::Esc => {
            state.color_picker = None;
            state.set_status("Cancelled");
        }
        KeyCode::Enter => apply_color(state),
        KeyCode::Up | KeyCode::Char('k') => picker.increase_value(10),
        KeyCode::Down | KeyCode::Char('j') => picker.decrease_value(10),
        KeyCode::Right | KeyCode::Char('l') => picker.increase_value(1),
        KeyCode::Left | KeyCode::Char('h') => picker.decrease_value(1),
        KeyCode::BackTab => picker.previous_channel(),
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                picker.previous_channel();
            } else {
                picker.next_channel();
            }
        }
        _ => {}
    }
    Ok(false)
}

/// Sends the picked color to the editor and closes the dialog
fn apply_color(state: &mut AppState) {
    let Some(picker) = state.color_picker.take() else {
        return;
    };
    let color = picker.get_color();

    match picker.target {
        ColorPickerTarget::PaletteSlot(index) => {
            // The palette event carries every slot, as read back from all pickers.
            let mut colors = state.controller.palette().colors().to_vec();
            if let Some(slot) = colors.get_mut(index) {
                *slot = color;
            }
            state.dispatch(EditorEvent::PaletteColorsChanged(colors));
            state.set_status(format!("Set palette color {} to {color}", index + 1));
        }
        ColorPickerTarget::Border => {
            state.dispatch(EditorEvent::BorderColorChanged(color));
            state.set_status(format!("Set border color to {color}"));
        }
    }
}

/// Helper function to create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_cycle() {
        let mut picker = ColorPickerState::new(ColorPickerTarget::Border, RgbColor::new(0, 0, 0));
        picker.next_channel();
        assert_eq!(picker.active_channel, RgbChannel::Green);
        picker.previous_channel();
        picker.previous_channel();
        assert_eq!(picker.active_channel, RgbChannel::Blue);
    }

    #[test]
    fn test_values_saturate() {
        let mut picker =
            ColorPickerState::new(ColorPickerTarget::PaletteSlot(0), RgbColor::new(250, 5, 0));
        picker.increase_value(10);
        assert_eq!(picker.r, 255);
        picker.next_channel();
        picker.decrease_value(10);
        assert_eq!(picker.get_color(), RgbColor::new(255, 0, 0));
    }
}
