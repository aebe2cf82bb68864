//! Numerical Keypad for TUI Calculator
//!
//! Probar: Visual feedback - Visual buttons make calculator state obvious
//!
//! The keypad can be:
//! - Clicked with the mouse (hit testing honors row/column spans)
//! - Highlighted when the corresponding key is pressed

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::layout::{ButtonSpec, GRID_COLS, GRID_ROWS, KEYPAD_LAYOUT};
use crate::core::Command;

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// Layout entry for this button
    pub def: &'static ButtonSpec,
    /// Whether the button is currently pressed/highlighted
    pub pressed: bool,
}

impl KeypadButton {
    /// Returns the command this button sends
    #[must_use]
    pub fn command(&self) -> Command {
        self.def.command
    }

    /// Returns the button label
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.def.label
    }

    fn style(&self) -> Style {
        if self.pressed {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }
        match self.def.command {
            Command::Digit(_) | Command::Decimal => Style::default().fg(Color::White),
            Command::Operator(_) | Command::SquareRoot => Style::default().fg(Color::Yellow),
            Command::Equals => Style::default().fg(Color::Green),
            Command::Clear => Style::default().fg(Color::Red),
            Command::Backspace => Style::default().fg(Color::Cyan),
        }
    }
}

/// The keypad grid with press highlighting
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard calculator keypad
    #[must_use]
    pub fn new() -> Self {
        Self {
            buttons: KEYPAD_LAYOUT
                .iter()
                .map(|def| KeypadButton {
                    def,
                    pressed: false,
                })
                .collect(),
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (GRID_ROWS, GRID_COLS)
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Gets the button covering a grid cell
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.def.covers(row, col))
    }

    /// Returns the currently highlighted button, if any
    #[must_use]
    pub fn pressed_button(&self) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.pressed)
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.pressed = false;
        }
    }

    /// Highlights the button that sends `command`.
    ///
    /// Commands without a button (backspace) just clear the highlight.
    pub fn highlight(&mut self, command: Command) {
        self.release_all();
        if let Some(btn) = self.buttons.iter_mut().find(|b| b.def.command == command) {
            btn.pressed = true;
        }
    }

    /// Converts a click position to the command of the button under it
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<Command> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // Account for border (1 char on each side)
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let (btn_width, btn_height) = cell_size(area);
        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = ((rel_x - 1) / btn_width) as usize;
        let row = ((rel_y - 1) / btn_height) as usize;

        self.get_button_at(row, col).map(KeypadButton::command)
    }
}

/// Size of one grid cell inside the bordered keypad area
fn cell_size(area: Rect) -> (u16, u16) {
    (
        area.width.saturating_sub(2) / GRID_COLS as u16,
        area.height.saturating_sub(2) / GRID_ROWS as u16,
    )
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let (btn_width, btn_height) = cell_size(area);
        if btn_width < 4 || btn_height == 0 {
            return; // Too small to render
        }

        let inner_x = area.x + 1;
        let inner_y = area.y + 1;

        for btn in self.keypad.buttons() {
            let def = btn.def;
            let x = inner_x + def.col as u16 * btn_width;
            let y = inner_y + def.row as u16 * btn_height;
            let width = btn_width * def.col_span as u16;
            let height = btn_height * def.row_span as u16;

            // Label centered in the (possibly spanning) cell
            let label = format!("[{}]", def.label);
            let label_width = label.chars().count() as u16;
            let label_x = x + width.saturating_sub(label_width) / 2;
            let label_y = y + height / 2;

            buf.set_span(label_x, label_y, &Span::styled(label, btn.style()), width);
        }
    }
}
