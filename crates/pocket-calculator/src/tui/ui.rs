//! TUI rendering
//!
//! Probar: Visual feedback makes state visible

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;

/// Width of the help sidebar
const HELP_WIDTH: u16 = 26;

/// Height of the display panel (two text lines plus borders)
const DISPLAY_HEIGHT: u16 = 4;

/// Screen regions of the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculatorLayout {
    /// Preview and display lines
    pub display: Rect,
    /// Button grid
    pub keypad: Rect,
    /// Help sidebar, when shown
    pub help: Option<Rect>,
}

/// Splits the frame into calculator regions.
///
/// Rendering and mouse hit testing both go through here so that a click
/// always lands on the button that was drawn.
#[must_use]
pub fn layout(area: Rect, show_help: bool) -> CalculatorLayout {
    let inner = area.inner(Margin::new(1, 1));

    let (main, help) = if show_help {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(24), Constraint::Length(HELP_WIDTH)])
            .split(inner);
        (chunks[0], Some(chunks[1]))
    } else {
        (inner, None)
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(DISPLAY_HEIGHT), Constraint::Min(8)])
        .split(main);

    CalculatorLayout {
        display: chunks[0],
        keypad: chunks[1],
        help,
    }
}

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    /// Renders the preview line above the display line, both right-aligned
    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(Span::styled(
                self.app.preview(),
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                self.app.display(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(" Display ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(area, buf);
    }

    fn render_help_sidebar(&self, area: Rect, buf: &mut Buffer) {
        let shortcuts: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>7}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        List::new(shortcuts)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(DEMO_TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let regions = layout(area, self.app.show_help());
        self.render_display(regions.display, buf);
        KeypadWidget::new(self.app.keypad()).render(regions.keypad, buf);
        if let Some(help) = regions.help {
            self.render_help_sidebar(help, buf);
        }
    }
}

/// Title drawn on the outer border
pub const DEMO_TITLE: &str = " Pocket Calculator ";

/// Keyboard shortcuts shown in the sidebar
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9", "Digits"),
    (".", "Decimal point"),
    ("+ - * /", "Operators"),
    ("% ^", "Modulo, power"),
    ("Enter =", "Equals"),
    ("Esc c", "Clear"),
    ("r", "Square root"),
    ("Bksp", "Delete digit"),
    ("Click", "Press button"),
    ("Ctrl+C", "Quit"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Command, Operator};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(app: &CalculatorApp, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        buf_to_string(terminal.backend().buffer())
    }

    fn buf_to_string(buffer: &Buffer) -> String {
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    // ===== Layout tests =====

    #[test]
    fn test_layout_with_help() {
        let regions = layout(Rect::new(0, 0, 80, 24), true);
        let help = regions.help.unwrap();
        assert_eq!(help.width, HELP_WIDTH);
        assert_eq!(regions.display.height, DISPLAY_HEIGHT);
        assert_eq!(regions.keypad.y, regions.display.y + DISPLAY_HEIGHT);
        assert!(regions.keypad.x + regions.keypad.width <= help.x);
    }

    #[test]
    fn test_layout_without_help() {
        let regions = layout(Rect::new(0, 0, 40, 24), false);
        assert!(regions.help.is_none());
        assert_eq!(regions.display, Rect::new(1, 1, 38, 4));
        assert_eq!(regions.keypad, Rect::new(1, 5, 38, 18));
    }

    // ===== Render tests =====

    #[test]
    fn test_render_initial_state() {
        let app = CalculatorApp::new();
        let content = draw(&app, 80, 24);
        assert!(content.contains("Pocket Calculator"));
        assert!(content.contains("Display"));
        assert!(content.contains("Keypad"));
        assert!(content.contains('0'));
    }

    #[test]
    fn test_render_preview_and_display() {
        let mut app = CalculatorApp::new();
        for command in [
            Command::Digit(1),
            Command::Digit(2),
            Command::Operator(Operator::Multiply),
            Command::Digit(7),
        ] {
            app.press(command).unwrap();
        }
        let content = draw(&app, 80, 24);
        assert!(content.contains("12 *"));
        assert!(content.contains('7'));
    }

    #[test]
    fn test_render_display_right_aligned() {
        let mut app = CalculatorApp::new();
        app.press(Command::Digit(5)).unwrap();
        let ui = CalculatorUI::new(&app);
        let area = Rect::new(0, 0, 20, 4);
        let mut buf = Buffer::empty(area);
        ui.render_display(area, &mut buf);

        // Last column inside the right border, second text line
        assert_eq!(buf[(18, 2)].symbol(), "5");
    }

    #[test]
    fn test_render_error_display() {
        let mut app = CalculatorApp::new();
        for command in [
            Command::Digit(1),
            Command::Operator(Operator::Divide),
            Command::Digit(0),
            Command::Equals,
        ] {
            app.press(command).unwrap();
        }
        assert!(draw(&app, 80, 24).contains("Infinity"));
    }

    #[test]
    fn test_render_help_sidebar() {
        let app = CalculatorApp::new();
        let content = draw(&app, 80, 24);
        assert!(content.contains("Help"));
        assert!(content.contains("Enter"));
        assert!(content.contains("Square root"));
    }

    #[test]
    fn test_render_without_help() {
        let app = CalculatorApp::new().with_help(false);
        let content = draw(&app, 80, 24);
        assert!(!content.contains("Help"));
        assert!(content.contains("[7]"));
    }

    #[test]
    fn test_render_small_terminal() {
        let app = CalculatorApp::new();
        let _ = draw(&app, 20, 10);
    }

    #[test]
    fn test_render_highlighted_button() {
        let mut app = CalculatorApp::new().with_help(false);
        app.press(Command::Digit(9)).unwrap();
        let area = Rect::new(0, 0, 40, 24);
        let mut buf = Buffer::empty(area);
        CalculatorUI::new(&app).render(area, &mut buf);

        let highlighted = buf
            .content()
            .iter()
            .filter(|c| c.bg == Color::Yellow)
            .map(|c| c.symbol())
            .collect::<String>();
        assert_eq!(highlighted, "[9]");
    }

    // ===== Help constant tests =====

    #[test]
    fn test_help_shortcuts_has_descriptions() {
        for (key, desc) in HELP_SHORTCUTS {
            assert!(!key.is_empty(), "Key should not be empty");
            assert!(!desc.is_empty(), "Description should not be empty");
        }
    }

    #[test]
    fn test_help_shortcuts_contains_essential_keys() {
        let keys: Vec<&str> = HELP_SHORTCUTS.iter().map(|(k, _)| *k).collect();
        assert!(keys.contains(&"Enter ="));
        assert!(keys.contains(&"Esc c"));
        assert!(keys.contains(&"Ctrl+C"));
    }
}
