//! Keyboard input handling with 100% test coverage
//!
//! Probar: Error prevention - Type-safe key actions prevent invalid input

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::Command;

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Send a command to the calculator
    Command(Command),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    ///
    /// Release events are ignored so terminals that report them do not
    /// enter every key twice. Auto-repeat counts, like a held key would.
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        if kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        // Handle Ctrl+key combinations
        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        let command = match code {
            KeyCode::Char(c) => {
                let mut buf = [0u8; 4];
                Command::from_key(c.encode_utf8(&mut buf))
            }
            KeyCode::Enter => Command::from_key("Enter"),
            KeyCode::Esc => Command::from_key("Escape"),
            KeyCode::Backspace => Command::from_key("Backspace"),
            _ => None,
        };

        command.map_or(KeyAction::None, KeyAction::Command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operator;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_event_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    // ===== Constructor tests =====

    #[test]
    fn test_input_handler_new() {
        let handler = InputHandler::new();
        let _ = format!("{:?}", handler);
    }

    // ===== Character input tests =====

    #[test]
    fn test_handle_digit_keys() {
        let handler = InputHandler::new();
        for (d, c) in ('0'..='9').enumerate() {
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(c))),
                KeyAction::Command(Command::Digit(d as u8))
            );
        }
    }

    #[test]
    fn test_handle_operator_keys() {
        let handler = InputHandler::new();
        let cases = [
            ('+', Operator::Add),
            ('-', Operator::Subtract),
            ('*', Operator::Multiply),
            ('/', Operator::Divide),
            ('%', Operator::Modulo),
            ('^', Operator::Power),
        ];
        for (c, op) in cases {
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(c))),
                KeyAction::Command(Command::Operator(op))
            );
        }
    }

    #[test]
    fn test_handle_shifted_operator() {
        // Terminals report '+' and '^' with SHIFT on many layouts
        let handler = InputHandler::new();
        let event = KeyEvent::new(KeyCode::Char('+'), KeyModifiers::SHIFT);
        assert_eq!(
            handler.handle_key(event),
            KeyAction::Command(Command::Operator(Operator::Add))
        );
    }

    #[test]
    fn test_handle_decimal_point() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('.'))),
            KeyAction::Command(Command::Decimal)
        );
    }

    // ===== Action key tests =====

    #[test]
    fn test_handle_equals_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Enter)),
            KeyAction::Command(Command::Equals)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('='))),
            KeyAction::Command(Command::Equals)
        );
    }

    #[test]
    fn test_handle_clear_keys() {
        let handler = InputHandler::new();
        for code in [KeyCode::Esc, KeyCode::Char('c'), KeyCode::Char('C')] {
            assert_eq!(
                handler.handle_key(key_event(code)),
                KeyAction::Command(Command::Clear)
            );
        }
    }

    #[test]
    fn test_handle_backspace() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Backspace)),
            KeyAction::Command(Command::Backspace)
        );
    }

    #[test]
    fn test_handle_square_root_keys() {
        let handler = InputHandler::new();
        for c in ['r', 'R'] {
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(c))),
                KeyAction::Command(Command::SquareRoot)
            );
        }
    }

    // ===== Ctrl key tests =====

    #[test]
    fn test_handle_ctrl_c() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('c'))),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_handle_ctrl_q() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('q'))),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_handle_ctrl_unknown() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('r'))),
            KeyAction::None
        );
    }

    // ===== Ignored input tests =====

    #[test]
    fn test_handle_unknown_keys() {
        let handler = InputHandler::new();
        for code in [
            KeyCode::F(1),
            KeyCode::Tab,
            KeyCode::Left,
            KeyCode::Delete,
            KeyCode::Char('x'),
            KeyCode::Char('('),
            KeyCode::Char('q'),
        ] {
            assert_eq!(handler.handle_key(key_event(code)), KeyAction::None);
        }
    }

    #[test]
    fn test_release_events_ignored() {
        let handler = InputHandler::new();
        let mut event = key_event(KeyCode::Char('5'));
        event.kind = KeyEventKind::Release;
        assert_eq!(handler.handle_key(event), KeyAction::None);
    }

    #[test]
    fn test_repeat_events_count() {
        let handler = InputHandler::new();
        let mut event = key_event(KeyCode::Char('5'));
        event.kind = KeyEventKind::Repeat;
        assert_eq!(
            handler.handle_key(event),
            KeyAction::Command(Command::Digit(5))
        );
    }
}
