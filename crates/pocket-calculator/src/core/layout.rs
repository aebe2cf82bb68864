//! Keypad layout shared by the terminal and browser front ends
//!
//! ```text
//! [ C ] [ √ ] [ % ] [ //]
//! [ ÷ ] [ × ] [ ^ ] [ − ]
//! [ 7 ] [ 8 ] [ 9 ] [ + ]
//! [ 4 ] [ 5 ] [ 6 ] [ = ]
//! [ 1 ] [ 2 ] [ 3 ] [   ]
//! [    0    ] [ . ]
//! ```
//!
//! `=` spans two rows and `0` spans two columns.

use super::engine::Command;
use super::operations::Operator;

/// Number of grid rows
pub const GRID_ROWS: usize = 6;

/// Number of grid columns
pub const GRID_COLS: usize = 4;

/// One keypad button and the grid cells it covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonSpec {
    /// Text printed on the button
    pub label: &'static str,
    /// Command sent to the engine when pressed
    pub command: Command,
    /// Stable DOM element ID
    pub id: &'static str,
    /// Top row (0-indexed)
    pub row: usize,
    /// Left column (0-indexed)
    pub col: usize,
    /// Rows covered
    pub row_span: usize,
    /// Columns covered
    pub col_span: usize,
}

impl ButtonSpec {
    const fn new(
        label: &'static str,
        command: Command,
        id: &'static str,
        row: usize,
        col: usize,
    ) -> Self {
        Self {
            label,
            command,
            id,
            row,
            col,
            row_span: 1,
            col_span: 1,
        }
    }

    const fn op(operator: Operator, id: &'static str, row: usize, col: usize) -> Self {
        Self::new(operator.label(), Command::Operator(operator), id, row, col)
    }

    const fn digit(label: &'static str, d: u8, id: &'static str, row: usize, col: usize) -> Self {
        Self::new(label, Command::Digit(d), id, row, col)
    }

    const fn spanning(self, row_span: usize, col_span: usize) -> Self {
        Self {
            row_span,
            col_span,
            ..self
        }
    }

    /// Returns true if the button covers the grid cell
    #[must_use]
    pub const fn covers(&self, row: usize, col: usize) -> bool {
        row >= self.row
            && row < self.row + self.row_span
            && col >= self.col
            && col < self.col + self.col_span
    }
}

/// The full keypad in row-major order
pub static KEYPAD_LAYOUT: [ButtonSpec; 21] = [
    // Row 0: C √ % //
    ButtonSpec::new("C", Command::Clear, "btn-clear", 0, 0),
    ButtonSpec::new("√", Command::SquareRoot, "btn-sqrt", 0, 1),
    ButtonSpec::op(Operator::Modulo, "btn-mod", 0, 2),
    ButtonSpec::op(Operator::FloorDivide, "btn-floor-divide", 0, 3),
    // Row 1: ÷ × ^ −
    ButtonSpec::op(Operator::Divide, "btn-divide", 1, 0),
    ButtonSpec::op(Operator::Multiply, "btn-times", 1, 1),
    ButtonSpec::op(Operator::Power, "btn-power", 1, 2),
    ButtonSpec::op(Operator::Subtract, "btn-minus", 1, 3),
    // Row 2: 7 8 9 +
    ButtonSpec::digit("7", 7, "btn-7", 2, 0),
    ButtonSpec::digit("8", 8, "btn-8", 2, 1),
    ButtonSpec::digit("9", 9, "btn-9", 2, 2),
    ButtonSpec::op(Operator::Add, "btn-plus", 2, 3),
    // Row 3: 4 5 6 =
    ButtonSpec::digit("4", 4, "btn-4", 3, 0),
    ButtonSpec::digit("5", 5, "btn-5", 3, 1),
    ButtonSpec::digit("6", 6, "btn-6", 3, 2),
    ButtonSpec::new("=", Command::Equals, "btn-equals", 3, 3).spanning(2, 1),
    // Row 4: 1 2 3
    ButtonSpec::digit("1", 1, "btn-1", 4, 0),
    ButtonSpec::digit("2", 2, "btn-2", 4, 1),
    ButtonSpec::digit("3", 3, "btn-3", 4, 2),
    // Row 5: 0 .
    ButtonSpec::digit("0", 0, "btn-0", 5, 0).spanning(1, 2),
    ButtonSpec::new(".", Command::Decimal, "btn-decimal", 5, 2),
];

/// Finds the button covering a grid cell
#[must_use]
pub fn button_at(row: usize, col: usize) -> Option<&'static ButtonSpec> {
    KEYPAD_LAYOUT.iter().find(|b| b.covers(row, col))
}

/// Finds a button by DOM element ID
#[must_use]
pub fn button_by_id(id: &str) -> Option<&'static ButtonSpec> {
    KEYPAD_LAYOUT.iter().find(|b| b.id == id)
}

/// Finds the button that sends a command
#[must_use]
pub fn button_for_command(command: Command) -> Option<&'static ButtonSpec> {
    KEYPAD_LAYOUT.iter().find(|b| b.command == command)
}
