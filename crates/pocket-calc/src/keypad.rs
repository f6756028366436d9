//! Shared keypad layout
//!
//! Both front ends draw the same 5x4 grid:
//!
//! ```text
//! [ AC ] [+/-] [ % ] [ ÷ ]
//! [ 7  ] [ 8 ] [ 9 ] [ × ]
//! [ 4  ] [ 5 ] [ 6 ] [ - ]
//! [ 1  ] [ 2 ] [ 3 ] [ + ]
//! [ 0  ] [ . ] [ ⌫ ] [ = ]
//! ```

use crate::core::{CalcEvent, Digit, Operator};

/// Visual category of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonKind {
    /// Digits and the decimal point
    Digit,
    /// Sign toggle, percent and backspace
    Function,
    /// The four operators
    Operator,
    /// The equals button
    Equals,
    /// The all-clear button
    Clear,
}

impl ButtonKind {
    /// CSS class used by the browser front end
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Digit => "btn-digit",
            Self::Function => "btn-function",
            Self::Operator => "btn-operator",
            Self::Equals => "btn-equals",
            Self::Clear => "btn-clear",
        }
    }
}

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// Event sent when the button is activated
    pub event: CalcEvent,
    /// Text printed on the button
    pub label: String,
    /// Element id in the browser front end
    pub id: String,
    /// Visual category
    pub kind: ButtonKind,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButton {
    /// Creates the button for `event` at the given grid cell
    #[must_use]
    pub fn new(event: CalcEvent, row: usize, col: usize) -> Self {
        let (id, kind) = match event {
            CalcEvent::Digit(d) => (format!("btn-{d}"), ButtonKind::Digit),
            CalcEvent::DecimalPoint => ("btn-decimal".to_string(), ButtonKind::Digit),
            CalcEvent::Operator(op) => (format!("btn-{}", op.name()), ButtonKind::Operator),
            CalcEvent::Equals => ("btn-equals".to_string(), ButtonKind::Equals),
            CalcEvent::Clear => ("btn-clear".to_string(), ButtonKind::Clear),
            CalcEvent::Backspace => ("btn-backspace".to_string(), ButtonKind::Function),
            CalcEvent::ToggleSign => ("btn-sign".to_string(), ButtonKind::Function),
            CalcEvent::Percent => ("btn-percent".to_string(), ButtonKind::Function),
        };
        Self {
            event,
            label: event.label(),
            id,
            kind,
            row,
            col,
        }
    }

    /// The operator this button selects, if it is an operator button
    #[must_use]
    pub const fn operator(&self) -> Option<Operator> {
        match self.event {
            CalcEvent::Operator(op) => Some(op),
            _ => None,
        }
    }
}

/// The keypad layout
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order
    buttons: Vec<KeypadButton>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Number of grid rows
    pub const ROWS: usize = 5;
    /// Number of grid columns
    pub const COLS: usize = 4;

    /// Creates the standard layout
    #[must_use]
    pub fn new() -> Self {
        let digit = |v: usize| CalcEvent::Digit(Digit::ALL[v]);
        let layout = [
            [
                CalcEvent::Clear,
                CalcEvent::ToggleSign,
                CalcEvent::Percent,
                CalcEvent::Operator(Operator::Divide),
            ],
            [digit(7), digit(8), digit(9), CalcEvent::Operator(Operator::Multiply)],
            [digit(4), digit(5), digit(6), CalcEvent::Operator(Operator::Subtract)],
            [digit(1), digit(2), digit(3), CalcEvent::Operator(Operator::Add)],
            [
                digit(0),
                CalcEvent::DecimalPoint,
                CalcEvent::Backspace,
                CalcEvent::Equals,
            ],
        ];

        let buttons = layout
            .iter()
            .enumerate()
            .flat_map(|(row, events)| {
                events
                    .iter()
                    .enumerate()
                    .map(move |(col, &event)| KeypadButton::new(event, row, col))
            })
            .collect();

        Self {
            buttons,
            rows: Self::ROWS,
            cols: Self::COLS,
        }
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Finds a button by its element id
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds the index of the button that sends `event`
    #[must_use]
    pub fn position_of(&self, event: CalcEvent) -> Option<usize> {
        self.buttons.iter().position(|b| b.event == event)
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }
}
