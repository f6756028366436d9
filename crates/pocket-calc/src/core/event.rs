//! Button events accepted by the engine

use std::fmt;
use std::str::FromStr;

use crate::core::{CalcError, Operator};

/// A single decimal digit, 0 through 9
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    /// All ten digits in ascending order
    pub const ALL: [Self; 10] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
    ];

    /// Creates a digit, or `None` when `value > 9`
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Returns the numeric value
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the ASCII character for this digit
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'0' + self.0) as char
    }
}

impl TryFrom<u8> for Digit {
    type Error = CalcError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(CalcError::InvalidDigit(u32::from(value)))
    }
}

impl TryFrom<char> for Digit {
    type Error = CalcError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.to_digit(10)
            .map(|d| Self(d as u8))
            .ok_or(CalcError::UnknownButton(c.to_string()))
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One button activation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalcEvent {
    /// A digit button (0-9)
    Digit(Digit),
    /// The decimal point button
    DecimalPoint,
    /// One of the four operator buttons
    Operator(Operator),
    /// The equals button
    Equals,
    /// The all-clear button (AC)
    Clear,
    /// The backspace button
    Backspace,
    /// The sign toggle button (+/-)
    ToggleSign,
    /// The percent button
    Percent,
}

impl CalcEvent {
    /// Label printed on the keypad button for this event
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::DecimalPoint => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "AC".to_string(),
            Self::Backspace => "⌫".to_string(),
            Self::ToggleSign => "+/-".to_string(),
            Self::Percent => "%".to_string(),
        }
    }
}

impl fmt::Display for CalcEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl From<Digit> for CalcEvent {
    fn from(d: Digit) -> Self {
        Self::Digit(d)
    }
}

impl From<Operator> for CalcEvent {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}

impl FromStr for CalcEvent {
    type Err = CalcError;

    /// Parses a button label; surrounding whitespace is ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        let mut chars = label.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Ok(d) = Digit::try_from(c) {
                return Ok(Self::Digit(d));
            }
        }

        match label {
            "." => Ok(Self::DecimalPoint),
            "=" => Ok(Self::Equals),
            "AC" | "C" => Ok(Self::Clear),
            "⌫" | "DEL" => Ok(Self::Backspace),
            "+/-" | "±" => Ok(Self::ToggleSign),
            "%" => Ok(Self::Percent),
            other => other
                .parse::<Operator>()
                .map(Self::Operator)
                .map_err(|_| CalcError::UnknownButton(other.to_string())),
        }
    }
}
