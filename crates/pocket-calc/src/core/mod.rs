//! Calculator engine: typed button events and the state they drive.
//!
//! Every mutation goes through a pure reducer, so the whole engine can be
//! exercised without any rendering layer attached.

mod event;
pub mod number;
mod operator;
mod state;

pub use event::{CalcEvent, Digit};
pub use operator::Operator;
pub use state::{transition, CalcState, PendingOperation};

use thiserror::Error;

/// Result type for calculator input handling
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors raised while turning outside input into calculator events.
///
/// The engine itself is total; these only surface at the edges where a label,
/// digit or symbol arrives as untyped data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// A button label that no keypad button carries
    #[error("Unknown button: {0:?}")]
    UnknownButton(String),
    /// A digit value outside 0-9
    #[error("Invalid digit: {0}")]
    InvalidDigit(u32),
    /// A symbol that is not one of the four operators
    #[error("Unknown operator: {0:?}")]
    UnknownOperator(String),
}
