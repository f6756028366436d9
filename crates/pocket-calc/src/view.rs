//! Text a front end shows for a given state

use serde::{Deserialize, Serialize};

use crate::core::{CalcState, Operator};

/// What the display panel shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayView {
    /// Main display line
    pub primary: String,
    /// `"<previous value> <operator>"` while an operation is pending
    pub secondary: Option<String>,
    /// Operator whose button is drawn as selected
    pub active_operator: Option<Operator>,
}

impl DisplayView {
    /// Builds the view for `state`
    #[must_use]
    pub fn from_state(state: &CalcState) -> Self {
        Self {
            primary: state.display().to_string(),
            secondary: state
                .pending()
                .map(|p| format!("{} {}", p.operand, p.operator)),
            active_operator: state.operation(),
        }
    }

    /// Secondary line, empty when nothing is pending
    #[must_use]
    pub fn secondary_text(&self) -> &str {
        self.secondary.as_deref().unwrap_or("")
    }
}

impl From<&CalcState> for DisplayView {
    fn from(state: &CalcState) -> Self {
        Self::from_state(state)
    }
}
