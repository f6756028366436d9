//! Output formatting for headless runs

use console::style;
use pocket_calc::core::CalcState;
use pocket_calc::view::DisplayView;
use serde::Serialize;

/// Display after one press
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Label as typed
    pub label: String,
    /// View after the press
    pub view: DisplayView,
}

/// Everything a `press` run produced
#[derive(Debug, Clone, Serialize)]
pub struct PressReport {
    /// Labels in the order pressed
    pub labels: Vec<String>,
    /// Final engine state
    pub state: CalcState,
    /// Final view
    pub view: DisplayView,
    /// Per-press views, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<Step>>,
}

/// Renders the display the way the calculator shows it: secondary line
/// (if any) above the primary value
#[must_use]
pub fn render_view(view: &DisplayView, use_color: bool) -> String {
    let primary = style(&view.primary).bold().force_styling(use_color);
    match &view.secondary {
        Some(secondary) => {
            let secondary = style(secondary).dim().force_styling(use_color);
            format!("{secondary}\n{primary}")
        }
        None => primary.to_string(),
    }
}

/// Renders one line per step: `label  →  display`
#[must_use]
pub fn render_steps(steps: &[Step], use_color: bool) -> String {
    let width = steps
        .iter()
        .map(|s| s.label.chars().count())
        .max()
        .unwrap_or(0);

    steps
        .iter()
        .map(|step| {
            let pad = " ".repeat(width - step.label.chars().count());
            let label = style(&step.label).cyan().force_styling(use_color);
            let mut line = format!("{label}{pad}  →  {}", step.view.primary);
            if let Some(secondary) = &step.view.secondary {
                let pending = style(format!("({secondary})")).dim().force_styling(use_color);
                line.push_str(&format!("  {pending}"));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the report as pretty JSON
pub fn render_json(report: &PressReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
