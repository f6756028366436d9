//! Command runners

use std::io::{self, IsTerminal, Write};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pocket_calc::core::{transition, CalcEvent, CalcState};
use pocket_calc::tui::{render, CalculatorApp, InputHandler};
use pocket_calc::view::DisplayView;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};

use crate::commands::PressArgs;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::{render_json, render_steps, render_view, PressReport, Step};

/// Applies `args.labels` to a fresh calculator and writes the result to `out`
///
/// Every label is checked before any output is written.
pub fn run_press<W: Write>(config: &CliConfig, args: &PressArgs, out: &mut W) -> CliResult<()> {
    let events = args
        .labels
        .iter()
        .map(|label| label.parse::<CalcEvent>())
        .collect::<Result<Vec<_>, _>>()?;

    let mut state = CalcState::new();
    let mut steps = Vec::with_capacity(events.len());
    for (label, event) in args.labels.iter().zip(events) {
        state = transition(&state, event);
        steps.push(Step {
            label: label.clone(),
            view: DisplayView::from_state(&state),
        });
    }
    tracing::debug!(presses = steps.len(), display = state.display(), "press finished");

    let use_color = config.color.should_color();
    let view = DisplayView::from_state(&state);
    if args.json {
        let report = PressReport {
            labels: args.labels.clone(),
            state,
            view,
            steps: args.steps.then_some(steps),
        };
        writeln!(out, "{}", render_json(&report)?)?;
    } else if args.steps {
        writeln!(out, "{}", render_steps(&steps, use_color))?;
    } else {
        writeln!(out, "{}", render_view(&view, use_color))?;
    }
    Ok(())
}

/// Runs the interactive calculator on the real terminal
///
/// The terminal is restored even when the event loop fails.
pub fn run_tui() -> CliResult<()> {
    let mut stdout = io::stdout();
    if !stdout.is_terminal() {
        return Err(CliError::invalid_argument(
            "the interactive calculator needs a terminal; use `press` for scripted input",
        ));
    }

    enable_raw_mode()?;
    if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        restore_terminal(&mut stdout);
        return Err(e.into());
    }
    let mut terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(terminal) => terminal,
        Err(e) => {
            restore_terminal(&mut io::stdout());
            return Err(e.into());
        }
    };

    tracing::info!("interactive calculator started");
    let result = run_app(&mut terminal, event::read);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    tracing::info!("interactive calculator closed");

    result
}

/// Best-effort undo of raw mode, the alternate screen and mouse capture
fn restore_terminal<W: Write>(out: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(out, LeaveAlternateScreen, DisableMouseCapture);
}

/// Draw/read loop, generic over the backend and event source
pub fn run_app<B, F>(terminal: &mut Terminal<B>, mut next_event: F) -> CliResult<()>
where
    B: Backend,
    F: FnMut() -> io::Result<Event>,
{
    let mut app = CalculatorApp::new();
    let input_handler = InputHandler::new();

    loop {
        let mut area = Rect::default();
        terminal.draw(|frame| {
            area = frame.area();
            render(&app, frame);
        })?;

        let action = input_handler.handle_event(&next_event()?);
        app.handle_action(action, area);

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
