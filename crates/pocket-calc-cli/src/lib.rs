//! Pocket Calc CLI Library
//!
//! Terminal front end for the `pocket-calc` engine: an interactive,
//! mouse-driven calculator (`tui`) and a headless `press` command that
//! applies button labels and prints the display.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::format_push_string)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod logging;
mod output;
mod runner;

pub use commands::{Cli, ColorArg, Commands, LogFormatArg, PressArgs};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use logging::{init_logging, LogConfig, LogFormat, LOG_ENV_VAR};
pub use output::{render_json, render_steps, render_view, PressReport, Step};
pub use runner::{run_app, run_press, run_tui};
