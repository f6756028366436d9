//! Pocket Calc: a four-function desk calculator for the terminal
//!
//! ## Usage
//!
//! ```bash
//! pocket-calc                          # Interactive calculator
//! pocket-calc press 1 2 × 3 =          # Prints 36
//! pocket-calc press --steps 5 + 3 =    # Display after every press
//! pocket-calc -vv --log-file calc.log  # Trace transitions to a file
//! ```

use std::io;
use std::process::ExitCode;

use clap::Parser;
use pocket_calc_cli::{
    init_logging, run_press, run_tui, Cli, CliConfig, CliResult, Commands, Verbosity,
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli);

    let interactive = matches!(cli.command, None | Some(Commands::Tui));
    if let Some(log_config) = config.log_config(interactive) {
        init_logging(&log_config)?;
    }

    match cli.command {
        None | Some(Commands::Tui) => run_tui(),
        Some(Commands::Press(args)) => run_press(&config, &args, &mut io::stdout().lock()),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    CliConfig::new()
        .with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose))
        .with_color(cli.color.into())
        .with_log_file(cli.log_file.clone())
        .with_log_format(cli.log_format.into())
}
