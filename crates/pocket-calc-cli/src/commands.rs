//! CLI command definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::ColorChoice;
use crate::logging::LogFormat;

/// Pocket Calc: a four-function desk calculator for the terminal
#[derive(Parser, Debug)]
#[command(name = "pocket-calc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (only errors are logged)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Append logs to this file instead of stderr
    #[arg(long, value_name = "PATH", env = "POCKET_CALC_LOG_FILE", global = true)]
    pub log_file: Option<PathBuf>,

    /// Log line format
    #[arg(long, default_value = "pretty", global = true)]
    pub log_format: LogFormatArg,

    /// Subcommand to run (defaults to the interactive calculator)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive calculator (click the keys; q quits)
    Tui,

    /// Press buttons by label and print the display
    Press(PressArgs),
}

/// Arguments for the press command
#[derive(Parser, Debug)]
pub struct PressArgs {
    /// Button labels in order, one button each (`1 2` types 12):
    /// 0-9 . + - × ÷ = AC +/- % ⌫ (ASCII aliases: * x / C DEL ±)
    #[arg(required = true, value_name = "LABEL")]
    pub labels: Vec<String>,

    /// Print the display after every press
    #[arg(long)]
    pub steps: bool,

    /// Print the final state as JSON
    #[arg(long)]
    pub json: bool,
}

/// Color argument for CLI
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum ColorArg {
    /// Auto-detect
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

/// Log format argument for CLI
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum LogFormatArg {
    /// Multi-line, human readable
    #[default]
    Pretty,
    /// One line per event
    Compact,
    /// JSON lines
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Compact => Self::Compact,
            LogFormatArg::Json => Self::Json,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("pocket-calc").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_verify() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand() {
        let cli = parse(&[]);
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_tui_subcommand() {
        assert!(matches!(parse(&["tui"]).command, Some(Commands::Tui)));
    }

    #[test]
    fn test_press_labels() {
        let cli = parse(&["press", "5", "-", "3", "="]);
        let Some(Commands::Press(args)) = cli.command else {
            panic!("expected press");
        };
        assert_eq!(args.labels, vec!["5", "-", "3", "="]);
        assert!(!args.steps);
        assert!(!args.json);
    }

    #[test]
    fn test_press_flags() {
        let cli = parse(&["press", "--steps", "--json", "1"]);
        let Some(Commands::Press(args)) = cli.command else {
            panic!("expected press");
        };
        assert!(args.steps);
        assert!(args.json);
    }

    #[test]
    fn test_press_requires_labels() {
        let result = Cli::try_parse_from(["pocket-calc", "press"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&["press", "1", "-vv", "--color", "never", "--log-format", "json"]);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.color, ColorArg::Never));
        assert!(matches!(cli.log_format, LogFormatArg::Json));
    }

    #[test]
    fn test_log_file_flag() {
        let cli = parse(&["--log-file", "calc.log", "tui"]);
        assert_eq!(cli.log_file, Some(PathBuf::from("calc.log")));
    }

    #[test]
    fn test_color_arg_conversion() {
        assert_eq!(ColorChoice::from(ColorArg::Auto), ColorChoice::Auto);
        assert_eq!(ColorChoice::from(ColorArg::Always), ColorChoice::Always);
        assert_eq!(ColorChoice::from(ColorArg::Never), ColorChoice::Never);
    }

    #[test]
    fn test_log_format_conversion() {
        assert_eq!(LogFormat::from(LogFormatArg::Pretty), LogFormat::Pretty);
        assert_eq!(LogFormat::from(LogFormatArg::Compact), LogFormat::Compact);
        assert_eq!(LogFormat::from(LogFormatArg::Json), LogFormat::Json);
    }
}
