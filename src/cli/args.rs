//! Defines the command-line arguments for the pqs CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure. `Config` is the
//! resolved view the rest of the CLI works from.

use clap::{CommandFactory, Parser, ValueEnum};
use std::path::PathBuf;
use termcolor::ColorChoice;

use crate::classifier::Grammar;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "pqs",
    version,
    about = "Decides whether strings are axioms or theorems of the pq-system.",
    allow_hyphen_values = true
)]
pub struct PqsArgs {
    /// Strings to classify, e.g. `--p-q---`.
    ///
    /// Options must come before the inputs: anything after the first input,
    /// `--strict` included, is classified as an input.
    pub inputs: Vec<String>,

    /// Read further inputs from a file, one per line.
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Table)]
    pub format: Format,

    /// When to colour the table.
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Require exactly one `p` followed by one `q` and use the textbook axiom schema.
    #[arg(long)]
    pub strict: bool,

    /// Explain every invalid input on stderr.
    #[arg(long)]
    pub explain: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Disable logging.
    #[arg(long)]
    pub quiet: bool,
}

/// Output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Table,
    Json,
}

/// Colour modes, mirroring `termcolor::ColorChoice`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl From<ColorMode> for ColorChoice {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Auto => ColorChoice::Auto,
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
        }
    }
}

/// Resolved run configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub inputs: Vec<String>,
    pub file: Option<PathBuf>,
    pub format: Format,
    pub color: ColorChoice,
    pub grammar: Grammar,
    pub explain: bool,
    /// `None` disables logging.
    pub log_level: Option<log::LevelFilter>,
}

impl From<PqsArgs> for Config {
    fn from(args: PqsArgs) -> Self {
        let log_level = if args.quiet {
            None
        } else {
            Some(match args.verbose {
                0 => log::LevelFilter::Warn,
                1 => log::LevelFilter::Info,
                2 => log::LevelFilter::Debug,
                _ => log::LevelFilter::Trace,
            })
        };

        Self {
            inputs: args.inputs,
            file: args.file,
            format: args.format,
            color: args.color.into(),
            grammar: if args.strict {
                Grammar::Strict
            } else {
                Grammar::Permissive
            },
            explain: args.explain,
            log_level,
        }
    }
}

/// Inputs that spell one of the long options, as happens when an option is
/// written after the inputs.
pub fn misplaced_options(inputs: &[String]) -> Vec<&str> {
    let flags: Vec<String> = PqsArgs::command()
        .get_arguments()
        .filter_map(|arg| arg.get_long())
        .map(|long| format!("--{}", long))
        .collect();

    inputs
        .iter()
        .map(String::as_str)
        .filter(|input| {
            flags.iter().any(|flag| {
                input
                    .strip_prefix(flag.as_str())
                    .is_some_and(|rest| rest.is_empty() || rest.starts_with('='))
            })
        })
        .collect()
}
