//! The pqs Command-Line Interface.
//!
//! Collects inputs, classifies them in order, and renders the results.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process;

use clap::Parser;
use log::{debug, info, warn};
use termcolor::StandardStream;

use crate::cli::args::{misplaced_options, Config, Format, PqsArgs};
use crate::classifier::{classify_all, ClassificationResult};
use crate::errors::PqError;
use crate::syntax::diagnose;

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    let config = Config::from(PqsArgs::parse());
    init_logging(&config);

    if let Err(e) = execute(&config) {
        eprintln!("{:?}", miette::Report::new(e));
        process::exit(1);
    }
}

/// Classifies every configured input and writes the rendered results to stdout.
pub fn execute(config: &Config) -> Result<(), PqError> {
    debug!("configuration: {:?}", config);
    for flag in misplaced_options(&config.inputs) {
        warn!("input `{}` looks like an option; options must come before the inputs", flag);
    }

    let inputs = collect_inputs(config)?;
    if inputs.is_empty() {
        warn!("no inputs given, nothing to classify");
    }
    info!("classifying {} input(s) with the {:?} grammar", inputs.len(), config.grammar);

    let results = classify_all(&inputs, config.grammar);

    match config.format {
        Format::Table => {
            let mut stdout = StandardStream::stdout(config.color);
            output::render_table(&results, &mut stdout)?;
        }
        Format::Json => {
            let stdout = std::io::stdout();
            output::render_json(&results, &mut stdout.lock())?;
        }
    }

    if config.explain {
        explain(&results, config)?;
    }

    Ok(())
}

/// Positional inputs first, then the lines of the input file, if any.
pub fn collect_inputs(config: &Config) -> Result<Vec<String>, PqError> {
    let mut inputs = config.inputs.clone();
    if let Some(path) = &config.file {
        let from_file = read_input_file(path)?;
        debug!("read {} input(s) from {}", from_file.len(), path.display());
        inputs.extend(from_file);
    }
    Ok(inputs)
}

/// Reads one input per line. A trailing newline does not add an empty input.
pub fn read_input_file(path: &Path) -> Result<Vec<String>, PqError> {
    let content = fs::read_to_string(path).map_err(|source| PqError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(content
        .lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect())
}

// ============================================================================
// PRIVATE HELPERS
// ============================================================================

fn init_logging(config: &Config) {
    if let Some(level) = config.log_level {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.as_str()))
            .init();
    }
}

fn explain(results: &[ClassificationResult], config: &Config) -> Result<(), PqError> {
    let stderr = std::io::stderr();
    let mut stderr = stderr.lock();
    for (index, result) in results.iter().enumerate().filter(|(_, r)| !r.valid) {
        if let Some(diagnostic) = diagnose(&result.input, config.grammar) {
            writeln!(stderr, "input {}:", index + 1)?;
            writeln!(stderr, "{:?}", miette::Report::new(diagnostic))?;
        }
    }
    Ok(())
}
