//! vscan-html-comment-analyzer: parses HTML files and reports sensitive
//! information in comments.
//!
//! The main entry point parses command-line arguments, sets up logging and
//! runs the analysis pipeline once.

use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Result};
use clap::{ArgAction, Parser};
use log::{debug, error};

use vscan_html_comment_analyzer::app::{self, RunOutcome};
use vscan_html_comment_analyzer::config::{load_settings, AnalyzerConfig, LogConfig, Settings};

/// Command line argument structure
#[derive(Parser, Debug)]
#[command(
    name = "vscan-html-comment-analyzer",
    version,
    about = "Parses HTML files and reports sensitive information in comments."
)]
struct Args {
    /// The HTML file to analyze or a URL to fetch the HTML from
    input: String,

    /// Output file to save the results (optional)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Enable verbose output (debug logging)
    #[arg(short = 'v', long = "verbose", action = ArgAction::SetTrue)]
    verbose: bool,

    /// Path to a JSON settings file
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Write log lines to this file instead of stderr
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Exit with status 1 when the input cannot be retrieved or the report cannot be written
    #[arg(long = "strict", action = ArgAction::SetTrue)]
    strict: bool,
}

impl Args {
    fn cli_settings(&self) -> Settings {
        Settings {
            output: self.output.clone(),
            verbose: self.verbose,
            log_file: self.log_file.clone(),
            strict: self.strict,
        }
    }
}

/// Main entry point function
fn main() -> ExitCode {
    let args = Args::parse();

    // Settings file errors are reported once logging is up
    let (file_settings, settings_error) = match &args.config {
        Some(path) => match load_settings(path) {
            Ok(settings) => (settings, None),
            Err(e) => (Settings::default(), Some(e)),
        },
        None => (Settings::default(), None),
    };

    let config = AnalyzerConfig::from_settings(
        args.input.clone(),
        file_settings.overlay(args.cli_settings()),
    );

    if let Err(e) = setup_logging(&config.log) {
        eprintln!("{}", e);
    }

    if let Some(e) = settings_error {
        error!("{:#}", e);
    }

    if config.log.is_verbose() {
        debug!("Verbose mode enabled.");
    }

    let outcome = app::run(&config);
    exit_code(&config, outcome)
}

/// Set up logging with either file or console output
fn setup_logging(log_config: &LogConfig) -> Result<()> {
    let mut builder = env_logger::Builder::new();

    builder.filter_level(log_config.level);

    builder.format(|buf, record| {
        use chrono::Local;
        use std::io::Write;
        writeln!(
            buf,
            "{} - {} - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S,%3f"),
            record.level(),
            record.args()
        )
    });

    builder.target(env_logger::Target::Stderr);
    if let Some(path) = &log_config.log_file {
        match File::create(path) {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(e) => eprintln!("Cannot open log file {}: {}", path.display(), e),
        }
    }

    builder
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}

/// Failures only change the exit status in strict mode
fn exit_code(config: &AnalyzerConfig, outcome: RunOutcome) -> ExitCode {
    if config.strict && outcome.is_failure() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
