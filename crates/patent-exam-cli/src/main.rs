//! Patent Examination CLI
//!
//! Command-line interface for the utility-model patent examination core.
//!
//! # Usage
//!
//! ```bash
//! # Extract a structured record from an application document
//! patent-exam parse --input application.txt --format json
//!
//! # Run a comprehensive examination over a document
//! patent-exam examine --input application.txt
//!
//! # Restrict the run to formal rules
//! patent-exam examine --input application.txt --examination-type formal
//!
//! # List the registered rules
//! patent-exam rules
//! ```
//!
//! # Exit Codes
//!
//! - 0: Success - examination passed
//! - 1: Examination failed with errors
//! - 2: Examination passed with warnings
//! - 3: Invalid input or arguments
//! - 4: File not found or inaccessible
//! - 10: Internal error

mod commands;
mod error;
mod output;

use clap::Parser;

use commands::{ExamCli, ExamCommands};
use error::{CliError, ExitCode};

/// Run the CLI with the given arguments and return the exit code
fn run(cli: ExamCli) -> Result<ExitCode, CliError> {
    match cli.command {
        ExamCommands::Parse {
            input,
            format,
            max_title_chars,
        } => commands::execute_parse(input, format, max_title_chars),
        ExamCommands::Examine {
            input,
            examination_type,
            format,
        } => commands::execute_examine(input, examination_type, format),
        ExamCommands::Rules { format } => commands::execute_rules(format),
    }
}

fn main() {
    // Parse CLI arguments
    let cli = ExamCli::parse();

    // Initialize tracing subscriber for logging
    let level = if cli.quiet {
        tracing::Level::ERROR
    } else {
        match cli.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_target(false)
        .init();

    // Run the CLI and exit with appropriate code
    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    };
    std::process::exit(exit_code.into());
}
