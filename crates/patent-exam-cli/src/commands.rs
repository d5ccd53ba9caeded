//! CLI command definitions for the examination CLI
//!
//! Clap-based definitions for parsing application documents, running
//! examinations, and inspecting the rule registry.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use patent_exam_core::{ExaminationType, Extractor, RecordValidator, RuleEngine};

use crate::error::{CliError, ExitCode};
use crate::output::{self, ExaminationReport, OutputFormat, ParseReport};

/// Patent examination CLI
///
/// Extract structured records from utility-model application documents and
/// run the compliance rule set over them.
#[derive(Parser, Debug)]
#[command(name = "patent-exam")]
#[command(about = "Utility-model patent examination - parse and examine application documents", long_about = None)]
#[command(version)]
pub struct ExamCli {
    /// Output verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: ExamCommands,
}

/// Available examination commands
#[derive(Subcommand, Debug)]
pub enum ExamCommands {
    /// Extract a structured record from an application document
    ///
    /// Reads the document text, recovers the bibliographic fields and
    /// sections, and reports formal validation findings.
    Parse {
        /// Path to the application document text
        #[arg(short, long)]
        input: PathBuf,

        /// Output format for the extracted record
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,

        /// Title length bound used by the validation report
        #[arg(long, default_value_t = patent_exam_core::DEFAULT_MAX_TITLE_CHARS)]
        max_title_chars: usize,
    },

    /// Examine an application document with the registered rules
    ///
    /// Extracts a record and evaluates it under the selected examination
    /// preset, reporting per-rule outcomes and the aggregated summary.
    Examine {
        /// Path to the application document text
        #[arg(short, long)]
        input: PathBuf,

        /// Which rule kinds to run
        #[arg(short = 't', long, value_enum, default_value = "comprehensive")]
        examination_type: ExaminationArg,

        /// Output format for examination results
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// List the registered examination rules
    Rules {
        /// Output format for the rule listing
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
}

/// Examination presets selectable on the command line
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug, Default)]
pub enum ExaminationArg {
    /// Formal review only
    Formal,
    /// Novelty, inventiveness and utility
    Substantive,
    /// Every registered rule
    #[default]
    Comprehensive,
}

impl From<ExaminationArg> for ExaminationType {
    fn from(arg: ExaminationArg) -> Self {
        match arg {
            ExaminationArg::Formal => ExaminationType::Formal,
            ExaminationArg::Substantive => ExaminationType::Substantive,
            ExaminationArg::Comprehensive => ExaminationType::Comprehensive,
        }
    }
}

/// Execute the parse command
pub fn execute_parse(
    input: PathBuf,
    format: OutputFormat,
    max_title_chars: usize,
) -> Result<ExitCode, CliError> {
    if max_title_chars == 0 {
        return Err(CliError::InvalidInput(
            "--max-title-chars must be at least 1".to_string(),
        ));
    }

    let text = read_input(&input)?;
    let (record, stats) = Extractor::new().extract_with_stats(&text);
    let validation = RecordValidator::new()
        .with_max_title_chars(max_title_chars)
        .validate(&record);

    let report = ParseReport::new(&input, record, stats, validation);
    report.render(format)?;

    Ok(ExitCode::from_findings(
        !report.validation.errors.is_empty(),
        !report.validation.warnings.is_empty(),
    ))
}

/// Execute the examine command
pub fn execute_examine(
    input: PathBuf,
    examination_type: ExaminationArg,
    format: OutputFormat,
) -> Result<ExitCode, CliError> {
    let text = read_input(&input)?;
    let record = Extractor::new().extract(&text);

    let engine = RuleEngine::new();
    let outcomes = engine.execute_preset(&record, examination_type.into());
    let summary = engine.summarize(&outcomes);

    let report = ExaminationReport::new(&input, outcomes, summary);
    report.render(format)?;

    Ok(ExitCode::from_findings(
        report.summary.failed > 0,
        report.summary.warnings > 0,
    ))
}

/// Execute the rules command
pub fn execute_rules(format: OutputFormat) -> Result<ExitCode, CliError> {
    let engine = RuleEngine::new();
    output::render_rules(&engine.rules(), format)?;
    Ok(ExitCode::Success)
}

/// Read an input document as bytes, decoding mis-encoded spans lossily.
fn read_input(path: &Path) -> Result<String, CliError> {
    let bytes = std::fs::read(path)
        .map_err(|e| CliError::File(format!("failed to read '{}': {}", path.display(), e)))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
