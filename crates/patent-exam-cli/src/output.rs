//! Output formatting for the examination CLI
//!
//! Renders extraction and examination results as JSON, YAML, or a
//! human-readable table with verdict-based coloring. Domain findings stay
//! in the language of the filing; everything around them is ours.

use clap::ValueEnum;
use colored::{ColoredString, Colorize};
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;

use patent_exam_core::engine::summary::{RECOMMEND_COMPLETION, RECOMMEND_REVISION};
use patent_exam_core::{
    ExtractionStats, Outcome, PatentRecord, RuleInfo, Summary, ValidationReport, Verdict,
};

use crate::error::CliError;

/// Output format options for CLI results
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default)]
pub enum OutputFormat {
    /// Human-readable table format with colors
    #[default]
    Table,
    /// JSON format for machine processing
    Json,
    /// YAML format for reports
    Yaml,
}

/// Everything the `parse` command reports.
#[derive(Debug, Serialize)]
pub struct ParseReport {
    /// Input path as given
    pub source: String,
    /// Extracted record
    pub record: PatentRecord,
    /// Extraction diagnostics
    pub stats: ExtractionStats,
    /// Formal findings on the record
    pub validation: ValidationReport,
}

impl ParseReport {
    /// Assemble the report for one parsed document.
    pub fn new(
        source: &Path,
        record: PatentRecord,
        stats: ExtractionStats,
        validation: ValidationReport,
    ) -> Self {
        Self {
            source: source.display().to_string(),
            record,
            stats,
            validation,
        }
    }

    /// Render the report in the requested format.
    pub fn render(&self, format: OutputFormat) -> Result<(), CliError> {
        match format {
            OutputFormat::Json => render_json(self),
            OutputFormat::Yaml => render_yaml(self),
            OutputFormat::Table => self.render_table(),
        }
    }

    fn render_table(&self) -> Result<(), CliError> {
        let mut stdout = io::stdout();

        writeln!(stdout).ok();
        writeln!(stdout, "{}", "Extraction Results".cyan().bold()).ok();
        writeln!(stdout, "{}", "=".repeat(60)).ok();
        writeln!(stdout).ok();
        writeln!(stdout, "Source: {}", self.source.as_str().dimmed()).ok();
        writeln!(stdout).ok();

        writeln!(stdout, "{}", "Fields:".cyan().bold()).ok();
        field_row(&mut stdout, "application_number", &self.record.application_number);
        field_row(&mut stdout, "application_date", &self.record.application_date);
        field_row(&mut stdout, "title", &self.record.title);
        field_row(&mut stdout, "applicant", &self.record.applicant);
        field_row(&mut stdout, "inventor", &self.record.inventor);
        field_row(&mut stdout, "agent", &self.record.agent);
        field_row(&mut stdout, "technical_field", &self.record.technical_field);
        field_row(&mut stdout, "background_art", &self.record.background_art);
        field_row(&mut stdout, "invention_content", &self.record.invention_content);
        field_row(&mut stdout, "abstract", &self.record.abstract_text);
        writeln!(stdout).ok();

        if !self.record.claims.is_empty() {
            let heading = format!("Claims ({}):", self.record.claims.len());
            writeln!(stdout, "{}", heading.cyan().bold()).ok();
            for claim in &self.record.claims {
                writeln!(stdout, "  {} {}", "-".blue(), claim).ok();
            }
            writeln!(stdout).ok();
        }

        if !self.record.drawings_references.is_empty() {
            writeln!(stdout, "{}", "Drawings:".cyan().bold()).ok();
            for reference in &self.record.drawings_references {
                writeln!(stdout, "  {} {}", "-".blue(), reference).ok();
            }
            writeln!(stdout).ok();
        }

        if self.stats.discarded_claim_segments > 0 {
            writeln!(
                stdout,
                "{} {} claim segment(s) discarded during decomposition",
                "!".yellow(),
                self.stats.discarded_claim_segments
            )
            .ok();
            writeln!(stdout).ok();
        }

        writeln!(stdout, "{}", "Validation:".cyan().bold()).ok();
        if self.validation.is_clean() {
            writeln!(stdout, "  {} no findings", "+".green()).ok();
        } else {
            for error in &self.validation.errors {
                writeln!(stdout, "  {} {} {}", "x".red(), "ERROR".red().bold(), error).ok();
            }
            for warning in &self.validation.warnings {
                writeln!(
                    stdout,
                    "  {} {} {}",
                    "!".yellow(),
                    "WARNING".yellow().bold(),
                    warning
                )
                .ok();
            }
        }

        stdout.flush().ok();
        Ok(())
    }
}

/// Everything the `examine` command reports.
#[derive(Debug, Serialize)]
pub struct ExaminationReport {
    /// Input path as given
    pub source: String,
    /// Per-rule outcomes, in execution order
    pub outcomes: Vec<Outcome>,
    /// Aggregated run summary
    pub summary: Summary,
}

impl ExaminationReport {
    /// Assemble the report for one examination run.
    pub fn new(source: &Path, outcomes: Vec<Outcome>, summary: Summary) -> Self {
        Self {
            source: source.display().to_string(),
            outcomes,
            summary,
        }
    }

    /// Render the report in the requested format.
    pub fn render(&self, format: OutputFormat) -> Result<(), CliError> {
        match format {
            OutputFormat::Json => render_json(self),
            OutputFormat::Yaml => render_yaml(self),
            OutputFormat::Table => self.render_table(),
        }
    }

    fn render_table(&self) -> Result<(), CliError> {
        let mut stdout = io::stdout();

        writeln!(stdout).ok();
        writeln!(stdout, "{}", "Examination Results".cyan().bold()).ok();
        writeln!(stdout, "{}", "=".repeat(60)).ok();
        writeln!(stdout).ok();
        writeln!(stdout, "Source: {}", self.source.as_str().dimmed()).ok();
        writeln!(stdout).ok();

        writeln!(stdout, "{}", "Outcomes:".cyan().bold()).ok();
        writeln!(stdout, "{}", "-".repeat(60)).ok();
        for outcome in &self.outcomes {
            writeln!(
                stdout,
                "{} [{}] {} {} {}",
                verdict_icon(outcome.verdict),
                outcome.rule_kind.to_string().dimmed(),
                outcome.rule_name.bold(),
                outcome.message,
                format!("({:.0}%)", outcome.confidence * 100.0).dimmed()
            )
            .ok();
        }
        writeln!(stdout).ok();

        writeln!(stdout, "{}", "Summary:".cyan().bold()).ok();
        writeln!(
            stdout,
            "  Passed: {}  Failed: {}  Warnings: {}  Skipped: {}",
            self.summary.passed.to_string().green(),
            self.summary.failed.to_string().red(),
            self.summary.warnings.to_string().yellow(),
            self.summary.skipped.to_string().dimmed()
        )
        .ok();
        writeln!(
            stdout,
            "  Overall confidence: {:.1}%",
            self.summary.overall_confidence * 100.0
        )
        .ok();

        if !self.summary.critical_issues.is_empty() {
            writeln!(stdout, "  {}", "Critical issues:".red().bold()).ok();
            for issue in &self.summary.critical_issues {
                writeln!(stdout, "    {} {}", "x".red(), issue).ok();
            }
        }
        if !self.summary.recommendations.is_empty() {
            writeln!(stdout, "  {}", "Recommendations:".yellow().bold()).ok();
            for recommendation in &self.summary.recommendations {
                writeln!(stdout, "    {} {}", "!".yellow(), recommendation).ok();
            }
        }

        let overall = self.summary.overall_recommendation.as_str();
        let overall = match overall {
            RECOMMEND_REVISION => overall.red().bold(),
            RECOMMEND_COMPLETION => overall.yellow().bold(),
            _ => overall.green().bold(),
        };
        writeln!(stdout, "  Recommendation: {}", overall).ok();

        stdout.flush().ok();
        Ok(())
    }
}

/// Render the rule registry in the requested format.
pub fn render_rules(rules: &[RuleInfo], format: OutputFormat) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => render_json(&rules),
        OutputFormat::Yaml => render_yaml(&rules),
        OutputFormat::Table => {
            let mut stdout = io::stdout();

            writeln!(stdout).ok();
            writeln!(stdout, "{}", "Registered Rules".cyan().bold()).ok();
            writeln!(stdout, "{}", "=".repeat(60)).ok();
            writeln!(stdout).ok();

            for info in rules {
                let state = if info.active {
                    "active".green()
                } else {
                    "inactive".dimmed()
                };
                writeln!(
                    stdout,
                    "  {}. {} [{}] {}",
                    info.priority,
                    info.name.bold(),
                    info.kind.to_string().dimmed(),
                    state
                )
                .ok();
            }

            stdout.flush().ok();
            Ok(())
        }
    }
}

fn render_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

fn render_yaml<T: Serialize>(value: &T) -> Result<(), CliError> {
    let yaml = serde_yaml::to_string(value)?;
    println!("{}", yaml);
    Ok(())
}

fn field_row(stdout: &mut io::Stdout, label: &str, value: &Option<String>) {
    let shown = match value.as_deref() {
        Some(value) => value.normal(),
        None => "-".dimmed(),
    };
    writeln!(stdout, "  {}: {}", label.bold(), shown).ok();
}

fn verdict_icon(verdict: Verdict) -> ColoredString {
    match verdict {
        Verdict::Pass => "+".green(),
        Verdict::Warning => "!".yellow(),
        Verdict::Fail => "x".red(),
        Verdict::Skip => "-".dimmed(),
    }
}
