//! Rule outcomes
//!
//! Types describing what a single rule concluded about a record: the rule
//! taxonomy, the graded verdict, and the outcome payload itself.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Examination dimensions a rule can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Formal review - document form and structure
    Formal,
    /// Novelty assessment
    Novelty,
    /// Inventiveness assessment
    Inventiveness,
    /// Practical utility assessment
    Utility,
    /// Protectable subject matter for utility models
    SubjectMatter,
}

impl RuleKind {
    /// All kinds, in taxonomy order.
    pub const ALL: [RuleKind; 5] = [
        RuleKind::Formal,
        RuleKind::Novelty,
        RuleKind::Inventiveness,
        RuleKind::Utility,
        RuleKind::SubjectMatter,
    ];
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleKind::Formal => write!(f, "formal"),
            RuleKind::Novelty => write!(f, "novelty"),
            RuleKind::Inventiveness => write!(f, "inventiveness"),
            RuleKind::Utility => write!(f, "utility"),
            RuleKind::SubjectMatter => write!(f, "subject_matter"),
        }
    }
}

/// Graded verdict of one rule evaluation
///
/// Ordered by severity so verdicts compare and sort meaningfully:
/// `Skip < Pass < Warning < Fail`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Rule did not run (inactive, filtered out, or failed internally)
    Skip,
    /// Requirement satisfied
    Pass,
    /// Advisory finding - should be addressed but not blocking
    Warning,
    /// Requirement violated - blocks the application as filed
    Fail,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Skip => write!(f, "skip"),
            Verdict::Pass => write!(f, "pass"),
            Verdict::Warning => write!(f, "warning"),
            Verdict::Fail => write!(f, "fail"),
        }
    }
}

/// What a single rule concluded about a record
///
/// Produced fresh on every evaluation and never mutated afterwards. The
/// engine stamps `execution_time` once evaluation returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outcome {
    /// Name of the rule that produced this outcome
    pub rule_name: String,
    /// Examination dimension of the rule
    pub rule_kind: RuleKind,
    /// Graded verdict
    pub verdict: Verdict,
    /// Confidence in the verdict, in `[0.0, 1.0]`
    pub confidence: f64,
    /// Human-readable conclusion, in the language of the filing
    pub message: String,
    /// Rule-specific evidence (matched keywords, missing fields, ...)
    pub details: serde_json::Value,
    /// Wall time spent evaluating; zero for synthesized skip outcomes
    pub execution_time: Duration,
}

impl Outcome {
    /// Create an outcome with no details attached yet.
    pub fn new(
        rule_name: impl Into<String>,
        rule_kind: RuleKind,
        verdict: Verdict,
        confidence: f64,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule_name: rule_name.into(),
            rule_kind,
            verdict,
            confidence,
            message: message.into(),
            details: serde_json::Value::Null,
            execution_time: Duration::ZERO,
        }
    }

    /// Attach rule-specific evidence.
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = details;
        self
    }

    /// Outcome for a rule that could not run to completion.
    pub fn skipped(rule_name: impl Into<String>, rule_kind: RuleKind, reason: &str) -> Self {
        Outcome::new(
            rule_name,
            rule_kind,
            Verdict::Skip,
            0.0,
            format!("规则执行失败: {}", reason),
        )
        .with_details(serde_json::json!({ "error": reason }))
    }

    /// True when this outcome blocks the application as filed.
    pub fn is_blocking(&self) -> bool {
        self.verdict == Verdict::Fail
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.verdict, self.rule_name, self.message)
    }
}
