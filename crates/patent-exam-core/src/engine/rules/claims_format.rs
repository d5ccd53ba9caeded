//! Claims format rule
//!
//! Checks the formal shape of the claims: numbered prefixes, at least one
//! independent claim, the characterizing portion marker in claim one, and
//! unity when several independent claims coexist.

use regex::Regex;
use serde_json::json;
use std::sync::OnceLock;

use super::Rule;
use crate::engine::outcome::{Outcome, RuleKind, Verdict};
use crate::error::RuleError;
use crate::record::PatentRecord;

/// Confidence when the claims section is missing entirely.
const CONFIDENCE_MISSING_CLAIMS: f64 = 0.95;
/// Confidence when format issues were found.
const CONFIDENCE_FORMAT_ISSUES: f64 = 0.85;
/// Confidence when only improvements were suggested.
const CONFIDENCE_IMPROVABLE: f64 = 0.70;
/// Confidence for well-formed claims.
const CONFIDENCE_WELL_FORMED: f64 = 0.80;

/// Markers introducing a dependent claim.
const DEPENDENT_MARKERS: [&str; 2] = ["根据权利要求", "按照权利要求"];

/// Markers of the characterizing portion.
const FEATURE_MARKERS: [&str; 2] = ["其特征在于", "其特征是"];

fn numbering_format() -> &'static Regex {
    static FORMAT: OnceLock<Regex> = OnceLock::new();
    FORMAT.get_or_init(|| Regex::new(r"^\d+\.").expect("static pattern is guaranteed to be valid"))
}

/// Checks claim formatting (`权利要求书格式检查`).
#[derive(Debug, Clone, Copy, Default)]
pub struct ClaimsFormatRule;

impl ClaimsFormatRule {
    /// Create the rule.
    pub fn new() -> Self {
        Self
    }
}

impl Rule for ClaimsFormatRule {
    fn name(&self) -> &str {
        "权利要求书格式检查"
    }

    fn kind(&self) -> RuleKind {
        RuleKind::Formal
    }

    fn priority(&self) -> i32 {
        3
    }

    fn evaluate(&self, record: &PatentRecord) -> Result<Outcome, RuleError> {
        if record.claims.is_empty() {
            return Ok(Outcome::new(
                self.name(),
                self.kind(),
                Verdict::Fail,
                CONFIDENCE_MISSING_CLAIMS,
                "缺少权利要求书",
            )
            .with_details(json!({ "claims_count": 0 })));
        }

        let mut issues: Vec<String> = Vec::new();
        let mut warnings: Vec<String> = Vec::new();
        let mut independent_claims: Vec<usize> = Vec::new();
        let mut dependent_claims: Vec<usize> = Vec::new();

        for (index, claim) in record.claims.iter().enumerate() {
            let number = index + 1;
            let text = claim.trim();

            if !numbering_format().is_match(text) {
                issues.push(format!("权利要求{}缺少正确的编号格式", number));
            }

            if DEPENDENT_MARKERS.iter().any(|marker| text.contains(marker)) {
                dependent_claims.push(number);
            } else {
                independent_claims.push(number);
            }

            // the first claim carries the characterizing portion
            if index == 0 && !FEATURE_MARKERS.iter().any(|marker| text.contains(marker)) {
                warnings.push("独立权利要求建议包含'其特征在于'".to_string());
            }
        }

        if independent_claims.is_empty() {
            issues.push("缺少独立权利要求".to_string());
        } else if independent_claims.len() > 1 {
            warnings.push(format!(
                "包含{}项独立权利要求，需确认单一性",
                independent_claims.len()
            ));
        }

        let (verdict, confidence, message) = if !issues.is_empty() {
            (
                Verdict::Fail,
                CONFIDENCE_FORMAT_ISSUES,
                format!("权利要求书格式存在问题: {}", issues.join("; ")),
            )
        } else if !warnings.is_empty() {
            (
                Verdict::Warning,
                CONFIDENCE_IMPROVABLE,
                format!("权利要求书格式建议改进: {}", warnings.join("; ")),
            )
        } else {
            (
                Verdict::Pass,
                CONFIDENCE_WELL_FORMED,
                "权利要求书格式检查通过".to_string(),
            )
        };

        Ok(
            Outcome::new(self.name(), self.kind(), verdict, confidence, message).with_details(
                json!({
                    "claims_count": record.claims.len(),
                    "independent_claims": independent_claims,
                    "dependent_claims": dependent_claims,
                    "issues": issues,
                    "warnings": warnings,
                }),
            ),
        )
    }
}
