//! Document completeness rule
//!
//! Checks that the sections an examiner cannot proceed without are present,
//! and flags recommended sections that are missing.

use serde_json::json;

use super::Rule;
use crate::engine::outcome::{Outcome, RuleKind, Verdict};
use crate::error::RuleError;
use crate::record::PatentRecord;

/// Confidence when a required section is missing.
const CONFIDENCE_MISSING_REQUIRED: f64 = 0.95;
/// Confidence when only recommended sections are missing.
const CONFIDENCE_MISSING_RECOMMENDED: f64 = 0.80;
/// Confidence for a complete document.
const CONFIDENCE_COMPLETE: f64 = 0.90;

/// Sections the filing cannot be examined without.
const REQUIRED_FIELDS: [&str; 3] = ["title", "applicant", "claims"];

/// Sections an examiner expects but can proceed without.
const RECOMMENDED_FIELDS: [&str; 4] = [
    "abstract",
    "technical_field",
    "background_art",
    "invention_content",
];

/// Checks document completeness (`文档完整性检查`).
#[derive(Debug, Clone, Copy, Default)]
pub struct CompletenessRule;

impl CompletenessRule {
    /// Create the rule.
    pub fn new() -> Self {
        Self
    }
}

impl Rule for CompletenessRule {
    fn name(&self) -> &str {
        "文档完整性检查"
    }

    fn kind(&self) -> RuleKind {
        RuleKind::Formal
    }

    fn priority(&self) -> i32 {
        1
    }

    fn evaluate(&self, record: &PatentRecord) -> Result<Outcome, RuleError> {
        let missing_required: Vec<&str> = REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|field| !field_present(record, field))
            .collect();
        let missing_recommended: Vec<&str> = RECOMMENDED_FIELDS
            .iter()
            .copied()
            .filter(|field| !field_present(record, field))
            .collect();

        let (verdict, confidence, message) = if !missing_required.is_empty() {
            (
                Verdict::Fail,
                CONFIDENCE_MISSING_REQUIRED,
                format!("缺少必需文件: {}", missing_required.join(", ")),
            )
        } else if !missing_recommended.is_empty() {
            (
                Verdict::Warning,
                CONFIDENCE_MISSING_RECOMMENDED,
                format!("缺少推荐文件: {}", missing_recommended.join(", ")),
            )
        } else {
            (
                Verdict::Pass,
                CONFIDENCE_COMPLETE,
                "文档完整性检查通过".to_string(),
            )
        };

        Ok(
            Outcome::new(self.name(), self.kind(), verdict, confidence, message).with_details(
                json!({
                    "missing_required": missing_required,
                    "missing_recommended": missing_recommended,
                    "total_fields_checked": REQUIRED_FIELDS.len() + RECOMMENDED_FIELDS.len(),
                }),
            ),
        )
    }
}

fn field_present(record: &PatentRecord, field: &str) -> bool {
    match field {
        "title" => has_value(&record.title),
        "applicant" => has_value(&record.applicant),
        "claims" => !record.claims.is_empty(),
        "abstract" => has_value(&record.abstract_text),
        "technical_field" => has_value(&record.technical_field),
        "background_art" => has_value(&record.background_art),
        "invention_content" => has_value(&record.invention_content),
        _ => false,
    }
}

fn has_value(field: &Option<String>) -> bool {
    field.as_deref().map_or(false, |value| !value.is_empty())
}
