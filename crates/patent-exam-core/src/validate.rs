//! Record-level validation
//!
//! Checks a recovered [`PatentRecord`] for missing mandatory content and
//! suspicious formats. Validation is classification, not failure: every
//! check runs and all findings are accumulated into one report.

use crate::record::PatentRecord;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Default upper bound for the title length, in characters.
pub const DEFAULT_MAX_TITLE_CHARS: usize = 25;

/// Findings from validating one record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Mandatory content that is missing.
    pub errors: Vec<String>,
    /// Formats and content worth a second look.
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// True when no errors were found (warnings allowed).
    pub fn is_acceptable(&self) -> bool {
        self.errors.is_empty()
    }

    /// True when nothing at all was flagged.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

/// Validates recovered records.
#[derive(Debug, Clone)]
pub struct RecordValidator {
    max_title_chars: usize,
}

impl Default for RecordValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordValidator {
    /// Create a validator with the default title length bound.
    pub fn new() -> Self {
        Self {
            max_title_chars: DEFAULT_MAX_TITLE_CHARS,
        }
    }

    /// Override the title length bound.
    pub fn with_max_title_chars(mut self, max: usize) -> Self {
        self.max_title_chars = max;
        self
    }

    /// Validate a record, accumulating every finding.
    pub fn validate(&self, record: &PatentRecord) -> ValidationReport {
        let mut report = ValidationReport::default();

        if present(&record.title).is_none() {
            report.errors.push("缺少发明名称".to_string());
        }
        if present(&record.applicant).is_none() {
            report.errors.push("缺少申请人信息".to_string());
        }
        if record.claims.is_empty() {
            report.errors.push("缺少权利要求书".to_string());
        }

        if present(&record.abstract_text).is_none() {
            report.warnings.push("缺少摘要".to_string());
        }
        if let Some(number) = present(&record.application_number) {
            if !application_number_format().is_match(number) {
                report.warnings.push("申请号格式可能不正确".to_string());
            }
        }
        if let Some(date) = present(&record.application_date) {
            if !application_date_format().is_match(date) {
                report.warnings.push("申请日期格式可能不正确".to_string());
            }
        }
        if let Some(title) = present(&record.title) {
            if title.chars().count() > self.max_title_chars {
                report.warnings.push(format!(
                    "发明名称过长（建议不超过{}字）",
                    self.max_title_chars
                ));
            }
        }

        report
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

/// 12 or 13 digits, optionally followed by a `.n` check digit.
fn application_number_format() -> &'static Regex {
    static FORMAT: OnceLock<Regex> = OnceLock::new();
    FORMAT.get_or_init(|| {
        Regex::new(r"^\d{12,13}(?:\.\d)?$").expect("static pattern is guaranteed to be valid")
    })
}

/// Year, month, day with `年/月`, `.` or `-` separators, anchored at the
/// start only; trailing text such as `日` is tolerated.
fn application_date_format() -> &'static Regex {
    static FORMAT: OnceLock<Regex> = OnceLock::new();
    FORMAT.get_or_init(|| {
        Regex::new(r"^\d{4}[年.-]\d{1,2}[月.-]\d{1,2}")
            .expect("static pattern is guaranteed to be valid")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_record() -> PatentRecord {
        PatentRecord {
            application_number: Some("202123456789.0".to_string()),
            application_date: Some("2021年12月15".to_string()),
            title: Some("一种新型螺栓结构".to_string()),
            applicant: Some("测试公司".to_string()),
            claims: vec!["1. 一种新型螺栓结构。".to_string()],
            abstract_text: Some("本实用新型公开了一种新型螺栓结构。".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_complete_record_is_clean() {
        let report = RecordValidator::new().validate(&complete_record());
        assert!(report.is_clean());
        assert!(report.is_acceptable());
    }

    #[test]
    fn test_missing_required_fields() {
        let record = PatentRecord {
            application_number: Some("202123456789.0".to_string()),
            ..Default::default()
        };
        let report = RecordValidator::new().validate(&record);
        assert_eq!(
            report.errors,
            vec!["缺少发明名称", "缺少申请人信息", "缺少权利要求书"]
        );
        assert!(!report.is_acceptable());
    }

    #[test]
    fn test_empty_string_counts_as_missing() {
        let mut record = complete_record();
        record.title = Some(String::new());
        let report = RecordValidator::new().validate(&record);
        assert!(report.errors.contains(&"缺少发明名称".to_string()));
    }

    #[test]
    fn test_application_number_format_warning() {
        let mut record = complete_record();
        record.application_number = Some("12345".to_string());
        let report = RecordValidator::new().validate(&record);
        assert!(report.errors.is_empty());
        assert!(report.warnings.contains(&"申请号格式可能不正确".to_string()));

        record.application_number = Some("2021234567890".to_string());
        let report = RecordValidator::new().validate(&record);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_application_date_format_warning() {
        let mut record = complete_record();
        record.application_date = Some("去年十二月".to_string());
        let report = RecordValidator::new().validate(&record);
        assert!(report.warnings.contains(&"申请日期格式可能不正确".to_string()));
    }

    #[test]
    fn test_missing_abstract_is_a_warning() {
        let mut record = complete_record();
        record.abstract_text = None;
        let report = RecordValidator::new().validate(&record);
        assert!(report.errors.is_empty());
        assert_eq!(report.warnings, vec!["缺少摘要"]);
    }

    #[test]
    fn test_title_length_counted_in_chars() {
        let mut record = complete_record();
        // 25 Chinese characters: at the bound, no warning
        record.title = Some("结".repeat(25));
        let report = RecordValidator::new().validate(&record);
        assert!(report.is_clean());

        record.title = Some("结".repeat(26));
        let report = RecordValidator::new().validate(&record);
        assert_eq!(report.warnings, vec!["发明名称过长（建议不超过25字）"]);
    }

    #[test]
    fn test_configured_title_bound() {
        let validator = RecordValidator::new().with_max_title_chars(4);
        let mut record = complete_record();
        record.title = Some("一种新型螺栓".to_string());
        let report = validator.validate(&record);
        assert_eq!(report.warnings, vec!["发明名称过长（建议不超过4字）"]);
    }
}
