//! Document extraction
//!
//! Turns the raw text of a utility-model filing into a structured
//! [`PatentRecord`]. Extraction is total: any input produces a record, and
//! fields that cannot be recovered are simply absent. Field recoverers are
//! independent of one another and run in a fixed order; where several
//! label variants exist for one field the first matching pattern wins.

mod claims;
mod patterns;

use crate::record::PatentRecord;
use patterns::FieldPatterns;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Diagnostic counters for a single extraction pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Claim segments dropped during decomposition: text before the first
    /// numbered prefix and numbered prefixes with an empty body.
    pub discarded_claim_segments: usize,
}

/// Extracts structured patent data from raw document text.
///
/// Stateless; a single instance can be shared freely across threads. The
/// caller is expected to have decoded the document container (PDF, Word,
/// OCR) to plain text already.
#[derive(Debug, Clone, Copy, Default)]
pub struct Extractor;

impl Extractor {
    /// Create a new extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract a structured record from raw text.
    pub fn extract(&self, text: &str) -> PatentRecord {
        self.extract_with_stats(text).0
    }

    /// Extract a structured record along with per-pass diagnostics.
    pub fn extract_with_stats(&self, text: &str) -> (PatentRecord, ExtractionStats) {
        let patterns = FieldPatterns::get();
        let mut record = PatentRecord::new();
        let mut stats = ExtractionStats::default();

        record.application_number = capture(&patterns.application_number, text);
        record.application_date = capture(&patterns.application_date, text);
        record.title = capture_first(&patterns.title, text);
        record.applicant = capture(&patterns.applicant, text);
        record.inventor = capture(&patterns.inventor, text);
        record.agent = capture_first(&patterns.agent, text);
        record.technical_field = capture_first(&patterns.technical_field, text);
        record.background_art = capture(&patterns.background_art, text);
        record.invention_content = capture(&patterns.invention_content, text);
        record.description = capture(&patterns.description, text);
        record.abstract_text = capture(&patterns.abstract_text, text);

        // Claims need the untrimmed section: splitting works on exact spans.
        if let Some(section) = raw_capture(&patterns.claims_section, text) {
            let split = claims::split_claims(section);
            record.claims = split.claims;
            stats.discarded_claim_segments = split.discarded_segments;
        }

        if let Some(section) = raw_capture(&patterns.drawings_section, text) {
            record.drawings_references = patterns
                .drawing_reference
                .captures_iter(section)
                .filter_map(|caps| caps.get(1))
                .map(|m| m.as_str().trim().to_string())
                .collect();
        }

        debug!(
            claims = record.claims.len(),
            discarded_claim_segments = stats.discarded_claim_segments,
            "extraction pass complete"
        );

        (record, stats)
    }
}

/// First capture group of the first match, trimmed; empty values count as
/// not recovered.
fn capture(pattern: &Regex, text: &str) -> Option<String> {
    raw_capture(pattern, text)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Untrimmed first capture group of the first match.
fn raw_capture<'t>(pattern: &Regex, text: &'t str) -> Option<&'t str> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Try patterns in order; the first that matches wins and later patterns
/// are not attempted.
fn capture_first(patterns: &[Regex], text: &str) -> Option<String> {
    patterns.iter().find_map(|pattern| capture(pattern, text))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRONT_PAGE: &str = "申请号：202123456789.0\n申请日：2021年12月15日\n发明名称：一种新型螺栓结构\n申请人：测试公司\n发明人：张三\n";

    #[test]
    fn test_front_page_fields() {
        let record = Extractor::new().extract(FRONT_PAGE);
        assert_eq!(record.application_number.as_deref(), Some("202123456789.0"));
        assert_eq!(record.application_date.as_deref(), Some("2021年12月15"));
        assert_eq!(record.title.as_deref(), Some("一种新型螺栓结构"));
        assert_eq!(record.applicant.as_deref(), Some("测试公司"));
        assert_eq!(record.inventor.as_deref(), Some("张三"));
        assert!(record.claims.is_empty());
    }

    #[test]
    fn test_extraction_is_total_on_unrelated_text() {
        let record = Extractor::new().extract("这是一段与专利无关的文字。");
        assert!(record.is_empty());

        let record = Extractor::new().extract("");
        assert!(record.is_empty());
    }

    #[test]
    fn test_fields_are_independent() {
        let without_applicant = FRONT_PAGE.replace("申请人：测试公司\n", "");
        let record = Extractor::new().extract(&without_applicant);
        assert_eq!(record.applicant, None);
        assert_eq!(record.title.as_deref(), Some("一种新型螺栓结构"));
        assert_eq!(record.inventor.as_deref(), Some("张三"));
    }

    #[test]
    fn test_empty_value_is_not_recovered() {
        let record = Extractor::new().extract("发明名称： \n申请人：测试公司\n");
        assert_eq!(record.title, None);
        assert_eq!(record.applicant.as_deref(), Some("测试公司"));
    }

    #[test]
    fn test_claims_section_decomposed() {
        let text = "权利要求书\n1. 一种装置，其特征在于：设有底座。\n2. 根据权利要求1所述的装置。\n";
        let (record, stats) = Extractor::new().extract_with_stats(text);
        assert_eq!(record.claims.len(), 2);
        assert!(record.claims[0].starts_with("1. "));
        assert!(record.claims[1].starts_with("2. "));
        assert_eq!(stats.discarded_claim_segments, 0);
    }

    #[test]
    fn test_discarded_claim_segments_counted() {
        let text = "权利要求书\n概述段落，没有编号。\n1. 一种装置。\n";
        let (record, stats) = Extractor::new().extract_with_stats(text);
        assert_eq!(record.claims.len(), 1);
        assert_eq!(stats.discarded_claim_segments, 1);
    }

    #[test]
    fn test_agent_label_priority() {
        let record = Extractor::new().extract("代理机构：某知识产权代理有限公司\n代理人：李四\n");
        assert_eq!(record.agent.as_deref(), Some("某知识产权代理有限公司"));

        let record = Extractor::new().extract("代理人：李四\n");
        assert_eq!(record.agent.as_deref(), Some("李四"));
    }

    #[test]
    fn test_description_and_drawings_sections() {
        let text = "权利要求书\n1. 一种装置。\n说明书\n技术领域\n本实用新型涉及夹具。\n附图说明\n图1为主视图；\n图2为侧视图。\n具体实施方式\n如图1所示。\n";
        let record = Extractor::new().extract(text);
        assert!(record.description.is_some());
        assert_eq!(
            record.drawings_references,
            vec!["图1为主视图；", "图2为侧视图。"]
        );
        // claims stop at the description heading
        assert_eq!(record.claims, vec!["1. 一种装置。".to_string()]);
    }
}
