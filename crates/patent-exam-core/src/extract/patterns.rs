//! Compiled recovery patterns for patent filing text
//!
//! Chinese utility-model filings label bibliographic fields with fixed
//! headers (`申请号`, `发明名称`, ...) and mark section starts with fixed
//! headings (`技术领域`, `权利要求书`, ...). All patterns here are fixed at
//! build time and compiled once on first use. Scalar values end at the next
//! line break or the next known label; section bodies run to the next known
//! heading, a blank line, or end of text.

use regex::Regex;
use std::sync::OnceLock;

static PATTERNS: OnceLock<FieldPatterns> = OnceLock::new();

/// The full set of compiled field and section patterns.
pub(crate) struct FieldPatterns {
    pub(crate) application_number: Regex,
    pub(crate) application_date: Regex,
    /// Title labels in priority order; the first that matches wins.
    pub(crate) title: Vec<Regex>,
    pub(crate) applicant: Regex,
    pub(crate) inventor: Regex,
    /// Agency first, then individual agent.
    pub(crate) agent: Vec<Regex>,
    /// `技术领域` first, then the `所属技术领域` variant.
    pub(crate) technical_field: Vec<Regex>,
    pub(crate) background_art: Regex,
    pub(crate) invention_content: Regex,
    pub(crate) claims_section: Regex,
    pub(crate) description: Regex,
    pub(crate) abstract_text: Regex,
    pub(crate) drawings_section: Regex,
    pub(crate) drawing_reference: Regex,
    pub(crate) claim_prefix: Regex,
}

impl FieldPatterns {
    /// Shared compiled instance.
    pub(crate) fn get() -> &'static FieldPatterns {
        PATTERNS.get_or_init(|| FieldPatterns {
            application_number: compile(r"申请号[：:]\s*(\d{12,13}(?:\.\d)?)"),
            application_date: compile(r"申请日[：:]\s*(\d{4}[年.-]\d{1,2}[月.-]\d{1,2})"),
            title: vec![
                compile(r"发明名称[：:]\s*(.+?)(?:\n|申请人)"),
                compile(r"实用新型名称[：:]\s*(.+?)(?:\n|申请人)"),
                compile(r"名\s*称[：:]\s*(.+?)(?:\n|申请人)"),
            ],
            applicant: compile(r"申请人[：:]\s*(.+?)(?:\n|发明人|地址)"),
            inventor: compile(r"发明人[：:]\s*(.+?)(?:\n|申请人|地址)"),
            agent: vec![
                compile(r"代理机构[：:]\s*(.+?)(?:\n|代理人)"),
                compile(r"代理人[：:]\s*(.+?)(?:\n|地址)"),
            ],
            technical_field: vec![
                compile(r"(?s)技术领域\s*(.+?)(?:背景技术|发明内容|\n\s*\n)"),
                compile(r"(?s)所属技术领域\s*(.+?)(?:背景技术|发明内容|\n\s*\n)"),
            ],
            background_art: compile(r"(?s)背景技术\s*(.+?)(?:发明内容|技术方案|\n\s*\n)"),
            invention_content: compile(r"(?s)发明内容\s*(.+?)(?:具体实施方式|附图说明|\n\s*\n)"),
            claims_section: compile(r"(?s)权利要求书\s*(.+?)(?:说明书|附图说明|$)"),
            // The newline guard keeps `说明书摘要` headings from matching.
            description: compile(r"(?s)说明书\s*\n(.+?)(?:摘\s*要|$)"),
            abstract_text: compile(r"(?s)摘\s*要\s*(.+?)(?:附图说明|权利要求|$)"),
            drawings_section: compile(r"(?s)附图说明\s*(.+?)(?:具体实施方式|摘\s*要|$)"),
            drawing_reference: compile(r"(?m)^\s*(图\d+[^\n]*)"),
            claim_prefix: compile(r"(\d+)\.\s*"),
        })
    }
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static pattern is guaranteed to be valid")
}
