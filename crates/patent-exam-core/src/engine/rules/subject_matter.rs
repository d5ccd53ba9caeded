//! Protectable subject matter rule
//!
//! Utility models protect the shape and construction of products. This rule
//! scans the title, claims and invention content for structural versus
//! method vocabulary and grades accordingly. Keyword triage is a heuristic,
//! so confidence stays below 0.85 in every branch; the graded outcome is a
//! signal for the examiner, not a determination.

use serde_json::json;

use super::Rule;
use crate::engine::outcome::{Outcome, RuleKind, Verdict};
use crate::error::RuleError;
use crate::record::PatentRecord;

/// Confidence when method-class vocabulary dominates.
const CONFIDENCE_METHOD_FEATURES: f64 = 0.75;
/// Confidence when structural vocabulary clearly dominates.
const CONFIDENCE_STRUCTURAL: f64 = 0.80;
/// Confidence when the text is inconclusive.
const CONFIDENCE_INCONCLUSIVE: f64 = 0.60;

/// Minimum distinct structural keywords for a pass.
const STRUCTURAL_PASS_THRESHOLD: usize = 2;

/// Vocabulary of product shape and construction.
const POSITIVE_KEYWORDS: [&str; 13] = [
    "形状", "构造", "结构", "零件", "部件", "装置", "机构", "连接", "固定", "安装", "组合",
    "配合", "嵌入",
];

/// Vocabulary of methods, processes and compositions, which utility models
/// do not protect.
const NEGATIVE_KEYWORDS: [&str; 14] = [
    "方法", "工艺", "步骤", "流程", "算法", "软件", "程序", "配方", "组合物", "材料", "成分",
    "比例", "液体", "气体",
];

/// Judges protectable subject matter (`保护客体判断`).
#[derive(Debug, Clone, Copy, Default)]
pub struct SubjectMatterRule;

impl SubjectMatterRule {
    /// Create the rule.
    pub fn new() -> Self {
        Self
    }
}

impl Rule for SubjectMatterRule {
    fn name(&self) -> &str {
        "保护客体判断"
    }

    fn kind(&self) -> RuleKind {
        RuleKind::SubjectMatter
    }

    fn priority(&self) -> i32 {
        2
    }

    fn evaluate(&self, record: &PatentRecord) -> Result<Outcome, RuleError> {
        let text = analysis_text(record);

        let positive_matches: Vec<&str> = POSITIVE_KEYWORDS
            .iter()
            .copied()
            .filter(|keyword| text.contains(keyword))
            .collect();
        let negative_matches: Vec<&str> = NEGATIVE_KEYWORDS
            .iter()
            .copied()
            .filter(|keyword| text.contains(keyword))
            .collect();

        let positive_score = positive_matches.len();
        let negative_score = negative_matches.len();

        let (verdict, confidence, message) = if negative_score > positive_score {
            (
                Verdict::Fail,
                CONFIDENCE_METHOD_FEATURES,
                format!(
                    "可能不属于实用新型保护客体，发现方法类特征: {}",
                    negative_matches.join(", ")
                ),
            )
        } else if positive_score >= STRUCTURAL_PASS_THRESHOLD {
            (
                Verdict::Pass,
                CONFIDENCE_STRUCTURAL,
                format!(
                    "符合实用新型保护客体，涉及产品形状或构造: {}",
                    positive_matches.join(", ")
                ),
            )
        } else {
            (
                Verdict::Warning,
                CONFIDENCE_INCONCLUSIVE,
                "保护客体需要进一步确认".to_string(),
            )
        };

        Ok(
            Outcome::new(self.name(), self.kind(), verdict, confidence, message).with_details(
                json!({
                    "positive_matches": positive_matches,
                    "negative_matches": negative_matches,
                    "positive_score": positive_score,
                    "negative_score": negative_score,
                }),
            ),
        )
    }
}

/// Title, claims and invention content concatenated for keyword scanning.
fn analysis_text(record: &PatentRecord) -> String {
    let mut text = String::new();
    if let Some(title) = record.title.as_deref().filter(|value| !value.is_empty()) {
        text.push_str(title);
        text.push(' ');
    }
    if !record.claims.is_empty() {
        text.push_str(&record.claims.join(" "));
        text.push(' ');
    }
    if let Some(content) = record
        .invention_content
        .as_deref()
        .filter(|value| !value.is_empty())
    {
        text.push_str(content);
    }
    text
}
