//! Outcome aggregation
//!
//! Collapses the outcomes of one examination run into counts, an overall
//! confidence and a single overall recommendation.

use super::outcome::{Outcome, Verdict};
use serde::{Deserialize, Serialize};

/// Overall recommendation when at least one rule failed.
pub const RECOMMEND_REVISION: &str = "需要修改后重新审查";
/// Overall recommendation when there are warnings but no failures.
pub const RECOMMEND_COMPLETION: &str = "建议完善相关内容";
/// Overall recommendation for a clean run.
pub const RECOMMEND_CLEAN: &str = "形式审查通过";

/// Aggregate view over the outcomes of one examination run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of outcomes aggregated
    pub total_rules: usize,
    /// Outcomes with a pass verdict
    pub passed: usize,
    /// Outcomes with a fail verdict
    pub failed: usize,
    /// Outcomes with a warning verdict
    pub warnings: usize,
    /// Outcomes with a skip verdict
    pub skipped: usize,
    /// Arithmetic mean over confidences above zero; 0.0 when none qualify
    pub overall_confidence: f64,
    /// Messages of failed rules, in outcome order
    pub critical_issues: Vec<String>,
    /// Messages of warning rules, in outcome order
    pub recommendations: Vec<String>,
    /// Exactly one of the recommendation constants; failures take priority
    /// over warnings
    pub overall_recommendation: String,
}

impl Summary {
    /// Aggregate a run's outcomes.
    pub fn from_outcomes(outcomes: &[Outcome]) -> Self {
        let mut summary = Summary {
            total_rules: outcomes.len(),
            passed: 0,
            failed: 0,
            warnings: 0,
            skipped: 0,
            overall_confidence: 0.0,
            critical_issues: Vec::new(),
            recommendations: Vec::new(),
            overall_recommendation: String::new(),
        };

        let mut confidence_sum = 0.0;
        let mut confidence_count = 0usize;

        for outcome in outcomes {
            match outcome.verdict {
                Verdict::Pass => summary.passed += 1,
                Verdict::Fail => {
                    summary.failed += 1;
                    summary.critical_issues.push(outcome.message.clone());
                }
                Verdict::Warning => {
                    summary.warnings += 1;
                    summary.recommendations.push(outcome.message.clone());
                }
                Verdict::Skip => summary.skipped += 1,
            }

            if outcome.confidence > 0.0 {
                confidence_sum += outcome.confidence;
                confidence_count += 1;
            }
        }

        if confidence_count > 0 {
            summary.overall_confidence = confidence_sum / confidence_count as f64;
        }

        summary.overall_recommendation = if summary.failed > 0 {
            RECOMMEND_REVISION.to_string()
        } else if summary.warnings > 0 {
            RECOMMEND_COMPLETION.to_string()
        } else {
            RECOMMEND_CLEAN.to_string()
        };

        summary
    }

    /// True when no rule failed.
    pub fn is_acceptable(&self) -> bool {
        self.failed == 0
    }
}
