//! Examination rule framework
//!
//! This module provides the abstraction for pluggable examination rules and
//! the built-in rules every engine starts with.

pub mod claims_format;
pub mod completeness;
pub mod subject_matter;

use crate::engine::outcome::{Outcome, RuleKind};
use crate::error::RuleError;
use crate::record::PatentRecord;

/// Trait for implementing examination rules
///
/// Rules are synchronous, deterministic and hold no per-evaluation state:
/// the same record always yields the same outcome. A rule may return an
/// error when it cannot evaluate a record; the engine converts such
/// failures into skipped outcomes instead of propagating them, so an error
/// here never aborts a run.
pub trait Rule: Send + Sync {
    /// Stable, human-readable rule name; unique within a registry
    fn name(&self) -> &str;

    /// Examination dimension this rule belongs to
    fn kind(&self) -> RuleKind;

    /// Execution order; lower priorities run earlier
    fn priority(&self) -> i32;

    /// Evaluate the rule against a record
    ///
    /// The returned outcome's `execution_time` is stamped by the engine
    /// after this method returns.
    fn evaluate(&self, record: &PatentRecord) -> Result<Outcome, RuleError>;
}

/// A boxed rule for dynamic dispatch
pub type BoxedRule = Box<dyn Rule>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::outcome::Verdict;

    struct AlwaysPass;

    impl Rule for AlwaysPass {
        fn name(&self) -> &str {
            "总是通过"
        }

        fn kind(&self) -> RuleKind {
            RuleKind::Utility
        }

        fn priority(&self) -> i32 {
            10
        }

        fn evaluate(&self, _record: &PatentRecord) -> Result<Outcome, RuleError> {
            Ok(Outcome::new(
                self.name(),
                self.kind(),
                Verdict::Pass,
                1.0,
                "通过",
            ))
        }
    }

    #[test]
    fn test_rules_are_object_safe() {
        let rule: BoxedRule = Box::new(AlwaysPass);
        assert_eq!(rule.name(), "总是通过");
        assert_eq!(rule.kind(), RuleKind::Utility);
        assert_eq!(rule.priority(), 10);

        let outcome = rule.evaluate(&PatentRecord::new()).unwrap();
        assert_eq!(outcome.verdict, Verdict::Pass);
    }
}
