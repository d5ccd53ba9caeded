//! Examination rule engine
//!
//! This module provides the engine that owns the rule registry and drives
//! examinations. The engine never mutates records, and it contains every
//! rule failure: a rule that errors or panics is recorded as a skipped
//! outcome while the remaining rules still run.

pub mod outcome;
pub mod rules;
pub mod summary;

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::record::PatentRecord;
use outcome::{Outcome, RuleKind};
use rules::{BoxedRule, Rule};
use summary::Summary;

/// Introspection snapshot of one registered rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleInfo {
    /// Rule name
    pub name: String,
    /// Examination dimension
    pub kind: RuleKind,
    /// Execution order
    pub priority: i32,
    /// Whether the rule currently participates in runs
    pub active: bool,
}

/// Examination presets, each mapping to a rule kind filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExaminationType {
    /// Formal review only
    Formal,
    /// Novelty, inventiveness and utility
    Substantive,
    /// Every registered rule
    Comprehensive,
}

impl ExaminationType {
    /// Kind filter for this examination type; `None` runs everything.
    pub fn kinds(&self) -> Option<&'static [RuleKind]> {
        match self {
            ExaminationType::Formal => Some(&[RuleKind::Formal]),
            ExaminationType::Substantive => Some(&[
                RuleKind::Novelty,
                RuleKind::Inventiveness,
                RuleKind::Utility,
            ]),
            ExaminationType::Comprehensive => None,
        }
    }
}

impl std::fmt::Display for ExaminationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExaminationType::Formal => write!(f, "formal"),
            ExaminationType::Substantive => write!(f, "substantive"),
            ExaminationType::Comprehensive => write!(f, "comprehensive"),
        }
    }
}

impl std::str::FromStr for ExaminationType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "formal" => Ok(ExaminationType::Formal),
            "substantive" => Ok(ExaminationType::Substantive),
            "comprehensive" => Ok(ExaminationType::Comprehensive),
            other => Err(format!("unknown examination type: {}", other)),
        }
    }
}

struct RuleEntry {
    rule: Arc<dyn Rule>,
    active: bool,
}

/// The examination engine: an ordered registry of rules plus execution.
///
/// Registry mutation takes `&mut self` and execution takes `&self`, so the
/// borrow checker enforces the exclusion a shared deployment would get from
/// a read-write lock. All contained types are `Send + Sync`; cross-thread
/// sharing works with `Arc<RwLock<RuleEngine>>` at the call site.
pub struct RuleEngine {
    entries: Vec<RuleEntry>,
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleEngine {
    /// Create an engine with the built-in rules registered.
    pub fn new() -> Self {
        let mut engine = Self::empty();
        engine.register_default_rules();
        engine
    }

    /// Create an engine with no rules.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn register_default_rules(&mut self) {
        self.register(Arc::new(rules::completeness::CompletenessRule::new()));
        self.register(Arc::new(rules::subject_matter::SubjectMatterRule::new()));
        self.register(Arc::new(rules::claims_format::ClaimsFormatRule::new()));
    }

    /// Register a rule, replacing any registered rule of the same name.
    ///
    /// Rules execute in ascending priority order; equal priorities keep
    /// their registration order. A replacement arrives active.
    pub fn register(&mut self, rule: Arc<dyn Rule>) {
        self.entries.retain(|entry| entry.rule.name() != rule.name());
        self.entries.push(RuleEntry { rule, active: true });
        self.sort_by_priority();
    }

    /// Register a boxed rule.
    pub fn register_boxed(&mut self, rule: BoxedRule) {
        self.register(Arc::from(rule));
    }

    /// Remove a rule by name; unknown names are a no-op.
    pub fn unregister(&mut self, name: &str) {
        self.entries.retain(|entry| entry.rule.name() != name);
        self.sort_by_priority();
    }

    /// Activate or deactivate a rule without unregistering it.
    ///
    /// Returns whether a rule of that name exists; unknown names are a
    /// no-op.
    pub fn set_active(&mut self, name: &str, active: bool) -> bool {
        match self
            .entries
            .iter_mut()
            .find(|entry| entry.rule.name() == name)
        {
            Some(entry) => {
                entry.active = active;
                true
            }
            None => false,
        }
    }

    fn sort_by_priority(&mut self) {
        self.entries.sort_by_key(|entry| entry.rule.priority());
    }

    /// Snapshot of the registry in execution order.
    pub fn rules(&self) -> Vec<RuleInfo> {
        self.entries
            .iter()
            .map(|entry| RuleInfo {
                name: entry.rule.name().to_string(),
                kind: entry.rule.kind(),
                priority: entry.rule.priority(),
                active: entry.active,
            })
            .collect()
    }

    /// Evaluate a record against the registered rules, in priority order.
    ///
    /// Inactive rules and rules outside the `kinds` filter are skipped
    /// silently and leave no outcome. A rule that returns an error or
    /// panics yields a skipped outcome in its place; the remaining rules
    /// still run.
    pub fn execute(&self, record: &PatentRecord, kinds: Option<&[RuleKind]>) -> Vec<Outcome> {
        let mut outcomes = Vec::new();

        for entry in &self.entries {
            if !entry.active {
                continue;
            }
            if let Some(kinds) = kinds {
                if !kinds.contains(&entry.rule.kind()) {
                    continue;
                }
            }

            let start = Instant::now();
            let evaluated = panic::catch_unwind(AssertUnwindSafe(|| entry.rule.evaluate(record)));

            let outcome = match evaluated {
                Ok(Ok(mut outcome)) => {
                    outcome.execution_time = start.elapsed();
                    debug!(
                        rule = entry.rule.name(),
                        verdict = %outcome.verdict,
                        "rule evaluated"
                    );
                    outcome
                }
                Ok(Err(error)) => {
                    warn!(rule = entry.rule.name(), %error, "rule failed, recording skip");
                    Outcome::skipped(entry.rule.name(), entry.rule.kind(), &error.to_string())
                }
                Err(payload) => {
                    let reason = panic_reason(payload.as_ref());
                    warn!(
                        rule = entry.rule.name(),
                        reason = %reason,
                        "rule panicked, recording skip"
                    );
                    Outcome::skipped(entry.rule.name(), entry.rule.kind(), &reason)
                }
            };
            outcomes.push(outcome);
        }

        outcomes
    }

    /// Evaluate a record under an examination preset.
    pub fn execute_preset(
        &self,
        record: &PatentRecord,
        examination: ExaminationType,
    ) -> Vec<Outcome> {
        self.execute(record, examination.kinds())
    }

    /// Aggregate a run's outcomes into a summary.
    pub fn summarize(&self, outcomes: &[Outcome]) -> Summary {
        Summary::from_outcomes(outcomes)
    }
}

fn panic_reason(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "rule panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::outcome::Verdict;
    use crate::error::RuleError;

    struct FixedRule {
        name: &'static str,
        kind: RuleKind,
        priority: i32,
    }

    impl Rule for FixedRule {
        fn name(&self) -> &str {
            self.name
        }

        fn kind(&self) -> RuleKind {
            self.kind
        }

        fn priority(&self) -> i32 {
            self.priority
        }

        fn evaluate(&self, _record: &PatentRecord) -> Result<Outcome, RuleError> {
            Ok(Outcome::new(
                self.name,
                self.kind,
                Verdict::Pass,
                0.9,
                "通过",
            ))
        }
    }

    struct FailingRule;

    impl Rule for FailingRule {
        fn name(&self) -> &str {
            "不稳定的规则"
        }

        fn kind(&self) -> RuleKind {
            RuleKind::Novelty
        }

        fn priority(&self) -> i32 {
            2
        }

        fn evaluate(&self, _record: &PatentRecord) -> Result<Outcome, RuleError> {
            Err(RuleError::internal("检索服务不可用"))
        }
    }

    struct PanickingRule;

    impl Rule for PanickingRule {
        fn name(&self) -> &str {
            "越界的规则"
        }

        fn kind(&self) -> RuleKind {
            RuleKind::Utility
        }

        fn priority(&self) -> i32 {
            2
        }

        fn evaluate(&self, _record: &PatentRecord) -> Result<Outcome, RuleError> {
            panic!("下标越界");
        }
    }

    #[test]
    fn test_default_engine_has_builtin_rules_in_order() {
        let engine = RuleEngine::new();
        let rules = engine.rules();
        assert_eq!(rules.len(), 3);
        assert_eq!(rules[0].name, "文档完整性检查");
        assert_eq!(rules[1].name, "保护客体判断");
        assert_eq!(rules[2].name, "权利要求书格式检查");
        assert!(rules.iter().all(|info| info.active));
    }

    #[test]
    fn test_empty_engine_has_no_rules() {
        let engine = RuleEngine::empty();
        assert!(engine.rules().is_empty());
        assert!(engine.execute(&PatentRecord::new(), None).is_empty());
    }

    #[test]
    fn test_rules_execute_in_priority_order() {
        let mut engine = RuleEngine::empty();
        engine.register(Arc::new(FixedRule {
            name: "后",
            kind: RuleKind::Formal,
            priority: 9,
        }));
        engine.register(Arc::new(FixedRule {
            name: "先",
            kind: RuleKind::Formal,
            priority: 1,
        }));

        let outcomes = engine.execute(&PatentRecord::new(), None);
        let names: Vec<&str> = outcomes.iter().map(|o| o.rule_name.as_str()).collect();
        assert_eq!(names, vec!["先", "后"]);
    }

    #[test]
    fn test_equal_priorities_keep_registration_order() {
        let mut engine = RuleEngine::empty();
        engine.register(Arc::new(FixedRule {
            name: "甲",
            kind: RuleKind::Formal,
            priority: 5,
        }));
        engine.register(Arc::new(FixedRule {
            name: "乙",
            kind: RuleKind::Formal,
            priority: 5,
        }));

        let rules = engine.rules();
        assert_eq!(rules[0].name, "甲");
        assert_eq!(rules[1].name, "乙");
    }

    #[test]
    fn test_register_replaces_same_name() {
        let mut engine = RuleEngine::empty();
        engine.register(Arc::new(FixedRule {
            name: "同名",
            kind: RuleKind::Formal,
            priority: 1,
        }));
        engine.set_active("同名", false);
        engine.register(Arc::new(FixedRule {
            name: "同名",
            kind: RuleKind::Utility,
            priority: 7,
        }));

        let rules = engine.rules();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].kind, RuleKind::Utility);
        assert_eq!(rules[0].priority, 7);
        // a replacement arrives active
        assert!(rules[0].active);
    }

    #[test]
    fn test_unregister_unknown_name_is_noop() {
        let mut engine = RuleEngine::new();
        engine.unregister("没有这条规则");
        assert_eq!(engine.rules().len(), 3);

        engine.unregister("保护客体判断");
        assert_eq!(engine.rules().len(), 2);
    }

    #[test]
    fn test_set_active_excludes_rule_from_runs() {
        let mut engine = RuleEngine::new();
        assert!(engine.set_active("保护客体判断", false));
        assert!(!engine.set_active("没有这条规则", false));

        let outcomes = engine.execute(&PatentRecord::new(), None);
        assert_eq!(outcomes.len(), 2);
        assert!(outcomes.iter().all(|o| o.rule_name != "保护客体判断"));

        engine.set_active("保护客体判断", true);
        assert_eq!(engine.execute(&PatentRecord::new(), None).len(), 3);
    }

    #[test]
    fn test_kind_filter_skips_silently() {
        let engine = RuleEngine::new();
        let outcomes = engine.execute(&PatentRecord::new(), Some(&[RuleKind::SubjectMatter]));
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].rule_name, "保护客体判断");

        // no SKIP placeholders for the filtered-out rules
        assert!(outcomes.iter().all(|o| o.verdict != Verdict::Skip));
    }

    #[test]
    fn test_failing_rule_becomes_skip_and_run_continues() {
        let mut engine = RuleEngine::empty();
        engine.register(Arc::new(FailingRule));
        engine.register(Arc::new(FixedRule {
            name: "后续规则",
            kind: RuleKind::Formal,
            priority: 9,
        }));

        let outcomes = engine.execute(&PatentRecord::new(), None);
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].verdict, Verdict::Skip);
        assert_eq!(outcomes[0].confidence, 0.0);
        assert_eq!(outcomes[0].message, "规则执行失败: 检索服务不可用");
        assert_eq!(outcomes[0].execution_time, std::time::Duration::ZERO);
        assert_eq!(outcomes[1].verdict, Verdict::Pass);
    }

    #[test]
    fn test_panicking_rule_becomes_skip_and_run_continues() {
        let mut engine = RuleEngine::empty();
        engine.register(Arc::new(PanickingRule));
        engine.register(Arc::new(FixedRule {
            name: "后续规则",
            kind: RuleKind::Formal,
            priority: 9,
        }));

        let outcomes = engine.execute(&PatentRecord::new(), None);
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].verdict, Verdict::Skip);
        assert_eq!(outcomes[0].message, "规则执行失败: 下标越界");
        assert_eq!(outcomes[1].verdict, Verdict::Pass);
    }

    #[test]
    fn test_examination_type_kind_filters() {
        assert_eq!(
            ExaminationType::Formal.kinds(),
            Some(&[RuleKind::Formal][..])
        );
        assert_eq!(ExaminationType::Comprehensive.kinds(), None);

        let engine = RuleEngine::new();
        let formal = engine.execute_preset(&PatentRecord::new(), ExaminationType::Formal);
        assert_eq!(formal.len(), 2);

        // no built-in rule covers the substantive kinds yet
        let substantive =
            engine.execute_preset(&PatentRecord::new(), ExaminationType::Substantive);
        assert!(substantive.is_empty());

        let comprehensive =
            engine.execute_preset(&PatentRecord::new(), ExaminationType::Comprehensive);
        assert_eq!(comprehensive.len(), 3);
    }

    #[test]
    fn test_examination_type_from_str() {
        assert_eq!(
            "formal".parse::<ExaminationType>(),
            Ok(ExaminationType::Formal)
        );
        assert!("quick".parse::<ExaminationType>().is_err());
    }

    #[test]
    fn test_summarize_delegates_to_summary() {
        let engine = RuleEngine::new();
        let outcomes = engine.execute(&PatentRecord::new(), None);
        let summary = engine.summarize(&outcomes);
        assert_eq!(summary.total_rules, outcomes.len());
    }
}
