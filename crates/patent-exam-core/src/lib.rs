//! Utility-model patent examination core
//!
//! This crate turns raw Chinese utility-model application text into a
//! structured [`PatentRecord`] and examines it with a pluggable compliance
//! rule engine.
//!
//! ## Features
//!
//! - **Document Extraction**: Section- and label-based field extraction from
//!   raw application text, including claim decomposition
//! - **Record Validation**: Lightweight formal checks that partition findings
//!   into errors and warnings
//! - **Rule Engine**: An ordered registry of [`Rule`] implementations with
//!   per-rule failure isolation
//! - **Graded Outcomes**: Every rule run yields a verdict, a confidence and a
//!   reviewer-facing message in Chinese
//! - **Summaries**: Aggregation of a run into counts, issue lists and an
//!   overall recommendation
//!
//! ## Architecture
//!
//! 1. **Extraction** (`extract/`): Compiled pattern set, claim splitting and
//!    the [`Extractor`] entry point.
//!
//! 2. **Validation** (`validate`): [`RecordValidator`] for formal checks that
//!    need no registered rules.
//!
//! 3. **Engine** (`engine/`): [`RuleEngine`], the [`Rule`] trait, the built-in
//!    rules and outcome aggregation.
//!
//! ## Example
//!
//! ```rust
//! use patent_exam_core::{Extractor, RuleEngine};
//!
//! let text = "实用新型名称：一种新型螺栓结构\n申请人：某某公司\n";
//! let record = Extractor::new().extract(text);
//!
//! let engine = RuleEngine::new();
//! let outcomes = engine.execute(&record, None);
//! let summary = engine.summarize(&outcomes);
//! assert_eq!(summary.total_rules, 3);
//! ```

// Core modules
pub mod engine;
pub mod error;
pub mod extract;
pub mod record;
pub mod validate;

// Re-export the extraction entry points
pub use extract::{ExtractionStats, Extractor};
pub use record::PatentRecord;

// Re-export the validation types
pub use validate::{RecordValidator, ValidationReport, DEFAULT_MAX_TITLE_CHARS};

// Re-export the engine and rule plumbing
pub use engine::outcome::{Outcome, RuleKind, Verdict};
pub use engine::rules::{BoxedRule, Rule};
pub use engine::summary::Summary;
pub use engine::{ExaminationType, RuleEngine, RuleInfo};

// Re-export the built-in rules for callers composing their own engines
pub use engine::rules::claims_format::ClaimsFormatRule;
pub use engine::rules::completeness::CompletenessRule;
pub use engine::rules::subject_matter::SubjectMatterRule;

// Re-export error types
pub use error::RuleError;
