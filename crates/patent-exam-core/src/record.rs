//! Structured patent application data
//!
//! A [`PatentRecord`] is what extraction recovers from the raw text of a
//! utility-model filing. Every field is independently optional: a document
//! missing one section still yields a record carrying everything else.

use serde::{Deserialize, Serialize};

/// Structured data recovered from a patent application text.
///
/// Absent fields are `None` (or empty for the sequence fields), never a
/// sentinel string. How absence is rendered ("未识别" and the like) is a
/// presentation concern and does not belong in the record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatentRecord {
    /// Application number as written in the filing, check digit included
    /// (e.g. `202123456789.0`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_number: Option<String>,
    /// Filing date as captured from the source (`2021年12月15`, `2021.12.15`,
    /// ...). Kept as a string; date normalization is out of scope.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_date: Option<String>,
    /// Invention title (`发明名称` / `实用新型名称`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Applicant name (`申请人`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applicant: Option<String>,
    /// Inventor name (`发明人`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventor: Option<String>,
    /// Patent agency or agent (`代理机构` / `代理人`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent: Option<String>,
    /// `技术领域` section body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technical_field: Option<String>,
    /// `背景技术` section body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_art: Option<String>,
    /// `发明内容` section body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invention_content: Option<String>,
    /// `说明书` section body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Individual claims, each normalized to `"<n>. <text>"` with the
    /// number as written in the source.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub claims: Vec<String>,
    /// Abstract section body. `abstract` is a reserved word in Rust, hence
    /// the field name; serialized forms still use `abstract`.
    #[serde(
        rename = "abstract",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub abstract_text: Option<String>,
    /// Figure references from the `附图说明` section (`图1...`, `图2...`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub drawings_references: Vec<String>,
}

impl PatentRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when nothing at all was recovered.
    pub fn is_empty(&self) -> bool {
        self.application_number.is_none()
            && self.application_date.is_none()
            && self.title.is_none()
            && self.applicant.is_none()
            && self.inventor.is_none()
            && self.agent.is_none()
            && self.technical_field.is_none()
            && self.background_art.is_none()
            && self.invention_content.is_none()
            && self.description.is_none()
            && self.claims.is_empty()
            && self.abstract_text.is_none()
            && self.drawings_references.is_empty()
    }
}
