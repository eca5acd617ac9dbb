//! The evidence record and its source-type tag.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::id::EvidenceId;

/// Category of the publication an evidence record came from.
///
/// The four named variants are the values agents are told to use. Anything
/// else is kept verbatim in `Other`, so arbitrary caller strings survive a
/// serialize/deserialize round trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SourceType {
    #[default]
    Web,
    Academic,
    News,
    Data,
    /// Unrecognized tag, stored exactly as supplied.
    Other(String),
}

impl SourceType {
    /// Canonical names of the recognized variants.
    pub const RECOGNIZED: [&'static str; 4] = ["web", "academic", "news", "data"];

    /// Map a caller-supplied tag onto a variant. Matching is exact: `"Web"`
    /// is not `web` and lands in `Other("Web")`.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "web" => Self::Web,
            "academic" => Self::Academic,
            "news" => Self::News,
            "data" => Self::Data,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Web => "web",
            Self::Academic => "academic",
            Self::News => "news",
            Self::Data => "data",
            Self::Other(raw) => raw,
        }
    }

    /// Whether this is one of the four recognized tags.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for SourceType {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<&str> for SourceType {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<SourceType> for String {
    fn from(source_type: SourceType) -> Self {
        match source_type {
            SourceType::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// A normalized unit of cited information.
///
/// Serializes to a flat object of string values in the order
/// `id, title, snippet, source, source_type, date, url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceRecord {
    /// Citation id, assigned at creation.
    pub id: EvidenceId,
    /// Title of the source (article, paper, page).
    pub title: String,
    /// Key excerpt or finding.
    pub snippet: String,
    /// Name of the source, e.g. "BBC News" or "Nature".
    pub source: String,
    pub source_type: SourceType,
    /// Publication date if known (e.g. "2025-03"), otherwise empty.
    #[serde(default)]
    pub date: String,
    /// Source URL if known, otherwise empty.
    #[serde(default)]
    pub url: String,
}

impl EvidenceRecord {
    /// The `[TOOL:<id>]` marker for citing this record.
    pub fn citation(&self) -> String {
        self.id.citation()
    }
}
