//! Turning raw search findings into an [`EvidenceRecord`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::id::EvidenceId;
use crate::record::{EvidenceRecord, SourceType};

fn default_source_type() -> String {
    "web".to_string()
}

/// Arguments of the `format_evidence` tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatEvidenceArgs {
    /// Title of the source (article, paper, page).
    pub title: String,
    /// Key excerpt or finding (1-3 sentences).
    pub snippet: String,
    /// Name of the source (e.g. "BBC News", "Nature").
    pub source: String,
    /// One of "web", "academic", "news", "data". Not enforced.
    #[serde(default = "default_source_type")]
    pub source_type: String,
    /// Publication date if available (e.g. "2025-03").
    #[serde(default)]
    pub date: String,
    /// URL of the source if available.
    #[serde(default)]
    pub url: String,
}

impl FormatEvidenceArgs {
    /// Required fields only; `source_type` is `web`, `date` and `url` empty.
    pub fn new(
        title: impl Into<String>,
        snippet: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            snippet: snippet.into(),
            source: source.into(),
            source_type: default_source_type(),
            date: String::new(),
            url: String::new(),
        }
    }

    pub fn with_source_type(mut self, source_type: impl Into<String>) -> Self {
        self.source_type = source_type.into();
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

/// Build an evidence record with a freshly generated id.
///
/// Fields are copied verbatim. Never fails, even when every field is empty.
pub fn format_evidence(args: FormatEvidenceArgs) -> EvidenceRecord {
    format_evidence_with_id(args, EvidenceId::generate())
}

/// Build an evidence record around an id the caller already issued.
pub fn format_evidence_with_id(args: FormatEvidenceArgs, id: EvidenceId) -> EvidenceRecord {
    let source_type = SourceType::from(args.source_type);
    if !source_type.is_recognized() {
        debug!(source_type = %source_type, "unrecognized source type passed through");
    }
    debug!(id = %id, source_type = %source_type, "formatted evidence");

    EvidenceRecord {
        id,
        title: args.title,
        snippet: args.snippet,
        source: args.source,
        source_type,
        date: args.date,
        url: args.url,
    }
}
