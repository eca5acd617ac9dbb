//! Scanning generated text for `[TOOL:<id>]` citation markers.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::id::EvidenceId;
use crate::record::EvidenceRecord;

/// Opening of every citation marker.
pub const CITATION_PREFIX: &str = "[TOOL:";

static CITATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[TOOL:(tool_[0-9a-f]{6})\]").expect("CITATION_RE regex should compile")
});

/// Ids cited in `text`, in order of first appearance, without repeats.
///
/// Markers whose id is not well-formed (wrong length, uppercase hex) are
/// ignored.
pub fn extract_citations(text: &str) -> Vec<EvidenceId> {
    let mut seen = HashSet::new();
    CITATION_RE
        .captures_iter(text)
        .filter_map(|caps| EvidenceId::parse(&caps[1]))
        .filter(|id| seen.insert(id.clone()))
        .collect()
}

/// Cited ids split by whether a matching record exists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CitationAudit {
    pub resolved: Vec<EvidenceId>,
    pub unresolved: Vec<EvidenceId>,
}

impl CitationAudit {
    /// True when every citation points at a known record.
    pub fn is_clean(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Check the citations in `text` against the records gathered so far.
pub fn audit_citations(text: &str, records: &[EvidenceRecord]) -> CitationAudit {
    let known: HashSet<&EvidenceId> = records.iter().map(|r| &r.id).collect();
    let (resolved, unresolved): (Vec<_>, Vec<_>) = extract_citations(text)
        .into_iter()
        .partition(|id| known.contains(id));
    CitationAudit {
        resolved,
        unresolved,
    }
}
