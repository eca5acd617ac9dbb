//! Short citation identifiers for evidence records.
//!
//! Ids look like `tool_3fa9c1` and are cited in generated text as
//! `[TOOL:tool_3fa9c1]`. The 6-hex suffix (24 bits) keeps citations short;
//! collisions become likely after a few thousand ids, so callers that need
//! stronger uniqueness issue ids through [`crate::SessionRegistry`].

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EvidenceError;

/// Fixed prefix of every evidence id.
pub const ID_PREFIX: &str = "tool_";

/// Number of hex characters after the prefix.
pub const ID_HEX_LEN: usize = 6;

/// A well-formed evidence id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EvidenceId(String);

impl EvidenceId {
    /// Draw a fresh id from a random v4 UUID.
    ///
    /// Takes the first 6 characters of the UUID's simple (lowercase,
    /// unhyphenated) encoding. No collision check.
    pub fn generate() -> Self {
        let hex = Uuid::new_v4().simple().to_string();
        Self(format!("{ID_PREFIX}{}", &hex[..ID_HEX_LEN]))
    }

    /// Parse an id, accepting only the exact `tool_xxxxxx` shape.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::is_well_formed(raw).then(|| Self(raw.to_string()))
    }

    /// Whether `raw` is `tool_` followed by exactly 6 lowercase hex digits.
    pub fn is_well_formed(raw: &str) -> bool {
        match raw.strip_prefix(ID_PREFIX) {
            Some(suffix) => {
                suffix.len() == ID_HEX_LEN
                    && suffix
                        .bytes()
                        .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
            }
            None => false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The citation marker agents embed in text: `[TOOL:<id>]`.
    pub fn citation(&self) -> String {
        format!("[TOOL:{}]", self.0)
    }
}

impl fmt::Display for EvidenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for EvidenceId {
    type Error = EvidenceError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        if Self::is_well_formed(&raw) {
            Ok(Self(raw))
        } else {
            Err(EvidenceError::InvalidId(raw))
        }
    }
}

impl From<EvidenceId> for String {
    fn from(id: EvidenceId) -> Self {
        id.0
    }
}

impl AsRef<str> for EvidenceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_well_formed() {
        for _ in 0..256 {
            let id = EvidenceId::generate();
            assert!(
                EvidenceId::is_well_formed(id.as_str()),
                "malformed id: {id}"
            );
            assert_eq!(id.as_str().len(), ID_PREFIX.len() + ID_HEX_LEN);
        }
    }

    #[test]
    fn test_generate_is_not_memoized() {
        let ids: std::collections::HashSet<_> = (0..32).map(|_| EvidenceId::generate()).collect();
        assert!(ids.len() > 1, "32 draws produced a single id");
    }

    #[test]
    fn test_is_well_formed_rejects_bad_shapes() {
        assert!(EvidenceId::is_well_formed("tool_0a9fde"));
        assert!(!EvidenceId::is_well_formed("tool_0A9FDE"));
        assert!(!EvidenceId::is_well_formed("tool_0a9fd"));
        assert!(!EvidenceId::is_well_formed("tool_0a9fdee"));
        assert!(!EvidenceId::is_well_formed("tool_0a9fdg"));
        assert!(!EvidenceId::is_well_formed("TOOL_0a9fde"));
        assert!(!EvidenceId::is_well_formed("0a9fde"));
        assert!(!EvidenceId::is_well_formed(""));
    }

    #[test]
    fn test_citation_marker() {
        let id = EvidenceId::parse("tool_abc123").unwrap();
        assert_eq!(id.citation(), "[TOOL:tool_abc123]");
        assert_eq!(id.to_string(), "tool_abc123");
    }

    #[test]
    fn test_serde_rejects_malformed_id() {
        let ok: EvidenceId = serde_json::from_str(r#""tool_00ff00""#).unwrap();
        assert_eq!(ok.as_str(), "tool_00ff00");
        assert!(serde_json::from_str::<EvidenceId>(r#""evidence_1""#).is_err());
        assert_eq!(serde_json::to_string(&ok).unwrap(), r#""tool_00ff00""#);
    }
}
