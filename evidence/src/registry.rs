//! Per-session evidence id registry.
//!
//! Plain [`EvidenceId::generate`] never checks for collisions. A
//! `SessionRegistry` remembers every id it issued and redraws on a clash,
//! keeping the same short `tool_xxxxxx` shape. It lives only as long as the
//! caller keeps it; nothing is persisted.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

use tracing::warn;

use crate::error::{EvidenceError, EvidenceResult};
use crate::format::{format_evidence_with_id, FormatEvidenceArgs};
use crate::id::EvidenceId;
use crate::record::EvidenceRecord;

/// Default number of draws before giving up on finding an unused id.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 16;

#[derive(Debug)]
pub struct SessionRegistry {
    issued: Mutex<HashSet<EvidenceId>>,
    max_attempts: u32,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS)
    }
}

impl SessionRegistry {
    /// `max_attempts` below 1 is treated as 1.
    pub fn new(max_attempts: u32) -> Self {
        Self {
            issued: Mutex::new(HashSet::new()),
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    // A poisoned lock still holds a valid set of ids.
    fn lock(&self) -> MutexGuard<'_, HashSet<EvidenceId>> {
        self.issued
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Issue an id not handed out before in this session.
    pub fn issue(&self) -> EvidenceResult<EvidenceId> {
        self.issue_from(EvidenceId::generate)
    }

    fn issue_from(&self, mut draw: impl FnMut() -> EvidenceId) -> EvidenceResult<EvidenceId> {
        let mut issued = self.lock();
        for attempt in 1..=self.max_attempts {
            let id = draw();
            if issued.insert(id.clone()) {
                return Ok(id);
            }
            warn!(id = %id, attempt, "evidence id collision, redrawing");
        }
        Err(EvidenceError::IdSpaceExhausted {
            attempts: self.max_attempts,
        })
    }

    /// Format a record whose id is unique within this session.
    pub fn format(&self, args: FormatEvidenceArgs) -> EvidenceResult<EvidenceRecord> {
        Ok(format_evidence_with_id(args, self.issue()?))
    }

    pub fn contains(&self, id: &str) -> bool {
        EvidenceId::parse(id).is_some_and(|id| self.lock().contains(&id))
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Forget every issued id, e.g. at the start of a new debate turn.
    pub fn clear(&self) {
        self.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> EvidenceId {
        EvidenceId::parse(raw).unwrap()
    }

    #[test]
    fn test_issue_records_ids() {
        let registry = SessionRegistry::default();
        let a = registry.issue().unwrap();
        let b = registry.issue().unwrap();
        assert_ne!(a, b);
        assert_eq!(registry.len(), 2);
        assert!(registry.contains(a.as_str()));
        assert!(!registry.contains("tool_zzzzzz"));
    }

    #[test]
    fn test_collision_redraws() {
        let registry = SessionRegistry::new(4);
        let mut draws = vec![id("tool_000001"), id("tool_000001"), id("tool_000001")].into_iter();
        let first = registry.issue_from(|| draws.next().unwrap()).unwrap();
        assert_eq!(first, id("tool_000001"));

        let mut draws = vec![id("tool_000001"), id("tool_000002")].into_iter();
        let second = registry.issue_from(|| draws.next().unwrap()).unwrap();
        assert_eq!(second, id("tool_000002"));
    }

    #[test]
    fn test_exhaustion_is_an_error() {
        let registry = SessionRegistry::new(3);
        registry.issue_from(|| id("tool_abcdef")).unwrap();
        let err = registry.issue_from(|| id("tool_abcdef")).unwrap_err();
        assert!(matches!(err, EvidenceError::IdSpaceExhausted { attempts: 3 }));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_zero_attempts_clamped() {
        assert_eq!(SessionRegistry::new(0).max_attempts(), 1);
    }

    #[test]
    fn test_format_and_clear() {
        let registry = SessionRegistry::default();
        let record = registry
            .format(FormatEvidenceArgs::new("T", "S", "Src"))
            .unwrap();
        assert!(registry.contains(record.id.as_str()));
        assert!(!registry.is_empty());
        registry.clear();
        assert!(registry.is_empty());
    }
}
