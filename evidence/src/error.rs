//! Evidence error types.

use thiserror::Error;

/// Result type alias for fallible evidence operations.
pub type EvidenceResult<T> = Result<T, EvidenceError>;

/// Errors raised by the opt-in parts of this crate.
///
/// Formatting and deduplication are total and never produce these.
#[derive(Debug, Error)]
pub enum EvidenceError {
    #[error("no unused evidence id found after {attempts} attempts")]
    IdSpaceExhausted { attempts: u32 },

    #[error("`{0}` is not an evidence id (expected tool_ followed by 6 lowercase hex digits)")]
    InvalidId(String),
}
