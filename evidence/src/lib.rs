//! Evidence Library
//!
//! Core helpers for debate agents that gather and cite evidence:
//! - Formatting raw search findings into a flat evidence record
//! - Removing duplicate records by normalized title
//! - Short citation ids (`tool_xxxxxx`) and `[TOOL:<id>]` marker scanning
//! - Explicit tool schemas for agent frameworks
//!
//! # Usage
//!
//! ```
//! use evidence::{deduplicate_sources, format_evidence, FormatEvidenceArgs};
//!
//! let a = format_evidence(FormatEvidenceArgs::new("Sea Levels Rising", "...", "Nature"));
//! let b = format_evidence(FormatEvidenceArgs::new("sea levels rising", "...", "BBC News"));
//! let unique = deduplicate_sources(vec![a.clone(), b]);
//! assert_eq!(unique, vec![a]);
//! ```

pub mod citation;
pub mod dedup;
pub mod error;
pub mod format;
pub mod id;
pub mod record;
pub mod registry;
pub mod tool_schema;

pub use citation::{audit_citations, extract_citations, CitationAudit};
pub use dedup::{deduplicate_sources, normalize_title, Titled};
pub use error::{EvidenceError, EvidenceResult};
pub use format::{format_evidence, format_evidence_with_id, FormatEvidenceArgs};
pub use id::EvidenceId;
pub use record::{EvidenceRecord, SourceType};
pub use registry::SessionRegistry;
