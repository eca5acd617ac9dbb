//! Rig-compatible evidence tools for debate agents.
//!
//! Wraps the `evidence` crate's formatter and deduplicator as
//! `rig::tool::Tool` implementations, plus the configuration that decides
//! how evidence ids are issued.

pub mod config;
pub mod tools;

pub use config::ToolsConfig;
