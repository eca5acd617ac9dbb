//! Tool bundle constructors for agent wiring.
//!
//! Builds the `Vec<Box<dyn ToolDyn>>` handed to an agent builder so callers
//! don't repeat `.tool(...)` chains. When `unique_ids` is configured, every
//! formatter in the bundle shares one session registry.

use std::sync::Arc;

use evidence::SessionRegistry;
use rig::tool::ToolDyn;

use super::deduplicate_tool::DeduplicateSourcesTool;
use super::format_evidence_tool::FormatEvidenceTool;
use crate::config::ToolsConfig;

/// Session registry for `config`, or `None` when ids are drawn unchecked.
pub fn session_registry(config: &ToolsConfig) -> Option<Arc<SessionRegistry>> {
    config
        .unique_ids
        .then(|| Arc::new(SessionRegistry::new(config.max_id_attempts)))
}

/// The formatter as configured: registry-backed or plain.
pub fn format_evidence_tool(config: &ToolsConfig) -> FormatEvidenceTool {
    match session_registry(config) {
        Some(registry) => FormatEvidenceTool::with_registry(registry),
        None => FormatEvidenceTool::new(),
    }
}

/// Both evidence tools: `format_evidence` and `deduplicate_sources`.
pub fn evidence_tools(config: &ToolsConfig) -> Vec<Box<dyn ToolDyn>> {
    vec![
        Box::new(format_evidence_tool(config)),
        Box::new(DeduplicateSourcesTool::new()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(unique_ids: bool) -> ToolsConfig {
        ToolsConfig {
            unique_ids,
            ..ToolsConfig::builtin()
        }
    }

    #[test]
    fn test_bundle_tool_names() {
        let tools = evidence_tools(&config(false));
        let names: Vec<String> = tools.iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["format_evidence", "deduplicate_sources"]);
    }

    #[test]
    fn test_registry_follows_config() {
        assert!(format_evidence_tool(&config(false)).registry().is_none());

        let cfg = ToolsConfig {
            max_id_attempts: 5,
            ..config(true)
        };
        let tool = format_evidence_tool(&cfg);
        assert_eq!(tool.registry().map(|r| r.max_attempts()), Some(5));
    }
}
