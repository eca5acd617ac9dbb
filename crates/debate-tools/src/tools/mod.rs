//! Rig-compatible tools for evidence handling.
//!
//! Each tool implements `rig::tool::Tool` and can be attached to agents
//! via `AgentBuilder::tool()`, or in bulk through [`bundles::evidence_tools`].

pub mod bundles;
pub mod deduplicate_tool;
pub mod format_evidence_tool;

use rig::completion::ToolDefinition;

use evidence::tool_schema::ToolSchema;

/// Errors that can occur during tool execution.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("evidence error: {0}")]
    Evidence(#[from] evidence::EvidenceError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Build a rig tool definition from an explicit schema.
pub fn definition_from_schema(schema: &ToolSchema) -> ToolDefinition {
    ToolDefinition {
        name: schema.name.into(),
        description: schema.description.into(),
        parameters: schema.parameters_json(),
    }
}
