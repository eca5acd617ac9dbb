//! Tool for dropping evidence that repeats an already-seen title.

use evidence::deduplicate_sources;
use evidence::tool_schema::DEDUPLICATE_SOURCES;
use rig::completion::ToolDefinition;
use rig::tool::Tool;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use super::{definition_from_schema, ToolError};

#[derive(Deserialize)]
pub struct DeduplicateSourcesArgs {
    /// Evidence objects, usually produced by `format_evidence`. Objects
    /// without a string `title` are accepted and dropped.
    pub sources: Vec<Map<String, Value>>,
}

/// Remove duplicate evidence by normalized title, keeping first occurrences.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeduplicateSourcesTool;

impl DeduplicateSourcesTool {
    pub fn new() -> Self {
        Self
    }
}

impl Tool for DeduplicateSourcesTool {
    const NAME: &'static str = "deduplicate_sources";
    type Error = ToolError;
    type Args = DeduplicateSourcesArgs;
    type Output = Vec<Map<String, Value>>;

    async fn definition(&self, _prompt: String) -> ToolDefinition {
        definition_from_schema(&DEDUPLICATE_SOURCES)
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error> {
        debug!(count = args.sources.len(), "deduplicate_sources called");
        Ok(deduplicate_sources(args.sources))
    }
}
