//! Tool for wrapping a search finding into a citable evidence record.

use std::sync::Arc;

use evidence::tool_schema::FORMAT_EVIDENCE;
use evidence::{format_evidence, EvidenceRecord, FormatEvidenceArgs, SessionRegistry};
use rig::completion::ToolDefinition;
use rig::tool::Tool;
use tracing::debug;

use super::{definition_from_schema, ToolError};

/// Format raw search findings into an evidence record with a fresh id.
///
/// With a registry attached, ids are unique within the registry's session;
/// otherwise they are drawn without any collision check.
#[derive(Debug, Clone, Default)]
pub struct FormatEvidenceTool {
    registry: Option<Arc<SessionRegistry>>,
}

impl FormatEvidenceTool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue ids through a shared session registry.
    pub fn with_registry(registry: Arc<SessionRegistry>) -> Self {
        Self {
            registry: Some(registry),
        }
    }

    pub fn registry(&self) -> Option<&Arc<SessionRegistry>> {
        self.registry.as_ref()
    }
}

impl Tool for FormatEvidenceTool {
    const NAME: &'static str = "format_evidence";
    type Error = ToolError;
    type Args = FormatEvidenceArgs;
    type Output = EvidenceRecord;

    async fn definition(&self, _prompt: String) -> ToolDefinition {
        definition_from_schema(&FORMAT_EVIDENCE)
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error> {
        debug!(title = %args.title, source = %args.source, "format_evidence called");
        match &self.registry {
            Some(registry) => Ok(registry.format(args)?),
            None => Ok(format_evidence(args)),
        }
    }
}
