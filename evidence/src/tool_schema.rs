//! Tool Schemas: explicit invocation contracts
//!
//! Agent frameworks need a parameter schema for every tool. Instead of
//! inferring one from signatures, each tool's arguments are listed here as
//! data: name, type, required/optional, default and description.
//!
//! ```text
//! format_evidence      title, snippet, source, source_type?, date?, url?
//! deduplicate_sources  sources
//! ```
//!
//! Renaming a parameter or changing a default here changes the contract
//! agents see.

use serde_json::{json, Map, Value};

use crate::record::SourceType;

// ── Parameter model ───────────────────────────────────────────────────

/// JSON schema type of a tool parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Array,
    Object,
}

impl ParamKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

/// One tool argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    pub required: bool,
    /// Value used when the caller omits the argument.
    pub default: Option<&'static str>,
    pub description: &'static str,
    /// Suggested values, advertised as a JSON schema `enum`.
    pub allowed: &'static [&'static str],
    /// Element type for `Array` parameters.
    pub items: Option<ParamKind>,
}

impl ParamSpec {
    const fn required(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::String,
            required: true,
            default: None,
            description,
            allowed: &[],
            items: None,
        }
    }

    const fn optional(
        name: &'static str,
        default: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            kind: ParamKind::String,
            required: false,
            default: Some(default),
            description,
            allowed: &[],
            items: None,
        }
    }

    fn to_json(&self) -> Value {
        let mut prop = Map::new();
        prop.insert("type".into(), json!(self.kind.as_str()));
        prop.insert("description".into(), json!(self.description));
        if let Some(items) = self.items {
            prop.insert("items".into(), json!({ "type": items.as_str() }));
        }
        if !self.allowed.is_empty() {
            prop.insert("enum".into(), json!(self.allowed));
        }
        if let Some(default) = self.default {
            prop.insert("default".into(), json!(default));
        }
        Value::Object(prop)
    }
}

/// Name, description and arguments of one tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolSchema {
    pub name: &'static str,
    pub description: &'static str,
    pub params: &'static [ParamSpec],
}

impl ToolSchema {
    /// JSON schema object for the tool's arguments.
    ///
    /// The `required` key is omitted when no argument is required.
    pub fn parameters_json(&self) -> Value {
        let properties: Map<String, Value> = self
            .params
            .iter()
            .map(|p| (p.name.to_string(), p.to_json()))
            .collect();

        let mut schema = Map::new();
        schema.insert("type".into(), json!("object"));
        schema.insert("properties".into(), Value::Object(properties));

        let required = self.required_params();
        if !required.is_empty() {
            schema.insert("required".into(), json!(required));
        }
        Value::Object(schema)
    }

    pub fn required_params(&self) -> Vec<&'static str> {
        self.params
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name)
            .collect()
    }

    pub fn param(&self, name: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|p| p.name == name)
    }
}

// ── format_evidence ───────────────────────────────────────────────────

pub const FORMAT_EVIDENCE: ToolSchema = ToolSchema {
    name: "format_evidence",
    description: "Format a piece of evidence into the standard court format. \
                  Call this after finding relevant information from a search. \
                  Returns a structured evidence object with a unique ID that \
                  agents can cite using [TOOL:<id>] notation.",
    params: &[
        ParamSpec::required("title", "Title of the source (article, paper, page)."),
        ParamSpec::required("snippet", "Key excerpt or finding (1-3 sentences)."),
        ParamSpec::required(
            "source",
            "Name of the source (e.g. \"BBC News\", \"Nature\").",
        ),
        ParamSpec {
            allowed: &SourceType::RECOGNIZED,
            ..ParamSpec::optional(
                "source_type",
                "web",
                "One of \"web\", \"academic\", \"news\", \"data\".",
            )
        },
        ParamSpec::optional(
            "date",
            "",
            "Publication date if available (e.g. \"2025-03\").",
        ),
        ParamSpec::optional("url", "", "URL of the source if available."),
    ],
};

// ── deduplicate_sources ───────────────────────────────────────────────

pub const DEDUPLICATE_SOURCES: ToolSchema = ToolSchema {
    name: "deduplicate_sources",
    description: "Remove duplicate evidence sources based on title similarity. \
                  Call this after gathering evidence from multiple search tools \
                  to eliminate redundant results before presenting to the court. \
                  Returns the deduplicated list of evidence objects.",
    params: &[ParamSpec {
        kind: ParamKind::Array,
        items: Some(ParamKind::Object),
        ..ParamSpec::required("sources", "List of evidence objects from format_evidence.")
    }],
};

/// Every tool schema in this crate.
pub fn all() -> [ToolSchema; 2] {
    [FORMAT_EVIDENCE, DEDUPLICATE_SOURCES]
}
