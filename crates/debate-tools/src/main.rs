use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use debate_tools::tools::deduplicate_tool::{DeduplicateSourcesArgs, DeduplicateSourcesTool};
use debate_tools::tools::{bundles, definition_from_schema};
use debate_tools::ToolsConfig;
use evidence::{audit_citations, tool_schema, EvidenceRecord, FormatEvidenceArgs};
use rig::tool::Tool;
use tracing::info;

#[derive(Parser)]
#[command(name = "debate-tools", about = "Evidence formatting and deduplication for debate agents")]
struct Cli {
    /// TOML config file (defaults to EVIDENCE_* environment variables).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Format one finding into an evidence record.
    Format {
        #[arg(long)]
        title: String,
        #[arg(long)]
        snippet: String,
        #[arg(long)]
        source: String,
        #[arg(long, default_value = "web")]
        source_type: String,
        #[arg(long, default_value = "")]
        date: String,
        #[arg(long, default_value = "")]
        url: String,
    },
    /// Deduplicate a JSON array of evidence objects (file or stdin).
    Dedup { input: Option<PathBuf> },
    /// Print the tool definitions agents see.
    Schema,
    /// Check `[TOOL:<id>]` citations in a text against known records.
    Citations {
        /// Text to scan (file or stdin).
        input: Option<PathBuf>,
        /// JSON array of evidence records.
        #[arg(long)]
        records: PathBuf,
    },
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) => {
            std::fs::read_to_string(p).context(format!("Failed to read {}", p.display()))
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => ToolsConfig::from_file(path)?,
        None => ToolsConfig::default(),
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .init();

    match cli.command {
        Command::Format {
            title,
            snippet,
            source,
            source_type,
            date,
            url,
        } => {
            let args = FormatEvidenceArgs::new(title, snippet, source)
                .with_source_type(source_type)
                .with_date(date)
                .with_url(url);
            let record = bundles::format_evidence_tool(&config).call(args).await?;
            info!(id = %record.id, "Evidence formatted");
            print_json(&record)?;
        }
        Command::Dedup { input } => {
            let raw = read_input(input.as_deref())?;
            let sources =
                serde_json::from_str(&raw).context("Expected a JSON array of objects")?;
            let unique = DeduplicateSourcesTool::new()
                .call(DeduplicateSourcesArgs { sources })
                .await?;
            info!(kept = unique.len(), "Sources deduplicated");
            print_json(&unique)?;
        }
        Command::Schema => {
            let defs: Vec<_> = tool_schema::all()
                .iter()
                .map(definition_from_schema)
                .collect();
            print_json(&defs)?;
        }
        Command::Citations { input, records } => {
            let text = read_input(input.as_deref())?;
            let raw = read_input(Some(records.as_path()))?;
            let records: Vec<EvidenceRecord> =
                serde_json::from_str(&raw).context("Expected a JSON array of evidence records")?;
            let audit = audit_citations(&text, &records);
            if !audit.is_clean() {
                tracing::warn!(
                    unresolved = audit.unresolved.len(),
                    "Citations reference unknown evidence"
                );
            }
            print_json(&audit)?;
        }
    }

    Ok(())
}
