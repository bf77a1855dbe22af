//! Renderer module
//!
//! Renders a SplitReport to different output formats: jsonl, json, md

use serde::Serialize;

use crate::core::model::{FileOutcome, SplitReport, Status, Summary};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Jsonl,
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    /// Create a new render config with default options
    #[allow(dead_code)]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            pretty: false,
        }
    }

    /// Create a new render config with pretty option
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Whole-report JSON document: outcomes plus totals
#[derive(Serialize)]
struct ReportDocument<'a> {
    files: &'a [FileOutcome],
    summary: Summary,
}

/// Renderer for split reports
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    /// Create a new renderer with render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a report to a string
    pub fn render(&self, report: &SplitReport) -> String {
        match self.config.format {
            OutputFormat::Jsonl => self.render_jsonl(report),
            OutputFormat::Json => self.render_json(report),
            OutputFormat::Markdown => self.render_markdown(report),
        }
    }

    fn to_json<T: Serialize>(&self, value: &T) -> Option<String> {
        if self.config.pretty {
            serde_json::to_string_pretty(value).ok()
        } else {
            serde_json::to_string(value).ok()
        }
    }

    /// Render as JSON Lines (one outcome per line)
    fn render_jsonl(&self, report: &SplitReport) -> String {
        report
            .files
            .iter()
            .filter_map(|outcome| self.to_json(outcome))
            .collect::<Vec<_>>()
            .join(if self.config.pretty { "\n\n" } else { "\n" })
    }

    /// Render as a single JSON document with a summary
    fn render_json(&self, report: &SplitReport) -> String {
        let doc = ReportDocument {
            files: &report.files,
            summary: report.summary(),
        };
        self.to_json(&doc).unwrap_or_else(|| "{}".to_string())
    }

    /// Render as Markdown
    fn render_markdown(&self, report: &SplitReport) -> String {
        let mut output = String::new();
        let summary = report.summary();

        output.push_str("## Summary\n\n");
        output.push_str(&format!(
            "- scanned: {}\n- split: {}\n- skipped: {}\n- failed: {}\n- chunks written: {}\n\n",
            summary.scanned, summary.split, summary.skipped, summary.failed, summary.chunks_written
        ));

        let failed: Vec<_> = report
            .files
            .iter()
            .filter(|f| f.status == Status::Failed)
            .collect();
        if !failed.is_empty() {
            output.push_str("## Errors\n\n");
            for outcome in failed {
                if let Some(error) = &outcome.error {
                    output.push_str(&format!(
                        "- `{}` **{}**: {}\n",
                        outcome.path, error.code, error.message
                    ));
                }
            }
            output.push('\n');
        }

        let split: Vec<_> = report
            .files
            .iter()
            .filter(|f| f.status == Status::Split)
            .collect();
        if !split.is_empty() {
            output.push_str("## Split\n\n");
            for outcome in split {
                output.push_str(&format!(
                    "### `{}` ({} tokens)\n\n",
                    outcome.path,
                    outcome.tokens.unwrap_or_default()
                ));
                for chunk in &outcome.chunks {
                    output.push_str(&format!("- `{}` ({} tokens)\n", chunk.path, chunk.tokens));
                }
                output.push('\n');
            }
        }

        output
    }
}
