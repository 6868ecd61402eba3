use colored::Colorize;
use indexmap::IndexMap;
use serde::Serialize;

use crate::normalizer::{NormalizeResult, StageOutcome};

/// Output format for results
#[derive(Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml
}

/// Output options
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format:  OutputFormat,
    pub colored: bool,
    pub verbose: bool
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format:  OutputFormat::Text,
            colored: true,
            verbose: false
        }
    }
}

/// Per-file entry in a batch report
#[derive(Debug, Serialize)]
pub struct BatchEntry {
    pub changed: bool,
    pub stages:  Vec<StageOutcome>
}

impl From<&NormalizeResult> for BatchEntry {
    fn from(result: &NormalizeResult) -> Self {
        Self {
            changed: result.changed(),
            stages:  result.stages.clone()
        }
    }
}

/// Format a single normalization result based on output options
///
/// Text output is the normalized SQL itself, suitable for piping into other
/// tools; JSON and YAML include the per-stage outcomes.
pub fn format_result(result: &NormalizeResult, opts: &OutputOptions) -> String {
    match opts.format {
        OutputFormat::Json => serde_json::to_string_pretty(result).unwrap_or_default(),
        OutputFormat::Yaml => serde_yaml::to_string(result).unwrap_or_default(),
        OutputFormat::Text => result.sql.clone()
    }
}

/// Format the per-stage summary shown with `--verbose`
pub fn format_stage_summary(result: &NormalizeResult, opts: &OutputOptions) -> String {
    let mut summary = String::new();
    if opts.colored {
        summary.push_str(&"=== Normalization Summary ===\n".bold().to_string());
    } else {
        summary.push_str("=== Normalization Summary ===\n");
    }

    for stage in &result.stages {
        let status = if stage.changed { "rewritten" } else { "unchanged" };
        let line = format!("{}: {}", stage.stage, status);
        if opts.colored {
            if stage.changed {
                summary.push_str(&line.green().to_string());
            } else {
                summary.push_str(&line.dimmed().to_string());
            }
        } else {
            summary.push_str(&line);
        }
        summary.push('\n');
    }
    summary
}

/// Format the summary of an in-place batch run
pub fn format_batch_summary(
    entries: &IndexMap<String, NormalizeResult>,
    opts: &OutputOptions
) -> String {
    match opts.format {
        OutputFormat::Json => {
            let report: IndexMap<&str, BatchEntry> = entries
                .iter()
                .map(|(path, result)| (path.as_str(), BatchEntry::from(result)))
                .collect();
            serde_json::to_string_pretty(&report).unwrap_or_default()
        }
        OutputFormat::Yaml => {
            let report: IndexMap<&str, BatchEntry> = entries
                .iter()
                .map(|(path, result)| (path.as_str(), BatchEntry::from(result)))
                .collect();
            serde_yaml::to_string(&report).unwrap_or_default()
        }
        OutputFormat::Text => format_batch_text(entries, opts)
    }
}

fn format_batch_text(entries: &IndexMap<String, NormalizeResult>, opts: &OutputOptions) -> String {
    let mut summary = String::new();

    for (path, result) in entries {
        if result.changed() {
            let stages: Vec<&str> = result
                .stages
                .iter()
                .filter(|s| s.changed)
                .map(|s| s.stage)
                .collect();
            let line = format!("{}: rewritten ({})", path, stages.join(", "));
            if opts.colored {
                summary.push_str(&line.green().to_string());
            } else {
                summary.push_str(&line);
            }
        } else if opts.colored {
            summary.push_str(&format!("{}: unchanged", path).dimmed().to_string());
        } else {
            summary.push_str(&format!("{}: unchanged", path));
        }
        summary.push('\n');
    }

    let rewritten = entries.values().filter(|r| r.changed()).count();
    summary.push_str(&format!(
        "\n{} file(s), {} rewritten\n",
        entries.len(),
        rewritten
    ));
    summary
}
