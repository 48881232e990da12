//! Output rendering for comparison results.
//!
//! Two formats: a shell-friendly summary (percentage, counts, truncated
//! diff lines) and JSON for programmatic integration.

use crate::engine::CompareResult;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Output format for comparison results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable terminal summary
    Summary,
    /// Structured JSON
    Json,
}

impl ReportFormat {
    /// Format name as used on the command line and in config files.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::Json => "json",
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Render a human-readable summary.
///
/// The similarity is shown as a percentage with two decimals; diff lines
/// are truncated to `max_diff_lines` with a remainder count, mirroring
/// how interactive front ends present long diffs.
#[must_use]
pub fn render_summary(result: &CompareResult, max_diff_lines: usize) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Similarity: {:.2}%", result.score * 100.0);
    let _ = writeln!(out, "Algorithm:  {}", result.algorithm);
    if let Some(breakdown) = &result.breakdown {
        let _ = writeln!(
            out,
            "Breakdown:  chars {:.4} | tokens {:.4} | lines {:.4}",
            breakdown.char_ratio, breakdown.token_ratio, breakdown.line_ratio
        );
    }

    let summary = &result.summary;
    let _ = writeln!(
        out,
        "Documents:  {} vs {} lines",
        summary.doc1_lines, summary.doc2_lines
    );

    if summary.identical {
        let _ = writeln!(out, "Documents are identical.");
        return out;
    }

    let _ = writeln!(
        out,
        "Changes:    {} replaced, {} deleted, {} inserted",
        summary.replaced, summary.deleted, summary.inserted
    );

    if result.diff.lines.is_empty() {
        return out;
    }

    let shown = result.diff.lines.len().min(max_diff_lines);
    let _ = writeln!(out, "\nDiff ({} mode):", result.mode);
    for line in &result.diff.lines[..shown] {
        let _ = writeln!(out, "{line}");
    }
    let remainder = result.diff.lines.len() - shown;
    if remainder > 0 {
        let _ = writeln!(out, "... {remainder} more");
    }

    out
}

/// Render the full result as pretty-printed JSON.
pub fn render_json(result: &CompareResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}
