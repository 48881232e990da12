//! Pipeline orchestration for document comparison.
//!
//! Shared load → compare → render → write logic for the CLI command
//! handlers, plus exit-code constants for CI integration.

use crate::config::{AppConfig, OutputConfig};
use crate::embedding::WordVectors;
use crate::engine::{CompareEngine, CompareResult};
use crate::error::{DocDiffError, ErrorContext, Result};
use crate::loader::load_document;
use crate::report::{render_json, render_summary, ReportFormat};
use std::path::{Path, PathBuf};

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success - documents identical (or --fail-on-diff not set)
    pub const SUCCESS: i32 = 0;
    /// Differences were detected
    pub const DIFFERENCES: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 2;
}

/// Where rendered output goes.
#[derive(Debug, Clone)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// Build a target from an optional file path.
    #[must_use]
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdout, Self::File)
    }
}

/// Load a document with logging and path context on failure.
pub fn load_document_with_context(path: &Path, quiet: bool) -> Result<Vec<String>> {
    let lines =
        load_document(path).with_context(|| format!("loading {}", path.display()))?;
    if !quiet {
        tracing::info!(path = %path.display(), lines = lines.len(), "loaded document");
    }
    Ok(lines)
}

/// Build a comparison engine from the application config.
///
/// Embedding mode loads the configured word2vec text model here, once, at
/// the boundary.
pub fn build_engine(config: &AppConfig) -> Result<CompareEngine> {
    let compare = &config.compare;
    let mut engine = CompareEngine::new()
        .with_algorithm(compare.algorithm)
        .with_mode(compare.mode)
        .with_config(compare.scoring.clone());

    if let Some(model_path) = &compare.model_path {
        let model = WordVectors::from_path(model_path)?;
        tracing::info!(
            path = %model_path.display(),
            words = model.len(),
            "loaded embedding model"
        );
        engine = engine.with_model(Box::new(model));
    }

    Ok(engine)
}

/// Render a result per the output config.
pub fn render_result(output: &OutputConfig, result: &CompareResult) -> Result<String> {
    match output.format {
        ReportFormat::Summary => Ok(render_summary(result, output.max_diff_lines)),
        ReportFormat::Json => render_json(result),
    }
}

/// Write rendered output to the configured target.
pub fn write_output(target: &OutputTarget, content: &str) -> Result<()> {
    match target {
        OutputTarget::Stdout => {
            print!("{content}");
            Ok(())
        }
        OutputTarget::File(path) => {
            std::fs::write(path, content).map_err(|e| DocDiffError::io(path, e))
        }
    }
}
