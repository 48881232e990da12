//! Type-safe configuration structures.

use crate::engine::DiffMode;
use crate::report::ReportFormat;
use crate::score::{Algorithm, ScoringConfig};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::DEFAULT_MAX_DIFF_LINES;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Comparison settings
    pub compare: CompareConfig,
    /// Output settings
    pub output: OutputConfig,
    /// CLI behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Start building a configuration from defaults.
    #[must_use]
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

/// Comparison settings: algorithm, diff granularity, scoring policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    /// Similarity algorithm
    pub algorithm: Algorithm,
    /// Diff granularity
    pub mode: DiffMode,
    /// Weights, token bounds, and alignment policy
    pub scoring: ScoringConfig,
    /// Path to a word2vec text-format model (embedding mode)
    pub model_path: Option<PathBuf>,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Lexical,
            mode: DiffMode::Line,
            scoring: ScoringConfig::default(),
            model_path: None,
        }
    }
}

/// Output routing and formatting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Report format
    pub format: ReportFormat,
    /// Output file (stdout when absent)
    pub file: Option<PathBuf>,
    /// Diff lines shown before truncation in summary output
    pub max_diff_lines: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Summary,
            file: None,
            max_diff_lines: DEFAULT_MAX_DIFF_LINES,
        }
    }
}

/// CLI behavior flags.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Suppress non-essential output
    pub quiet: bool,
    /// Exit non-zero when any difference is found
    pub fail_on_diff: bool,
}

/// Paths of the two documents to compare.
#[derive(Debug, Clone)]
pub struct ComparePaths {
    /// First (baseline) document
    pub doc1: PathBuf,
    /// Second document
    pub doc2: PathBuf,
}

/// Builder for [`AppConfig`].
#[derive(Debug, Clone, Default)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Select the similarity algorithm.
    #[must_use]
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.config.compare.algorithm = algorithm;
        self
    }

    /// Select the diff granularity.
    #[must_use]
    pub fn mode(mut self, mode: DiffMode) -> Self {
        self.config.compare.mode = mode;
        self
    }

    /// Set the embedding model path.
    #[must_use]
    pub fn model_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.compare.model_path = Some(path.into());
        self
    }

    /// Set the output format.
    #[must_use]
    pub fn format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the diff truncation limit for summary output.
    #[must_use]
    pub fn max_diff_lines(mut self, max: usize) -> Self {
        self.config.output.max_diff_lines = max;
        self
    }

    /// Fail with a non-zero exit code when differences are found.
    #[must_use]
    pub fn fail_on_diff(mut self, fail: bool) -> Self {
        self.config.behavior.fail_on_diff = fail;
        self
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.compare.algorithm, Algorithm::Lexical);
        assert_eq!(config.compare.mode, DiffMode::Line);
        assert_eq!(config.output.max_diff_lines, DEFAULT_MAX_DIFF_LINES);
        assert!(!config.behavior.fail_on_diff);
    }

    #[test]
    fn test_builder() {
        let config = AppConfig::builder()
            .algorithm(Algorithm::Embedding)
            .mode(DiffMode::Full)
            .model_path("/models/vectors.txt")
            .max_diff_lines(10)
            .fail_on_diff(true)
            .build();

        assert_eq!(config.compare.algorithm, Algorithm::Embedding);
        assert_eq!(config.compare.mode, DiffMode::Full);
        assert!(config.compare.model_path.is_some());
        assert_eq!(config.output.max_diff_lines, 10);
        assert!(config.behavior.fail_on_diff);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: AppConfig =
            serde_yaml::from_str("compare:\n  algorithm: embedding\n").unwrap();
        assert_eq!(config.compare.algorithm, Algorithm::Embedding);
        assert_eq!(config.compare.mode, DiffMode::Line);
        assert_eq!(config.output.max_diff_lines, DEFAULT_MAX_DIFF_LINES);
    }
}
