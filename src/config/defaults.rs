//! Default values and named presets.
//!
//! The granularity weights and token bounds themselves are defined once,
//! on [`GranularityWeights::standard`] and
//! [`crate::normalize::NormalizeConfig::standard`]; this module only adds
//! app-level defaults and preset wiring on top.

use super::types::{AppConfig, BehaviorConfig};
use crate::align::AlignConfig;
use crate::report::ReportFormat;

/// Diff lines shown in summary output before truncation.
pub const DEFAULT_MAX_DIFF_LINES: usize = 50;

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets for common use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Balanced settings suitable for most comparisons
    Default,
    /// CI: machine-readable output, fail when documents differ
    Ci,
    /// Very large documents: popular-element filtering enabled
    LargeDocs,
}

impl ConfigPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Ci => "ci",
            Self::LargeDocs => "large-docs",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" | "balanced" => Some(Self::Default),
            "ci" | "cd" | "pipeline" => Some(Self::Ci),
            "large-docs" | "large_docs" | "large" => Some(Self::LargeDocs),
            _ => None,
        }
    }

    /// Get a description of this preset.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "Balanced settings suitable for most document comparisons",
            Self::Ci => "JSON output with a failing exit code when documents differ",
            Self::LargeDocs => "Popular-element filtering for very large documents",
        }
    }

    /// Get all available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::Ci, Self::LargeDocs]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Preset Implementations
// ============================================================================

impl AppConfig {
    /// Create an `AppConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::Ci => Self::ci_preset(),
            ConfigPreset::LargeDocs => Self::large_docs_preset(),
        }
    }

    /// CI preset: JSON to stdout, non-zero exit on differences.
    #[must_use]
    pub fn ci_preset() -> Self {
        let mut config = Self::default();
        config.output.format = ReportFormat::Json;
        config.behavior = BehaviorConfig {
            quiet: true,
            fail_on_diff: true,
        };
        config
    }

    /// Large-document preset: popular-element filtering on.
    #[must_use]
    pub fn large_docs_preset() -> Self {
        let mut config = Self::default();
        config.compare.scoring.align = AlignConfig::filtered();
        config
    }
}
