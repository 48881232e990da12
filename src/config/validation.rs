//! Configuration validation.

use super::types::{AppConfig, CompareConfig, OutputConfig};
use crate::score::Algorithm;
use thiserror::Error;

/// Configuration validation error.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("missing required setting: {0}")]
    Missing(String),
}

impl ConfigError {
    fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Types that can validate their own invariants.
pub trait Validatable {
    /// Check every invariant, reporting the first violation.
    fn validate(&self) -> Result<(), ConfigError>;
}

impl Validatable for CompareConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let weights = &self.scoring.weights;
        if !weights.is_normalized() {
            return Err(ConfigError::invalid(
                "compare.scoring.weights",
                format!(
                    "must sum to 1.0, got {:.4}",
                    weights.chars + weights.tokens + weights.lines
                ),
            ));
        }
        if weights.chars < 0.0 || weights.tokens < 0.0 || weights.lines < 0.0 {
            return Err(ConfigError::invalid(
                "compare.scoring.weights",
                "weights must be non-negative",
            ));
        }

        let normalize = &self.scoring.normalize;
        if normalize.min_token_len > normalize.max_token_len {
            return Err(ConfigError::invalid(
                "compare.scoring.normalize",
                format!(
                    "min_token_len {} exceeds max_token_len {}",
                    normalize.min_token_len, normalize.max_token_len
                ),
            ));
        }

        let align = &self.scoring.align;
        if align.filter_popular && !(0.0..=1.0).contains(&align.popular_ratio) {
            return Err(ConfigError::invalid(
                "compare.scoring.align.popular_ratio",
                format!("must be within [0.0, 1.0], got {}", align.popular_ratio),
            ));
        }

        if self.algorithm == Algorithm::Embedding && self.model_path.is_none() {
            return Err(ConfigError::Missing(
                "compare.model_path (required by the embedding algorithm)".to_string(),
            ));
        }

        Ok(())
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_diff_lines == 0 {
            return Err(ConfigError::invalid(
                "output.max_diff_lines",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

impl Validatable for AppConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.compare.validate()?;
        self.output.validate()
    }
}
