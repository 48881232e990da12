//! Unified error types for docdiff.
//!
//! This module provides the error hierarchy for the library, with rich
//! context for debugging and user-friendly messages.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for docdiff operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DocDiffError {
    /// Errors while loading a document or embedding model
    #[error("Failed to load document: {context}")]
    Load {
        context: String,
        #[source]
        source: LoadErrorKind,
    },

    /// Errors during similarity scoring
    #[error("Similarity scoring failed: {context}")]
    Score {
        context: String,
        #[source]
        source: ScoreErrorKind,
    },

    /// Errors during diff report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific document load error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LoadErrorKind {
    #[error("Unsupported document format: {extension} (supported: {supported})")]
    UnsupportedFormat {
        extension: String,
        supported: String,
    },

    #[error("Document parse error: {0}")]
    DocumentParse(String),

    #[error("Embedding model parse error: {0}")]
    ModelParse(String),
}

/// Specific scoring error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ScoreErrorKind {
    #[error("Unknown similarity algorithm: {0} (supported: lexical, embedding)")]
    UnsupportedAlgorithm(String),

    #[error("Embedding model is absent or untrained")]
    ModelNotReady,

    #[error("Embedding dimension mismatch: model reports {expected}, vector has {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Invalid weight configuration: {0}")]
    InvalidWeights(String),
}

/// Specific report error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("JSON serialization failed: {0}")]
    JsonSerializationError(String),

    #[error("Output format not supported for this operation: {0}")]
    UnsupportedFormat(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for docdiff operations
pub type Result<T> = std::result::Result<T, DocDiffError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl DocDiffError {
    /// Create a load error with context
    pub fn load(context: impl Into<String>, source: LoadErrorKind) -> Self {
        Self::Load {
            context: context.into(),
            source,
        }
    }

    /// Create a load error for an unsupported document format
    pub fn unsupported_format(path: impl Into<String>, extension: impl Into<String>) -> Self {
        Self::load(
            format!("at {}", path.into()),
            LoadErrorKind::UnsupportedFormat {
                extension: extension.into(),
                supported: "plain text (txt, md, or extensionless)".to_string(),
            },
        )
    }

    /// Create a scoring error with context
    pub fn score(context: impl Into<String>, source: ScoreErrorKind) -> Self {
        Self::Score {
            context: context.into(),
            source,
        }
    }

    /// Create a scoring error for a missing embedding model
    pub fn model_not_ready(context: impl Into<String>) -> Self {
        Self::score(context, ScoreErrorKind::ModelNotReady)
    }

    /// Create a report error with context
    pub fn report(context: impl Into<String>, source: ReportErrorKind) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for DocDiffError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for DocDiffError {
    fn from(err: serde_json::Error) -> Self {
        Self::report(
            "JSON serialization",
            ReportErrorKind::JsonSerializationError(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// The context string is prepended to the error's existing context,
/// creating a chain that shows the path through the code.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure (lazy evaluation).
    ///
    /// The closure is only called if the result is an error, which is
    /// more efficient when the context string is expensive to compute.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<DocDiffError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: DocDiffError, new_ctx: &str) -> DocDiffError {
    match err {
        DocDiffError::Load {
            context: existing,
            source,
        } => DocDiffError::Load {
            context: chain_context(new_ctx, &existing),
            source,
        },
        DocDiffError::Score {
            context: existing,
            source,
        } => DocDiffError::Score {
            context: chain_context(new_ctx, &existing),
            source,
        },
        DocDiffError::Report {
            context: existing,
            source,
        } => DocDiffError::Report {
            context: chain_context(new_ctx, &existing),
            source,
        },
        DocDiffError::Io {
            path,
            message,
            source,
        } => DocDiffError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        DocDiffError::Config(msg) => DocDiffError::Config(chain_context(new_ctx, &msg)),
        DocDiffError::Validation(msg) => DocDiffError::Validation(chain_context(new_ctx, &msg)),
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

/// Extension trait for Option types to convert to errors with context.
pub trait OptionContext<T> {
    /// Convert None to an error with the given context.
    fn context_none(self, context: impl Into<String>) -> Result<T>;
}

impl<T> OptionContext<T> for Option<T> {
    fn context_none(self, context: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| DocDiffError::Validation(context.into()))
    }
}
