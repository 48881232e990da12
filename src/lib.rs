//! **Document similarity scoring and multi-granularity diffing.**
//!
//! `docdiff` estimates how similar two documents are and reports their
//! differences at multiple granularities. At its core is a block-matching
//! sequence aligner that finds the longest common contiguous runs between
//! two ordered sequences, derives a deterministic edit-opcode partition
//! from those runs, and combines alignment ratios computed over
//! characters, normalized tokens, and lines into a single composite
//! score. An alternate mode scores with a cosine similarity over
//! TF-IDF-weighted word embeddings consumed from an externally trained
//! model.
//!
//! ## Key Features
//!
//! - **Generic sequence alignment**: the [`align`] module aligns any
//!   element type with equality and hashing, producing match blocks,
//!   opcodes, and a match ratio.
//! - **Composite lexical scoring**: character, token, and line ratios
//!   combined with documented, configurable weights.
//! - **Embedding scoring**: two-document TF-IDF weighting over word
//!   vectors loaded from the word2vec text format.
//! - **Structured diff reports**: flat `-`/`+` diff lines or whole-text
//!   edit descriptions, each with serializable [`report::DiffRecord`]s.
//! - **Deterministic results**: leftmost-biased tie-breaking and pure
//!   computation make every comparison reproducible.
//!
//! ## Core Concepts & Modules
//!
//! - **[`align`]**: the sequence matcher — match blocks, opcodes, ratio.
//! - **[`normalize`]**: raw text to normalized token sequences.
//! - **[`score`]**: lexical composite and embedding-mode scoring.
//! - **[`report`]**: diff records and rendering.
//! - **[`engine`]**: one-call comparison facade producing a
//!   [`CompareResult`].
//! - **[`loader`]**: the document-loading boundary (plain text in-tree;
//!   binary containers are external collaborators).
//! - **[`config`]**: typed configuration with validation, presets, and
//!   YAML file loading.
//!
//! ## Getting Started: Comparing Two Texts
//!
//! ```
//! use docdiff::CompareEngine;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = CompareEngine::new();
//!     let result = engine.compare_texts(
//!         "the quick brown fox\njumps over the lazy dog",
//!         "the quick red fox\njumps over the lazy dog",
//!     )?;
//!
//!     println!("similarity: {:.2}%", result.score * 100.0);
//!     for line in &result.diff.lines {
//!         println!("{line}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Embedding Mode
//!
//! ```no_run
//! use docdiff::{Algorithm, CompareEngine, WordVectors};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let model = WordVectors::from_path("vectors.txt")?;
//!     let engine = CompareEngine::new()
//!         .with_algorithm(Algorithm::Embedding)
//!         .with_model(Box::new(model));
//!
//!     let result = engine.compare_texts("first document", "second document")?;
//!     println!("cosine similarity: {:.4}", result.score);
//!     Ok(())
//! }
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! This documentation is for the `docdiff` library crate. The `docdiff`
//! binary wraps it with a `compare` subcommand; see the project README.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Cast safety: usize↔f64 casts are pervasive in ratio and weight math;
    // all values are bounded in practice
    clippy::cast_precision_loss,
    // Doc completeness: # Errors sections are aspirational for many fns
    clippy::missing_errors_doc
)]

pub mod align;
pub mod cli;
pub mod config;
pub mod embedding;
pub mod engine;
pub mod error;
pub mod loader;
pub mod normalize;
pub mod pipeline;
pub mod report;
pub mod score;

// Re-export main types for convenience
pub use align::{align, AlignConfig, MatchBlock, OpTag, Opcode, SequenceMatcher};
pub use config::{AppConfig, AppConfigBuilder, ComparePaths, ConfigPreset, Validatable};
pub use embedding::{EmbeddingModel, WordVectors};
pub use engine::{CompareEngine, CompareResult, CompareSummary, DiffMode};
pub use error::{DocDiffError, ErrorContext, OptionContext, Result};
pub use normalize::{normalize, NormalizeConfig};
pub use report::{DiffRecord, DiffReport, ReportFormat};
pub use score::{Algorithm, CompositeScore, GranularityWeights, Scorer, ScoringConfig};
