//! Document comparison engine.
//!
//! Ties the pieces together for one comparison: scores the pair with the
//! configured algorithm, runs the line- or full-text-level alignment, and
//! packages diff lines, structured records, and a summary into a
//! [`CompareResult`]. The engine holds no mutable state; one instance can
//! serve any number of independent comparisons.

use crate::align::{OpTag, SequenceMatcher};
use crate::embedding::EmbeddingModel;
use crate::error::Result;
use crate::report::{full_report, line_report, DiffReport};
use crate::score::{Algorithm, CompositeScore, Scorer, ScoringConfig};
use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

/// Diff granularity for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DiffMode {
    /// Per-line `-`/`+` diff with 1-based line ranges
    Line,
    /// Whole-text diff with character offsets
    Full,
}

impl DiffMode {
    /// Mode name as used on the command line and in config files.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Full => "full",
        }
    }
}

impl std::fmt::Display for DiffMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Aggregate counts over one comparison.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CompareSummary {
    /// Line count of the first document
    pub doc1_lines: usize,
    /// Line count of the second document
    pub doc2_lines: usize,
    /// Whether the documents were byte-identical
    pub identical: bool,
    /// Number of `replace` records
    pub replaced: usize,
    /// Number of `delete` records
    pub deleted: usize,
    /// Number of `insert` records
    pub inserted: usize,
}

impl CompareSummary {
    /// Total number of difference records.
    #[must_use]
    pub const fn total_changes(&self) -> usize {
        self.replaced + self.deleted + self.inserted
    }
}

/// Outcome of one document comparison.
#[derive(Debug, Clone, Serialize)]
pub struct CompareResult {
    /// Similarity in `[0, 1]` under the configured algorithm
    pub score: f64,
    /// Algorithm that produced `score`
    pub algorithm: Algorithm,
    /// Diff granularity of `diff`
    pub mode: DiffMode,
    /// Per-granularity breakdown (lexical mode only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<CompositeScore>,
    /// Flat diff lines plus structured records
    pub diff: DiffReport,
    /// Aggregate counts
    pub summary: CompareSummary,
}

impl CompareResult {
    /// Whether any difference was found.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        !self.diff.is_empty()
    }
}

/// Comparison engine configured once, used per document pair.
pub struct CompareEngine {
    algorithm: Algorithm,
    mode: DiffMode,
    config: ScoringConfig,
    model: Option<Box<dyn EmbeddingModel>>,
}

impl CompareEngine {
    /// Create an engine with defaults: lexical scoring, line-mode diff.
    #[must_use]
    pub fn new() -> Self {
        Self {
            algorithm: Algorithm::Lexical,
            mode: DiffMode::Line,
            config: ScoringConfig::default(),
            model: None,
        }
    }

    /// Select the scoring algorithm.
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Select the diff granularity.
    #[must_use]
    pub fn with_mode(mut self, mode: DiffMode) -> Self {
        self.mode = mode;
        self
    }

    /// Replace the scoring policy.
    #[must_use]
    pub fn with_config(mut self, config: ScoringConfig) -> Self {
        self.config = config;
        self
    }

    /// Attach a trained embedding model for embedding-mode scoring.
    #[must_use]
    pub fn with_model(mut self, model: Box<dyn EmbeddingModel>) -> Self {
        self.model = Some(model);
        self
    }

    /// Whether an embedding model is attached.
    #[must_use]
    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }

    /// Compare two documents given as line sequences.
    ///
    /// Lines are joined with `\n` for the character/token scoring views,
    /// matching how loaded documents are flattened.
    pub fn compare_lines(&self, lines1: &[String], lines2: &[String]) -> Result<CompareResult> {
        self.compare_texts(&lines1.join("\n"), &lines2.join("\n"))
    }

    /// Compare two documents given as raw text.
    pub fn compare_texts(&self, text1: &str, text2: &str) -> Result<CompareResult> {
        let identical = xxh3_64(text1.as_bytes()) == xxh3_64(text2.as_bytes());

        let (score, breakdown) = self.compute_score(text1, text2, identical)?;

        let lines1: Vec<String> = text1.lines().map(str::to_string).collect();
        let lines2: Vec<String> = text2.lines().map(str::to_string).collect();

        let diff = if identical {
            DiffReport::default()
        } else {
            self.compute_diff(text1, text2, &lines1, &lines2)
        };

        let mut summary = CompareSummary {
            doc1_lines: lines1.len(),
            doc2_lines: lines2.len(),
            identical,
            ..CompareSummary::default()
        };
        for record in &diff.records {
            match record.tag() {
                OpTag::Replace => summary.replaced += 1,
                OpTag::Delete => summary.deleted += 1,
                OpTag::Insert => summary.inserted += 1,
                OpTag::Equal => {}
            }
        }

        tracing::debug!(
            score,
            algorithm = %self.algorithm,
            changes = summary.total_changes(),
            "comparison complete"
        );

        Ok(CompareResult {
            score,
            algorithm: self.algorithm,
            mode: self.mode,
            breakdown,
            diff,
            summary,
        })
    }

    fn compute_score(
        &self,
        text1: &str,
        text2: &str,
        identical: bool,
    ) -> Result<(f64, Option<CompositeScore>)> {
        let scorer = match (self.algorithm, self.model.as_deref()) {
            (Algorithm::Embedding, Some(model)) => Scorer::embedding(model),
            // A missing model surfaces as ModelNotReady from the scorer.
            _ => Scorer::lexical(),
        }
        .with_config(self.config.clone());

        match self.algorithm {
            Algorithm::Lexical => {
                // Identical inputs need no alignment; all three ratios are
                // 1. The shortcut still rejects a bad weight config.
                if identical {
                    scorer.check_weights()?;
                    let breakdown = CompositeScore {
                        composite: 1.0,
                        char_ratio: 1.0,
                        token_ratio: 1.0,
                        line_ratio: 1.0,
                    };
                    return Ok((1.0, Some(breakdown)));
                }
                let breakdown = scorer.score_lexical(text1, text2)?;
                Ok((breakdown.composite, Some(breakdown)))
            }
            Algorithm::Embedding => {
                if self.model.is_none() {
                    return Err(crate::error::DocDiffError::model_not_ready(
                        "embedding mode requested without a model",
                    ));
                }
                // No identical-input shortcut here: two identical documents
                // with no model-known token still score 0.0 by definition.
                Ok((scorer.score(text1, text2)?, None))
            }
        }
    }

    fn compute_diff(
        &self,
        text1: &str,
        text2: &str,
        lines1: &[String],
        lines2: &[String],
    ) -> DiffReport {
        match self.mode {
            DiffMode::Line => {
                let ops = SequenceMatcher::with_config(lines1, lines2, &self.config.align)
                    .opcodes();
                line_report(&ops, lines1, lines2)
            }
            DiffMode::Full => {
                let chars1: Vec<char> = text1.chars().collect();
                let chars2: Vec<char> = text2.chars().collect();
                let ops =
                    SequenceMatcher::with_config(&chars1, &chars2, &self.config.align).opcodes();
                full_report(&ops, &chars1, &chars2)
            }
        }
    }
}

impl Default for CompareEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::WordVectors;

    fn doc(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_identical_documents() {
        let engine = CompareEngine::new();
        let lines = doc(&["hello world"]);
        let result = engine.compare_lines(&lines, &lines).unwrap();

        assert!((result.score - 1.0).abs() < 1e-9);
        assert!(result.summary.identical);
        assert!(!result.has_changes());
        let breakdown = result.breakdown.unwrap();
        assert_eq!(breakdown.char_ratio, 1.0);
        assert_eq!(breakdown.token_ratio, 1.0);
        assert_eq!(breakdown.line_ratio, 1.0);
    }

    #[test]
    fn test_line_mode_diff() {
        let engine = CompareEngine::new();
        let result = engine
            .compare_lines(&doc(&["a", "b", "c"]), &doc(&["a", "x", "c"]))
            .unwrap();

        assert_eq!(result.diff.lines, vec!["- b", "+ x"]);
        assert_eq!(result.summary.replaced, 1);
        assert_eq!(result.summary.total_changes(), 1);
        assert!(result.has_changes());
    }

    #[test]
    fn test_full_mode_diff() {
        let engine = CompareEngine::new().with_mode(DiffMode::Full);
        let result = engine
            .compare_texts("abcdef", "abXdef")
            .unwrap();

        assert_eq!(
            result.diff.lines,
            vec!["REPLACE at [2,3) in doc1, [2,3) in doc2"]
        );
    }

    #[test]
    fn test_embedding_mode_without_model_fails() {
        let engine = CompareEngine::new().with_algorithm(Algorithm::Embedding);
        assert!(engine.compare_texts("a", "b").is_err());
    }

    #[test]
    fn test_embedding_mode_scores() {
        let mut model = WordVectors::new(2);
        model.insert("hello", vec![1.0, 0.0]).unwrap();
        model.insert("world", vec![0.0, 1.0]).unwrap();

        let engine = CompareEngine::new()
            .with_algorithm(Algorithm::Embedding)
            .with_model(Box::new(model));
        let result = engine
            .compare_texts("hello world", "hello world")
            .unwrap();

        assert!((result.score - 1.0).abs() < 1e-9);
        assert!(result.breakdown.is_none());
        assert!(result.summary.identical);
    }

    #[test]
    fn test_embedding_identical_but_unknown_tokens_scores_zero() {
        let mut model = WordVectors::new(2);
        model.insert("known", vec![1.0, 0.0]).unwrap();

        let engine = CompareEngine::new()
            .with_algorithm(Algorithm::Embedding)
            .with_model(Box::new(model));
        let result = engine
            .compare_texts("mystery words", "mystery words")
            .unwrap();

        assert_eq!(result.score, 0.0);
        assert!(result.summary.identical, "diff still sees identical text");
    }

    #[test]
    fn test_summary_counts() {
        let engine = CompareEngine::new();
        let result = engine
            .compare_lines(
                &doc(&["keep", "drop", "keep2"]),
                &doc(&["keep", "keep2", "added"]),
            )
            .unwrap();

        assert_eq!(result.summary.doc1_lines, 3);
        assert_eq!(result.summary.doc2_lines, 3);
        assert_eq!(
            result.summary.deleted + result.summary.inserted + result.summary.replaced,
            result.diff.records.len()
        );
    }
}
