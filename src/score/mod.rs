//! Similarity scoring.
//!
//! Orchestrates the sequence aligner over the three comparison views and
//! combines the ratios (lexical mode), or computes a TF-IDF-weighted
//! embedding cosine (embedding mode). The algorithm is a tagged variant
//! chosen at scorer construction; there is no late binding of optional
//! code paths.

mod config;
mod lexical;
mod semantic;
mod tfidf;

pub use config::{GranularityWeights, ScoringConfig};
pub use lexical::{score_lexical, CompositeScore};
pub use semantic::score_embedding;
pub use tfidf::PairWeights;

use crate::embedding::EmbeddingModel;
use crate::error::{DocDiffError, Result, ScoreErrorKind};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Similarity algorithm selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Three-granularity alignment-ratio composite
    Lexical,
    /// TF-IDF-weighted word-embedding cosine similarity
    Embedding,
}

impl Algorithm {
    /// Algorithm name as used on the command line and in config files.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Lexical => "lexical",
            Self::Embedding => "embedding",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Algorithm {
    type Err = DocDiffError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "lexical" | "difflib" => Ok(Self::Lexical),
            "embedding" | "word2vec" => Ok(Self::Embedding),
            other => Err(DocDiffError::score(
                "selecting algorithm",
                ScoreErrorKind::UnsupportedAlgorithm(other.to_string()),
            )),
        }
    }
}

/// Similarity scorer for a fixed algorithm and policy.
///
/// The embedding model, when present, is borrowed read-only; the scorer
/// never mutates it and holds no other state, so one scorer can serve any
/// number of independent comparisons.
pub struct Scorer<'m> {
    algorithm: Algorithm,
    config: ScoringConfig,
    model: Option<&'m dyn EmbeddingModel>,
}

impl<'m> Scorer<'m> {
    /// Create a lexical-mode scorer with default policy.
    #[must_use]
    pub fn lexical() -> Self {
        Self {
            algorithm: Algorithm::Lexical,
            config: ScoringConfig::default(),
            model: None,
        }
    }

    /// Create an embedding-mode scorer over a trained model.
    #[must_use]
    pub fn embedding(model: &'m dyn EmbeddingModel) -> Self {
        Self {
            algorithm: Algorithm::Embedding,
            config: ScoringConfig::default(),
            model: Some(model),
        }
    }

    /// Replace the scoring policy.
    #[must_use]
    pub fn with_config(mut self, config: ScoringConfig) -> Self {
        self.config = config;
        self
    }

    /// The configured algorithm.
    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Score two texts with the configured algorithm.
    ///
    /// # Errors
    ///
    /// `InvalidWeights` when the lexical weights do not sum to 1;
    /// `ModelNotReady` when embedding mode has no usable model.
    pub fn score(&self, text1: &str, text2: &str) -> Result<f64> {
        match self.algorithm {
            Algorithm::Lexical => Ok(self.score_lexical(text1, text2)?.composite),
            Algorithm::Embedding => {
                let model = self
                    .model
                    .ok_or_else(|| DocDiffError::model_not_ready("embedding mode requested"))?;
                score_embedding(text1, text2, model, &self.config)
            }
        }
    }

    /// Check that the configured granularity weights sum to 1.
    pub fn check_weights(&self) -> Result<()> {
        if !self.config.weights.is_normalized() {
            let weights = self.config.weights;
            return Err(DocDiffError::score(
                "lexical scoring",
                ScoreErrorKind::InvalidWeights(format!(
                    "granularity weights must sum to 1.0, got {:.4}",
                    weights.chars + weights.tokens + weights.lines
                )),
            ));
        }
        Ok(())
    }

    /// Lexical composite with its per-granularity breakdown, regardless
    /// of the configured algorithm.
    pub fn score_lexical(&self, text1: &str, text2: &str) -> Result<CompositeScore> {
        self.check_weights()?;
        Ok(score_lexical(text1, text2, &self.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::WordVectors;

    #[test]
    fn test_algorithm_from_str() {
        assert_eq!(Algorithm::from_str("lexical").unwrap(), Algorithm::Lexical);
        assert_eq!(
            Algorithm::from_str("EMBEDDING").unwrap(),
            Algorithm::Embedding
        );
        // aliases matching the upstream tool names
        assert_eq!(Algorithm::from_str("difflib").unwrap(), Algorithm::Lexical);
        assert_eq!(
            Algorithm::from_str("word2vec").unwrap(),
            Algorithm::Embedding
        );
    }

    #[test]
    fn test_unknown_algorithm_rejected() {
        let err = Algorithm::from_str("quantum").unwrap_err();
        assert!(matches!(
            err,
            DocDiffError::Score {
                source: ScoreErrorKind::UnsupportedAlgorithm(_),
                ..
            }
        ));
    }

    #[test]
    fn test_lexical_scorer_identical_texts() {
        let scorer = Scorer::lexical();
        let score = scorer.score("hello world", "hello world").unwrap();
        assert!((score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_embedding_scorer_without_model_fails() {
        let scorer = Scorer {
            algorithm: Algorithm::Embedding,
            config: ScoringConfig::default(),
            model: None,
        };
        assert!(scorer.score("a", "b").is_err());
    }

    #[test]
    fn test_embedding_scorer_with_untrained_model_fails() {
        let model = WordVectors::new(50);
        let scorer = Scorer::embedding(&model);
        let err = scorer.score("one text", "other text").unwrap_err();
        assert!(matches!(
            err,
            DocDiffError::Score {
                source: ScoreErrorKind::ModelNotReady,
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_weights_rejected() {
        let mut config = ScoringConfig::default();
        config.weights.tokens = 0.9;
        let scorer = Scorer::lexical().with_config(config);
        let err = scorer.score("a", "b").unwrap_err();
        assert!(matches!(
            err,
            DocDiffError::Score {
                source: ScoreErrorKind::InvalidWeights(_),
                ..
            }
        ));
    }

    #[test]
    fn test_breakdown_available_in_embedding_mode() {
        let mut model = WordVectors::new(2);
        model.insert("hello", vec![1.0, 0.0]).unwrap();
        let scorer = Scorer::embedding(&model);
        let breakdown = scorer.score_lexical("hello", "hello").unwrap();
        assert_eq!(breakdown.token_ratio, 1.0);
    }
}
