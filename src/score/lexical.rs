//! Lexical composite scoring.
//!
//! Runs the sequence aligner at three granularities over the same pair of
//! texts and combines the ratios with the configured weights.

use super::config::ScoringConfig;
use crate::align::SequenceMatcher;
use crate::normalize::normalize;
use serde::{Deserialize, Serialize};

/// Composite similarity with its per-granularity breakdown.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CompositeScore {
    /// Weighted combination of the three ratios, in `[0, 1]`
    pub composite: f64,
    /// Alignment ratio over raw characters
    pub char_ratio: f64,
    /// Alignment ratio over normalized tokens
    pub token_ratio: f64,
    /// Alignment ratio over lines
    pub line_ratio: f64,
}

impl CompositeScore {
    /// Human-readable breakdown of the score.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Composite: {:.4} (chars: {:.4}, tokens: {:.4}, lines: {:.4})",
            self.composite, self.char_ratio, self.token_ratio, self.line_ratio
        )
    }
}

/// Score two texts lexically at character, token, and line granularity.
///
/// The character view uses the raw text, the token view uses
/// [`normalize`]d tokens, and the line view splits on line breaks with no
/// further normalization (line comparability is intentionally
/// exact-string). The caller is expected to have validated that
/// `config.weights` sums to 1.
#[must_use]
pub fn score_lexical(text1: &str, text2: &str, config: &ScoringConfig) -> CompositeScore {
    let chars1: Vec<char> = text1.chars().collect();
    let chars2: Vec<char> = text2.chars().collect();
    let char_ratio = SequenceMatcher::with_config(&chars1, &chars2, &config.align).ratio();

    let tokens1 = normalize(text1, &config.normalize);
    let tokens2 = normalize(text2, &config.normalize);
    let token_ratio = SequenceMatcher::with_config(&tokens1, &tokens2, &config.align).ratio();

    let lines1: Vec<&str> = text1.lines().collect();
    let lines2: Vec<&str> = text2.lines().collect();
    let line_ratio = SequenceMatcher::with_config(&lines1, &lines2, &config.align).ratio();

    let weights = &config.weights;
    CompositeScore {
        composite: weights.chars * char_ratio
            + weights.tokens * token_ratio
            + weights.lines * line_ratio,
        char_ratio,
        token_ratio,
        line_ratio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_texts_score_one() {
        let score = score_lexical("hello world", "hello world", &ScoringConfig::default());
        assert_eq!(score.char_ratio, 1.0);
        assert_eq!(score.token_ratio, 1.0);
        assert_eq!(score.line_ratio, 1.0);
        assert!((score.composite - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_disjoint_texts_score_zero() {
        let score = score_lexical("aaa bbb", "xyz qqq", &ScoringConfig::default());
        assert_eq!(score.token_ratio, 0.0);
        assert_eq!(score.line_ratio, 0.0);
        assert!(score.composite < 0.3, "only stray char matches remain");
    }

    #[test]
    fn test_composite_between_ratios() {
        let score = score_lexical(
            "the quick brown fox\njumps over",
            "the quick red fox\njumps over",
            &ScoringConfig::default(),
        );
        let min = score
            .char_ratio
            .min(score.token_ratio)
            .min(score.line_ratio);
        let max = score
            .char_ratio
            .max(score.token_ratio)
            .max(score.line_ratio);
        assert!(score.composite >= min && score.composite <= max);
    }

    #[test]
    fn test_line_view_is_exact_string() {
        // Lines differing only in case are distinct at line level even
        // though the token view case-folds.
        let score = score_lexical("Hello World", "hello world", &ScoringConfig::default());
        assert_eq!(score.line_ratio, 0.0);
        assert_eq!(score.token_ratio, 1.0);
    }

    #[test]
    fn test_summary_format() {
        let score = score_lexical("same", "same", &ScoringConfig::default());
        let summary = score.summary();
        assert!(summary.contains("Composite: 1.0000"));
    }
}
