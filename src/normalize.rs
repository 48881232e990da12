//! Text normalization for the token-level comparison view.
//!
//! Converts raw text into a normalized token sequence: alphabetic runs are
//! extracted (punctuation, digits, and whitespace act as separators),
//! case-folded, and length-filtered. Deterministic and pure; the length
//! bounds are policy values carried in [`NormalizeConfig`] rather than
//! scattered constants.
//!
//! The character-level view uses raw text directly and the line-level view
//! uses caller-supplied lines unchanged; only the token view normalizes.

use serde::{Deserialize, Serialize};

/// Token length policy for normalization.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NormalizeConfig {
    /// Tokens shorter than this are dropped
    pub min_token_len: usize,
    /// Tokens longer than this are dropped
    pub max_token_len: usize,
}

impl NormalizeConfig {
    /// Standard bounds: single-letter noise and pathological runs are
    /// both excluded.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            min_token_len: 2,
            max_token_len: 15,
        }
    }
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// Normalize raw text into an ordered token sequence.
///
/// Splits on every non-alphabetic character, lowercases each run, and
/// keeps runs whose character count falls within the configured bounds.
#[must_use]
pub fn normalize(text: &str, config: &NormalizeConfig) -> Vec<String> {
    text.split(|c: char| !c.is_alphabetic())
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .filter(|token| {
            let len = token.chars().count();
            len >= config.min_token_len && len <= config.max_token_len
        })
        .collect()
}
