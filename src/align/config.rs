//! Alignment configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the sequence alignment policy.
///
/// The popular-element filter is an explicit, documented switch: when
/// enabled, elements that occur in more than `popular_ratio` of `seq2`
/// (checked only once `seq2` reaches `popular_min_len` elements) are left
/// out of the position index so that pathological matches on common filler
/// tokens or characters are avoided. Found blocks are still extended over
/// such elements afterwards, so reported blocks stay maximal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlignConfig {
    /// Whether to exclude overly frequent elements from the position index
    pub filter_popular: bool,
    /// Minimum length of `seq2` before the filter applies at all
    pub popular_min_len: usize,
    /// Occurrence fraction above which an element counts as popular
    pub popular_ratio: f64,
}

impl AlignConfig {
    /// Exact alignment: every element participates in the index.
    ///
    /// This is the default; results depend only on the input sequences.
    #[must_use]
    pub const fn exact() -> Self {
        Self {
            filter_popular: false,
            popular_min_len: 200,
            popular_ratio: 0.01,
        }
    }

    /// Alignment with the popular-element heuristic enabled.
    ///
    /// Useful for very long sequences dominated by filler elements.
    #[must_use]
    pub const fn filtered() -> Self {
        Self {
            filter_popular: true,
            popular_min_len: 200,
            popular_ratio: 0.01,
        }
    }

    /// Occurrence count above which an element is dropped from the index,
    /// for a second sequence of length `len`. `None` when the filter is off
    /// or the sequence is too short.
    #[must_use]
    pub fn popular_threshold(&self, len: usize) -> Option<usize> {
        if !self.filter_popular || len < self.popular_min_len {
            return None;
        }
        Some((len as f64 * self.popular_ratio) as usize + 1)
    }
}

impl Default for AlignConfig {
    fn default() -> Self {
        Self::exact()
    }
}
