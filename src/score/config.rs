//! Scoring configuration.

use crate::align::AlignConfig;
use crate::normalize::NormalizeConfig;
use serde::{Deserialize, Serialize};

/// Weights for combining the three granularity ratios.
///
/// The composite score is `chars * char_ratio + tokens * token_ratio +
/// lines * line_ratio`; weights must sum to 1.0 so the result stays in
/// `[0, 1]`. These are the single source of the weight policy — nothing
/// else in the crate hardcodes them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GranularityWeights {
    /// Weight of the raw-character alignment ratio
    pub chars: f64,
    /// Weight of the normalized-token alignment ratio
    pub tokens: f64,
    /// Weight of the line alignment ratio
    pub lines: f64,
}

impl GranularityWeights {
    /// Standard weighting: tokens dominate, characters catch small edits,
    /// lines catch structural moves.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            chars: 0.3,
            tokens: 0.5,
            lines: 0.2,
        }
    }

    /// Check that the weights sum to ~1.0.
    #[must_use]
    pub fn is_normalized(&self) -> bool {
        (self.chars + self.tokens + self.lines - 1.0).abs() < 1e-6
    }

    /// Normalize the weights to sum to 1.0. No-op when all are zero.
    pub fn normalize(&mut self) {
        let sum = self.chars + self.tokens + self.lines;
        if sum > 0.0 {
            self.chars /= sum;
            self.tokens /= sum;
            self.lines /= sum;
        }
    }
}

impl Default for GranularityWeights {
    fn default() -> Self {
        Self::standard()
    }
}

/// Full scoring policy: granularity weights plus the normalization and
/// alignment sub-policies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Composite weighting of the three granularities
    pub weights: GranularityWeights,
    /// Token length bounds for the token-level view
    pub normalize: NormalizeConfig,
    /// Alignment policy shared by all three granularities
    pub align: AlignConfig,
}
