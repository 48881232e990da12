//! Embedding-mode similarity.
//!
//! Each document becomes the TF-IDF-weighted sum of its tokens' embedding
//! vectors; similarity is the cosine of the two document vectors. Tokens
//! unknown to the model contribute nothing, and when either document
//! vector ends up with zero norm the similarity is a defined `0.0` result
//! rather than an error.

use super::config::ScoringConfig;
use super::tfidf::PairWeights;
use crate::embedding::EmbeddingModel;
use crate::error::{DocDiffError, Result};
use crate::normalize::normalize;

/// Score two texts with TF-IDF-weighted embedding cosine similarity.
///
/// The TF-IDF corpus is exactly the two documents (see
/// [`PairWeights::build`]). The weighted vector sum runs per token
/// occurrence, each occurrence contributing its document weight times the
/// model vector. Returns a value clamped to `[0, 1]`.
///
/// # Errors
///
/// Fails with `ModelNotReady` when the model is unready (absent
/// vocabulary or zero dimension).
pub fn score_embedding(
    text1: &str,
    text2: &str,
    model: &dyn EmbeddingModel,
    config: &ScoringConfig,
) -> Result<f64> {
    if !model.is_ready() {
        return Err(DocDiffError::model_not_ready(
            "embedding similarity requested",
        ));
    }

    let tokens1 = normalize(text1, &config.normalize);
    let tokens2 = normalize(text2, &config.normalize);
    let weights = PairWeights::build(&tokens1, &tokens2);

    let vec1 = weighted_sum(&tokens1, model, |token| weights.doc1_weight(token));
    let vec2 = weighted_sum(&tokens2, model, |token| weights.doc2_weight(token));

    let norm1 = l2_norm(&vec1);
    let norm2 = l2_norm(&vec2);
    if norm1 == 0.0 || norm2 == 0.0 {
        tracing::debug!("document vector has zero norm, similarity defined as 0.0");
        return Ok(0.0);
    }

    let dot: f64 = vec1.iter().zip(&vec2).map(|(x, y)| x * y).sum();
    Ok((dot / (norm1 * norm2)).clamp(0.0, 1.0))
}

/// Sum `weight(token) * embedding(token)` over every token occurrence.
fn weighted_sum<F>(tokens: &[String], model: &dyn EmbeddingModel, weight: F) -> Vec<f64>
where
    F: Fn(&str) -> f64,
{
    let mut acc = vec![0.0; model.dimension()];
    for token in tokens {
        if let Some(vector) = model.vector_for(token) {
            let w = weight(token);
            for (slot, &component) in acc.iter_mut().zip(vector) {
                *slot += w * f64::from(component);
            }
        }
    }
    acc
}

fn l2_norm(vector: &[f64]) -> f64 {
    vector.iter().map(|x| x * x).sum::<f64>().sqrt()
}
