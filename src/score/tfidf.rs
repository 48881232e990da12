//! Two-document TF-IDF weighting.
//!
//! The weighting corpus is exactly the two compared token sequences: the
//! vocabulary is the union of their distinct tokens and document frequency
//! is computed against a corpus of size 2. Weights are therefore relative
//! to the pair being compared and are not comparable across different
//! document pairs; this is intentional scoring semantics, not an
//! implementation shortcut.

use indexmap::IndexMap;

/// Corpus size: always the two compared documents.
const CORPUS_SIZE: f64 = 2.0;

/// TF-IDF weights for one document pair.
///
/// Vocabulary iteration order is first-seen order across doc1 then doc2,
/// so weight tables are deterministic for a given input pair.
#[derive(Debug, Clone)]
pub struct PairWeights {
    doc1: IndexMap<String, f64>,
    doc2: IndexMap<String, f64>,
}

impl PairWeights {
    /// Build TF-IDF weights over exactly these two token sequences.
    ///
    /// Term frequency is the raw occurrence count within the document;
    /// inverse document frequency uses the smoothed form
    /// `ln((1 + N) / (1 + df)) + 1` with `N = 2`.
    #[must_use]
    pub fn build(tokens1: &[String], tokens2: &[String]) -> Self {
        let counts1 = count_tokens(tokens1);
        let counts2 = count_tokens(tokens2);

        let mut vocabulary: IndexMap<&str, f64> = IndexMap::new();
        for token in counts1.keys().chain(counts2.keys()) {
            if !vocabulary.contains_key(token.as_str()) {
                let df = f64::from(
                    u8::from(counts1.contains_key(token)) + u8::from(counts2.contains_key(token)),
                );
                let idf = ((1.0 + CORPUS_SIZE) / (1.0 + df)).ln() + 1.0;
                vocabulary.insert(token.as_str(), idf);
            }
        }

        let weigh = |counts: &IndexMap<String, usize>| -> IndexMap<String, f64> {
            counts
                .iter()
                .map(|(token, &count)| {
                    let idf = vocabulary.get(token.as_str()).copied().unwrap_or(0.0);
                    (token.clone(), count as f64 * idf)
                })
                .collect()
        };

        Self {
            doc1: weigh(&counts1),
            doc2: weigh(&counts2),
        }
    }

    /// Weight of `token` in the first document, 0.0 if absent.
    #[must_use]
    pub fn doc1_weight(&self, token: &str) -> f64 {
        self.doc1.get(token).copied().unwrap_or(0.0)
    }

    /// Weight of `token` in the second document, 0.0 if absent.
    #[must_use]
    pub fn doc2_weight(&self, token: &str) -> f64 {
        self.doc2.get(token).copied().unwrap_or(0.0)
    }

    /// Size of the union vocabulary.
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        let mut distinct: Vec<&str> = self.doc1.keys().chain(self.doc2.keys()).map(String::as_str).collect();
        distinct.sort_unstable();
        distinct.dedup();
        distinct.len()
    }
}

fn count_tokens(tokens: &[String]) -> IndexMap<String, usize> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for token in tokens {
        *counts.entry(token.clone()).or_insert(0) += 1;
    }
    counts
}
