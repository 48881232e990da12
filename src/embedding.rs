//! Embedding model consumption.
//!
//! The scorer's embedding mode needs a word-to-vector mapping that was
//! trained elsewhere; this module defines the read-only capability it
//! consumes and an in-memory implementation loadable from the word2vec
//! text interchange format. Training, corpus construction, and
//! hyperparameter choices are external concerns.

use crate::error::{DocDiffError, ErrorContext, LoadErrorKind, Result, ScoreErrorKind};
use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

/// Read-only word-embedding lookup.
///
/// Implementations are never mutated by the scorer; when shared across
/// concurrent comparisons, callers must guarantee the model stays
/// immutable for the scorer's lifetime.
pub trait EmbeddingModel {
    /// Vector dimensionality reported by the trained model.
    fn dimension(&self) -> usize;

    /// Vector for `word`, or `None` for out-of-vocabulary input.
    fn vector_for(&self, word: &str) -> Option<&[f32]>;

    /// Whether the model is usable for scoring. An unready model makes
    /// embedding-mode requests fail with `ModelNotReady`.
    fn is_ready(&self) -> bool {
        self.dimension() > 0
    }
}

/// In-memory keyed word vectors.
#[derive(Debug, Clone, Default)]
pub struct WordVectors {
    dimension: usize,
    vectors: HashMap<String, Vec<f32>>,
}

impl WordVectors {
    /// Create an empty (untrained) set of word vectors with a fixed
    /// dimensionality.
    #[must_use]
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            vectors: HashMap::new(),
        }
    }

    /// Number of words in the vocabulary.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Whether the vocabulary is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Insert a vector, validating its dimensionality.
    pub fn insert(&mut self, word: impl Into<String>, vector: Vec<f32>) -> Result<()> {
        if vector.len() != self.dimension {
            return Err(DocDiffError::score(
                "inserting word vector",
                ScoreErrorKind::DimensionMismatch {
                    expected: self.dimension,
                    actual: vector.len(),
                },
            ));
        }
        self.vectors.insert(word.into(), vector);
        Ok(())
    }

    /// Load vectors from the word2vec text format.
    ///
    /// The first line carries `<word_count> <dimension>`; each following
    /// line is a word and `dimension` whitespace-separated float values.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut lines = reader.lines();

        let header = lines
            .next()
            .ok_or_else(|| model_parse("missing header line"))??;
        let mut parts = header.split_whitespace();
        let word_count: usize = parts
            .next()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| model_parse("header must start with a word count"))?;
        let dimension: usize = parts
            .next()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| model_parse("header must carry a vector dimension"))?;
        if dimension == 0 {
            return Err(model_parse("vector dimension must be non-zero"));
        }

        let mut model = Self::new(dimension);
        for (idx, line) in lines.enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let mut fields = line.split_whitespace();
            let word = fields
                .next()
                .ok_or_else(|| model_parse(format!("entry {} has no word", idx + 1)))?;
            let vector: Vec<f32> = fields
                .map(str::parse)
                .collect::<std::result::Result<_, _>>()
                .map_err(|e| model_parse(format!("entry '{word}': {e}")))?;
            if vector.len() != dimension {
                return Err(model_parse(format!(
                    "entry '{word}' has {} values, expected {dimension}",
                    vector.len()
                )));
            }
            model.vectors.insert(word.to_string(), vector);
        }

        if model.vectors.len() != word_count {
            tracing::warn!(
                declared = word_count,
                loaded = model.vectors.len(),
                "word2vec header count does not match loaded vocabulary"
            );
        }
        tracing::debug!(
            words = model.vectors.len(),
            dimension,
            "loaded word vectors"
        );
        Ok(model)
    }

    /// Load vectors from a word2vec text file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| DocDiffError::io(path, e))?;
        Self::from_reader(std::io::BufReader::new(file))
            .with_context(|| format!("loading model from {}", path.display()))
    }
}

fn model_parse(message: impl Into<String>) -> DocDiffError {
    DocDiffError::load(
        "word2vec text format",
        LoadErrorKind::ModelParse(message.into()),
    )
}

impl EmbeddingModel for WordVectors {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn vector_for(&self, word: &str) -> Option<&[f32]> {
        self.vectors.get(word).map(Vec::as_slice)
    }

    fn is_ready(&self) -> bool {
        self.dimension > 0 && !self.vectors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_untrained_model_not_ready() {
        let model = WordVectors::new(100);
        assert!(!model.is_ready());
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut model = WordVectors::new(3);
        model.insert("tree", vec![1.0, 0.0, 0.0]).unwrap();

        assert!(model.is_ready());
        assert_eq!(model.vector_for("tree"), Some([1.0, 0.0, 0.0].as_slice()));
        assert_eq!(model.vector_for("absent"), None);
    }

    #[test]
    fn test_insert_dimension_mismatch() {
        let mut model = WordVectors::new(3);
        let err = model.insert("tree", vec![1.0]).unwrap_err();
        assert!(matches!(
            err,
            DocDiffError::Score {
                source: ScoreErrorKind::DimensionMismatch { expected: 3, actual: 1 },
                ..
            }
        ));
    }

    #[test]
    fn test_from_reader_word2vec_text() {
        let data = "2 3\nhello 0.1 0.2 0.3\nworld 0.4 0.5 0.6\n";
        let model = WordVectors::from_reader(Cursor::new(data)).unwrap();

        assert_eq!(model.dimension(), 3);
        assert_eq!(model.len(), 2);
        assert_eq!(
            model.vector_for("world"),
            Some([0.4, 0.5, 0.6].as_slice())
        );
    }

    #[test]
    fn test_from_reader_bad_header() {
        let err = WordVectors::from_reader(Cursor::new("not a header\n")).unwrap_err();
        assert!(matches!(
            err,
            DocDiffError::Load {
                source: LoadErrorKind::ModelParse(_),
                ..
            }
        ));
    }

    #[test]
    fn test_from_reader_wrong_vector_width() {
        let data = "1 3\nhello 0.1 0.2\n";
        let err = WordVectors::from_reader(Cursor::new(data)).unwrap_err();
        assert!(err.to_string().contains("load"));
    }

    #[test]
    fn test_from_reader_non_numeric_value() {
        let data = "1 2\nhello 0.1 oops\n";
        assert!(WordVectors::from_reader(Cursor::new(data)).is_err());
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = WordVectors::from_path("/nonexistent/model.txt").unwrap_err();
        assert!(matches!(err, DocDiffError::Io { .. }));
    }
}
