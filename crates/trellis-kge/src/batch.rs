//! Batched triple embeddings.

use crate::error::{Error, Result};
use ndarray::{s, Array2, ArrayView2};

/// Embeddings for a batch of n triples, each side an (n × k) matrix.
///
/// Row `i` of each matrix belongs to triple `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct TripleBatch {
    subjects: Array2<f32>,
    predicates: Array2<f32>,
    objects: Array2<f32>,
}

impl TripleBatch {
    /// Create a batch. All three matrices must have the same shape.
    pub fn new(subjects: Array2<f32>, predicates: Array2<f32>, objects: Array2<f32>) -> Result<Self> {
        if subjects.dim() != predicates.dim() || subjects.dim() != objects.dim() {
            return Err(Error::Shape(format!(
                "subject {:?}, predicate {:?} and object {:?} embeddings differ",
                subjects.dim(),
                predicates.dim(),
                objects.dim()
            )));
        }
        Ok(Self {
            subjects,
            predicates,
            objects,
        })
    }

    /// Split rows laid out as `[s | p | o]` (n × 3k) into a batch.
    pub fn from_concatenated(rows: ArrayView2<f32>) -> Result<Self> {
        let width = rows.ncols();
        if width % 3 != 0 {
            return Err(Error::Shape(format!(
                "row width {} is not a multiple of 3",
                width
            )));
        }
        let k = width / 3;
        Self::new(
            rows.slice(s![.., ..k]).to_owned(),
            rows.slice(s![.., k..2 * k]).to_owned(),
            rows.slice(s![.., 2 * k..]).to_owned(),
        )
    }

    /// Number of triples.
    pub fn len(&self) -> usize {
        self.subjects.nrows()
    }

    /// True if the batch holds no triples.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Embedding dimension.
    pub fn k(&self) -> usize {
        self.subjects.ncols()
    }

    pub fn subjects(&self) -> ArrayView2<'_, f32> {
        self.subjects.view()
    }

    pub fn predicates(&self) -> ArrayView2<'_, f32> {
        self.predicates.view()
    }

    pub fn objects(&self) -> ArrayView2<'_, f32> {
        self.objects.view()
    }
}
