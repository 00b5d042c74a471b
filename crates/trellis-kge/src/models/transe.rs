//! TransE: Relations as Translations.
//!
//! TransE ([Bordes et al. 2013](https://papers.nips.cc/paper/2013/hash/1cecc7a77928ca8133fa24680a88d2f9-Abstract.html))
//! is the foundational KGE model. It interprets relations as translations in embedding space:
//!
//! ```text
//! s + p ≈ o  (if the triple is true)
//! ```
//!
//! # Scoring
//!
//! Score = -||s + p - o|| (negative L2 distance by default, L1 optional)
//!
//! Higher scores indicate more plausible triples. Only `s - o` enters the
//! score, so shifting subject and object by the same vector leaves it unchanged.
//!
//! # Corruptions
//!
//! For a true triple and m candidate entities c:
//!
//! ```text
//! subject corruption: -||c + (p - o)||
//! object corruption:  -||(s + p) - c||
//! ```
//!
//! The residual `p - o` (or `s + p`) is computed once per triple and reused
//! across all candidates.
//!
//! # Example
//!
//! ```rust,ignore
//! use trellis_kge::{ScoringLayer, TransE, TripleBatch};
//!
//! let layer = TransE::new(128);
//! let scores = layer.compute_scores(&batch)?;           // (n,)
//! let corr = layer.object_corruption_scores(&batch, entities.view())?; // (n, m)
//! ```

use crate::batch::TripleBatch;
use crate::error::Result;
use crate::layer::{LayerConfig, Norm, ScoringLayer};
use ndarray::{Array1, Array2, ArrayView2, Zip};

/// TransE scoring layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransE {
    /// Embedding dimension.
    k: usize,
    /// Distance norm.
    norm: Norm,
}

impl Default for TransE {
    fn default() -> Self {
        Self::new(128)
    }
}

impl TransE {
    /// Create a TransE layer with L2 distance.
    pub fn new(k: usize) -> Self {
        Self { k, norm: Norm::L2 }
    }

    /// Use a different distance norm.
    pub fn with_norm(mut self, norm: Norm) -> Self {
        self.norm = norm;
        self
    }

    pub(crate) fn from_config(config: &LayerConfig) -> Result<Box<dyn ScoringLayer>> {
        Ok(Box::new(
            Self::new(config.k).with_norm(config.norm.unwrap_or_default()),
        ))
    }
}

impl ScoringLayer for TransE {
    fn name(&self) -> &'static str {
        "TransE"
    }

    fn k(&self) -> usize {
        self.k
    }

    fn norm(&self) -> Option<Norm> {
        Some(self.norm)
    }

    fn score_batch(&self, triples: &TripleBatch) -> Array1<f32> {
        let mut scores = Array1::zeros(triples.len());
        Zip::from(&mut scores)
            .and(triples.subjects().rows())
            .and(triples.predicates().rows())
            .and(triples.objects().rows())
            .for_each(|score, s, p, o| {
                let diff = s.iter().zip(p).zip(o).map(|((s, p), o)| s + p - o);
                *score = -self.norm.of_iter(diff);
            });
        scores
    }

    fn score_subject_corruptions(
        &self,
        triples: &TripleBatch,
        candidates: ArrayView2<f32>,
    ) -> Array2<f32> {
        let residual = &triples.predicates() - &triples.objects();
        Array2::from_shape_fn((triples.len(), candidates.nrows()), |(i, j)| {
            -self.norm.of_sum(candidates.row(j), residual.row(i))
        })
    }

    fn score_object_corruptions(
        &self,
        triples: &TripleBatch,
        candidates: ArrayView2<f32>,
    ) -> Array2<f32> {
        let translated = &triples.subjects() + &triples.predicates();
        Array2::from_shape_fn((triples.len(), candidates.nrows()), |(i, j)| {
            -self.norm.of_diff(translated.row(i), candidates.row(j))
        })
    }
}
