//! DistMult: diagonal bilinear scoring ([Yang et al. 2015](https://arxiv.org/abs/1412.6575)).
//!
//! Score = <s, p, o> = Σᵢ sᵢ pᵢ oᵢ
//!
//! Symmetric by construction: (s, p, o) and (o, p, s) score the same.
//! Both corruption variants are a single matrix product against the
//! candidate matrix.

use crate::batch::TripleBatch;
use crate::error::Result;
use crate::layer::{LayerConfig, ScoringLayer};
use ndarray::{Array1, Array2, ArrayView2, Axis};

/// DistMult scoring layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistMult {
    k: usize,
}

impl DistMult {
    pub fn new(k: usize) -> Self {
        Self { k }
    }

    pub(crate) fn from_config(config: &LayerConfig) -> Result<Box<dyn ScoringLayer>> {
        Ok(Box::new(Self::new(config.k)))
    }
}

impl ScoringLayer for DistMult {
    fn name(&self) -> &'static str {
        "DistMult"
    }

    fn k(&self) -> usize {
        self.k
    }

    fn score_batch(&self, triples: &TripleBatch) -> Array1<f32> {
        (&triples.subjects() * &triples.predicates() * &triples.objects()).sum_axis(Axis(1))
    }

    fn score_subject_corruptions(
        &self,
        triples: &TripleBatch,
        candidates: ArrayView2<f32>,
    ) -> Array2<f32> {
        (&triples.predicates() * &triples.objects()).dot(&candidates.t())
    }

    fn score_object_corruptions(
        &self,
        triples: &TripleBatch,
        candidates: ArrayView2<f32>,
    ) -> Array2<f32> {
        (&triples.subjects() * &triples.predicates()).dot(&candidates.t())
    }
}
