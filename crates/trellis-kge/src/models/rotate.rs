//! RotatE: relations as rotations in complex space ([Sun et al. 2019](https://arxiv.org/abs/1902.10197)).
//!
//! Uses the same halved layout as [`ComplEx`](super::ComplEx).
//!
//! Score = -||s ∘ p - o||, the modulus of each complex coordinate combined in L2.

use super::complex::{hadamard, halves, join, require_even};
use crate::batch::TripleBatch;
use crate::error::Result;
use crate::layer::{LayerConfig, Norm, ScoringLayer};
use ndarray::{Array1, Array2, ArrayView2, Zip};

/// RotatE scoring layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotatE {
    k: usize,
}

impl RotatE {
    /// `k` counts real and imaginary columns together and must be even.
    pub fn new(k: usize) -> Result<Self> {
        require_even("RotatE", k)?;
        Ok(Self { k })
    }

    pub(crate) fn from_config(config: &LayerConfig) -> Result<Box<dyn ScoringLayer>> {
        Ok(Box::new(Self::new(config.k)?))
    }

    fn rotated(triples: &TripleBatch) -> Array2<f32> {
        let (re, im) = hadamard(triples.subjects(), triples.predicates());
        join(&re, &im)
    }
}

impl ScoringLayer for RotatE {
    fn name(&self) -> &'static str {
        "RotatE"
    }

    fn k(&self) -> usize {
        self.k
    }

    fn score_batch(&self, triples: &TripleBatch) -> Array1<f32> {
        let rotated = Self::rotated(triples);
        let mut scores = Array1::zeros(triples.len());
        Zip::from(&mut scores)
            .and(rotated.rows())
            .and(triples.objects().rows())
            .for_each(|score, r, o| *score = -Norm::L2.of_diff(r, o));
        scores
    }

    fn score_subject_corruptions(
        &self,
        triples: &TripleBatch,
        candidates: ArrayView2<f32>,
    ) -> Array2<f32> {
        let (c_re, c_im) = halves(candidates);
        let (p_re, p_im) = halves(triples.predicates());
        let (o_re, o_im) = halves(triples.objects());

        Array2::from_shape_fn((triples.len(), candidates.nrows()), |(i, j)| {
            let mut sum_sq = 0.0;
            for d in 0..c_re.ncols() {
                // (c ∘ p) - o
                let re = c_re[[j, d]] * p_re[[i, d]] - c_im[[j, d]] * p_im[[i, d]] - o_re[[i, d]];
                let im = c_re[[j, d]] * p_im[[i, d]] + c_im[[j, d]] * p_re[[i, d]] - o_im[[i, d]];
                sum_sq += re * re + im * im;
            }
            -f32::sqrt(sum_sq)
        })
    }

    fn score_object_corruptions(
        &self,
        triples: &TripleBatch,
        candidates: ArrayView2<f32>,
    ) -> Array2<f32> {
        let rotated = Self::rotated(triples);
        Array2::from_shape_fn((triples.len(), candidates.nrows()), |(i, j)| {
            -Norm::L2.of_diff(rotated.row(i), candidates.row(j))
        })
    }
}
