//! ComplEx: complex-valued bilinear scoring ([Trouillon et al. 2016](https://arxiv.org/abs/1606.06357)).
//!
//! Embeddings of dimension k hold k/2 complex numbers: real parts in the
//! first k/2 columns, imaginary parts in the last k/2.
//!
//! Score = Re(<s, p, conj(o)>)
//!
//! The conjugate breaks the symmetry DistMult suffers from. The score is
//! linear in s and in o, so both corruption variants reduce to a matrix
//! product against the candidate matrix.

use crate::batch::TripleBatch;
use crate::error::{Error, Result};
use crate::layer::{LayerConfig, ScoringLayer};
use ndarray::{s, Array1, Array2, ArrayView2, Axis};

/// Split (n × k) into real and imaginary halves.
pub(crate) fn halves(x: ArrayView2<'_, f32>) -> (ArrayView2<'_, f32>, ArrayView2<'_, f32>) {
    let h = x.ncols() / 2;
    x.split_at(Axis(1), h)
}

/// Join real and imaginary halves back into (n × k).
pub(crate) fn join(re: &Array2<f32>, im: &Array2<f32>) -> Array2<f32> {
    let h = re.ncols();
    let mut out = Array2::zeros((re.nrows(), 2 * h));
    out.slice_mut(s![.., ..h]).assign(re);
    out.slice_mut(s![.., h..]).assign(im);
    out
}

/// Element-wise complex product of two (n × k) matrices in halved layout.
pub(crate) fn hadamard(a: ArrayView2<f32>, b: ArrayView2<f32>) -> (Array2<f32>, Array2<f32>) {
    let (a_re, a_im) = halves(a);
    let (b_re, b_im) = halves(b);
    let re = &a_re * &b_re - &a_im * &b_im;
    let im = &a_re * &b_im + &a_im * &b_re;
    (re, im)
}

pub(crate) fn require_even(name: &str, k: usize) -> Result<()> {
    if k % 2 != 0 {
        return Err(Error::Validation(format!(
            "{} needs an even embedding dimension, got {}",
            name, k
        )));
    }
    Ok(())
}

/// ComplEx scoring layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComplEx {
    k: usize,
}

impl ComplEx {
    /// `k` counts real and imaginary columns together and must be even.
    pub fn new(k: usize) -> Result<Self> {
        require_even("ComplEx", k)?;
        Ok(Self { k })
    }

    pub(crate) fn from_config(config: &LayerConfig) -> Result<Box<dyn ScoringLayer>> {
        Ok(Box::new(Self::new(config.k)?))
    }

    /// Coefficients of s in Re(<s, p, conj(o)>): [p_re o_re + p_im o_im | p_re o_im - p_im o_re].
    fn subject_weights(triples: &TripleBatch) -> Array2<f32> {
        let (p_re, p_im) = halves(triples.predicates());
        let (o_re, o_im) = halves(triples.objects());
        let re = &p_re * &o_re + &p_im * &o_im;
        let im = &p_re * &o_im - &p_im * &o_re;
        join(&re, &im)
    }

    /// Coefficients of o: the halves of s ∘ p.
    fn object_weights(triples: &TripleBatch) -> Array2<f32> {
        let (re, im) = hadamard(triples.subjects(), triples.predicates());
        join(&re, &im)
    }
}

impl ScoringLayer for ComplEx {
    fn name(&self) -> &'static str {
        "ComplEx"
    }

    fn k(&self) -> usize {
        self.k
    }

    fn score_batch(&self, triples: &TripleBatch) -> Array1<f32> {
        (Self::object_weights(triples) * &triples.objects()).sum_axis(Axis(1))
    }

    fn score_subject_corruptions(
        &self,
        triples: &TripleBatch,
        candidates: ArrayView2<f32>,
    ) -> Array2<f32> {
        Self::subject_weights(triples).dot(&candidates.t())
    }

    fn score_object_corruptions(
        &self,
        triples: &TripleBatch,
        candidates: ArrayView2<f32>,
    ) -> Array2<f32> {
        Self::object_weights(triples).dot(&candidates.t())
    }
}
