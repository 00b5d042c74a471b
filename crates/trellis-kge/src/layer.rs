//! The scoring layer contract.
//!
//! A scoring layer turns batched embeddings into plausibility scores. Every
//! layer answers three questions:
//!
//! | Operation | Input | Output |
//! |-----------|-------|--------|
//! | [`compute_scores`](ScoringLayer::compute_scores) | (n, k) × 3 | (n,) |
//! | [`subject_corruption_scores`](ScoringLayer::subject_corruption_scores) | (n, k) × 3, (m, k) | (n, m) |
//! | [`object_corruption_scores`](ScoringLayer::object_corruption_scores) | (n, k) × 3, (m, k) | (n, m) |
//!
//! Implementations supply the unchecked kernels (`score_batch`,
//! `score_subject_corruptions`, `score_object_corruptions`); the provided
//! methods validate shapes first and return [`Error::Shape`] on mismatch.

use crate::batch::TripleBatch;
use crate::error::{Error, Result};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Vector norm used by distance-based layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    /// Sum of absolute values.
    L1,
    /// Euclidean length.
    #[default]
    L2,
}

impl Norm {
    /// Norm of the values yielded by `values`.
    #[inline]
    pub fn of_iter(&self, values: impl Iterator<Item = f32>) -> f32 {
        match self {
            Self::L1 => values.map(f32::abs).sum(),
            Self::L2 => values.map(|x| x * x).sum::<f32>().sqrt(),
        }
    }

    /// ||v||
    pub fn of(&self, v: ArrayView1<f32>) -> f32 {
        self.of_iter(v.iter().copied())
    }

    /// ||a + b||
    pub fn of_sum(&self, a: ArrayView1<f32>, b: ArrayView1<f32>) -> f32 {
        self.of_iter(a.iter().zip(b.iter()).map(|(x, y)| x + y))
    }

    /// ||a - b||
    pub fn of_diff(&self, a: ArrayView1<f32>, b: ArrayView1<f32>) -> f32 {
        self.of_iter(a.iter().zip(b.iter()).map(|(x, y)| x - y))
    }

    /// Norm of every row of an (n × k) matrix.
    pub fn rows(&self, x: ArrayView2<f32>) -> Array1<f32> {
        x.rows().into_iter().map(|r| self.of(r)).collect()
    }
}

impl fmt::Display for Norm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::L1 => f.write_str("l1"),
            Self::L2 => f.write_str("l2"),
        }
    }
}

/// Serializable description of a layer, enough to rebuild it from the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerConfig {
    /// Registry name.
    pub name: String,
    /// Embedding dimension.
    pub k: usize,
    /// Norm, for layers that take one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub norm: Option<Norm>,
}

impl LayerConfig {
    pub fn new(name: impl Into<String>, k: usize) -> Self {
        Self {
            name: name.into(),
            k,
            norm: None,
        }
    }

    pub fn with_norm(mut self, norm: Norm) -> Self {
        self.norm = Some(norm);
        self
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Which side of the true triples to corrupt when ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorruptionSide {
    Subject,
    Object,
    /// Subject then object; ranks come back one row per side.
    Both,
}

impl CorruptionSide {
    fn sides(self) -> &'static [CorruptionSide] {
        match self {
            Self::Subject => &[Self::Subject],
            Self::Object => &[Self::Object],
            Self::Both => &[Self::Subject, Self::Object],
        }
    }
}

/// How ties between a true triple and its corruptions affect the rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Comparison {
    /// Ties rank ahead of the true triple.
    #[default]
    Worst,
    /// Ties rank behind the true triple.
    Best,
    /// Half of the ties rank ahead.
    Middle,
}

impl Comparison {
    /// 1-based rank of `positive` among `corruptions`.
    pub fn rank(&self, corruptions: ArrayView1<f32>, positive: f32) -> usize {
        let greater = corruptions.iter().filter(|&&c| c > positive).count();
        let equal = corruptions.iter().filter(|&&c| c == positive).count();
        match self {
            Self::Worst => 1 + greater + equal,
            Self::Best => 1 + greater,
            Self::Middle => 1 + greater + equal / 2,
        }
    }
}

/// Shared contract of all scoring layers.
///
/// Higher scores mean more plausible triples.
pub trait ScoringLayer: fmt::Debug + Send + Sync {
    /// Name the layer is registered under.
    fn name(&self) -> &'static str;

    /// Embedding dimension.
    fn k(&self) -> usize;

    /// Norm in use, for layers that take one.
    fn norm(&self) -> Option<Norm> {
        None
    }

    /// Description that rebuilds this layer via the registry.
    fn config(&self) -> LayerConfig {
        LayerConfig {
            name: self.name().to_string(),
            k: self.k(),
            norm: self.norm(),
        }
    }

    /// Scores of a batch whose dimension has been checked.
    fn score_batch(&self, triples: &TripleBatch) -> Array1<f32>;

    /// Subject corruption scores, shapes already checked.
    fn score_subject_corruptions(
        &self,
        triples: &TripleBatch,
        candidates: ArrayView2<f32>,
    ) -> Array2<f32>;

    /// Object corruption scores, shapes already checked.
    fn score_object_corruptions(
        &self,
        triples: &TripleBatch,
        candidates: ArrayView2<f32>,
    ) -> Array2<f32>;

    /// Score each triple in the batch. Returns shape (n,).
    fn compute_scores(&self, triples: &TripleBatch) -> Result<Array1<f32>> {
        check_dim(self.k(), triples.k(), "triple batch")?;
        Ok(self.score_batch(triples))
    }

    /// Score every triple with its subject replaced by each candidate row.
    ///
    /// `candidates` is (m, k); returns (n, m).
    fn subject_corruption_scores(
        &self,
        triples: &TripleBatch,
        candidates: ArrayView2<f32>,
    ) -> Result<Array2<f32>> {
        check_dim(self.k(), triples.k(), "triple batch")?;
        check_dim(self.k(), candidates.ncols(), "candidate matrix")?;
        Ok(self.score_subject_corruptions(triples, candidates))
    }

    /// Score every triple with its object replaced by each candidate row.
    ///
    /// `candidates` is (m, k); returns (n, m).
    fn object_corruption_scores(
        &self,
        triples: &TripleBatch,
        candidates: ArrayView2<f32>,
    ) -> Result<Array2<f32>> {
        check_dim(self.k(), triples.k(), "triple batch")?;
        check_dim(self.k(), candidates.ncols(), "candidate matrix")?;
        Ok(self.score_object_corruptions(triples, candidates))
    }

    /// Rank each true triple against its corruptions.
    ///
    /// Returns (sides, n): one row for `Subject` or `Object`, two rows
    /// (subject first) for `Both`. `candidates` should not contain the true
    /// entity, otherwise it is counted as a tie.
    fn ranks(
        &self,
        triples: &TripleBatch,
        candidates: ArrayView2<f32>,
        side: CorruptionSide,
        comparison: Comparison,
    ) -> Result<Array2<usize>> {
        let positive = self.compute_scores(triples)?;
        let sides = side.sides();
        let mut ranks = Array2::zeros((sides.len(), triples.len()));

        for (row, side) in sides.iter().enumerate() {
            let corrupted = match side {
                CorruptionSide::Subject => self.subject_corruption_scores(triples, candidates)?,
                _ => self.object_corruption_scores(triples, candidates)?,
            };
            for (i, scores) in corrupted.rows().into_iter().enumerate() {
                ranks[[row, i]] = comparison.rank(scores, positive[i]);
            }
        }

        Ok(ranks)
    }
}

fn check_dim(expected: usize, actual: usize, what: &str) -> Result<()> {
    if expected != actual {
        return Err(Error::Shape(format!(
            "{} has dimension {} but layer expects {}",
            what, actual, expected
        )));
    }
    Ok(())
}
