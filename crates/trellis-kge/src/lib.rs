//! Scoring layers for Knowledge Graph Embeddings.
//!
//! Knowledge graphs store facts as (subject, predicate, object) triples:
//! `(Einstein, won, NobelPrize)`, `(Paris, capitalOf, France)`.
//! KGE models learn low-dimensional vectors for entities and relations where
//! **a scoring function over the three vectors predicts whether a triple holds**.
//!
//! This crate holds those scoring functions as batched `ndarray` kernels. The
//! training loop that learns the embeddings lives elsewhere; it calls into a
//! layer for three things:
//!
//! - scores of positive and negative triples (shape `(n,)`)
//! - scores of subject corruptions against m candidate entities (`(n, m)`)
//! - scores of object corruptions against m candidate entities (`(n, m)`)
//!
//! ## TransE: Relations as Translations
//!
//! The simplest and most influential model ([Bordes et al. 2013](https://papers.nips.cc/paper/2013/hash/1cecc7a77928ca8133fa24680a88d2f9-Abstract.html)).
//!
//! **Idea**: If (s, p, o) is true, then s + p ≈ o in embedding space.
//!
//! ```text
//!   s ----p----> o
//!  [0.2, 0.5] + [0.3, 0.1] ≈ [0.5, 0.6]
//! ```
//!
//! **Scoring**: -||s + p - o|| (lower distance = more plausible)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use trellis_kge::{registry, TripleBatch};
//!
//! let layer = registry::build_layer("TransE", 3)?;
//! let batch = TripleBatch::new(subjects, predicates, objects)?;
//!
//! let scores = layer.compute_scores(&batch)?;
//! let ranks = layer.ranks(&batch, entities.view(), CorruptionSide::Both, Comparison::Worst)?;
//! ```
//!
//! ## References
//!
//! - Bordes et al. (2013). "Translating Embeddings for Modeling
//!   Multi-relational Data." NIPS.
//! - Yang et al. (2015). "Embedding Entities and Relations for Learning and
//!   Inference in Knowledge Bases." ICLR.
//! - Trouillon et al. (2016). "Complex Embeddings for Simple Link
//!   Prediction." ICML.
//! - Sun et al. (2019). "RotatE: Knowledge Graph Embedding by
//!   Relational Rotation in Complex Space." ICLR.

mod batch;
mod error;
mod layer;
pub mod models;
pub mod registry;

pub use batch::TripleBatch;
pub use error::{Error, Result};
pub use layer::{Comparison, CorruptionSide, LayerConfig, Norm, ScoringLayer};
pub use models::{ComplEx, DistMult, RotatE, TransE};
pub use registry::{build_from_config, build_layer, register_layer, registered_layers};
