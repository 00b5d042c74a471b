//! Scoring layer implementations.
//!
//! Each model implements [`ScoringLayer`](crate::ScoringLayer) on plain
//! `ndarray` matrices and registers under its name.
//!
//! | Model | Geometry | Score | k |
//! |-------|----------|-------|---|
//! | [`TransE`] | Translation | -‖s + p - o‖ | any |
//! | [`DistMult`] | Diagonal bilinear | ⟨s, p, o⟩ | any |
//! | [`ComplEx`] | Complex bilinear | Re(⟨s, p, conj(o)⟩) | even |
//! | [`RotatE`] | Complex rotation | -‖s ∘ p - o‖ | even |

mod complex;
mod distmult;
mod rotate;
mod transe;

pub use complex::ComplEx;
pub use distmult::DistMult;
pub use rotate::RotatE;
pub use transe::TransE;
