//! Property-based tests for scoring layers.
//!
//! These tests verify invariants that must hold for all inputs.
//!
//! # TransE Properties
//!
//! Score = -||s + p - o||
//!
//! - Score is in (-∞, 0]: perfect alignment gives 0
//! - Only s - o matters: a common shift of s and o is invisible
//! - Corruption matrices have shape (n, m) and agree with direct scoring

#![allow(clippy::unwrap_used)]

use ndarray::{Array1, Array2};
use proptest::prelude::*;
use trellis_kge::{build_from_config, build_layer, Norm, ScoringLayer, TransE, TripleBatch};

fn matrix(n: usize, k: usize) -> impl Strategy<Value = Array2<f32>> {
    prop::collection::vec(-2.0f32..2.0, n * k)
        .prop_map(move |v| Array2::from_shape_vec((n, k), v).unwrap())
}

/// (n, k) batch plus an (m, k) candidate matrix.
fn batch_and_candidates() -> impl Strategy<Value = (TripleBatch, Array2<f32>)> {
    (1usize..6, 1usize..8, 1usize..6).prop_flat_map(|(n, k, m)| {
        (matrix(n, k), matrix(n, k), matrix(n, k), matrix(m, k)).prop_map(|(s, p, o, c)| {
            (TripleBatch::new(s, p, o).unwrap(), c)
        })
    })
}

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() <= 1e-4 * (1.0 + a.abs().max(b.abs()))
}

proptest! {
    #[test]
    fn transe_score_is_non_positive((batch, _) in batch_and_candidates()) {
        let scores = TransE::new(batch.k()).compute_scores(&batch).unwrap();
        prop_assert!(scores.iter().all(|s| *s <= 0.0));
    }

    #[test]
    fn zero_embeddings_score_zero(n in 1usize..10, k in 1usize..16) {
        let zeros = Array2::<f32>::zeros((n, k));
        let batch = TripleBatch::new(zeros.clone(), zeros.clone(), zeros).unwrap();
        for norm in [Norm::L1, Norm::L2] {
            let scores = TransE::new(k).with_norm(norm).compute_scores(&batch).unwrap();
            prop_assert_eq!(scores, Array1::<f32>::zeros(n));
        }
    }

    #[test]
    fn corruption_shapes_are_n_by_m((batch, candidates) in batch_and_candidates()) {
        let n = batch.len();
        let m = candidates.nrows();
        for name in ["TransE", "DistMult"] {
            let layer = build_layer(name, batch.k()).unwrap();
            let subj = layer.subject_corruption_scores(&batch, candidates.view()).unwrap();
            let obj = layer.object_corruption_scores(&batch, candidates.view()).unwrap();
            prop_assert_eq!(subj.dim(), (n, m));
            prop_assert_eq!(obj.dim(), (n, m));
        }
    }

    #[test]
    fn transe_invariant_to_common_shift(
        (batch, _) in batch_and_candidates(),
        shift in -3.0f32..3.0,
    ) {
        let layer = TransE::new(batch.k());
        let before = layer.compute_scores(&batch).unwrap();

        let shifted = TripleBatch::new(
            batch.subjects().mapv(|x| x + shift),
            batch.predicates().to_owned(),
            batch.objects().mapv(|x| x + shift),
        )
        .unwrap();
        let after = layer.compute_scores(&shifted).unwrap();

        for (a, b) in before.iter().zip(after.iter()) {
            prop_assert!(close(*a, *b), "{} vs {}", a, b);
        }
    }

    #[test]
    fn corruption_with_true_entity_matches_score((batch, _) in batch_and_candidates()) {
        // Using the batch's own subjects (objects) as candidates puts the
        // true triple on the diagonal.
        let layer = TransE::new(batch.k());
        let scores = layer.compute_scores(&batch).unwrap();
        let subj = layer.subject_corruption_scores(&batch, batch.subjects()).unwrap();
        let obj = layer.object_corruption_scores(&batch, batch.objects()).unwrap();
        for i in 0..batch.len() {
            prop_assert!(close(subj[[i, i]], scores[i]));
            prop_assert!(close(obj[[i, i]], scores[i]));
        }
    }

    #[test]
    fn registry_round_trip_preserves_scores(
        (batch, candidates) in batch_and_candidates(),
        l1 in any::<bool>(),
    ) {
        let norm = if l1 { Norm::L1 } else { Norm::L2 };
        let layer = TransE::new(batch.k()).with_norm(norm);
        let rebuilt = build_from_config(&layer.config()).unwrap();

        prop_assert_eq!(
            layer.compute_scores(&batch).unwrap(),
            rebuilt.compute_scores(&batch).unwrap()
        );
        prop_assert_eq!(
            layer.object_corruption_scores(&batch, candidates.view()).unwrap(),
            rebuilt.object_corruption_scores(&batch, candidates.view()).unwrap()
        );
    }

    #[test]
    fn worst_rank_at_least_best_rank((batch, candidates) in batch_and_candidates()) {
        use trellis_kge::{Comparison, CorruptionSide};

        let layer = TransE::new(batch.k());
        let worst = layer
            .ranks(&batch, candidates.view(), CorruptionSide::Both, Comparison::Worst)
            .unwrap();
        let best = layer
            .ranks(&batch, candidates.view(), CorruptionSide::Both, Comparison::Best)
            .unwrap();
        prop_assert_eq!(worst.dim(), (2, batch.len()));
        for (w, b) in worst.iter().zip(best.iter()) {
            prop_assert!(w >= b);
            prop_assert!(*b >= 1 && *w <= candidates.nrows() + 1);
        }
    }
}
