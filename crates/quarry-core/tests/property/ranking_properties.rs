use proptest::prelude::*;
use quarry_core::models::{PoolView, Ranking};

// ── Ranking::from_scores ────────────────────────────────────────────────

proptest! {
    #[test]
    fn from_scores_is_a_permutation(scores in prop::collection::vec(0.0f64..1.0, 0..64)) {
        let ranking = Ranking::from_scores(&scores);
        prop_assert_eq!(ranking.len(), scores.len());
        prop_assert!(ranking.validate().is_ok());

        let mut seen = ranking.to_label.clone();
        seen.sort_unstable();
        prop_assert_eq!(seen, (0..scores.len()).collect::<Vec<_>>());
    }

    #[test]
    fn from_scores_is_non_increasing(scores in prop::collection::vec(-10.0f64..10.0, 1..64)) {
        let ranking = Ranking::from_scores(&scores);
        for pair in ranking.uncertainty.windows(2) {
            prop_assert!(pair[0] >= pair[1]);
        }
    }

    #[test]
    fn from_scores_aligns_uncertainty_with_indices(scores in prop::collection::vec(0.0f64..1.0, 0..64)) {
        let ranking = Ranking::from_scores(&scores);
        for (idx, u) in ranking.to_label.iter().zip(&ranking.uncertainty) {
            prop_assert_eq!(scores[*idx], *u);
        }
    }
}

// ── PoolView ────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn subset_view_gathers_positions(
        items in prop::collection::vec(any::<u32>(), 1..64),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 0..32),
    ) {
        let positions: Vec<usize> = picks.iter().map(|p| p.index(items.len())).collect();
        let view = PoolView::subset(&items, &positions);
        prop_assert_eq!(view.len(), positions.len());
        for (local, &original) in positions.iter().enumerate() {
            prop_assert_eq!(view[local], items[original]);
        }
    }
}
