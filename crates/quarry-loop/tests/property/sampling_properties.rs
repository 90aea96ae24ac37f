use proptest::prelude::*;
use quarry_loop::sampling::{limit_pool, IndexMap};
use quarry_loop::ActiveLearningLoop;
use rand::rngs::StdRng;
use rand::SeedableRng;
use test_fixtures::{FirstOutputHeuristic, InMemoryDataset, ValueSource};

// ── Pool limiting ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn limited_pool_has_exact_size_distinct_in_range(
        (pool_len, limit) in (2usize..300).prop_flat_map(|n| (Just(n), 1..n)),
        seed in any::<u64>(),
    ) {
        let map = limit_pool(&mut StdRng::seed_from_u64(seed), pool_len, Some(limit));
        let positions = map.sampled().expect("limit below pool size must subsample").to_vec();
        prop_assert_eq!(positions.len(), limit);
        prop_assert!(positions.iter().all(|&p| p < pool_len));
        let mut distinct = positions.clone();
        distinct.sort_unstable();
        distinct.dedup();
        prop_assert_eq!(distinct.len(), limit);
    }

    #[test]
    fn unlimited_or_large_limit_is_identity(
        pool_len in 0usize..300,
        extra in 0usize..50,
        unlimited in any::<bool>(),
        seed in any::<u64>(),
    ) {
        let limit = if unlimited { None } else { Some(pool_len + extra) };
        let map = limit_pool(&mut StdRng::seed_from_u64(seed), pool_len, limit);
        prop_assert_eq!(&map, &IndexMap::Identity(pool_len));
        prop_assert_eq!(map.to_vec(), (0..pool_len).collect::<Vec<_>>());
    }

    #[test]
    fn translate_is_a_gather(
        (pool_len, limit) in (2usize..100).prop_flat_map(|n| (Just(n), 1..n)),
        seed in any::<u64>(),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 0..20),
    ) {
        let map = limit_pool(&mut StdRng::seed_from_u64(seed), pool_len, Some(limit));
        let ranks: Vec<usize> = picks.iter().map(|p| p.index(limit)).collect();
        let translated = map.translate(&ranks).unwrap();
        let positions = map.to_vec();
        prop_assert_eq!(translated.len(), ranks.len());
        for (t, r) in translated.iter().zip(&ranks) {
            prop_assert_eq!(*t, positions[*r]);
        }
    }
}

// ── End to end ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn step_labels_the_most_uncertain_working_sample(
        values in prop::collection::hash_set(0u32..10_000, 1..60),
        limit in prop::option::of(1usize..40),
        seed in any::<u64>(),
    ) {
        let values: Vec<f64> = values.into_iter().map(f64::from).collect();
        let mut al_loop = ActiveLearningLoop::new(
            InMemoryDataset::new(values.clone()),
            ValueSource::new(),
            FirstOutputHeuristic,
        )
        .with_max_sample(limit)
        .with_seed(seed);

        prop_assert!(al_loop.step(None).unwrap());

        let working_pool = al_loop.source().calls()[0].clone();
        let expected_len = limit.map_or(values.len(), |l| l.min(values.len()));
        prop_assert_eq!(working_pool.len(), expected_len);

        let best = working_pool.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert_eq!(al_loop.dataset().labelled_samples(), vec![best]);
    }
}
