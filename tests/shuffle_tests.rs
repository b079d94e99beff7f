//! Shuffle tests - Fisher-Yates multiset preservation, uniformity and sources

use std::collections::HashMap;
use std::thread;

use rand::SeedableRng;
use rand_pcg::Pcg64;
use shuffler::core::{shuffle, shuffle_thread_local, Shuffler, ShufflerConfig};

fn sorted<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    let mut v = items.to_vec();
    v.sort();
    v
}

#[test]
fn test_shuffle_preserves_multiset() {
    let mut rng = Pcg64::seed_from_u64(200);
    for len in 0..40usize {
        let original: Vec<usize> = (0..len).map(|i| i % 7).collect();
        let mut items = original.clone();
        let out = shuffle(&mut items, &mut rng);
        assert_eq!(out.len(), len);
        assert_eq!(sorted(&items), sorted(&original));
    }
}

#[test]
fn test_shuffle_non_copy_elements() {
    let mut shuffler = Shuffler::seeded(201);
    let mut words: Vec<String> = ["alpha", "beta", "gamma", "delta", "epsilon"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let original = words.clone();
    shuffler.shuffle(&mut words);
    assert_eq!(sorted(&words), sorted(&original));
}

#[test]
fn test_shuffle_chains() {
    let mut shuffler = Shuffler::seeded(202);
    let mut items = [5, 4, 3, 2, 1];
    let total: i32 = shuffler.shuffle(&mut items).iter().sum();
    assert_eq!(total, 15);
}

#[test]
fn test_shuffle_three_is_uniform() {
    let mut shuffler = Shuffler::seeded(203);
    let trials = 60_000usize;
    let mut counts: HashMap<[u8; 3], usize> = HashMap::new();
    for _ in 0..trials {
        let mut items = [0u8, 1, 2];
        shuffler.shuffle(&mut items);
        *counts.entry(items).or_insert(0) += 1;
    }
    assert_eq!(counts.len(), 6);

    let expected = trials as f64 / 6.0;
    let stat: f64 = counts
        .values()
        .map(|&c| (c as f64 - expected).powi(2) / expected)
        .sum();
    // 5 degrees of freedom, p = 0.001
    assert!(stat < 20.52, "chi-square {} too large: {:?}", stat, counts);
}

#[test]
fn test_seeded_shuffler_replays_session() -> anyhow::Result<()> {
    let run = |seed| -> anyhow::Result<(Vec<u32>, Vec<usize>, Vec<usize>)> {
        let mut shuffler = Shuffler::from_config(&ShufflerConfig::default().with_seed(seed));
        let mut deck: Vec<u32> = (0..52).collect();
        shuffler.shuffle(&mut deck);
        let combo = shuffler.random_combination(52, 5)?;
        let perm = shuffler.random_permutation(8)?;
        Ok((deck, combo, perm))
    };
    assert_eq!(run(2024)?, run(2024)?);
    assert_ne!(run(2024)?.0, run(2025)?.0);
    Ok(())
}

#[test]
fn test_independent_sources_across_threads() {
    let handles: Vec<_> = (0..4u64)
        .map(|seed| {
            thread::spawn(move || {
                let mut shuffler = Shuffler::seeded(seed);
                let mut items: Vec<u32> = (0..100).collect();
                for _ in 0..100 {
                    shuffler.shuffle(&mut items);
                }
                let mut local: Vec<u32> = (0..100).collect();
                shuffle_thread_local(&mut local);
                (items, local)
            })
        })
        .collect();

    for handle in handles {
        let (items, local) = handle.join().unwrap();
        assert_eq!(sorted(&items), (0..100).collect::<Vec<_>>());
        assert_eq!(sorted(&local), (0..100).collect::<Vec<_>>());
    }
}
