//! Codec tests - rank <-> combination/permutation bijections

use std::collections::HashSet;

use num_bigint::BigUint;
use num_traits::ToPrimitive;
use shuffler::core::{
    choose, combination_at, count_combinations, count_permutations, factorial, permutation_at,
    rank_of_combination, rank_of_permutation,
};

fn rank(v: u64) -> BigUint {
    BigUint::from(v)
}

// ============== Exact Arithmetic ==============

#[test]
fn test_factorial_known_values() {
    assert_eq!(factorial(0), rank(1));
    assert_eq!(factorial(1), rank(1));
    assert_eq!(factorial(5), rank(120));
}

#[test]
fn test_choose_known_values() -> anyhow::Result<()> {
    assert_eq!(choose(7, 5)?, rank(21));
    assert_eq!(choose(6, 3)?, rank(20));
    Ok(())
}

#[test]
fn test_choose_symmetric() -> anyhow::Result<()> {
    for n in 0..=40u64 {
        for k in 0..=n {
            assert_eq!(choose(n, k)?, choose(n, n - k)?, "C({}, {})", n, k);
        }
    }
    Ok(())
}

#[test]
fn test_choose_k_above_n_is_rejected() {
    let err = choose(5, 6).unwrap_err();
    assert!(err.is_invalid_argument());
}

// ============== Combination Codec ==============

#[test]
fn test_combination_regression() -> anyhow::Result<()> {
    let _ = pretty_env_logger::try_init();
    assert_eq!(combination_at(6, 3, &rank(12))?, vec![1, 2, 5]);
    Ok(())
}

#[test]
fn test_combination_extremes() -> anyhow::Result<()> {
    for (n, k) in [(1, 1), (5, 2), (10, 10), (12, 5), (20, 1)] {
        assert_eq!(combination_at(n, k, &rank(0))?, (0..k).collect::<Vec<_>>());
        let last = count_combinations(n, k)? - 1u32;
        assert_eq!(combination_at(n, k, &last)?, (n - k..n).collect::<Vec<_>>());
    }
    Ok(())
}

#[test]
fn test_combination_enumerates_every_subset_once() -> anyhow::Result<()> {
    for n in 0..=7usize {
        for k in 0..=n {
            let count = count_combinations(n, k)?.to_u64().unwrap();
            let mut seen = HashSet::new();
            for r in 0..count {
                let combo = combination_at(n, k, &rank(r))?;
                assert_eq!(combo.len(), k);
                assert!(combo.windows(2).all(|w| w[0] < w[1]));
                assert!(combo.iter().all(|&c| c < n));
                assert!(seen.insert(combo), "duplicate at n={} k={} r={}", n, k, r);
            }
            assert_eq!(seen.len() as u64, count);
        }
    }
    Ok(())
}

#[test]
fn test_combination_rank_out_of_range() {
    let err = combination_at(6, 3, &rank(20)).unwrap_err();
    assert!(err.is_out_of_range());
    assert!(combination_at(2, 3, &rank(0)).unwrap_err().is_invalid_argument());
}

#[test]
fn test_combination_encode_inverts_decode() -> anyhow::Result<()> {
    let count = count_combinations(30, 15)?;
    // Spot-check a few ranks above u32 range.
    for r in [rank(0), rank(1), rank(77_558_759), count.clone() - 1u32, count / 3u32] {
        let combo = combination_at(30, 15, &r)?;
        assert_eq!(rank_of_combination(30, &combo)?, r);
    }
    Ok(())
}

// ============== Permutation Codec ==============

#[test]
fn test_permutation_extremes() -> anyhow::Result<()> {
    assert_eq!(permutation_at(3, &rank(0))?, vec![0, 1, 2]);
    for n in 1..=10usize {
        let last = count_permutations(n) - 1u32;
        assert_eq!(permutation_at(n, &last)?, (0..n).rev().collect::<Vec<_>>());
    }
    Ok(())
}

#[test]
fn test_permutations_of_three_enumerated_once() -> anyhow::Result<()> {
    let mut seen = HashSet::new();
    for r in 0..6u64 {
        assert!(seen.insert(permutation_at(3, &rank(r))?));
    }
    assert_eq!(seen.len(), 6);
    assert!(permutation_at(3, &rank(6)).unwrap_err().is_out_of_range());
    Ok(())
}

#[test]
fn test_permutation_order_is_lexicographic() -> anyhow::Result<()> {
    let mut prev = permutation_at(5, &rank(0))?;
    for r in 1..120u64 {
        let next = permutation_at(5, &rank(r))?;
        assert!(prev < next);
        prev = next;
    }
    Ok(())
}

#[test]
fn test_permutation_encode_inverts_decode() -> anyhow::Result<()> {
    let count = count_permutations(25);
    for r in [rank(0), rank(123_456_789), count.clone() / 2u32, count - 1u32] {
        let perm = permutation_at(25, &r)?;
        assert_eq!(rank_of_permutation(&perm)?, r);
    }
    Ok(())
}
