//! Combination codec - the combinatorial number system
//!
//! Maps ranks in `[0, C(n, k))` to ascending k-subsets of `{0, .., n-1}` in
//! lexicographic order, and back.
//!
//! Decoding walks the output positions left to right. The candidate pool is
//! always the untouched ascending suffix `[cursor, n)`, so dropping an item
//! from the front is a cursor bump. With `m` items still to pick, the number
//! of combinations whose next item is `c` is `C(n - 1 - c, m - 1)`;
//! candidates are skipped (and their block subtracted from the rank) until
//! the rank falls inside a block.
//!
//! ```
//! use num_bigint::BigUint;
//! use shuffler_core::combination::combination_at;
//!
//! let combo = combination_at(6, 3, &BigUint::from(12u32)).unwrap();
//! assert_eq!(combo, vec![1, 2, 5]);
//! ```

use log::trace;
use rand::Rng;

use crate::arith::{choose, count_combinations};
use crate::random::uniform_below;
use crate::types::{Rank, Result, ShuffleError};

/// The `rank`-th ascending k-subset of Universe(n).
pub fn combination_at(n: usize, k: usize, rank: &Rank) -> Result<Vec<usize>> {
    let count = count_combinations(n, k)?;
    if *rank >= count {
        return Err(ShuffleError::OutOfRange {
            rank: rank.clone(),
            count,
        });
    }

    let mut result = Vec::with_capacity(k);
    let mut r = rank.clone();
    let mut cursor = 0usize;
    if k == 0 {
        return Ok(result);
    }

    // Size of the block whose next item is `cursor`: C(n - 1 - cursor, k - 1 - i).
    let mut block = choose((n - 1) as u64, (k - 1) as u64)?;

    for i in 0..k {
        let still_needed = k - 1 - i;
        // r < C(n - cursor, k - i) holds here, so a block is found before
        // the pool runs short.
        while r >= block {
            r -= &block;
            // C(a - 1, b) = C(a, b) * (a - b) / a
            let a = n - 1 - cursor;
            block = block * (a - still_needed) / a;
            cursor += 1;
        }
        trace!(
            "combination_at({}, {}): position {} takes {}, remaining rank {}",
            n,
            k,
            i,
            cursor,
            r
        );
        result.push(cursor);
        if still_needed > 0 {
            // C(a - 1, b - 1) = C(a, b) * b / a
            let a = n - 1 - cursor;
            block = block * still_needed / a;
        }
        cursor += 1;
    }

    Ok(result)
}

/// Rank of an ascending k-subset of Universe(n); inverse of [`combination_at`].
pub fn rank_of_combination(n: usize, combo: &[usize]) -> Result<Rank> {
    let k = combo.len();
    if k > n {
        return Err(ShuffleError::invalid(format!(
            "combination of {} items cannot come from {} items",
            k, n
        )));
    }
    if let Some(&item) = combo.iter().find(|&&item| item >= n) {
        return Err(ShuffleError::invalid(format!(
            "item {} is outside 0..{}",
            item, n
        )));
    }
    if combo.windows(2).any(|w| w[0] >= w[1]) {
        return Err(ShuffleError::invalid("combination must be strictly ascending"));
    }

    let mut rank = Rank::default();
    let mut start = 0usize;
    for (i, &item) in combo.iter().enumerate() {
        let still_needed = (k - 1 - i) as u64;
        for skipped in start..item {
            rank += choose((n - 1 - skipped) as u64, still_needed)?;
        }
        start = item + 1;
    }
    Ok(rank)
}

/// Uniformly random ascending k-subset of Universe(n).
///
/// The rank is drawn uniformly below `C(n, k)`, so every combination is
/// equally likely.
pub fn random_combination<R>(n: usize, k: usize, rng: &mut R) -> Result<Vec<usize>>
where
    R: Rng + ?Sized,
{
    let count = count_combinations(n, k)?;
    let rank = uniform_below(&count, rng)?;
    combination_at(n, k, &rank)
}
