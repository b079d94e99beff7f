//! Permutation codec - factorial number system (Lehmer code)
//!
//! Rank `r` in `[0, n!)` is read as mixed-radix digits with place values
//! `(n-1)!, (n-2)!, .., 0!`. Digit `i` picks the `q`-th remaining item of an
//! ordered pool; removing it shifts later items left, keeping the pool
//! sorted so the next digit is interpreted against the same ordering.

use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};
use rand::Rng;

use crate::arith::{count_permutations, factorial};
use crate::random::uniform_below;
use crate::types::{Rank, Result, ShuffleError};

/// The `rank`-th permutation of Universe(n) in lexicographic order.
pub fn permutation_at(n: usize, rank: &Rank) -> Result<Vec<usize>> {
    let count = count_permutations(n);
    if *rank >= count {
        return Err(ShuffleError::OutOfRange {
            rank: rank.clone(),
            count,
        });
    }

    let mut pool: Vec<usize> = (0..n).collect();
    let mut result = Vec::with_capacity(n);
    let mut r = rank.clone();

    // (n - i - 1)! at position i
    let mut place = if n == 0 {
        Rank::one()
    } else {
        factorial((n - 1) as u64)
    };

    for i in 0..n {
        let (digit, rest) = r.div_rem(&place);
        // r < (n - i)!, so the digit is below the pool length.
        let q = digit
            .to_usize()
            .filter(|&q| q < pool.len())
            .ok_or_else(|| ShuffleError::invalid("permutation digit exceeds pool"))?;
        result.push(pool.remove(q));
        r = rest;
        let remaining = n - i - 1;
        if remaining > 0 {
            place /= remaining;
        }
    }

    Ok(result)
}

/// Rank of a permutation of Universe(len); inverse of [`permutation_at`].
pub fn rank_of_permutation(perm: &[usize]) -> Result<Rank> {
    let n = perm.len();
    let mut seen = vec![false; n];
    for &item in perm {
        if item >= n || seen[item] {
            return Err(ShuffleError::invalid(format!(
                "not a permutation of 0..{}: {:?}",
                n, perm
            )));
        }
        seen[item] = true;
    }

    // Horner evaluation of the Lehmer digits.
    let mut rank = Rank::zero();
    for (i, &item) in perm.iter().enumerate() {
        let smaller_later = perm[i + 1..].iter().filter(|&&later| later < item).count();
        rank *= n - i;
        rank += smaller_later;
    }
    Ok(rank)
}

/// Uniformly random permutation of Universe(n).
pub fn random_permutation<R>(n: usize, rng: &mut R) -> Result<Vec<usize>>
where
    R: Rng + ?Sized,
{
    let rank = uniform_below(&count_permutations(n), rng)?;
    permutation_at(n, &rank)
}
