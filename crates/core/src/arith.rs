//! Exact arithmetic - factorials and binomial coefficients
//!
//! All results are [`BigUint`], so nothing overflows no matter how large `n`
//! gets. Cost is linear in the number of factors, with each multiplication
//! working on a growing-width integer.

use num_bigint::BigUint;
use num_traits::One;

use crate::types::{Result, ShuffleError};

/// n! as an arbitrary-precision integer (1 for n <= 1).
pub fn factorial(n: u64) -> BigUint {
    let mut result = BigUint::one();
    for i in 2..=n {
        result *= i;
    }
    result
}

/// Binomial coefficient C(n, k).
///
/// `k > n` is rejected with [`ShuffleError::InvalidArgument`] rather than
/// treated as zero. Equal to `n! / k! / (n-k)!`, computed as a running
/// product over the smaller of `k` and `n - k` where every intermediate
/// quotient is exact.
pub fn choose(n: u64, k: u64) -> Result<BigUint> {
    if k > n {
        return Err(ShuffleError::invalid(format!(
            "choose: k ({}) must not exceed n ({})",
            k, n
        )));
    }
    if k == 0 || k == n {
        return Ok(BigUint::one());
    }

    // C(n, k) == C(n, n - k)
    let k = k.min(n - k);
    let mut result = BigUint::one();
    for i in 1..=k {
        // result == C(n - k + i - 1, i - 1) here, so the division is exact.
        result *= n - k + i;
        result /= i;
    }
    Ok(result)
}

/// Number of ascending k-subsets of Universe(n).
pub fn count_combinations(n: usize, k: usize) -> Result<BigUint> {
    choose(n as u64, k as u64)
}

/// Number of permutations of Universe(n).
pub fn count_permutations(n: usize) -> BigUint {
    factorial(n as u64)
}
