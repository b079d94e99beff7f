//! Uniform random big integers
//!
//! Rejection sampling on bit length: draw `bound.bits()` random bits and
//! retry while the candidate is not below `bound`. Since
//! `2^(bits-1) <= bound < 2^bits`, a single draw is accepted with
//! probability greater than 1/2, so the expected number of draws is below 2.
//! There is no cap on retries; the loop terminates with probability 1 for any
//! uniform generator.

use num_bigint::BigUint;
use num_traits::Zero;
use rand::Rng;

use crate::types::{Result, ShuffleError};

/// Uniform [`BigUint`] in `[0, 2^bits)`.
pub fn random_bits<R>(rng: &mut R, bits: u64) -> BigUint
where
    R: Rng + ?Sized,
{
    let digits = (bits / 32) as usize;
    let rem = bits % 32;
    let len = digits + usize::from(rem > 0);
    if len == 0 {
        return BigUint::zero();
    }

    let mut data = vec![0u32; len];
    rng.fill(&mut data[..]);
    if rem > 0 {
        // Keep only the lowest `rem` bits of the top limb.
        data[len - 1] >>= 32 - rem;
    }
    BigUint::new(data)
}

/// Uniform [`BigUint`] in `[0, bound)`. Fails when `bound` is zero.
pub fn uniform_below<R>(bound: &BigUint, rng: &mut R) -> Result<BigUint>
where
    R: Rng + ?Sized,
{
    if bound.is_zero() {
        return Err(ShuffleError::invalid("bound must be positive"));
    }

    let bits = bound.bits();
    loop {
        let candidate = random_bits(rng, bits);
        if candidate < *bound {
            return Ok(candidate);
        }
    }
}

/// Uniform [`BigUint`] in `[low, high)`. Fails when the range is empty.
pub fn uniform_between<R>(low: &BigUint, high: &BigUint, rng: &mut R) -> Result<BigUint>
where
    R: Rng + ?Sized,
{
    if low >= high {
        return Err(ShuffleError::invalid(format!(
            "empty range [{}, {})",
            low, high
        )));
    }
    let len = high - low;
    Ok(low + uniform_below(&len, rng)?)
}
