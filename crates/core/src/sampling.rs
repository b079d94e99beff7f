//! Random integer sampling - unique subsets, random fills and filtered ranges
//!
//! Unique subsets are built by rejection: draw uniform integers from
//! `[origin, bound)` and keep each one that passes the predicate and is not
//! already held. The pigeonhole check runs up front, but a predicate that
//! accepts fewer than `size` values makes the loop spin forever; sizing the
//! predicate is the caller's job.

use std::collections::HashSet;
use std::ops::Range;

use rand::Rng;

use crate::types::{Result, ShuffleError};

fn check_capacity(size: usize, origin: i64, bound: i64) -> Result<()> {
    let available = bound as i128 - origin as i128;
    if size as i128 > available {
        return Err(ShuffleError::invalid(format!(
            "requested {} distinct values but [{}, {}) holds {}",
            size,
            origin,
            bound,
            available.max(0)
        )));
    }
    Ok(())
}

/// `size` distinct integers from `[origin, bound)` accepted by `predicate`.
pub fn random_unique_subset<R, F>(
    size: usize,
    origin: i64,
    bound: i64,
    predicate: F,
    rng: &mut R,
) -> Result<HashSet<i64>>
where
    R: Rng + ?Sized,
    F: FnMut(i64) -> bool,
{
    let mut set = HashSet::with_capacity(size);
    random_unique_subset_into(&mut set, size, origin, bound, predicate, rng)?;
    Ok(set)
}

/// Clears `set` and refills it like [`random_unique_subset`].
///
/// Returns the same set. On error the set is left untouched.
pub fn random_unique_subset_into<'a, R, F>(
    set: &'a mut HashSet<i64>,
    size: usize,
    origin: i64,
    bound: i64,
    mut predicate: F,
    rng: &mut R,
) -> Result<&'a mut HashSet<i64>>
where
    R: Rng + ?Sized,
    F: FnMut(i64) -> bool,
{
    check_capacity(size, origin, bound)?;

    set.clear();
    while set.len() < size {
        let candidate = rng.random_range(origin..bound);
        if predicate(candidate) {
            set.insert(candidate);
        }
    }
    Ok(set)
}

/// `size` distinct integers from `[origin, bound)`.
pub fn random_subset_in<R>(size: usize, origin: i64, bound: i64, rng: &mut R) -> Result<HashSet<i64>>
where
    R: Rng + ?Sized,
{
    random_unique_subset(size, origin, bound, |_| true, rng)
}

/// Overwrite every slot of `out` with an independent draw from `range`.
pub fn fill_random<'a, R>(out: &'a mut [i64], range: Range<i64>, rng: &mut R) -> Result<&'a mut [i64]>
where
    R: Rng + ?Sized,
{
    if out.is_empty() {
        return Ok(out);
    }
    if range.is_empty() {
        return Err(ShuffleError::invalid(format!(
            "empty range [{}, {})",
            range.start, range.end
        )));
    }
    for slot in out.iter_mut() {
        *slot = rng.random_range(range.clone());
    }
    Ok(out)
}

/// Ascending integers in `[from, to)` accepted by `filter`.
pub fn range_filtered<F>(from: i64, to: i64, filter: F) -> Vec<i64>
where
    F: FnMut(&i64) -> bool,
{
    (from..to).filter(filter).collect()
}

/// `from, from + step, ..` while below `to`.
pub fn range_step(from: i64, to: i64, step: usize) -> Result<Vec<i64>> {
    if step == 0 {
        return Err(ShuffleError::invalid("step must be positive"));
    }
    Ok((from..to).step_by(step).collect())
}
