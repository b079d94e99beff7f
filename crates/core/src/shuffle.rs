//! Shuffle module - in-place Fisher-Yates
//!
//! Works on any `&mut [T]`; the only capability needed is indexed swap.
//! [`Shuffler`] owns a randomness source so a whole session of shuffles and
//! samples can be driven (and, when seeded, replayed) from one stream.
//!
//! A single `Shuffler` must not be shared across threads without a lock;
//! give each thread its own, or use [`shuffle_thread_local`].

use std::collections::HashSet;

use rand::rngs::ThreadRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_pcg::Pcg64;

use crate::config::{ShufflerConfig, Source};
use crate::types::Result;
use crate::{combination, permutation, sampling};

/// Shuffle `items` in place and hand the same slice back.
pub fn shuffle<'a, T, R>(items: &'a mut [T], rng: &mut R) -> &'a mut [T]
where
    R: Rng + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
    items
}

/// [`shuffle`] with the calling thread's generator.
pub fn shuffle_thread_local<T>(items: &mut [T]) -> &mut [T] {
    shuffle(items, &mut rand::rng())
}

/// Shuffler with an owned randomness source
#[derive(Debug, Clone)]
pub struct Shuffler<R> {
    rng: R,
}

impl<R: RngCore> Shuffler<R> {
    /// Create a shuffler that draws from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Shuffle `items` in place and hand the same slice back.
    pub fn shuffle<'a, T>(&mut self, items: &'a mut [T]) -> &'a mut [T] {
        shuffle(items, &mut self.rng)
    }

    /// Uniformly random ascending k-subset of Universe(n).
    pub fn random_combination(&mut self, n: usize, k: usize) -> Result<Vec<usize>> {
        combination::random_combination(n, k, &mut self.rng)
    }

    /// Uniformly random permutation of Universe(n).
    pub fn random_permutation(&mut self, n: usize) -> Result<Vec<usize>> {
        permutation::random_permutation(n, &mut self.rng)
    }

    /// `size` distinct integers from `[origin, bound)` accepted by `predicate`.
    pub fn random_unique_subset<F>(
        &mut self,
        size: usize,
        origin: i64,
        bound: i64,
        predicate: F,
    ) -> Result<HashSet<i64>>
    where
        F: FnMut(i64) -> bool,
    {
        sampling::random_unique_subset(size, origin, bound, predicate, &mut self.rng)
    }

    /// Borrow the source for draws this type does not wrap.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Give the source back.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl Shuffler<Pcg64> {
    /// Reproducible shuffler: the same seed yields the same sequence of results.
    pub fn seeded(seed: u64) -> Self {
        Self::new(Pcg64::seed_from_u64(seed))
    }
}

impl Shuffler<ThreadRng> {
    /// Shuffler over the calling thread's generator.
    pub fn thread_local() -> Self {
        Self::new(rand::rng())
    }
}

impl Default for Shuffler<ThreadRng> {
    fn default() -> Self {
        Self::thread_local()
    }
}

impl Shuffler<Source> {
    /// Shuffler over the source `config` selects.
    pub fn from_config(config: &ShufflerConfig) -> Self {
        Self::new(config.source())
    }

    /// Shuffler using the source selected by `SHUFFLER_SEED`.
    pub fn from_env() -> Self {
        Self::from_config(&ShufflerConfig::from_env())
    }
}
