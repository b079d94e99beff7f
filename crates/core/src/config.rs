//! Randomness source configuration
//!
//! The default source is the thread-local generator. Setting
//! `SHUFFLER_SEED` switches every [`Source`] built from the environment to a
//! seeded PCG stream, which makes shuffles and samples reproducible.

use log::{debug, warn};
use rand::rngs::ThreadRng;
use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64;

use crate::types::SEED_ENV;

/// Source configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShufflerConfig {
    /// Seed for a reproducible PCG stream; `None` uses the thread-local generator.
    pub seed: Option<u64>,
}

impl ShufflerConfig {
    /// Create from the `SHUFFLER_SEED` environment variable
    pub fn from_env() -> Self {
        let raw = std::env::var(SEED_ENV).ok();
        let seed = raw.as_deref().and_then(|s| {
            let parsed = Self::parse_seed(s);
            if parsed.is_none() && !s.trim().is_empty() {
                warn!("{}={:?} is not a u64, using the thread-local generator", SEED_ENV, s);
            }
            parsed
        });
        Self { seed }
    }

    /// Parse a decimal or `0x`-prefixed hex seed.
    pub fn parse_seed(raw: &str) -> Option<u64> {
        let s = raw.trim();
        match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(hex) => u64::from_str_radix(hex, 16).ok(),
            None => s.parse().ok(),
        }
    }

    /// Use a seeded PCG stream.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the configured source.
    pub fn source(&self) -> Source {
        match self.seed {
            Some(seed) => {
                debug!("using seeded Pcg64 source (seed {})", seed);
                Source::Seeded(Pcg64::seed_from_u64(seed))
            }
            None => {
                debug!("using thread-local source");
                Source::ThreadLocal(rand::rng())
            }
        }
    }
}

/// Either a seeded PCG stream or the thread-local generator.
///
/// `ThreadRng` is `!Send`, so `Source` (and `Shuffler<Source>`) is `!Send`
/// even when seeded. Build per-thread shufflers with `Shuffler::seeded`.
#[derive(Debug, Clone)]
pub enum Source {
    Seeded(Pcg64),
    ThreadLocal(ThreadRng),
}

impl Source {
    /// Whether this source replays a fixed seed.
    pub fn is_seeded(&self) -> bool {
        matches!(self, Source::Seeded(_))
    }
}

impl Default for Source {
    fn default() -> Self {
        Source::ThreadLocal(rand::rng())
    }
}

impl RngCore for Source {
    fn next_u32(&mut self) -> u32 {
        match self {
            Source::Seeded(rng) => rng.next_u32(),
            Source::ThreadLocal(rng) => rng.next_u32(),
        }
    }

    fn next_u64(&mut self) -> u64 {
        match self {
            Source::Seeded(rng) => rng.next_u64(),
            Source::ThreadLocal(rng) => rng.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        match self {
            Source::Seeded(rng) => rng.fill_bytes(dst),
            Source::ThreadLocal(rng) => rng.fill_bytes(dst),
        }
    }
}
