//! Shared types - ranks, errors and configuration constants
//!
//! Everything here is plain data used by the codecs, the sampling engine and
//! callers of the facade crate.
//!
//! # Ranks
//!
//! A [`Rank`] is an arbitrary-precision non-negative integer. Counts grow
//! factorially, so fixed-width integers overflow quickly:
//!
//! | Objects | Count | Fits in u64? |
//! |---------|-------|--------------|
//! | permutations of 20 | 20! ≈ 2.4e18 | yes |
//! | permutations of 21 | 21! ≈ 5.1e19 | no |
//! | 26-subsets of 52 | C(52,26) ≈ 4.9e14 | yes |
//! | 50-subsets of 100 | C(100,50) ≈ 1.0e29 | no |
//!
//! # Errors
//!
//! Every fallible operation returns [`Result`]. Failures are detected before
//! any work is done; there are no partial results.
//!
//! # Examples
//!
//! ```
//! use shuffler_types::{Rank, ShuffleError};
//!
//! let err = ShuffleError::OutOfRange {
//!     rank: Rank::from(20u32),
//!     count: Rank::from(20u32),
//! };
//! assert_eq!(err.to_string(), "rank 20 is out of range for 20 objects");
//! ```

use thiserror::Error;

/// Arbitrary-precision rank of a combinatorial object.
pub type Rank = num_bigint::BigUint;

/// Environment variable holding the seed of the default randomness source.
pub const SEED_ENV: &str = "SHUFFLER_SEED";

/// Errors raised by the arithmetic, codec and sampling operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShuffleError {
    /// An argument violates the operation's preconditions.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A rank is not below the number of objects it indexes.
    #[error("rank {rank} is out of range for {count} objects")]
    OutOfRange { rank: Rank, count: Rank },
}

impl ShuffleError {
    /// Build a [`ShuffleError::InvalidArgument`].
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Whether this is an invalid-argument error.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Whether this is an out-of-range error.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}

pub type Result<T> = std::result::Result<T, ShuffleError>;
