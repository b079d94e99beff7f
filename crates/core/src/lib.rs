//! Core rank-indexing and shuffling engine - pure, exact, and testable
//!
//! Converts between integer ranks and the combinations or permutations they
//! denote in lexicographic order, samples them uniformly, and shuffles
//! slices in place.
//!
//! - **Exact**: counts and ranks are arbitrary-precision, nothing overflows
//! - **Pure**: codecs and arithmetic share no state and are safe to call from any thread
//! - **Injectable randomness**: every random operation takes `&mut R: Rng`; the
//!   thread-local generator is only the default at the outermost layer
//!
//! # Module Structure
//!
//! - [`arith`]: factorials and binomial coefficients
//! - [`random`]: uniform big integers below a bound
//! - [`combination`]: combinatorial number system codec
//! - [`permutation`]: factorial number system (Lehmer code) codec
//! - [`sampling`]: random unique subsets, random fills, filtered ranges
//! - [`shuffle`]: Fisher-Yates and the source-owning [`Shuffler`]
//! - [`config`]: source selection from `SHUFFLER_SEED`
//!
//! # Example
//!
//! ```
//! use num_bigint::BigUint;
//! use shuffler_core::{choose, combination_at, permutation_at, Shuffler};
//!
//! assert_eq!(choose(7, 5).unwrap(), BigUint::from(21u32));
//! assert_eq!(combination_at(6, 3, &BigUint::from(12u32)).unwrap(), vec![1, 2, 5]);
//! assert_eq!(permutation_at(3, &BigUint::from(5u32)).unwrap(), vec![2, 1, 0]);
//!
//! let mut shuffler = Shuffler::seeded(12345);
//! let mut deck: Vec<u8> = (0..52).collect();
//! shuffler.shuffle(&mut deck);
//! assert_eq!(deck.len(), 52);
//! ```

pub mod arith;
pub mod combination;
pub mod config;
pub mod permutation;
pub mod random;
pub mod sampling;
pub mod shuffle;

pub use shuffler_types as types;

// Re-export commonly used items for convenience
pub use arith::{choose, count_combinations, count_permutations, factorial};
pub use combination::{combination_at, random_combination, rank_of_combination};
pub use config::{ShufflerConfig, Source};
pub use permutation::{permutation_at, random_permutation, rank_of_permutation};
pub use random::{random_bits, uniform_below, uniform_between};
pub use sampling::{
    fill_random, random_subset_in, random_unique_subset, random_unique_subset_into,
    range_filtered, range_step,
};
pub use shuffle::{shuffle, shuffle_thread_local, Shuffler};
pub use types::{Rank, Result, ShuffleError};
