//! Shuffler (workspace facade crate).
//!
//! Exposes `shuffler::{core, types}` while the implementation lives in
//! dedicated crates under `crates/`.

pub use shuffler_core as core;
pub use shuffler_types as types;
