//! Hash map with separate chaining and type-specific seeded hashers.
//!
//! - [`chained`] - the map itself and its building blocks.
//! - [`hashing`] - hash functions and hashers implementing [`Hasher`].
//! - [`keys`] - key wrappers with a relaxed equality, such as [`keys::Caseless`].
//! - [`config`] - construction parameters of the map.
pub mod chained;
pub mod config;
pub mod hashing;
pub mod keys;
pub mod utils;

pub use bucketed_core::error::BucketedError;
pub use bucketed_core::{HashMap, Hasher};
pub use chained::ChainedMap;
pub use config::MapConfig;
