//! [`bucketed_core::Hasher`] implementations.
pub mod msp;
pub use msp::*;
mod std_hash;
pub use std_hash::*;
#[cfg(feature = "xxh3")]
pub mod xxh3;
#[cfg(feature = "xxh3")]
pub use xxh3::*;
