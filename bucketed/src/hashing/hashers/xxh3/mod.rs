//! Hashers delegating to the XXH3 algorithm, enabled by the `xxh3` feature.
mod core;
pub use self::core::*;
mod int;
mod string;
