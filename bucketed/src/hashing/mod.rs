//! Hash function families and the [`bucketed_core::Hasher`] implementations built on them.
pub mod common;
#[cfg(test)]
pub(crate) mod flawed;
pub mod hashers;
pub mod multiply_shift;
pub mod polynomial;
