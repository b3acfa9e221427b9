//! Implements Hasher for primitive integers (and the types castable to them) using
//! [`pair_multiply_shift`] and [`pair_multiply_shift_u128`].

use super::core::MSPHasher;
use crate::hashing::common::fold_multiply;
use crate::hashing::multiply_shift::{pair_multiply_shift, pair_multiply_shift_u128};
use bucketed_core::Hasher;
use rand::{Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntState {
    seed: [u64; 5],
    fold: u64,
}

impl IntState {
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let seed: [u64; 5] = rng.random();
        let fold = rng.next_u64() | 1;

        Self { seed, fold }
    }
}

impl Default for IntState {
    fn default() -> Self {
        Self::from_seed(0)
    }
}

#[inline]
fn hash_u64(state: &IntState, value: u64) -> u64 {
    let seed = [state.seed[0], state.seed[1], state.seed[2]];
    fold_multiply(pair_multiply_shift(value, &seed), state.fold)
}

#[inline]
fn hash_u128(state: &IntState, value: u128) -> u64 {
    fold_multiply(pair_multiply_shift_u128(value, &state.seed), state.fold)
}

macro_rules! impl_msp_int {
    ($hash_fn:ident as $wide:ty => $($int_type:ty),*) => {
        $(
            impl Hasher<$int_type> for MSPHasher<$int_type> {
                type State = IntState;

                fn make_state(seed: u64) -> Self::State {
                    IntState::from_seed(seed)
                }
                fn from_seed(seed: u64) -> Self {
                    Self { state: IntState::from_seed(seed) }
                }
                fn from_state(state: Self::State) -> Self {
                    Self { state }
                }
                fn state(&self) -> &Self::State {
                    &self.state
                }
                fn hash(&self, value: &$int_type) -> u64 {
                    $hash_fn(&self.state, *value as $wide)
                }
            }
        )*
    };
}

impl_msp_int!(hash_u64 as u64 => u8, i8, u16, i16, u32, i32, u64, i64, usize, isize, bool, char);
impl_msp_int!(hash_u128 as u128 => u128, i128);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_same_seed_same_hash() {
        let h1 = MSPHasher::<u64>::from_seed(42);
        let h2 = MSPHasher::<u64>::from_state(*h1.state());
        for value in [0_u64, 1, 42, u64::MAX] {
            assert_eq!(h1.hash(&value), h2.hash(&value));
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let h1 = MSPHasher::<u32>::from_seed(1);
        let h2 = MSPHasher::<u32>::from_seed(2);
        assert!((0..64_u32).any(|v| h1.hash(&v) != h2.hash(&v)));
    }

    #[test]
    fn test_default_matches_seed_zero() {
        let default = MSPHasher::<i64>::default();
        let seeded = MSPHasher::<i64>::from_seed(0);
        assert_eq!(default.hash(&-7), seeded.hash(&-7));
    }

    #[test]
    fn test_all_u8_values_hash_distinctly() {
        let hasher = MSPHasher::<u8>::from_seed(3);
        let hashes: HashSet<u64> = (0..=u8::MAX).map(|v| hasher.hash(&v)).collect();
        assert_eq!(hashes.len(), 256);
    }

    #[test]
    fn test_sequential_keys_spread_over_low_bits() {
        let hasher = MSPHasher::<u64>::from_seed(4);
        let buckets: HashSet<u64> = (0..1024_u64).map(|v| hasher.hash(&v) % 8).collect();
        assert_eq!(buckets.len(), 8);
    }

    #[test]
    fn test_u128_high_bits_matter() {
        let hasher = MSPHasher::<u128>::from_seed(5);
        assert_ne!(hasher.hash(&1), hasher.hash(&(1 | (1 << 100))));
    }

    #[test]
    fn test_signed_and_char_keys() {
        let hasher = MSPHasher::<i8>::from_seed(6);
        assert_ne!(hasher.hash(&-1), hasher.hash(&1));

        let hasher = MSPHasher::<char>::from_seed(6);
        assert_eq!(hasher.hash(&'x'), hasher.hash(&'x'));
        assert_ne!(hasher.hash(&'x'), hasher.hash(&'X'));
    }
}
