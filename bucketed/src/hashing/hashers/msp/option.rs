//! Implements [`Hasher`] for `Option<T>` for every `T` supported by [`MSPHasher`].
//!
//! The implementation delegates to the existing [`MSPHasher<T>`] and mixes the result with a
//! seeded tag so that `None` doesn't land where the hash of some `Some` value does.

use super::core::MSPHasher;
use crate::hashing::common::fold_multiply;
use crate::hashing::multiply_shift::pair_multiply_shift;
use bucketed_core::Hasher;
use rand::{Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use std::fmt::{Debug, Formatter};

/// State for hashing `Option<T>` values.
pub struct OptionState<T>
where
    T: Eq,
    MSPHasher<T>: Hasher<T>,
{
    tag: u64,
    combiner_seed: [u64; 3],
    fold: u64,
    inner: MSPHasher<T>,
}

impl<T> OptionState<T>
where
    T: Eq,
    MSPHasher<T>: Hasher<T>,
{
    fn from_seed(seed: u64) -> Self {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed.wrapping_add(1000));
        let tag = rng.next_u64() | 1;
        let combiner_seed: [u64; 3] = rng.random();
        let fold = rng.next_u64() | 1;
        let inner = MSPHasher::<T>::from_seed(seed.wrapping_add(2000));

        Self {
            tag,
            combiner_seed,
            fold,
            inner,
        }
    }
}

impl<T> Default for OptionState<T>
where
    T: Eq,
    MSPHasher<T>: Hasher<T>,
{
    fn default() -> Self {
        Self::from_seed(0)
    }
}

impl<T> Clone for OptionState<T>
where
    T: Eq,
    MSPHasher<T>: Hasher<T>,
{
    fn clone(&self) -> Self {
        Self {
            tag: self.tag,
            combiner_seed: self.combiner_seed,
            fold: self.fold,
            inner: self.inner.clone(),
        }
    }
}

impl<T> Debug for OptionState<T>
where
    T: Eq,
    MSPHasher<T>: Hasher<T>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OptionState")
            .field("tag", &self.tag)
            .field("combiner_seed", &self.combiner_seed)
            .field("fold", &self.fold)
            .field("inner", &self.inner)
            .finish()
    }
}

impl<T> Hasher<Option<T>> for MSPHasher<Option<T>>
where
    T: Eq,
    MSPHasher<T>: Hasher<T>,
{
    type State = OptionState<T>;

    fn make_state(seed: u64) -> Self::State {
        OptionState::from_seed(seed)
    }
    fn from_seed(seed: u64) -> Self {
        Self {
            state: OptionState::from_seed(seed),
        }
    }
    fn from_state(state: Self::State) -> Self {
        Self { state }
    }
    fn state(&self) -> &Self::State {
        &self.state
    }
    fn hash(&self, value: &Option<T>) -> u64 {
        let combined = match value {
            None => 0,
            Some(v) => self.state.inner.hash(v) ^ self.state.tag,
        };
        fold_multiply(
            pair_multiply_shift(combined, &self.state.combiner_seed),
            self.state.fold,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_differs_from_some() {
        let hasher = MSPHasher::<Option<u32>>::from_seed(1);
        for v in 0..1000_u32 {
            assert_ne!(hasher.hash(&None), hasher.hash(&Some(v)), "v = {v}");
        }
    }

    #[test]
    fn test_option_state_round_trip() {
        let hasher = MSPHasher::<Option<String>>::from_seed(2);
        let copy = MSPHasher::<Option<String>>::from_state(hasher.state().clone());
        let value = Some("value".to_string());
        assert_eq!(hasher.hash(&value), copy.hash(&value));
        assert_eq!(hasher.hash(&None), copy.hash(&None));
    }

    #[test]
    fn test_nested_options() {
        let hasher = MSPHasher::<Option<Option<u8>>>::from_seed(3);
        assert_ne!(hasher.hash(&None), hasher.hash(&Some(None)));
        assert_ne!(hasher.hash(&Some(None)), hasher.hash(&Some(Some(0))));
    }
}
