//! Bridges key types implementing [`std::hash::Hash`] into [`Hasher`].

use bucketed_core::Hasher;
use std::fmt::{Debug, Formatter};
use std::hash::{DefaultHasher, Hash, Hasher as _};
use std::marker::PhantomData;

/// Hasher for any `T: Hash + Eq`, backed by the standard library's [`DefaultHasher`].
///
/// The seed is fed into the hasher ahead of the value. [`DefaultHasher::new`] always starts from
/// the same keys, so hashes are reproducible for a given seed within one build of the standard
/// library.
pub struct StdHasher<T> {
    seed: u64,
    key_type: PhantomData<fn(&T)>,
}

impl<T> Clone for StdHasher<T> {
    fn clone(&self) -> Self {
        Self {
            seed: self.seed,
            key_type: PhantomData,
        }
    }
}

impl<T> Default for StdHasher<T> {
    fn default() -> Self {
        Self {
            seed: 0,
            key_type: PhantomData,
        }
    }
}

impl<T> Debug for StdHasher<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StdHasher")
            .field("seed", &self.seed)
            .finish()
    }
}

impl<T: Hash + Eq> Hasher<T> for StdHasher<T> {
    type State = u64;

    fn make_state(seed: u64) -> Self::State {
        seed
    }
    fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            key_type: PhantomData,
        }
    }
    fn from_state(state: Self::State) -> Self {
        Self::from_seed(state)
    }
    fn state(&self) -> &Self::State {
        &self.seed
    }
    fn hash(&self, value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        hasher.write_u64(self.seed);
        value.hash(&mut hasher);
        hasher.finish()
    }
}
