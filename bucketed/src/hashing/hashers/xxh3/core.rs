use bucketed_core::Hasher;
use std::fmt::{Debug, Formatter};

/// Hasher based on the XXH3 algorithm.
pub struct XXH3Hasher<T: Eq>
where
    XXH3Hasher<T>: Hasher<T>,
{
    pub(super) state: <XXH3Hasher<T> as Hasher<T>>::State,
}

impl<T: Eq> Clone for XXH3Hasher<T>
where
    XXH3Hasher<T>: Hasher<T>,
{
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

impl<T: Eq> Default for XXH3Hasher<T>
where
    XXH3Hasher<T>: Hasher<T>,
{
    fn default() -> Self {
        <Self as Hasher<T>>::from_state(<Self as Hasher<T>>::State::default())
    }
}

impl<T> Debug for XXH3Hasher<T>
where
    T: Eq,
    XXH3Hasher<T>: Hasher<T>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XXH3Hasher")
            .field("state", &self.state)
            .finish()
    }
}

/// State shared by all the [`XXH3Hasher`] implementations.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct XXH3State {
    pub(super) seed: u64,
}

impl XXH3State {
    pub fn from_seed(seed: u64) -> Self {
        Self { seed }
    }
}

macro_rules! impl_xxh3_state_fns {
    () => {
        type State = XXH3State;

        fn make_state(seed: u64) -> Self::State {
            XXH3State::from_seed(seed)
        }
        fn from_seed(seed: u64) -> Self {
            Self {
                state: XXH3State::from_seed(seed),
            }
        }
        fn from_state(state: Self::State) -> Self {
            Self { state }
        }
        fn state(&self) -> &Self::State {
            &self.state
        }
    };
}
pub(super) use impl_xxh3_state_fns;
