use bucketed_core::Hasher;
use std::any::type_name;
use std::fmt::{Debug, Formatter};

/// Hasher based on multiply-shift and polynomial hashing.
///
/// Integers go through pair-multiply-shift and byte strings through a polynomial over 32-bit
/// limbs. Both results are finished by [`fold_multiply`](crate::hashing::common::fold_multiply)
/// so that the low bits a modulo reduction keeps are well mixed.
///
/// The default hasher is the one derived from seed 0.
pub struct MSPHasher<T: Eq>
where
    MSPHasher<T>: Hasher<T>,
{
    pub(super) state: <MSPHasher<T> as Hasher<T>>::State,
}

impl<T: Eq> Clone for MSPHasher<T>
where
    MSPHasher<T>: Hasher<T>,
{
    fn clone(&self) -> Self {
        <Self as Hasher<T>>::from_state(self.state.clone())
    }
}

impl<T: Eq> Default for MSPHasher<T>
where
    MSPHasher<T>: Hasher<T>,
{
    fn default() -> Self {
        <Self as Hasher<T>>::from_state(<Self as Hasher<T>>::State::default())
    }
}

impl<T> Debug for MSPHasher<T>
where
    T: Eq,
    MSPHasher<T>: Hasher<T>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MSPHasher")
            .field("key", &type_name::<T>())
            .field("state", &self.state)
            .finish()
    }
}
