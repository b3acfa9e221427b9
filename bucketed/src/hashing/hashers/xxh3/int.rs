//! Implements Hasher for primitive integers using the XXH3 hash function.

use super::core::{impl_xxh3_state_fns, XXH3Hasher, XXH3State};
use bucketed_core::Hasher;
use xxhash_rust::xxh3::xxh3_64_with_seed;

macro_rules! impl_xxh3_int {
    ($($int_type:ty),*) => {
        $(
            impl Hasher<$int_type> for XXH3Hasher<$int_type> {
                impl_xxh3_state_fns!();

                fn hash(&self, value: &$int_type) -> u64 {
                    xxh3_64_with_seed(value.to_le_bytes().as_slice(), self.state.seed)
                }
            }
        )*
    };
}

impl_xxh3_int!(u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, usize, isize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_xxh3_of_le_bytes() {
        let hasher = XXH3Hasher::<u32>::from_state(XXH3State::from_seed(7));
        assert_eq!(
            hasher.hash(&0xDEAD_BEEF),
            xxh3_64_with_seed(&0xDEAD_BEEF_u32.to_le_bytes(), 7)
        );
    }

    #[test]
    fn test_seed_changes_hash() {
        let h1 = XXH3Hasher::<u64>::from_seed(1);
        let h2 = XXH3Hasher::<u64>::from_seed(2);
        assert_ne!(h1.hash(&42), h2.hash(&42));
    }
}
