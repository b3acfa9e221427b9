//! Implements Hasher for strings and byte strings of unbounded length.
//!
//! # Notes
//!
//! Internally it uses the [`polynomial`] hash function followed by a folding multiplication.
//! [`Caseless`] keys are lower-cased limb by limb without allocating.

use super::core::MSPHasher;
use crate::hashing::common::fold_multiply;
use crate::hashing::polynomial::{limbs, limbs_ascii_lowercase, polynomial, PolynomialSeed};
use crate::keys::Caseless;
use bucketed_core::Hasher;
use rand::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringState {
    polynomial_seed: PolynomialSeed,
    fold: u64,
}

impl StringState {
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let polynomial_seed = PolynomialSeed::from_rng(&mut rng);
        let fold = rng.next_u64() | 1;

        Self {
            polynomial_seed,
            fold,
        }
    }
}

impl Default for StringState {
    fn default() -> Self {
        Self::from_seed(0)
    }
}

#[inline]
fn hash(state: &StringState, value: &[u8]) -> u64 {
    fold_multiply(
        polynomial(limbs(value), value.len(), &state.polynomial_seed),
        state.fold,
    )
}

#[inline]
fn hash_ascii_lowercase(state: &StringState, value: &[u8]) -> u64 {
    fold_multiply(
        polynomial(
            limbs_ascii_lowercase(value),
            value.len(),
            &state.polynomial_seed,
        ),
        state.fold,
    )
}

macro_rules! impl_msp_bytes_body {
    ($t:ty) => {
        type State = StringState;

        fn make_state(seed: u64) -> Self::State {
            StringState::from_seed(seed)
        }
        fn from_seed(seed: u64) -> Self {
            Self {
                state: StringState::from_seed(seed),
            }
        }
        fn from_state(state: Self::State) -> Self {
            Self { state }
        }
        fn state(&self) -> &Self::State {
            &self.state
        }
        fn hash(&self, value: &$t) -> u64 {
            hash(&self.state, <$t as AsRef<[u8]>>::as_ref(value))
        }
    };
}

macro_rules! impl_msp_bytes {
    (ref $($t:ty),*) => {
        $(
            impl<'a> Hasher<&'a $t> for MSPHasher<&'a $t> {
                impl_msp_bytes_body!(&'a $t);
            }
        )*
    };
    ($($t:ty),*) => {
        $(
            impl Hasher<$t> for MSPHasher<$t> {
                impl_msp_bytes_body!($t);
            }
        )*
    };
}

impl_msp_bytes!(String, Vec<u8>);
impl_msp_bytes!(ref str, [u8]);

impl<S: AsRef<str>> Hasher<Caseless<S>> for MSPHasher<Caseless<S>> {
    type State = StringState;

    fn make_state(seed: u64) -> Self::State {
        StringState::from_seed(seed)
    }
    fn from_seed(seed: u64) -> Self {
        Self {
            state: StringState::from_seed(seed),
        }
    }
    fn from_state(state: Self::State) -> Self {
        Self { state }
    }
    fn state(&self) -> &Self::State {
        &self.state
    }
    fn hash(&self, value: &Caseless<S>) -> u64 {
        hash_ascii_lowercase(&self.state, value.as_str().as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bucketed_testing::generate::Generate;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_string_representations_agree() {
        let state = StringState::from_seed(9);
        let value = "The quick brown fox";
        let expected = MSPHasher::<String>::from_state(state).hash(&value.to_string());

        assert_eq!(MSPHasher::<&str>::from_state(state).hash(&value), expected);
        assert_eq!(
            MSPHasher::<&[u8]>::from_state(state).hash(&value.as_bytes()),
            expected
        );
        assert_eq!(
            MSPHasher::<Vec<u8>>::from_state(state).hash(&value.as_bytes().to_vec()),
            expected
        );
    }

    #[test]
    fn test_empty_and_long_strings() {
        let hasher = MSPHasher::<String>::from_seed(10);
        let long = "x".repeat(10_000);
        let longer = "x".repeat(10_001);
        assert_ne!(hasher.hash(&long), hasher.hash(&longer));
        assert_ne!(hasher.hash(&String::new()), hasher.hash(&"\0".to_string()));
    }

    #[test]
    fn test_caseless_hashes_canonical_form() {
        let state = StringState::from_seed(11);
        let caseless = MSPHasher::<Caseless<&str>>::from_state(state);
        let plain = MSPHasher::<&str>::from_state(state);

        assert_eq!(
            caseless.hash(&Caseless("Content-Type")),
            caseless.hash(&Caseless("CONTENT-TYPE"))
        );
        assert_eq!(
            caseless.hash(&Caseless("Content-Type")),
            plain.hash(&"content-type")
        );
        assert_ne!(
            caseless.hash(&Caseless("Content-Type")),
            caseless.hash(&Caseless("Content-Length"))
        );
    }

    #[test]
    fn test_caseless_equal_keys_hash_equally_for_random_strings() {
        let mut rng = ChaCha20Rng::seed_from_u64(12);
        let hasher = MSPHasher::<Caseless<String>>::from_seed(12);
        for _ in 0..200 {
            let value = String::generate(&mut rng, &Default::default());
            let upper = Caseless(value.to_ascii_uppercase());
            let lower = Caseless(value.to_ascii_lowercase());
            assert_eq!(upper, lower);
            assert_eq!(hasher.hash(&upper), hasher.hash(&lower), "{value:?}");
        }
    }
}
