//! Implements Hasher for strings, byte strings and [`Caseless`] keys using the XXH3 hash function.

use super::core::{impl_xxh3_state_fns, XXH3Hasher, XXH3State};
use crate::keys::Caseless;
use bucketed_core::Hasher;
use xxhash_rust::xxh3::{xxh3_64_with_seed, Xxh3};

/// Size of the stack buffer used for lower-casing [`Caseless`] keys.
const CHUNK_SIZE: usize = 64;

macro_rules! impl_xxh3_bytes {
    (ref $($t:ty),*) => {
        $(
            impl<'a> Hasher<&'a $t> for XXH3Hasher<&'a $t> {
                impl_xxh3_state_fns!();

                fn hash(&self, value: &&'a $t) -> u64 {
                    xxh3_64_with_seed(<&'a $t as AsRef<[u8]>>::as_ref(value), self.state.seed)
                }
            }
        )*
    };
    ($($t:ty),*) => {
        $(
            impl Hasher<$t> for XXH3Hasher<$t> {
                impl_xxh3_state_fns!();

                fn hash(&self, value: &$t) -> u64 {
                    xxh3_64_with_seed(<$t as AsRef<[u8]>>::as_ref(value), self.state.seed)
                }
            }
        )*
    };
}

impl_xxh3_bytes!(String, Vec<u8>);
impl_xxh3_bytes!(ref str, [u8]);

impl<S: AsRef<str>> Hasher<Caseless<S>> for XXH3Hasher<Caseless<S>> {
    impl_xxh3_state_fns!();

    fn hash(&self, value: &Caseless<S>) -> u64 {
        let mut hasher = Xxh3::with_seed(self.state.seed);
        let mut buf = [0_u8; CHUNK_SIZE];
        for chunk in value.as_str().as_bytes().chunks(CHUNK_SIZE) {
            let lowered = &mut buf[..chunk.len()];
            lowered.copy_from_slice(chunk);
            lowered.make_ascii_lowercase();
            hasher.update(lowered);
        }
        hasher.digest()
    }
}
