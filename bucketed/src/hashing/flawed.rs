//! Implements intentionally flawed hashers - mainly to serve as negative examples for the
//! test suite.

use crate::hashing::hashers::MSPHasher;
use crate::keys::Caseless;
use bucketed_core::Hasher;
use std::cell::Cell;
use std::marker::PhantomData;

/// Sends every key to the same hash value, so all of them end up chained in one bucket.
#[derive(Debug)]
pub struct ConstantHasher<T> {
    key_type: PhantomData<fn(&T)>,
}

impl<T> Default for ConstantHasher<T> {
    fn default() -> Self {
        Self {
            key_type: PhantomData,
        }
    }
}

impl<T> Clone for ConstantHasher<T> {
    fn clone(&self) -> Self {
        Self::default()
    }
}

impl<T: Eq> Hasher<T> for ConstantHasher<T> {
    type State = ();

    fn make_state(_seed: u64) -> Self::State {}
    fn from_seed(_seed: u64) -> Self {
        Self::default()
    }
    fn from_state(_state: Self::State) -> Self {
        Self::default()
    }
    fn state(&self) -> &Self::State {
        &()
    }
    fn hash(&self, _value: &T) -> u64 {
        0
    }
}

/// Returns a different hash on every call, so no entry can be found where it was placed.
#[derive(Debug)]
pub struct UnstableHasher<T> {
    calls: Cell<u64>,
    key_type: PhantomData<fn(&T)>,
}

impl<T> Default for UnstableHasher<T> {
    fn default() -> Self {
        Self {
            calls: Cell::new(0),
            key_type: PhantomData,
        }
    }
}

impl<T> Clone for UnstableHasher<T> {
    fn clone(&self) -> Self {
        Self {
            calls: self.calls.clone(),
            key_type: PhantomData,
        }
    }
}

impl<T: Eq> Hasher<T> for UnstableHasher<T> {
    type State = ();

    fn make_state(_seed: u64) -> Self::State {}
    fn from_seed(_seed: u64) -> Self {
        Self::default()
    }
    fn from_state(_state: Self::State) -> Self {
        Self::default()
    }
    fn state(&self) -> &Self::State {
        &()
    }
    fn hash(&self, _value: &T) -> u64 {
        let calls = self.calls.get();
        self.calls.set(calls.wrapping_add(1));
        calls
    }
}

/// Hashes [`Caseless`] keys by their raw bytes, disagreeing with their case-insensitive equality.
#[derive(Debug, Clone, Default)]
pub struct RawCaseHasher {
    inner: MSPHasher<String>,
}

impl Hasher<Caseless<String>> for RawCaseHasher {
    type State = <MSPHasher<String> as Hasher<String>>::State;

    fn make_state(seed: u64) -> Self::State {
        MSPHasher::<String>::make_state(seed)
    }
    fn from_seed(seed: u64) -> Self {
        Self {
            inner: MSPHasher::from_seed(seed),
        }
    }
    fn from_state(state: Self::State) -> Self {
        Self {
            inner: MSPHasher::from_state(state),
        }
    }
    fn state(&self) -> &Self::State {
        self.inner.state()
    }
    fn hash(&self, value: &Caseless<String>) -> u64 {
        self.inner.hash(&value.0)
    }
}
