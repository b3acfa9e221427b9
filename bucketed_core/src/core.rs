//! Core trait declarations for the whole project.
use std::fmt::Debug;

/// Hasher for the specific data-type.
///
/// Differs from [`core::hash::Hasher`] in the way that it is specific for a certain type and is not
/// supposed to be universal. Implementations are free to tailor both their state and the hash
/// function to the target type.
///
/// # Contract
///
/// - Hashing is a pure function of the hasher state and the value.
/// - Values that are equal according to [`Eq`] must produce equal hashes. For types with a
///   relaxed equality (for example case-insensitive strings) the hasher must hash the canonical
///   form of the value. Violating this silently breaks lookups, it is not reported as an error.
pub trait Hasher<T>
where
    Self: Default,
    T: Eq,
{
    /// State of the hasher instance.
    ///
    /// Usually contains seed-values derived from the user-provided seed.
    type State: Clone + Default + Debug;

    /// Derive the hasher state from the given `seed`.
    fn make_state(seed: u64) -> Self::State;

    /// Create a new hasher with a given `seed`.
    fn from_seed(seed: u64) -> Self;

    /// Create a new hasher from the given `state`.
    fn from_state(state: Self::State) -> Self;

    /// Get the state of the hasher.
    fn state(&self) -> &Self::State;

    /// Hash the given `value`.
    ///
    /// The full 64-bit range is used, reduction to a bucket index is up to the caller.
    fn hash(&self, value: &T) -> u64;
}

/// A mutable hash map.
pub trait HashMap<K: Eq, V, H: Hasher<K>> {
    /// Get the value associated with the given `key`.
    fn get(&self, key: &K) -> Option<&V>;

    /// Check whether the map holds an entry for the given `key`.
    fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Associate `value` with `key`, returning the previously associated value if any.
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Remove the entry for `key`, returning its value if it was present.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Get the number of elements in the map.
    fn len(&self) -> usize;

    /// Check if the map is empty.
    fn is_empty(&self) -> bool;

    /// Get the number of buckets in the underlying table.
    fn num_buckets(&self) -> usize;

    /// Get the load factor of the map.
    fn load_factor(&self) -> f64;

    /// Get the number of collisions in the map.
    fn num_collisions(&self) -> usize;
}
