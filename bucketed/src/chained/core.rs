//! Declares core types for [`ChainedMap`].
use super::table::Table;
use crate::hashing::hashers::MSPHasher;
use bucketed_core::Hasher;
use std::fmt::{Debug, Formatter};

/// Hash map resolving collisions by separate chaining.
///
/// Keys are hashed by `H`, reduced modulo the number of buckets, and looked up by a linear scan
/// of the selected bucket. The table doubles (or grows further if needed) before an insertion of
/// a new key would push the load factor above the configured maximum. Removals never shrink it.
///
/// # Guarantees
///
/// - `len() / num_buckets() <= max_load_factor()` after every insertion.
/// - Every entry is stored in the bucket its hash selects.
/// - Values are only ever exposed through shared references.
///
/// # Examples
///
/// ```rust
/// use bucketed::chained::ChainedMap;
///
/// let mut book_reviews: ChainedMap<&str, &str> = ChainedMap::new();
/// book_reviews.insert("Adventures of Huckleberry Finn", "My favorite book.");
/// book_reviews.insert("Grimms' Fairy Tales", "Masterpiece.");
/// book_reviews.insert("Pride and Prejudice", "Very enjoyable.");
/// book_reviews.insert("The Adventures of Sherlock Holmes", "Eye lyked it alot.");
///
/// assert!(!book_reviews.contains_key(&"Les Misérables"));
/// assert_eq!(book_reviews.len(), 4);
///
/// assert_eq!(book_reviews.remove(&"Grimms' Fairy Tales"), Some("Masterpiece."));
/// assert_eq!(book_reviews.remove(&"Grimms' Fairy Tales"), None);
/// ```
pub struct ChainedMap<K: Eq, V, H: Hasher<K> = MSPHasher<K>> {
    pub(crate) hasher: H,
    pub(crate) table: Table<K, V>,
    pub(crate) len: usize,
    pub(crate) max_load_factor: f64,
}

impl<K, V, H> Debug for ChainedMap<K, V, H>
where
    K: Eq + Debug,
    V: Debug,
    H: Hasher<K>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, H> Clone for ChainedMap<K, V, H>
where
    K: Eq + Clone,
    V: Clone,
    H: Hasher<K> + Clone,
{
    fn clone(&self) -> Self {
        Self {
            hasher: self.hasher.clone(),
            table: self.table.clone(),
            len: self.len,
            max_load_factor: self.max_load_factor,
        }
    }
}
