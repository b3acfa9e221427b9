//! Implements constructors for [`ChainedMap`].
use super::table::Table;
use super::ChainedMap;
use crate::config::MapConfig;
use bucketed_core::error::BucketedError;
use bucketed_core::Hasher;

impl<K: Eq, V, H: Hasher<K>> ChainedMap<K, V, H> {
    /// Creates an empty map with the default [`MapConfig`].
    pub fn new() -> Self {
        let config = MapConfig::default();
        Self {
            hasher: H::from_seed(config.seed),
            table: Table::with_num_buckets(config.initial_num_buckets),
            len: 0,
            max_load_factor: config.max_load_factor,
        }
    }

    /// Creates an empty map, deriving the hasher from `config.seed`.
    ///
    /// # Errors
    ///
    /// - [`BucketedError::InvalidNumBuckets`] and [`BucketedError::InvalidLoadFactor`] for
    ///   invalid configurations.
    /// - [`BucketedError::CapacityOverflow`] and [`BucketedError::AllocationFailed`] if the
    ///   initial table can't be allocated.
    pub fn with_config(config: MapConfig) -> Result<Self, BucketedError> {
        Self::with_hasher(config, H::from_seed(config.seed))
    }

    /// Creates an empty map that uses the given `hasher`. `config.seed` is ignored.
    pub fn with_hasher(config: MapConfig, hasher: H) -> Result<Self, BucketedError> {
        config.validate()?;
        Ok(Self {
            hasher,
            table: Table::try_with_num_buckets(config.initial_num_buckets)?,
            len: 0,
            max_load_factor: config.max_load_factor,
        })
    }
}

impl<K: Eq, V, H: Hasher<K>> Default for ChainedMap<K, V, H> {
    fn default() -> Self {
        Self::new()
    }
}
