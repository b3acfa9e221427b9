//! Construction parameters for [`ChainedMap`](crate::chained::ChainedMap).

use bucketed_core::error::BucketedError;
use log::warn;
use rand::RngCore;

/// Number of buckets a map starts with unless configured otherwise.
pub const DEFAULT_NUM_BUCKETS: usize = 8;

/// Load factor above which a map grows unless configured otherwise.
pub const DEFAULT_MAX_LOAD_FACTOR: f64 = 0.75;

/// Configuration of a [`ChainedMap`](crate::chained::ChainedMap).
///
/// # Examples
///
/// ```rust
/// use bucketed::config::MapConfig;
///
/// let config = MapConfig::default()
///     .with_initial_num_buckets(64)
///     .with_max_load_factor(0.5)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapConfig {
    /// Number of buckets allocated up-front. Must be at least 1.
    pub initial_num_buckets: usize,
    /// The map grows as soon as `len / num_buckets` would exceed this value.
    pub max_load_factor: f64,
    /// Seed the hasher is derived from.
    pub seed: u64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            initial_num_buckets: DEFAULT_NUM_BUCKETS,
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
            seed: 0,
        }
    }
}

impl MapConfig {
    pub fn with_initial_num_buckets(mut self, num_buckets: usize) -> Self {
        self.initial_num_buckets = num_buckets;
        self
    }

    pub fn with_max_load_factor(mut self, max_load_factor: f64) -> Self {
        self.max_load_factor = max_load_factor;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Use a seed drawn from the thread-local random number generator.
    pub fn with_random_seed(self) -> Self {
        self.with_seed(rand::rng().next_u64())
    }

    /// Check that the configuration describes a usable map.
    pub fn validate(&self) -> Result<(), BucketedError> {
        if self.initial_num_buckets == 0 {
            warn!("Rejected map configuration: {self:?}");
            return Err(BucketedError::InvalidNumBuckets(self.initial_num_buckets));
        }
        if !self.max_load_factor.is_finite() || self.max_load_factor <= 0.0 {
            warn!("Rejected map configuration: {self:?}");
            return Err(BucketedError::InvalidLoadFactor(self.max_load_factor));
        }
        Ok(())
    }
}
