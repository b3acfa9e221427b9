//! Error definitions.
use std::alloc::Layout;
use thiserror::Error;

/// Project-wise error type.
///
/// Absence of a key is never reported through this type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BucketedError {
    /// A table must always have at least one bucket.
    #[error("Number of buckets must be at least 1, got {0}.")]
    InvalidNumBuckets(usize),

    /// The maximum load factor must be a finite positive number.
    #[error("Maximum load factor must be a finite number greater than 0, got {0}.")]
    InvalidLoadFactor(f64),

    /// The memory layout of a table with the requested number of buckets can't be represented.
    #[error("A table of {num_buckets} buckets exceeds the maximum allocation size.")]
    CapacityOverflow { num_buckets: usize },

    /// The allocator refused to provide memory for a new table.
    ///
    /// Might occur during construction or during a rehash. Considered unrecoverable by the
    /// infallible APIs.
    #[error("Unable to allocate a table of {num_buckets} buckets ({} bytes).", .layout.size())]
    AllocationFailed { num_buckets: usize, layout: Layout },
}
