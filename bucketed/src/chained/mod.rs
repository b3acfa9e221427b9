//! Hash map with separate chaining.
//!
//! Every bucket of the table holds a short list of entries. A lookup hashes the key, reduces the
//! hash modulo the number of buckets and scans the selected list comparing keys by [`Eq`].
mod core;
pub use self::core::*;

mod bucket;
pub use bucket::Bucket;

mod table;
pub use table::Table;

mod ctors;
mod hash_map;
mod iter;
pub use iter::*;
mod ops;
mod rehash;
mod traits;
