mod core;
pub use self::core::*;
pub mod error;
