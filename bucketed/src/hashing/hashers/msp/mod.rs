//! Implements a general purpose hasher based on multiply-shift and polynomial hash function
//! families (hence MSP).
mod core;
pub use self::core::*;
mod int;
pub use int::*;
mod string;
pub use string::*;
mod option;
pub use option::*;
