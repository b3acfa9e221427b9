//! Test tooling shared by the workspace crates.
pub mod generate;
pub use generate::*;

pub mod map;
pub use map::*;

pub mod stat;
pub use stat::*;
