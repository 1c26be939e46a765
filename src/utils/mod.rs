//! Utility modules

pub mod memory_snapshot;
pub mod validation;

pub use memory_snapshot::*;
pub use validation::*;
