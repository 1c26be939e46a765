//! Reconciliation of recomputed ledger totals against the dashboard summary

pub mod comparator;
pub mod engine;

pub use comparator::*;
pub use engine::*;
