//! # Dashboard Recon
//!
//! Checks that a personal-finance dashboard agrees with its own transaction
//! ledger. Totals are recomputed from the rendered ledger and compared,
//! to the cent, with the figures the summary widget displays.
//!
//! ## Features
//!
//! - **Currency parsing**: First `$1,234.56`-style amount in a line, as an exact decimal
//! - **Ledger classification**: Label-then-amount heuristic over rendered text, or structured JSON records
//! - **Aggregation**: Income, expense and net totals with fixed-point arithmetic
//! - **Summary extraction**: Positional parsing of the dashboard summary widget
//! - **Reconciliation**: Field-level diff of every disagreeing figure
//!
//! ## Quick Start
//!
//! ```rust
//! use dashboard_recon::verify_reconciliation;
//!
//! let ledger = "Income\n$3,000.00\nExpense\n$250.00";
//! let summary = "Income\n$3,000.00\nExpense\n$250.00\nBalance\n$2,750.00";
//!
//! let result = verify_reconciliation(ledger, summary).unwrap();
//! assert!(result.matches);
//! ```

pub mod aggregate;
pub mod classify;
pub mod config;
pub mod currency;
pub mod reconciliation;
pub mod summary;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use aggregate::aggregate;
pub use classify::*;
pub use config::ReconcileConfig;
pub use currency::CurrencyParser;
pub use reconciliation::*;
pub use summary::*;
pub use traits::*;
pub use types::*;
