//! Core types and data structures for dashboard reconciliation

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::currency::format_amount;

/// Category a ledger row is filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LedgerCategory {
    /// Money received (salary, refunds, ...)
    Income,
    /// Money spent
    Expense,
}

impl fmt::Display for LedgerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerCategory::Income => write!(f, "income"),
            LedgerCategory::Expense => write!(f, "expense"),
        }
    }
}

/// A single classified row of the rendered ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub category: LedgerCategory,
    /// Non-negative amount with two fractional digits
    #[serde(with = "crate::currency::serde_amount")]
    pub amount: BigDecimal,
}

impl LedgerEntry {
    /// Create a new entry
    pub fn new(category: LedgerCategory, amount: BigDecimal) -> Self {
        Self { category, amount }
    }

    /// Create an income entry
    pub fn income(amount: BigDecimal) -> Self {
        Self::new(LedgerCategory::Income, amount)
    }

    /// Create an expense entry
    pub fn expense(amount: BigDecimal) -> Self {
        Self::new(LedgerCategory::Expense, amount)
    }
}

/// Totals recomputed from the ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateTotals {
    /// Sum of all income entries, never negative
    #[serde(with = "crate::currency::serde_amount")]
    pub income: BigDecimal,
    /// Sum of all expense entries, never negative
    #[serde(with = "crate::currency::serde_amount")]
    pub expense: BigDecimal,
    /// `income - expense`
    #[serde(with = "crate::currency::serde_amount")]
    pub net: BigDecimal,
}

/// Figures read off the application's own summary widget.
///
/// Kept as a separate type from [`AggregateTotals`] even though the shape is
/// the same: the two are produced by independent code paths and only meet
/// inside the comparator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryFigures {
    #[serde(with = "crate::currency::serde_amount")]
    pub income: BigDecimal,
    #[serde(with = "crate::currency::serde_amount")]
    pub expense: BigDecimal,
    #[serde(with = "crate::currency::serde_amount")]
    pub balance: BigDecimal,
}

/// Field compared during reconciliation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReconcileField {
    Income,
    Expense,
    /// Recomputed net against displayed balance
    NetBalance,
}

impl ReconcileField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReconcileField::Income => "income",
            ReconcileField::Expense => "expense",
            ReconcileField::NetBalance => "net/balance",
        }
    }
}

impl fmt::Display for ReconcileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One field whose recomputed value disagrees with the displayed one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMismatch {
    pub field: ReconcileField,
    /// Value recomputed from the ledger
    #[serde(with = "crate::currency::serde_amount")]
    pub expected: BigDecimal,
    /// Value shown by the summary widget
    #[serde(with = "crate::currency::serde_amount")]
    pub actual: BigDecimal,
}

impl fmt::Display for FieldMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: expected {}, actual {}",
            self.field,
            format_amount(&self.expected),
            format_amount(&self.actual)
        )
    }
}

/// Outcome of a single verification run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationResult {
    pub matches: bool,
    pub mismatches: Vec<FieldMismatch>,
}

impl ReconciliationResult {
    /// Build a result from the collected mismatches
    pub fn from_mismatches(mismatches: Vec<FieldMismatch>) -> Self {
        Self {
            matches: mismatches.is_empty(),
            mismatches,
        }
    }

    /// Look up the mismatch recorded for a field, if any
    pub fn mismatch_for(&self, field: ReconcileField) -> Option<&FieldMismatch> {
        self.mismatches.iter().find(|m| m.field == field)
    }

    /// Convert into an error carrying the full diff when the totals disagree
    pub fn into_result(self) -> VerifyResult<Self> {
        if self.matches {
            Ok(self)
        } else {
            Err(ReconcileError::Mismatch(self.mismatches))
        }
    }
}

fn join_mismatches(mismatches: &[FieldMismatch]) -> String {
    mismatches
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors that can occur while verifying the dashboard
#[derive(Debug, thiserror::Error)]
pub enum ReconcileError {
    #[error("No monetary amount found in {input:?}")]
    Parse { input: String },
    #[error("Summary layout changed: need at least {required} lines, found {found}")]
    Format { required: usize, found: usize },
    #[error("Summary {field} line is not a decimal amount: {value:?}")]
    SummaryValue {
        field: ReconcileField,
        value: String,
    },
    #[error("Reconciliation mismatch: {}", join_mismatches(.0))]
    Mismatch(Vec<FieldMismatch>),
    #[error("Invalid ledger records: {0}")]
    InvalidRecords(String),
    #[error("Snapshot error: {0}")]
    Snapshot(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for verification operations
pub type VerifyResult<T> = Result<T, ReconcileError>;
