//! Traits for the pluggable seams of the reconciliation core

use async_trait::async_trait;

use crate::types::*;

/// Strategy that turns the ledger text into classified entries
///
/// The default strategy scrapes rendered text with an adjacency heuristic;
/// a structured-record reader can be dropped in without touching the
/// aggregator or comparator.
pub trait LedgerReader: Send + Sync {
    /// Read every ledger entry found in `ledger_text`
    fn read_entries(&self, ledger_text: &str) -> VerifyResult<Vec<LedgerEntry>>;
}

impl<R: LedgerReader + ?Sized> LedgerReader for Box<R> {
    fn read_entries(&self, ledger_text: &str) -> VerifyResult<Vec<LedgerEntry>> {
        (**self).read_entries(ledger_text)
    }
}

/// Source of settled page text
///
/// Implemented by whatever drives the browser. Both methods must return text
/// from a fully rendered page; the reconciliation core never waits or retries.
#[async_trait]
pub trait PageSnapshot: Send + Sync {
    /// Text content of the rendered transaction table body
    async fn ledger_text(&self) -> VerifyResult<String>;

    /// Text content of the dashboard summary widget
    async fn summary_text(&self) -> VerifyResult<String>;
}
