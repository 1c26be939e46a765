//! Orchestrates a full verification run

use log::{debug, warn};

use crate::aggregate::aggregate;
use crate::classify::AdjacentLineClassifier;
use crate::config::ReconcileConfig;
use crate::currency::{format_amount, CurrencyParser};
use crate::reconciliation::comparator::reconcile;
use crate::summary::SummaryExtractor;
use crate::traits::*;
use crate::types::*;

/// Runs ledger text and summary text through their independent paths and
/// compares the outcome
pub struct ReconciliationEngine<R: LedgerReader = AdjacentLineClassifier> {
    reader: R,
    extractor: SummaryExtractor,
}

impl Default for ReconciliationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ReconciliationEngine {
    /// Create an engine using the adjacency heuristic and dollar amounts
    pub fn new() -> Self {
        Self {
            reader: AdjacentLineClassifier::default(),
            extractor: SummaryExtractor::default(),
        }
    }

    /// Create an engine from a validated configuration
    pub fn from_config(config: &ReconcileConfig) -> VerifyResult<Self> {
        config.validate()?;
        let parser = CurrencyParser::new(&config.currency_symbol)?;
        Ok(Self {
            reader: AdjacentLineClassifier::new(
                &config.income_token,
                &config.expense_token,
                parser.clone(),
            ),
            extractor: SummaryExtractor::new(config.summary_layout, parser),
        })
    }
}

impl<R: LedgerReader> ReconciliationEngine<R> {
    /// Create an engine with a custom ledger reader
    pub fn with_reader(reader: R) -> Self {
        Self {
            reader,
            extractor: SummaryExtractor::default(),
        }
    }

    /// Replace the summary extractor
    pub fn extractor(mut self, extractor: SummaryExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    /// Recompute totals from the ledger, read the summary widget and compare.
    ///
    /// Summary failures are returned as errors. A mismatch is not an error
    /// here; use [`ReconciliationResult::into_result`] to assert on it.
    pub fn verify(&self, ledger_text: &str, summary_text: &str) -> VerifyResult<ReconciliationResult> {
        let entries = self.reader.read_entries(ledger_text)?;
        let computed = aggregate(&entries);
        debug!(
            "Ledger yielded {} entries: income={}, expense={}, net={}",
            entries.len(),
            format_amount(&computed.income),
            format_amount(&computed.expense),
            format_amount(&computed.net)
        );

        let displayed = self.extractor.extract(summary_text)?;
        let result = reconcile(&computed, &displayed);

        for mismatch in &result.mismatches {
            warn!("Dashboard does not match ledger: {}", mismatch);
        }

        Ok(result)
    }

    /// Pull both texts from the page snapshot and verify them
    pub async fn verify_snapshot<P: PageSnapshot + ?Sized>(
        &self,
        snapshot: &P,
    ) -> VerifyResult<ReconciliationResult> {
        let ledger_text = snapshot.ledger_text().await?;
        let summary_text = snapshot.summary_text().await?;
        self.verify(&ledger_text, &summary_text)
    }
}

/// Verify a dashboard with the default engine
pub fn verify_reconciliation(
    ledger_text: &str,
    summary_text: &str,
) -> VerifyResult<ReconciliationResult> {
    ReconciliationEngine::new().verify(ledger_text, summary_text)
}
