//! In-memory page snapshot for testing

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::traits::*;
use crate::types::*;

/// Page snapshot backed by fixed strings, for tests and demos
#[derive(Debug, Clone, Default)]
pub struct StaticSnapshot {
    ledger: Arc<RwLock<Option<String>>>,
    summary: Arc<RwLock<Option<String>>>,
}

impl StaticSnapshot {
    /// Create a snapshot holding both texts
    pub fn new(ledger_text: impl Into<String>, summary_text: impl Into<String>) -> Self {
        Self {
            ledger: Arc::new(RwLock::new(Some(ledger_text.into()))),
            summary: Arc::new(RwLock::new(Some(summary_text.into()))),
        }
    }

    /// Replace the ledger text, as after a page re-render
    pub fn set_ledger_text(&self, text: impl Into<String>) {
        *self.ledger.write().unwrap() = Some(text.into());
    }

    /// Replace the summary text
    pub fn set_summary_text(&self, text: impl Into<String>) {
        *self.summary.write().unwrap() = Some(text.into());
    }

    /// Forget both texts so the next read fails (useful for testing)
    pub fn clear(&self) {
        *self.ledger.write().unwrap() = None;
        *self.summary.write().unwrap() = None;
    }
}

#[async_trait]
impl PageSnapshot for StaticSnapshot {
    async fn ledger_text(&self) -> VerifyResult<String> {
        self.ledger
            .read()
            .unwrap()
            .clone()
            .ok_or_else(|| ReconcileError::Snapshot("Ledger table was not captured".to_string()))
    }

    async fn summary_text(&self) -> VerifyResult<String> {
        self.summary
            .read()
            .unwrap()
            .clone()
            .ok_or_else(|| {
                ReconcileError::Snapshot("Summary widget was not captured".to_string())
            })
    }
}
