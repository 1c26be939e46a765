//! Configuration for a reconciliation run

use serde::{Deserialize, Serialize};

use crate::summary::SummaryLayout;
use crate::types::*;
use crate::utils::validation::*;

/// Tunables for the ledger classifier and the summary extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconcileConfig {
    /// Token marking an income label line, matched case-insensitively
    pub income_token: String,
    /// Token marking an expense label line, matched case-insensitively
    pub expense_token: String,
    /// Symbol preceding every formatted amount
    pub currency_symbol: String,
    /// Positions of the figures inside the summary widget text
    pub summary_layout: SummaryLayout,
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            income_token: "income".to_string(),
            expense_token: "expense".to_string(),
            currency_symbol: "$".to_string(),
            summary_layout: SummaryLayout::default(),
        }
    }
}

impl ReconcileConfig {
    /// Parse a configuration from JSON; missing keys fall back to defaults
    pub fn from_json_str(json: &str) -> VerifyResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ReconcileError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration can drive a run
    pub fn validate(&self) -> VerifyResult<()> {
        validate_label_token("income", &self.income_token)?;
        validate_label_token("expense", &self.expense_token)?;

        if self.income_token.to_lowercase() == self.expense_token.to_lowercase() {
            return Err(ReconcileError::Config(format!(
                "Income and expense tokens must differ, both are '{}'",
                self.income_token
            )));
        }

        validate_currency_symbol(&self.currency_symbol)?;
        validate_summary_layout(&self.summary_layout)
    }
}
