//! Extraction of the dashboard summary widget figures
//!
//! The widget renders as alternating label and value lines:
//!
//! ```text
//! Income
//! $3,000.00
//! Expense
//! $250.00
//! Balance
//! $2,750.00
//! ```
//!
//! Figures are read by position only. Labels are not checked, so a widget that
//! reorders its cards will be misread rather than rejected.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::currency::CurrencyParser;
use crate::types::*;

/// Zero-based line positions of each figure in the widget text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryLayout {
    pub income_line: usize,
    pub expense_line: usize,
    pub balance_line: usize,
}

impl Default for SummaryLayout {
    fn default() -> Self {
        Self {
            income_line: 1,
            expense_line: 3,
            balance_line: 5,
        }
    }
}

impl SummaryLayout {
    /// Minimum number of lines the widget text must have
    pub fn required_lines(&self) -> usize {
        self.income_line.max(self.expense_line).max(self.balance_line) + 1
    }
}

/// Reads [`SummaryFigures`] out of the widget text
#[derive(Debug, Clone, Default)]
pub struct SummaryExtractor {
    layout: SummaryLayout,
    parser: CurrencyParser,
}

impl SummaryExtractor {
    /// Create an extractor with a custom layout and currency parser
    pub fn new(layout: SummaryLayout, parser: CurrencyParser) -> Self {
        Self { layout, parser }
    }

    pub fn layout(&self) -> &SummaryLayout {
        &self.layout
    }

    /// Extract income, expense and balance from the widget text.
    ///
    /// Fails with [`ReconcileError::Format`] when the text is too short for the
    /// layout and with [`ReconcileError::SummaryValue`] when a positional line
    /// is not an amount. Both are hard failures.
    pub fn extract(&self, text: &str) -> VerifyResult<SummaryFigures> {
        let lines: Vec<&str> = text.split('\n').collect();

        let required = self.layout.required_lines();
        if lines.len() < required {
            return Err(ReconcileError::Format {
                required,
                found: lines.len(),
            });
        }

        Ok(SummaryFigures {
            income: self.figure(&lines, self.layout.income_line, ReconcileField::Income)?,
            expense: self.figure(&lines, self.layout.expense_line, ReconcileField::Expense)?,
            balance: self.figure(
                &lines,
                self.layout.balance_line,
                ReconcileField::NetBalance,
            )?,
        })
    }

    fn figure(
        &self,
        lines: &[&str],
        index: usize,
        field: ReconcileField,
    ) -> VerifyResult<BigDecimal> {
        let line = lines[index];
        self.parser
            .parse_bare(line)
            .ok_or_else(|| ReconcileError::SummaryValue {
                field,
                value: line.to_string(),
            })
    }
}

/// Extract summary figures using the default dollar layout
pub fn extract_summary(text: &str) -> VerifyResult<SummaryFigures> {
    SummaryExtractor::default().extract(text)
}
