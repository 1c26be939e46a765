//! Ledger classification strategies

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::currency::{fits_currency_scale, CurrencyParser, CURRENCY_SCALE};
use crate::traits::*;
use crate::types::*;

/// Classifies rendered ledger text where every category label line is
/// immediately followed by the line holding its amount
///
/// A label with no following line, or whose following line holds no amount,
/// is skipped. Incidental rows in the table therefore never abort a run.
#[derive(Debug, Clone)]
pub struct AdjacentLineClassifier {
    income_token: String,
    expense_token: String,
    parser: CurrencyParser,
}

impl Default for AdjacentLineClassifier {
    fn default() -> Self {
        Self {
            income_token: "income".to_string(),
            expense_token: "expense".to_string(),
            parser: CurrencyParser::default(),
        }
    }
}

impl AdjacentLineClassifier {
    /// Create a classifier with custom label tokens
    pub fn new(income_token: &str, expense_token: &str, parser: CurrencyParser) -> Self {
        Self {
            income_token: income_token.to_lowercase(),
            expense_token: expense_token.to_lowercase(),
            parser,
        }
    }

    /// Category named by a label line. Income wins when both tokens appear.
    pub fn label_category(&self, line: &str) -> Option<LedgerCategory> {
        let line = line.to_lowercase();
        if line.contains(&self.income_token) {
            Some(LedgerCategory::Income)
        } else if line.contains(&self.expense_token) {
            Some(LedgerCategory::Expense)
        } else {
            None
        }
    }

    /// Classify an ordered sequence of rendered lines
    pub fn classify<S: AsRef<str>>(&self, lines: &[S]) -> Vec<LedgerEntry> {
        let mut entries = Vec::new();

        for (index, line) in lines.iter().enumerate() {
            let Some(category) = self.label_category(line.as_ref()) else {
                continue;
            };

            let Some(next) = lines.get(index + 1) else {
                debug!("Skipping {} label on last ledger line {}", category, index);
                continue;
            };

            match self.parser.find(next.as_ref()) {
                Some(amount) => entries.push(LedgerEntry::new(category, amount.abs())),
                None => debug!(
                    "Skipping {} label on ledger line {}: no amount in {:?}",
                    category,
                    index,
                    next.as_ref()
                ),
            }
        }

        entries
    }
}

impl LedgerReader for AdjacentLineClassifier {
    fn read_entries(&self, ledger_text: &str) -> VerifyResult<Vec<LedgerEntry>> {
        let lines: Vec<&str> = ledger_text.split('\n').collect();
        Ok(self.classify(&lines))
    }
}

/// Classify rendered ledger lines with the default `income`/`expense` tokens
pub fn classify<S: AsRef<str>>(lines: &[S]) -> Vec<LedgerEntry> {
    AdjacentLineClassifier::default().classify(lines)
}

/// Amount as carried by a structured record: a decimal string or a JSON number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordAmount {
    Text(String),
    Number(serde_json::Number),
}

impl RecordAmount {
    fn to_decimal(&self) -> Option<BigDecimal> {
        let raw = match self {
            RecordAmount::Text(s) => s.trim().to_string(),
            RecordAmount::Number(n) => n.to_string(),
        };
        BigDecimal::from_str(&raw).ok()
    }
}

/// One explicit `{category, amount}` row as stored by the application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerRecord {
    pub category: LedgerCategory,
    pub amount: RecordAmount,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Reads a JSON array of [`LedgerRecord`]s instead of scraping text
#[derive(Debug, Clone, Default)]
pub struct StructuredRecordReader {
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

impl StructuredRecordReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only keep records dated within `start..=end`. Either bound may be open.
    pub fn with_date_range(start_date: Option<NaiveDate>, end_date: Option<NaiveDate>) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    fn has_range(&self) -> bool {
        self.start_date.is_some() || self.end_date.is_some()
    }

    fn in_range(&self, record: &LedgerRecord) -> bool {
        if !self.has_range() {
            return true;
        }
        let Some(date) = record.date else {
            return false;
        };
        self.start_date.is_none_or(|start| date >= start)
            && self.end_date.is_none_or(|end| date <= end)
    }

    /// Decode and convert a batch of records
    pub fn read_records(&self, records: &[LedgerRecord]) -> VerifyResult<Vec<LedgerEntry>> {
        let mut entries = Vec::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            if !self.in_range(record) {
                warn!(
                    "Skipping ledger record {} dated {:?}: outside requested range",
                    index, record.date
                );
                continue;
            }

            let amount = record.amount.to_decimal().ok_or_else(|| {
                ReconcileError::InvalidRecords(format!(
                    "Record {} has a non-decimal amount: {:?}",
                    index, record.amount
                ))
            })?;

            if amount < BigDecimal::from(0) {
                return Err(ReconcileError::InvalidRecords(format!(
                    "Record {} has a negative amount: {}",
                    index, amount
                )));
            }

            if !fits_currency_scale(&amount) {
                return Err(ReconcileError::InvalidRecords(format!(
                    "Record {} has digits below the cent: {}",
                    index, amount
                )));
            }

            entries.push(LedgerEntry::new(
                record.category,
                amount.with_scale(CURRENCY_SCALE),
            ));
        }

        Ok(entries)
    }
}

impl LedgerReader for StructuredRecordReader {
    fn read_entries(&self, ledger_text: &str) -> VerifyResult<Vec<LedgerEntry>> {
        let records: Vec<LedgerRecord> = serde_json::from_str(ledger_text)
            .map_err(|e| ReconcileError::InvalidRecords(e.to_string()))?;
        self.read_records(&records)
    }
}
