//! Aggregation of classified ledger entries into totals

use bigdecimal::BigDecimal;

use crate::currency::CURRENCY_SCALE;
use crate::types::*;

impl AggregateTotals {
    /// Totals of an empty ledger
    pub fn zero() -> Self {
        let zero = BigDecimal::new(0.into(), CURRENCY_SCALE);
        Self {
            income: zero.clone(),
            expense: zero.clone(),
            net: zero,
        }
    }

    /// Fold a single entry into the totals, keeping `net` in step
    pub fn add_entry(&mut self, entry: &LedgerEntry) {
        match entry.category {
            LedgerCategory::Income => self.income += &entry.amount,
            LedgerCategory::Expense => self.expense += &entry.amount,
        }
        self.net = (&self.income - &self.expense).with_scale(CURRENCY_SCALE);
    }
}

impl Default for AggregateTotals {
    fn default() -> Self {
        Self::zero()
    }
}

/// Sum income and expense entries and derive the net balance
pub fn aggregate(entries: &[LedgerEntry]) -> AggregateTotals {
    let income: BigDecimal = entries
        .iter()
        .filter(|e| e.category == LedgerCategory::Income)
        .map(|e| &e.amount)
        .sum();
    let expense: BigDecimal = entries
        .iter()
        .filter(|e| e.category == LedgerCategory::Expense)
        .map(|e| &e.amount)
        .sum();

    let income = income.with_scale(CURRENCY_SCALE);
    let expense = expense.with_scale(CURRENCY_SCALE);
    let net = (&income - &expense).with_scale(CURRENCY_SCALE);

    AggregateTotals {
        income,
        expense,
        net,
    }
}
