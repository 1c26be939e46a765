//! Field-by-field comparison of recomputed and displayed totals

use bigdecimal::BigDecimal;

use crate::types::*;

fn check(
    mismatches: &mut Vec<FieldMismatch>,
    field: ReconcileField,
    expected: &BigDecimal,
    actual: &BigDecimal,
) {
    if expected != actual {
        mismatches.push(FieldMismatch {
            field,
            expected: expected.clone(),
            actual: actual.clone(),
        });
    }
}

/// Compare ledger totals with the summary widget.
///
/// All three fields are always checked; the result lists every disagreement.
pub fn reconcile(computed: &AggregateTotals, displayed: &SummaryFigures) -> ReconciliationResult {
    let mut mismatches = Vec::new();

    check(
        &mut mismatches,
        ReconcileField::Income,
        &computed.income,
        &displayed.income,
    );
    check(
        &mut mismatches,
        ReconcileField::Expense,
        &computed.expense,
        &displayed.expense,
    );
    check(
        &mut mismatches,
        ReconcileField::NetBalance,
        &computed.net,
        &displayed.balance,
    );

    ReconciliationResult::from_mismatches(mismatches)
}
