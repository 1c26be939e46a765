//! Integration tests for dashboard-recon

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use dashboard_recon::{
    aggregate, classify, extract_summary, reconcile, utils::StaticSnapshot, LedgerEntry,
    PageSnapshot, ReconcileConfig, ReconcileError, ReconcileField, ReconciliationEngine,
    StructuredRecordReader, verify_reconciliation,
};
use std::str::FromStr;

fn dec(s: &str) -> BigDecimal {
    BigDecimal::from_str(s).unwrap()
}

// Text as scraped from the transactions table: one row per transaction with
// source, category, amount and date cells on separate lines.
const LEDGER_TEXT: &str = "\
Paycheck
Income
$3,000.00
2024-05-01
Groceries
Expense
$250.00
2024-05-03
";

const SUMMARY_TEXT: &str = "\
Total Income
$3,000.00
Total Expenses
$250.00
Balance
$2,750.00";

#[test]
fn test_complete_reconciliation_workflow() {
    let lines: Vec<&str> = LEDGER_TEXT.split('\n').collect();
    let entries = classify(&lines);
    assert_eq!(
        entries,
        vec![
            LedgerEntry::income(dec("3000.00")),
            LedgerEntry::expense(dec("250.00")),
        ]
    );

    let computed = aggregate(&entries);
    assert_eq!(computed.net, dec("2750.00"));

    let displayed = extract_summary(SUMMARY_TEXT).unwrap();
    let result = reconcile(&computed, &displayed);
    assert!(result.matches);
    assert!(result.mismatches.is_empty());

    assert_eq!(verify_reconciliation(LEDGER_TEXT, SUMMARY_TEXT).unwrap(), result);
}

#[test]
fn test_balance_mismatch_is_reported_with_values() {
    let summary = SUMMARY_TEXT.replace("$2,750.00", "$2,700.00");
    let result = verify_reconciliation(LEDGER_TEXT, &summary).unwrap();

    assert!(!result.matches);
    assert_eq!(result.mismatches.len(), 1);
    let mismatch = &result.mismatches[0];
    assert_eq!(mismatch.field, ReconcileField::NetBalance);
    assert_eq!(mismatch.expected, dec("2750.00"));
    assert_eq!(mismatch.actual, dec("2700.00"));

    match result.into_result() {
        Err(ReconcileError::Mismatch(diff)) => assert_eq!(diff.len(), 1),
        other => panic!("expected mismatch error, got {other:?}"),
    }
}

#[test]
fn test_deleted_row_still_shown_on_dashboard() {
    // The ledger no longer lists the expense but the card was not refreshed
    let ledger = "Paycheck\nIncome\n$3,000.00\n2024-05-01\n";
    let result = verify_reconciliation(ledger, SUMMARY_TEXT).unwrap();

    assert!(!result.matches);
    assert_eq!(
        result
            .mismatches
            .iter()
            .map(|m| m.field)
            .collect::<Vec<_>>(),
        vec![ReconcileField::Expense, ReconcileField::NetBalance]
    );
    let expense = result.mismatch_for(ReconcileField::Expense).unwrap();
    assert_eq!(expense.expected, dec("0.00"));
    assert_eq!(expense.actual, dec("250.00"));
    assert_eq!(expense.to_string(), "expense: expected 0.00, actual 250.00");
}

#[test]
fn test_incidental_rows_are_tolerated() {
    let ledger = "\
Source
Category
Amount
Date
Expense report pending
Paycheck
Income
$1,200.50
2024-05-01
Income";
    let summary = "Income\n$1,200.50\nExpense\n$0.00\nBalance\n$1,200.50";
    assert!(verify_reconciliation(ledger, summary).unwrap().matches);
}

#[test]
fn test_empty_ledger_against_zero_dashboard() {
    let summary = "Income\n$0.00\nExpense\n$0.00\nBalance\n$0.00";
    assert!(verify_reconciliation("", summary).unwrap().matches);
}

#[test]
fn test_broken_summary_layout_is_fatal() {
    let err = verify_reconciliation(LEDGER_TEXT, "Loading...").unwrap_err();
    assert!(matches!(
        err,
        ReconcileError::Format {
            required: 6,
            found: 1
        }
    ));

    let err = verify_reconciliation(
        LEDGER_TEXT,
        "Income\n$3,000.00\nExpense\n--\nBalance\n$2,750.00",
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ReconcileError::SummaryValue {
            field: ReconcileField::Expense,
            ..
        }
    ));
}

#[test]
fn test_engine_from_json_config() {
    let config = ReconcileConfig::from_json_str(
        r#"{
            "income_token": "earned",
            "expense_token": "spent",
            "summary_layout": {"income_line": 0, "expense_line": 1, "balance_line": 2}
        }"#,
    )
    .unwrap();
    let engine = ReconciliationEngine::from_config(&config).unwrap();

    let ledger = "Earned\n$50.00\nSpent\n$20.00\nSpent\n$5.25";
    let summary = "$50.00\n$25.25\n$24.75";
    assert!(engine.verify(ledger, summary).unwrap().matches);
}

#[test]
fn test_structured_reader_with_date_range() {
    let reader = StructuredRecordReader::with_date_range(
        Some(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()),
        Some(NaiveDate::from_ymd_opt(2024, 5, 31).unwrap()),
    );
    let engine = ReconciliationEngine::with_reader(reader);

    let ledger = r#"[
        {"category": "income", "amount": "3000.00", "date": "2024-05-01", "description": "Paycheck"},
        {"category": "expense", "amount": "250.00", "date": "2024-05-03", "description": "Groceries"},
        {"category": "expense", "amount": "99.00", "date": "2024-04-30", "description": "Gym"}
    ]"#;
    assert!(engine.verify(ledger, SUMMARY_TEXT).unwrap().matches);
}

#[tokio::test]
async fn test_verify_from_snapshot() {
    let snapshot = StaticSnapshot::new(LEDGER_TEXT, SUMMARY_TEXT);
    let engine = ReconciliationEngine::new();

    let result = engine.verify_snapshot(&snapshot).await.unwrap();
    assert!(result.matches);

    // Same snapshot, same answer
    assert_eq!(engine.verify_snapshot(&snapshot).await.unwrap(), result);

    // A new expense shows up in the ledger before the card updates
    snapshot.set_ledger_text(format!("{LEDGER_TEXT}Coffee\nExpense\n$4.50\n2024-05-04\n"));
    let result = engine.verify_snapshot(&snapshot).await.unwrap();
    assert!(!result.matches);
    assert_eq!(
        result.mismatch_for(ReconcileField::Expense).unwrap().expected,
        dec("254.50")
    );

    snapshot.set_summary_text("Income\n$3,000.00\nExpense\n$254.50\nBalance\n$2,745.50");
    assert!(engine.verify_snapshot(&snapshot).await.unwrap().matches);
}

#[tokio::test]
async fn test_missing_snapshot_text() {
    let snapshot = StaticSnapshot::new(LEDGER_TEXT, SUMMARY_TEXT);
    snapshot.clear();

    assert!(matches!(
        snapshot.ledger_text().await,
        Err(ReconcileError::Snapshot(_))
    ));
    let err = ReconciliationEngine::new()
        .verify_snapshot(&snapshot)
        .await
        .unwrap_err();
    assert!(matches!(err, ReconcileError::Snapshot(_)));
}
