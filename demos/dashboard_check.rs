//! Dashboard reconciliation example

use dashboard_recon::utils::StaticSnapshot;
use dashboard_recon::{ReconciliationEngine, StructuredRecordReader};

const LEDGER_TEXT: &str = "\
Paycheck
Income
$3,000.00
2024-05-01
Groceries
Expense
$250.00
2024-05-03
Streaming
Expense
$15.99
2024-05-09
";

const SUMMARY_TEXT: &str = "\
Total Income
$3,000.00
Total Expenses
$265.99
Balance
$2,734.01";

const LEDGER_RECORDS: &str = r#"[
    {"category": "income", "amount": "3000.00", "date": "2024-05-01", "description": "Paycheck"},
    {"category": "expense", "amount": "250.00", "date": "2024-05-03", "description": "Groceries"},
    {"category": "expense", "amount": "15.99", "date": "2024-05-09", "description": "Streaming"}
]"#;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Dashboard Recon - Reconciliation Example\n");

    // 1. Scrape-style check over rendered text
    println!("Checking rendered ledger against the summary widget...");
    let snapshot = StaticSnapshot::new(LEDGER_TEXT, SUMMARY_TEXT);
    let engine = ReconciliationEngine::new();
    let result = engine.verify_snapshot(&snapshot).await?;
    println!("  matches: {}", result.matches);

    // 2. Same check from structured records
    println!("\nChecking structured records against the summary widget...");
    let structured = ReconciliationEngine::with_reader(StructuredRecordReader::new());
    let result = structured.verify(LEDGER_RECORDS, SUMMARY_TEXT)?;
    println!("  matches: {}", result.matches);

    // 3. A stale dashboard card
    println!("\nChecking a stale balance...");
    snapshot.set_summary_text(SUMMARY_TEXT.replace("$2,734.01", "$2,750.00"));
    let result = engine.verify_snapshot(&snapshot).await?;
    for mismatch in &result.mismatches {
        println!("  x {}", mismatch);
    }

    match result.into_result() {
        Ok(_) => println!("\nDashboard is consistent"),
        Err(e) => println!("\nAssertion would fail: {}", e),
    }

    Ok(())
}
