//! Validation utilities

use crate::summary::SummaryLayout;
use crate::types::*;

/// Validate a label token used to recognise ledger category lines
pub fn validate_label_token(kind: &str, token: &str) -> VerifyResult<()> {
    if token.trim().is_empty() {
        return Err(ReconcileError::Config(format!(
            "The {} token cannot be empty",
            kind
        )));
    }

    if token.len() > 50 {
        return Err(ReconcileError::Config(format!(
            "The {} token cannot exceed 50 characters",
            kind
        )));
    }

    if token.contains('\n') {
        return Err(ReconcileError::Config(format!(
            "The {} token must fit on a single line",
            kind
        )));
    }

    Ok(())
}

/// Validate the currency symbol
pub fn validate_currency_symbol(symbol: &str) -> VerifyResult<()> {
    if symbol.trim().is_empty() {
        return Err(ReconcileError::Config(
            "Currency symbol cannot be empty".to_string(),
        ));
    }

    // Digits, separators and the sign would make amounts ambiguous
    if symbol
        .chars()
        .any(|c| c.is_ascii_digit() || c == ',' || c == '.' || c == '-')
    {
        return Err(ReconcileError::Config(format!(
            "Currency symbol '{}' cannot contain digits, ',', '.' or '-'",
            symbol
        )));
    }

    Ok(())
}

/// Validate that the summary layout points at three distinct lines
pub fn validate_summary_layout(layout: &SummaryLayout) -> VerifyResult<()> {
    let SummaryLayout {
        income_line,
        expense_line,
        balance_line,
    } = *layout;

    if income_line == expense_line || income_line == balance_line || expense_line == balance_line
    {
        return Err(ReconcileError::Config(format!(
            "Summary line positions must be distinct: income={}, expense={}, balance={}",
            income_line, expense_line, balance_line
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_token() {
        assert!(validate_label_token("income", "income").is_ok());
        assert!(validate_label_token("income", "   ").is_err());
        assert!(validate_label_token("income", "in\ncome").is_err());
        assert!(validate_label_token("income", &"x".repeat(51)).is_err());
    }

    #[test]
    fn test_currency_symbol() {
        assert!(validate_currency_symbol("$").is_ok());
        assert!(validate_currency_symbol("US$").is_ok());
        assert!(validate_currency_symbol("").is_err());
        assert!(validate_currency_symbol("1$").is_err());
        assert!(validate_currency_symbol("-").is_err());
    }

    #[test]
    fn test_summary_layout() {
        assert!(validate_summary_layout(&SummaryLayout::default()).is_ok());
        let clash = SummaryLayout {
            income_line: 1,
            expense_line: 1,
            balance_line: 5,
        };
        assert!(validate_summary_layout(&clash).is_err());
    }
}
