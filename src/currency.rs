//! Currency amount extraction from free-form text

use bigdecimal::BigDecimal;
use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;

use crate::types::*;

/// Number of fractional digits every parsed amount carries
pub const CURRENCY_SCALE: i64 = 2;

static DOLLAR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(-)?\$(\d[\d,]*\.\d{2})").expect("valid currency pattern"));

static PLAIN_AMOUNT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?\d[\d,]*(\.\d+)?$").expect("valid amount pattern"));

static DEFAULT_PARSER: Lazy<CurrencyParser> = Lazy::new(CurrencyParser::default);

/// Render an amount with exactly two fractional digits.
///
/// `BigDecimal`'s own `Display` prints any zero as `0` whatever its scale, so
/// every user-visible amount goes through here.
pub fn format_amount(value: &BigDecimal) -> String {
    format!("{:.2}", value)
}

/// Whether `value` has no significant digits below the cent
pub fn fits_currency_scale(value: &BigDecimal) -> bool {
    let (_, scale) = value.normalized().as_bigint_and_exponent();
    scale <= CURRENCY_SCALE
}

/// Finds amounts like `$1,234.56` in a line of text
#[derive(Debug, Clone)]
pub struct CurrencyParser {
    symbol: String,
    pattern: Regex,
}

impl CurrencyParser {
    /// Create a parser for the given currency symbol
    pub fn new(symbol: &str) -> VerifyResult<Self> {
        if symbol.is_empty() {
            return Err(ReconcileError::Config(
                "Currency symbol cannot be empty".to_string(),
            ));
        }

        let pattern = format!(r"(-)?{}(\d[\d,]*\.\d{{2}})", regex::escape(symbol));
        let pattern = Regex::new(&pattern).map_err(|e| ReconcileError::Config(e.to_string()))?;

        Ok(Self {
            symbol: symbol.to_string(),
            pattern,
        })
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Parse the first amount found in `text`.
    ///
    /// A `-` directly in front of the symbol makes the amount negative.
    pub fn parse(&self, text: &str) -> VerifyResult<BigDecimal> {
        let captures = self
            .pattern
            .captures(text)
            .ok_or_else(|| ReconcileError::Parse {
                input: text.to_string(),
            })?;

        let digits = captures[2].replace(',', "");
        let amount = BigDecimal::from_str(&digits).map_err(|_| ReconcileError::Parse {
            input: text.to_string(),
        })?;
        let amount = amount.with_scale(CURRENCY_SCALE);

        if captures.get(1).is_some() {
            Ok(-amount)
        } else {
            Ok(amount)
        }
    }

    /// Like [`parse`](Self::parse) but treats "no amount" as `None`
    pub fn find(&self, text: &str) -> Option<BigDecimal> {
        self.parse(text).ok()
    }

    /// Parse a line that holds nothing but a formatted amount, e.g. `-$1,200.50`.
    ///
    /// The symbol is stripped and the remainder must be a plain decimal with
    /// optional thousands separators and at most two significant fractional
    /// digits. Returns `None` otherwise; nothing is rounded away.
    pub fn parse_bare(&self, text: &str) -> Option<BigDecimal> {
        let stripped = text.trim().replace(self.symbol.as_str(), "");
        if !PLAIN_AMOUNT.is_match(&stripped) {
            return None;
        }

        let amount = BigDecimal::from_str(&stripped.replace(',', "")).ok()?;
        if !fits_currency_scale(&amount) {
            return None;
        }
        Some(amount.with_scale(CURRENCY_SCALE))
    }
}

impl Default for CurrencyParser {
    fn default() -> Self {
        Self {
            symbol: "$".to_string(),
            pattern: DOLLAR_PATTERN.clone(),
        }
    }
}

/// Serde adapter writing amounts as two-digit strings, zero included
pub mod serde_amount {
    use bigdecimal::BigDecimal;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::str::FromStr;

    pub fn serialize<S: Serializer>(value: &BigDecimal, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_amount(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigDecimal, D::Error> {
        let raw = String::deserialize(deserializer)?;
        BigDecimal::from_str(&raw).map_err(serde::de::Error::custom)
    }
}

/// Parse the first dollar amount found in `text`
pub fn parse(text: &str) -> VerifyResult<BigDecimal> {
    DEFAULT_PARSER.parse(text)
}
