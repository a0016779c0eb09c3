//! FX currency labels
//!
//! The desk stores currencies as human-readable labels such as
//! `"US Dollar (USD)"`. The ISO code inside the parentheses is what
//! document names and currency pairs are built from.

use crate::error::{ForexError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A parsed FX currency label
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyLabel {
    /// Display name, e.g. "US Dollar"
    pub name: String,
    /// ISO 4217 code, e.g. "USD"
    pub code: String,
}

impl CurrencyLabel {
    /// Parse a `"<Name> (<CODE>)"` label
    pub fn parse(label: &str) -> Result<Self> {
        let invalid = || ForexError::InvalidCurrencyLabel(label.to_string());

        let open = label.find('(').ok_or_else(invalid)?;
        let rest = &label[open + 1..];
        let close = rest.find(')').ok_or_else(invalid)?;

        let code = rest[..close].trim();
        if code.is_empty() || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(invalid());
        }

        Ok(Self {
            name: label[..open].trim().to_string(),
            code: code.to_uppercase(),
        })
    }
}

impl FromStr for CurrencyLabel {
    type Err = ForexError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for CurrencyLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

/// Currency pair quoted as base/quote
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurrencyPair {
    pub base: String,
    pub quote: String,
}

impl CurrencyPair {
    /// Create new currency pair
    pub fn new(base: impl Into<String>, quote: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            quote: quote.into(),
        }
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_label() {
        let label = CurrencyLabel::parse("US Dollar (USD)").unwrap();
        assert_eq!(label.name, "US Dollar");
        assert_eq!(label.code, "USD");
        assert_eq!(label.to_string(), "US Dollar (USD)");
    }

    #[test]
    fn test_parse_label_normalizes_code() {
        let label: CurrencyLabel = "Euro ( eur )".parse().unwrap();
        assert_eq!(label.code, "EUR");
    }

    #[test]
    fn test_parse_label_without_code() {
        assert!(matches!(
            CurrencyLabel::parse("US Dollar"),
            Err(ForexError::InvalidCurrencyLabel(_))
        ));
        assert!(CurrencyLabel::parse("US Dollar (USD").is_err());
        assert!(CurrencyLabel::parse("Blank ()").is_err());
    }

    #[test]
    fn test_pair_display() {
        let pair = CurrencyPair::new("USD", "ETB");
        assert_eq!(pair.to_string(), "USD/ETB");
    }
}
