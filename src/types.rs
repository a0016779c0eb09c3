//! Core types and constants

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ForexError;

/// Timestamp type used throughout the library
pub type Timestamp = DateTime<Utc>;

/// Monetary amount in the transaction currency
pub type Amount = Decimal;

/// Exchange rate quoted against the local currency
pub type Rate = Decimal;

/// Decimal places carried by an exchange rate
pub const RATE_SCALE: u32 = 4;

/// Local currency every rate is quoted against
pub const DEFAULT_QUOTE_CURRENCY: &str = "ETB";

/// Direction of a desk transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    Buy,
    Sell,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Buy => "Buy",
            TransactionType::Sell => "Sell",
        }
    }

    pub fn all() -> [TransactionType; 2] {
        [TransactionType::Buy, TransactionType::Sell]
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = ForexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Buy" => Ok(TransactionType::Buy),
            "Sell" => Ok(TransactionType::Sell),
            other => Err(ForexError::ParseError(format!(
                "Unknown transaction type: {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_type_parse() {
        assert_eq!("Buy".parse::<TransactionType>().unwrap(), TransactionType::Buy);
        assert_eq!("Sell".parse::<TransactionType>().unwrap(), TransactionType::Sell);
        assert!("SELL".parse::<TransactionType>().is_err());
        assert!("".parse::<TransactionType>().is_err());
    }

    #[test]
    fn test_transaction_type_display() {
        assert_eq!(TransactionType::Buy.to_string(), "Buy");
        assert_eq!(TransactionType::Sell.to_string(), "Sell");
    }
}
