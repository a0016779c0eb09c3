//! TransactionRecord - a desk buy/sell of foreign currency
//!
//! The record is owned and persisted by the host application. This crate
//! only fills in derived fields: the exchange rate before the form loads
//! and the document name on insert.

use crate::currency::{CurrencyLabel, CurrencyPair};
use crate::error::{ForexError, Result};
use crate::types::{Amount, Rate, Timestamp, TransactionType};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Doctype name the host registers transactions under
pub const TRANSACTION_DOCTYPE: &str = "Transaction";

/// In-memory transaction document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Draft id assigned before the host gives the record a name
    pub draft_id: Uuid,
    /// Document name, set by autoname
    pub name: Option<String>,
    /// Customer document name
    pub customer: String,
    /// Customer display name
    pub customer_name: String,
    /// FX currency label, e.g. "US Dollar (USD)"
    pub currency: String,
    pub transaction_type: TransactionType,
    /// Amount in the foreign currency
    pub amount: Amount,
    /// Rate against the quote currency, 4 dp
    pub exchange_rate: Option<Rate>,
    pub date_and_time: Option<Timestamp>,
}

impl TransactionRecord {
    /// Create a new unsaved transaction
    pub fn new(
        customer: impl Into<String>,
        currency: impl Into<String>,
        transaction_type: TransactionType,
        amount: Amount,
    ) -> Self {
        let customer = customer.into();
        Self {
            draft_id: Uuid::new_v4(),
            name: None,
            customer_name: customer.clone(),
            customer,
            currency: currency.into(),
            transaction_type,
            amount,
            exchange_rate: None,
            date_and_time: None,
        }
    }

    /// Set the transaction timestamp
    pub fn with_date_and_time(mut self, dt: Timestamp) -> Self {
        self.date_and_time = Some(dt);
        self
    }

    /// Whether the host has not named this record yet
    pub fn is_new(&self) -> bool {
        self.name.is_none()
    }

    /// Parsed currency label
    pub fn currency_label(&self) -> Result<CurrencyLabel> {
        CurrencyLabel::parse(&self.currency)
    }

    /// Value of the transaction in the quote currency, `None` until a rate
    /// is set
    pub fn quote_amount(&self) -> Result<Option<Amount>> {
        let Some(rate) = self.exchange_rate else {
            return Ok(None);
        };
        self.amount
            .checked_mul(rate)
            .map(Some)
            .ok_or_else(|| ForexError::AmountOverflow {
                amount: self.amount.to_string(),
                rate: rate.to_string(),
            })
    }

    /// Pair this transaction trades, quoted against `quote_currency`
    pub fn pair(&self, quote_currency: &str) -> Result<CurrencyPair> {
        if quote_currency.trim().is_empty() {
            return Err(ForexError::MissingField("quote_currency".to_string()));
        }
        let label = self.currency_label()?;
        Ok(CurrencyPair::new(label.code, quote_currency))
    }

    /// Build the document name: `"<CODE>/<quote> - Amount: <amount>"`
    pub fn document_name(&self, quote_currency: &str) -> Result<String> {
        let pair = self.pair(quote_currency)?;
        Ok(format!("{} - Amount: {}", pair, self.amount))
    }

    /// Name the record on insert
    pub fn autoname(&mut self, quote_currency: &str) -> Result<()> {
        let name = self.document_name(quote_currency)?;
        log::debug!("Autonamed transaction {} as '{}'", self.draft_id, name);
        self.name = Some(name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_transaction_creation() {
        let txn = TransactionRecord::new("Abebe Kebede", "US Dollar (USD)", TransactionType::Buy, dec("100"));

        assert!(txn.is_new());
        assert_eq!(txn.customer, "Abebe Kebede");
        assert_eq!(txn.customer_name, "Abebe Kebede");
        assert_eq!(txn.exchange_rate, None);
        assert_eq!(txn.quote_amount().unwrap(), None);
        assert_eq!(txn.date_and_time, None);
    }

    #[test]
    fn test_with_date_and_time() {
        let at = chrono::Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap();
        let txn = TransactionRecord::new("Abebe", "Euro (EUR)", TransactionType::Sell, dec("5"))
            .with_date_and_time(at);

        assert_eq!(txn.date_and_time, Some(at));
    }

    #[test]
    fn test_autoname() {
        let mut txn = TransactionRecord::new("Abebe", "US Dollar (USD)", TransactionType::Sell, dec("250.50"));
        txn.autoname("ETB").unwrap();

        assert_eq!(txn.name.as_deref(), Some("USD/ETB - Amount: 250.50"));
        assert!(!txn.is_new());
    }

    #[test]
    fn test_autoname_invalid_currency() {
        let mut txn = TransactionRecord::new("Abebe", "Dollar", TransactionType::Buy, dec("1"));

        assert!(matches!(
            txn.autoname("ETB"),
            Err(ForexError::InvalidCurrencyLabel(_))
        ));
        assert!(txn.is_new());
    }

    #[test]
    fn test_autoname_requires_quote_currency() {
        let mut txn = TransactionRecord::new("Abebe", "Euro (EUR)", TransactionType::Buy, dec("1"));
        assert!(matches!(txn.autoname(" "), Err(ForexError::MissingField(_))));
    }

    #[test]
    fn test_quote_amount() {
        let mut txn = TransactionRecord::new("Abebe", "Euro (EUR)", TransactionType::Buy, dec("10"));
        txn.exchange_rate = Some(dec("136.5000"));

        assert_eq!(txn.quote_amount().unwrap(), Some(dec("1365")));
    }

    #[test]
    fn test_quote_amount_overflow() {
        let mut txn = TransactionRecord::new("Abebe", "Euro (EUR)", TransactionType::Buy, Decimal::MAX);
        txn.exchange_rate = Some(dec("136.0000"));

        assert!(matches!(
            txn.quote_amount(),
            Err(ForexError::AmountOverflow { .. })
        ));
    }
}
