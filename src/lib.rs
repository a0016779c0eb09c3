//! # forex_management
//!
//! Business layer of a foreign-exchange desk that runs inside a host
//! application framework. The host owns persistence, rendering and report
//! execution. This crate supplies:
//!
//! - exchange-rate assignment for new transactions ([`rate`], [`hooks`])
//! - filter and column contracts for the desk reports ([`report`])
//! - customer and transaction document naming ([`doctype`])
//!
//! ## Example
//!
//! ```rust
//! use forex_management::prelude::*;
//! use rust_decimal::Decimal;
//!
//! let mut host = FormHost::new();
//! host.register(Box::new(TransactionForm::new(RateBand::default(), RngSource::thread())))?;
//!
//! let mut txn = TransactionRecord::new("Abebe", "US Dollar (USD)", TransactionType::Buy, Decimal::from(100));
//! host.dispatch("Transaction", FormEvent::BeforeLoad, Some(&mut txn))?;
//! assert!(txn.exchange_rate.is_some());
//!
//! let reports = ReportRegistry::builtin()?;
//! assert_eq!(reports.filters("Profit & Loss Analysis")?.len(), 3);
//! # Ok::<(), ForexError>(())
//! ```

pub mod config;
pub mod currency;
pub mod doctype;
pub mod error;
pub mod hooks;
pub mod i18n;
pub mod rate;
pub mod report;
pub mod types;

pub mod prelude {
    //! Commonly used types and traits
    pub use crate::config::ForexConfig;
    pub use crate::currency::CurrencyLabel;
    pub use crate::doctype::{Customer, TransactionRecord};
    pub use crate::error::{ForexError, Result};
    pub use crate::hooks::{FormEvent, FormHost, FormScript, TransactionForm};
    pub use crate::i18n::{Catalog, IdentityTranslator, Translator};
    pub use crate::rate::{assign_exchange_rate, RateBand, RateSource, RngSource};
    pub use crate::report::{FieldType, FilterSpec, ReportDefinition, ReportRegistry, SelectOptions};
    pub use crate::types::*;
}
