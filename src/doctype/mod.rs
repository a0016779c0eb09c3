//! Desk documents - customers and FX transactions

pub mod customer;
pub mod transaction;

pub use customer::Customer;
pub use transaction::TransactionRecord;
