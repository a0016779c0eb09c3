//! Error types for the forex desk

use thiserror::Error;

/// Main error type for forex_management
#[derive(Error, Debug)]
pub enum ForexError {
    #[error("Invalid rate band: low {low}, high {high}: {reason}")]
    InvalidRateBand {
        low: String,
        high: String,
        reason: String,
    },

    #[error("Report already registered: {0}")]
    DuplicateReport(String),

    #[error("Duplicate filter '{field}' in report '{report}'")]
    DuplicateFilter { report: String, field: String },

    #[error("Report not found: {0}")]
    ReportNotFound(String),

    #[error("Unknown filter '{field}' for report '{report}'")]
    UnknownFilter { report: String, field: String },

    #[error("Invalid value '{value}' for filter '{field}': {reason}")]
    InvalidFilterValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid date range: from {from} is after to {to}")]
    InvalidDateRange { from: String, to: String },

    #[error("Default '{default}' of filter '{field}' is not one of its options")]
    InvalidSelectDefault { field: String, default: String },

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid currency label: {0}")]
    InvalidCurrencyLabel(String),

    #[error("No record context for '{doctype}' event {event}")]
    MissingRecordContext { doctype: String, event: String },

    #[error("Form script already registered for doctype: {0}")]
    DuplicateFormScript(String),

    #[error("Amount {amount} at rate {rate} overflows")]
    AmountOverflow { amount: String, rate: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

/// Result type alias for forex_management operations
pub type Result<T> = std::result::Result<T, ForexError>;
