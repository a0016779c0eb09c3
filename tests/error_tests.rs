//! Error message formatting for the desk error types

use forex_management::error::ForexError;

#[cfg(test)]
mod error_tests {
    use super::*;

    // ========== Contract errors ==========

    #[test]
    fn test_duplicate_report() {
        let err = ForexError::DuplicateReport("Top Buyers".to_string());
        assert_eq!(err.to_string(), "Report already registered: Top Buyers");
    }

    #[test]
    fn test_duplicate_filter() {
        let err = ForexError::DuplicateFilter {
            report: "Top Buyers".to_string(),
            field: "customer".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("Duplicate filter"));
        assert!(msg.contains("customer"));
        assert!(msg.contains("Top Buyers"));
    }

    #[test]
    fn test_invalid_filter_value() {
        let err = ForexError::InvalidFilterValue {
            field: "transaction_type".to_string(),
            value: "SELL".to_string(),
            reason: "expected one of [\"\", \"Buy\", \"Sell\"]".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("transaction_type"));
        assert!(msg.contains("SELL"));
        assert!(msg.contains("Buy"));
    }

    #[test]
    fn test_invalid_date_range() {
        let err = ForexError::InvalidDateRange {
            from: "2025-02-01 00:00:00".to_string(),
            to: "2025-01-01 00:00:00".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "Invalid date range: from 2025-02-01 00:00:00 is after to 2025-01-01 00:00:00"
        );
    }

    // ========== Rate and record errors ==========

    #[test]
    fn test_invalid_rate_band() {
        let err = ForexError::InvalidRateBand {
            low: "137".to_string(),
            high: "135".to_string(),
            reason: "low must be below high".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("137"));
        assert!(msg.contains("135"));
        assert!(msg.contains("low must be below high"));
    }

    #[test]
    fn test_missing_record_context() {
        let err = ForexError::MissingRecordContext {
            doctype: "Transaction".to_string(),
            event: "before_load".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "No record context for 'Transaction' event before_load"
        );
    }

    #[test]
    fn test_amount_overflow() {
        let err = ForexError::AmountOverflow {
            amount: "79228162514264337593543950335".to_string(),
            rate: "136.0000".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("136.0000"));
        assert!(msg.contains("overflows"));
    }

    // ========== Conversions ==========

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "catalog.json");
        let err: ForexError = io.into();

        assert!(matches!(err, ForexError::IoError(_)));
        assert!(err.to_string().contains("catalog.json"));
    }

    #[test]
    fn test_serde_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ForexError = json_err.into();

        assert!(matches!(err, ForexError::SerdeError(_)));
        assert!(err.to_string().starts_with("Serialization error"));
    }
}
