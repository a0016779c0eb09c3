//! Built-in desk reports

use super::columns::{ColumnSpec, ColumnType};
use super::filters::{FilterSpec, SelectOptions};
use super::registry::ReportDefinition;
use crate::error::Result;
use crate::types::TransactionType;

pub const PROFIT_AND_LOSS_ANALYSIS: &str = "Profit & Loss Analysis";
pub const TOP_BUYERS: &str = "Top Buyers";
pub const TOP_CURRENCIES: &str = "Top Currencies";

/// Doctype linked by customer filters
pub const CUSTOMER_DOCTYPE: &str = "Customer";
/// Doctype linked by currency filters
pub const FX_CURRENCY_DOCTYPE: &str = "FXCurrency";

pub const FROM_DATE: &str = "from_date";
pub const TO_DATE: &str = "to_date";

fn customer_filter() -> FilterSpec {
    FilterSpec::link("customer", "Customer", CUSTOMER_DOCTYPE)
}

fn currency_filter() -> FilterSpec {
    FilterSpec::link("currency", "Currency", FX_CURRENCY_DOCTYPE)
}

fn date_range_filters() -> [FilterSpec; 2] {
    [
        FilterSpec::datetime(FROM_DATE, "From Date"),
        FilterSpec::datetime(TO_DATE, "To Date"),
    ]
}

pub fn profit_and_loss_analysis() -> Result<ReportDefinition> {
    let mut filters = vec![customer_filter()];
    filters.extend(date_range_filters());

    ReportDefinition::new(
        PROFIT_AND_LOSS_ANALYSIS,
        filters,
        vec![
            ColumnSpec::new("customer", "Customer", ColumnType::Data).with_width(150),
            ColumnSpec::new("amount_bought", "Amount (ETB) Bought", ColumnType::Value),
            ColumnSpec::new("amount_sold", "Amount (ETB) Sold", ColumnType::Value),
            ColumnSpec::new("profit_loss", "P&L", ColumnType::Value),
        ],
    )
}

pub fn top_buyers() -> Result<ReportDefinition> {
    let mut filters = vec![customer_filter(), currency_filter()];
    filters.extend(date_range_filters());

    ReportDefinition::new(
        TOP_BUYERS,
        filters,
        vec![
            ColumnSpec::new("customer", "Customer", ColumnType::Link)
                .with_options(CUSTOMER_DOCTYPE)
                .with_width(130),
            ColumnSpec::new("amount_fx", "FX Amount", ColumnType::Value)
                .with_options("Amount")
                .with_width(100)
                .with_precision(2),
            ColumnSpec::new("amount_etb", "Amount (ETB)", ColumnType::Value)
                .with_options("Amount")
                .with_width(120)
                .with_precision(2),
            ColumnSpec::new("currency", "Currency", ColumnType::Data).with_options("Currency"),
            ColumnSpec::new("exchange_rate", "Rate", ColumnType::Float)
                .with_options("Exchange Rate"),
        ],
    )
}

pub fn top_currencies() -> Result<ReportDefinition> {
    let transaction_types = SelectOptions::new(TransactionType::all().map(|t| t.as_str()), true)?;

    let mut filters = vec![
        currency_filter(),
        FilterSpec::select("transaction_type", "Transaction Type", transaction_types).with_default(""),
    ];
    filters.extend(date_range_filters());

    ReportDefinition::new(
        TOP_CURRENCIES,
        filters,
        vec![
            ColumnSpec::new("currency", "Currency", ColumnType::Data)
                .with_options("Currency")
                .with_width(200),
            ColumnSpec::new("amount_bought", "Amount Bought", ColumnType::Value)
                .with_options("Amount Bought"),
            ColumnSpec::new("amount_sold", "Amount Sold", ColumnType::Value)
                .with_options("Amount Sold"),
        ],
    )
}

/// Every built-in report, one definition per name
pub fn all() -> Result<Vec<ReportDefinition>> {
    Ok(vec![
        profit_and_loss_analysis()?,
        top_buyers()?,
        top_currencies()?,
    ])
}
