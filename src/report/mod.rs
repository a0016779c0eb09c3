//! Report contracts - filters, columns and the registry the host reads
//!
//! Reports are executed by the host application. This module only declares
//! what each report accepts and returns, and checks submitted filter values
//! against those declarations.

pub mod builtin;
pub mod columns;
pub mod filters;
pub mod registry;
pub mod values;

pub use builtin::{PROFIT_AND_LOSS_ANALYSIS, TOP_BUYERS, TOP_CURRENCIES};
pub use columns::{ColumnSpec, ColumnType};
pub use filters::{FieldType, FilterSpec, SelectOptions};
pub use registry::{ReportDefinition, ReportRegistry};
pub use values::{parse_datetime, FilterValue, FilterValues};
