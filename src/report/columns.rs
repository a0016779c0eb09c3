//! Report column declarations

use serde::{Deserialize, Serialize};

/// Field type of a report column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    Data,
    Link,
    Value,
    Float,
}

/// One output column of a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    #[serde(rename = "fieldname")]
    pub field_name: String,
    pub label: String,
    #[serde(rename = "fieldtype")]
    pub field_type: ColumnType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<u8>,
}

impl ColumnSpec {
    pub fn new(field_name: impl Into<String>, label: impl Into<String>, field_type: ColumnType) -> Self {
        Self {
            field_name: field_name.into(),
            label: label.into(),
            field_type,
            options: None,
            width: None,
            precision: None,
        }
    }

    pub fn with_options(mut self, options: impl Into<String>) -> Self {
        self.options = Some(options.into());
        self
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_precision(mut self, precision: u8) -> Self {
        self.precision = Some(precision);
        self
    }
}
