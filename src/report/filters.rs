//! Filter specifications
//!
//! A filter declares one parameter the host collects from the user before
//! running a report. On the wire a filter has the host's flat shape:
//!
//! ```json
//! { "fieldname": "transaction_type", "label": "Transaction Type",
//!   "fieldtype": "Select", "options": "\nBuy\nSell", "default": "" }
//! ```

use crate::error::{ForexError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Allowed values of a Select filter.
///
/// The empty string is the "unset" sentinel and is tracked separately from
/// the real values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOptions {
    values: Vec<String>,
    allow_unset: bool,
}

impl SelectOptions {
    pub fn new<I, S>(values: I, allow_unset: bool) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut collected: Vec<String> = Vec::new();
        for value in values {
            let value = value.into();
            if value.is_empty() {
                return Err(ForexError::ParseError(
                    "Select values must be non-empty, use allow_unset for the blank option"
                        .to_string(),
                ));
            }
            if collected.contains(&value) {
                return Err(ForexError::ParseError(format!(
                    "Duplicate select value: {}",
                    value
                )));
            }
            collected.push(value);
        }

        if collected.is_empty() {
            return Err(ForexError::ParseError(
                "Select filter needs at least one value".to_string(),
            ));
        }

        Ok(Self {
            values: collected,
            allow_unset,
        })
    }

    /// Parse the host's newline-delimited option string. Blank lines stand
    /// for the unset sentinel.
    pub fn parse(options: &str) -> Result<Self> {
        let allow_unset = options.split('\n').any(|line| line.trim().is_empty());
        let values = options
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty());
        Self::new(values, allow_unset)
    }

    /// Whether `value` may be submitted for this filter
    pub fn allows(&self, value: &str) -> bool {
        if value.is_empty() {
            self.allow_unset
        } else {
            self.values.iter().any(|v| v == value)
        }
    }

    /// Non-empty values in declaration order
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Every accepted value, the sentinel first when allowed
    pub fn allowed_values(&self) -> Vec<&str> {
        let sentinel = if self.allow_unset { Some("") } else { None };
        sentinel
            .into_iter()
            .chain(self.values.iter().map(String::as_str))
            .collect()
    }

    /// Host wire form, e.g. `"\nBuy\nSell"`
    pub fn to_options_string(&self) -> String {
        self.allowed_values().join("\n")
    }
}

/// Field type of a filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    /// Reference to another document type
    Link(String),
    Select(SelectOptions),
    Datetime,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Link(_) => "Link",
            FieldType::Select(_) => "Select",
            FieldType::Datetime => "Datetime",
        }
    }

    /// Value of the host's `options` attribute
    pub fn options(&self) -> Option<String> {
        match self {
            FieldType::Link(entity) => Some(entity.clone()),
            FieldType::Select(options) => Some(options.to_options_string()),
            FieldType::Datetime => None,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Link(entity) => write!(f, "Link({})", entity),
            other => f.write_str(other.as_str()),
        }
    }
}

/// One report parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FilterDoc", into = "FilterDoc")]
pub struct FilterSpec {
    pub field_name: String,
    pub label: String,
    pub field_type: FieldType,
    pub default: Option<String>,
}

impl FilterSpec {
    pub fn link(
        field_name: impl Into<String>,
        label: impl Into<String>,
        entity: impl Into<String>,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            label: label.into(),
            field_type: FieldType::Link(entity.into()),
            default: None,
        }
    }

    pub fn datetime(field_name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            label: label.into(),
            field_type: FieldType::Datetime,
            default: None,
        }
    }

    pub fn select(
        field_name: impl Into<String>,
        label: impl Into<String>,
        options: SelectOptions,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            label: label.into(),
            field_type: FieldType::Select(options),
            default: None,
        }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Select options, if this is a Select filter
    pub fn select_options(&self) -> Option<&SelectOptions> {
        match &self.field_type {
            FieldType::Select(options) => Some(options),
            _ => None,
        }
    }
}

/// Host wire shape of a filter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterDoc {
    pub fieldname: String,
    pub label: String,
    pub fieldtype: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl From<FilterSpec> for FilterDoc {
    fn from(spec: FilterSpec) -> Self {
        Self {
            options: spec.field_type.options(),
            fieldtype: spec.field_type.as_str().to_string(),
            fieldname: spec.field_name,
            label: spec.label,
            default: spec.default,
        }
    }
}

impl TryFrom<FilterDoc> for FilterSpec {
    type Error = ForexError;

    fn try_from(doc: FilterDoc) -> Result<Self> {
        let missing_options =
            || ForexError::ParseError(format!("{} filter '{}' needs options", doc.fieldtype, doc.fieldname));

        let field_type = match doc.fieldtype.as_str() {
            "Link" => {
                let entity = doc.options.clone().filter(|o| !o.trim().is_empty());
                FieldType::Link(entity.ok_or_else(missing_options)?)
            }
            "Select" => {
                let options = doc.options.as_deref().ok_or_else(missing_options)?;
                FieldType::Select(SelectOptions::parse(options)?)
            }
            "Datetime" => FieldType::Datetime,
            other => {
                return Err(ForexError::ParseError(format!(
                    "Unsupported field type '{}' for filter '{}'",
                    other, doc.fieldname
                )))
            }
        };

        Ok(Self {
            field_name: doc.fieldname,
            label: doc.label,
            field_type,
            default: doc.default,
        })
    }
}
