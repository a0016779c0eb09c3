//! Checking user-submitted filter values against a report contract

use super::builtin::{FROM_DATE, TO_DATE};
use super::filters::FieldType;
use super::registry::ReportDefinition;
use crate::error::{ForexError, Result};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::collections::BTreeMap;

const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A checked filter value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FilterValue {
    Link(String),
    Select(String),
    Datetime(NaiveDateTime),
}

impl FilterValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FilterValue::Link(s) | FilterValue::Select(s) => Some(s),
            FilterValue::Datetime(_) => None,
        }
    }

    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            FilterValue::Datetime(dt) => Some(*dt),
            _ => None,
        }
    }
}

/// Filter values ready to hand to the report engine. Unset filters are
/// absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FilterValues {
    values: BTreeMap<String, FilterValue>,
}

impl FilterValues {
    pub fn get(&self, field_name: &str) -> Option<&FilterValue> {
        self.values.get(field_name)
    }

    pub fn get_str(&self, field_name: &str) -> Option<&str> {
        self.get(field_name).and_then(FilterValue::as_str)
    }

    pub fn get_datetime(&self, field_name: &str) -> Option<NaiveDateTime> {
        self.get(field_name).and_then(FilterValue::as_datetime)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Parse `YYYY-MM-DD HH:MM:SS` (fractions and a `T` separator accepted) or a
/// bare `YYYY-MM-DD`, which means midnight.
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, DATE_FORMAT)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

impl ReportDefinition {
    /// Check raw `field -> value` pairs against this report's filters.
    ///
    /// Empty strings mean unset. Select values must match an option exactly;
    /// Link and Datetime values are trimmed. Select defaults fill unset
    /// Select filters.
    pub fn validate<I, K, V>(&self, raw: I) -> Result<FilterValues>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut values = BTreeMap::new();
        let mut given: Vec<String> = Vec::new();

        for (key, value) in raw {
            let (key, value) = (key.as_ref(), value.as_ref());

            let filter = self.filter(key).ok_or_else(|| {
                log::warn!("Unknown filter '{}' submitted to '{}'", key, self.name());
                ForexError::UnknownFilter {
                    report: self.name().to_string(),
                    field: key.to_string(),
                }
            })?;

            if given.iter().any(|g| g == key) {
                return Err(invalid(key, value, "given more than once"));
            }
            given.push(key.to_string());

            let checked = match &filter.field_type {
                FieldType::Select(options) => {
                    if !options.allows(value) {
                        log::warn!("Rejected value '{}' for select filter '{}'", value, key);
                        return Err(invalid(
                            key,
                            value,
                            &format!("expected one of {:?}", options.allowed_values()),
                        ));
                    }
                    if value.is_empty() {
                        None
                    } else {
                        Some(FilterValue::Select(value.to_string()))
                    }
                }
                _ if value.trim().is_empty() => None,
                FieldType::Link(_) => Some(FilterValue::Link(value.trim().to_string())),
                FieldType::Datetime => {
                    let dt = parse_datetime(value.trim())
                        .ok_or_else(|| invalid(key, value, "expected YYYY-MM-DD [HH:MM:SS]"))?;
                    Some(FilterValue::Datetime(dt))
                }
            };

            if let Some(checked) = checked {
                values.insert(key.to_string(), checked);
            }
        }

        for filter in self.filters() {
            if let (FieldType::Select(_), Some(default)) = (&filter.field_type, &filter.default) {
                if !default.is_empty() && !values.contains_key(&filter.field_name) {
                    values.insert(
                        filter.field_name.clone(),
                        FilterValue::Select(default.clone()),
                    );
                }
            }
        }

        let values = FilterValues { values };
        if let (Some(from), Some(to)) = (values.get_datetime(FROM_DATE), values.get_datetime(TO_DATE)) {
            if from > to {
                return Err(ForexError::InvalidDateRange {
                    from: from.to_string(),
                    to: to.to_string(),
                });
            }
        }

        Ok(values)
    }
}

fn invalid(field: &str, value: &str, reason: &str) -> ForexError {
    ForexError::InvalidFilterValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
