//! Report definitions and the registry the host reads them from

use super::columns::ColumnSpec;
use super::filters::{FieldType, FilterSpec};
use crate::error::{ForexError, Result};
use crate::i18n::Translator;
use hashbrown::HashMap;
use serde::Serialize;
use std::collections::HashSet;

/// Validated, immutable report contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportDefinition {
    name: String,
    filters: Vec<FilterSpec>,
    columns: Vec<ColumnSpec>,
}

impl ReportDefinition {
    /// Build a definition.
    ///
    /// Filter names must be unique, column names must be unique and a
    /// Select default must be one of its options.
    pub fn new(
        name: impl Into<String>,
        filters: Vec<FilterSpec>,
        columns: Vec<ColumnSpec>,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ForexError::MissingField("report name".to_string()));
        }

        let mut seen = HashSet::new();
        for filter in &filters {
            if filter.field_name.is_empty() {
                return Err(ForexError::MissingField(format!("filter name in '{}'", name)));
            }
            if !seen.insert(filter.field_name.as_str()) {
                log::warn!("Rejected report '{}': duplicate filter '{}'", name, filter.field_name);
                return Err(ForexError::DuplicateFilter {
                    report: name.clone(),
                    field: filter.field_name.clone(),
                });
            }
            if let (FieldType::Select(options), Some(default)) = (&filter.field_type, &filter.default) {
                if !options.allows(default) {
                    return Err(ForexError::InvalidSelectDefault {
                        field: filter.field_name.clone(),
                        default: default.clone(),
                    });
                }
            }
        }

        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.field_name.as_str()) {
                return Err(ForexError::ParseError(format!(
                    "Duplicate column '{}' in report '{}'",
                    column.field_name, name
                )));
            }
        }

        Ok(Self {
            name,
            filters,
            columns,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Filters in declaration order
    pub fn filters(&self) -> &[FilterSpec] {
        &self.filters
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    pub fn filter(&self, field_name: &str) -> Option<&FilterSpec> {
        self.filters.iter().find(|f| f.field_name == field_name)
    }

    /// Filters with their labels passed through `translator`
    pub fn localized_filters(&self, translator: &dyn Translator) -> Vec<FilterSpec> {
        self.filters
            .iter()
            .map(|filter| FilterSpec {
                label: translator.translate(&filter.label).into_owned(),
                ..filter.clone()
            })
            .collect()
    }

    /// Columns with their labels passed through `translator`
    pub fn localized_columns(&self, translator: &dyn Translator) -> Vec<ColumnSpec> {
        self.columns
            .iter()
            .map(|column| ColumnSpec {
                label: translator.translate(&column.label).into_owned(),
                ..column.clone()
            })
            .collect()
    }
}

/// Registry of report contracts, one per report name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportRegistry {
    reports: Vec<ReportDefinition>,
    index: HashMap<String, usize>,
}

impl ReportRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the desk's built-in reports
    pub fn builtin() -> Result<Self> {
        let mut registry = Self::new();
        for report in super::builtin::all()? {
            registry.register(report)?;
        }
        Ok(registry)
    }

    /// Register a report. A name can only be registered once.
    pub fn register(&mut self, report: ReportDefinition) -> Result<()> {
        if self.index.contains_key(report.name()) {
            log::warn!("Rejected duplicate registration of report '{}'", report.name());
            return Err(ForexError::DuplicateReport(report.name().to_string()));
        }

        log::info!(
            "Registered report '{}' with {} filters",
            report.name(),
            report.filters().len()
        );
        self.index.insert(report.name().to_string(), self.reports.len());
        self.reports.push(report);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&ReportDefinition> {
        self.index.get(name).map(|&i| &self.reports[i])
    }

    /// Filter contract of a report
    pub fn filters(&self, name: &str) -> Result<&[FilterSpec]> {
        self.get(name)
            .map(ReportDefinition::filters)
            .ok_or_else(|| ForexError::ReportNotFound(name.to_string()))
    }

    /// Report names in registration order
    pub fn names(&self) -> Vec<&str> {
        self.reports.iter().map(ReportDefinition::name).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReportDefinition> {
        self.reports.iter()
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}
