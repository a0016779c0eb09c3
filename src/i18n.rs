//! Label translation
//!
//! Filter and column labels go through a [`Translator`] before the host
//! renders them. A label without a translation is returned unchanged.

use crate::error::Result;
use hashbrown::HashMap;
use std::borrow::Cow;
use std::fs;
use std::path::Path;

/// Label -> localized text lookup
pub trait Translator: Send + Sync {
    fn translate<'a>(&'a self, text: &'a str) -> Cow<'a, str>;
}

/// Returns every label as-is
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

impl Translator for IdentityTranslator {
    fn translate<'a>(&'a self, text: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(text)
    }
}

/// In-memory translation catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a flat JSON object of `"label": "translation"` pairs
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: HashMap<String, String> = serde_json::from_str(json)?;
        Ok(Self { entries })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let catalog = Self::from_json(&contents)?;
        log::info!(
            "Loaded {} translations from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn insert(&mut self, label: impl Into<String>, translation: impl Into<String>) {
        self.entries.insert(label.into(), translation.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Translator for Catalog {
    fn translate<'a>(&'a self, text: &'a str) -> Cow<'a, str> {
        match self.entries.get(text) {
            Some(translated) => Cow::Borrowed(translated.as_str()),
            None => Cow::Borrowed(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        assert_eq!(IdentityTranslator.translate("From Date"), "From Date");
    }

    #[test]
    fn test_catalog_lookup_and_fallback() {
        let mut catalog = Catalog::new();
        catalog.insert("Customer", "ደንበኛ");

        assert_eq!(catalog.translate("Customer"), "ደንበኛ");
        assert_eq!(catalog.translate("Currency"), "Currency");
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_catalog_from_json() {
        let catalog = Catalog::from_json(r#"{"To Date": "Jusqu'au"}"#).unwrap();
        assert_eq!(catalog.translate("To Date"), "Jusqu'au");
    }

    #[test]
    fn test_catalog_rejects_non_object() {
        assert!(Catalog::from_json("[1, 2]").is_err());
    }
}
