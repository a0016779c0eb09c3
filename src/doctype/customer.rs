//! Customer document naming

use crate::error::{ForexError, Result};
use serde::{Deserialize, Serialize};

/// Desk customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Document name, set by autoname
    pub name: Option<String>,
    pub first_name: String,
    pub last_name: Option<String>,
    /// Normalized display name, set before save
    pub full_name: Option<String>,
}

impl Customer {
    pub fn new(first_name: impl Into<String>, last_name: Option<String>) -> Self {
        Self {
            name: None,
            first_name: first_name.into(),
            last_name,
            full_name: None,
        }
    }

    /// Trim and title-case both name parts, then join them.
    ///
    /// The stored name parts are normalized in place. A blank last name is
    /// dropped.
    pub fn full_name(&mut self) -> Result<String> {
        let first = title_case(self.first_name.trim());
        if first.is_empty() {
            return Err(ForexError::MissingField("first_name".to_string()));
        }
        self.first_name = first;

        self.last_name = self
            .last_name
            .as_deref()
            .map(|last| title_case(last.trim()))
            .filter(|last| !last.is_empty());

        Ok(match &self.last_name {
            Some(last) => format!("{} {}", self.first_name, last),
            None => self.first_name.clone(),
        })
    }

    pub fn before_save(&mut self) -> Result<()> {
        self.full_name = Some(self.full_name()?);
        Ok(())
    }

    pub fn autoname(&mut self) -> Result<()> {
        let name = self.full_name()?;
        log::debug!("Autonamed customer '{}'", name);
        self.name = Some(name);
        Ok(())
    }
}

/// Uppercase the first letter of every alphabetic run and lowercase the rest
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("abebe"), "Abebe");
        assert_eq!(title_case("ABEBE KEBEDE"), "Abebe Kebede");
        assert_eq!(title_case("o'neil-smith"), "O'Neil-Smith");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_full_name() {
        let mut customer = Customer::new("  abebe ", Some(" KEBEDE".to_string()));
        assert_eq!(customer.full_name().unwrap(), "Abebe Kebede");
        assert_eq!(customer.first_name, "Abebe");
        assert_eq!(customer.last_name.as_deref(), Some("Kebede"));
    }

    #[test]
    fn test_full_name_without_last_name() {
        let mut customer = Customer::new("sara", None);
        assert_eq!(customer.full_name().unwrap(), "Sara");

        let mut blank = Customer::new("sara", Some("   ".to_string()));
        assert_eq!(blank.full_name().unwrap(), "Sara");
        assert_eq!(blank.last_name, None);
    }

    #[test]
    fn test_empty_first_name() {
        let mut customer = Customer::new("   ", Some("Kebede".to_string()));
        assert!(matches!(
            customer.full_name(),
            Err(ForexError::MissingField(field)) if field == "first_name"
        ));
    }

    #[test]
    fn test_before_save_and_autoname() {
        let mut customer = Customer::new("hana", Some("tesfaye".to_string()));
        customer.before_save().unwrap();
        customer.autoname().unwrap();

        assert_eq!(customer.full_name.as_deref(), Some("Hana Tesfaye"));
        assert_eq!(customer.name.as_deref(), Some("Hana Tesfaye"));
    }
}
