//! Form scripts and the host adapter that dispatches lifecycle events
//!
//! The host application calls into the desk at fixed points of a form's
//! lifecycle. [`FormHost`] maps those calls onto registered [`FormScript`]s,
//! one per doctype. Scripts receive the record explicitly; there is no
//! ambient form object.

use crate::doctype::transaction::TRANSACTION_DOCTYPE;
use crate::doctype::TransactionRecord;
use crate::error::{ForexError, Result};
use crate::rate::{assign_exchange_rate, RateBand, RateSource};
use hashbrown::HashMap;
use std::fmt;

/// Form lifecycle points the host reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormEvent {
    /// Form is redrawn
    Refresh,
    /// Record is fetched but not yet shown or editable
    BeforeLoad,
}

impl fmt::Display for FormEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormEvent::Refresh => f.write_str("refresh"),
            FormEvent::BeforeLoad => f.write_str("before_load"),
        }
    }
}

/// Client-side behaviour attached to one doctype's form
pub trait FormScript {
    fn doctype(&self) -> &str;

    fn on_event(&mut self, event: FormEvent, record: &mut TransactionRecord) -> Result<()>;
}

/// Transaction form: fills in a rate before the record is shown
pub struct TransactionForm<S: RateSource> {
    band: RateBand,
    source: S,
}

impl<S: RateSource> TransactionForm<S> {
    pub fn new(band: RateBand, source: S) -> Self {
        Self { band, source }
    }

    pub fn band(&self) -> &RateBand {
        &self.band
    }
}

impl<S: RateSource> FormScript for TransactionForm<S> {
    fn doctype(&self) -> &str {
        TRANSACTION_DOCTYPE
    }

    fn on_event(&mut self, event: FormEvent, record: &mut TransactionRecord) -> Result<()> {
        match event {
            FormEvent::Refresh => {}
            FormEvent::BeforeLoad => {
                *record = assign_exchange_rate(record.clone(), &self.band, &mut self.source);
            }
        }
        Ok(())
    }
}

/// Dispatches host lifecycle events to registered form scripts
#[derive(Default)]
pub struct FormHost {
    scripts: HashMap<String, Box<dyn FormScript>>,
}

impl FormHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a script. Each doctype takes one script.
    pub fn register(&mut self, script: Box<dyn FormScript>) -> Result<()> {
        let doctype = script.doctype().to_string();
        if self.scripts.contains_key(&doctype) {
            return Err(ForexError::DuplicateFormScript(doctype));
        }
        log::info!("Registered form script for '{}'", doctype);
        self.scripts.insert(doctype, script);
        Ok(())
    }

    pub fn has_script(&self, doctype: &str) -> bool {
        self.scripts.contains_key(doctype)
    }

    /// Run the script for `doctype`, if any.
    ///
    /// Doctypes without a script are ignored. A registered script called
    /// without a record fails with `MissingRecordContext`.
    pub fn dispatch(
        &mut self,
        doctype: &str,
        event: FormEvent,
        record: Option<&mut TransactionRecord>,
    ) -> Result<()> {
        let Some(script) = self.scripts.get_mut(doctype) else {
            log::debug!("No form script for '{}', ignoring {}", doctype, event);
            return Ok(());
        };

        let record = record.ok_or_else(|| ForexError::MissingRecordContext {
            doctype: doctype.to_string(),
            event: event.to_string(),
        })?;

        script.on_event(event, record)
    }
}

impl fmt::Debug for FormHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormHost")
            .field("doctypes", &self.scripts.keys().collect::<Vec<_>>())
            .finish()
    }
}
