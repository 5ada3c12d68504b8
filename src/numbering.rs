use crate::error::{Error, Result};
use crate::repo::{InvoiceRepo, SettingsRepo};
use crate::store::JsonStore;

/// Allocates human-facing invoice numbers from the counter in settings.
///
/// `allocate_next` is a plain read-increment-write on the settings
/// document: two concurrent invocations can observe the same counter and
/// produce the same number. Acceptable for single-operator use; the save
/// path additionally runs `is_unique` before accepting a number.
pub struct NumberingService<'a> {
    store: &'a JsonStore,
}

impl<'a> NumberingService<'a> {
    pub fn new(store: &'a JsonStore) -> Self {
        Self { store }
    }

    /// Format a counter value as an invoice number (7 -> "A00007").
    pub fn format(counter: u32) -> String {
        format!("A{counter:05}")
    }

    /// Reserve and return the next invoice number, persisting the
    /// incremented counter.
    pub fn allocate_next(&self) -> Result<String> {
        let settings_repo = SettingsRepo::new(self.store);
        let mut settings = settings_repo.get()?;
        let number = Self::format(settings.next_invoice_number);
        settings.next_invoice_number += 1;
        settings_repo.update(&settings)?;
        Ok(number)
    }

    /// Advisory uniqueness check: false when any invoice other than
    /// `exclude_id` already carries `candidate`. Callers must reject the
    /// save themselves; the store does not enforce uniqueness on write.
    pub fn is_unique(&self, candidate: &str, exclude_id: Option<&str>) -> Result<bool> {
        if candidate.is_empty() {
            return Err(Error::EmptyInvoiceNumber);
        }
        let invoices = InvoiceRepo::new(self.store).list()?;
        Ok(!invoices
            .iter()
            .any(|i| i.invoice_number == candidate && Some(i.id.as_str()) != exclude_id))
    }
}
