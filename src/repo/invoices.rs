use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::error::Result;
use crate::model::{BusinessInfo, Customer, Invoice, InvoiceItem, InvoiceStatus, Tax};
use crate::store::{JsonStore, INVOICES};
use crate::totals::compute_totals;

/// Invoice fields minus the server-assigned identity and timestamps. The
/// customer and business snapshots are embedded as given and frozen from
/// then on.
#[derive(Debug, Clone)]
pub struct NewInvoice {
    pub invoice_number: String,
    pub invoice_date: NaiveDate,
    pub due_date: NaiveDate,
    pub customer_id: String,
    pub customer: Customer,
    pub business_info: BusinessInfo,
    pub items: Vec<InvoiceItem>,
    pub subtotal: f64,
    pub tax: Option<Tax>,
    pub total: f64,
    pub status: InvoiceStatus,
    pub notes: Option<String>,
}

/// Partial update. Absent fields are left unchanged; `items` replaces the
/// whole item list. A patch that touches `items` or `tax_rate` recomputes
/// subtotal, tax and total so they never drift from the line items.
#[derive(Debug, Clone, Default)]
pub struct InvoicePatch {
    pub invoice_number: Option<String>,
    pub invoice_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub items: Option<Vec<InvoiceItem>>,
    pub tax_rate: Option<f64>,
    pub status: Option<InvoiceStatus>,
    pub notes: Option<String>,
}

pub struct InvoiceRepo<'a> {
    store: &'a JsonStore,
}

impl<'a> InvoiceRepo<'a> {
    pub fn new(store: &'a JsonStore) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Result<Vec<Invoice>> {
        self.store.read(INVOICES)
    }

    pub fn get(&self, id: &str) -> Result<Option<Invoice>> {
        let invoices = self.list()?;
        Ok(invoices.into_iter().find(|i| i.id == id))
    }

    pub fn create(&self, input: NewInvoice) -> Result<Invoice> {
        let mut invoices = self.list()?;
        let now = Utc::now();
        let invoice = Invoice {
            id: format!("invoice-{}", Uuid::new_v4()),
            invoice_number: input.invoice_number,
            invoice_date: input.invoice_date,
            due_date: input.due_date,
            customer_id: input.customer_id,
            customer: input.customer,
            business_info: input.business_info,
            items: input.items,
            subtotal: input.subtotal,
            tax: input.tax,
            total: input.total,
            status: input.status,
            notes: input.notes,
            created_at: now,
            updated_at: now,
        };
        invoices.push(invoice.clone());
        self.store.write(INVOICES, &invoices)?;
        Ok(invoice)
    }

    /// Merge `patch` over the invoice with the given id. Returns `Ok(None)`
    /// without writing when no such invoice exists; never creates one.
    pub fn update(&self, id: &str, patch: InvoicePatch) -> Result<Option<Invoice>> {
        let mut invoices = self.list()?;
        let Some(invoice) = invoices.iter_mut().find(|i| i.id == id) else {
            return Ok(None);
        };

        let recompute = patch.items.is_some() || patch.tax_rate.is_some();

        if let Some(number) = patch.invoice_number {
            invoice.invoice_number = number;
        }
        if let Some(date) = patch.invoice_date {
            invoice.invoice_date = date;
        }
        if let Some(due) = patch.due_date {
            invoice.due_date = due;
        }
        if let Some(items) = patch.items {
            invoice.items = items;
        }
        if let Some(status) = patch.status {
            invoice.status = status;
        }
        if let Some(notes) = patch.notes {
            invoice.notes = Some(notes);
        }

        if recompute {
            let rate = patch
                .tax_rate
                .or_else(|| invoice.tax.as_ref().map(|t| t.rate))
                .unwrap_or(0.0);
            let totals = compute_totals(&invoice.items, rate);
            invoice.subtotal = totals.subtotal;
            invoice.tax = if rate > 0.0 {
                Some(Tax {
                    rate,
                    amount: totals.tax,
                })
            } else {
                None
            };
            invoice.total = totals.total;
        }

        invoice.updated_at = Utc::now();

        let updated = invoice.clone();
        self.store.write(INVOICES, &invoices)?;
        Ok(Some(updated))
    }

    /// Remove the invoice with the given id. Returns `Ok(false)` without
    /// writing when no such invoice exists.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let invoices = self.list()?;
        let remaining: Vec<Invoice> = invoices.iter().filter(|i| i.id != id).cloned().collect();
        if remaining.len() == invoices.len() {
            return Ok(false);
        }
        self.store.write(INVOICES, &remaining)?;
        Ok(true)
    }
}
