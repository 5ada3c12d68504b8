mod business;
mod customers;
mod invoices;
mod settings;

pub use business::BusinessRepo;
pub use customers::{CustomerPatch, CustomerRepo, NewCustomer};
pub use invoices::{InvoicePatch, InvoiceRepo, NewInvoice};
pub use settings::SettingsRepo;
