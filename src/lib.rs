pub mod dashboard;
pub mod error;
pub mod model;
pub mod numbering;
pub mod repo;
pub mod store;
pub mod totals;

pub use error::{Error, Result};
pub use model::{Address, BusinessInfo, Customer, Invoice, InvoiceItem, InvoiceStatus, Settings, Tax};
pub use numbering::NumberingService;
pub use repo::{BusinessRepo, CustomerRepo, InvoiceRepo, SettingsRepo};
pub use store::JsonStore;
pub use totals::{compute_totals, format_money, Totals};
