mod business;
mod customer;
mod invoice;
mod settings;

pub use business::{Address, BusinessInfo};
pub use customer::Customer;
pub use invoice::{Invoice, InvoiceItem, InvoiceStatus, Tax};
pub use settings::{Settings, DEFAULT_COLOR_TEMPLATE};
