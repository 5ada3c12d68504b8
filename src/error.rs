use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Data directory not found at {0}. Run 'invoicely init' to create it.")]
    DataDirNotFound(PathBuf),

    #[error("Data directory already exists at {0}")]
    AlreadyInitialized(PathBuf),

    #[error("Failed to read {path}: {source}")]
    ReadStore {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    ParseStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write {path}: {source}")]
    WriteStore {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Customer '{0}' not found")]
    CustomerNotFound(String),

    #[error("Invoice '{0}' not found")]
    InvoiceNotFound(String),

    #[error("Invoice number must not be empty")]
    EmptyInvoiceNumber,

    #[error("Invoice number '{0}' is already taken")]
    DuplicateInvoiceNumber(String),

    #[error("Invalid item format '{0}'. Expected 'name:quantity:rate' (e.g., 'Consulting:8:150')")]
    InvalidItemFormat(String),

    #[error("Invalid quantity '{qty}' for item '{item}': {reason}")]
    InvalidQuantity {
        item: String,
        qty: String,
        reason: String,
    },

    #[error("Invalid rate '{rate}' for item '{item}': {reason}")]
    InvalidRate {
        item: String,
        rate: String,
        reason: String,
    },

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD.")]
    InvalidDate(String),

    #[error("Invalid status '{0}'. Use 'draft', 'sent', 'paid', or 'overdue'.")]
    InvalidStatus(String),

    #[error("No items specified. Use --item <name>:<quantity>:<rate> to add line items.")]
    NoItems,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
