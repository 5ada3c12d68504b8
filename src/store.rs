use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Document names, one per collection.
pub const BUSINESS_INFO: &str = "business-info.json";
pub const CUSTOMERS: &str = "customers.json";
pub const INVOICES: &str = "invoices.json";
pub const SETTINGS: &str = "settings.json";

/// Get the data directory path (~/.invoicely/)
pub fn data_dir() -> Result<PathBuf> {
    // First try XDG-style directories
    if let Some(proj_dirs) = ProjectDirs::from("", "", "invoicely") {
        return Ok(proj_dirs.data_dir().to_path_buf());
    }

    // Fallback to ~/.invoicely/
    let home = dirs_home().ok_or_else(|| {
        Error::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine home directory",
        ))
    })?;

    Ok(home.join(".invoicely"))
}

fn dirs_home() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

/// The record store: maps a collection name to a JSON document on disk.
/// Every write replaces the whole document; there is no incremental path.
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Open a store over an existing data directory.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        if !dir.exists() {
            return Err(Error::DataDirNotFound(dir));
        }
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Load and parse a full document. A missing file or malformed content
    /// is an error for the caller to handle, never a silent default.
    pub fn read<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        let path = self.path(name);
        let content = fs::read_to_string(&path).map_err(|e| Error::ReadStore {
            path: path.clone(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(|e| Error::ParseStore { path, source: e })
    }

    /// Serialize and replace a full document. Writes go to a temp file in
    /// the same directory and rename over the target, so a reader never
    /// observes a half-written document.
    pub fn write<T: Serialize>(&self, name: &str, value: &T) -> Result<()> {
        let path = self.path(name);
        let content = serde_json::to_string_pretty(value).map_err(|e| {
            Error::WriteStore {
                path: path.clone(),
                source: std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()),
            }
        })?;

        let tmp = self.dir.join(format!("{name}.tmp"));
        fs::write(&tmp, content).map_err(|e| Error::WriteStore {
            path: tmp.clone(),
            source: e,
        })?;
        fs::rename(&tmp, &path).map_err(|e| Error::WriteStore { path, source: e })?;
        Ok(())
    }

    /// Create the data directory and seed every collection. Fails if the
    /// directory already exists.
    pub fn init(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        if dir.exists() {
            return Err(Error::AlreadyInitialized(dir));
        }
        fs::create_dir_all(&dir)?;

        let store = Self::new(dir);
        for (name, content) in [
            (BUSINESS_INFO, BUSINESS_INFO_TEMPLATE),
            (CUSTOMERS, CUSTOMERS_TEMPLATE),
            (INVOICES, INVOICES_TEMPLATE),
            (SETTINGS, SETTINGS_TEMPLATE),
        ] {
            fs::write(store.path(name), content)?;
        }
        Ok(store)
    }
}

/// Seed content for business-info.json
pub const BUSINESS_INFO_TEMPLATE: &str = r#"{
  "id": "business-1",
  "name": "Your Business Name",
  "address": {
    "line1": "123 Business Street",
    "city": "San Francisco",
    "state": "CA",
    "country": "USA",
    "postalCode": "94102"
  },
  "email": "billing@yourbusiness.com",
  "phone": "+1-555-123-4567"
}
"#;

/// Seed content for customers.json
pub const CUSTOMERS_TEMPLATE: &str = "[]\n";

/// Seed content for invoices.json
pub const INVOICES_TEMPLATE: &str = "[]\n";

/// Seed content for settings.json
pub const SETTINGS_TEMPLATE: &str = r#"{
  "nextInvoiceNumber": 1,
  "taxRate": 0.0,
  "currency": "USD",
  "colorTemplate": "purple"
}
"#;
