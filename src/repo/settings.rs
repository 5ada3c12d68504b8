use crate::error::Result;
use crate::model::Settings;
use crate::store::{JsonStore, SETTINGS};

/// Singleton repository for application settings. Documents written before
/// the `colorTemplate` field existed decode with the default palette id
/// filled in; the backfilled value is only persisted when settings are next
/// saved explicitly.
pub struct SettingsRepo<'a> {
    store: &'a JsonStore,
}

impl<'a> SettingsRepo<'a> {
    pub fn new(store: &'a JsonStore) -> Self {
        Self { store }
    }

    pub fn get(&self) -> Result<Settings> {
        self.store.read(SETTINGS)
    }

    pub fn update(&self, settings: &Settings) -> Result<()> {
        self.store.write(SETTINGS, settings)
    }
}
