use crate::error::Result;
use crate::model::BusinessInfo;
use crate::store::{JsonStore, BUSINESS_INFO};

/// Singleton repository for the business profile.
pub struct BusinessRepo<'a> {
    store: &'a JsonStore,
}

impl<'a> BusinessRepo<'a> {
    pub fn new(store: &'a JsonStore) -> Self {
        Self { store }
    }

    pub fn get(&self) -> Result<BusinessInfo> {
        self.store.read(BUSINESS_INFO)
    }

    pub fn update(&self, info: &BusinessInfo) -> Result<()> {
        self.store.write(BUSINESS_INFO, info)
    }
}
