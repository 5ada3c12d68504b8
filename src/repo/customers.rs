use chrono::Utc;
use uuid::Uuid;

use crate::error::Result;
use crate::model::{Address, Customer};
use crate::store::{JsonStore, CUSTOMERS};

/// Customer fields minus the server-assigned identity and timestamps.
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub name: String,
    pub company_name: Option<String>,
    pub address: Address,
    pub email: String,
    pub phone: Option<String>,
}

/// Partial update. Absent fields are left unchanged; `address` replaces the
/// whole nested object when present.
#[derive(Debug, Clone, Default)]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub company_name: Option<String>,
    pub address: Option<Address>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

pub struct CustomerRepo<'a> {
    store: &'a JsonStore,
}

impl<'a> CustomerRepo<'a> {
    pub fn new(store: &'a JsonStore) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Result<Vec<Customer>> {
        self.store.read(CUSTOMERS)
    }

    pub fn get(&self, id: &str) -> Result<Option<Customer>> {
        let customers = self.list()?;
        Ok(customers.into_iter().find(|c| c.id == id))
    }

    pub fn create(&self, input: NewCustomer) -> Result<Customer> {
        let mut customers = self.list()?;
        let now = Utc::now();
        let customer = Customer {
            id: format!("customer-{}", Uuid::new_v4()),
            name: input.name,
            company_name: input.company_name,
            address: input.address,
            email: input.email,
            phone: input.phone,
            created_at: now,
            updated_at: now,
        };
        customers.push(customer.clone());
        self.store.write(CUSTOMERS, &customers)?;
        Ok(customer)
    }

    /// Merge `patch` over the customer with the given id. Returns `Ok(None)`
    /// without writing when no such customer exists; never creates one.
    pub fn update(&self, id: &str, patch: CustomerPatch) -> Result<Option<Customer>> {
        let mut customers = self.list()?;
        let Some(customer) = customers.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };

        if let Some(name) = patch.name {
            customer.name = name;
        }
        if let Some(company_name) = patch.company_name {
            customer.company_name = Some(company_name);
        }
        if let Some(address) = patch.address {
            customer.address = address;
        }
        if let Some(email) = patch.email {
            customer.email = email;
        }
        if let Some(phone) = patch.phone {
            customer.phone = Some(phone);
        }
        customer.updated_at = Utc::now();

        let updated = customer.clone();
        self.store.write(CUSTOMERS, &customers)?;
        Ok(Some(updated))
    }

    /// Remove the customer with the given id. Returns `Ok(false)` without
    /// writing when no such customer exists.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let customers = self.list()?;
        let remaining: Vec<Customer> = customers.iter().filter(|c| c.id != id).cloned().collect();
        if remaining.len() == customers.len() {
            return Ok(false);
        }
        self.store.write(CUSTOMERS, &remaining)?;
        Ok(true)
    }
}
