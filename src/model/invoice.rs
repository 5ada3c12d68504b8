use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{BusinessInfo, Customer};
use crate::error::Error;

/// A line item on an invoice. Owned by its parent invoice; `amount` is
/// always `quantity * rate` and is only set through [`InvoiceItem::new`].
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItem {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub quantity: u32,
    pub rate: f64,
    pub amount: f64,
}

impl InvoiceItem {
    pub fn new(name: impl Into<String>, description: Option<String>, quantity: u32, rate: f64) -> Self {
        Self {
            id: format!("item-{}", uuid::Uuid::new_v4()),
            name: name.into(),
            description,
            quantity,
            rate,
            amount: quantity as f64 * rate,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Tax {
    pub rate: f64,
    pub amount: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
    Overdue,
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InvoiceStatus::Draft => "draft",
            InvoiceStatus::Sent => "sent",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Overdue => "overdue",
        };
        f.write_str(s)
    }
}

impl FromStr for InvoiceStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(InvoiceStatus::Draft),
            "sent" => Ok(InvoiceStatus::Sent),
            "paid" => Ok(InvoiceStatus::Paid),
            "overdue" => Ok(InvoiceStatus::Overdue),
            other => Err(Error::InvalidStatus(other.to_string())),
        }
    }
}

/// An invoice. The `customer` and `business_info` fields are snapshots taken
/// at save time; editing or deleting the live records later does not touch
/// invoices already written.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub invoice_number: String,
    pub invoice_date: NaiveDate,
    pub due_date: NaiveDate,
    pub customer_id: String,
    pub customer: Customer,
    pub business_info: BusinessInfo,
    pub items: Vec<InvoiceItem>,
    pub subtotal: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax: Option<Tax>,
    pub total: f64,
    pub status: InvoiceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
