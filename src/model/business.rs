use serde::{Deserialize, Serialize};

/// Postal address shared by the business profile and customers.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub line1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

/// The business profile. A singleton document, pre-seeded by `init` and
/// only ever replaced wholesale.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BusinessInfo {
    pub id: String,
    pub name: String,
    pub address: Address,
    pub email: String,
    pub phone: String,
}
