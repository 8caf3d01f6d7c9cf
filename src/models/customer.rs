use serde::{Deserialize, Serialize};
use strum::Display;

/// Enum representing the possible statuses of a customer account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomerStatus {
    Active,
    Inactive,
}

/// A customer receiving export shipments.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Business code identifying the customer, e.g. "CUST001".
    pub id: String,
    pub name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub status: CustomerStatus,
}

impl Customer {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        contact_person: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        status: CustomerStatus,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            contact_person: contact_person.into(),
            email: email.into(),
            phone: phone.into(),
            status,
        }
    }
}
