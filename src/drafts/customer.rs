//! Customer Draft
//!
//! Form values for creating or editing a customer.

use chrono::{DateTime, Utc};
use remote_collection::{optional_calendar_date, parse_date, Draft, DraftError};
use serde::Serialize;

use crate::models::Customer;

/// In-progress customer form values
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerDraft {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: String,
    pub email: String,
    /// `YYYY-MM-DD` or empty
    pub date_of_birth: String,
    pub home_address: String,
    pub flagged: bool,
}

impl Default for CustomerDraft {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            middle_name: String::new(),
            email: String::new(),
            date_of_birth: String::new(),
            home_address: String::new(),
            flagged: true,
        }
    }
}

/// One field edit: which field, and its new value
#[derive(Debug, Clone, PartialEq)]
pub enum CustomerEdit {
    FirstName(String),
    LastName(String),
    MiddleName(String),
    Email(String),
    DateOfBirth(String),
    HomeAddress(String),
    Flagged(bool),
}

/// Body of `POST /customers` and `PATCH /customers/:id`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPayload {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<DateTime<Utc>>,
    pub home_address: String,
    #[serde(rename = "isMatricNo_23120112027")]
    pub flagged: bool,
}

impl Draft for CustomerDraft {
    type Record = Customer;
    type Edit = CustomerEdit;

    fn from_record(customer: &Customer) -> Self {
        Self {
            first_name: customer.first_name.clone(),
            last_name: customer.last_name.clone(),
            middle_name: customer.middle_name.clone().unwrap_or_default(),
            email: customer.email.clone(),
            date_of_birth: optional_calendar_date(customer.date_of_birth.as_deref()),
            home_address: customer.home_address.clone().unwrap_or_default(),
            flagged: customer.flagged,
        }
    }

    fn apply(&mut self, edit: CustomerEdit) {
        match edit {
            CustomerEdit::FirstName(v) => self.first_name = v,
            CustomerEdit::LastName(v) => self.last_name = v,
            CustomerEdit::MiddleName(v) => self.middle_name = v,
            CustomerEdit::Email(v) => self.email = v,
            CustomerEdit::DateOfBirth(v) => self.date_of_birth = v,
            CustomerEdit::HomeAddress(v) => self.home_address = v,
            CustomerEdit::Flagged(v) => self.flagged = v,
        }
    }
}

impl CustomerDraft {
    pub fn to_payload(&self) -> Result<CustomerPayload, DraftError> {
        Ok(CustomerPayload {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            middle_name: self.middle_name.clone(),
            email: self.email.clone(),
            date_of_birth: parse_date("Date of birth", &self.date_of_birth)?,
            home_address: self.home_address.clone(),
            flagged: self.flagged,
        })
    }
}
