//! Frontend Models
//!
//! Data structures matching the REST API's customers and orders.

use remote_collection::{optional_calendar_date, Record, RecordId};
use serde::{Deserialize, Serialize};

/// Customer data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: RecordId,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub middle_name: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub home_address: Option<String>,
    #[serde(rename = "isMatricNo_23120112027", default)]
    pub flagged: bool,
    #[serde(default)]
    pub registered_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Customer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Label used in the order form's customer selector
    pub fn option_label(&self) -> String {
        if self.email.is_empty() {
            self.full_name()
        } else {
            format!("{} ({})", self.full_name(), self.email)
        }
    }
}

impl Record for Customer {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

/// Customer summary embedded in an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSummary {
    pub id: RecordId,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
}

/// Order data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: RecordId,
    pub customer_id: RecordId,
    #[serde(default)]
    pub customer: Option<CustomerSummary>,
    #[serde(default)]
    pub order_date: Option<String>,
    #[serde(default)]
    pub menu_items: Vec<String>,
    #[serde(default)]
    pub special_instructions: Option<String>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub next_reservation_date: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Order {
    /// Customer column: embedded name, or "N/A" when the API left it out
    pub fn customer_label(&self) -> String {
        match &self.customer {
            Some(c) => format!("{} {}", c.first_name, c.last_name),
            None => "N/A".to_string(),
        }
    }

    pub fn order_date_label(&self) -> String {
        optional_calendar_date(self.order_date.as_deref())
    }

    pub fn payment_label(&self) -> String {
        match self.payment_method.as_deref() {
            Some(method) if !method.is_empty() => method.to_string(),
            _ => "N/A".to_string(),
        }
    }
}

impl Record for Order {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_from_numeric_api() {
        let json = r#"{
            "id": 7,
            "firstName": "Ada",
            "lastName": "Lovelace",
            "middleName": null,
            "email": "ada@example.com",
            "dateOfBirth": "1990-05-04T00:00:00.000Z",
            "homeAddress": "12 St James's Square",
            "isMatricNo_23120112027": true,
            "registeredAt": "2024-02-01T09:00:00.000Z",
            "createdAt": "2024-02-01T09:00:00.000Z",
            "updatedAt": "2024-02-01T09:00:00.000Z"
        }"#;
        let customer: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(customer.id, RecordId::numeric(7));
        assert_eq!(customer.middle_name, None);
        assert!(customer.flagged);
        assert_eq!(customer.option_label(), "Ada Lovelace (ada@example.com)");
    }

    #[test]
    fn test_customer_tolerates_missing_fields() {
        let customer: Customer = serde_json::from_str(r#"{"id":"c-1","firstName":"Ada"}"#).unwrap();
        assert_eq!(customer.id.as_str(), "c-1");
        assert_eq!(customer.last_name, "");
        assert!(!customer.flagged);
        assert_eq!(customer.option_label(), "Ada ");
    }

    #[test]
    fn test_order_with_embedded_customer() {
        let json = r#"{
            "id": "6f1c",
            "customerId": "c-1",
            "customer": {"id": "c-1", "firstName": "Ada", "lastName": "Lovelace", "email": "ada@example.com"},
            "orderDate": "2024-06-01T18:45:00.000Z",
            "menuItems": ["Burger", "Fries"],
            "paymentMethod": "",
            "createdAt": "2024-06-01T18:45:00.000Z",
            "updatedAt": "2024-06-01T18:45:00.000Z"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.customer_label(), "Ada Lovelace");
        assert_eq!(order.order_date_label(), "2024-06-01");
        assert_eq!(order.payment_label(), "N/A");
        assert_eq!(order.menu_items, vec!["Burger", "Fries"]);
    }

    #[test]
    fn test_order_without_customer() {
        let order: Order = serde_json::from_str(r#"{"id":1,"customerId":2,"menuItems":[]}"#).unwrap();
        assert_eq!(order.customer_label(), "N/A");
        assert_eq!(order.order_date_label(), "");
    }
}
