//! Order Draft
//!
//! Form values for creating or editing an order, including the customer
//! selector that depends on the customers collection.

use chrono::{DateTime, Utc};
use remote_collection::{
    join_list, optional_calendar_date, parse_date, split_list, Draft, DraftError, RecordId,
};
use serde::Serialize;

use crate::models::{Customer, Order};

/// Placeholder entry shown first in the customer selector
pub const CUSTOMER_PLACEHOLDER: &str = "Select a Customer";

/// In-progress order form values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderDraft {
    /// Selected customer id as text; empty means unset
    pub customer_id: String,
    /// Comma-separated menu items
    pub menu_items: String,
    pub order_date: String,
    pub special_instructions: String,
    pub payment_method: String,
    pub next_reservation_date: String,
    /// Customer id as loaded, keeps its wire shape if the selector list is missing
    loaded_customer: Option<RecordId>,
}

/// One field edit: which field, and its new value
#[derive(Debug, Clone, PartialEq)]
pub enum OrderEdit {
    Customer(String),
    MenuItems(String),
    OrderDate(String),
    SpecialInstructions(String),
    PaymentMethod(String),
    NextReservationDate(String),
}

/// Body of `POST /orders` and `PATCH /orders/:id`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    pub customer_id: RecordId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_date: Option<DateTime<Utc>>,
    pub menu_items: Vec<String>,
    pub special_instructions: String,
    pub payment_method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_reservation_date: Option<DateTime<Utc>>,
}

impl Draft for OrderDraft {
    type Record = Order;
    type Edit = OrderEdit;

    fn from_record(order: &Order) -> Self {
        Self {
            customer_id: order.customer_id.to_string(),
            menu_items: join_list(&order.menu_items),
            order_date: optional_calendar_date(order.order_date.as_deref()),
            special_instructions: order.special_instructions.clone().unwrap_or_default(),
            payment_method: order.payment_method.clone().unwrap_or_default(),
            next_reservation_date: optional_calendar_date(order.next_reservation_date.as_deref()),
            loaded_customer: Some(order.customer_id.clone()),
        }
    }

    fn apply(&mut self, edit: OrderEdit) {
        match edit {
            OrderEdit::Customer(v) => self.customer_id = v,
            OrderEdit::MenuItems(v) => self.menu_items = v,
            OrderEdit::OrderDate(v) => self.order_date = v,
            OrderEdit::SpecialInstructions(v) => self.special_instructions = v,
            OrderEdit::PaymentMethod(v) => self.payment_method = v,
            OrderEdit::NextReservationDate(v) => self.next_reservation_date = v,
        }
    }
}

impl OrderDraft {
    /// Create mode: once customers load, pick the first if still unset
    pub fn default_customer(&mut self, customers: &[Customer]) {
        if !self.customer_id.is_empty() {
            return;
        }
        if let Some(first) = customers.first() {
            self.customer_id = first.id.to_string();
        }
    }

    /// Coerce the selector text back to the customer's identifier
    fn resolve_customer(&self, customers: &[Customer]) -> Result<RecordId, DraftError> {
        let selected = self.customer_id.trim();
        if selected.is_empty() {
            return Err(DraftError::Required("Customer"));
        }
        let known = customers
            .iter()
            .map(|c| &c.id)
            .chain(self.loaded_customer.iter())
            .find(|id| id.as_str() == selected);
        Ok(known.cloned().unwrap_or_else(|| RecordId::from(selected)))
    }

    pub fn to_payload(&self, customers: &[Customer]) -> Result<OrderPayload, DraftError> {
        let customer_id = self.resolve_customer(customers)?;
        let menu_items = split_list(&self.menu_items);
        if menu_items.is_empty() {
            return Err(DraftError::EmptyList("menu item"));
        }

        Ok(OrderPayload {
            customer_id,
            order_date: parse_date("Order date", &self.order_date)?,
            menu_items,
            special_instructions: self.special_instructions.clone(),
            payment_method: self.payment_method.clone(),
            next_reservation_date: parse_date("Next reservation date", &self.next_reservation_date)?,
        })
    }
}

/// `(value, label)` pairs for the customer selector, placeholder first
pub fn customer_options(customers: &[Customer]) -> Vec<(String, String)> {
    std::iter::once((String::new(), CUSTOMER_PLACEHOLDER.to_string()))
        .chain(customers.iter().map(|c| (c.id.to_string(), c.option_label())))
        .collect()
}
