//! Order domain — drafts, server orders, the checkout sequence.

pub mod checkout;
pub mod client;
mod convert;
pub mod wire;

pub use checkout::{run_checkout, CheckoutGateway, CheckoutOutcome, CheckoutState};

use crate::domain::cart::{validate_cart, CartError, CartLine, CartTotals};
use crate::shared::{round_money, FoodId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ─── OrderStatus ─────────────────────────────────────────────────────────────

/// Fulfilment status. The backend owns this machine; the SDK only reads it
/// (deletion on checkout cancel is the one exception).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Preparing,
    #[serde(rename = "On the way")]
    OnTheWay,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Preparing => "Preparing",
            OrderStatus::OnTheWay => "On the way",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── OrderedItem ─────────────────────────────────────────────────────────────

/// One item on an order. `price` is the line total (unit price × quantity),
/// rounded to 2 decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderedItem {
    pub food_id: FoodId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub image_url: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    pub quantity: u32,
}

impl From<&CartLine> for OrderedItem {
    fn from(line: &CartLine) -> Self {
        OrderedItem {
            food_id: line.id.clone(),
            name: line.name.clone(),
            description: line.description.clone(),
            category: line.category.clone(),
            image_url: line.image_url.clone(),
            price: round_money(line.line_total()),
            quantity: line.quantity,
        }
    }
}

// ─── OrderDraft ──────────────────────────────────────────────────────────────

/// Client-side order draft, built per checkout attempt and discarded when the
/// flow terminates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub user_address: String,
    pub phone_number: String,
    pub ordered_items: Vec<OrderedItem>,
    /// Grand total (subtotal + tax + shipping), 2 decimal places.
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub order_status: OrderStatus,
}

impl OrderDraft {
    /// Build a draft from cart lines plus shipping form fields.
    ///
    /// Fails with a [`CartError`] when the cart is not checkout-eligible.
    pub fn from_cart(
        lines: &[CartLine],
        address: &str,
        phone: &str,
    ) -> Result<OrderDraft, CartError> {
        validate_cart(lines)?;
        let totals = CartTotals::compute(lines);
        Ok(OrderDraft {
            user_address: address.to_string(),
            phone_number: phone.to_string(),
            ordered_items: lines.iter().map(OrderedItem::from).collect(),
            amount: totals.total,
            order_status: OrderStatus::Preparing,
        })
    }
}

// ─── CreatedOrder ────────────────────────────────────────────────────────────

/// Server acknowledgement of a draft: the persisted order id plus the
/// payment-gateway order handle used to collect payment.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedOrder {
    pub order_id: String,
    pub payment_order_id: String,
    pub amount_minor: u64,
    pub currency: String,
}

// ─── Order ───────────────────────────────────────────────────────────────────

/// A server-persisted order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub payment_order_id: String,
    pub user_address: String,
    pub phone_number: String,
    pub ordered_items: Vec<OrderedItem>,
    pub amount: Decimal,
    pub status: OrderStatus,
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::CartError;

    fn line(id: &str, price: i64, quantity: u32) -> CartLine {
        CartLine {
            id: FoodId::from(id),
            name: format!("food {id}"),
            description: String::new(),
            category: "Meals".to_string(),
            image_url: String::new(),
            price: Decimal::from(price),
            quantity,
        }
    }

    #[test]
    fn test_draft_from_cart_totals_and_status() {
        let lines = vec![line("a", 30, 2), line("b", 10, 1)];
        let draft = OrderDraft::from_cart(&lines, "12 Main St", "555-0100").unwrap();
        // subtotal 70, tax 7, shipping 10
        assert_eq!(draft.amount, Decimal::from(87));
        assert_eq!(draft.order_status, OrderStatus::Preparing);
        assert_eq!(draft.ordered_items.len(), 2);
        assert_eq!(draft.ordered_items[0].price, Decimal::from(60)); // line total
    }

    #[test]
    fn test_draft_rejects_empty_cart() {
        assert_eq!(
            OrderDraft::from_cart(&[], "addr", "phone"),
            Err(CartError::Empty)
        );
    }

    #[test]
    fn test_order_status_serde_names() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::OnTheWay).unwrap(),
            "\"On the way\""
        );
        let s: OrderStatus = serde_json::from_str("\"Preparing\"").unwrap();
        assert_eq!(s, OrderStatus::Preparing);
    }
}
