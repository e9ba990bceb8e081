//! Wire types for order endpoints (REST).

use super::OrderedItem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response from POST `/api/orders/create`.
///
/// `amount` and `currency` come back in payment-gateway terms: minor units,
/// ISO currency code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderResponse {
    pub id: String,
    pub payment_order_id: String,
    pub amount: u64,
    pub currency: String,
}

/// A persisted order as returned by GET `/api/orders` and the verify endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: String,
    #[serde(default)]
    pub payment_order_id: Option<String>,
    #[serde(default)]
    pub user_address: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub ordered_items: Vec<OrderedItem>,
    #[serde(default)]
    pub amount: serde_json::Value,
    #[serde(default)]
    pub order_status: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
