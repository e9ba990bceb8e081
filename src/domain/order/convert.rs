//! Conversions: order wire types → domain types.

use super::wire::{CreateOrderResponse, OrderResponse};
use super::{CreatedOrder, Order, OrderStatus};
use crate::shared::parse_price;

impl From<CreateOrderResponse> for CreatedOrder {
    fn from(raw: CreateOrderResponse) -> Self {
        CreatedOrder {
            order_id: raw.id,
            payment_order_id: raw.payment_order_id,
            amount_minor: raw.amount,
            currency: raw.currency,
        }
    }
}

impl From<OrderResponse> for Order {
    fn from(raw: OrderResponse) -> Self {
        let status = raw
            .order_status
            .as_deref()
            .and_then(parse_status)
            .unwrap_or_default();
        Order {
            id: raw.id,
            payment_order_id: raw.payment_order_id.unwrap_or_default(),
            user_address: raw.user_address.unwrap_or_default(),
            phone_number: raw.phone_number.unwrap_or_default(),
            ordered_items: raw.ordered_items,
            amount: parse_price(&raw.amount),
            status,
            created_at: raw.created_at,
        }
    }
}

fn parse_status(s: &str) -> Option<OrderStatus> {
    match s {
        "Preparing" => Some(OrderStatus::Preparing),
        "On the way" | "Out for delivery" => Some(OrderStatus::OnTheWay),
        "Delivered" => Some(OrderStatus::Delivered),
        "Cancelled" => Some(OrderStatus::Cancelled),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::json;

    #[test]
    fn test_order_conversion_defaults() {
        let raw: OrderResponse = serde_json::from_value(json!({
            "id": "ord_1",
            "amount": "145.80",
            "orderStatus": "On the way"
        }))
        .unwrap();
        let order: Order = raw.into();
        assert_eq!(order.status, OrderStatus::OnTheWay);
        assert_eq!(order.amount, Decimal::new(14580, 2));
        assert!(order.ordered_items.is_empty());
    }

    #[test]
    fn test_unknown_status_falls_back_to_preparing() {
        let raw: OrderResponse = serde_json::from_value(json!({
            "id": "ord_2",
            "orderStatus": "???"
        }))
        .unwrap();
        let order: Order = raw.into();
        assert_eq!(order.status, OrderStatus::Preparing);
    }
}
