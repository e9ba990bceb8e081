//! Cart domain — line items, totals, checkout-eligibility validation.

pub mod client;
pub mod state;
pub mod wire;

pub use state::{CartDelta, CartState};

use crate::domain::food::FoodItem;
use crate::shared::{round_money, FoodId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Flat tax rate applied to the subtotal.
pub const TAX_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2); // 0.10

/// Flat shipping fee charged on any non-empty order.
pub const SHIPPING_FEE: Decimal = Decimal::from_parts(10, 0, 0, false, 0); // 10

// ─── CartLine ────────────────────────────────────────────────────────────────

/// One cart line: a catalog item joined with its quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: FoodId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub image_url: String,
    pub price: Decimal,
    pub quantity: u32,
}

impl CartLine {
    pub fn new(item: &FoodItem, quantity: u32) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            description: item.description.clone(),
            category: item.category.clone(),
            image_url: item.image_url.clone(),
            price: item.price,
            quantity,
        }
    }

    /// Price × quantity for this line.
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

// ─── Totals ──────────────────────────────────────────────────────────────────

/// Monetary breakdown of a cart. All fields are rounded to 2 decimal places
/// at the point of computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartTotals {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub shipping: Decimal,
    pub total: Decimal,
}

impl CartTotals {
    /// subtotal = Σ price×qty; tax = 10% of subtotal; shipping = 10 on any
    /// non-empty subtotal, else 0.
    pub fn compute(lines: &[CartLine]) -> Self {
        let subtotal: Decimal = lines.iter().map(CartLine::line_total).sum();
        let tax = subtotal * TAX_RATE;
        let shipping = if subtotal > Decimal::ZERO {
            SHIPPING_FEE
        } else {
            Decimal::ZERO
        };
        let total = subtotal + tax + shipping;
        Self {
            subtotal: round_money(subtotal),
            tax: round_money(tax),
            shipping: round_money(shipping),
            total: round_money(total),
        }
    }
}

// ─── Validation ──────────────────────────────────────────────────────────────

/// Reasons a cart is not checkout-eligible.
#[derive(Error, Debug, PartialEq)]
pub enum CartError {
    #[error("cart is empty")]
    Empty,

    #[error("cart line {index} is missing a food id")]
    MissingId { index: usize },

    #[error("cart line {id} is missing a name")]
    MissingName { id: FoodId },

    #[error("cart line {id} has no price")]
    MissingPrice { id: FoodId },

    #[error("cart line {id} has a non-positive quantity")]
    NonPositiveQuantity { id: FoodId },
}

/// Check checkout eligibility: a cart must be non-empty and every line needs
/// an id, a name, a positive price, and a positive quantity.
pub fn validate_cart(lines: &[CartLine]) -> Result<(), CartError> {
    if lines.is_empty() {
        return Err(CartError::Empty);
    }
    for (index, line) in lines.iter().enumerate() {
        if line.id.is_empty() {
            return Err(CartError::MissingId { index });
        }
        if line.name.trim().is_empty() {
            return Err(CartError::MissingName {
                id: line.id.clone(),
            });
        }
        if line.price <= Decimal::ZERO {
            return Err(CartError::MissingPrice {
                id: line.id.clone(),
            });
        }
        if line.quantity == 0 {
            return Err(CartError::NonPositiveQuantity {
                id: line.id.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: &str, name: &str, price: Decimal, quantity: u32) -> CartLine {
        CartLine {
            id: FoodId::from(id),
            name: name.to_string(),
            description: String::new(),
            category: "Meals".to_string(),
            image_url: String::new(),
            price,
            quantity,
        }
    }

    #[test]
    fn test_totals_tax_is_ten_percent_rounded() {
        let lines = vec![line("a", "Thali", Decimal::new(12345, 2), 1)];
        let totals = CartTotals::compute(&lines);
        assert_eq!(totals.subtotal, Decimal::new(12345, 2)); // 123.45
        assert_eq!(totals.tax, Decimal::new(1235, 2)); // round(12.345) = 12.35
        assert_eq!(totals.shipping, SHIPPING_FEE);
    }

    #[test]
    fn test_totals_empty_cart_has_no_shipping() {
        let totals = CartTotals::compute(&[]);
        assert_eq!(totals.subtotal, Decimal::ZERO);
        assert_eq!(totals.tax, Decimal::ZERO);
        assert_eq!(totals.shipping, Decimal::ZERO);
        assert_eq!(totals.total, Decimal::ZERO);
    }

    #[test]
    fn test_totals_shipping_only_when_subtotal_positive() {
        let lines = vec![line("a", "Chai", Decimal::new(1, 2), 1)]; // 0.01
        let totals = CartTotals::compute(&lines);
        assert_eq!(totals.shipping, SHIPPING_FEE);
        assert_eq!(totals.total, Decimal::new(1001, 2)); // 0.01 + 0.001 + 10, rounded
    }

    #[test]
    fn test_totals_sum_over_quantities() {
        let lines = vec![
            line("a", "Burger", Decimal::from(30), 2),
            line("b", "Fries", Decimal::from(10), 3),
        ];
        let totals = CartTotals::compute(&lines);
        assert_eq!(totals.subtotal, Decimal::from(90));
        assert_eq!(totals.tax, Decimal::from(9));
        assert_eq!(totals.total, Decimal::from(109));
    }

    #[test]
    fn test_validate_empty_cart() {
        assert_eq!(validate_cart(&[]), Err(CartError::Empty));
    }

    #[test]
    fn test_validate_zero_quantity() {
        let lines = vec![line("1", "x", Decimal::from(5), 0)];
        assert_eq!(
            validate_cart(&lines),
            Err(CartError::NonPositiveQuantity {
                id: FoodId::from("1")
            })
        );
    }

    #[test]
    fn test_validate_missing_name_and_id() {
        let lines = vec![line("", "x", Decimal::from(5), 1)];
        assert_eq!(validate_cart(&lines), Err(CartError::MissingId { index: 0 }));

        let lines = vec![line("1", "  ", Decimal::from(5), 1)];
        assert_eq!(
            validate_cart(&lines),
            Err(CartError::MissingName {
                id: FoodId::from("1")
            })
        );
    }

    #[test]
    fn test_validate_ok() {
        let lines = vec![line("1", "Pizza", Decimal::from(5), 2)];
        assert!(validate_cart(&lines).is_ok());
    }
}
