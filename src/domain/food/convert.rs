//! Conversions: food wire types → domain types.

use super::wire::FoodResponse;
use super::FoodItem;
use crate::shared::{parse_price, FoodId};

impl From<FoodResponse> for FoodItem {
    fn from(raw: FoodResponse) -> Self {
        FoodItem {
            id: FoodId::from(raw.id),
            name: raw.name.unwrap_or_default(),
            description: raw.description.unwrap_or_default(),
            price: parse_price(&raw.price),
            category: raw.category.unwrap_or_default(),
            image_url: raw.image_url.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::json;

    #[test]
    fn test_convert_defends_against_bad_price() {
        let raw: FoodResponse = serde_json::from_value(json!({
            "id": "f1",
            "name": "Idli",
            "price": "oops",
            "category": "Breakfast"
        }))
        .unwrap();
        let item: FoodItem = raw.into();
        assert_eq!(item.price, Decimal::ZERO);
        assert_eq!(item.name, "Idli");
        assert_eq!(item.image_url, "");
    }

    #[test]
    fn test_convert_string_price() {
        let raw: FoodResponse = serde_json::from_value(json!({
            "id": "f2",
            "name": "Dosa",
            "price": "45.50"
        }))
        .unwrap();
        let item: FoodItem = raw.into();
        assert_eq!(item.price, Decimal::new(4550, 2));
    }
}
