//! Wire types for cart requests and responses (REST).

use crate::shared::FoodId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Remote cart snapshot: food id → quantity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CartResponse {
    #[serde(default)]
    pub items: HashMap<FoodId, u32>,
}

/// Body for POST `/api/cart` (adds one unit).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCartItemRequest {
    pub food_id: FoodId,
}

/// Body for POST `/api/cart/remove` (removes one unit, not the line).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveCartItemRequest {
    pub food_id: FoodId,
}

/// Body for PUT `/api/cart` (absolute quantity).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCartItemRequest {
    pub food_id: FoodId,
    pub quantity: u32,
}
