//! Wire types for food catalog responses (REST).

use serde::{Deserialize, Serialize};

/// Raw food item from the REST API.
///
/// `price` stays a raw JSON value here: the backend has sent both numbers and
/// strings, and conversion applies the zero fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodResponse {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: serde_json::Value,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}
