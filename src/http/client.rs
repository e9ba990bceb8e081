//! Low-level HTTP client — `FoodiesHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain types
//! happens at the sub-client boundary). Every operation performs exactly one
//! remote call: no retries, transport-default timeouts. Failures are
//! normalized into [`HttpError`] and never panic past this boundary.

use crate::auth::{LoginRequest, LoginResponse, RegisterRequest, User};
use crate::domain::cart::wire::{
    AddCartItemRequest, CartResponse, RemoveCartItemRequest, UpdateCartItemRequest,
};
use crate::domain::food::wire::FoodResponse;
use crate::domain::order::wire::{CreateOrderResponse, OrderResponse};
use crate::domain::order::OrderDraft;
use crate::error::HttpError;
use crate::payment::PaymentConfirmation;
use crate::shared::FoodId;

use async_lock::RwLock;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Low-level HTTP client for the Foodies REST API.
pub struct FoodiesHttp {
    base_url: String,
    client: Client,
    /// Bearer token injected on authenticated endpoints. Never exposed.
    auth_token: Arc<RwLock<Option<String>>>,
}

impl FoodiesHttp {
    pub fn new(base_url: &str) -> Self {
        // Transport-default timeouts: no client-wide override.
        let builder = Client::builder().pool_max_idle_per_host(10);

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build().expect("Failed to build HTTP client"),
            auth_token: Arc::new(RwLock::new(None)),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Set the bearer token used for authenticated endpoints.
    pub(crate) async fn set_auth_token(&self, token: Option<String>) {
        *self.auth_token.write().await = token;
    }

    /// Clear the bearer token.
    pub(crate) async fn clear_auth_token(&self) {
        *self.auth_token.write().await = None;
    }

    // ── Auth ─────────────────────────────────────────────────────────────

    pub async fn register(&self, body: &RegisterRequest) -> Result<User, HttpError> {
        let url = format!("{}/api/register", self.base_url);
        self.post(&url, body).await
    }

    pub async fn login(&self, body: &LoginRequest) -> Result<LoginResponse, HttpError> {
        let url = format!("{}/api/login", self.base_url);
        self.post(&url, body).await
    }

    /// Validate the current bearer token, returning the user profile.
    pub async fn validate(&self) -> Result<User, HttpError> {
        let url = format!("{}/api/validate", self.base_url);
        self.get(&url).await
    }

    // ── Foods ────────────────────────────────────────────────────────────

    pub async fn get_foods(&self) -> Result<Vec<FoodResponse>, HttpError> {
        let url = format!("{}/api/foods", self.base_url);
        self.get(&url).await
    }

    pub async fn get_food_by_id(&self, id: &FoodId) -> Result<FoodResponse, HttpError> {
        let url = format!("{}/api/foods/{}", self.base_url, id);
        self.get(&url).await
    }

    pub async fn search_foods(&self, query: &str) -> Result<Vec<FoodResponse>, HttpError> {
        let url = format!(
            "{}/api/foods/search?q={}",
            self.base_url,
            urlencoding::encode(query)
        );
        self.get(&url).await
    }

    pub async fn get_foods_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<FoodResponse>, HttpError> {
        let url = format!(
            "{}/api/foods/category/{}",
            self.base_url,
            urlencoding::encode(category)
        );
        self.get(&url).await
    }

    pub async fn get_food_categories(&self) -> Result<Vec<String>, HttpError> {
        let url = format!("{}/api/foods/categories", self.base_url);
        self.get(&url).await
    }

    // ── Cart ─────────────────────────────────────────────────────────────

    pub async fn get_cart(&self) -> Result<CartResponse, HttpError> {
        let url = format!("{}/api/cart", self.base_url);
        self.get(&url).await
    }

    /// Add one unit of `food_id`.
    pub async fn add_to_cart(&self, food_id: &FoodId) -> Result<CartResponse, HttpError> {
        let url = format!("{}/api/cart", self.base_url);
        let body = AddCartItemRequest {
            food_id: food_id.clone(),
        };
        self.post(&url, &body).await
    }

    /// Remove one unit of `food_id` (quantity decrement, not line deletion).
    pub async fn remove_from_cart(&self, food_id: &FoodId) -> Result<CartResponse, HttpError> {
        let url = format!("{}/api/cart/remove", self.base_url);
        let body = RemoveCartItemRequest {
            food_id: food_id.clone(),
        };
        self.post(&url, &body).await
    }

    /// Set an absolute quantity for `food_id`.
    pub async fn set_cart_quantity(
        &self,
        food_id: &FoodId,
        quantity: u32,
    ) -> Result<CartResponse, HttpError> {
        let url = format!("{}/api/cart", self.base_url);
        let body = UpdateCartItemRequest {
            food_id: food_id.clone(),
            quantity,
        };
        self.put(&url, &body).await
    }

    pub async fn clear_cart(&self) -> Result<(), HttpError> {
        let url = format!("{}/api/cart", self.base_url);
        self.delete(&url).await
    }

    // ── Orders ───────────────────────────────────────────────────────────

    pub async fn create_order(&self, draft: &OrderDraft) -> Result<CreateOrderResponse, HttpError> {
        let url = format!("{}/api/orders/create", self.base_url);
        self.post(&url, draft).await
    }

    pub async fn verify_payment(
        &self,
        confirmation: &PaymentConfirmation,
    ) -> Result<OrderResponse, HttpError> {
        let url = format!("{}/api/orders/verify", self.base_url);
        self.post(&url, confirmation).await
    }

    pub async fn get_orders(&self) -> Result<Vec<OrderResponse>, HttpError> {
        let url = format!("{}/api/orders", self.base_url);
        self.get(&url).await
    }

    pub async fn delete_order(&self, order_id: &str) -> Result<(), HttpError> {
        let url = format!("{}/api/orders/{}", self.base_url, order_id);
        self.delete(&url).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        let resp = self.send(self.client.get(url)).await?;
        Self::decode(resp).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        let resp = self.send(self.client.post(url).json(body)).await?;
        Self::decode(resp).await
    }

    async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        let resp = self.send(self.client.put(url).json(body)).await?;
        Self::decode(resp).await
    }

    /// DELETE with the response body ignored.
    async fn delete(&self, url: &str) -> Result<(), HttpError> {
        self.send(self.client.delete(url)).await?;
        Ok(())
    }

    /// Send one request, injecting the bearer token, and classify any non-2xx
    /// response into an [`HttpError`].
    async fn send(&self, mut req: reqwest::RequestBuilder) -> Result<reqwest::Response, HttpError> {
        if let Some(token) = self.auth_token.read().await.as_ref() {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let resp = req.send().await?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();
        Err(Self::classify_failure(status_code, &body_text))
    }

    /// Classify a non-2xx response. The backend sends structured failures as
    /// `{"message": ..., "details": ...}`; a structured message wins even on
    /// 401 (bad credentials), and only a bare 401 maps to `Unauthorized`.
    fn classify_failure(status: u16, body: &str) -> HttpError {
        let parsed: Option<serde_json::Value> = serde_json::from_str(body).ok();
        let message = parsed
            .as_ref()
            .and_then(|v| v.get("message"))
            .and_then(|m| m.as_str())
            .map(str::to_string);
        let details = parsed.as_ref().and_then(|v| v.get("details")).cloned();

        if status == 401 && message.is_none() {
            return HttpError::Unauthorized;
        }

        HttpError::Remote {
            status,
            message,
            details,
        }
    }

    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, HttpError> {
        resp.json::<T>()
            .await
            .map_err(|e| HttpError::Decode(e.to_string()))
    }
}

impl Clone for FoodiesHttp {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            client: self.client.clone(),
            auth_token: self.auth_token.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_401_with_body_keeps_the_remote_message() {
        let err =
            FoodiesHttp::classify_failure(401, r#"{"message":"Invalid credentials"}"#);
        assert_eq!(err.status(), 401);
        assert_eq!(err.message_or("Login failed"), "Invalid credentials");
    }

    #[test]
    fn test_classify_bare_401_is_unauthorized() {
        assert!(matches!(
            FoodiesHttp::classify_failure(401, ""),
            HttpError::Unauthorized
        ));
        assert!(matches!(
            FoodiesHttp::classify_failure(401, "Unauthorized"),
            HttpError::Unauthorized
        ));
    }

    #[test]
    fn test_classify_carries_message_and_details() {
        let err = FoodiesHttp::classify_failure(
            400,
            r#"{"message":"Validation failed","details":{"email":"taken"}}"#,
        );
        match err {
            HttpError::Remote {
                status,
                message,
                details,
            } => {
                assert_eq!(status, 400);
                assert_eq!(message.as_deref(), Some("Validation failed"));
                assert_eq!(details, Some(serde_json::json!({"email": "taken"})));
            }
            other => panic!("expected Remote, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_unstructured_body_has_no_message() {
        let err = FoodiesHttp::classify_failure(502, "<html>Bad Gateway</html>");
        assert_eq!(err.status(), 502);
        assert_eq!(err.message_or("Could not load foods"), "Could not load foods");
    }
}
