//! High-level client — `FoodiesClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs` (auth lives
//! in `auth/client.rs`). This module keeps the builder, the shared session
//! state, the notifier wiring, and the accessor methods.

use crate::auth::client::Auth;
use crate::auth::{MemoryTokenStore, TokenStore};
use crate::domain::cart::client::Cart;
use crate::domain::cart::{CartLine, CartTotals};
use crate::domain::food::client::Foods;
use crate::domain::food::FoodItem;
use crate::domain::order::client::Orders;
use crate::domain::order::{CheckoutGateway, CreatedOrder, Order, OrderDraft};
use crate::error::{AuthError, HttpError, SdkError};
use crate::notify::{Notice, Notifier, TracingNotifier};
use crate::payment::PaymentConfirmation;
use crate::session::SessionState;
use crate::shared::FoodId;

use async_lock::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

// Re-export sub-client types for convenience.
pub use crate::auth::client::Auth as AuthClient;
pub use crate::domain::cart::client::Cart as CartClient;
pub use crate::domain::food::client::Foods as FoodsClient;
pub use crate::domain::order::client::Orders as OrdersClient;

/// The primary entry point for the Foodies SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.auth()`, `client.foods()`, `client.cart()`, `client.orders()`.
pub struct FoodiesClient {
    pub(crate) http: crate::http::FoodiesHttp,
    pub(crate) notifier: Arc<dyn Notifier>,
    pub(crate) token_store: Arc<dyn TokenStore>,
    /// Session state: catalog snapshot, cart quantities, auth token.
    pub(crate) session: Arc<RwLock<SessionState>>,
}

impl FoodiesClient {
    pub fn builder() -> FoodiesClientBuilder {
        FoodiesClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }

    pub fn foods(&self) -> Foods<'_> {
        Foods { client: self }
    }

    pub fn cart(&self) -> Cart<'_> {
        Cart { client: self }
    }

    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }

    // ── Session access ───────────────────────────────────────────────────

    /// Snapshot of the cached catalog.
    pub async fn catalog(&self) -> Vec<FoodItem> {
        self.session.read().await.catalog.clone()
    }

    /// Snapshot of the cart quantity mapping.
    pub async fn cart_quantities(&self) -> HashMap<FoodId, u32> {
        self.session.read().await.cart.quantities().clone()
    }

    /// Cart quantities joined with the catalog snapshot.
    pub async fn cart_lines(&self) -> Vec<CartLine> {
        self.session.read().await.cart_lines()
    }

    /// Totals for the current cart.
    pub async fn cart_totals(&self) -> CartTotals {
        CartTotals::compute(&self.cart_lines().await)
    }

    /// Hydrate the session at startup: adopt a stored token (validating it,
    /// and discarding it on rejection), then fetch the catalog and — when
    /// authenticated — the remote cart.
    pub async fn bootstrap(&self) -> Result<(), SdkError> {
        if let Some(token) = self.token_store.load() {
            self.http.set_auth_token(Some(token.clone())).await;
            match self.http.validate().await {
                Ok(user) => {
                    tracing::debug!(user = %user.email, "session restored");
                    self.session.write().await.token = Some(token);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "stored token rejected; clearing");
                    self.http.clear_auth_token().await;
                    self.token_store.clear();
                }
            }
        }

        self.foods().refresh_catalog().await?;
        if self.session.read().await.is_authenticated() {
            self.cart().refresh().await?;
        }
        Ok(())
    }

    // ── Coordinator plumbing ─────────────────────────────────────────────

    pub(crate) fn notify_success(&self, message: &str) {
        self.notifier.notify(Notice::success(message));
    }

    /// Emit the failure notice for a gateway error and wrap it for return.
    /// The structured remote message wins over `default`.
    pub(crate) fn gateway_failure(&self, err: HttpError, default: &str) -> SdkError {
        self.notifier
            .notify(Notice::error(err.message_or(default), err.status()));
        SdkError::Http(err)
    }

    /// Guard for operations that require a logged-in session.
    pub(crate) async fn require_auth(&self) -> Result<(), SdkError> {
        if self.session.read().await.is_authenticated() {
            Ok(())
        } else {
            self.notifier
                .notify(Notice::error("Please log in first", 401));
            Err(SdkError::Auth(AuthError::NotAuthenticated))
        }
    }
}

/// The checkout sequence talks to the backend through this trait so tests can
/// drive it with fakes; the real client forwards to `FoodiesHttp` and keeps
/// the local session in step.
impl CheckoutGateway for FoodiesClient {
    async fn create_order(&self, draft: &OrderDraft) -> Result<CreatedOrder, HttpError> {
        Ok(self.http.create_order(draft).await?.into())
    }

    async fn verify_payment(&self, confirmation: &PaymentConfirmation) -> Result<Order, HttpError> {
        Ok(self.http.verify_payment(confirmation).await?.into())
    }

    async fn delete_order(&self, order_id: &str) -> Result<(), HttpError> {
        self.http.delete_order(order_id).await
    }

    async fn clear_cart(&self) -> Result<(), HttpError> {
        self.http.clear_cart().await?;
        self.session.write().await.cart.clear();
        Ok(())
    }
}

impl Clone for FoodiesClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            notifier: self.notifier.clone(),
            token_store: self.token_store.clone(),
            session: self.session.clone(),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct FoodiesClientBuilder {
    base_url: String,
    notifier: Arc<dyn Notifier>,
    token_store: Arc<dyn TokenStore>,
}

impl Default for FoodiesClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            notifier: Arc::new(TracingNotifier),
            token_store: Arc::new(MemoryTokenStore::new()),
        }
    }
}

impl FoodiesClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Presentation-layer sink for outcome notices.
    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Local persistence for the session token.
    pub fn token_store(mut self, store: Arc<dyn TokenStore>) -> Self {
        self.token_store = store;
        self
    }

    pub fn build(self) -> Result<FoodiesClient, SdkError> {
        Ok(FoodiesClient {
            http: crate::http::FoodiesHttp::new(&self.base_url),
            notifier: self.notifier,
            token_store: self.token_store,
            session: Arc::new(RwLock::new(SessionState::new())),
        })
    }
}
