//! # Foodies SDK
//!
//! A Rust client SDK for the Foodies food-ordering REST API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, domain models, pure cart/catalog logic
//! 2. **Auth** — Credentials, token persistence, login/logout
//! 3. **HTTP API** — `FoodiesHttp`, one method per endpoint, single-shot calls
//! 4. **High-Level Client** — `FoodiesClient` with nested sub-clients and
//!    the shared session state (catalog, cart quantities, token)
//!
//! Coordinator outcomes surface twice: as a returned `Result`, and as a
//! structured [`notify::Notice`] emitted through the configured
//! [`notify::Notifier`] so the presentation layer can render it.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use foodies_sdk::prelude::*;
//!
//! let client = FoodiesClient::builder()
//!     .base_url("http://localhost:8080")
//!     .build()?;
//!
//! client.bootstrap().await?;
//! let foods = client.foods().refresh_catalog().await?;
//! client.cart().increase(&foods[0].id).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and money utilities used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

/// Structured outcome notices and the notifier observer.
pub mod notify;

/// Client-side session state container.
pub mod session;

// ── Layer 2: Auth & external collaborators ───────────────────────────────────

/// Authentication: credentials, token persistence, login/logout.
pub mod auth;

/// Payment collection surface (externally hosted).
pub mod payment;

/// Object storage gateway (admin flows).
pub mod storage;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// HTTP client, one method per endpoint.
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `FoodiesClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::FoodId;

    // Domain types — food
    pub use crate::domain::food::{
        filter_by_price, sort_catalog, FoodItem, SortDirection, SortKey,
    };

    // Domain types — cart
    pub use crate::domain::cart::{
        validate_cart, CartDelta, CartError, CartLine, CartState, CartTotals,
    };

    // Domain types — order & checkout
    pub use crate::domain::order::{
        run_checkout, CheckoutGateway, CheckoutOutcome, CheckoutState, CreatedOrder, Order,
        OrderDraft, OrderStatus, OrderedItem,
    };

    // Payment surface
    pub use crate::payment::{
        PaymentAction, PaymentConfirmation, PaymentPrefill, PaymentRequest, PaymentSurface,
    };

    // Notices
    pub use crate::notify::{Notice, NoticeKind, Notifier, TracingNotifier};

    // Errors
    pub use crate::error::{AuthError, HttpError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // Auth types
    pub use crate::auth::{MemoryTokenStore, TokenStore, User};

    // Session state
    pub use crate::session::SessionState;

    // Storage gateway
    pub use crate::storage::{ObjectStorage, PresignedUpload};

    // HTTP client + sub-clients
    pub use crate::client::{
        AuthClient, CartClient, FoodiesClient, FoodiesClientBuilder, FoodsClient, OrdersClient,
    };
    pub use crate::http::FoodiesHttp;
}
