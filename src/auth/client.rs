//! Auth sub-client — register, login, token validation, logout.

use crate::auth::{LoginRequest, RegisterRequest, User};
use crate::client::FoodiesClient;
use crate::error::{AuthError, SdkError};

/// Sub-client for authentication operations.
pub struct Auth<'a> {
    pub(crate) client: &'a FoodiesClient,
}

impl<'a> Auth<'a> {
    /// Create an account. The user still has to log in afterwards.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, SdkError> {
        let request = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        match self.client.http.register(&request).await {
            Ok(user) => {
                self.client.notify_success("Account created, please log in");
                Ok(user)
            }
            Err(e) => Err(self.client.gateway_failure(e, "Registration failed")),
        }
    }

    /// Log in and persist the issued token: on the HTTP client for bearer
    /// injection, in the token store, and in the session.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), SdkError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        match self.client.http.login(&request).await {
            Ok(resp) => {
                self.client.http.set_auth_token(Some(resp.token.clone())).await;
                self.client.token_store.store(&resp.token);
                self.client.session.write().await.token = Some(resp.token);
                self.client.notify_success("Logged in successfully");
                Ok(())
            }
            Err(e) => Err(self.client.gateway_failure(e, "Login failed")),
        }
    }

    /// Validate the current token against the backend.
    ///
    /// A rejection clears the token everywhere, so the next call starts from
    /// a logged-out session.
    pub async fn validate(&self) -> Result<User, SdkError> {
        match self.client.http.validate().await {
            Ok(user) => Ok(user),
            Err(e) => {
                tracing::warn!(error = %e, "token validation failed; clearing session token");
                self.client.http.clear_auth_token().await;
                self.client.token_store.clear();
                self.client.session.write().await.token = None;
                let _ = self.client.gateway_failure(e, "Session expired, please log in again");
                Err(SdkError::Auth(AuthError::TokenRejected))
            }
        }
    }

    /// Log out. This is a pure local side effect — no remote call — and it
    /// always succeeds: the token is cleared everywhere and the local cart is
    /// reset.
    pub async fn logout(&self) {
        self.client.http.clear_auth_token().await;
        self.client.token_store.clear();
        let mut session = self.client.session.write().await;
        session.token = None;
        session.cart.clear();
        drop(session);
        self.client.notify_success("Logged out");
    }

    /// Whether the session currently holds a token.
    ///
    /// For a server-validated check, use [`Auth::validate`] instead.
    pub async fn is_authenticated(&self) -> bool {
        self.client.session.read().await.is_authenticated()
    }
}
