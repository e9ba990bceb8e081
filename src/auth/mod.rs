//! Authentication: request/response types, token persistence, auth sub-client.

pub mod client;

use serde::{Deserialize, Serialize};
use std::sync::RwLock;

// ─── Wire types ──────────────────────────────────────────────────────────────

/// Body for POST `/api/register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body for POST `/api/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response from POST `/api/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Authenticated user profile, as returned by GET `/api/validate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

// ─── Token persistence ───────────────────────────────────────────────────────

/// Local persistence for the single session token.
///
/// Read once at bootstrap, written on login, cleared on logout or when the
/// backend rejects the stored token.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<String>;
    fn store(&self, token: &str);
    fn clear(&self);
}

/// In-memory token store; the default when the host app has no persistence.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: RwLock::new(Some(token.to_string())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.read().ok().and_then(|t| t.clone())
    }

    fn store(&self, token: &str) {
        if let Ok(mut guard) = self.token.write() {
            *guard = Some(token.to_string());
        }
    }

    fn clear(&self) {
        if let Ok(mut guard) = self.token.write() {
            *guard = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_token_store_roundtrip() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.load(), None);
        store.store("tok_abc");
        assert_eq!(store.load(), Some("tok_abc".to_string()));
        store.clear();
        assert_eq!(store.load(), None);
    }
}
