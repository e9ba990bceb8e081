//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// HTTP-layer errors.
///
/// Every gateway operation normalizes remote and transport failures into one of
/// these variants; nothing escapes the gateway boundary as a panic.
#[derive(Error, Debug)]
pub enum HttpError {
    /// Network-level failure (DNS, connect, TLS) with no HTTP response.
    #[error("request failed: {0}")]
    Transport(String),

    #[error("request timed out")]
    Timeout,

    #[error("unauthorized")]
    Unauthorized,

    /// Non-2xx response, with the structured message when the body carried one.
    #[error("remote error {status}: {message:?}")]
    Remote {
        status: u16,
        message: Option<String>,
        details: Option<serde_json::Value>,
    },

    #[error("response decode failed: {0}")]
    Decode(String),
}

impl HttpError {
    /// HTTP status for this failure. Defaults to 500 when the transport
    /// supplied none.
    pub fn status(&self) -> u16 {
        match self {
            HttpError::Remote { status, .. } => *status,
            HttpError::Unauthorized => 401,
            HttpError::Transport(_) | HttpError::Timeout | HttpError::Decode(_) => 500,
        }
    }

    /// The remote message when the response carried one, else `default`.
    pub fn message_or(&self, default: &str) -> String {
        match self {
            HttpError::Remote {
                message: Some(m), ..
            } => m.clone(),
            _ => default.to_string(),
        }
    }
}

impl From<reqwest::Error> for HttpError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            HttpError::Timeout
        } else if e.is_decode() {
            HttpError::Decode(e.to_string())
        } else {
            HttpError::Transport(e.to_string())
        }
    }
}

/// Authentication errors.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("not authenticated")]
    NotAuthenticated,

    #[error("stored token was rejected")]
    TokenRejected,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_failure_defaults_to_500_and_default_message() {
        let err = HttpError::Transport("connection refused".to_string());
        assert_eq!(err.status(), 500);
        assert_eq!(err.message_or("Could not load foods"), "Could not load foods");
    }

    #[test]
    fn test_remote_failure_keeps_status_and_message() {
        let err = HttpError::Remote {
            status: 404,
            message: Some("Food not found".to_string()),
            details: None,
        };
        assert_eq!(err.status(), 404);
        assert_eq!(err.message_or("fallback"), "Food not found");
    }

    #[test]
    fn test_remote_failure_without_message_uses_default() {
        let err = HttpError::Remote {
            status: 502,
            message: None,
            details: None,
        };
        assert_eq!(
            err.message_or("Could not place the order"),
            "Could not place the order"
        );
    }

    #[test]
    fn test_unauthorized_is_401() {
        assert_eq!(HttpError::Unauthorized.status(), 401);
    }
}
