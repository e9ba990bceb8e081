//! Network URL constants for the Foodies SDK.

/// Default REST API base URL (local Spring-style backend).
pub const DEFAULT_API_URL: &str = "http://localhost:8080";
