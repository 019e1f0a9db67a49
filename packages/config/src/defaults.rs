// ABOUTME: Default values applied when configuration variables are unset
// ABOUTME: Mirrors the defaults of the companion token backend

/// Base URL of the token backend serving `/refresh_token` and `/revoke_token`.
pub const BACKEND_URL: &str = "http://127.0.0.1:5000";

/// Log filter used when `RUST_LOG` is not set.
pub const LOG_FILTER: &str = "warn";

/// Endpoint path for exchanging a refresh token.
pub const REFRESH_TOKEN_PATH: &str = "refresh_token";

/// Endpoint path for revoking an access token.
pub const REVOKE_TOKEN_PATH: &str = "revoke_token";
