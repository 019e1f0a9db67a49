// ABOUTME: Backend abstraction for the renew and revoke endpoints
// ABOUTME: Defines the request payloads, the response type, and the transport trait

pub mod http;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;

use crate::error::AuthResult;

pub use http::HttpBackend;

/// Body of `POST /refresh_token`.
#[derive(Debug, Serialize)]
pub struct RefreshTokenRequest<'a> {
    pub refresh_token: &'a str,
}

/// Body of `POST /revoke_token`.
#[derive(Debug, Serialize)]
pub struct RevokeTokenRequest<'a> {
    pub token: &'a str,
}

/// A backend answer with a readable JSON body, whatever its status.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl DispatchResponse {
    pub fn new(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Body as two-space indented JSON.
    pub fn pretty_body(&self) -> String {
        serde_json::to_string_pretty(&self.body).unwrap_or_else(|_| self.body.to_string())
    }
}

/// Transport used by the panel to reach the token backend.
///
/// Implementations return `Ok` for every response whose body decodes as
/// JSON, including non-success statuses. Only transport and decode failures
/// are errors.
#[async_trait]
pub trait TokenBackend: Send + Sync {
    /// POST `payload` as JSON to `endpoint` (a path relative to the backend base URL).
    async fn post_json(&self, endpoint: &str, payload: &Value) -> AuthResult<DispatchResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pretty_body_uses_two_space_indent() {
        let response = DispatchResponse::new(StatusCode::OK, json!({"message": "ok"}));
        assert_eq!(response.pretty_body(), "{\n  \"message\": \"ok\"\n}");
    }

    #[test]
    fn test_is_success_follows_status() {
        assert!(DispatchResponse::new(StatusCode::OK, Value::Null).is_success());
        assert!(!DispatchResponse::new(StatusCode::BAD_REQUEST, Value::Null).is_success());
        assert!(!DispatchResponse::new(StatusCode::INTERNAL_SERVER_ERROR, Value::Null).is_success());
    }

    #[test]
    fn test_request_payload_shapes() {
        let refresh = serde_json::to_value(RefreshTokenRequest {
            refresh_token: "r-1",
        })
        .unwrap();
        assert_eq!(refresh, json!({"refresh_token": "r-1"}));

        let revoke = serde_json::to_value(RevokeTokenRequest { token: "a-1" }).unwrap();
        assert_eq!(revoke, json!({"token": "a-1"}));
    }
}
