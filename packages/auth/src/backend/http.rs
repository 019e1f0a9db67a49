// ABOUTME: reqwest implementation of the token backend transport
// ABOUTME: Resolves endpoint paths against a base URL and decodes JSON responses

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error};
use url::Url;

use crate::{
    backend::{DispatchResponse, TokenBackend},
    error::{AuthError, AuthResult},
};

/// HTTP client for the companion token backend.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: Url,
}

impl HttpBackend {
    /// Create a backend client rooted at `base_url`.
    ///
    /// Endpoint paths are resolved relative to the base, so a base of
    /// `http://host/app` posts to `http://host/app/refresh_token`.
    pub fn new(base_url: &str) -> AuthResult<Self> {
        let mut base_url = Url::parse(base_url)
            .map_err(|e| AuthError::Configuration(format!("Invalid backend URL: {}", e)))?;

        if base_url.cannot_be_a_base() {
            return Err(AuthError::Configuration(format!(
                "Backend URL cannot be used as a base: {}",
                base_url
            )));
        }

        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Full URL for an endpoint path such as `refresh_token` or `/revoke_token`.
    pub fn endpoint_url(&self, endpoint: &str) -> AuthResult<Url> {
        self.base_url
            .join(endpoint.trim_start_matches('/'))
            .map_err(|e| AuthError::Configuration(format!("Invalid endpoint {}: {}", endpoint, e)))
    }
}

#[async_trait]
impl TokenBackend for HttpBackend {
    async fn post_json(&self, endpoint: &str, payload: &Value) -> AuthResult<DispatchResponse> {
        let url = self.endpoint_url(endpoint)?;
        debug!("POST {}", url);

        let response = self
            .client
            .post(url.clone())
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                error!("Request to {} failed: {}", url, e);
                AuthError::Network(e.to_string())
            })?;

        let status = response.status();
        debug!("Backend answered {} with status {}", url, status);

        let body: Value = response.json().await.map_err(|e| {
            error!("Backend response from {} is not JSON: {}", url, e);
            AuthError::InvalidResponse(e.to_string())
        })?;

        Ok(DispatchResponse::new(status, body))
    }
}
