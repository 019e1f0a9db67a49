// ABOUTME: Token panel component tying token files, display state, and backend actions together
// ABOUTME: Loads token files, renews and revokes tokens, and drives the client settings form

pub mod notifier;
pub mod state;

use chrono::{DateTime, Utc};
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use tokendesk_config::defaults::{REFRESH_TOKEN_PATH, REVOKE_TOKEN_PATH};

use crate::{
    backend::{DispatchResponse, RefreshTokenRequest, RevokeTokenRequest, TokenBackend},
    error::{AuthError, AuthResult},
    token::TokenRecord,
};

pub use notifier::Notifier;
pub use state::{ClientSettings, EditMode, PanelState, SettingField, SettingsForm};

/// Result of a token file load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No file was chosen; nothing changed.
    NoFileSelected,
    /// The panel now shows the loaded token.
    Loaded,
    /// The file could not be read or parsed; the previous state is kept.
    Rejected,
}

/// Result of a renew or revoke action.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    /// A required token field was empty and no request was sent.
    Aborted,
    /// The backend answered. Check the status for success.
    Answered(DispatchResponse),
    /// The request failed before a readable answer arrived.
    Failed,
}

impl ActionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Answered(response) if response.is_success())
    }
}

/// Stateful token management panel.
///
/// Owns the displayed token fields, the settings form, the backend client,
/// and the notifier. Every operation takes `&mut self`, so one panel never
/// runs two loads or dispatches at once.
pub struct TokenPanel {
    backend: Arc<dyn TokenBackend>,
    notifier: Arc<dyn Notifier>,
    state: PanelState,
}

impl TokenPanel {
    pub fn new(
        backend: Arc<dyn TokenBackend>,
        notifier: Arc<dyn Notifier>,
        settings: ClientSettings,
    ) -> Self {
        Self {
            backend,
            notifier,
            state: PanelState::new(settings),
        }
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn settings(&self) -> &SettingsForm {
        &self.state.settings
    }

    fn notify(&self, message: &str) {
        self.notifier.notify(message);
    }

    /// Load a token file chosen by the user.
    pub async fn load_file(&mut self, path: Option<&Path>) -> LoadOutcome {
        let Some(path) = path else {
            self.notify(&AuthError::NoFileSelected.to_string());
            return LoadOutcome::NoFileSelected;
        };

        debug!("Reading token file {}", path.display());
        match tokio::fs::read_to_string(path).await {
            Ok(contents) => self.load_contents(&contents),
            Err(e) => {
                let err = AuthError::Io(e);
                warn!("Failed to read token file {}: {}", path.display(), err);
                self.notify(&format!("Error reading token file: {}", err));
                LoadOutcome::Rejected
            }
        }
    }

    /// Load token file contents that were already read.
    pub fn load_contents(&mut self, contents: &str) -> LoadOutcome {
        self.load_contents_at(contents, Utc::now())
    }

    /// Load token file contents, computing the remaining lifetime as of `now`.
    pub fn load_contents_at(&mut self, contents: &str, now: DateTime<Utc>) -> LoadOutcome {
        match TokenRecord::parse(contents) {
            Ok(record) => {
                debug!("Parsed token record: {:?}", record);
                self.state.show_record(&record, now);
                info!("Token loaded, expires in: {}", self.state.expires_in);
                self.notify("Token loaded successfully.");
                LoadOutcome::Loaded
            }
            Err(e) => {
                warn!("Rejected token file: {}", e);
                self.notify(&format!("Error parsing token file: {}", e));
                LoadOutcome::Rejected
            }
        }
    }

    /// Overwrite the access token field, as typing into it would.
    pub fn set_access_token(&mut self, token: impl Into<String>) {
        self.state.access_token = token.into();
    }

    /// Overwrite the refresh token field, as typing into it would.
    pub fn set_refresh_token(&mut self, token: impl Into<String>) {
        self.state.refresh_token = token.into();
    }

    /// Send `payload` to a backend endpoint and tell the user what came back.
    ///
    /// Any decoded response is returned, whatever its status. Transport and
    /// decode failures are reported and then returned as errors.
    pub async fn send_request(
        &self,
        endpoint: &str,
        payload: &Value,
    ) -> AuthResult<DispatchResponse> {
        match self.backend.post_json(endpoint, payload).await {
            Ok(response) => {
                if response.is_success() {
                    self.notify(&format!("Success: {}", response.pretty_body()));
                } else {
                    self.notify(&format!("Error: {}", response.pretty_body()));
                }
                Ok(response)
            }
            Err(e) => {
                self.notify(&format!("Error: {}", e));
                Err(e)
            }
        }
    }

    /// Exchange the refresh token field for a new token.
    pub async fn renew(&mut self) -> AuthResult<ActionOutcome> {
        if self.state.refresh_token.is_empty() {
            self.notify(&AuthError::MissingRefreshToken.to_string());
            return Ok(ActionOutcome::Aborted);
        }

        info!("Requesting token renewal");
        let payload = serde_json::to_value(RefreshTokenRequest {
            refresh_token: &self.state.refresh_token,
        })?;

        let response = self.send_request(REFRESH_TOKEN_PATH, &payload).await?;
        Ok(ActionOutcome::Answered(response))
    }

    /// Revoke the access token field, resetting the panel when the backend accepts.
    pub async fn revoke(&mut self) -> ActionOutcome {
        if self.state.access_token.is_empty() {
            self.notify(&AuthError::MissingAccessToken.to_string());
            return ActionOutcome::Aborted;
        }

        info!("Requesting token revocation");
        let payload = match serde_json::to_value(RevokeTokenRequest {
            token: &self.state.access_token,
        }) {
            Ok(payload) => payload,
            Err(e) => {
                error!("Error during deauthorization: {}", AuthError::from(e));
                return ActionOutcome::Failed;
            }
        };

        match self.send_request(REVOKE_TOKEN_PATH, &payload).await {
            Ok(response) => {
                if response.is_success() {
                    info!("Token revoked, resetting panel");
                    self.reset();
                }
                ActionOutcome::Answered(response)
            }
            Err(e) => {
                error!("Error during deauthorization: {}", e);
                ActionOutcome::Failed
            }
        }
    }

    /// Switch the settings form between locked and editing.
    pub fn toggle_edit(&mut self) -> EditMode {
        let mode = self.state.settings.toggle();
        debug!("Settings form is now {:?}", mode);
        mode
    }

    /// Type a value into one of the settings inputs.
    pub fn set_setting_input(&mut self, field: SettingField, value: &str) -> AuthResult<()> {
        self.state.settings.set_input(field, value)
    }

    /// Apply the edited client settings and lock the form.
    pub fn update_settings(&mut self) -> AuthResult<ClientSettings> {
        let applied = self.state.settings.commit()?.clone();
        info!(
            "Client settings updated: client_id={} app_uri={}",
            applied.client_id, applied.app_uri
        );
        self.notify("Client settings updated.");
        Ok(applied)
    }

    /// Drop the loaded token and return to the initial state.
    ///
    /// The settings form is rebuilt from the applied settings, so an earlier
    /// `update_settings` survives the reset.
    pub fn reset(&mut self) {
        let applied = self.state.settings.applied().clone();
        self.state = PanelState::new(applied);
    }
}
