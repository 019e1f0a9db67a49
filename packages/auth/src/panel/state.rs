// ABOUTME: Display state owned by the token panel
// ABOUTME: Token detail fields, action availability, and the client settings form

use chrono::{DateTime, Utc};
use std::fmt;

use crate::{
    error::{AuthError, AuthResult},
    token::{format_remaining, TokenRecord},
};

/// Whether the client settings form accepts edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Locked,
    Editing,
}

impl EditMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Locked => Self::Editing,
            Self::Editing => Self::Locked,
        }
    }

    /// Label of the button that switches out of this mode.
    pub fn button_label(self) -> &'static str {
        match self {
            Self::Locked => "Edit",
            Self::Editing => "Cancel",
        }
    }
}

/// OAuth client settings shown in the settings form.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ClientSettings {
    pub client_id: String,
    pub client_secret: String,
    pub app_uri: String,
}

impl ClientSettings {
    /// Build settings with surrounding whitespace removed from every value.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        app_uri: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into().trim().to_string(),
            client_secret: client_secret.into().trim().to_string(),
            app_uri: app_uri.into().trim().to_string(),
        }
    }

    pub fn get(&self, field: SettingField) -> &str {
        match field {
            SettingField::ClientId => &self.client_id,
            SettingField::ClientSecret => &self.client_secret,
            SettingField::AppUri => &self.app_uri,
        }
    }

    fn set(&mut self, field: SettingField, value: String) {
        match field {
            SettingField::ClientId => self.client_id = value,
            SettingField::ClientSecret => self.client_secret = value,
            SettingField::AppUri => self.app_uri = value,
        }
    }
}

impl fmt::Debug for ClientSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientSettings")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("app_uri", &self.app_uri)
            .finish()
    }
}

/// One of the three editable inputs of the settings form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingField {
    ClientId,
    ClientSecret,
    AppUri,
}

impl SettingField {
    pub fn all() -> [Self; 3] {
        [Self::ClientId, Self::ClientSecret, Self::AppUri]
    }
}

impl fmt::Display for SettingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClientId => write!(f, "Client ID"),
            Self::ClientSecret => write!(f, "Client Secret"),
            Self::AppUri => write!(f, "App URI"),
        }
    }
}

/// Settings form: the input values, the applied settings, and the edit mode.
///
/// Inputs and the update button are enabled exactly while editing. Leaving
/// edit mode keeps whatever was typed into the inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsForm {
    mode: EditMode,
    inputs: ClientSettings,
    applied: ClientSettings,
}

impl SettingsForm {
    pub fn new(settings: ClientSettings) -> Self {
        Self {
            mode: EditMode::Locked,
            inputs: settings.clone(),
            applied: settings,
        }
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == EditMode::Editing
    }

    pub fn inputs_enabled(&self) -> bool {
        self.is_editing()
    }

    pub fn update_enabled(&self) -> bool {
        self.is_editing()
    }

    pub fn edit_label(&self) -> &'static str {
        self.mode.button_label()
    }

    pub fn inputs(&self) -> &ClientSettings {
        &self.inputs
    }

    pub fn applied(&self) -> &ClientSettings {
        &self.applied
    }

    pub(crate) fn toggle(&mut self) -> EditMode {
        self.mode = self.mode.toggled();
        self.mode
    }

    pub(crate) fn set_input(&mut self, field: SettingField, value: &str) -> AuthResult<()> {
        if !self.inputs_enabled() {
            return Err(AuthError::SettingsLocked);
        }
        self.inputs.set(field, value.trim().to_string());
        Ok(())
    }

    /// Apply the input values and lock the form.
    pub(crate) fn commit(&mut self) -> AuthResult<&ClientSettings> {
        if !self.update_enabled() {
            return Err(AuthError::SettingsLocked);
        }
        self.applied = self.inputs.clone();
        self.mode = EditMode::Locked;
        Ok(&self.applied)
    }
}

/// Everything the token panel displays.
#[derive(Clone, PartialEq, Eq)]
pub struct PanelState {
    pub token_type: String,
    pub access_token: String,
    /// Formatted remaining lifetime, or "Expired".
    pub expires_in: String,
    pub refresh_token: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub renew_enabled: bool,
    pub revoke_enabled: bool,
    pub details_visible: bool,
    pub settings: SettingsForm,
}

impl PanelState {
    pub fn new(settings: ClientSettings) -> Self {
        Self {
            token_type: String::new(),
            access_token: String::new(),
            expires_in: String::new(),
            refresh_token: String::new(),
            expires_at: None,
            renew_enabled: false,
            revoke_enabled: false,
            details_visible: false,
            settings: SettingsForm::new(settings),
        }
    }

    /// Replace every token field with values from `record` as of `now`.
    pub(crate) fn show_record(&mut self, record: &TokenRecord, now: DateTime<Utc>) {
        self.token_type = record.token_type().to_string();
        self.access_token = record.access_token().to_string();
        self.expires_in = format_remaining(record.remaining_seconds_at(now));
        self.refresh_token = record.refresh_token().to_string();
        self.expires_at = record.expires_at();
        self.renew_enabled = record.has_refresh_token();
        self.revoke_enabled = record.has_access_token();
        self.details_visible = true;
    }
}

impl fmt::Debug for PanelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |value: &str| if value.is_empty() { "" } else { "[REDACTED]" };
        f.debug_struct("PanelState")
            .field("token_type", &self.token_type)
            .field("access_token", &redact(&self.access_token))
            .field("expires_in", &self.expires_in)
            .field("refresh_token", &redact(&self.refresh_token))
            .field("expires_at", &self.expires_at)
            .field("renew_enabled", &self.renew_enabled)
            .field("revoke_enabled", &self.revoke_enabled)
            .field("details_visible", &self.details_visible)
            .field("settings", &self.settings)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> ClientSettings {
        ClientSettings::new("client-1", "secret-1", "http://127.0.0.1:5000/callback")
    }

    #[test]
    fn test_edit_mode_labels() {
        assert_eq!(EditMode::Locked.button_label(), "Edit");
        assert_eq!(EditMode::Editing.button_label(), "Cancel");
        assert_eq!(EditMode::Locked.toggled(), EditMode::Editing);
        assert_eq!(EditMode::Editing.toggled(), EditMode::Locked);
    }

    #[test]
    fn test_client_settings_are_trimmed() {
        let settings = ClientSettings::new("  id \n", "\tsecret", " uri ");
        assert_eq!(settings.client_id, "id");
        assert_eq!(settings.client_secret, "secret");
        assert_eq!(settings.app_uri, "uri");
    }

    #[test]
    fn test_client_settings_debug_hides_secret() {
        let debug = format!("{:?}", settings());
        assert!(debug.contains("client-1"));
        assert!(!debug.contains("secret-1"));
    }

    #[test]
    fn test_form_starts_locked() {
        let form = SettingsForm::new(settings());
        assert_eq!(form.mode(), EditMode::Locked);
        assert!(!form.inputs_enabled());
        assert!(!form.update_enabled());
        assert_eq!(form.edit_label(), "Edit");
    }

    #[test]
    fn test_set_input_requires_editing() {
        let mut form = SettingsForm::new(settings());
        let err = form.set_input(SettingField::ClientId, "other").unwrap_err();
        assert!(matches!(err, AuthError::SettingsLocked));
        assert_eq!(form.inputs().client_id, "client-1");
    }

    #[test]
    fn test_cancel_keeps_typed_inputs_but_not_applied() {
        let mut form = SettingsForm::new(settings());
        form.toggle();
        form.set_input(SettingField::AppUri, "http://localhost/cb").unwrap();
        form.toggle();

        assert_eq!(form.mode(), EditMode::Locked);
        assert_eq!(form.inputs().app_uri, "http://localhost/cb");
        assert_eq!(form.applied().app_uri, "http://127.0.0.1:5000/callback");
    }

    #[test]
    fn test_commit_applies_and_locks() {
        let mut form = SettingsForm::new(settings());
        form.toggle();
        form.set_input(SettingField::ClientSecret, " new-secret ").unwrap();
        let applied = form.commit().unwrap().clone();

        assert_eq!(applied.client_secret, "new-secret");
        assert_eq!(form.mode(), EditMode::Locked);
        assert!(matches!(form.commit(), Err(AuthError::SettingsLocked)));
    }

    #[test]
    fn test_new_panel_state_is_blank() {
        let state = PanelState::new(settings());
        assert!(state.token_type.is_empty());
        assert!(!state.renew_enabled);
        assert!(!state.revoke_enabled);
        assert!(!state.details_visible);
        assert!(state.expires_at.is_none());
    }

    #[test]
    fn test_panel_state_debug_redacts_tokens() {
        let mut state = PanelState::new(settings());
        state.access_token = "access-secret".to_string();
        let debug = format!("{:?}", state);
        assert!(!debug.contains("access-secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
