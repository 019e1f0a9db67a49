// ABOUTME: Tokendesk authentication library for inspecting and managing OAuth token files
// ABOUTME: Loads token records, formats remaining lifetime, and dispatches renew/revoke requests

pub mod backend;
pub mod error;
pub mod panel;
pub mod token;

// Re-export main types
pub use backend::{DispatchResponse, HttpBackend, TokenBackend};
pub use error::{AuthError, AuthResult};
pub use panel::{
    ActionOutcome, ClientSettings, EditMode, LoadOutcome, Notifier, PanelState, SettingField,
    SettingsForm, TokenPanel,
};
pub use token::{format_remaining, format_time, TokenRecord, EXPIRED_LABEL};
