// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names used across Tokendesk

// Backend Configuration
pub const TOKENDESK_BACKEND_URL: &str = "TOKENDESK_BACKEND_URL";

// Client Settings (same names the token backend reads)
pub const CLIENT_ID: &str = "CLIENT_ID";
pub const CLIENT_SECRET: &str = "CLIENT_SECRET";
pub const REDIRECT_URI: &str = "REDIRECT_URI";

// Terminal Behaviour
pub const TOKENDESK_NO_CONFIRM: &str = "TOKENDESK_NO_CONFIRM";

// Logging
pub const RUST_LOG: &str = "RUST_LOG";
