// ABOUTME: Shared configuration names and defaults for Tokendesk
// ABOUTME: Keeps environment variable names in one place for the CLI and its tests

pub mod constants;
pub mod defaults;
