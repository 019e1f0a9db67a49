// ABOUTME: One-shot CLI commands for showing, renewing, and revoking a token
// ABOUTME: Each command drives a fresh panel and maps the outcome to an exit code

use colored::*;
use std::path::Path;
use std::process::ExitCode;
use tracing::debug;

use tokendesk_auth::{ActionOutcome, LoadOutcome, TokenPanel};
use tokendesk_cli::display::print_details;

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Load `file` when given. Returns false if a file was given but not loaded.
async fn load_optional(panel: &mut TokenPanel, file: Option<&Path>) -> bool {
    match file {
        Some(file) => panel.load_file(Some(file)).await == LoadOutcome::Loaded,
        None => true,
    }
}

pub async fn show(mut panel: TokenPanel, file: &Path) -> ExitCode {
    let loaded = panel.load_file(Some(file)).await == LoadOutcome::Loaded;
    if loaded {
        println!();
        print_details(panel.state());
    }
    exit_code(loaded)
}

pub async fn renew(
    mut panel: TokenPanel,
    file: Option<&Path>,
    refresh_token: Option<String>,
) -> ExitCode {
    if !load_optional(&mut panel, file).await {
        return ExitCode::FAILURE;
    }
    if let Some(refresh_token) = refresh_token {
        panel.set_refresh_token(refresh_token);
    }

    match panel.renew().await {
        Ok(outcome) => exit_code(outcome.is_success()),
        Err(e) => {
            // Already shown to the user by the panel
            debug!("Renewal failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

pub async fn revoke(mut panel: TokenPanel, file: Option<&Path>, token: Option<String>) -> ExitCode {
    if !load_optional(&mut panel, file).await {
        return ExitCode::FAILURE;
    }
    if let Some(token) = token {
        panel.set_access_token(token);
    }

    let outcome = panel.revoke().await;
    if outcome.is_success() {
        println!("{} {}", "✓".green().bold(), "Token deauthorized".bold());
    } else if let ActionOutcome::Answered(response) = &outcome {
        debug!("Backend refused revocation with status {}", response.status);
    }
    exit_code(outcome.is_success())
}
