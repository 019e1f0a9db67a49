pub mod panel;
pub mod tokens;

use std::sync::Arc;

use tokendesk_auth::{HttpBackend, TokenPanel};
use tokendesk_cli::config::Config;
use tokendesk_cli::notifier::TerminalNotifier;

/// Build the panel for one CLI session.
pub fn build_panel(config: &Config, no_confirm: bool) -> anyhow::Result<TokenPanel> {
    let backend = HttpBackend::new(config.backend_url.as_str())?;
    let notifier = TerminalNotifier::for_terminal(no_confirm);

    Ok(TokenPanel::new(
        Arc::new(backend),
        Arc::new(notifier),
        config.client.clone(),
    ))
}
