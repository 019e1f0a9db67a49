// ABOUTME: Table rendering for token details and the client settings form
// ABOUTME: Builds comfy-table tables from the panel state

use colored::*;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};

use tokendesk_auth::{PanelState, SettingField, SettingsForm, EXPIRED_LABEL};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn availability(enabled: bool) -> String {
    if enabled {
        "available".green().to_string()
    } else {
        "unavailable".dimmed().to_string()
    }
}

/// Token detail table, or `None` while no token has been loaded.
pub fn details_table(state: &PanelState) -> Option<Table> {
    if !state.details_visible {
        return None;
    }

    let expires_in = if state.expires_in == EXPIRED_LABEL {
        state.expires_in.red().bold().to_string()
    } else {
        state.expires_in.clone()
    };

    let expires_at = state
        .expires_at
        .map(|at| at.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "-".to_string());

    let mut table = new_table();
    table.set_header(vec!["Field", "Value"]);
    table.add_row(vec!["Token Type".to_string(), state.token_type.clone()]);
    table.add_row(vec!["Access Token".to_string(), state.access_token.clone()]);
    table.add_row(vec!["Expires In".to_string(), expires_in]);
    table.add_row(vec!["Expires At".to_string(), expires_at]);
    table.add_row(vec!["Refresh Token".to_string(), state.refresh_token.clone()]);
    table.add_row(vec!["Renew".to_string(), availability(state.renew_enabled)]);
    table.add_row(vec!["Deauthorize".to_string(), availability(state.revoke_enabled)]);
    Some(table)
}

pub fn print_details(state: &PanelState) {
    match details_table(state) {
        Some(table) => {
            println!("{}", "🔑 Token Details".blue().bold());
            println!("{}", table);
        }
        None => {
            println!("{}", "No token loaded".yellow());
            println!("{}", "Load a token file to see its details".dimmed());
        }
    }
}

/// Mask all but the last four characters of a secret.
pub fn mask_secret(secret: &str) -> String {
    let count = secret.chars().count();
    if count <= 4 {
        return "*".repeat(count);
    }
    let visible: String = secret.chars().skip(count - 4).collect();
    format!("{}{}", "*".repeat(count - 4), visible)
}

pub fn settings_table(form: &SettingsForm) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Setting", "Input", "Applied"]);

    for field in SettingField::all() {
        let (input, applied) = match field {
            SettingField::ClientSecret => (
                mask_secret(form.inputs().get(field)),
                mask_secret(form.applied().get(field)),
            ),
            _ => (
                form.inputs().get(field).to_string(),
                form.applied().get(field).to_string(),
            ),
        };
        table.add_row(vec![field.to_string(), input, applied]);
    }

    table
}

pub fn print_settings(form: &SettingsForm) {
    let mode = if form.is_editing() {
        "editing".yellow().bold()
    } else {
        "locked".dimmed()
    };
    println!("{} ({})", "⚙ Client Settings".blue().bold(), mode);
    println!("{}", settings_table(form));
}
