// ABOUTME: Interactive token panel session driven by inquire menus
// ABOUTME: Offers only the actions the panel state currently enables

use colored::*;
use inquire::{InquireError, Password, PasswordDisplayMode, Select, Text};
use std::fmt;
use std::path::PathBuf;
use tracing::debug;

use tokendesk_auth::{EditMode, LoadOutcome, PanelState, SettingField, TokenPanel};
use tokendesk_cli::display::{print_details, print_settings};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PanelAction {
    LoadFile,
    ShowDetails,
    Renew,
    Deauthorize,
    ShowSettings,
    /// Carries the current mode so the label follows it.
    ToggleEdit(EditMode),
    EditSetting,
    UpdateSettings,
    Quit,
}

impl fmt::Display for PanelAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoadFile => write!(f, "Load token file"),
            Self::ShowDetails => write!(f, "Show token details"),
            Self::Renew => write!(f, "Renew token"),
            Self::Deauthorize => write!(f, "Deauthorize token"),
            Self::ShowSettings => write!(f, "Show client settings"),
            Self::ToggleEdit(mode) => write!(f, "{} (client settings)", mode.button_label()),
            Self::EditSetting => write!(f, "Change a client setting"),
            Self::UpdateSettings => write!(f, "Update client settings"),
            Self::Quit => write!(f, "Quit"),
        }
    }
}

fn available_actions(state: &PanelState) -> Vec<PanelAction> {
    let mut actions = vec![PanelAction::LoadFile];

    if state.details_visible {
        actions.push(PanelAction::ShowDetails);
    }
    if state.renew_enabled {
        actions.push(PanelAction::Renew);
    }
    if state.revoke_enabled {
        actions.push(PanelAction::Deauthorize);
    }

    actions.push(PanelAction::ShowSettings);
    actions.push(PanelAction::ToggleEdit(state.settings.mode()));
    if state.settings.inputs_enabled() {
        actions.push(PanelAction::EditSetting);
    }
    if state.settings.update_enabled() {
        actions.push(PanelAction::UpdateSettings);
    }

    actions.push(PanelAction::Quit);
    actions
}

fn is_cancel(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Empty input means no file was chosen.
fn chosen_path(input: &str) -> Option<PathBuf> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
}

/// Empty secret input keeps the current secret.
fn secret_or_current(input: String, current: &str) -> String {
    if input.trim().is_empty() {
        current.to_string()
    } else {
        input
    }
}

fn prompt_setting_value(field: SettingField, current: &str) -> Result<String, InquireError> {
    let prompt = format!("{}:", field);
    match field {
        SettingField::ClientSecret => Password::new(&prompt)
            .with_display_mode(PasswordDisplayMode::Masked)
            .without_confirmation()
            .with_help_message("Leave empty to keep the current secret")
            .prompt()
            .map(|input| secret_or_current(input, current)),
        _ => Text::new(&prompt).with_default(current).prompt(),
    }
}

async fn load_from_prompt(panel: &mut TokenPanel) -> Result<(), InquireError> {
    let input = Text::new("Token file path:")
        .with_help_message("Leave empty to cancel")
        .prompt()?;

    let path = chosen_path(&input);
    if panel.load_file(path.as_deref()).await == LoadOutcome::Loaded {
        println!();
        print_details(panel.state());
    }
    Ok(())
}

fn edit_setting(panel: &mut TokenPanel) -> anyhow::Result<()> {
    let field = Select::new("Which setting?", SettingField::all().to_vec()).prompt()?;
    let current = panel.settings().inputs().get(field).to_string();
    let value = prompt_setting_value(field, &current)?;
    panel.set_setting_input(field, &value)?;
    Ok(())
}

/// Run the interactive panel until the user quits.
pub async fn run_panel(mut panel: TokenPanel, file: Option<PathBuf>) -> anyhow::Result<()> {
    println!("{}", "🔐 Tokendesk".bold().cyan());
    println!();

    if let Some(file) = file {
        if panel.load_file(Some(file.as_path())).await == LoadOutcome::Loaded {
            println!();
            print_details(panel.state());
        }
    }

    loop {
        println!();
        let actions = available_actions(panel.state());
        let action = match Select::new("What would you like to do?", actions).prompt() {
            Ok(action) => action,
            Err(e) if is_cancel(&e) => break,
            Err(e) => return Err(e.into()),
        };

        let result: anyhow::Result<()> = match action {
            PanelAction::LoadFile => load_from_prompt(&mut panel).await.map_err(Into::into),
            PanelAction::ShowDetails => {
                print_details(panel.state());
                Ok(())
            }
            PanelAction::Renew => {
                if let Err(e) = panel.renew().await {
                    debug!("Renewal failed: {}", e);
                }
                Ok(())
            }
            PanelAction::Deauthorize => {
                if panel.revoke().await.is_success() {
                    println!("{}", "Token deauthorized, panel reset".dimmed());
                }
                Ok(())
            }
            PanelAction::ShowSettings => {
                print_settings(panel.settings());
                Ok(())
            }
            PanelAction::ToggleEdit(_) => {
                panel.toggle_edit();
                print_settings(panel.settings());
                Ok(())
            }
            PanelAction::EditSetting => edit_setting(&mut panel),
            PanelAction::UpdateSettings => match panel.update_settings() {
                Ok(_) => {
                    print_settings(panel.settings());
                    Ok(())
                }
                Err(e) => Err(e.into()),
            },
            PanelAction::Quit => break,
        };

        if let Err(e) = result {
            match e.downcast_ref::<InquireError>() {
                Some(inquire_err) if is_cancel(inquire_err) => continue,
                _ => eprintln!("{} {}", "✗".red().bold(), e),
            }
        }
    }

    println!("{}", "Goodbye".dimmed());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokendesk_auth::ClientSettings;

    fn blank_state() -> PanelState {
        PanelState::new(ClientSettings::default())
    }

    #[test]
    fn test_blank_panel_offers_no_token_actions() {
        let actions = available_actions(&blank_state());
        assert!(actions.contains(&PanelAction::LoadFile));
        assert!(!actions.contains(&PanelAction::ShowDetails));
        assert!(!actions.contains(&PanelAction::Renew));
        assert!(!actions.contains(&PanelAction::Deauthorize));
        assert!(actions.contains(&PanelAction::ToggleEdit(EditMode::Locked)));
        assert!(!actions.contains(&PanelAction::UpdateSettings));
        assert_eq!(actions.last(), Some(&PanelAction::Quit));
    }

    #[test]
    fn test_enabled_actions_follow_state() {
        let mut state = blank_state();
        state.details_visible = true;
        state.revoke_enabled = true;

        let actions = available_actions(&state);
        assert!(actions.contains(&PanelAction::ShowDetails));
        assert!(actions.contains(&PanelAction::Deauthorize));
        assert!(!actions.contains(&PanelAction::Renew));
    }

    #[test]
    fn test_toggle_label_follows_mode() {
        assert_eq!(
            PanelAction::ToggleEdit(EditMode::Locked).to_string(),
            "Edit (client settings)"
        );
        assert_eq!(
            PanelAction::ToggleEdit(EditMode::Editing).to_string(),
            "Cancel (client settings)"
        );
    }

    #[test]
    fn test_empty_secret_keeps_current() {
        assert_eq!(secret_or_current(String::new(), "old-secret"), "old-secret");
        assert_eq!(secret_or_current("   ".to_string(), "old-secret"), "old-secret");
        assert_eq!(
            secret_or_current("new-secret".to_string(), "old-secret"),
            "new-secret"
        );
    }

    #[test]
    fn test_chosen_path() {
        assert_eq!(chosen_path("   "), None);
        assert_eq!(chosen_path(""), None);
        assert_eq!(
            chosen_path(" ./token.json "),
            Some(PathBuf::from("./token.json"))
        );
    }
}
