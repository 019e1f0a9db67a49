// ABOUTME: Terminal notifier that stands in for modal alerts
// ABOUTME: Prints each message and waits for the user to acknowledge it

use colored::*;
use inquire::Confirm;
use std::io::IsTerminal;
use tracing::debug;

use tokendesk_auth::Notifier;

/// Prints notifications and, when acknowledgment is on, blocks until the
/// user presses Enter.
pub struct TerminalNotifier {
    acknowledge: bool,
}

impl TerminalNotifier {
    pub fn new(acknowledge: bool) -> Self {
        Self { acknowledge }
    }

    /// Acknowledge only when asked to and stdin is an interactive terminal.
    pub fn for_terminal(no_confirm: bool) -> Self {
        Self::new(!no_confirm && std::io::stdin().is_terminal())
    }
}

/// Messages reporting a problem start with one of these.
fn is_problem(message: &str) -> bool {
    message.starts_with("Error") || message.starts_with("Please") || message.starts_with("No ")
}

pub fn format_notification(message: &str) -> String {
    let marker = if is_problem(message) {
        "✗".red().bold()
    } else {
        "✓".green().bold()
    };

    let mut lines = message.lines();
    let mut formatted = format!("{} {}", marker, lines.next().unwrap_or_default());
    for line in lines {
        formatted.push('\n');
        formatted.push_str("  ");
        formatted.push_str(line);
    }
    formatted
}

impl Notifier for TerminalNotifier {
    fn notify(&self, message: &str) {
        println!();
        println!("{}", format_notification(message));

        if self.acknowledge {
            if let Err(e) = Confirm::new("Continue?")
                .with_default(true)
                .with_help_message("Press Enter to acknowledge")
                .prompt()
            {
                debug!("Notification prompt closed: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_detection() {
        assert!(is_problem("Error: Network error: refused"));
        assert!(is_problem("Please provide a refresh token."));
        assert!(is_problem("No file selected."));
        assert!(!is_problem("Token loaded successfully."));
        assert!(!is_problem("Success: {}"));
    }

    #[test]
    fn test_multiline_messages_are_indented() {
        colored::control::set_override(false);
        let formatted = format_notification("Success: {\n  \"message\": \"ok\"\n}");
        assert_eq!(formatted, "✓ Success: {\n    \"message\": \"ok\"\n  }");
    }

    #[test]
    fn test_explicit_acknowledge_setting() {
        assert!(TerminalNotifier::new(true).acknowledge);
        assert!(!TerminalNotifier::new(false).acknowledge);
        assert!(!TerminalNotifier::for_terminal(true).acknowledge);
    }
}
