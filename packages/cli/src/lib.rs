// ABOUTME: Library side of the tokendesk CLI
// ABOUTME: Configuration, terminal notifications, table rendering, and logging setup

pub mod config;
pub mod display;
pub mod logging;
pub mod notifier;

#[cfg(test)]
mod tests {
    mod config_tests;
}
