use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use std::process::ExitCode;

mod cli;

use tokendesk_cli::config::Config;
use tokendesk_cli::logging::init_logging;

#[derive(Parser)]
#[command(name = "tokendesk")]
#[command(about = "Tokendesk - inspect, renew, and revoke OAuth token files")]
#[command(version)]
struct Cli {
    /// Base URL of the token backend (overrides TOKENDESK_BACKEND_URL)
    #[arg(long, global = true, value_name = "URL")]
    backend_url: Option<String>,

    /// Print notifications without waiting for acknowledgment
    #[arg(long, global = true)]
    no_confirm: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a token file and show its details
    Show {
        /// Path to the token file
        file: PathBuf,
    },
    /// Exchange a refresh token for a new access token
    Renew {
        /// Token file to take the refresh token from
        #[arg(long, value_name = "FILE")]
        file: Option<PathBuf>,

        /// Refresh token to use instead of the one in the file
        #[arg(long, value_name = "TOKEN")]
        refresh_token: Option<String>,
    },
    /// Revoke (deauthorize) an access token
    Revoke {
        /// Token file to take the access token from
        #[arg(long, value_name = "FILE")]
        file: Option<PathBuf>,

        /// Access token to use instead of the one in the file
        #[arg(long, value_name = "TOKEN")]
        token: Option<String>,
    },
    /// Open the interactive token panel
    Panel {
        /// Token file to load on start
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = init_logging() {
        eprintln!("{} {}", "⚠".yellow(), e);
    }

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let mut config = Config::from_env()?;
    if let Some(url) = &cli.backend_url {
        config = config.with_backend_url(url)?;
    }
    let no_confirm = cli.no_confirm || config.no_confirm;

    let panel = cli::build_panel(&config, no_confirm)?;

    let code = match cli.command {
        Commands::Show { file } => cli::tokens::show(panel, &file).await,
        Commands::Renew {
            file,
            refresh_token,
        } => cli::tokens::renew(panel, file.as_deref(), refresh_token).await,
        Commands::Revoke { file, token } => {
            cli::tokens::revoke(panel, file.as_deref(), token).await
        }
        Commands::Panel { file } => {
            cli::panel::run_panel(panel, file).await?;
            ExitCode::SUCCESS
        }
    };

    Ok(code)
}
