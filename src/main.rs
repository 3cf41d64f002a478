// src/main.rs
use std::sync::Arc;

use clap::Parser;
use dotenv::dotenv;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

// ============================================================================
// MODULE IMPORTS
// ============================================================================

mod cli;

use cli::{Cli, CliError};
use recruit::common::safe_email_log;
use recruit::navigation::{MemoryNavigator, Navigator, TerminalNotifier};
use recruit::AppState;

// ============================================================================
// MAIN APPLICATION ENTRY POINT
// ============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config();
    debug!(
        api_url = %config.api_url,
        session_file = %config.session_file.display(),
        login_contract = ?config.login_contract,
        "Configuration loaded"
    );

    // ========================================================================
    // STATE SETUP
    // ========================================================================

    let navigator = Arc::new(MemoryNavigator::new());
    let state = AppState::init(config, navigator.clone(), Arc::new(TerminalNotifier)).await?;

    if let Some(user) = state.auth.session().user().await {
        info!(email = %safe_email_log(&user.email), "Using stored session");
    }

    // ========================================================================
    // DISPATCH
    // ========================================================================

    let result = cli::commands::run(&state, cli.command).await;
    debug!(view = %navigator.current_path(), "Finished");

    match result {
        Ok(()) => Ok(()),
        Err(CliError::Reported) => std::process::exit(1),
        Err(e) => Err(e.into()),
    }
}
