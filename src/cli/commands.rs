//! CLI command implementations

use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use super::args::Command;
use super::errors::{CliError, CliResult};
use crate::auth::AuthService;
use crate::config::Config;
use crate::http_server::{AppState, HttpServer};
use crate::store::{LocalBackend, Store};

const DEFAULT_LOG_FILTER: &str = "contest_vote=info,tower_http=info";

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    init_tracing();
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config } => init(&config),
        Command::Serve { config, port } => serve(&config, port),
        Command::GrantAdmin { config, login } => grant_admin(&config, &login),
    }
}

/// `RUST_LOG` wins over the default filter
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    // A subscriber may already be installed when embedded in tests
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Open the document store under the configured data directory
pub fn open_store(config: &Config) -> CliResult<Store> {
    fs::create_dir_all(&config.data_dir)?;
    Ok(Store::new(LocalBackend::new(config.data_dir.clone())))
}

/// Create the data directory and write every missing document
pub fn init(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let store = open_store(&config)?;
    store.ensure_documents()?;

    info!(data_dir = %config.data_dir.display(), "data directory initialized");
    Ok(())
}

/// Run the HTTP API until the process is stopped
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let store = Arc::new(open_store(&config)?);
    store.ensure_documents()?;

    let mut http_config = config.http.clone();
    if let Some(port) = port {
        http_config.port = port;
    }

    let state = Arc::new(AppState::new(store, config.jwt_config()));
    let server = HttpServer::with_state(http_config, state);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Set the admin flag on an existing user
pub fn grant_admin(config_path: &Path, login: &str) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let store = Arc::new(open_store(&config)?);

    // Tokens are never issued here, so the secret is irrelevant
    let auth = AuthService::new(store, Default::default());
    auth.grant_admin(login)?;
    Ok(())
}
