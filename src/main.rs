//! FeeDesk — terminal client for the fee/loan back office.
//!
//! Loads configuration, initialises logging, recovers the persisted
//! session once, and dispatches the requested command.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use feedesk_cli::{AppContext, Cli, output};
use feedesk_core::config::AppConfig;
use feedesk_core::error::AppError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_configuration(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            output::print_error(&format!("Failed to load configuration: {}", e));
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(&cli, &config).await {
        tracing::debug!(kind = %e.kind, status = ?e.status, "Command failed");
        output::print_error(&e.message);
        std::process::exit(1);
    }
}

/// Load configuration from file, environment overlay, and variables
fn load_configuration(config_path: &str) -> Result<AppConfig, AppError> {
    let env = std::env::var("FEEDESK_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(config_path, &env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

/// Wire the session and run the command
async fn run(cli: &Cli, config: &AppConfig) -> Result<(), AppError> {
    tracing::debug!(
        base_url = %config.api.base_url,
        storage_dir = %config.session.storage_dir,
        "Starting FeeDesk v{}",
        env!("CARGO_PKG_VERSION")
    );

    let ctx = AppContext::from_config(config)?;
    cli.execute(&ctx).await
}
