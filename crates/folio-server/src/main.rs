//! # Folio Server
//!
//! Main entry point: loads configuration, installs logging and serves the
//! article API until Ctrl-C or SIGTERM.

use folio_config::ConfigLoader;
use folio_server::telemetry::init_logging;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match ConfigLoader::from_default_location().load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config.observability);

    info!("Starting Folio Server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", config.app.environment);

    if let Err(e) = folio_server::run(config).await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}
