//! Server startup utilities.

use folio_config::AppConfig;
use tracing::info;

/// Prints server startup information.
pub fn print_startup_info(config: &AppConfig) {
    let separator = "=".repeat(60);
    let addr = config.server.addr();
    info!("{}", separator);
    info!("REST API:  http://{}/articles", addr);
    info!("Health:    http://{}/health", addr);
    info!("Table:     {}", config.database.table_name);
    if config.redis.enabled {
        info!("Cache:     redis, TTL {}s", config.cache.ttl_secs);
    } else {
        info!("Cache:     disabled");
    }
    info!("{}", separator);
}
