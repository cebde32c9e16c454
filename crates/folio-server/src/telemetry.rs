//! Logging setup.

use folio_config::ObservabilityConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info,folio=debug,tower_http=debug";

/// Builds the filter: `RUST_LOG` wins, then the configured level, then
/// [`DEFAULT_FILTER`].
#[must_use]
pub fn env_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| {
            if config.log_level.is_empty() || config.log_level == "info" {
                EnvFilter::try_new(DEFAULT_FILTER)
            } else {
                EnvFilter::try_new(&config.log_level)
            }
        })
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. JSON output when `log_format = "json"`.
pub fn init_logging(config: &ObservabilityConfig) {
    let registry = tracing_subscriber::registry().with(env_filter(config));

    if config.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init();
    }
}
