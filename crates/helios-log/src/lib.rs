//! Structured logging for the Helios planet generator.
//!
//! Provides filterable console logging via the `tracing` ecosystem, with the
//! log level taken from the environment (`RUST_LOG`) or the configuration
//! file.

use helios_config::Config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Sets up console output with module paths and severity levels. The filter
/// is taken from `RUST_LOG` when set; otherwise the config's
/// `debug.log_level` is used, falling back to `info`.
///
/// # Examples
///
/// ```no_run
/// use helios_config::Config;
/// use helios_log::init_logging;
///
/// init_logging(None);
///
/// let config = Config::default();
/// init_logging(Some(&config));
/// ```
pub fn init_logging(config: Option<&Config>) {
    let filter_str = match config {
        Some(config) if !config.debug.log_level.is_empty() => config.debug.log_level.clone(),
        _ => "info".to_string(),
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();
}
