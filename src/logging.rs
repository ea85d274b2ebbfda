use crate::config::LogLevel;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence. Otherwise `log_level` (as written in the
/// config file) selects the level, defaulting to `info`.
pub fn init(log_level: &str) {
    let level = LogLevel::parse(log_level);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.unwrap_or(LogLevel::Info).as_directive()));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    if level.is_none() && !log_level.trim().is_empty() {
        warn!(log_level, "Unknown log level, using info");
    }
}
