//! Tracing initialization and subscriber setup.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::file_writer::FileWriter;
use crate::Config;

/// Default filter when neither `RUST_LOG` nor the config sets one.
const DEFAULT_LEVEL: &str = "info";

/// Builds the filter: `RUST_LOG` first, then `config.trace_level`, then `info`.
fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
    })
}

/// Installs the global subscriber writing to the rotating log file.
///
/// Returns `false` when the log directory cannot be created or a subscriber
/// is already installed; logging is optional and neither case is an error.
/// Safe to call more than once.
///
/// # Example
///
/// ```rust
/// use filedeck::observability::init_tracing;
/// use filedeck::Config;
///
/// let dir = std::env::temp_dir().join("filedeck-init-doc");
/// let config = Config {
///     log_file: Some(dir.join("filedeck.log")),
///     trace_level: Some("debug".to_string()),
///     ..Config::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) -> bool {
    let log_file = config.log_file_path();
    if let Some(parent) = log_file.parent() {
        if std::fs::create_dir_all(parent).is_err() {
            return false;
        }
    }

    let layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(FileWriter::new(log_file));

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(layer)
        .try_init()
        .is_ok()
}
