//! Logging initialization for the console binary.

use serde::Deserialize;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Output format for log lines.
///
/// Pretty for interactive use, json when the console runs headless and
/// its output is shipped to a collector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Initializes the logging subsystem based on configuration.
///
/// `RUST_LOG` wins over the configured level when set. The console emits
/// plain events only, so no span formatting is configured.
pub fn init_logging(config: &LoggingConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let subscriber = tracing_subscriber::registry().with(env_filter);

    match config.format {
        LogFormat::Json => {
            subscriber.with(fmt::layer().json().with_target(true)).init();
        }
        LogFormat::Pretty => {
            subscriber
                .with(fmt::layer().pretty().with_target(true))
                .init();
        }
    }
}
