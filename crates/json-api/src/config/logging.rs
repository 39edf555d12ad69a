//! Logging Config

use clap::Args;

/// Logging output settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level filter, e.g. "info" or "shopfront_json=debug"
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}
