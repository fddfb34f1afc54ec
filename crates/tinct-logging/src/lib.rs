// ABOUTME: Public API for tinct logging infrastructure using tokio-tracing
// ABOUTME: Provides centralized configuration and subscriber initialization

pub mod config;
mod subscriber;

// Re-export tracing macros for convenience
pub use tracing::{Level, Span, debug, error, info, instrument, span, trace, warn};

pub use config::{LogLevel, LoggingConfig, OutputConfig};
pub use subscriber::init_subscriber;

use anyhow::Result;

/// Initialize logging with default configuration plus environment overrides.
pub fn init_logging() -> Result<()> {
    let config = LoggingConfig::from_env()?;
    init_subscriber(config)
}

/// Initialize logging with a custom configuration.
pub fn init_logging_with_config(config: LoggingConfig) -> Result<()> {
    init_subscriber(config)
}
