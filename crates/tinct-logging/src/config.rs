// ABOUTME: Configuration structures and environment variable parsing for logging
// ABOUTME: Handles log levels, output targets, and file path selection

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;
use tracing::Level;

/// Wrapper for `tracing::Level` that implements Serialize/Deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLevel(pub Level);

impl Serialize for LogLevel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let level_str = match self.0 {
            Level::TRACE => "trace",
            Level::DEBUG => "debug",
            Level::INFO => "info",
            Level::WARN => "warn",
            Level::ERROR => "error",
        };
        serializer.serialize_str(level_str)
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<LogLevel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let level = parse_log_level(&s).map_err(serde::de::Error::custom)?;
        Ok(LogLevel(level))
    }
}

impl From<Level> for LogLevel {
    fn from(level: Level) -> Self {
        LogLevel(level)
    }
}

/// Main configuration for the logging system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Global log level (trace, debug, info, warn, error)
    pub level: LogLevel,

    /// Per-module log level overrides
    pub module_levels: HashMap<String, LogLevel>,

    /// Output configuration
    pub output: OutputConfig,

    /// Path to the log file when file output is enabled
    pub file_path: PathBuf,
}

/// Configuration for output targets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Enable console output
    pub console: bool,

    /// Enable file output
    pub file: bool,

    /// Emit JSON structured output on the file layer
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(Level::INFO),
            module_levels: HashMap::new(),
            output: OutputConfig::default(),
            file_path: default_log_file_path(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            console: true,
            file: false,
            json: false,
        }
    }
}

impl LoggingConfig {
    /// Create a configuration with environment variable overrides applied.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Apply environment variable overrides to this configuration.
    ///
    /// `TINCT_LOG` takes precedence over `RUST_LOG`.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(level_str) = env::var("TINCT_LOG") {
            self.level = LogLevel(parse_log_level(&level_str).context("Invalid TINCT_LOG level")?);
        } else if let Ok(level_str) = env::var("RUST_LOG") {
            self.parse_rust_log(&level_str)?;
        }

        if env::var("TINCT_LOG_JSON").is_ok() {
            self.output.json = true;
        }
        if env::var("TINCT_LOG_FILE").is_ok() {
            self.output.file = true;
        }

        Ok(())
    }

    /// Parse a `RUST_LOG`-format directive list, e.g.
    /// `info,tinct_theme=debug`.
    fn parse_rust_log(&mut self, rust_log: &str) -> Result<()> {
        for directive in rust_log.split(',') {
            let directive = directive.trim();
            if directive.is_empty() {
                continue;
            }

            if let Some((module, level_str)) = directive.split_once('=') {
                let level = parse_log_level(level_str).context(format!(
                    "Invalid log level '{level_str}' for module '{module}'"
                ))?;
                self.module_levels
                    .insert(module.to_string(), LogLevel(level));
            } else {
                self.level = LogLevel(
                    parse_log_level(directive)
                        .context(format!("Invalid global log level '{directive}'"))?,
                );
            }
        }
        Ok(())
    }
}

/// Default log file path: `<config dir>/tinct/tinct.log`.
fn default_log_file_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("tinct").join("tinct.log")
    } else {
        PathBuf::from("tinct.log")
    }
}

/// Parse a log level string (case-insensitive).
fn parse_log_level(level_str: &str) -> Result<Level> {
    match level_str.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => anyhow::bail!(
            "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
            level_str
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level.0, Level::INFO);
        assert!(config.output.console);
        assert!(!config.output.file);
        assert!(!config.output.json);
    }

    #[test]
    fn level_parsing() {
        assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
        assert_eq!(parse_log_level("DEBUG").unwrap(), Level::DEBUG);
        assert_eq!(parse_log_level("Warn").unwrap(), Level::WARN);
        assert!(parse_log_level("loud").is_err());
    }

    #[test]
    fn default_log_path_has_file_name() {
        let path = default_log_file_path();
        assert!(path.to_string_lossy().contains("tinct.log"));
    }

    #[test]
    fn rust_log_directives() {
        let mut config = LoggingConfig::default();
        config
            .parse_rust_log("warn,tinct_theme=debug,tinct=trace")
            .unwrap();
        assert_eq!(config.level.0, Level::WARN);
        assert_eq!(
            config.module_levels.get("tinct_theme"),
            Some(&LogLevel(Level::DEBUG))
        );
        assert_eq!(
            config.module_levels.get("tinct"),
            Some(&LogLevel(Level::TRACE))
        );
    }
}
