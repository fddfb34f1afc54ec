// ABOUTME: Tracing subscriber initialization and layer composition
// ABOUTME: Combines console and rolling-file layers with env-filter levels

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Build the env-filter from the global level plus module overrides.
fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    let mut directives = vec![config.level.0.to_string().to_lowercase()];
    for (module, level) in &config.module_levels {
        directives.push(format!("{module}={}", level.0.to_string().to_lowercase()));
    }
    EnvFilter::try_new(directives.join(",")).context("Failed to build log filter")
}

/// Initialize the global tracing subscriber with the given configuration.
pub fn init_subscriber(config: LoggingConfig) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

    let env_filter = build_env_filter(&config)?;
    let registry = tracing_subscriber::registry().with(env_filter);

    if config.output.file {
        if let Some(parent) = config.file_path.parent() {
            std::fs::create_dir_all(parent).context(format!(
                "Failed to create log directory: {}",
                parent.display()
            ))?;
        }

        let file_name = config
            .file_path
            .file_name()
            .and_then(|n| n.to_str())
            .context("Invalid log file path")?;
        let directory = config
            .file_path
            .parent()
            .context("Log file path has no parent directory")?;

        let file_appender = tracing_appender::rolling::daily(directory, file_name);
        let (file_writer, guard) = tracing_appender::non_blocking(file_appender);
        std::mem::forget(guard); // Keep the writer thread alive for the process lifetime

        macro_rules! file_layer {
            () => {
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_writer(file_writer.clone())
            };
        }

        if config.output.console {
            if config.output.json {
                registry
                    .with(fmt::layer().with_target(true).with_writer(std::io::stdout))
                    .with(file_layer!().json())
                    .try_init()?;
            } else {
                registry
                    .with(fmt::layer().with_target(true).with_writer(std::io::stdout))
                    .with(file_layer!())
                    .try_init()?;
            }
        } else if config.output.json {
            registry.with(file_layer!().json()).try_init()?;
        } else {
            registry.with(file_layer!()).try_init()?;
        }
    } else {
        registry.with(fmt::layer().with_target(true)).try_init()?;
    }

    tracing::info!(
        log_level = %config.level.0,
        console_output = config.output.console,
        file_output = config.output.file,
        json_output = config.output.json,
        "Tinct logging initialized"
    );

    Ok(())
}
