///! Logging configuration module
///! Structured logging to stderr so stdout stays clean for command output

use std::io;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,     // log level (trace, debug, info, warn, error)
    pub json_format: bool, // use JSON formatting
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json_format: false,
        }
    }
}

impl LoggingConfig {
    /// Map the `-v` count to a level
    pub fn from_verbosity(verbose: u8, json_format: bool) -> Self {
        let level = match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        Self {
            level: level.to_string(),
            json_format,
        }
    }

    /// Initialize logging; `RUST_LOG` overrides the configured level
    pub fn init(&self) -> anyhow::Result<()> {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        let layer = fmt::layer()
            .with_target(true)
            .with_level(true)
            .with_writer(io::stderr);

        if self.json_format {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(layer.json())
                .try_init()?;
        } else {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(layer.compact())
                .try_init()?;
        }

        tracing::debug!("Logging initialized - level: {}", self.level);

        Ok(())
    }
}
