// ABOUTME: Logging configuration and structured logging setup for observability
// ABOUTME: Configures log levels and output formats from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Production-ready logging configuration with structured output

use std::env;

use anyhow::Result;
use tracing_subscriber::{fmt, EnvFilter};

/// Log output format options
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (`RUST_LOG` syntax)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
        }
    }
}

impl LoggingConfig {
    /// Load logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());

        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("compact") => LogFormat::Compact,
            _ => LogFormat::Pretty,
        };

        Self { level, format }
    }

    /// Initialize the global tracing subscriber with this configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed.
    pub fn init(&self) -> Result<()> {
        let filter = EnvFilter::try_new(&self.level)
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let builder = fmt().with_env_filter(filter);

        match self.format {
            LogFormat::Json => builder.json().try_init(),
            LogFormat::Pretty => builder.pretty().try_init(),
            LogFormat::Compact => builder.compact().try_init(),
        }
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))
    }
}

/// Initialize logging from environment variables
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}
