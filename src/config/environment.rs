// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, defaults, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment-based configuration management

use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::warn;

/// Default HTTP port, matching the original deployment
const DEFAULT_HTTP_PORT: u16 = 5000;

/// Default bind host
const DEFAULT_HOST: &str = "0.0.0.0";

/// Default frontend bundle directory, relative to the working directory
const DEFAULT_FRONTEND_DIR: &str = "frontend";

/// CORS configuration
#[derive(Debug, Clone)]
pub struct CorsConfig {
    /// Comma-separated origin list, or "*" for any origin
    pub allowed_origins: String,
}

/// Server runtime configuration, loaded from environment variables
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Bind host
    pub host: String,
    /// Directory holding the static frontend bundle
    pub frontend_dir: PathBuf,
    /// CORS settings
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset or unparseable
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            http_port: env_or("HTTP_PORT", DEFAULT_HTTP_PORT),
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_owned()),
            frontend_dir: PathBuf::from(
                env::var("FRONTEND_DIR").unwrap_or_else(|_| DEFAULT_FRONTEND_DIR.to_owned()),
            ),
            cors: CorsConfig {
                allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| "*".to_owned()),
            },
        }
    }

    /// One-line configuration summary for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "host={} http_port={} frontend_dir={} cors_origins={}",
            self.host,
            self.http_port,
            self.frontend_dir.display(),
            self.cors.allowed_origins
        )
    }

    /// Socket address string to bind
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: DEFAULT_HTTP_PORT,
            host: DEFAULT_HOST.to_owned(),
            frontend_dir: PathBuf::from(DEFAULT_FRONTEND_DIR),
            cors: CorsConfig {
                allowed_origins: "*".to_owned(),
            },
        }
    }
}

/// Read and parse an environment variable, warning and falling back to the
/// default on any failure
fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr + Display + Copy,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value {raw:?}: {e}; using default {default}");
            default
        }),
        Err(_) => default,
    }
}
