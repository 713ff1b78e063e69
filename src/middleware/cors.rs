// ABOUTME: CORS middleware configuration for HTTP API endpoints
// ABOUTME: Provides Cross-Origin Resource Sharing setup for the frontend client
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use http::{header::HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::environment::ServerConfig;

/// Configure CORS settings for the meal plan API
///
/// Origins come from the `CORS_ALLOWED_ORIGINS` environment variable via
/// [`ServerConfig`]. A wildcard ("*") or empty value allows any origin
/// (development); a comma-separated list restricts to those origins
/// (production). The API is read-only, so only GET and OPTIONS are allowed.
pub fn setup_cors(config: &ServerConfig) -> CorsLayer {
    let allow_origin =
        if config.cors.allowed_origins.is_empty() || config.cors.allowed_origins == "*" {
            AllowOrigin::any()
        } else {
            let origins: Vec<HeaderValue> = config
                .cors
                .allowed_origins
                .split(',')
                .filter_map(|s| {
                    let trimmed = s.trim();
                    if trimmed.is_empty() {
                        None
                    } else {
                        HeaderValue::from_str(trimmed).ok()
                    }
                })
                .collect();

            if origins.is_empty() {
                AllowOrigin::any()
            } else {
                AllowOrigin::list(origins)
            }
        };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
        ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_and_list_configs_both_build() {
        let mut config = ServerConfig::default();
        setup_cors(&config);

        config.cors.allowed_origins = "https://app.example.com, https://admin.example.com".into();
        setup_cors(&config);
    }
}
