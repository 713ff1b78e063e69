// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Provides a liveness endpoint for monitoring infrastructure
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Health check routes for service monitoring

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes() -> axum::Router {
        use axum::{routing::get, Json, Router};

        async fn health_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "status": "healthy",
                "timestamp": chrono::Utc::now().to_rfc3339()
            }))
        }

        Router::new().route("/health", get(health_handler))
    }
}
