// ABOUTME: Shared test helpers for integration tests
// ABOUTME: Axum request utilities and test application construction

/// Axum HTTP testing utilities
pub mod axum_test;

use std::sync::Arc;

use axum::Router;
use mealplan_server::{
    config::environment::ServerConfig,
    server::{MealPlanServer, ServerResources},
};

/// Build the full application router over default configuration
#[allow(dead_code)] // each integration test binary compiles its own copy
pub fn test_app() -> Router {
    let resources: Arc<ServerResources> = ServerResources::new(ServerConfig::default());
    MealPlanServer::new(resources).router()
}
