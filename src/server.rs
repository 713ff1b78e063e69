// ABOUTME: HTTP server assembly and run loop with graceful shutdown
// ABOUTME: Builds the axum router from route modules, CORS, and static file serving
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Server assembly
//!
//! Holds the shared [`ServerResources`] (configuration plus planner over the
//! immutable catalog), composes the router, and runs it until a shutdown
//! signal arrives. All shared state is read-only after startup; every request
//! allocates its own RNG and response objects.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::catalog::FoodCatalog;
use crate::config::environment::ServerConfig;
use crate::middleware::setup_cors;
use crate::planner::MealPlanner;
use crate::routes::{FoodsRoutes, HealthRoutes, MealPlanRoutes, TipsRoutes};

/// Shared server resources, constructed once at startup
pub struct ServerResources {
    /// Runtime configuration
    pub config: ServerConfig,
    /// Plan generator over the immutable catalog
    pub planner: MealPlanner,
}

impl ServerResources {
    /// Build resources from configuration, populating the catalog
    #[must_use]
    pub fn new(config: ServerConfig) -> Arc<Self> {
        let catalog = Arc::new(FoodCatalog::new());

        Arc::new(Self {
            config,
            planner: MealPlanner::new(catalog),
        })
    }
}

/// The meal plan HTTP server
pub struct MealPlanServer {
    resources: Arc<ServerResources>,
}

impl MealPlanServer {
    /// Create a server over shared resources
    #[must_use]
    pub fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Build the full application router
    ///
    /// API routes are merged first; anything else falls through to the
    /// static frontend bundle, with `index.html` served at `/`.
    #[must_use]
    pub fn router(&self) -> Router {
        let frontend_dir = &self.resources.config.frontend_dir;
        let static_files = ServeDir::new(frontend_dir)
            .not_found_service(ServeFile::new(frontend_dir.join("index.html")));

        Router::new()
            .merge(MealPlanRoutes::routes(self.resources.clone()))
            .merge(FoodsRoutes::routes(self.resources.clone()))
            .merge(TipsRoutes::routes(self.resources.clone()))
            .merge(HealthRoutes::routes())
            .fallback_service(static_files)
            .layer(setup_cors(&self.resources.config))
            .layer(TraceLayer::new_for_http())
    }

    /// Bind and serve until a shutdown signal arrives
    ///
    /// # Errors
    ///
    /// Returns an error if the listener fails to bind or the server fails
    /// while running.
    pub async fn run(self) -> Result<()> {
        let address = self.resources.config.bind_address();
        let app = self.router();

        let listener = TcpListener::bind(&address)
            .await
            .with_context(|| format!("failed to bind {address}"))?;
        info!("Meal plan server listening on {address}");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("server error")?;

        info!("Server shut down");
        Ok(())
    }
}

/// Resolve when SIGINT or SIGTERM is received
async fn shutdown_signal() {
    let ctrl_c = async {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Received Ctrl+C, shutting down");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
