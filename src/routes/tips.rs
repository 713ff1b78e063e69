// ABOUTME: Tip sampling route handlers for motivational tips
// ABOUTME: Returns a random distinct subset of the tip catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tip sampling routes

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::server::ServerResources;

/// Tips returned when the caller does not ask for a specific count
const DEFAULT_TIP_COUNT: usize = 3;

/// Query parameters for the tips endpoint
///
/// `count` is taken as a raw string so a malformed value surfaces as a clean
/// invalid-input error instead of a framework rejection.
#[derive(Debug, Deserialize, Default)]
pub struct TipsQuery {
    #[serde(default)]
    count: Option<String>,
}

impl TipsQuery {
    /// Parse the requested count, defaulting when absent
    fn parse_count(&self) -> AppResult<usize> {
        match self.count.as_deref() {
            None => Ok(DEFAULT_TIP_COUNT),
            Some(raw) => raw
                .parse()
                .map_err(|e| AppError::invalid_input(format!("invalid count {raw:?}: {e}"))),
        }
    }
}

/// Response body for `GET /api/tips`
#[derive(Debug, Serialize, Deserialize)]
pub struct TipsResponse {
    /// Distinct tips, at most the catalog size
    pub tips: Vec<String>,
}

/// Tip routes
pub struct TipsRoutes;

impl TipsRoutes {
    /// Create all tip routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/tips", get(Self::handle_get_tips))
            .with_state(resources)
    }

    /// Handle sampling tips without replacement, capped at the catalog size
    async fn handle_get_tips(
        State(resources): State<Arc<ServerResources>>,
        Query(params): Query<TipsQuery>,
    ) -> AppResult<Json<TipsResponse>> {
        let count = params.parse_count()?;

        let tips = resources
            .planner
            .sample_tips(&mut rand::thread_rng(), count);

        Ok(Json(TipsResponse { tips }))
    }
}
