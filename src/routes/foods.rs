// ABOUTME: Food catalog route handlers listing the fixed reference data
// ABOUTME: Serves the full protein/veggie/carb lists for the frontend picker
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Food catalog listing routes

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::models::ProteinItem;
use crate::server::ServerResources;

/// Response body for `GET /api/foods`
#[derive(Debug, Serialize, Deserialize)]
pub struct FoodsResponse {
    /// All protein sources in catalog order
    pub proteins: Vec<ProteinItem>,
    /// All vegetable dish names in catalog order
    pub veggies: Vec<String>,
    /// All carbohydrate dish names in catalog order
    pub carbs: Vec<String>,
}

/// Food catalog routes
pub struct FoodsRoutes;

impl FoodsRoutes {
    /// Create all food catalog routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/foods", get(Self::handle_get_foods))
            .with_state(resources)
    }

    /// Handle listing the full food catalog
    async fn handle_get_foods(
        State(resources): State<Arc<ServerResources>>,
    ) -> Json<FoodsResponse> {
        let catalog = resources.planner.catalog();

        Json(FoodsResponse {
            proteins: catalog.proteins().to_vec(),
            veggies: catalog.veggies().to_vec(),
            carbs: catalog.carbs().to_vec(),
        })
    }
}
