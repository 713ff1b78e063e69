// ABOUTME: Daily meal plan generation route handlers
// ABOUTME: Wraps planner output in the success/error envelope the frontend expects
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Daily meal plan routes
//!
//! This endpoint keeps the original boundary contract: every response is
//! HTTP 200, with success or failure carried inside the JSON envelope.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::models::DailyPlan;
use crate::planner::DEFAULT_PROTEIN_GOAL;
use crate::server::ServerResources;

/// Success/failure envelope for plan responses
#[derive(Debug, Serialize, Deserialize)]
pub struct PlanEnvelope {
    /// Whether plan generation succeeded
    pub success: bool,
    /// Generated plan, present on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<DailyPlan>,
    /// Error message, present on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PlanEnvelope {
    /// Successful envelope carrying a plan
    #[must_use]
    pub fn success(plan: DailyPlan) -> Self {
        Self {
            success: true,
            data: Some(plan),
            error: None,
        }
    }

    /// Failure envelope carrying an error message
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Query parameters for plan generation
///
/// `protein_goal` is taken as a raw string: a malformed value must produce a
/// failure envelope (still HTTP 200), not a framework-level 400.
#[derive(Debug, Deserialize, Default)]
pub struct PlanQuery {
    #[serde(default)]
    protein_goal: Option<String>,
}

impl PlanQuery {
    /// Parse the protein goal, defaulting when absent
    ///
    /// Negative and zero goals are accepted; they are echoed back without
    /// influencing selection.
    fn parse_goal(&self) -> Result<i64, String> {
        match self.protein_goal.as_deref() {
            None => Ok(DEFAULT_PROTEIN_GOAL),
            Some(raw) => raw
                .parse()
                .map_err(|e| format!("invalid protein_goal {raw:?}: {e}")),
        }
    }
}

/// Meal plan routes
pub struct MealPlanRoutes;

impl MealPlanRoutes {
    /// Create all meal plan routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/generate-meal-plan", get(Self::handle_generate_plan))
            .with_state(resources)
    }

    /// Handle daily plan generation
    async fn handle_generate_plan(
        State(resources): State<Arc<ServerResources>>,
        Query(params): Query<PlanQuery>,
    ) -> Json<PlanEnvelope> {
        let goal = match params.parse_goal() {
            Ok(goal) => goal,
            Err(message) => return Json(PlanEnvelope::failure(message)),
        };

        let plan = resources
            .planner
            .generate_daily_plan(&mut rand::thread_rng(), goal);

        Json(PlanEnvelope::success(plan))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_goal_defaults_to_fifty() {
        let query = PlanQuery::default();
        assert_eq!(query.parse_goal(), Ok(DEFAULT_PROTEIN_GOAL));
    }

    #[test]
    fn malformed_goal_yields_non_empty_message() {
        let query = PlanQuery {
            protein_goal: Some("abc".into()),
        };
        let err = query.parse_goal().unwrap_err();
        assert!(err.contains("protein_goal"));
    }

    #[test]
    fn failure_envelope_omits_data() {
        let json = serde_json::to_value(PlanEnvelope::failure("nope")).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "nope");
        assert!(json.get("data").is_none());
    }
}
