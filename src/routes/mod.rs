// ABOUTME: Route module organization for the meal plan server HTTP endpoints
// ABOUTME: Provides route definitions organized by domain with thin handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Route module for the meal plan server
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the planner and catalog.

/// Food catalog listing routes
pub mod foods;
/// Health check and system status routes
pub mod health;
/// Daily meal plan generation routes
pub mod meal_plan;
/// Tip sampling routes
pub mod tips;

/// Food catalog route handlers
pub use foods::FoodsRoutes;
/// Health check route handlers
pub use health::HealthRoutes;
/// Meal plan route handlers
pub use meal_plan::MealPlanRoutes;
/// Tip route handlers
pub use tips::TipsRoutes;
