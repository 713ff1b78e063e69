// ABOUTME: Main library entry point for the meal plan server
// ABOUTME: Exposes the food catalog, plan generator, and HTTP route modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Meal Plan Server
//!
//! A small HTTP backend that serves a static frontend and three read-only
//! JSON endpoints backed by a fixed in-memory catalog of budget-friendly
//! Sri Lankan foods.
//!
//! ## Architecture
//!
//! - **Catalog**: immutable reference data (proteins, veggies, carbs, tips)
//!   constructed once at startup and shared read-only across requests
//! - **Planner**: uniform-random meal and daily plan generation over the
//!   catalog, with the RNG injected so tests can seed it
//! - **Routes**: thin axum handlers adapting HTTP queries to planner calls
//! - **Server**: router assembly, CORS, static file serving, graceful shutdown
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use mealplan_server::config::environment::ServerConfig;
//!
//! let config = ServerConfig::from_env();
//! println!("Meal plan server configured with port: HTTP={}", config.http_port);
//! ```

/// Static food and tip reference data
pub mod catalog;

/// Environment-based server configuration
pub mod config;

/// Unified error handling with HTTP response formatting
pub mod errors;

/// Logging configuration with structured output
pub mod logging;

/// CORS middleware configuration
pub mod middleware;

/// Wire-format data structures for meals and daily plans
pub mod models;

/// Random meal and daily plan generation
pub mod planner;

/// `HTTP` route handlers organized by endpoint domain
pub mod routes;

/// Server assembly and run loop
pub mod server;
