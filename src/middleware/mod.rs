// ABOUTME: Middleware module organization for HTTP cross-cutting concerns
// ABOUTME: CORS layer setup shared by the server router
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP middleware

/// CORS configuration for API endpoints
pub mod cors;

pub use cors::setup_cors;
