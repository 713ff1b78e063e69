// ABOUTME: Configuration module organization
// ABOUTME: Environment-based runtime configuration for the server
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration management

/// Environment-based server configuration
pub mod environment;
