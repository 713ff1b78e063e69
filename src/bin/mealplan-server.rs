// ABOUTME: Server binary for the meal plan API
// ABOUTME: Loads configuration, initializes logging, and runs the HTTP server
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Meal Plan Server Binary
//!
//! Starts the HTTP API serving randomized daily meal plans and the static
//! frontend bundle.

use anyhow::Result;
use clap::Parser;
use mealplan_server::{
    config::environment::ServerConfig,
    logging,
    server::{MealPlanServer, ServerResources},
};
use tracing::info;

#[derive(Parser)]
#[command(name = "mealplan-server")]
#[command(about = "Budget protein meal plan API server")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override frontend bundle directory
    #[arg(long)]
    frontend_dir: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env();
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(frontend_dir) = args.frontend_dir {
        config.frontend_dir = frontend_dir.into();
    }

    logging::init_from_env()?;

    info!("Starting meal plan server");
    info!("{}", config.summary());

    let resources = ServerResources::new(config);
    MealPlanServer::new(resources).run().await
}
