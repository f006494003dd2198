// ABOUTME: HTTP server binary for the Gym Journal site
// ABOUTME: Loads configuration from the environment, opens the database, and serves pages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Journal Contributors

//! # Gym Journal Server Binary
//!
//! Serves the landing page, the registration form, health checks, and the
//! static assets under `STATIC_DIR`.

use anyhow::Result;
use clap::Parser;
use gym_journal::{
    config::environment::ServerConfig,
    database::Database,
    logging,
    server::{self, ServerResources},
};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "gym-journal-server")]
#[command(about = "Gym Journal - track your fitness journey")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override bind address
    #[arg(long)]
    host: Option<IpAddr>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }
    config.site.scan_static_assets();

    info!("Starting Gym Journal server");
    info!("{}", config.summary());

    let database = Database::new(&config.database_url.to_connection_string()).await?;
    let resources = Arc::new(ServerResources::new(database, Arc::new(config)));

    if let Err(e) = server::run(resources).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server stopped");
    Ok(())
}
