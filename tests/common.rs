// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging, in-memory database, and router setup helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Journal Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `gym_journal`

use axum::Router;
use gym_journal::{
    config::environment::{DatabaseUrl, Environment, ServerConfig},
    database::Database,
    server::{build_router, ServerResources},
};
use std::path::Path;
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard in-memory test database
pub async fn create_test_database() -> Database {
    init_test_logging();
    Database::new("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database")
}

/// Configuration for router tests: testing environment, in-memory database
pub fn test_config() -> ServerConfig {
    ServerConfig {
        environment: Environment::Testing,
        database_url: DatabaseUrl::Memory,
        ..ServerConfig::default()
    }
}

/// Same as [`test_config`] with static assets served from `dir`
pub fn test_config_with_static_dir(dir: &Path) -> ServerConfig {
    let mut config = test_config();
    config.site.static_dir = dir.to_path_buf();
    config
}

/// Build server resources over a fresh in-memory database
pub async fn create_test_resources(config: ServerConfig) -> Arc<ServerResources> {
    let database = create_test_database().await;
    Arc::new(ServerResources::new(database, Arc::new(config)))
}

/// Full application router with the middleware stack
pub async fn create_test_router(config: ServerConfig) -> Router {
    build_router(create_test_resources(config).await)
}
