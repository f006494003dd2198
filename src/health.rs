// ABOUTME: Server health monitoring with liveness and database readiness checks
// ABOUTME: Produces structured health responses consumed by the /health and /ready routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Journal Contributors

//! Health check endpoints and monitoring utilities

use crate::config::environment::Environment;
use crate::constants::service_names;
use crate::database::Database;
use serde::{Deserialize, Serialize};
use std::time::{Instant, SystemTime, UNIX_EPOCH};
use tracing::warn;

/// Overall health status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: HealthStatus,
    /// Service information
    pub service: ServiceInfo,
    /// Individual component checks
    pub checks: Vec<ComponentHealth>,
    /// Response timestamp (seconds since the Unix epoch)
    pub timestamp: u64,
}

/// Service information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub environment: String,
    pub uptime_seconds: u64,
}

/// Individual component health status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentHealth {
    pub name: String,
    pub status: HealthStatus,
    pub message: String,
    pub duration_ms: u64,
}

/// Health checker for the Gym Journal server
pub struct HealthChecker {
    start_time: Instant,
    database: Database,
    environment: Environment,
}

impl HealthChecker {
    /// Create a new health checker
    #[must_use]
    pub fn new(database: Database, environment: Environment) -> Self {
        Self {
            start_time: Instant::now(),
            database,
            environment,
        }
    }

    fn service_info(&self) -> ServiceInfo {
        ServiceInfo {
            name: service_names::GYM_JOURNAL_SERVER.into(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: self.environment.to_string(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
        }
    }

    /// Liveness: the process is up and serving requests
    #[must_use]
    pub fn basic_health(&self) -> HealthResponse {
        HealthResponse {
            status: HealthStatus::Healthy,
            service: self.service_info(),
            checks: vec![ComponentHealth {
                name: "server".into(),
                status: HealthStatus::Healthy,
                message: "Serving requests".into(),
                duration_ms: 0,
            }],
            timestamp: unix_timestamp(),
        }
    }

    /// Readiness: the database answers queries
    pub async fn readiness(&self) -> HealthResponse {
        let database = self.check_database().await;
        HealthResponse {
            status: database.status,
            service: self.service_info(),
            checks: vec![database],
            timestamp: unix_timestamp(),
        }
    }

    async fn check_database(&self) -> ComponentHealth {
        let start = Instant::now();
        let (status, message) = match self.database.ping().await {
            Ok(()) => (HealthStatus::Healthy, "Database connection OK".to_owned()),
            Err(e) => {
                warn!(error = %e, "Database readiness check failed");
                (HealthStatus::Unhealthy, format!("Database check failed: {e}"))
            }
        };
        ComponentHealth {
            name: "database".into(),
            status,
            message,
            duration_ms: u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
        }
    }
}

fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs())
}
