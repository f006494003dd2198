// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Liveness always answers 200; readiness answers 503 when the database is unreachable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Journal Contributors

//! Health check routes for load balancers and orchestrators

use crate::constants::routes;
use crate::health::{HealthResponse, HealthStatus};
use crate::server::ServerResources;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(routes::HEALTH, get(Self::handle_health))
            .route(routes::READY, get(Self::handle_ready))
            .with_state(resources)
    }

    async fn handle_health(State(resources): State<Arc<ServerResources>>) -> Response {
        Self::respond(resources.health.basic_health())
    }

    async fn handle_ready(State(resources): State<Arc<ServerResources>>) -> Response {
        Self::respond(resources.health.readiness().await)
    }

    fn respond(health: HealthResponse) -> Response {
        let status = match health.status {
            HealthStatus::Healthy => StatusCode::OK,
            HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
        };
        (status, Json(health)).into_response()
    }
}
