// ABOUTME: HTTP server assembly and lifecycle for the Gym Journal site
// ABOUTME: Builds the router with middleware and static assets, then serves until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Journal Contributors

//! # Server
//!
//! [`build_router`] is separate from [`run`] so tests can drive the full
//! middleware stack with `tower::ServiceExt::oneshot` without binding a port.

use crate::config::environment::ServerConfig;
use crate::database::Database;
use crate::errors::{AppError, AppResult};
use crate::health::HealthChecker;
use crate::middleware::{create_request_span, record_response, GymRequestId};
use crate::routes::{HealthRoutes, PageRoutes};
use crate::security::{apply_security_headers, SecurityConfig};
use axum::{handler::HandlerWithoutStateExt, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::{info, warn};

/// Shared state handed to every route group
pub struct ServerResources {
    /// Exercise catalogue pool
    pub database: Database,
    /// Server and site configuration
    pub config: Arc<ServerConfig>,
    /// Liveness and readiness checks over `database`
    pub health: HealthChecker,
}

impl ServerResources {
    /// Bundle the database and configuration for the router
    #[must_use]
    pub fn new(database: Database, config: Arc<ServerConfig>) -> Self {
        let health = HealthChecker::new(database.clone(), config.environment);
        Self {
            database,
            config,
            health,
        }
    }
}

/// Build the complete application router
///
/// In standalone output mode, unmatched paths are looked up in the static
/// asset directory before falling through to the HTML not-found page.
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let config = Arc::clone(&resources.config);
    let security_headers = Arc::new(
        SecurityConfig::for_site(config.environment, &config.site.images).to_headers(),
    );

    let router = Router::new()
        .merge(PageRoutes::routes(Arc::clone(&resources)))
        .merge(HealthRoutes::routes(resources));

    let router = if config.site.output_mode.serves_static_assets() {
        let assets = ServeDir::new(&config.site.static_dir)
            .not_found_service(PageRoutes::handle_not_found.into_service());
        router.fallback_service(assets)
    } else {
        router.fallback(PageRoutes::handle_not_found)
    };

    router.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(GymRequestId))
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(create_request_span)
                    .on_response(record_response),
            )
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(axum::middleware::map_response_with_state(
                security_headers,
                apply_security_headers,
            )),
    )
}

/// Serve HTTP until ctrl-c or SIGTERM, then close the database
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails
pub async fn run(resources: Arc<ServerResources>) -> AppResult<()> {
    let address = resources.config.bind_address();
    let listener = TcpListener::bind(address).await.map_err(|e| {
        AppError::internal(format!("Failed to bind {address}: {e}")).with_source(e)
    })?;

    if resources.config.site.output_mode.serves_static_assets()
        && !resources.config.site.static_dir.is_dir()
    {
        warn!(
            static_dir = %resources.config.site.static_dir.display(),
            "Static asset directory does not exist; assets will 404"
        );
    }

    info!("Gym Journal listening on http://{address}");
    let database = resources.database.clone();
    let served = axum::serve(listener, build_router(resources))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")).with_source(e));

    database.close().await;
    served
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    info!("Shutdown signal received, draining connections");
}
