// ABOUTME: Page route handlers serving the server-rendered HTML documents
// ABOUTME: Landing page at the root, the registration form, and the HTML not-found fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Journal Contributors

use crate::constants::routes;
use crate::server::ServerResources;
use crate::web;
use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::sync::Arc;
use tracing::debug;

/// Page routes handler
pub struct PageRoutes;

impl PageRoutes {
    /// Create the page routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(routes::HOME, get(Self::handle_landing))
            .route(routes::REGISTER, get(Self::handle_register))
            .with_state(resources)
    }

    async fn handle_landing(State(resources): State<Arc<ServerResources>>) -> Html<String> {
        Html(web::landing::render(&resources.config.site.images))
    }

    async fn handle_register(State(resources): State<Arc<ServerResources>>) -> Html<String> {
        Html(web::register::render(&resources.config.site.images))
    }

    /// Fallback for any path no route or static asset matched
    pub async fn handle_not_found(uri: Uri) -> Response {
        debug!(path = %uri.path(), "No route matched");
        (StatusCode::NOT_FOUND, Html(web::not_found(uri.path()))).into_response()
    }
}
