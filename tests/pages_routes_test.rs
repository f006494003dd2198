// ABOUTME: Integration tests for the landing, registration, and not-found pages
// ABOUTME: Drives the full router and middleware stack in-process with oneshot requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Journal Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use axum::http::StatusCode;
use common::{create_test_router, test_config, test_config_with_static_dir};
use gym_journal::config::site::OutputMode;
use helpers::axum_test::AxumTestRequest;

#[tokio::test]
async fn test_landing_page_offers_sign_in_and_sign_up() {
    let app = create_test_router(test_config()).await;

    let response = AxumTestRequest::get("/")
        .send(app)
        .await
        .assert_status(StatusCode::OK);
    assert!(response
        .header("content-type")
        .unwrap()
        .starts_with("text/html"));

    let html = response.text();
    assert_eq!(html.matches("<a ").count(), 2);
    assert!(html.contains(r#"href="/login""#));
    assert!(html.contains(r#"href="/register""#));
    assert!(html.contains("Sign In"));
    assert!(html.contains("Sign Up"));
    assert!(html.contains("Track your fitness journey"));
}

#[tokio::test]
async fn test_landing_logo_prefers_modern_formats() {
    let app = create_test_router(test_config()).await;

    let html = AxumTestRequest::get("/").send(app).await.text();
    let avif = html.find(r#"srcset="/logo.avif""#).unwrap();
    let webp = html.find(r#"srcset="/logo.webp""#).unwrap();
    let img = html.find(r#"src="/logo.png""#).unwrap();
    assert!(avif < webp && webp < img);
}

#[tokio::test]
async fn test_register_page_renders_constrained_form() {
    let app = create_test_router(test_config()).await;

    let html = AxumTestRequest::get("/register")
        .send(app)
        .await
        .assert_status(StatusCode::OK)
        .text();

    for name in ["name", "email", "password", "confirmPassword", "terms"] {
        assert!(html.contains(&format!(r#"name="{name}""#)), "missing {name}");
    }
    assert!(html.contains(r#"type="email""#));
    assert!(html.contains(r#"minlength="8""#));
    assert!(html.contains("Must be at least 8 characters"));
    assert!(html.contains(r#"href="/terms""#));
    assert!(html.contains(r#"href="/privacy""#));
    assert!(html.contains(r#"href="/login""#));
    assert!(html.contains("Back to home"));
    assert!(!html.contains("action="));
}

#[tokio::test]
async fn test_register_submission_is_not_accepted() {
    let app = create_test_router(test_config()).await;

    AxumTestRequest::post("/register")
        .send(app)
        .await
        .assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_sign_in_target_is_not_found() {
    let app = create_test_router(test_config()).await;

    let html = AxumTestRequest::get("/login")
        .send(app)
        .await
        .assert_status(StatusCode::NOT_FOUND)
        .text();
    assert!(html.contains("Page not found"));
    assert!(html.contains("<code>/login</code>"));
}

#[tokio::test]
async fn test_static_assets_served_in_standalone_mode() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("logo.png"), b"\x89PNG fake").unwrap();
    let app = create_test_router(test_config_with_static_dir(dir.path())).await;

    let response = AxumTestRequest::get("/logo.png")
        .send(app)
        .await
        .assert_status(StatusCode::OK);
    assert_eq!(response.header("content-type"), Some("image/png"));
    assert_eq!(response.header("x-content-type-options"), Some("nosniff"));
}

#[tokio::test]
async fn test_missing_asset_falls_through_to_not_found_page() {
    let dir = tempfile::tempdir().unwrap();
    let app = create_test_router(test_config_with_static_dir(dir.path())).await;

    let html = AxumTestRequest::get("/logo.avif")
        .send(app)
        .await
        .assert_status(StatusCode::NOT_FOUND)
        .text();
    assert!(html.contains("Page not found"));
}

#[tokio::test]
async fn test_external_mode_does_not_serve_assets() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("logo.png"), b"\x89PNG fake").unwrap();
    let mut config = test_config_with_static_dir(dir.path());
    config.site.output_mode = OutputMode::External;
    let app = create_test_router(config).await;

    AxumTestRequest::get("/logo.png")
        .send(app)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_security_headers_on_pages() {
    let app = create_test_router(test_config()).await;

    let response = AxumTestRequest::get("/register").send(app).await;
    assert_eq!(response.header("x-frame-options"), Some("DENY"));
    assert_eq!(response.header("x-content-type-options"), Some("nosniff"));
    assert_eq!(
        response.header("referrer-policy"),
        Some("strict-origin-when-cross-origin")
    );
    assert!(response
        .header("content-security-policy")
        .unwrap()
        .contains("frame-ancestors 'none'"));
    assert!(response.header("strict-transport-security").is_none());
}

#[tokio::test]
async fn test_request_id_generated_and_propagated() {
    let app = create_test_router(test_config()).await;
    let response = AxumTestRequest::get("/").send(app).await;
    assert!(response.header("x-request-id").unwrap().starts_with("req_"));

    let app = create_test_router(test_config()).await;
    let response = AxumTestRequest::get("/")
        .header("x-request-id", "client-supplied-42")
        .send(app)
        .await;
    assert_eq!(response.header("x-request-id"), Some("client-supplied-42"));
}

#[tokio::test]
async fn test_scanned_assets_limit_logo_sources() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("logo.png"), b"\x89PNG fake").unwrap();
    let mut config = test_config_with_static_dir(dir.path());
    config.site.scan_static_assets();
    let app = create_test_router(config).await;

    let html = AxumTestRequest::get("/").send(app).await.text();
    assert!(!html.contains("<source"));
    assert!(html.contains(r#"src="/logo.png""#));
}
