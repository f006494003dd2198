// ABOUTME: Route module organization for the Gym Journal HTTP endpoints
// ABOUTME: Groups page routes and health routes behind a shared resource container
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Journal Contributors

//! Route definitions
//!
//! Each module contains only route wiring and thin handlers that delegate to
//! the `web` renderers or the health checker.

/// Health check and readiness routes
pub mod health;
/// Landing page, registration page, and the not-found fallback
pub mod pages;

pub use health::HealthRoutes;
pub use pages::PageRoutes;
