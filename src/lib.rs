// ABOUTME: Main library entry point for the Gym Journal web application
// ABOUTME: Server-rendered landing and registration pages backed by an exercise catalogue
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Journal Contributors

#![deny(unsafe_code)]

//! # Gym Journal
//!
//! A small fitness-tracking web application. The server renders a landing page
//! and a registration form, and an SQLite database holds the exercise
//! catalogue that the `seed-exercises` binary fills with sample data.
//!
//! ## Architecture
//!
//! - **Config**: environment-driven server and site settings
//! - **Database**: `SQLite` pool, exercise storage, and the sample-data seeder
//! - **Web**: HTML renderers for each page
//! - **Routes**: thin axum handlers wiring pages and health checks
//! - **Server**: middleware stack, static assets, graceful shutdown
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use gym_journal::config::environment::ServerConfig;
//! use gym_journal::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("{}", config.summary());
//!     Ok(())
//! }
//! ```

/// Environment and site configuration
pub mod config;

/// Application constants: routes, environment keys, defaults
pub mod constants;

/// `SQLite` persistence for exercises and the seed routine
pub mod database;

/// Unified error handling
pub mod errors;

/// Liveness and readiness checks
pub mod health;

/// Structured logging setup
pub mod logging;

/// Request IDs and request tracing
pub mod middleware;

/// Domain models
pub mod models;

/// HTTP route groups
pub mod routes;

/// Security response headers
pub mod security;

/// Router assembly and the serve loop
pub mod server;

/// HTML page rendering
pub mod web;
