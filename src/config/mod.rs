// ABOUTME: Configuration management module for server and site settings
// ABOUTME: Groups environment-driven server config and declarative site/build settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Journal Contributors

//! Configuration module for Gym Journal
//!
//! - **Environment**: server, database and deployment settings read from environment variables
//! - **Site**: output mode, static assets and image handling rules

/// Environment and server configuration
pub mod environment;
/// Site/build configuration: output mode, image formats, remote image domains
pub mod site;

pub use environment::{DatabaseUrl, Environment, ServerConfig};
pub use site::{ImageConfig, ImageFormat, OutputMode, SiteConfig};
