// ABOUTME: System-wide constants and configuration defaults for Gym Journal
// ABOUTME: Service names, environment variable keys, route paths and default values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Journal Contributors

//! # Constants Module
//!
//! Hardcoded constants shared by the server, the seeder and the tests.
//! Environment-dependent values live in [`crate::config::environment`].

/// Service identity used in structured logs and health responses
pub mod service_names {
    /// HTTP server service name
    pub const GYM_JOURNAL_SERVER: &str = "gym-journal-server";
    /// Seeder service name
    pub const SEED_EXERCISES: &str = "seed-exercises";
    /// Application display name
    pub const APP_DISPLAY_NAME: &str = "Gym Journal";
}

/// Environment variable names
pub mod env_keys {
    pub const HTTP_PORT: &str = "HTTP_PORT";
    pub const HOST: &str = "HOST";
    pub const DATABASE_URL: &str = "DATABASE_URL";
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    pub const OUTPUT_MODE: &str = "OUTPUT_MODE";
    pub const STATIC_DIR: &str = "STATIC_DIR";
    pub const IMAGE_FORMATS: &str = "IMAGE_FORMATS";
    pub const IMAGE_DOMAINS: &str = "IMAGE_DOMAINS";
    pub const TRANSPILE_PACKAGES: &str = "TRANSPILE_PACKAGES";
}

/// Default configuration values
pub mod defaults {
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 3000;
    /// Default bind address
    pub const HOST: &str = "0.0.0.0";
    /// Default database location
    pub const DATABASE_URL: &str = "sqlite:./data/gym_journal.db";
    /// Default static asset directory
    pub const STATIC_DIR: &str = "./public";
    /// Default accepted image encodings, in preference order
    pub const IMAGE_FORMATS: &str = "avif,webp";
    /// Workspace packages bundled into the build
    pub const TRANSPILE_PACKAGES: &str = "gym-journal-database";
}

/// Route paths
pub mod routes {
    pub const HOME: &str = "/";
    pub const REGISTER: &str = "/register";
    pub const LOGIN: &str = "/login";
    pub const TERMS: &str = "/terms";
    pub const PRIVACY: &str = "/privacy";
    pub const HEALTH: &str = "/health";
    pub const READY: &str = "/ready";
    /// Application logo served from the static directory
    pub const LOGO: &str = "/logo.png";
}

/// Registration form constraints
pub mod registration {
    /// Minimum password length enforced by the form
    pub const MIN_PASSWORD_LENGTH: u32 = 8;
}

/// Process exit statuses used by binaries
pub mod exit_codes {
    /// Seeding failed (store unavailable or an insert was rejected)
    pub const SEED_FAILURE: u8 = 1;
}
