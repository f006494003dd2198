// ABOUTME: SQLite database management for the exercise catalogue
// ABOUTME: Opens the connection pool, runs schema migrations, and releases the pool on close
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Journal Contributors

//! # Database Management
//!
//! [`Database`] wraps a `sqlx` `SQLite` pool. Table-specific operations live in
//! submodules as additional `impl Database` blocks.

mod exercises;

/// Sample exercise seeding procedure
pub mod seed_exercises;

pub use seed_exercises::{
    exit_status, run_seed, seed_exercises, ExerciseStore, SampleExercise, SeedReport,
    SAMPLE_EXERCISES,
};

use crate::config::environment::DatabaseUrl;
use crate::errors::{AppError, AppResult};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

/// Connections kept by a file-backed pool
const MAX_FILE_CONNECTIONS: u32 = 5;

/// Database manager for the exercise catalogue
#[derive(Clone, Debug)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open a database and run migrations
    ///
    /// File databases are created if missing. `sqlite::memory:` databases are
    /// held on a single connection that is never recycled, because every new
    /// `SQLite` memory connection is a separate, empty database.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, the database cannot be opened,
    /// or migrations fail
    pub async fn new(database_url: &str) -> AppResult<Self> {
        let url = DatabaseUrl::parse_url(database_url)?;
        let options = SqliteConnectOptions::from_str(&url.to_connection_string())
            .map_err(|e| AppError::database(format!("Invalid database URL: {e}")))?
            .create_if_missing(true);

        let pool_options = if url.is_memory() {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(Option::<Duration>::None)
                .max_lifetime(Option::<Duration>::None)
        } else {
            if let DatabaseUrl::SQLite { path } = &url {
                ensure_parent_dir(path).await?;
            }
            SqlitePoolOptions::new().max_connections(MAX_FILE_CONNECTIONS)
        };

        let pool = pool_options.connect_with(options).await.map_err(|e| {
            AppError::database(format!("Failed to open database {url}: {e}")).with_source(e)
        })?;
        info!(database = %url, "Database connection established");

        Self { pool }.migrate_or_close().await
    }

    /// Run migrations on a freshly opened pool, closing it if they fail
    async fn migrate_or_close(self) -> AppResult<Self> {
        if let Err(e) = self.migrate().await {
            self.close().await;
            return Err(e);
        }
        Ok(self)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if any schema statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        self.migrate_exercises().await?;
        debug!("Database migrations complete");
        Ok(())
    }

    /// Lightweight connectivity probe for readiness checks
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot answer a trivial query
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Close the pool, waiting for checked-out connections to be returned
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database connection closed");
    }

    /// Whether [`Database::close`] has been called
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }
}

async fn ensure_parent_dir(path: &Path) -> AppResult<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                AppError::database(format!(
                    "Failed to create database directory {}: {e}",
                    parent.display()
                ))
            })
        }
        _ => Ok(()),
    }
}
