// ABOUTME: Exercise catalogue seeding utility for Gym Journal
// ABOUTME: Inserts the four sample exercises and exits non-zero if any insert fails
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Journal Contributors

//! Sample exercise seeder for Gym Journal.
//!
//! Usage:
//! ```bash
//! # Seed sample exercises (uses DATABASE_URL from environment)
//! cargo run --bin seed-exercises
//!
//! # Override database URL
//! cargo run --bin seed-exercises -- --database-url sqlite:./data/gym_journal.db
//!
//! # Verbose output
//! cargo run --bin seed-exercises -- -v
//! ```
//!
//! Running it twice inserts the samples twice; there is no existence check.

use clap::Parser;
use gym_journal::{
    constants::{defaults, env_keys, exit_codes, service_names},
    database::{exit_status, run_seed, Database},
    logging::LoggingConfig,
};
use std::env;
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Parser)]
#[command(
    name = "seed-exercises",
    about = "Gym Journal Sample Exercise Seeder",
    long_about = "Insert the sample exercises (squat, bench press, running, pull-ups) into the catalogue"
)]
struct SeedArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = SeedArgs::parse();

    if let Err(e) = LoggingConfig::for_cli(service_names::SEED_EXERCISES, args.verbose).init() {
        eprintln!("{e}");
        return ExitCode::from(exit_codes::SEED_FAILURE);
    }

    let database_url = args
        .database_url
        .or_else(|| env::var(env_keys::DATABASE_URL).ok())
        .unwrap_or_else(|| defaults::DATABASE_URL.into());

    info!("Connecting to database: {}", database_url);
    let database = match Database::new(&database_url).await {
        Ok(database) => database,
        Err(e) => {
            error!("Error seeding database: {}", e);
            return ExitCode::from(exit_codes::SEED_FAILURE);
        }
    };

    let result = run_seed(&database).await;
    ExitCode::from(exit_status(&result))
}
