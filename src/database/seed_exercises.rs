// ABOUTME: Sample exercise seeding procedure used by the seed-exercises binary
// ABOUTME: Inserts four hand-authored exercises concurrently and always releases the store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Journal Contributors

//! Sample Exercise Seeding
//!
//! Populates a development database with a fixed set of exercises.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin seed-exercises
//! cargo run --bin seed-exercises -- --database-url sqlite:./data/gym_journal.db -v
//! ```
//!
//! The batch is all-or-nothing from the caller's point of view: the first
//! failed insert fails the whole run. Seeding is not idempotent; running it
//! twice stores every exercise twice.

use super::Database;
use crate::constants::exit_codes;
use crate::errors::AppResult;
use crate::models::{Exercise, NewExercise};
use async_trait::async_trait;
use futures_util::future::try_join_all;
use tracing::{error, info};

/// Hard-coded seed entry
#[derive(Debug, Clone, Copy)]
pub struct SampleExercise {
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub muscle_group: &'static str,
    pub equipment: &'static str,
    pub instructions: &'static str,
}

impl SampleExercise {
    /// Owned insert payload
    #[must_use]
    pub fn to_new_exercise(&self) -> NewExercise {
        NewExercise {
            name: self.name.to_owned(),
            description: self.description.to_owned(),
            category: self.category.to_owned(),
            muscle_group: self.muscle_group.to_owned(),
            equipment: self.equipment.to_owned(),
            instructions: self.instructions.to_owned(),
        }
    }
}

/// The sample exercises inserted by every seed run
pub const SAMPLE_EXERCISES: &[SampleExercise] = &[
    SampleExercise {
        name: "Barbell Squat",
        description: "Compound lower body exercise targeting quads, glutes, and hamstrings",
        category: "Strength",
        muscle_group: "Legs",
        equipment: "Barbell",
        instructions: "Stand with feet shoulder-width apart, barbell on upper back. Lower hips back and down, keeping chest up. Drive through heels to return to standing.",
    },
    SampleExercise {
        name: "Bench Press",
        description: "Compound upper body exercise targeting chest, shoulders, and triceps",
        category: "Strength",
        muscle_group: "Chest",
        equipment: "Barbell",
        instructions: "Lie on bench, grip barbell slightly wider than shoulders. Lower bar to mid-chest, then press back up.",
    },
    SampleExercise {
        name: "Running",
        description: "Cardiovascular exercise for endurance and fitness",
        category: "Cardio",
        muscle_group: "Full Body",
        equipment: "None",
        instructions: "Maintain steady pace, focus on breathing and form.",
    },
    SampleExercise {
        name: "Pull-ups",
        description: "Bodyweight exercise targeting back and biceps",
        category: "Strength",
        muscle_group: "Back",
        equipment: "Pull-up Bar",
        instructions: "Hang from bar with palms facing away. Pull body up until chin clears bar, lower with control.",
    },
];

/// Store the seed procedure writes to
#[async_trait]
pub trait ExerciseStore: Send + Sync {
    /// Persist one exercise
    async fn create_exercise(&self, exercise: NewExercise) -> AppResult<Exercise>;

    /// Release the underlying connection(s)
    async fn close(&self);
}

#[async_trait]
impl ExerciseStore for Database {
    async fn create_exercise(&self, exercise: NewExercise) -> AppResult<Exercise> {
        Self::create_exercise(self, exercise).await
    }

    async fn close(&self) {
        Self::close(self).await;
    }
}

/// Outcome of a successful seed run
#[derive(Debug, Clone)]
pub struct SeedReport {
    /// Exercises created, in seed order
    pub exercises: Vec<Exercise>,
}

impl SeedReport {
    /// Number of records created
    #[must_use]
    pub fn created(&self) -> usize {
        self.exercises.len()
    }
}

/// Insert every sample exercise concurrently
///
/// Inserts are independent; completion order is not significant. The
/// returned exercises follow [`SAMPLE_EXERCISES`] order.
///
/// # Errors
///
/// Returns the first insert error
pub async fn seed_exercises<S: ExerciseStore + ?Sized>(store: &S) -> AppResult<Vec<Exercise>> {
    info!("Seeding database...");
    let inserts = SAMPLE_EXERCISES
        .iter()
        .map(|sample| store.create_exercise(sample.to_new_exercise()));
    let exercises = try_join_all(inserts).await?;

    for exercise in &exercises {
        info!("  ✓ {}", exercise.name);
    }
    info!("Created {} sample exercises", exercises.len());
    info!("Seeding complete!");
    Ok(exercises)
}

/// Run the seed procedure and release the store on every path
///
/// # Errors
///
/// Returns the seeding error after the store has been closed
pub async fn run_seed<S: ExerciseStore + ?Sized>(store: &S) -> AppResult<SeedReport> {
    let result = seed_exercises(store).await;
    if let Err(e) = &result {
        error!(error = %e, "Error seeding database");
    }
    store.close().await;
    result.map(|exercises| SeedReport { exercises })
}

/// Process exit status for a finished seed run
#[must_use]
pub fn exit_status<T>(result: &AppResult<T>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => exit_codes::SEED_FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_exercises_are_complete() {
        assert_eq!(SAMPLE_EXERCISES.len(), 4);
        for sample in SAMPLE_EXERCISES {
            assert!(sample.to_new_exercise().validate().is_ok(), "{}", sample.name);
        }
    }

    #[test]
    fn test_running_is_cardio_without_equipment() {
        let running = SAMPLE_EXERCISES
            .iter()
            .find(|s| s.name == "Running")
            .unwrap();
        assert_eq!(running.category, "Cardio");
        assert_eq!(running.equipment, "None");
        assert_eq!(running.muscle_group, "Full Body");
    }

    #[tokio::test]
    async fn test_run_seed_against_memory_database() {
        let db = Database::new("sqlite::memory:").await.unwrap();

        let report = run_seed(&db).await.unwrap();

        assert_eq!(report.created(), 4);
        assert_eq!(report.exercises[0].name, "Barbell Squat");
        assert_eq!(report.exercises[3].name, "Pull-ups");
        assert!(db.is_closed());
    }

    #[test]
    fn test_exit_status() {
        let ok: AppResult<()> = Ok(());
        let failed: AppResult<()> = Err(crate::errors::AppError::database("boom"));
        assert_eq!(exit_status(&ok), 0);
        assert_eq!(exit_status(&failed), 1);
    }
}
