// ABOUTME: Database operations for the exercise catalogue table
// ABOUTME: Schema migration plus create, get, list and count operations on exercises
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Journal Contributors

use super::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{Exercise, NewExercise};
use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqliteRow, Row};
use tracing::debug;
use uuid::Uuid;

impl Database {
    /// Create exercise tables
    pub(super) async fn migrate_exercises(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS exercises (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                description TEXT NOT NULL,
                category TEXT NOT NULL,
                muscle_group TEXT NOT NULL,
                equipment TEXT NOT NULL,
                instructions TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_exercises_category ON exercises(category)")
            .execute(self.pool())
            .await?;

        Ok(())
    }

    /// Insert a new exercise
    ///
    /// # Errors
    ///
    /// Returns a validation error if any field is blank, or a database error
    /// if the insert fails
    pub async fn create_exercise(&self, exercise: NewExercise) -> AppResult<Exercise> {
        exercise.validate()?;

        let id = Uuid::new_v4().to_string();
        let created_at = Utc::now();

        sqlx::query(
            r"
            INSERT INTO exercises (
                id, name, description, category, muscle_group, equipment, instructions, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(&id)
        .bind(&exercise.name)
        .bind(&exercise.description)
        .bind(&exercise.category)
        .bind(&exercise.muscle_group)
        .bind(&exercise.equipment)
        .bind(&exercise.instructions)
        .bind(created_at.to_rfc3339())
        .execute(self.pool())
        .await
        .map_err(|e| {
            AppError::database(format!("Failed to create exercise '{}': {e}", exercise.name))
                .with_source(e)
        })?;

        debug!(exercise.id = %id, exercise.name = %exercise.name, "Exercise created");
        Ok(exercise.into_exercise(id, created_at))
    }

    /// Get an exercise by ID
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is malformed
    pub async fn get_exercise(&self, id: &str) -> AppResult<Option<Exercise>> {
        let row = sqlx::query(
            r"
            SELECT id, name, description, category, muscle_group, equipment, instructions, created_at
            FROM exercises
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?;

        row.map(|r| row_to_exercise(&r)).transpose()
    }

    /// List all exercises, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is malformed
    pub async fn list_exercises(&self) -> AppResult<Vec<Exercise>> {
        let rows = sqlx::query(
            r"
            SELECT id, name, description, category, muscle_group, equipment, instructions, created_at
            FROM exercises
            ORDER BY created_at ASC, name ASC
            ",
        )
        .fetch_all(self.pool())
        .await?;

        rows.iter().map(row_to_exercise).collect()
    }

    /// Count stored exercises
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn count_exercises(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM exercises")
            .fetch_one(self.pool())
            .await?;
        Ok(count)
    }
}

fn row_to_exercise(row: &SqliteRow) -> AppResult<Exercise> {
    let created_at: String = row.try_get("created_at")?;
    let created_at = DateTime::parse_from_rfc3339(&created_at)
        .map_err(|e| AppError::database(format!("Invalid created_at '{created_at}': {e}")))?
        .with_timezone(&Utc);

    Ok(Exercise {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        category: row.try_get("category")?,
        muscle_group: row.try_get("muscle_group")?,
        equipment: row.try_get("equipment")?,
        instructions: row.try_get("instructions")?,
        created_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    fn bench_press() -> NewExercise {
        NewExercise {
            name: "Bench Press".into(),
            description: "Compound upper body exercise".into(),
            category: "Strength".into(),
            muscle_group: "Chest".into(),
            equipment: "Barbell".into(),
            instructions: "Lower bar to mid-chest, then press back up.".into(),
        }
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let db = Database::new("sqlite::memory:").await.unwrap();

        let created = db.create_exercise(bench_press()).await.unwrap();
        let fetched = db.get_exercise(&created.id).await.unwrap().unwrap();

        assert_eq!(fetched.name, "Bench Press");
        assert_eq!(fetched.muscle_group, "Chest");
        assert_eq!(fetched.id, created.id);
        assert!(db.get_exercise("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_blank_payload_never_reaches_the_store() {
        let db = Database::new("sqlite::memory:").await.unwrap();
        let mut payload = bench_press();
        payload.equipment = String::new();

        let err = db.create_exercise(payload).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::MissingRequiredField);
        assert_eq!(db.count_exercises().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_duplicate_names_are_allowed() {
        let db = Database::new("sqlite::memory:").await.unwrap();

        db.create_exercise(bench_press()).await.unwrap();
        db.create_exercise(bench_press()).await.unwrap();

        let all = db.list_exercises().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_ne!(all[0].id, all[1].id);
    }
}
