// ABOUTME: Exercise catalogue model and validated insert payload
// ABOUTME: Every exercise carries name, description, category, muscle group, equipment, instructions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Journal Contributors

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored exercise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    /// Identifier assigned by the persistence layer
    pub id: String,
    /// Human-readable title, e.g. "Barbell Squat"
    pub name: String,
    /// Free text description
    pub description: String,
    /// Coarse classification, e.g. "Strength" or "Cardio"
    pub category: String,
    /// Target body region
    pub muscle_group: String,
    /// Required equipment, or "None"
    pub equipment: String,
    /// Execution steps
    pub instructions: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Payload for creating an exercise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExercise {
    pub name: String,
    pub description: String,
    pub category: String,
    pub muscle_group: String,
    pub equipment: String,
    pub instructions: String,
}

impl NewExercise {
    /// Reject payloads with any blank field
    ///
    /// # Errors
    ///
    /// Returns a missing-field error naming the first blank field
    pub fn validate(&self) -> AppResult<()> {
        let fields = [
            ("name", &self.name),
            ("description", &self.description),
            ("category", &self.category),
            ("muscleGroup", &self.muscle_group),
            ("equipment", &self.equipment),
            ("instructions", &self.instructions),
        ];
        match fields.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(AppError::missing_field(field)),
            None => Ok(()),
        }
    }

    /// Attach store-assigned identity
    #[must_use]
    pub fn into_exercise(self, id: String, created_at: DateTime<Utc>) -> Exercise {
        Exercise {
            id,
            name: self.name,
            description: self.description,
            category: self.category,
            muscle_group: self.muscle_group,
            equipment: self.equipment,
            instructions: self.instructions,
            created_at,
        }
    }
}
