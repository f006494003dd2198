// ABOUTME: Core data models for the Gym Journal application
// ABOUTME: Defines the Exercise catalogue entry and its insert payload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Journal Contributors

//! # Data Models
//!
//! - `Exercise`: a stored exercise catalogue entry
//! - `NewExercise`: the six-field payload used to create one

/// Exercise catalogue types
pub mod exercise;

pub use exercise::{Exercise, NewExercise};
