// ABOUTME: Domain models for profiles, catalog exercises and generated plans
// ABOUTME: Re-exports the public types of each submodule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino API Contributors

/// Catalog exercise records and body groups
pub mod exercise;
/// Generated plan shapes
pub mod plan;
/// Student profile, levels and goals
pub mod profile;

pub use exercise::{BodyGroup, Exercise, ExerciseSummary};
pub use plan::{PlanOutput, PlannedExercise, StructuredPlan};
pub use profile::{FitnessLevel, Goal, Goals, Lifestyle, Profile};
