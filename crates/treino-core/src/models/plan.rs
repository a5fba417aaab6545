// ABOUTME: Workout plan shapes returned by the generative model
// ABOUTME: Free text, or a structured list of exercises with sets, reps and rest
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino API Contributors

use serde::{Deserialize, Deserializer, Serialize};

/// One prescribed exercise in a structured plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedExercise {
    /// Catalog identifier, must belong to the shortlist
    pub id: String,
    /// Number of sets
    pub sets: u32,
    /// Repetitions per set, free-form ("10-12", "30s"); a bare count is accepted
    #[serde(deserialize_with = "deserialize_reps")]
    pub reps: String,
    /// Rest between sets in seconds
    #[serde(alias = "rest", alias = "descanso")]
    pub rest_seconds: u32,
    /// Coaching note
    #[serde(default, alias = "observacao")]
    pub note: String,
}

/// Accept `"reps": "10-12"` as well as `"reps": 12`
fn deserialize_reps<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Reps {
        Text(String),
        Count(u64),
    }

    Ok(match Reps::deserialize(deserializer)? {
        Reps::Text(text) => text,
        Reps::Count(count) => count.to_string(),
    })
}

/// Structured plan requested in JSON mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredPlan {
    /// Prescribed exercises in execution order
    #[serde(alias = "exercicios")]
    pub exercises: Vec<PlannedExercise>,
}

impl StructuredPlan {
    /// Identifiers not present in `allowed`, in plan order
    #[must_use]
    pub fn unknown_ids<'a>(&'a self, allowed: &[&str]) -> Vec<&'a str> {
        self.exercises
            .iter()
            .map(|exercise| exercise.id.as_str())
            .filter(|id| !allowed.contains(id))
            .collect()
    }
}

/// Plan payload returned to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlanOutput {
    /// Raw model text
    Text(String),
    /// Parsed and validated structured plan
    Structured(StructuredPlan),
}
