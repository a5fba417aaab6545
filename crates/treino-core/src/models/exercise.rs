// ABOUTME: Exercise records and body groups that make up the static catalog
// ABOUTME: Includes the compact summary serialised back to API clients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino API Contributors

use std::fmt;

use serde::{Deserialize, Serialize};

use super::profile::{FitnessLevel, Goal};

/// Body group an exercise primarily trains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyGroup {
    /// Pernas
    Pernas,
    /// Costas
    Costas,
    /// Peito
    Peito,
    /// Ombros
    Ombros,
    /// Braços
    Bracos,
    /// Core / abdômen
    Core,
}

impl BodyGroup {
    /// Lowercase identifier used in prompts and responses
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pernas => "pernas",
            Self::Costas => "costas",
            Self::Peito => "peito",
            Self::Ombros => "ombros",
            Self::Bracos => "bracos",
            Self::Core => "core",
        }
    }
}

impl fmt::Display for BodyGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog exercise with its applicability tags
#[derive(Debug, PartialEq, Eq)]
pub struct Exercise {
    /// Unique identifier the model must echo back
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Primary body group
    pub group: BodyGroup,
    /// Levels the exercise is suitable for
    pub levels: &'static [FitnessLevel],
    /// Goals the exercise serves
    pub goals: &'static [Goal],
}

impl Exercise {
    /// Whether the exercise is suitable for `level`
    #[must_use]
    pub fn supports_level(&self, level: FitnessLevel) -> bool {
        self.levels.contains(&level)
    }

    /// Whether the exercise serves at least one of `goals`
    #[must_use]
    pub fn serves_any(&self, goals: &[Goal]) -> bool {
        goals.iter().any(|goal| self.goals.contains(goal))
    }

    /// Compact representation returned to clients
    #[must_use]
    pub fn summary(&self) -> ExerciseSummary {
        ExerciseSummary {
            id: self.id.to_owned(),
            name: self.name.to_owned(),
            group: self.group,
        }
    }
}

/// Exercise as serialised in `suggested_exercises`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseSummary {
    /// Catalog identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Body group
    pub group: BodyGroup,
}
