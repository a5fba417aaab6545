// ABOUTME: Student profile received by the plan endpoint, with lenient level and goal parsing
// ABOUTME: Normalises the string-or-list goal field and validates biometric values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino API Contributors

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::errors::{AppError, AppResult};

/// Open-ended lifestyle attributes (sleep, diet, stress, ...)
///
/// Values are passed opaquely into the prompt and never interpreted.
pub type Lifestyle = BTreeMap<String, serde_json::Value>;

/// Fitness level, spelled in several ways across clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitnessLevel {
    /// Iniciante
    Beginner,
    /// Intermediário
    Intermediate,
    /// Avançado
    Advanced,
}

impl FitnessLevel {
    /// All levels in ascending order
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// Parse a level leniently; unknown spellings yield `None`
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match fold_text(raw).as_str() {
            "iniciante" | "beginner" | "basico" | "novice" => Some(Self::Beginner),
            "intermediario" | "intermediate" | "medio" => Some(Self::Intermediate),
            "avancado" | "advanced" | "expert" => Some(Self::Advanced),
            _ => None,
        }
    }

    /// Canonical Portuguese label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Beginner => "iniciante",
            Self::Intermediate => "intermediario",
            Self::Advanced => "avancado",
        }
    }
}

impl fmt::Display for FitnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Training goal recognised by the exercise catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Emagrecimento
    WeightLoss,
    /// Hipertrofia
    Hypertrophy,
    /// Força
    Strength,
    /// Resistência / condicionamento
    Endurance,
    /// Mobilidade / flexibilidade
    Mobility,
}

impl Goal {
    /// Parse a goal leniently; unknown goals yield `None`
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match fold_text(raw).as_str() {
            "emagrecimento" | "emagrecer" | "perda de peso" | "weight loss" | "fat loss" => {
                Some(Self::WeightLoss)
            }
            "hipertrofia" | "ganho de massa" | "ganho de massa muscular" | "hypertrophy"
            | "muscle gain" => Some(Self::Hypertrophy),
            "forca" | "strength" => Some(Self::Strength),
            "resistencia" | "condicionamento" | "condicionamento fisico" | "endurance"
            | "conditioning" => Some(Self::Endurance),
            "mobilidade" | "flexibilidade" | "mobility" | "flexibility" => Some(Self::Mobility),
            _ => None,
        }
    }
}

/// Goals as sent by the client, normalised to an ordered list
///
/// Accepts either a single string or a list of strings. Entries are trimmed
/// and blank entries dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Goals(Vec<String>);

impl Goals {
    /// Build from raw strings, applying the same normalisation as deserialisation
    pub fn new<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            raw.into_iter()
                .map(|goal| goal.as_ref().trim().to_owned())
                .filter(|goal| !goal.is_empty())
                .collect(),
        )
    }

    /// Goals as received (trimmed)
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Whether no goal was given
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Recognised goals in request order, without duplicates
    #[must_use]
    pub fn recognized(&self) -> Vec<Goal> {
        let mut goals = Vec::new();
        for goal in self.0.iter().filter_map(|raw| Goal::parse(raw)) {
            if !goals.contains(&goal) {
                goals.push(goal);
            }
        }
        goals
    }
}

impl Serialize for Goals {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Goals {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct GoalsVisitor;

        impl<'de> Visitor<'de> for GoalsVisitor {
            type Value = Goals;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a goal string or a list of goal strings")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Goals, E> {
                Ok(Goals::new([value]))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Goals, E> {
                Ok(Goals::default())
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Goals, A::Error> {
                let mut raw: Vec<String> = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(goal) = seq.next_element::<String>()? {
                    raw.push(goal);
                }
                Ok(Goals::new(raw))
            }
        }

        deserializer.deserialize_any(GoalsVisitor)
    }
}

/// Student profile submitted for plan generation
///
/// Portuguese field names are canonical; English names are accepted as
/// aliases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Student name
    #[serde(rename = "nome", alias = "name")]
    pub name: String,
    /// Age in years
    #[serde(rename = "idade", alias = "age")]
    pub age: u32,
    /// Height in metres
    #[serde(rename = "altura", alias = "height")]
    pub height: f64,
    /// Weight in kilograms
    #[serde(rename = "peso", alias = "weight")]
    pub weight: f64,
    /// Fitness level as sent by the client
    #[serde(rename = "nivel", alias = "level")]
    pub level: String,
    /// One or more goals
    #[serde(rename = "objetivo", alias = "goal", alias = "goals", default)]
    pub goals: Goals,
    /// Lifestyle attributes
    #[serde(rename = "estilo_vida", alias = "lifestyle", default)]
    pub lifestyle: Lifestyle,
}

impl Profile {
    /// Parsed fitness level, `None` when the spelling is unknown
    #[must_use]
    pub fn fitness_level(&self) -> Option<FitnessLevel> {
        FitnessLevel::parse(&self.level)
    }

    /// Check biometric values for obviously impossible inputs
    ///
    /// # Errors
    ///
    /// Returns an `InvalidInput` error naming the first offending field.
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::invalid_input("nome must not be blank"));
        }
        if !(1..=120).contains(&self.age) {
            return Err(AppError::invalid_input(format!(
                "idade must be between 1 and 120, got {}",
                self.age
            )));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(AppError::invalid_input("altura must be a positive number"));
        }
        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(AppError::invalid_input("peso must be a positive number"));
        }
        Ok(())
    }
}

/// Lowercase, trim and strip Portuguese diacritics
fn fold_text(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
            'é' | 'ê' | 'è' => 'e',
            'í' | 'î' => 'i',
            'ó' | 'ô' | 'õ' | 'ö' => 'o',
            'ú' | 'ü' => 'u',
            'ç' => 'c',
            '_' | '-' => ' ',
            other => other,
        })
        .collect()
}
