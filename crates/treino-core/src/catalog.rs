// ABOUTME: Static exercise catalog tagged by body group, fitness level and goal
// ABOUTME: Process-wide read-only table consulted by every selection strategy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino API Contributors

//! # Exercise Catalog
//!
//! The catalog is a `static` slice: it is built at compile time, has no
//! mutation API and can be read concurrently without synchronisation.
//! Catalog order is significant, since tag filtering preserves it.

use crate::models::{BodyGroup, Exercise, FitnessLevel, Goal};

const ALL: &[FitnessLevel] = &FitnessLevel::ALL;
const BEGINNER_ONLY: &[FitnessLevel] = &[FitnessLevel::Beginner];
const BEGINNER_INTERMEDIATE: &[FitnessLevel] = &[FitnessLevel::Beginner, FitnessLevel::Intermediate];
const INTERMEDIATE_ADVANCED: &[FitnessLevel] = &[FitnessLevel::Intermediate, FitnessLevel::Advanced];
const ADVANCED_ONLY: &[FitnessLevel] = &[FitnessLevel::Advanced];

/// Every known exercise, in catalog order
pub static CATALOG: &[Exercise] = &[
    // pernas
    Exercise {
        id: "agachamento_livre",
        name: "Agachamento livre",
        group: BodyGroup::Pernas,
        levels: ALL,
        goals: &[Goal::WeightLoss, Goal::Hypertrophy, Goal::Strength],
    },
    Exercise {
        id: "agachamento_goblet",
        name: "Agachamento goblet",
        group: BodyGroup::Pernas,
        levels: BEGINNER_INTERMEDIATE,
        goals: &[Goal::WeightLoss, Goal::Hypertrophy],
    },
    Exercise {
        id: "leg_press",
        name: "Leg press 45°",
        group: BodyGroup::Pernas,
        levels: ALL,
        goals: &[Goal::Hypertrophy, Goal::Strength],
    },
    Exercise {
        id: "afundo_alternado",
        name: "Afundo alternado",
        group: BodyGroup::Pernas,
        levels: ALL,
        goals: &[Goal::WeightLoss, Goal::Endurance, Goal::Hypertrophy],
    },
    Exercise {
        id: "elevacao_pelvica",
        name: "Elevação pélvica",
        group: BodyGroup::Pernas,
        levels: ALL,
        goals: &[Goal::Hypertrophy, Goal::Strength, Goal::Mobility],
    },
    Exercise {
        id: "cadeira_extensora",
        name: "Cadeira extensora",
        group: BodyGroup::Pernas,
        levels: BEGINNER_INTERMEDIATE,
        goals: &[Goal::Hypertrophy],
    },
    Exercise {
        id: "polichinelo",
        name: "Polichinelo",
        group: BodyGroup::Pernas,
        levels: BEGINNER_INTERMEDIATE,
        goals: &[Goal::WeightLoss, Goal::Endurance],
    },
    Exercise {
        id: "stiff_halteres",
        name: "Stiff com halteres",
        group: BodyGroup::Pernas,
        levels: INTERMEDIATE_ADVANCED,
        goals: &[Goal::Hypertrophy, Goal::Strength],
    },
    Exercise {
        id: "agachamento_bulgaro",
        name: "Agachamento búlgaro",
        group: BodyGroup::Pernas,
        levels: INTERMEDIATE_ADVANCED,
        goals: &[Goal::Hypertrophy, Goal::Strength, Goal::Endurance],
    },
    Exercise {
        id: "levantamento_terra",
        name: "Levantamento terra",
        group: BodyGroup::Pernas,
        levels: ADVANCED_ONLY,
        goals: &[Goal::Strength],
    },
    Exercise {
        id: "alongamento_posteriores",
        name: "Alongamento de posteriores de coxa",
        group: BodyGroup::Pernas,
        levels: ALL,
        goals: &[Goal::Mobility],
    },
    // costas
    Exercise {
        id: "remada_baixa",
        name: "Remada baixa na polia",
        group: BodyGroup::Costas,
        levels: ALL,
        goals: &[Goal::WeightLoss, Goal::Hypertrophy, Goal::Strength],
    },
    Exercise {
        id: "puxada_frontal",
        name: "Puxada frontal",
        group: BodyGroup::Costas,
        levels: ALL,
        goals: &[Goal::WeightLoss, Goal::Hypertrophy],
    },
    Exercise {
        id: "remada_unilateral",
        name: "Remada unilateral com halter",
        group: BodyGroup::Costas,
        levels: BEGINNER_INTERMEDIATE,
        goals: &[Goal::WeightLoss, Goal::Hypertrophy],
    },
    Exercise {
        id: "superman",
        name: "Superman",
        group: BodyGroup::Costas,
        levels: BEGINNER_INTERMEDIATE,
        goals: &[Goal::Endurance, Goal::Mobility],
    },
    Exercise {
        id: "remada_curvada",
        name: "Remada curvada com barra",
        group: BodyGroup::Costas,
        levels: INTERMEDIATE_ADVANCED,
        goals: &[Goal::Hypertrophy, Goal::Strength],
    },
    Exercise {
        id: "barra_fixa",
        name: "Barra fixa",
        group: BodyGroup::Costas,
        levels: ADVANCED_ONLY,
        goals: &[Goal::Strength, Goal::Hypertrophy, Goal::Endurance],
    },
    // peito
    Exercise {
        id: "flexao_joelhos",
        name: "Flexão de braços com joelhos apoiados",
        group: BodyGroup::Peito,
        levels: BEGINNER_ONLY,
        goals: &[Goal::WeightLoss, Goal::Endurance],
    },
    Exercise {
        id: "supino_maquina",
        name: "Supino na máquina",
        group: BodyGroup::Peito,
        levels: BEGINNER_ONLY,
        goals: &[Goal::WeightLoss, Goal::Hypertrophy],
    },
    Exercise {
        id: "supino_halteres",
        name: "Supino reto com halteres",
        group: BodyGroup::Peito,
        levels: ALL,
        goals: &[Goal::Hypertrophy, Goal::Strength],
    },
    Exercise {
        id: "crucifixo_halteres",
        name: "Crucifixo com halteres",
        group: BodyGroup::Peito,
        levels: BEGINNER_INTERMEDIATE,
        goals: &[Goal::Hypertrophy],
    },
    Exercise {
        id: "flexao_bracos",
        name: "Flexão de braços",
        group: BodyGroup::Peito,
        levels: INTERMEDIATE_ADVANCED,
        goals: &[Goal::WeightLoss, Goal::Endurance, Goal::Strength],
    },
    Exercise {
        id: "supino_barra",
        name: "Supino reto com barra",
        group: BodyGroup::Peito,
        levels: INTERMEDIATE_ADVANCED,
        goals: &[Goal::Strength, Goal::Hypertrophy],
    },
    // ombros
    Exercise {
        id: "desenvolvimento_halteres",
        name: "Desenvolvimento com halteres",
        group: BodyGroup::Ombros,
        levels: ALL,
        goals: &[Goal::Hypertrophy, Goal::Strength],
    },
    Exercise {
        id: "elevacao_lateral",
        name: "Elevação lateral",
        group: BodyGroup::Ombros,
        levels: ALL,
        goals: &[Goal::Hypertrophy],
    },
    Exercise {
        id: "rotacao_externa",
        name: "Rotação externa com elástico",
        group: BodyGroup::Ombros,
        levels: BEGINNER_INTERMEDIATE,
        goals: &[Goal::Mobility],
    },
    Exercise {
        id: "desenvolvimento_militar",
        name: "Desenvolvimento militar com barra",
        group: BodyGroup::Ombros,
        levels: ADVANCED_ONLY,
        goals: &[Goal::Strength],
    },
    // bracos
    Exercise {
        id: "rosca_direta",
        name: "Rosca direta",
        group: BodyGroup::Bracos,
        levels: ALL,
        goals: &[Goal::Hypertrophy],
    },
    Exercise {
        id: "triceps_polia",
        name: "Tríceps na polia",
        group: BodyGroup::Bracos,
        levels: ALL,
        goals: &[Goal::Hypertrophy],
    },
    Exercise {
        id: "mergulho_banco",
        name: "Mergulho no banco",
        group: BodyGroup::Bracos,
        levels: INTERMEDIATE_ADVANCED,
        goals: &[Goal::Strength, Goal::Endurance],
    },
    // core
    Exercise {
        id: "prancha",
        name: "Prancha abdominal",
        group: BodyGroup::Core,
        levels: ALL,
        goals: &[Goal::WeightLoss, Goal::Endurance, Goal::Strength],
    },
    Exercise {
        id: "abdominal_bicicleta",
        name: "Abdominal bicicleta",
        group: BodyGroup::Core,
        levels: BEGINNER_INTERMEDIATE,
        goals: &[Goal::WeightLoss, Goal::Endurance],
    },
    Exercise {
        id: "perdigueiro",
        name: "Perdigueiro",
        group: BodyGroup::Core,
        levels: BEGINNER_INTERMEDIATE,
        goals: &[Goal::Mobility],
    },
    Exercise {
        id: "gato_camelo",
        name: "Mobilidade gato-camelo",
        group: BodyGroup::Core,
        levels: ALL,
        goals: &[Goal::Mobility],
    },
    Exercise {
        id: "prancha_lateral",
        name: "Prancha lateral",
        group: BodyGroup::Core,
        levels: INTERMEDIATE_ADVANCED,
        goals: &[Goal::Endurance, Goal::Strength],
    },
    Exercise {
        id: "mountain_climber",
        name: "Mountain climber",
        group: BodyGroup::Core,
        levels: INTERMEDIATE_ADVANCED,
        goals: &[Goal::WeightLoss, Goal::Endurance],
    },
    Exercise {
        id: "roda_abdominal",
        name: "Roda abdominal",
        group: BodyGroup::Core,
        levels: ADVANCED_ONLY,
        goals: &[Goal::Strength],
    },
];

/// Look up an exercise by identifier
#[must_use]
pub fn find(id: &str) -> Option<&'static Exercise> {
    CATALOG.iter().find(|exercise| exercise.id == id)
}

/// Exercises of `group` suitable for `level`, in catalog order
pub fn group_at_level(
    group: BodyGroup,
    level: FitnessLevel,
) -> impl Iterator<Item = &'static Exercise> {
    CATALOG
        .iter()
        .filter(move |exercise| exercise.group == group && exercise.supports_level(level))
}
