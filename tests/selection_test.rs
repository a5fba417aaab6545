// ABOUTME: Property tests for exercise shortlist selection over the whole catalog
// ABOUTME: Covers tag filtering fallbacks and goal-to-group sampling guarantees
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino API Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;
use treino_api::catalog::{self, CATALOG};
use treino_api::config::{SelectionConfig, SelectionStrategy};
use treino_api::models::{BodyGroup, Exercise, FitnessLevel, Goal, Goals};
use treino_api::selection::{
    filter_by_tag, filter_by_tag_in, goal_groups, groups_for_goals, ExerciseSelector, DEFAULT_GROUPS,
};

const ALL_GOALS: [Goal; 5] = [
    Goal::WeightLoss,
    Goal::Hypertrophy,
    Goal::Strength,
    Goal::Endurance,
    Goal::Mobility,
];

#[test]
fn test_filter_by_tag_respects_level_for_every_pair() {
    for level in FitnessLevel::ALL {
        for goal in ALL_GOALS {
            let selected = filter_by_tag(Some(level), &[goal], usize::MAX);

            assert!(!selected.is_empty(), "{level:?}/{goal:?} selected nothing");
            for exercise in &selected {
                assert!(exercise.supports_level(level));
            }
        }
    }
}

static SMALL_TABLE: &[Exercise] = &[
    Exercise {
        id: "remada_curvada",
        name: "Remada curvada",
        group: BodyGroup::Costas,
        levels: &[FitnessLevel::Advanced],
        goals: &[Goal::Strength],
    },
    Exercise {
        id: "alongamento_posterior",
        name: "Alongamento posterior",
        group: BodyGroup::Pernas,
        levels: &[FitnessLevel::Beginner],
        goals: &[Goal::Mobility],
    },
    Exercise {
        id: "terra",
        name: "Levantamento terra",
        group: BodyGroup::Pernas,
        levels: &[FitnessLevel::Advanced],
        goals: &[Goal::Strength, Goal::Hypertrophy],
    },
];

#[test]
fn test_filter_by_tag_relaxes_to_level_only() {
    let selected: Vec<&str> = filter_by_tag_in(SMALL_TABLE, Some(FitnessLevel::Advanced), &[Goal::Mobility], 10)
        .iter()
        .map(|e| e.id)
        .collect();

    assert_eq!(selected, vec!["remada_curvada", "terra"]);
}

#[test]
fn test_filter_by_tag_without_level_match_uses_whole_table() {
    let selected: Vec<&str> = filter_by_tag_in(SMALL_TABLE, Some(FitnessLevel::Intermediate), &[Goal::Strength], 2)
        .iter()
        .map(|e| e.id)
        .collect();

    assert_eq!(selected, vec!["remada_curvada", "alongamento_posterior"]);
}

#[test]
fn test_filter_by_tag_unknown_level_is_truncated_catalog() {
    let selected: Vec<&str> = filter_by_tag(None, &[], 5).iter().map(|e| e.id).collect();
    let expected: Vec<&str> = CATALOG.iter().take(5).map(|e| e.id).collect();

    assert_eq!(selected, expected);
}

#[test]
fn test_goal_groups_never_duplicates() {
    let mut rng = StdRng::seed_from_u64(2024);

    for level in FitnessLevel::ALL {
        for first in ALL_GOALS {
            for second in ALL_GOALS {
                let selected = goal_groups(Some(level), &[first, second], usize::MAX, &mut rng);
                let unique: HashSet<&str> = selected.iter().map(|e| e.id).collect();

                assert_eq!(unique.len(), selected.len());
                assert!(selected.iter().all(|e| e.supports_level(level)));
            }
        }
    }
}

#[test]
fn test_unknown_goal_uses_default_groups() {
    let goals = Goals::new(["ficar em forma"]);
    let recognized = goals.recognized();

    assert!(recognized.is_empty());
    assert_eq!(groups_for_goals(&recognized), DEFAULT_GROUPS);

    let mut rng = StdRng::seed_from_u64(5);
    let selected = goal_groups(Some(FitnessLevel::Intermediate), &recognized, usize::MAX, &mut rng);
    for exercise in &selected {
        assert!(DEFAULT_GROUPS.contains(&exercise.group));
    }
}

#[test]
fn test_weight_loss_beginner_example() {
    let goals = Goals::new(["Emagrecimento"]);
    let level = FitnessLevel::parse("iniciante");
    let allowed_groups = [
        BodyGroup::Pernas,
        BodyGroup::Costas,
        BodyGroup::Peito,
        BodyGroup::Core,
    ];

    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..25 {
        let selected = goal_groups(level, &goals.recognized(), 6, &mut rng);
        let unique: HashSet<&str> = selected.iter().map(|e| e.id).collect();

        assert_eq!(selected.len(), 6);
        assert_eq!(unique.len(), 6);
        for exercise in &selected {
            assert!(allowed_groups.contains(&exercise.group));
            let beginner_list: Vec<&str> = catalog::group_at_level(exercise.group, FitnessLevel::Beginner)
                .map(|e| e.id)
                .collect();
            assert!(beginner_list.contains(&exercise.id));
        }
    }
}

#[test]
fn test_seeded_selection_is_reproducible() {
    let selector = ExerciseSelector::new(SelectionConfig {
        strategy: SelectionStrategy::GoalGroups,
        max_exercises: 6,
    });

    let first = selector.select(Some(FitnessLevel::Advanced), &[Goal::Strength], &mut StdRng::seed_from_u64(11));
    let second = selector.select(Some(FitnessLevel::Advanced), &[Goal::Strength], &mut StdRng::seed_from_u64(11));

    assert_eq!(first, second);
}
