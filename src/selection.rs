// ABOUTME: Exercise shortlist selection over the static catalog
// ABOUTME: Implements tag filtering with fallbacks and goal-to-group random sampling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino API Contributors

//! # Exercise Selection
//!
//! Narrows the catalog to a shortlist that is embedded into the prompt as the
//! only exercises the model may prescribe.
//!
//! - **Filter-by-tag** is deterministic: level AND goal match, then level-only,
//!   then the whole catalog, truncated in catalog order.
//! - **Goal-groups** expands goals to body groups and shuffles each group's
//!   level-appropriate exercises. The random source is injected so callers
//!   can seed it.
//!
//! Neither strategy ever fails; an empty shortlist is returned as such and
//! the caller decides how to report it.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;
use treino_core::catalog::{self, CATALOG};
use treino_core::models::{BodyGroup, Exercise, FitnessLevel, Goal};

use crate::config::{SelectionConfig, SelectionStrategy};

/// Body groups used when no requested goal is recognised
pub const DEFAULT_GROUPS: &[BodyGroup] = &[
    BodyGroup::Pernas,
    BodyGroup::Peito,
    BodyGroup::Costas,
    BodyGroup::Ombros,
    BodyGroup::Core,
];

/// Ordered body groups trained for a goal
#[must_use]
pub const fn groups_for_goal(goal: Goal) -> &'static [BodyGroup] {
    match goal {
        Goal::WeightLoss => &[
            BodyGroup::Pernas,
            BodyGroup::Costas,
            BodyGroup::Peito,
            BodyGroup::Core,
        ],
        Goal::Hypertrophy => &[
            BodyGroup::Peito,
            BodyGroup::Costas,
            BodyGroup::Pernas,
            BodyGroup::Ombros,
            BodyGroup::Bracos,
        ],
        Goal::Strength => &[
            BodyGroup::Pernas,
            BodyGroup::Costas,
            BodyGroup::Peito,
            BodyGroup::Ombros,
        ],
        Goal::Endurance => &[BodyGroup::Pernas, BodyGroup::Core, BodyGroup::Costas],
        Goal::Mobility => &[BodyGroup::Core, BodyGroup::Pernas, BodyGroup::Ombros],
    }
}

/// Body groups for a list of goals, concatenated in goal order without repeats
#[must_use]
pub fn groups_for_goals(goals: &[Goal]) -> Vec<BodyGroup> {
    if goals.is_empty() {
        return DEFAULT_GROUPS.to_vec();
    }

    let mut groups = Vec::new();
    for group in goals.iter().flat_map(|goal| groups_for_goal(*goal)) {
        if !groups.contains(group) {
            groups.push(*group);
        }
    }
    groups
}

/// Filter the catalog by level and goal tags
///
/// Falls back to level-only matching, then to the whole catalog, so the
/// result is never empty while the catalog is not.
#[must_use]
pub fn filter_by_tag(
    level: Option<FitnessLevel>,
    goals: &[Goal],
    max_exercises: usize,
) -> Vec<&'static Exercise> {
    filter_by_tag_in(CATALOG, level, goals, max_exercises)
}

/// Tag filtering over an arbitrary exercise table, preserving its order
#[must_use]
pub fn filter_by_tag_in(
    exercises: &'static [Exercise],
    level: Option<FitnessLevel>,
    goals: &[Goal],
    max_exercises: usize,
) -> Vec<&'static Exercise> {
    let at_level = |exercise: &&'static Exercise| level.is_some_and(|l| exercise.supports_level(l));

    let mut selected: Vec<&'static Exercise> = exercises
        .iter()
        .filter(at_level)
        .filter(|exercise| goals.is_empty() || exercise.serves_any(goals))
        .collect();

    if selected.is_empty() {
        debug!(?level, ?goals, "No level and goal match, relaxing to level only");
        selected = exercises.iter().filter(at_level).collect();
    }

    if selected.is_empty() {
        debug!(?level, "No level match, falling back to the full catalog");
        selected = exercises.iter().collect();
    }

    selected.truncate(max_exercises);
    selected
}

/// Sample exercises group by group for the requested goals
///
/// Each group's level-appropriate exercises are shuffled independently and
/// appended in group order. An unknown level yields an empty shortlist.
pub fn goal_groups<R: Rng + ?Sized>(
    level: Option<FitnessLevel>,
    goals: &[Goal],
    max_exercises: usize,
    rng: &mut R,
) -> Vec<&'static Exercise> {
    let Some(level) = level else {
        return Vec::new();
    };

    let mut selected: Vec<&'static Exercise> = Vec::new();
    for group in groups_for_goals(goals) {
        let mut candidates: Vec<&'static Exercise> =
            catalog::group_at_level(group, level).collect();
        candidates.shuffle(rng);

        for exercise in candidates {
            if !selected.iter().any(|seen| seen.id == exercise.id) {
                selected.push(exercise);
            }
        }
    }

    selected.truncate(max_exercises);
    selected
}

/// Strategy-driven shortlist builder
#[derive(Debug, Clone, Copy)]
pub struct ExerciseSelector {
    config: SelectionConfig,
}

impl ExerciseSelector {
    /// Create a selector from configuration
    #[must_use]
    pub const fn new(config: SelectionConfig) -> Self {
        Self { config }
    }

    /// Configured strategy
    #[must_use]
    pub const fn strategy(&self) -> SelectionStrategy {
        self.config.strategy
    }

    /// Build the shortlist for a request
    ///
    /// Returns `None` when the strategy does not restrict exercises at all.
    pub fn select<R: Rng + ?Sized>(
        &self,
        level: Option<FitnessLevel>,
        goals: &[Goal],
        rng: &mut R,
    ) -> Option<Vec<&'static Exercise>> {
        let max = self.config.max_exercises;
        match self.config.strategy {
            SelectionStrategy::None => None,
            SelectionStrategy::FilterByTag => Some(filter_by_tag(level, goals, max)),
            SelectionStrategy::GoalGroups => Some(goal_groups(level, goals, max, rng)),
        }
    }
}
