// ABOUTME: Domain service layer for business logic extracted from route handlers
// ABOUTME: Hosts workout plan generation independent of the HTTP layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino API Contributors

//! Domain service layer
//!
//! Route handlers stay thin: they parse and validate input, then delegate to
//! the services here.

/// Workout plan generation: selection, prompting, model call and validation
pub mod plan_generation;

pub use plan_generation::{GeneratedPlan, PlanService, PreparedPlan};
