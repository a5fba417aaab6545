// ABOUTME: Workout plan route handlers for the Portuguese and English endpoints
// ABOUTME: Parses and validates the profile, then delegates to the plan service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino API Contributors

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use tracing::info;
use treino_core::models::Profile;

use super::AppState;
use crate::errors::AppError;
use crate::services::GeneratedPlan;

/// Plan generation routes
pub struct PlanRoutes;

impl PlanRoutes {
    /// Create plan routes under both the Portuguese and the English path
    pub fn routes(state: Arc<AppState>) -> Router {
        Router::new()
            .route("/gerar-treino", post(Self::handle_generate_plan))
            .route("/generate-plan", post(Self::handle_generate_plan))
            .with_state(state)
    }

    async fn handle_generate_plan(
        State(state): State<Arc<AppState>>,
        payload: Result<Json<Profile>, JsonRejection>,
    ) -> Result<Json<GeneratedPlan>, AppError> {
        let Json(profile) = payload.map_err(|rejection| AppError::invalid_format(rejection.body_text()))?;
        profile.validate()?;

        info!(level = %profile.level, goals = ?profile.goals.as_slice(), "Generating workout plan");
        let plan = state.plans.generate(&profile).await?;
        Ok(Json(plan))
    }
}
