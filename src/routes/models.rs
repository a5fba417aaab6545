// ABOUTME: Model listing route exposing the models available to the configured credential
// ABOUTME: Forwards to the provider's listing call and reports failures as service errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino API Contributors

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use super::AppState;
use crate::errors::AppError;
use crate::llm::ModelInfo;

/// Response body for `GET /models`
#[derive(Debug, Serialize)]
pub struct ModelsResponse {
    /// Available models
    pub models: Vec<ModelInfo>,
}

/// Model listing routes
pub struct ModelRoutes;

impl ModelRoutes {
    /// Create the model listing route
    pub fn routes(state: Arc<AppState>) -> Router {
        Router::new()
            .route("/models", get(Self::handle_list_models))
            .with_state(state)
    }

    async fn handle_list_models(
        State(state): State<Arc<AppState>>,
    ) -> Result<Json<ModelsResponse>, AppError> {
        let provider = state.require_provider()?;
        if !provider.capabilities().supports_model_listing() {
            return Err(AppError::external_service(
                provider.name(),
                "model listing is not supported",
            ));
        }
        let models = provider.list_models().await?;
        Ok(Json(ModelsResponse { models }))
    }
}
