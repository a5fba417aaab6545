// ABOUTME: Shared test helpers and utilities for integration tests
// ABOUTME: Exports the axum request helper, a scripted model provider and app builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino API Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub mod axum_test;
pub mod scripted_provider;

use std::sync::Arc;

use axum::Router;
use serde_json::{json, Value};
use treino_api::config::{PlanFormat, SelectionConfig, SelectionStrategy, ServerConfig};
use treino_api::llm::LlmProvider;
use treino_api::routes::AppState;
use treino_api::server::build_app;

/// Configuration for a given strategy and format with default caps
pub fn config_with(strategy: SelectionStrategy, format: PlanFormat) -> ServerConfig {
    ServerConfig {
        selection: SelectionConfig {
            strategy,
            max_exercises: strategy.default_max_exercises(),
        },
        plan_format: format,
        ..ServerConfig::default()
    }
}

/// Full application router wired to an optional provider
pub fn app(config: ServerConfig, provider: Option<Arc<dyn LlmProvider>>) -> Router {
    build_app(AppState::new(config, provider))
}

/// A valid profile body using the canonical Portuguese field names
pub fn profile_body() -> Value {
    json!({
        "nome": "Ana",
        "idade": 30,
        "altura": 1.68,
        "peso": 64.5,
        "nivel": "iniciante",
        "objetivo": "Emagrecimento",
        "estilo_vida": {"sono": "7h", "trabalho": "escritório"}
    })
}

/// Share a concrete provider with the app while keeping a handle for assertions
pub fn shared<P: LlmProvider + 'static>(provider: &Arc<P>) -> Option<Arc<dyn LlmProvider>> {
    Some(Arc::clone(provider) as Arc<dyn LlmProvider>)
}
