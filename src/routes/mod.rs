// ABOUTME: Route module organization for the plan API HTTP endpoints
// ABOUTME: Defines shared handler state and re-exports each route group
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino API Contributors

//! HTTP routes
//!
//! Each route group exposes a `routes` constructor returning a stateless
//! `Router`; the server merges them and applies the middleware stack.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::errors::{AppError, AppResult};
use crate::llm::LlmProvider;
use crate::services::PlanService;

/// Liveness endpoints
pub mod health;
/// Model listing endpoint
pub mod models;
/// Plan generation endpoints
pub mod plans;

pub use health::HealthRoutes;
pub use models::ModelRoutes;
pub use plans::PlanRoutes;

/// State shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
    /// Model provider, absent when no credential is configured
    pub provider: Option<Arc<dyn LlmProvider>>,
    /// Plan generation service
    pub plans: PlanService,
}

impl AppState {
    /// Build state from configuration and an optional provider
    #[must_use]
    pub fn new(config: ServerConfig, provider: Option<Arc<dyn LlmProvider>>) -> Self {
        let plans = PlanService::new(&config, provider.clone());
        Self {
            config: Arc::new(config),
            provider,
            plans,
        }
    }

    /// Provider or the fixed missing-credential error
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` when no provider is configured.
    pub fn require_provider(&self) -> AppResult<&Arc<dyn LlmProvider>> {
        self.provider
            .as_ref()
            .ok_or_else(|| AppError::config_missing(crate::constants::messages::MISSING_API_KEY))
    }
}
