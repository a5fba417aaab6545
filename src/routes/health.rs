// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Provides the root status message and a timestamped health endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino API Contributors

//! Health check routes for service monitoring

use crate::constants::service_names;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes() -> axum::Router {
        use axum::{routing::get, Json, Router};

        async fn root_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "status": "online",
                "message": format!("{} is running", service_names::TREINO_API)
            }))
        }

        async fn health_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "status": "healthy",
                "timestamp": chrono::Utc::now().to_rfc3339()
            }))
        }

        Router::new()
            .route("/", get(root_handler))
            .route("/health", get(health_handler))
    }
}
