// ABOUTME: HTTP server assembly and lifecycle for the plan API
// ABOUTME: Merges route groups, applies the middleware stack and serves with graceful shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino API Contributors

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::body::Body;
use axum::http::Request;
use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, info_span, warn};

use crate::config::ServerConfig;
use crate::llm::{GeminiProvider, LlmProvider};
use crate::middleware::{request_id_middleware, setup_cors};
use crate::routes::{AppState, HealthRoutes, ModelRoutes, PlanRoutes};

/// Build the provider configured by the environment, if any
#[must_use]
pub fn provider_from_config(config: &ServerConfig) -> Option<Arc<dyn LlmProvider>> {
    GeminiProvider::from_config(&config.gemini).map(|provider| {
        info!(provider = ?provider, "Generative model provider configured");
        Arc::new(provider) as Arc<dyn LlmProvider>
    })
}

/// Assemble the application router
///
/// Layer order, outermost first: tracing span, request ID, CORS.
pub fn build_app(state: AppState) -> Router {
    let cors = setup_cors(&state.config);
    let state = Arc::new(state);

    Router::new()
        .merge(HealthRoutes::routes())
        .merge(ModelRoutes::routes(Arc::clone(&state)))
        .merge(PlanRoutes::routes(state))
        .layer(cors)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = tracing::field::Empty,
                )
            }),
        )
}

/// Bind and serve until Ctrl-C or SIGTERM
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve(config: ServerConfig) -> Result<()> {
    let address = config.bind_address();
    let provider = provider_from_config(&config);
    let app = build_app(AppState::new(config, provider));

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("Listening on http://{address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server stopped");
    Ok(())
}

/// Resolve when the process is asked to stop
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to register SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Ctrl-C received, shutting down"),
        () = terminate => info!("SIGTERM received, shutting down"),
    }
}
