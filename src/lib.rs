// ABOUTME: Main library entry point for the Treino workout plan API
// ABOUTME: Exposes configuration, selection, prompting, model providers and HTTP routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino API Contributors

#![deny(unsafe_code)]

//! # Treino API
//!
//! A small HTTP backend that turns a student profile into a workout plan by
//! prompting a generative language model (Google Gemini).
//!
//! ## Architecture
//!
//! - **Selection**: narrows the static exercise catalog to a shortlist
//! - **Prompts**: renders the profile and shortlist into prompt text
//! - **LLM**: provider trait and the Gemini implementation
//! - **Services**: plan generation orchestration and output validation
//! - **Routes**: axum handlers for the public endpoints
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use treino_api::config::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     treino_api::server::serve(config).await
//! }
//! ```

/// Environment-driven configuration
pub mod config;

/// Application constants
pub mod constants;

/// Unified error handling
pub mod errors;

/// Generative model providers and prompt templates
pub mod llm;

/// Structured logging setup
pub mod logging;

/// HTTP middleware (request ID, CORS)
pub mod middleware;

/// HTTP route handlers
pub mod routes;

/// Exercise shortlist selection
pub mod selection;

/// Server assembly and lifecycle
pub mod server;

/// Domain services
pub mod services;

pub use treino_core::{catalog, models};
