// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Re-exports the environment-driven server configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino API Contributors

//! Configuration module for the Treino API

/// Environment and server configuration
pub mod environment;

pub use environment::{
    CorsConfig, GeminiConfig, PlanFormat, SelectionConfig, SelectionStrategy, ServerConfig,
};
