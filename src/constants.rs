// ABOUTME: Application constants grouped by domain
// ABOUTME: Service names, environment variable names, defaults and fixed client messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino API Contributors

//! Constants module
//!
//! Constants are grouped into small domain modules rather than one flat list.

/// Service identification
pub mod service_names {
    /// Service name used in logs and the root endpoint
    pub const TREINO_API: &str = "treino-api";
}

/// Environment variable names
pub mod env_vars {
    /// Bind address
    pub const HOST: &str = "HOST";
    /// Bind port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Generative model credential
    pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
    /// Generative model name
    pub const GEMINI_MODEL: &str = "GEMINI_MODEL";
    /// Generative model API base URL
    pub const GEMINI_API_BASE_URL: &str = "GEMINI_API_BASE_URL";
    /// Sampling temperature
    pub const LLM_TEMPERATURE: &str = "LLM_TEMPERATURE";
    /// Exercise selection strategy
    pub const SELECTION_STRATEGY: &str = "SELECTION_STRATEGY";
    /// Shortlist size cap
    pub const SELECTION_MAX_EXERCISES: &str = "SELECTION_MAX_EXERCISES";
    /// Plan output format
    pub const PLAN_FORMAT: &str = "PLAN_FORMAT";
    /// Allowed CORS origins
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
}

/// Default configuration values
pub mod defaults {
    /// Default bind address
    pub const HOST: &str = "0.0.0.0";
    /// Default bind port
    pub const HTTP_PORT: u16 = 8000;
    /// Default generative model
    pub const GEMINI_MODEL: &str = "gemini-1.5-flash";
    /// Default generative model API base URL
    pub const GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
    /// Shortlist cap for tag filtering
    pub const FILTER_BY_TAG_MAX_EXERCISES: usize = 8;
    /// Shortlist cap for goal-to-group sampling
    pub const GOAL_GROUPS_MAX_EXERCISES: usize = 6;
}

/// Fixed messages returned to clients
pub mod messages {
    /// Returned whenever the model credential is absent
    pub const MISSING_API_KEY: &str = "GEMINI_API_KEY is not configured";
    /// Prefix of the empty-shortlist error
    pub const NO_EXERCISE_FOUND: &str = "no exercise found";
}
