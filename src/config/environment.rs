// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses bind address, model credential, selection strategy and plan format
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino API Contributors

//! Environment-based configuration management
//!
//! All settings come from environment variables. A missing model credential
//! is tolerated at startup and only fails requests that need the model;
//! every other unparsable value aborts startup.

use std::env;
use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::constants::{defaults, env_vars};

/// How the exercise shortlist is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionStrategy {
    /// No shortlist; the model chooses freely
    None,
    /// Filter the catalog by level and goal tags
    #[default]
    FilterByTag,
    /// Expand goals to body groups and sample each group
    GoalGroups,
}

impl SelectionStrategy {
    /// Configuration spelling
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::FilterByTag => "filter-by-tag",
            Self::GoalGroups => "goal-groups",
        }
    }

    /// Shortlist cap used when `SELECTION_MAX_EXERCISES` is unset
    #[must_use]
    pub const fn default_max_exercises(self) -> usize {
        match self {
            Self::None => 0,
            Self::FilterByTag => defaults::FILTER_BY_TAG_MAX_EXERCISES,
            Self::GoalGroups => defaults::GOAL_GROUPS_MAX_EXERCISES,
        }
    }
}

impl FromStr for SelectionStrategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "none" | "off" => Ok(Self::None),
            "filter-by-tag" | "tags" => Ok(Self::FilterByTag),
            "goal-groups" | "groups" => Ok(Self::GoalGroups),
            other => bail!("unknown selection strategy '{other}'"),
        }
    }
}

impl Display for SelectionStrategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shape of the plan requested from the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanFormat {
    /// Free text with warm-up, main and cool-down sections
    #[default]
    Text,
    /// Strict JSON object validated against the shortlist
    Json,
}

impl FromStr for PlanFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "texto" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => bail!("unknown plan format '{other}'"),
        }
    }
}

impl Display for PlanFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Generative model settings
#[derive(Clone)]
pub struct GeminiConfig {
    /// Credential; `None` makes every model-backed request fail
    pub api_key: Option<String>,
    /// Model name
    pub model: String,
    /// API base URL
    pub base_url: String,
    /// Optional sampling temperature
    pub temperature: Option<f32>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: defaults::GEMINI_MODEL.to_owned(),
            base_url: defaults::GEMINI_API_BASE_URL.to_owned(),
            temperature: None,
        }
    }
}

impl Debug for GeminiConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("temperature", &self.temperature)
            .finish()
    }
}

/// Exercise selection settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionConfig {
    /// Strategy
    pub strategy: SelectionStrategy,
    /// Shortlist cap
    pub max_exercises: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        let strategy = SelectionStrategy::default();
        Self {
            strategy,
            max_exercises: strategy.default_max_exercises(),
        }
    }
}

/// CORS settings
#[derive(Debug, Clone)]
pub struct CorsConfig {
    /// Comma-separated origins, or `*`
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: "*".to_owned(),
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// HTTP port
    pub http_port: u16,
    /// Generative model settings
    pub gemini: GeminiConfig,
    /// Exercise selection settings
    pub selection: SelectionConfig,
    /// Plan output format
    pub plan_format: PlanFormat,
    /// CORS settings
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::HOST.to_owned(),
            http_port: defaults::HTTP_PORT,
            gemini: GeminiConfig::default(),
            selection: SelectionConfig::default(),
            plan_format: PlanFormat::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if any present variable cannot be parsed.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let strategy: SelectionStrategy = env_var_or(
            env_vars::SELECTION_STRATEGY,
            SelectionStrategy::default().as_str(),
        )
        .parse()
        .context("Invalid SELECTION_STRATEGY value")?;

        let max_exercises = match optional_env(env_vars::SELECTION_MAX_EXERCISES) {
            Some(raw) => {
                let max: usize = raw
                    .parse()
                    .context("Invalid SELECTION_MAX_EXERCISES value")?;
                if max == 0 {
                    bail!("SELECTION_MAX_EXERCISES must be greater than zero");
                }
                max
            }
            None => strategy.default_max_exercises(),
        };

        let temperature = optional_env(env_vars::LLM_TEMPERATURE)
            .map(|raw| raw.parse::<f32>())
            .transpose()
            .context("Invalid LLM_TEMPERATURE value")?;

        let api_key = optional_env(env_vars::GEMINI_API_KEY);
        if api_key.is_none() {
            warn!("GEMINI_API_KEY is not set; plan generation will fail until it is configured");
        }

        let config = Self {
            host: env_var_or(env_vars::HOST, defaults::HOST),
            http_port: env_var_or(env_vars::HTTP_PORT, &defaults::HTTP_PORT.to_string())
                .parse()
                .context("Invalid HTTP_PORT value")?,
            gemini: GeminiConfig {
                api_key,
                model: env_var_or(env_vars::GEMINI_MODEL, defaults::GEMINI_MODEL),
                base_url: env_var_or(env_vars::GEMINI_API_BASE_URL, defaults::GEMINI_API_BASE_URL)
                    .trim_end_matches('/')
                    .to_owned(),
                temperature,
            },
            selection: SelectionConfig {
                strategy,
                max_exercises,
            },
            plan_format: env_var_or(env_vars::PLAN_FORMAT, "text")
                .parse()
                .context("Invalid PLAN_FORMAT value")?,
            cors: CorsConfig {
                allowed_origins: env_var_or(env_vars::CORS_ALLOWED_ORIGINS, "*"),
            },
        };

        Ok(config)
    }

    /// Socket address string to bind
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// One-line-per-setting summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Treino API configuration:\n\
             - Bind: {}\n\
             - Model: {}\n\
             - Credential: {}\n\
             - Selection: {} (max {})\n\
             - Plan format: {}",
            self.bind_address(),
            self.gemini.model,
            if self.gemini.api_key.is_some() {
                "Configured"
            } else {
                "Missing"
            },
            self.selection.strategy,
            self.selection.max_exercises,
            self.plan_format,
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    optional_env(key).unwrap_or_else(|| default.to_owned())
}

/// Get a non-blank environment variable
fn optional_env(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}
