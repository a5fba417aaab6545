// ABOUTME: LLM provider abstraction layer for the generative model behind plan generation
// ABOUTME: Defines the provider contract, request/response types and capability flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino API Contributors

//! # LLM Provider Interface
//!
//! This module defines the contract a generative model backend implements to
//! serve plan generation. The HTTP layer only ever sees `dyn LlmProvider`, so
//! tests substitute a scripted provider without touching the network.
//!
//! ## Key Concepts
//!
//! - **`LlmCapabilities`**: Bitflags describing provider features
//! - **`LlmProvider`**: Async trait for single-shot completion and model listing
//! - **`ChatMessage`**: Role-based message structure
//! - **`ChatRequest`**: Request configuration including model, temperature and output format
//!
//! ## Example: Using a Provider
//!
//! ```rust,no_run
//! use treino_api::llm::{ChatMessage, ChatRequest, LlmProvider};
//!
//! async fn example(provider: &dyn LlmProvider) {
//!     let request = ChatRequest::new(vec![ChatMessage::user("Monte um treino de 30 minutos")]);
//!     let response = provider.complete(&request).await;
//! }
//! ```

mod gemini;
pub mod prompts;

pub use gemini::GeminiProvider;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

// ============================================================================
// Capability Flags
// ============================================================================

bitflags::bitflags! {
    /// LLM provider capability flags
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct LlmCapabilities: u8 {
        /// Provider supports system messages
        const SYSTEM_MESSAGES = 0b0000_0001;
        /// Provider can be forced to emit JSON
        const JSON_MODE = 0b0000_0010;
        /// Provider can list the models available to the credential
        const MODEL_LISTING = 0b0000_0100;
    }
}

impl LlmCapabilities {
    /// Check if JSON mode is supported
    #[must_use]
    pub const fn supports_json_mode(&self) -> bool {
        self.contains(Self::JSON_MODE)
    }

    /// Check if system messages are supported
    #[must_use]
    pub const fn supports_system_messages(&self) -> bool {
        self.contains(Self::SYSTEM_MESSAGES)
    }

    /// Check if model listing is supported
    #[must_use]
    pub const fn supports_model_listing(&self) -> bool {
        self.contains(Self::MODEL_LISTING)
    }
}

// ============================================================================
// Message Types
// ============================================================================

/// Role of a message in the conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// System instruction message
    System,
    /// User input message
    User,
}

/// A single message in a chat conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender
    pub role: MessageRole,
    /// Content of the message
    pub content: String,
}

impl ChatMessage {
    /// Create a new chat message
    #[must_use]
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a system message
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content)
    }

    /// Create a user message
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Output format requested from the model
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// Unconstrained text
    #[default]
    Text,
    /// A single JSON document
    Json,
}

/// Configuration for a chat completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Conversation messages
    pub messages: Vec<ChatMessage>,
    /// Model identifier (provider-specific)
    pub model: Option<String>,
    /// Temperature for response randomness (0.0 - 2.0)
    pub temperature: Option<f32>,
    /// Requested output format
    pub response_format: ResponseFormat,
}

impl ChatRequest {
    /// Create a new chat request with messages
    #[must_use]
    pub const fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            model: None,
            temperature: None,
            response_format: ResponseFormat::Text,
        }
    }

    /// Set the model to use
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the temperature
    #[must_use]
    pub const fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    /// Request JSON output
    #[must_use]
    pub const fn with_json_output(mut self) -> Self {
        self.response_format = ResponseFormat::Json;
        self
    }
}

/// Response from a chat completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Generated message content, never blank
    pub content: String,
    /// Model used for generation
    pub model: String,
    /// Finish reason (STOP, MAX_TOKENS, ...)
    pub finish_reason: Option<String>,
}

/// A model available to the configured credential
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Model resource name (e.g. `models/gemini-1.5-flash`)
    pub name: String,
    /// Human-readable name
    pub display_name: Option<String>,
    /// Generation methods the model supports
    pub supported_generation_methods: Vec<String>,
}

// ============================================================================
// Provider Trait
// ============================================================================

/// LLM provider trait
///
/// Implementations must fail loudly: transport errors, API errors and blank
/// output are all returned as `Err`. Nothing is retried.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Unique provider identifier (e.g., "gemini")
    fn name(&self) -> &'static str;

    /// Provider capabilities
    fn capabilities(&self) -> LlmCapabilities;

    /// Model used when the request does not name one
    fn default_model(&self) -> &str;

    /// Perform a single completion
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError>;

    /// List models available to the configured credential
    async fn list_models(&self) -> Result<Vec<ModelInfo>, AppError>;
}
