// ABOUTME: Google Gemini LLM provider implementation
// ABOUTME: Calls generateContent for plans and the models endpoint for listing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino API Contributors

//! # Gemini Provider
//!
//! Implementation of the `LlmProvider` trait for Google's Gemini models.
//!
//! ## Configuration
//!
//! Set the `GEMINI_API_KEY` environment variable with your API key from
//! Google AI Studio. The model defaults to `gemini-1.5-flash` and can be
//! changed with `GEMINI_MODEL`.
//!
//! The key is sent in the `x-goog-api-key` header, never in the URL, so it
//! cannot leak through transport error messages.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

use super::{
    ChatMessage, ChatRequest, ChatResponse, LlmCapabilities, LlmProvider, MessageRole, ModelInfo,
    ResponseFormat,
};
use crate::config::GeminiConfig;
use crate::constants::defaults;
use crate::errors::{AppError, ErrorCode};

/// Service name used in error messages
const SERVICE: &str = "Gemini";

/// Header carrying the API key
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Page size used when listing models
const MODELS_PAGE_SIZE: &str = "100";

// ============================================================================
// API Request/Response Types
// ============================================================================

/// Gemini API request structure
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

/// Content structure for Gemini API
#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<ContentPart>,
}

/// Part of content; only text parts are produced or consumed
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ContentPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

/// Generation configuration
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'static str>,
    candidate_count: u32,
}

/// Gemini API response structure
#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<Candidate>>,
    #[serde(rename = "usageMetadata")]
    usage_metadata: Option<UsageMetadata>,
    #[serde(rename = "promptFeedback")]
    prompt_feedback: Option<PromptFeedback>,
    error: Option<GeminiError>,
}

/// Response candidate
#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<GeminiContent>,
    #[serde(rename = "finishReason")]
    finish_reason: Option<String>,
}

/// Prompt-level feedback, present when the prompt itself was blocked
#[derive(Debug, Deserialize)]
struct PromptFeedback {
    #[serde(rename = "blockReason")]
    block_reason: Option<String>,
}

/// Usage metadata from Gemini API response
#[derive(Debug, Deserialize)]
struct UsageMetadata {
    #[serde(rename = "promptTokenCount")]
    prompt: Option<u32>,
    #[serde(rename = "candidatesTokenCount")]
    candidates: Option<u32>,
    #[serde(rename = "totalTokenCount")]
    total: Option<u32>,
}

/// API error response from Gemini
#[derive(Debug, Deserialize)]
struct GeminiError {
    message: String,
}

/// Envelope carrying only an error, used when parsing non-2xx bodies
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<GeminiError>,
}

/// Models listing page
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ModelsPage {
    #[serde(default)]
    models: Vec<GeminiModel>,
    next_page_token: Option<String>,
}

/// Model entry in a listing page
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiModel {
    name: String,
    display_name: Option<String>,
    #[serde(default)]
    supported_generation_methods: Vec<String>,
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// Google Gemini LLM provider
pub struct GeminiProvider {
    api_key: String,
    client: Client,
    base_url: String,
    default_model: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider with an API key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            client: Client::new(),
            base_url: defaults::GEMINI_API_BASE_URL.to_owned(),
            default_model: defaults::GEMINI_MODEL.to_owned(),
        }
    }

    /// Create a provider from configuration
    ///
    /// Returns `None` when no credential is configured.
    #[must_use]
    pub fn from_config(config: &GeminiConfig) -> Option<Self> {
        config.api_key.as_ref().map(|api_key| {
            Self::new(api_key.clone())
                .with_base_url(&config.base_url)
                .with_default_model(&config.model)
        })
    }

    /// Set a custom API base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Self {
        self.base_url = base_url.as_ref().trim_end_matches('/').to_owned();
        self
    }

    /// Set a custom default model
    #[must_use]
    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    /// Build the API URL for a model and method
    fn build_url(&self, model: &str, method: &str) -> String {
        let model = model.strip_prefix("models/").unwrap_or(model);
        format!("{}/models/{model}:{method}", self.base_url)
    }

    /// Convert chat messages to Gemini format
    ///
    /// System messages become the system instruction; the last one wins.
    fn convert_messages(messages: &[ChatMessage]) -> (Vec<GeminiContent>, Option<GeminiContent>) {
        let mut contents = Vec::new();
        let mut system_instruction = None;

        for message in messages {
            let parts = vec![ContentPart {
                text: Some(message.content.clone()),
            }];
            match message.role {
                MessageRole::System => {
                    system_instruction = Some(GeminiContent { role: None, parts });
                }
                MessageRole::User => contents.push(GeminiContent {
                    role: Some("user".to_owned()),
                    parts,
                }),
            }
        }

        (contents, system_instruction)
    }

    /// Build a Gemini API request from a `ChatRequest`
    fn build_gemini_request(request: &ChatRequest) -> GeminiRequest {
        let (contents, system_instruction) = Self::convert_messages(&request.messages);

        let response_mime_type = match request.response_format {
            ResponseFormat::Json => Some("application/json"),
            ResponseFormat::Text => None,
        };

        GeminiRequest {
            contents,
            system_instruction,
            generation_config: Some(GenerationConfig {
                temperature: request.temperature,
                response_mime_type,
                candidate_count: 1,
            }),
        }
    }

    /// Extract text content from Gemini response
    ///
    /// All text parts of the first candidate are concatenated. Blank output is
    /// an error.
    fn extract_content(response: &GeminiResponse) -> Result<String, AppError> {
        let candidate = response.candidates.as_ref().and_then(|c| c.first());

        let Some(candidate) = candidate else {
            let reason = response
                .prompt_feedback
                .as_ref()
                .and_then(|f| f.block_reason.as_deref())
                .unwrap_or("no candidates returned");
            return Err(AppError::external_service(
                SERVICE,
                format!("empty response ({reason})"),
            ));
        };

        let text: String = candidate
            .content
            .as_ref()
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|part| part.text.as_deref())
                    .collect()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            let reason = candidate.finish_reason.as_deref().unwrap_or("UNKNOWN");
            return Err(AppError::external_service(
                SERVICE,
                format!("empty response (finish reason: {reason})"),
            ));
        }

        Ok(text)
    }

    /// Map API error status to appropriate error type
    fn map_api_error(status: u16, response_text: &str) -> AppError {
        let message = serde_json::from_str::<ErrorEnvelope>(response_text)
            .ok()
            .and_then(|r| r.error)
            .map_or_else(|| response_text.to_owned(), |e| e.message);

        match status {
            429 => AppError::new(
                ErrorCode::ExternalRateLimited,
                Self::extract_quota_message(&message),
            ),
            _ => AppError::external_service(SERVICE, format!("API error ({status}): {message}")),
        }
    }

    /// Extract a user-friendly quota/rate limit message from Gemini error
    fn extract_quota_message(message: &str) -> String {
        // Example: "Please retry in 6.406453963s."
        const RETRY_PREFIX: &str = "Please retry in ";
        if let Some(retry_pos) = message.find(RETRY_PREFIX) {
            let after_prefix = &message[retry_pos + RETRY_PREFIX.len()..];
            if let Some(s_pos) = after_prefix.find('s') {
                if let Ok(seconds) = after_prefix[..s_pos].parse::<f64>() {
                    let seconds_int = seconds.ceil() as u64;
                    return format!(
                        "AI service quota exceeded. Please try again in {seconds_int} seconds."
                    );
                }
            }
        }
        "AI service quota exceeded. Please wait a moment and try again.".to_owned()
    }

    /// Send a request and return the body of a successful response
    async fn send(&self, builder: reqwest::RequestBuilder) -> Result<String, AppError> {
        let response = builder
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| {
                AppError::external_service(SERVICE, format!("HTTP request failed: {e}"))
                    .with_source(e)
            })?;

        let status = response.status();
        let response_text = response.text().await.map_err(|e| {
            AppError::external_service(SERVICE, format!("Failed to read response: {e}"))
        })?;

        if !status.is_success() {
            error!(status = %status, "Gemini API error");
            return Err(Self::map_api_error(status.as_u16(), &response_text));
        }

        Ok(response_text)
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn capabilities(&self) -> LlmCapabilities {
        LlmCapabilities::SYSTEM_MESSAGES | LlmCapabilities::JSON_MODE | LlmCapabilities::MODEL_LISTING
    }

    fn default_model(&self) -> &str {
        &self.default_model
    }

    #[instrument(skip(self, request), fields(model = %request.model.as_deref().unwrap_or(&self.default_model)))]
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        let model = request.model.as_deref().unwrap_or(&self.default_model);
        let url = self.build_url(model, "generateContent");
        let gemini_request = Self::build_gemini_request(request);

        debug!(format = ?request.response_format, "Sending request to Gemini API");

        let response_text = self
            .send(self.client.post(&url).json(&gemini_request))
            .await?;

        let gemini_response: GeminiResponse =
            serde_json::from_str(&response_text).map_err(|e| {
                error!(error = %e, "Failed to parse Gemini response");
                AppError::external_service(SERVICE, format!("Failed to parse response: {e}"))
            })?;

        if let Some(error) = gemini_response.error.as_ref() {
            return Err(AppError::external_service(
                SERVICE,
                format!("API error: {}", error.message),
            ));
        }

        let content = Self::extract_content(&gemini_response)?;
        let usage = gemini_response.usage_metadata.as_ref();
        let finish_reason = gemini_response
            .candidates
            .as_ref()
            .and_then(|c| c.first())
            .and_then(|c| c.finish_reason.clone());

        debug!(
            prompt_tokens = usage.and_then(|u| u.prompt).unwrap_or(0),
            completion_tokens = usage.and_then(|u| u.candidates).unwrap_or(0),
            total_tokens = usage.and_then(|u| u.total).unwrap_or(0),
            "Successfully received Gemini response"
        );

        Ok(ChatResponse {
            content,
            model: model.to_owned(),
            finish_reason,
        })
    }

    #[instrument(skip(self))]
    async fn list_models(&self) -> Result<Vec<ModelInfo>, AppError> {
        let url = format!("{}/models", self.base_url);
        let mut models = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut query = vec![("pageSize", MODELS_PAGE_SIZE.to_owned())];
            if let Some(token) = page_token.take() {
                query.push(("pageToken", token));
            }

            let body = self.send(self.client.get(&url).query(&query)).await?;
            let page: ModelsPage = serde_json::from_str(&body).map_err(|e| {
                AppError::external_service(SERVICE, format!("Failed to parse model list: {e}"))
            })?;

            models.extend(page.models.into_iter().map(|model| ModelInfo {
                name: model.name,
                display_name: model.display_name,
                supported_generation_methods: model.supported_generation_methods,
            }));

            match page.next_page_token.filter(|token| !token.is_empty()) {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        debug!(count = models.len(), "Listed Gemini models");
        Ok(models)
    }
}

impl Debug for GeminiProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("GeminiProvider")
            .field("base_url", &self.base_url)
            .field("default_model", &self.default_model)
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}
