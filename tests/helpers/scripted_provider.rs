// ABOUTME: In-process LlmProvider double that replays scripted replies
// ABOUTME: Records every request so tests can assert on prompts without network access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino API Contributors

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use treino_api::errors::AppError;
use treino_api::llm::{
    ChatMessage, ChatRequest, ChatResponse, LlmCapabilities, LlmProvider, ModelInfo,
    ResponseFormat,
};

/// Scripted reply
enum Reply {
    Text(String),
    Failure(String),
}

/// Provider returning queued replies in order
pub struct ScriptedProvider {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<ChatRequest>>,
    models: Vec<ModelInfo>,
    capabilities: LlmCapabilities,
}

impl ScriptedProvider {
    /// Provider with no scripted replies; any completion fails
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
            models: vec![ModelInfo {
                name: "models/gemini-1.5-flash".to_owned(),
                display_name: Some("Gemini 1.5 Flash".to_owned()),
                supported_generation_methods: vec!["generateContent".to_owned()],
            }],
            capabilities: LlmCapabilities::JSON_MODE | LlmCapabilities::MODEL_LISTING,
        }
    }

    /// Replace the advertised capabilities
    pub fn with_capabilities(mut self, capabilities: LlmCapabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Provider answering once with `text`
    pub fn replying(text: impl Into<String>) -> Self {
        let provider = Self::new();
        provider.push_text(text);
        provider
    }

    /// Provider failing once with a service error
    pub fn failing(message: impl Into<String>) -> Self {
        let provider = Self::new();
        provider
            .replies
            .lock()
            .unwrap()
            .push_back(Reply::Failure(message.into()));
        provider
    }

    /// Queue another text reply
    pub fn push_text(&self, text: impl Into<String>) {
        self.replies
            .lock()
            .unwrap()
            .push_back(Reply::Text(text.into()));
    }

    /// Number of completions requested so far
    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Prompt text of the most recent completion
    pub fn last_prompt(&self) -> Option<String> {
        self.requests
            .lock()
            .unwrap()
            .last()
            .and_then(|request| request.messages.last())
            .map(|message| message.content.clone())
    }

    /// Messages of the most recent completion
    pub fn last_messages(&self) -> Vec<ChatMessage> {
        self.requests
            .lock()
            .unwrap()
            .last()
            .map(|request| request.messages.clone())
            .unwrap_or_default()
    }

    /// Output format of the most recent completion
    pub fn last_format(&self) -> Option<ResponseFormat> {
        self.requests
            .lock()
            .unwrap()
            .last()
            .map(|request| request.response_format)
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn capabilities(&self) -> LlmCapabilities {
        self.capabilities
    }

    fn default_model(&self) -> &str {
        "scripted-model"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        self.requests.lock().unwrap().push(request.clone());
        let reply = self.replies.lock().unwrap().pop_front();

        match reply {
            Some(Reply::Text(content)) => Ok(ChatResponse {
                content,
                model: request
                    .model
                    .clone()
                    .unwrap_or_else(|| self.default_model().to_owned()),
                finish_reason: Some("STOP".to_owned()),
            }),
            Some(Reply::Failure(message)) => Err(AppError::external_service("Gemini", message)),
            None => Err(AppError::external_service("Gemini", "no scripted reply left")),
        }
    }

    async fn list_models(&self) -> Result<Vec<ModelInfo>, AppError> {
        Ok(self.models.clone())
    }
}
