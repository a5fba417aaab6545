// ABOUTME: Integration tests for the Gemini provider against a local fake API server
// ABOUTME: Exercises request shape, header authentication, error mapping and model listing pagination
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino API Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use treino_api::errors::ErrorCode;
use treino_api::llm::{ChatMessage, ChatRequest, GeminiProvider, LlmProvider};

/// What the fake API observed and how it should answer
#[derive(Default)]
struct FakeGemini {
    reply: Mutex<Option<(StatusCode, Value)>>,
    last_body: Mutex<Option<Value>>,
    last_path: Mutex<Option<String>>,
    last_key: Mutex<Option<String>>,
}

async fn generate(
    State(fake): State<Arc<FakeGemini>>,
    Path(target): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    *fake.last_path.lock().unwrap() = Some(target);
    *fake.last_body.lock().unwrap() = Some(body);
    *fake.last_key.lock().unwrap() = headers
        .get("x-goog-api-key")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    let (status, reply) = fake
        .reply
        .lock()
        .unwrap()
        .clone()
        .unwrap_or((StatusCode::OK, json!({})));
    (status, Json(reply)).into_response()
}

async fn models(Query(query): Query<Vec<(String, String)>>) -> Json<Value> {
    let token = query
        .iter()
        .find(|(key, _)| key == "pageToken")
        .map(|(_, value)| value.as_str());

    match token {
        None => Json(json!({
            "models": [{"name": "models/gemini-1.5-flash", "displayName": "Gemini 1.5 Flash",
                        "supportedGenerationMethods": ["generateContent", "countTokens"]}],
            "nextPageToken": "page-2"
        })),
        Some(_) => Json(json!({
            "models": [{"name": "models/embedding-001", "supportedGenerationMethods": ["embedContent"]}]
        })),
    }
}

async fn start(fake: Arc<FakeGemini>) -> String {
    let app = Router::new()
        .route("/v1beta/models/:target", post(generate))
        .route("/v1beta/models", get(models))
        .with_state(fake);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{address}/v1beta")
}

fn provider(base_url: &str) -> GeminiProvider {
    GeminiProvider::new("test-key")
        .with_base_url(base_url)
        .with_default_model("gemini-1.5-flash")
}

#[tokio::test]
async fn test_complete_sends_prompt_and_reads_text() {
    let fake = Arc::new(FakeGemini::default());
    *fake.reply.lock().unwrap() = Some((
        StatusCode::OK,
        json!({
            "candidates": [{"content": {"role": "model", "parts": [{"text": "Aquecimento: polichinelos"}]},
                            "finishReason": "STOP"}],
            "usageMetadata": {"promptTokenCount": 120, "candidatesTokenCount": 30, "totalTokenCount": 150}
        }),
    ));
    let base_url = start(Arc::clone(&fake)).await;

    let request = ChatRequest::new(vec![ChatMessage::user("Monte um treino")]).with_json_output();
    let response = provider(&base_url).complete(&request).await.unwrap();

    assert_eq!(response.content, "Aquecimento: polichinelos");
    assert_eq!(response.model, "gemini-1.5-flash");
    assert_eq!(response.finish_reason.as_deref(), Some("STOP"));

    assert_eq!(
        fake.last_path.lock().unwrap().as_deref(),
        Some("gemini-1.5-flash:generateContent")
    );
    assert_eq!(fake.last_key.lock().unwrap().as_deref(), Some("test-key"));
    let body = fake.last_body.lock().unwrap().clone().unwrap();
    assert_eq!(body["contents"][0]["parts"][0]["text"], "Monte um treino");
    assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
}

#[tokio::test]
async fn test_blank_output_fails_loudly() {
    let fake = Arc::new(FakeGemini::default());
    *fake.reply.lock().unwrap() = Some((
        StatusCode::OK,
        json!({"candidates": [{"content": {"parts": [{"text": ""}]}, "finishReason": "MAX_TOKENS"}]}),
    ));
    let base_url = start(fake).await;

    let request = ChatRequest::new(vec![ChatMessage::user("oi")]);
    let error = provider(&base_url).complete(&request).await.unwrap_err();

    assert_eq!(error.code, ErrorCode::ExternalServiceError);
    assert!(error.message.contains("empty response"));
}

#[tokio::test]
async fn test_api_errors_are_mapped() {
    let fake = Arc::new(FakeGemini::default());
    *fake.reply.lock().unwrap() = Some((
        StatusCode::BAD_REQUEST,
        json!({"error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}}),
    ));
    let base_url = start(Arc::clone(&fake)).await;
    let request = ChatRequest::new(vec![ChatMessage::user("oi")]);

    let error = provider(&base_url).complete(&request).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ExternalServiceError);
    assert!(error.message.contains("API key not valid"));
    assert!(!error.message.contains("test-key"));

    *fake.reply.lock().unwrap() = Some((
        StatusCode::TOO_MANY_REQUESTS,
        json!({"error": {"message": "Resource exhausted. Please retry in 2.5s."}}),
    ));
    let error = provider(&base_url).complete(&request).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ExternalRateLimited);
    assert!(error.message.contains("3 seconds"));
}

#[tokio::test]
async fn test_unreachable_api_is_service_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);

    let request = ChatRequest::new(vec![ChatMessage::user("oi")]);
    let error = provider(&format!("http://{address}/v1beta"))
        .complete(&request)
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::ExternalServiceError);
    assert!(error.message.contains("HTTP request failed"));
}

#[tokio::test]
async fn test_list_models_follows_pages() {
    let base_url = start(Arc::new(FakeGemini::default())).await;

    let models = provider(&base_url).list_models().await.unwrap();

    assert_eq!(models.len(), 2);
    assert_eq!(models[0].name, "models/gemini-1.5-flash");
    assert_eq!(models[0].display_name.as_deref(), Some("Gemini 1.5 Flash"));
    assert_eq!(models[1].supported_generation_methods, vec!["embedContent"]);
}
