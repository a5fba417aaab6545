// ABOUTME: Workout plan generation service orchestrating selection, prompting and the model call
// ABOUTME: Validates structured plans against the shortlist when JSON output is configured
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino API Contributors

use std::sync::Arc;
use std::time::Instant;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};
use treino_core::models::{Exercise, ExerciseSummary, PlanOutput, Profile, StructuredPlan};

use crate::config::{PlanFormat, ServerConfig};
use crate::constants::messages;
use crate::errors::{AppError, AppResult};
use crate::llm::prompts::{build_plan_prompt, PLAN_PERSONA};
use crate::llm::{ChatMessage, ChatRequest, LlmProvider};
use crate::selection::ExerciseSelector;

/// Service name used when the model output is rejected
const MODEL_SERVICE: &str = "Gemini";

/// Plan returned to the client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedPlan {
    /// Model output, verbatim text or validated structure
    pub plan: PlanOutput,
    /// Shortlist offered to the model; absent when exercises are unrestricted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_exercises: Option<Vec<ExerciseSummary>>,
}

/// Everything needed for the model call, computed before any I/O
#[derive(Debug, Clone)]
pub struct PreparedPlan {
    /// Rendered prompt
    pub prompt: String,
    /// Shortlist, `None` when the strategy does not restrict exercises
    pub shortlist: Option<Vec<&'static Exercise>>,
}

/// Orchestrates selection, prompt construction and the model call
#[derive(Clone)]
pub struct PlanService {
    provider: Option<Arc<dyn LlmProvider>>,
    selector: ExerciseSelector,
    format: PlanFormat,
    model: Option<String>,
    temperature: Option<f32>,
}

impl PlanService {
    /// Create a service from configuration and an optional provider
    ///
    /// A missing provider is not an error here; every generation fails instead.
    #[must_use]
    pub fn new(config: &ServerConfig, provider: Option<Arc<dyn LlmProvider>>) -> Self {
        Self {
            provider,
            selector: ExerciseSelector::new(config.selection),
            format: config.plan_format,
            model: Some(config.gemini.model.clone()),
            temperature: config.gemini.temperature,
        }
    }

    /// Select exercises and render the prompt
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the selector produced an empty shortlist.
    pub fn prepare<R: Rng + ?Sized>(&self, profile: &Profile, rng: &mut R) -> AppResult<PreparedPlan> {
        let level = profile.fitness_level();
        let goals = profile.goals.recognized();
        let shortlist = self.selector.select(level, &goals, rng);

        if shortlist.as_ref().is_some_and(Vec::is_empty) {
            return Err(AppError::invalid_input(format!(
                "{} for level '{}'",
                messages::NO_EXERCISE_FOUND,
                profile.level.trim()
            )));
        }

        debug!(
            strategy = %self.selector.strategy(),
            ?level,
            ?goals,
            shortlist_size = shortlist.as_ref().map_or(0, Vec::len),
            "Selected exercises"
        );

        let prompt = build_plan_prompt(profile, shortlist.as_deref(), self.format);
        Ok(PreparedPlan { prompt, shortlist })
    }

    /// Generate a plan for a validated profile
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` without a provider, `InvalidInput` for an empty
    /// shortlist, and `ExternalServiceError` when the model call fails or its
    /// output is rejected.
    #[instrument(skip(self, profile), fields(strategy = %self.selector.strategy(), format = %self.format))]
    pub async fn generate(&self, profile: &Profile) -> AppResult<GeneratedPlan> {
        let provider = self.provider()?;
        let prepared = self.prepare(profile, &mut rand::thread_rng())?;
        self.complete(provider.as_ref(), prepared).await
    }

    /// Call the model with a prepared prompt and shape its output
    ///
    /// # Errors
    ///
    /// Returns `ExternalServiceError` when the model call fails or its output
    /// is rejected.
    pub async fn complete(
        &self,
        provider: &dyn LlmProvider,
        prepared: PreparedPlan,
    ) -> AppResult<GeneratedPlan> {
        let persona = PLAN_PERSONA.trim();
        let messages = if provider.capabilities().supports_system_messages() {
            vec![ChatMessage::system(persona), ChatMessage::user(prepared.prompt)]
        } else {
            vec![ChatMessage::user(format!("{persona}\n\n{}", prepared.prompt))]
        };

        let mut request = ChatRequest::new(messages).with_temperature(self.temperature);
        if let Some(model) = &self.model {
            request = request.with_model(model.clone());
        }
        if self.format == PlanFormat::Json && provider.capabilities().supports_json_mode() {
            request = request.with_json_output();
        }

        let started = Instant::now();
        let response = provider.complete(&request).await?;
        info!(
            provider = provider.name(),
            model = %response.model,
            latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "Plan generated"
        );

        let plan = match self.format {
            PlanFormat::Text => PlanOutput::Text(response.content),
            PlanFormat::Json => PlanOutput::Structured(parse_structured_plan(
                &response.content,
                prepared.shortlist.as_deref(),
            )?),
        };

        Ok(GeneratedPlan {
            plan,
            suggested_exercises: prepared
                .shortlist
                .map(|exercises| exercises.iter().map(|exercise| exercise.summary()).collect()),
        })
    }

    fn provider(&self) -> AppResult<Arc<dyn LlmProvider>> {
        self.provider
            .clone()
            .ok_or_else(|| AppError::config_missing(messages::MISSING_API_KEY))
    }
}

/// Parse model output as a structured plan
///
/// Markdown code fences around the JSON are tolerated. With a shortlist,
/// every exercise id must belong to it.
///
/// # Errors
///
/// Returns `ExternalServiceError` for unparsable output, an empty plan or ids
/// outside the shortlist.
pub fn parse_structured_plan(
    raw: &str,
    shortlist: Option<&[&Exercise]>,
) -> AppResult<StructuredPlan> {
    let plan: StructuredPlan = serde_json::from_str(strip_code_fence(raw)).map_err(|e| {
        AppError::external_service(MODEL_SERVICE, format!("model returned an invalid plan: {e}"))
    })?;

    if plan.exercises.is_empty() {
        return Err(AppError::external_service(
            MODEL_SERVICE,
            "model returned a plan without exercises",
        ));
    }

    if let Some(shortlist) = shortlist {
        let allowed: Vec<&str> = shortlist.iter().map(|exercise| exercise.id).collect();
        let unknown = plan.unknown_ids(&allowed);
        if !unknown.is_empty() {
            return Err(AppError::external_service(
                MODEL_SERVICE,
                format!(
                    "model prescribed exercises outside the shortlist: {}",
                    unknown.join(", ")
                ),
            ));
        }
    }

    Ok(plan)
}

/// Remove a surrounding Markdown code fence, with or without a language tag
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(body) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = body.strip_suffix("```").unwrap_or(body);
    // Drop the info string ("json") up to the line break or the document itself
    let start = body.find(['\n', '{', '[']).unwrap_or(0);
    body[start..].trim()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use treino_core::catalog;
    use treino_core::errors::ErrorCode;

    use super::*;

    fn shortlist() -> Vec<&'static Exercise> {
        vec![
            catalog::find("agachamento_livre").unwrap(),
            catalog::find("prancha").unwrap(),
        ]
    }

    #[test]
    fn test_strip_code_fence() {
        assert_eq!(strip_code_fence("```json\n{\"a\": 1}\n```"), "{\"a\": 1}");
        assert_eq!(strip_code_fence("```\n{\"a\": 1}\n```"), "{\"a\": 1}");
        assert_eq!(strip_code_fence("  {\"a\": 1} "), "{\"a\": 1}");
        assert_eq!(strip_code_fence("```json{\"a\": 1}```"), "{\"a\": 1}");
        assert_eq!(strip_code_fence("```JSON [1]```"), "[1]");
    }

    #[test]
    fn test_parse_structured_plan_single_line_fence_and_numeric_reps() {
        let raw = r#"```json{"exercises": [{"id": "prancha", "sets": 3, "reps": 12, "rest_seconds": 30}]}```"#;
        let plan = parse_structured_plan(raw, Some(shortlist().as_slice())).unwrap();

        assert_eq!(plan.exercises[0].id, "prancha");
        assert_eq!(plan.exercises[0].reps, "12");
    }

    #[test]
    fn test_parse_structured_plan_accepts_shortlisted_ids() {
        let raw = r#"```json
{"exercises": [{"id": "agachamento_livre", "sets": 3, "reps": "12", "rest_seconds": 60}]}
```"#;
        let plan = parse_structured_plan(raw, Some(shortlist().as_slice())).unwrap();
        assert_eq!(plan.exercises[0].id, "agachamento_livre");
    }

    #[test]
    fn test_parse_structured_plan_rejects_unknown_ids() {
        let raw = r#"{"exercises": [
            {"id": "prancha", "sets": 3, "reps": "30s", "rest_seconds": 30},
            {"id": "burpee", "sets": 3, "reps": "10", "rest_seconds": 30}
        ]}"#;
        let error = parse_structured_plan(raw, Some(shortlist().as_slice())).unwrap_err();

        assert_eq!(error.code, ErrorCode::ExternalServiceError);
        assert!(error.message.contains("burpee"));
        assert!(!error.message.contains("prancha,"));
    }

    #[test]
    fn test_parse_structured_plan_without_shortlist_skips_id_check() {
        let raw = r#"{"exercises": [{"id": "burpee", "sets": 3, "reps": "10", "rest_seconds": 30}]}"#;
        assert!(parse_structured_plan(raw, None).is_ok());
    }

    #[test]
    fn test_parse_structured_plan_rejects_invalid_or_empty_output() {
        let error = parse_structured_plan("Aquecimento: 5 minutos", None).unwrap_err();
        assert_eq!(error.code, ErrorCode::ExternalServiceError);

        let error = parse_structured_plan(r#"{"exercises": []}"#, None).unwrap_err();
        assert!(error.message.contains("without exercises"));
    }
}
