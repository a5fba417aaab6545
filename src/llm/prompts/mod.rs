// ABOUTME: Workout plan prompt templates loaded at compile time
// ABOUTME: Renders a profile, optional exercise shortlist and output rules into prompt text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino API Contributors

//! # Plan Prompts
//!
//! Prompts are loaded at compile time from markdown files for easy
//! maintenance and rendered by placeholder substitution.

use std::fmt::Write;

use serde_json::Value;
use treino_core::models::{Exercise, Profile};

use crate::config::PlanFormat;

/// Persona and safety instruction, sent as the system instruction when the
/// provider supports one
pub const PLAN_PERSONA: &str = include_str!("persona.md");

/// Main request template with profile placeholders
pub const PLAN_REQUEST_TEMPLATE: &str = include_str!("plan_request.md");

/// Allowed-exercises section, rendered only when a shortlist exists
pub const SHORTLIST_TEMPLATE: &str = include_str!("shortlist.md");

/// Formatting rules for free-text plans
pub const TEXT_FORMAT_RULES: &str = include_str!("format_text.md");

/// Formatting rules and schema for JSON plans
pub const JSON_FORMAT_RULES: &str = include_str!("format_json.md");

/// Shown for absent optional fields
const NOT_INFORMED: &str = "não informado";

/// Build the request part of the prompt for one plan
///
/// `shortlist` is `None` when exercises are not restricted. The result is
/// deterministic for the same inputs and never contains [`PLAN_PERSONA`].
#[must_use]
pub fn build_plan_prompt(
    profile: &Profile,
    shortlist: Option<&[&Exercise]>,
    format: PlanFormat,
) -> String {
    let goals = if profile.goals.is_empty() {
        NOT_INFORMED.to_owned()
    } else {
        profile.goals.as_slice().join(", ")
    };

    let exercises = shortlist.map_or_else(String::new, |exercises| {
        render_template(SHORTLIST_TEMPLATE, &[("lista", render_shortlist(exercises).as_str())])
    });

    let rules = match format {
        PlanFormat::Text => TEXT_FORMAT_RULES,
        PlanFormat::Json => JSON_FORMAT_RULES,
    };

    let age = profile.age.to_string();
    let height = format!("{:.2}", profile.height);
    let weight = format!("{:.1}", profile.weight);
    let lifestyle = render_lifestyle(profile);

    render_template(
        PLAN_REQUEST_TEMPLATE,
        &[
            ("nome", profile.name.trim()),
            ("idade", age.as_str()),
            ("altura", height.as_str()),
            ("peso", weight.as_str()),
            ("nivel", profile.level.trim()),
            ("objetivo", goals.as_str()),
            ("estilo_vida", lifestyle.as_str()),
            ("exercicios", exercises.as_str()),
            ("formato", rules),
        ],
    )
}

/// Fill `{{key}}` placeholders in a single pass over `template`
///
/// Substituted values are copied verbatim and never scanned again, so profile
/// text containing `{{...}}` reaches the model unchanged. Unknown keys are
/// left in place.
fn render_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 2..];
        let Some(close) = after_open.find("}}") else {
            rest = &rest[open..];
            break;
        };

        let key = &after_open[..close];
        match values.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[open..open + 2 + close + 2]),
        }
        rest = &after_open[close + 2..];
    }

    out.push_str(rest);
    out
}

/// One `- key: value` line per lifestyle entry, in key order
fn render_lifestyle(profile: &Profile) -> String {
    if profile.lifestyle.is_empty() {
        return format!("- {NOT_INFORMED}");
    }

    let mut out = String::new();
    for (key, value) in &profile.lifestyle {
        if !out.is_empty() {
            out.push('\n');
        }
        let _ = write!(out, "- {key}: {}", render_value(value));
    }
    out
}

/// Scalars are printed plain, anything else as compact JSON
fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => NOT_INFORMED.to_owned(),
        Value::Bool(_) | Value::Number(_) | Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

fn render_shortlist(exercises: &[&Exercise]) -> String {
    let mut out = String::new();
    for exercise in exercises {
        if !out.is_empty() {
            out.push('\n');
        }
        let _ = write!(
            out,
            "- `{}`: {} ({})",
            exercise.id, exercise.name, exercise.group
        );
    }
    out
}
