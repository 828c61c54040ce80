// ABOUTME: Validating decode of untrusted model payloads into trusted domain records
// ABOUTME: Wire structs mirror the response schemas; validation assigns fresh local ids
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Payload Decoding
//!
//! Model output is parsed into private wire structs first, then checked field by
//! field and converted into [`crate::models`] types. A payload that fails any check
//! is rejected as a whole with `ErrorCode::SchemaMismatch`; nothing partially
//! decoded leaves this module.

use std::collections::HashSet;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use uuid::Uuid;

use crate::constants::{ids, model::MAX_TECHNIQUE_SCORE};
use crate::errors::{AppError, AppResult};
use crate::models::{
    Drill, ScenarioOption, TacticalScenario, TrainingDay, TrainingPlan, VideoAnalysisResult,
};

/// `<prefix>-<uuid v4>`
#[must_use]
pub fn fresh_id(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4())
}

fn parse_payload<T: DeserializeOwned>(text: &str, what: &str) -> AppResult<T> {
    serde_json::from_str(text.trim())
        .map_err(|e| AppError::schema_mismatch(format!("{what}: {e}")).with_source(e))
}

/// Reject all-blank text; anything else is kept exactly as sent
fn required(value: String, field: &str) -> AppResult<String> {
    if value.trim().is_empty() {
        return Err(AppError::schema_mismatch(format!("`{field}` is empty")));
    }
    Ok(value)
}

// ============================================================================
// Wire Types
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireDrill {
    title: String,
    category: String,
    difficulty: String,
    duration: String,
    description: String,
    equipment: Vec<String>,
    #[serde(default)]
    reps: Option<String>,
}

impl WireDrill {
    fn validate(self, id: String) -> AppResult<Drill> {
        Ok(Drill {
            id,
            title: required(self.title, "title")?,
            category: self.category.trim().parse()?,
            difficulty: self.difficulty.trim().parse()?,
            duration: required(self.duration, "duration")?,
            description: required(self.description, "description")?,
            equipment: self.equipment,
            reps: self.reps,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireTrainingDay {
    day_name: String,
    focus: String,
    drills: Vec<WireDrill>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireTrainingPlan {
    title: String,
    level: String,
    weekly_schedule: Vec<WireTrainingDay>,
}

#[derive(Debug, Deserialize)]
struct WireOption {
    #[serde(default)]
    id: String,
    text: String,
}

#[derive(Debug, Deserialize)]
struct WireScenario {
    title: String,
    situation: String,
    formation: String,
    options: Vec<WireOption>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireVideoAnalysis {
    action_type: String,
    technique_score: f64,
    breakdown: String,
    corrections: String,
    drill_recommendation: String,
}

// ============================================================================
// Decoders
// ============================================================================

/// Decode a drill list; each drill gets a fresh `gen-` id
///
/// # Errors
///
/// Returns `SchemaMismatch` if the text is not a conforming drill array.
pub fn decode_drills(text: &str) -> AppResult<Vec<Drill>> {
    let wire: Vec<WireDrill> = parse_payload(text, "drill list")?;
    wire.into_iter()
        .map(|drill| drill.validate(fresh_id(ids::GENERATED_DRILL)))
        .collect()
}

/// Decode a training plan; every scheduled drill gets a fresh `plan-` id
///
/// # Errors
///
/// Returns `SchemaMismatch` if the text is not a conforming plan or the schedule is empty.
pub fn decode_training_plan(text: &str) -> AppResult<TrainingPlan> {
    let wire: WireTrainingPlan = parse_payload(text, "training plan")?;
    if wire.weekly_schedule.is_empty() {
        return Err(AppError::schema_mismatch("`weeklySchedule` is empty"));
    }

    let weekly_schedule = wire
        .weekly_schedule
        .into_iter()
        .map(|day| {
            Ok(TrainingDay {
                day_name: required(day.day_name, "dayName")?,
                focus: required(day.focus, "focus")?,
                drills: day
                    .drills
                    .into_iter()
                    .map(|drill| drill.validate(fresh_id(ids::PLAN_DRILL)))
                    .collect::<AppResult<_>>()?,
            })
        })
        .collect::<AppResult<_>>()?;

    Ok(TrainingPlan {
        title: required(wire.title, "title")?,
        level: required(wire.level, "level")?,
        weekly_schedule,
    })
}

/// Decode a tactical scenario with a fresh `scenario-` id
///
/// Option ids the model left blank or repeated are replaced with the first free
/// `opt-<n>`, counting from the option's position.
///
/// # Errors
///
/// Returns `SchemaMismatch` if the text is not a conforming scenario or has no options.
pub fn decode_tactical_scenario(text: &str) -> AppResult<TacticalScenario> {
    let wire: WireScenario = parse_payload(text, "tactical scenario")?;
    if wire.options.is_empty() {
        return Err(AppError::schema_mismatch("`options` is empty"));
    }

    // Ids the model supplied win over generated ones
    let mut seen: HashSet<String> = wire
        .options
        .iter()
        .filter(|o| !o.id.trim().is_empty())
        .map(|o| o.id.clone())
        .collect();
    let mut kept = HashSet::new();
    let options = wire
        .options
        .into_iter()
        .enumerate()
        .map(|(index, option)| {
            let id = if option.id.trim().is_empty() || !kept.insert(option.id.clone()) {
                let mut n = index + 1;
                let mut candidate = format!("{}-{n}", ids::OPTION);
                while seen.contains(&candidate) {
                    n += 1;
                    candidate = format!("{}-{n}", ids::OPTION);
                }
                seen.insert(candidate.clone());
                candidate
            } else {
                option.id
            };
            Ok(ScenarioOption {
                id,
                text: required(option.text, "options.text")?,
            })
        })
        .collect::<AppResult<_>>()?;

    Ok(TacticalScenario {
        id: fresh_id(ids::SCENARIO),
        title: required(wire.title, "title")?,
        situation: required(wire.situation, "situation")?,
        formation: required(wire.formation, "formation")?,
        options,
    })
}

/// Decode a video analysis
///
/// # Errors
///
/// Returns `SchemaMismatch` if the text does not conform or the score is outside 0-100.
pub fn decode_video_analysis(text: &str) -> AppResult<VideoAnalysisResult> {
    let wire: WireVideoAnalysis = parse_payload(text, "video analysis")?;

    let score = wire.technique_score;
    if !(0.0..=MAX_TECHNIQUE_SCORE as f64).contains(&score) {
        return Err(AppError::schema_mismatch(format!(
            "`techniqueScore` {score} is outside 0-{MAX_TECHNIQUE_SCORE}"
        )));
    }

    Ok(VideoAnalysisResult {
        action_type: required(wire.action_type, "actionType")?,
        technique_score: score.round() as u8,
        breakdown: required(wire.breakdown, "breakdown")?,
        corrections: required(wire.corrections, "corrections")?,
        drill_recommendation: required(wire.drill_recommendation, "drillRecommendation")?,
    })
}
