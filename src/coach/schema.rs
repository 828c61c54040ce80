// ABOUTME: Response schema descriptors sent with schema-constrained coaching requests
// ABOUTME: Uses the service's OpenAPI-subset dialect with uppercase type names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Response schemas
//!
//! These constrain generation on the service side. The local decode in
//! [`super::decode`] still validates every payload.

use serde_json::{json, Value};

use crate::models::{Difficulty, DrillCategory};

fn enum_values<const N: usize>(values: [&'static str; N]) -> Value {
    Value::Array(values.into_iter().map(Value::from).collect())
}

/// Schema for a single drill
#[must_use]
pub fn drill() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "category": {
                "type": "STRING",
                "enum": enum_values(DrillCategory::ALL.map(|c| c.as_str())),
            },
            "difficulty": {
                "type": "STRING",
                "enum": enum_values(Difficulty::ALL.map(|d| d.as_str())),
            },
            "duration": { "type": "STRING" },
            "description": { "type": "STRING" },
            "equipment": { "type": "ARRAY", "items": { "type": "STRING" } },
            "reps": { "type": "STRING" },
        },
        "required": ["title", "category", "difficulty", "duration", "description", "equipment", "reps"],
    })
}

/// Schema for a list of drills
#[must_use]
pub fn drill_list() -> Value {
    json!({ "type": "ARRAY", "items": drill() })
}

/// Schema for a weekly training plan
#[must_use]
pub fn training_plan() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "level": { "type": "STRING" },
            "weeklySchedule": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "dayName": { "type": "STRING" },
                        "focus": { "type": "STRING" },
                        "drills": drill_list(),
                    },
                    "required": ["dayName", "focus", "drills"],
                },
            },
        },
        "required": ["title", "level", "weeklySchedule"],
    })
}

/// Schema for a tactical scenario
#[must_use]
pub fn tactical_scenario() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "situation": { "type": "STRING" },
            "formation": { "type": "STRING" },
            "options": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "id": { "type": "STRING" },
                        "text": { "type": "STRING" },
                    },
                    "required": ["id", "text"],
                },
            },
        },
        "required": ["title", "situation", "formation", "options"],
    })
}

/// Schema for a video technique analysis
#[must_use]
pub fn video_analysis() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "actionType": { "type": "STRING" },
            "techniqueScore": { "type": "INTEGER" },
            "breakdown": { "type": "STRING" },
            "corrections": { "type": "STRING" },
            "drillRecommendation": { "type": "STRING" },
        },
        "required": ["actionType", "techniqueScore", "breakdown", "corrections", "drillRecommendation"],
    })
}
