// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Model defaults, environment variable names and identifier prefixes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants grouped by domain.

/// Generative-model service defaults
pub mod model {
    /// Default Gemini model for every feature
    pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
    /// Gemini REST base URL
    pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
    /// Coach chat sampling temperature
    pub const CHAT_TEMPERATURE: f32 = 0.7;
    /// Drill generation sampling temperature
    pub const DRILL_TEMPERATURE: f32 = 0.5;
    /// Drills requested per generation
    pub const DRILLS_PER_REQUEST: usize = 3;
    /// Options requested per tactical scenario
    pub const SCENARIO_OPTIONS: usize = 3;
    /// Upper bound on a technique score
    pub const MAX_TECHNIQUE_SCORE: i64 = 100;
}

/// Environment variable names
pub mod env_config {
    /// Gemini API key
    pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
    /// Generic API key fallback
    pub const API_KEY: &str = "API_KEY";
    /// Model override
    pub const MODEL: &str = "PITCHIQ_MODEL";
    /// Base URL override
    pub const API_BASE_URL: &str = "PITCHIQ_API_BASE_URL";
    /// Starting language
    pub const LANGUAGE: &str = "PITCHIQ_LANGUAGE";
    /// Chat temperature override
    pub const CHAT_TEMPERATURE: &str = "PITCHIQ_CHAT_TEMPERATURE";
    /// Drill temperature override
    pub const DRILL_TEMPERATURE: &str = "PITCHIQ_DRILL_TEMPERATURE";
}

/// Form defaults
pub mod forms {
    /// Default plan goal
    pub const DEFAULT_PLAN_GOAL: &str = "Technique & Ball Control";
    /// Default plan availability
    pub const DEFAULT_PLAN_DAYS: &str = "3 days/week";
}

/// Identifier prefixes for locally assigned ids
pub mod ids {
    /// Generated library drills
    pub const GENERATED_DRILL: &str = "gen";
    /// Drills inside a generated plan
    pub const PLAN_DRILL: &str = "plan";
    /// Generated scenarios
    pub const SCENARIO: &str = "scenario";
    /// Options the model returned without an id
    pub const OPTION: &str = "opt";
}
