// ABOUTME: Prompt texts for every coaching request sent to the generative model
// ABOUTME: Loads the coach persona at compile time and formats per-request instructions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Prompts
//!
//! The coach persona lives in a markdown file loaded at compile time. Every
//! per-request prompt ends with a "Respond in ..." instruction naming the
//! active language.

use crate::models::Language;

/// Coach persona template; `{language}` is substituted per session
pub const COACH_PERSONA_TEMPLATE: &str = include_str!("coach_persona.md");

/// System instruction for a coach chat in `language`
#[must_use]
pub fn coach_system_instruction(language: Language) -> String {
    COACH_PERSONA_TEMPLATE
        .trim_end()
        .replace("{language}", language.persona_language())
}

fn respond_in(language: Language) -> String {
    format!("Respond in {}.", language.response_language())
}

/// Prompt for custom drill generation
#[must_use]
pub fn drills_prompt(focus: &str, level: &str, count: usize, language: Language) -> String {
    format!(
        "Generate {count} specific football training drills focusing on: \"{focus}\". \
         The user level is: {level}. {}",
        respond_in(language)
    )
}

/// Prompt for a weekly training plan
#[must_use]
pub fn plan_prompt(level: &str, goal: &str, days_per_week: &str, language: Language) -> String {
    format!(
        "Create a 1-week football training plan for a {level} player. \
         Primary Goal: {goal}. Availability: {days_per_week}. \
         Includes specific drills with sets/reps. {}",
        respond_in(language)
    )
}

/// Prompt sent alongside a video clip
#[must_use]
pub fn video_analysis_prompt(language: Language) -> String {
    format!(
        "Analyze the football technique shown in this video. \
         Identify the action (Shot, Pass, Dribble). \
         Provide a technical breakdown, key corrections, and a score out of 100. {}",
        respond_in(language)
    )
}

/// Prompt for a new tactical scenario
#[must_use]
pub fn scenario_prompt(option_count: usize, language: Language) -> String {
    format!(
        "Generate a challenging football tactical scenario for a player \
         (e.g., 3v2 counter attack, playing out from back under pressure). \
         Provide the situation description and {option_count} distinct decision options. {}",
        respond_in(language)
    )
}

/// Prompt asking the coach to judge a tactical decision
#[must_use]
pub fn decision_prompt(situation: &str, decision: &str, language: Language) -> String {
    format!(
        "Scenario: {situation}. Player Decision: {decision}. \
         Analyze this decision. Is it the best option? What are the pros/cons? \
         What would a pro player do? Keep it concise (under 100 words). {}",
        respond_in(language)
    )
}
