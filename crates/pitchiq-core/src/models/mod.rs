// ABOUTME: Domain models for the coaching companion (drills, plans, chat, tactics, analysis)
// ABOUTME: Re-exports the trusted value records exchanged between client, controller and views
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Trusted, immutable value records. Anything coming back from the generative-model
//! service is decoded and validated into these types at the client boundary; nothing
//! in this module parses untrusted payloads.
//!
//! - `Drill`, `DrillCategory`, `Difficulty`: single training exercises
//! - `TrainingPlan`, `TrainingDay`: a generated weekly schedule
//! - `ChatMessage`, `ChatRole`: coach conversation transcript entries
//! - `TacticalScenario`, `ScenarioOption`: decision simulator content
//! - `VideoAnalysisResult`, `ScoreBand`: technique analysis of one clip
//! - `UserStats`: seed dashboard statistics
//! - `Language`, `Theme`, `View`: session settings

mod analysis;
mod chat;
mod drill;
mod plan;
mod settings;
mod stats;
mod tactics;

pub use analysis::{ScoreBand, VideoAnalysisResult, HIGH_SCORE_THRESHOLD};
pub use chat::{ChatMessage, ChatRole};
pub use drill::{Difficulty, Drill, DrillCategory};
pub use plan::{TrainingDay, TrainingPlan};
pub use settings::{Language, Theme, View};
pub use stats::UserStats;
pub use tactics::{ScenarioOption, TacticalScenario};
