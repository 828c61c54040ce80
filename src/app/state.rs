// ABOUTME: Application state split into per-feature slices with busy flags and notices
// ABOUTME: Holds everything a front end renders; mutated only by the controller
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Application state (the model the controller updates)

use crate::coach::VideoClip;
use crate::constants::forms;
use crate::content::{catalog, initial_stats, seed_drills};
use crate::errors::{AppError, ErrorCode};
use crate::models::{
    ChatMessage, Difficulty, Drill, Language, TacticalScenario, TrainingPlan, UserStats,
    VideoAnalysisResult, View,
};

/// Failure surfaced on a slice after a request went wrong
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Error category
    pub code: ErrorCode,
    /// Detail text
    pub message: String,
}

impl From<&AppError> for Notice {
    fn from(error: &AppError) -> Self {
        Self {
            code: error.code,
            message: error.message.clone(),
        }
    }
}

/// Drill library and the custom-drill form
#[derive(Debug, Clone)]
pub struct DrillsState {
    /// Library, newest first
    pub drills: Vec<Drill>,
    /// Focus text typed into the form
    pub prompt: String,
    /// Level chosen in the form; plans use it too
    pub level: Difficulty,
    /// Whether the custom-drill form is shown
    pub form_open: bool,
    /// Request in flight
    pub generating: bool,
    /// Last failure
    pub notice: Option<Notice>,
}

/// Active weekly plan and the plan form
#[derive(Debug, Clone)]
pub struct PlanState {
    /// Plan being followed
    pub active: Option<TrainingPlan>,
    /// Goal text
    pub goal: String,
    /// Availability text
    pub days: String,
    /// Whether the plan form is shown
    pub form_open: bool,
    /// Request in flight
    pub generating: bool,
    /// Last failure
    pub notice: Option<Notice>,
}

impl Default for PlanState {
    fn default() -> Self {
        Self {
            active: None,
            goal: forms::DEFAULT_PLAN_GOAL.to_owned(),
            days: forms::DEFAULT_PLAN_DAYS.to_owned(),
            form_open: false,
            generating: false,
            notice: None,
        }
    }
}

/// Selected clip and its analysis
#[derive(Debug, Clone, Default)]
pub struct VideoState {
    /// Clip awaiting analysis
    pub clip: Option<VideoClip>,
    /// Result for the current clip
    pub result: Option<VideoAnalysisResult>,
    /// Request in flight
    pub analyzing: bool,
    /// Last failure
    pub notice: Option<Notice>,
}

/// Decision simulator
#[derive(Debug, Clone, Default)]
pub struct TacticsState {
    /// Scenario on screen
    pub scenario: Option<TacticalScenario>,
    /// Option the player picked
    pub selected_option: Option<String>,
    /// Coach feedback, or the loading text while it is pending
    pub feedback: Option<String>,
    /// Scenario request in flight
    pub loading_scenario: bool,
    /// Evaluation request in flight
    pub evaluating: bool,
    /// Last failure
    pub notice: Option<Notice>,
}

impl TacticsState {
    /// Options are locked once a choice is made
    #[must_use]
    pub const fn options_locked(&self) -> bool {
        self.selected_option.is_some()
    }
}

/// Coach chat transcript
#[derive(Debug, Clone, Default)]
pub struct ChatState {
    /// Append-only transcript
    pub messages: Vec<ChatMessage>,
    /// Reply in progress
    pub typing: bool,
    /// Last failure
    pub notice: Option<Notice>,
}

impl ChatState {
    /// Transcript holding only the localized welcome message
    #[must_use]
    pub fn welcome(language: Language) -> Self {
        Self {
            messages: vec![ChatMessage::model(catalog(language).welcome)],
            ..Self::default()
        }
    }
}

/// Complete application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Screen in front
    pub view: View,
    /// Dashboard statistics
    pub stats: UserStats,
    /// Drills slice
    pub drills: DrillsState,
    /// Plan slice
    pub plan: PlanState,
    /// Video slice
    pub video: VideoState,
    /// Tactics slice
    pub tactics: TacticsState,
    /// Chat slice
    pub chat: ChatState,
}

impl AppState {
    /// Fresh state seeded for `language`
    #[must_use]
    pub fn new(language: Language) -> Self {
        Self {
            view: View::default(),
            stats: initial_stats(),
            drills: DrillsState {
                drills: seed_drills(language),
                prompt: String::new(),
                level: Difficulty::default(),
                form_open: false,
                generating: false,
                notice: None,
            },
            plan: PlanState::default(),
            video: VideoState::default(),
            tactics: TacticsState::default(),
            chat: ChatState::welcome(language),
        }
    }

    /// Reset the language-bound content: transcript and drill library
    pub fn relocalize(&mut self, language: Language) {
        self.chat = ChatState::welcome(language);
        self.drills.drills = seed_drills(language);
    }
}
