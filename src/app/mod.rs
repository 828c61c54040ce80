// ABOUTME: Application layer: controller, state slices, session context and dashboard
// ABOUTME: Turns user intents into coach client calls and keeps the renderable state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Session context (language, theme, chat session)
pub mod context;
/// Action dispatch
pub mod controller;
/// Dashboard summary
pub mod dashboard;
/// Renderable state
pub mod state;

pub use context::AppContext;
pub use controller::AppController;
pub use dashboard::{AttributeScore, DashboardSummary};
pub use state::{AppState, ChatState, DrillsState, Notice, PlanState, TacticsState, VideoState};
