// ABOUTME: Main library entry point for the PitchIQ football coaching companion
// ABOUTME: Exposes the model provider layer, coaching client and application controller
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # PitchIQ
//!
//! A football coaching companion that delegates content generation to a hosted
//! generative model (Google Gemini).
//!
//! ## Features
//!
//! - **Custom drills**: three drills for any focus area and level
//! - **Weekly plans**: a one-week schedule with drills and reps
//! - **Video analysis**: technique score, breakdown and corrections for a clip
//! - **Tactics**: decision scenarios with coach feedback on the chosen option
//! - **Coach chat**: streamed replies from a persona bound to the active language
//!
//! ## Architecture
//!
//! - **`llm`**: provider trait, Gemini implementation, SSE parsing and prompts
//! - **`coach`**: the client operations, response schemas and validating decode
//! - **`app`**: controller, per-feature state slices and the session context
//! - **`errors`, `models`, `content`, `constants`**: re-exported from `pitchiq-core`
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pitchiq::app::AppController;
//! use pitchiq::coach::CoachClient;
//! use pitchiq::config::CoachConfig;
//! use pitchiq::errors::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = CoachConfig::from_env()?;
//!     let mut app = AppController::new(CoachClient::from_config(&config), config.language);
//!
//!     app.set_drill_prompt("first touch under pressure");
//!     app.generate_drills().await?;
//!     println!("{} drills in the library", app.state().drills.drills.len());
//!     Ok(())
//! }
//! ```

/// Application controller, state and context
pub mod app;

/// Coaching client, chat sessions and payload decoding
pub mod coach;

/// Environment configuration
pub mod config;

/// Generative-model provider abstraction
pub mod llm;

/// Structured logging setup
pub mod logging;

pub use pitchiq_core::{constants, content, errors, models};
