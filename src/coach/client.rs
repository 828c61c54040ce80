// ABOUTME: Coaching client issuing every generative-model request the app needs
// ABOUTME: Strict try_* operations return errors; plain variants log and degrade
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Coach Client
//!
//! Each generation operation comes in two forms:
//!
//! - `try_*` returns `AppResult<T>` so callers can inspect the failure
//! - the plain form logs the failure and degrades (empty list, `None`, or a
//!   localized fallback text)
//!
//! There are no retries and no local timeout.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::chat::CoachChat;
use super::decode;
use super::media::VideoClip;
use super::schema;
use crate::config::CoachConfig;
use crate::constants::model::{
    CHAT_TEMPERATURE, DRILLS_PER_REQUEST, DRILL_TEMPERATURE, SCENARIO_OPTIONS,
};
use crate::content::catalog;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::llm::{prompts, GeminiProvider, GenerateRequest, LlmProvider, PromptMessage};
use crate::models::{Drill, Language, TacticalScenario, TrainingPlan, VideoAnalysisResult};

/// One schema-constrained request
struct StructuredCall<'a> {
    operation: &'static str,
    prompt: String,
    schema: Value,
    temperature: Option<f32>,
    clip: Option<&'a VideoClip>,
}

/// Client for every coaching request
#[derive(Clone)]
pub struct CoachClient {
    provider: Arc<dyn LlmProvider>,
    model: String,
    chat_temperature: f32,
    drill_temperature: f32,
}

impl CoachClient {
    /// Wrap a provider using its default model and the standard temperatures
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        let model = provider.default_model().to_owned();
        Self {
            provider,
            model,
            chat_temperature: CHAT_TEMPERATURE,
            drill_temperature: DRILL_TEMPERATURE,
        }
    }

    /// Build a Gemini-backed client from configuration
    #[must_use]
    pub fn from_config(config: &CoachConfig) -> Self {
        let provider: Arc<dyn LlmProvider> = Arc::new(GeminiProvider::from_config(config));
        Self {
            provider,
            model: config.model.clone(),
            chat_temperature: config.chat_temperature,
            drill_temperature: config.drill_temperature,
        }
    }

    /// Override the sampling temperatures
    #[must_use]
    pub const fn with_temperatures(mut self, chat: f32, drills: f32) -> Self {
        self.chat_temperature = chat;
        self.drill_temperature = drills;
        self
    }

    /// The underlying provider
    #[must_use]
    pub fn provider(&self) -> &Arc<dyn LlmProvider> {
        &self.provider
    }

    /// Model used for every request
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send a schema-constrained request and return the raw JSON text
    async fn structured_text(&self, call: StructuredCall<'_>) -> AppResult<String> {
        let capabilities = self.provider.capabilities();
        if !capabilities.supports_json_mode() {
            return Err(AppError::unsupported(format!(
                "{} cannot produce schema-constrained output for {}",
                self.provider.display_name(),
                call.operation
            )));
        }

        let mut message = PromptMessage::user(call.prompt);
        if let Some(clip) = call.clip {
            if !capabilities.supports_vision() {
                return Err(AppError::unsupported(format!(
                    "{} cannot analyze video",
                    self.provider.display_name()
                )));
            }
            message = message.with_media(clip.to_inline_media());
        }

        let mut request = GenerateRequest::new(vec![message])
            .with_model(self.model.clone())
            .with_json_schema(call.schema);
        if let Some(temperature) = call.temperature {
            request = request.with_temperature(temperature);
        }

        let response = self.provider.generate(&request).await?;
        debug!(
            operation = call.operation,
            chars = response.content.len(),
            tokens = response.usage.map_or(0, |u| u.total_tokens),
            "Structured response received"
        );
        Ok(response.content)
    }

    // ========================================================================
    // Drills
    // ========================================================================

    /// Generate drills for a focus area
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank focus, otherwise any provider or decode error.
    #[instrument(skip(self), fields(model = %self.model))]
    pub async fn try_generate_custom_drills(
        &self,
        focus: &str,
        level: &str,
        language: Language,
    ) -> AppResult<Vec<Drill>> {
        let focus = focus.trim();
        if focus.is_empty() {
            return Err(AppError::invalid_input("drill focus is empty"));
        }

        let text = self
            .structured_text(StructuredCall {
                operation: "generate_custom_drills",
                prompt: prompts::drills_prompt(focus, level, DRILLS_PER_REQUEST, language),
                schema: schema::drill_list(),
                temperature: Some(self.drill_temperature),
                clip: None,
            })
            .await?;
        decode::decode_drills(&text)
    }

    /// Generate drills, degrading to an empty list on any failure
    pub async fn generate_custom_drills(
        &self,
        focus: &str,
        level: &str,
        language: Language,
    ) -> Vec<Drill> {
        self.try_generate_custom_drills(focus, level, language)
            .await
            .unwrap_or_else(|e| {
                warn!(error = %e, "Drill generation failed");
                Vec::new()
            })
    }

    // ========================================================================
    // Training Plan
    // ========================================================================

    /// Generate a one-week training plan
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank goal, otherwise any provider or decode error.
    #[instrument(skip(self), fields(model = %self.model))]
    pub async fn try_generate_training_plan(
        &self,
        level: &str,
        goal: &str,
        days_per_week: &str,
        language: Language,
    ) -> AppResult<TrainingPlan> {
        if goal.trim().is_empty() {
            return Err(AppError::invalid_input("plan goal is empty"));
        }

        let text = self
            .structured_text(StructuredCall {
                operation: "generate_training_plan",
                prompt: prompts::plan_prompt(level, goal.trim(), days_per_week, language),
                schema: schema::training_plan(),
                temperature: None,
                clip: None,
            })
            .await?;
        decode::decode_training_plan(&text)
    }

    /// Generate a training plan, degrading to `None`
    pub async fn generate_training_plan(
        &self,
        level: &str,
        goal: &str,
        days_per_week: &str,
        language: Language,
    ) -> Option<TrainingPlan> {
        self.try_generate_training_plan(level, goal, days_per_week, language)
            .await
            .map_err(|e| warn!(error = %e, "Training plan generation failed"))
            .ok()
    }

    // ========================================================================
    // Video Analysis
    // ========================================================================

    /// Analyze the technique shown in a clip
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedCapability` if the provider lacks vision, otherwise any
    /// provider or decode error.
    #[instrument(skip(self, clip), fields(model = %self.model, file = %clip.file_name, bytes = clip.size_bytes))]
    pub async fn try_analyze_video_technique(
        &self,
        clip: &VideoClip,
        language: Language,
    ) -> AppResult<VideoAnalysisResult> {
        let text = self
            .structured_text(StructuredCall {
                operation: "analyze_video_technique",
                prompt: prompts::video_analysis_prompt(language),
                schema: schema::video_analysis(),
                temperature: None,
                clip: Some(clip),
            })
            .await?;
        decode::decode_video_analysis(&text)
    }

    /// Analyze a clip, degrading to `None`
    pub async fn analyze_video_technique(
        &self,
        clip: &VideoClip,
        language: Language,
    ) -> Option<VideoAnalysisResult> {
        self.try_analyze_video_technique(clip, language)
            .await
            .map_err(|e| warn!(error = %e, "Video analysis failed"))
            .ok()
    }

    // ========================================================================
    // Tactics
    // ========================================================================

    /// Generate a tactical scenario with decision options
    ///
    /// # Errors
    ///
    /// Returns any provider or decode error.
    #[instrument(skip(self), fields(model = %self.model))]
    pub async fn try_generate_tactical_scenario(
        &self,
        language: Language,
    ) -> AppResult<TacticalScenario> {
        let text = self
            .structured_text(StructuredCall {
                operation: "generate_tactical_scenario",
                prompt: prompts::scenario_prompt(SCENARIO_OPTIONS, language),
                schema: schema::tactical_scenario(),
                temperature: None,
                clip: None,
            })
            .await?;
        decode::decode_tactical_scenario(&text)
    }

    /// Generate a tactical scenario, degrading to `None`
    pub async fn generate_tactical_scenario(&self, language: Language) -> Option<TacticalScenario> {
        self.try_generate_tactical_scenario(language)
            .await
            .map_err(|e| warn!(error = %e, "Tactical scenario generation failed"))
            .ok()
    }

    /// Ask the coach to evaluate a decision
    ///
    /// # Errors
    ///
    /// Returns `EmptyResponse` when the model answers without text, otherwise any
    /// provider error.
    #[instrument(skip(self, situation), fields(model = %self.model))]
    pub async fn try_evaluate_tactical_decision(
        &self,
        situation: &str,
        decision: &str,
        language: Language,
    ) -> AppResult<String> {
        let request = GenerateRequest::new(vec![PromptMessage::user(prompts::decision_prompt(
            situation, decision, language,
        ))])
        .with_model(self.model.clone());

        let response = self.provider.generate(&request).await?;
        let feedback = response.content.trim();
        if feedback.is_empty() {
            return Err(AppError::empty_response("decision evaluation"));
        }
        Ok(feedback.to_owned())
    }

    /// Evaluate a decision, degrading to a localized fallback text
    pub async fn evaluate_tactical_decision(
        &self,
        situation: &str,
        decision: &str,
        language: Language,
    ) -> String {
        let strings = catalog(language);
        match self
            .try_evaluate_tactical_decision(situation, decision, language)
            .await
        {
            Ok(feedback) => feedback,
            Err(e) if e.code == ErrorCode::EmptyResponse => {
                warn!("Decision evaluation returned no text");
                strings.analysis_unavailable.to_owned()
            }
            Err(e) => {
                warn!(error = %e, "Decision evaluation failed");
                strings.evaluation_error.to_owned()
            }
        }
    }

    // ========================================================================
    // Chat
    // ========================================================================

    /// Start a coach chat whose persona replies in `language`
    #[must_use]
    pub fn create_coach_chat(&self, language: Language) -> CoachChat {
        CoachChat::new(
            Arc::clone(&self.provider),
            language,
            self.chat_temperature,
            self.model.clone(),
        )
    }
}
