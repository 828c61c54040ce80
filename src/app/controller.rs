// ABOUTME: Application controller dispatching user intents to the coach client
// ABOUTME: Validates input, guards busy slices, merges results and records failures as notices
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Application Controller
//!
//! Every request action follows the same steps:
//!
//! 1. validate input; invalid input never reaches the client
//! 2. refuse if the slice already has a request in flight
//! 3. set the busy flag and await the client
//! 4. on success merge the result; on failure keep prior data and record a [`Notice`]
//! 5. clear the busy flag
//!
//! Actions take `&mut self`, so one controller runs at most one request at a time.

use std::ops::ControlFlow;
use std::path::Path;

use futures_util::StreamExt;
use tracing::{debug, info, instrument, warn};

use super::context::AppContext;
use super::dashboard::DashboardSummary;
use super::state::{AppState, Notice};
use crate::coach::{CoachClient, VideoClip};
use crate::content::catalog;
use crate::errors::{AppError, AppResult};
use crate::models::{ChatMessage, Difficulty, Language, Theme, View};

fn busy(what: &str) -> AppError {
    AppError::invalid_input(format!("{what} is already in progress"))
}

/// Owns the state and context and runs every user action
pub struct AppController {
    client: CoachClient,
    context: AppContext,
    state: AppState,
}

impl AppController {
    /// Controller starting in `language`
    #[must_use]
    pub fn new(client: CoachClient, language: Language) -> Self {
        let context = AppContext::new(&client, language);
        Self {
            client,
            context,
            state: AppState::new(language),
        }
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Session context
    #[must_use]
    pub const fn context(&self) -> &AppContext {
        &self.context
    }

    /// Active language
    #[must_use]
    pub const fn language(&self) -> Language {
        self.context.language()
    }

    /// Active theme
    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.context.theme()
    }

    // ========================================================================
    // Navigation and Settings
    // ========================================================================

    /// Bring a view to the front
    pub fn set_view(&mut self, view: View) {
        self.state.view = view;
    }

    /// Flip between dark and light
    pub fn toggle_theme(&mut self) {
        self.context.toggle_theme();
    }

    /// Switch to the other language
    pub fn toggle_language(&mut self) {
        self.set_language(self.language().toggled());
    }

    /// Switch language: new chat session, welcome-only transcript, seed drills
    pub fn set_language(&mut self, language: Language) {
        if self.context.switch_language(&self.client, language) {
            self.state.relocalize(language);
            info!(language = %language, "Language switched");
        }
    }

    /// Dashboard summary for the active language
    #[must_use]
    pub fn dashboard(&self) -> DashboardSummary {
        DashboardSummary::build(
            &self.state.stats,
            self.state.plan.active.as_ref(),
            self.language(),
        )
    }

    // ========================================================================
    // Drills
    // ========================================================================

    /// Update the custom-drill focus text
    pub fn set_drill_prompt(&mut self, prompt: impl Into<String>) {
        self.state.drills.prompt = prompt.into();
    }

    /// Update the level used for drills and plans
    pub fn set_drill_level(&mut self, level: Difficulty) {
        self.state.drills.level = level;
    }

    /// Show the custom-drill form
    pub fn open_drill_form(&mut self) {
        self.state.drills.form_open = true;
    }

    /// Hide the custom-drill form
    pub fn close_drill_form(&mut self) {
        self.state.drills.form_open = false;
    }

    /// Generate drills for the form's focus and prepend them to the library
    ///
    /// On success the form closes and the prompt clears. Returns the number of new drills.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank prompt or a request already in flight;
    /// otherwise the client error, which is also recorded on the slice.
    #[instrument(skip(self))]
    pub async fn generate_drills(&mut self) -> AppResult<usize> {
        let focus = self.state.drills.prompt.trim().to_owned();
        if focus.is_empty() {
            return Err(AppError::invalid_input("drill focus is empty"));
        }
        if self.state.drills.generating {
            return Err(busy("drill generation"));
        }

        self.state.drills.generating = true;
        let result = self
            .client
            .try_generate_custom_drills(
                &focus,
                self.state.drills.level.as_str(),
                self.language(),
            )
            .await
            .and_then(|drills| {
                if drills.is_empty() {
                    Err(AppError::empty_response("no drills were generated"))
                } else {
                    Ok(drills)
                }
            });
        self.state.drills.generating = false;

        match result {
            Ok(new_drills) => {
                let count = new_drills.len();
                let drills = &mut self.state.drills;
                drills.drills.splice(0..0, new_drills);
                drills.form_open = false;
                drills.prompt.clear();
                drills.notice = None;
                debug!(count, "Drills added");
                Ok(count)
            }
            Err(e) => {
                warn!(error = %e, "Drill generation failed");
                self.state.drills.notice = Some(Notice::from(&e));
                Err(e)
            }
        }
    }

    // ========================================================================
    // Training Plan
    // ========================================================================

    /// Update the plan goal
    pub fn set_plan_goal(&mut self, goal: impl Into<String>) {
        self.state.plan.goal = goal.into();
    }

    /// Update the plan availability
    pub fn set_plan_days(&mut self, days: impl Into<String>) {
        self.state.plan.days = days.into();
    }

    /// Show the plan form
    pub fn open_plan_form(&mut self) {
        self.state.plan.form_open = true;
    }

    /// Hide the plan form
    pub fn close_plan_form(&mut self) {
        self.state.plan.form_open = false;
    }

    /// Stop following the active plan
    pub fn clear_plan(&mut self) {
        self.state.plan.active = None;
    }

    /// Generate a weekly plan and make it active
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank goal or a request already in flight;
    /// otherwise the client error, which is also recorded on the slice.
    #[instrument(skip(self))]
    pub async fn generate_plan(&mut self) -> AppResult<()> {
        let goal = self.state.plan.goal.trim().to_owned();
        if goal.is_empty() {
            return Err(AppError::invalid_input("plan goal is empty"));
        }
        if self.state.plan.generating {
            return Err(busy("plan generation"));
        }

        self.state.plan.generating = true;
        let result = self
            .client
            .try_generate_training_plan(
                self.state.drills.level.as_str(),
                &goal,
                &self.state.plan.days,
                self.language(),
            )
            .await;
        self.state.plan.generating = false;

        match result {
            Ok(plan) => {
                info!(title = %plan.title, days = plan.weekly_schedule.len(), "Plan activated");
                let slice = &mut self.state.plan;
                slice.active = Some(plan);
                slice.form_open = false;
                slice.notice = None;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Plan generation failed");
                self.state.plan.notice = Some(Notice::from(&e));
                Err(e)
            }
        }
    }

    // ========================================================================
    // Video Analysis
    // ========================================================================

    /// Select a clip from disk, replacing any previous clip and result
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an unsupported file and `StorageError` if it cannot be read.
    pub async fn select_video(&mut self, path: &Path) -> AppResult<()> {
        let clip = VideoClip::from_path(path).await?;
        self.set_clip(clip);
        Ok(())
    }

    /// Select a clip from bytes already in memory
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the media type or size is not acceptable.
    pub fn select_video_bytes(
        &mut self,
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: &[u8],
    ) -> AppResult<()> {
        let clip = VideoClip::from_bytes(file_name, mime_type, bytes)?;
        self.set_clip(clip);
        Ok(())
    }

    fn set_clip(&mut self, clip: VideoClip) {
        let video = &mut self.state.video;
        video.clip = Some(clip);
        video.result = None;
        video.notice = None;
    }

    /// Drop the selected clip and its result
    pub fn clear_video(&mut self) {
        let video = &mut self.state.video;
        video.clip = None;
        video.result = None;
        video.notice = None;
    }

    /// Analyze the selected clip
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when no clip is selected or a request is in flight;
    /// otherwise the client error, which is also recorded on the slice.
    #[instrument(skip(self))]
    pub async fn analyze_video(&mut self) -> AppResult<()> {
        let Some(clip) = self.state.video.clip.clone() else {
            return Err(AppError::invalid_input("no video selected"));
        };
        if self.state.video.analyzing {
            return Err(busy("video analysis"));
        }

        self.state.video.analyzing = true;
        let result = self
            .client
            .try_analyze_video_technique(&clip, self.language())
            .await;
        self.state.video.analyzing = false;

        match result {
            Ok(analysis) => {
                info!(
                    action = %analysis.action_type,
                    score = analysis.technique_score,
                    "Video analyzed"
                );
                self.state.video.result = Some(analysis);
                self.state.video.notice = None;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Video analysis failed");
                self.state.video.notice = Some(Notice::from(&e));
                Err(e)
            }
        }
    }

    // ========================================================================
    // Tactics
    // ========================================================================

    /// Replace the scenario with a new one, clearing feedback and selection first
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if a request is in flight; otherwise the client
    /// error, which is also recorded on the slice. The prior scenario stays on failure.
    #[instrument(skip(self))]
    pub async fn load_new_scenario(&mut self) -> AppResult<()> {
        if self.state.tactics.loading_scenario || self.state.tactics.evaluating {
            return Err(busy("tactical scenario"));
        }

        let tactics = &mut self.state.tactics;
        tactics.feedback = None;
        tactics.selected_option = None;
        tactics.loading_scenario = true;

        let result = self
            .client
            .try_generate_tactical_scenario(self.language())
            .await;
        self.state.tactics.loading_scenario = false;

        match result {
            Ok(scenario) => {
                debug!(title = %scenario.title, options = scenario.options.len(), "Scenario loaded");
                self.state.tactics.scenario = Some(scenario);
                self.state.tactics.notice = None;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Scenario generation failed");
                self.state.tactics.notice = Some(Notice::from(&e));
                Err(e)
            }
        }
    }

    /// Pick an option: lock the options, show the loading text, then the feedback
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` without a scenario, for an unknown option, or when a
    /// choice was already made.
    #[instrument(skip(self))]
    pub async fn choose_option(&mut self, option_id: &str) -> AppResult<()> {
        let tactics = &self.state.tactics;
        let Some(scenario) = tactics.scenario.as_ref() else {
            return Err(AppError::invalid_input("no tactical scenario loaded"));
        };
        if tactics.options_locked() || tactics.evaluating {
            return Err(AppError::invalid_input("an option was already chosen"));
        }
        let Some(option) = scenario.option(option_id) else {
            return Err(AppError::invalid_input(format!("unknown option `{option_id}`")));
        };
        let situation = scenario.situation.clone();
        let decision = option.text.clone();

        let language = self.language();
        let tactics = &mut self.state.tactics;
        tactics.selected_option = Some(option_id.to_owned());
        tactics.feedback = Some(catalog(language).loading.to_owned());
        tactics.evaluating = true;

        let feedback = self
            .client
            .evaluate_tactical_decision(&situation, &decision, language)
            .await;

        let tactics = &mut self.state.tactics;
        tactics.feedback = Some(feedback);
        tactics.evaluating = false;
        Ok(())
    }

    // ========================================================================
    // Coach Chat
    // ========================================================================

    /// Send a chat message and stream the coach's reply into the transcript
    ///
    /// `observer` sees the transcript after every append; returning
    /// `ControlFlow::Break` cancels the reply and keeps the partial text. A failure
    /// appends the localized connection-error message.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank message or a reply already in flight;
    /// otherwise the client or stream error.
    #[instrument(skip(self, text, observer), fields(chars = text.len()))]
    pub async fn send_message<F>(&mut self, text: &str, mut observer: F) -> AppResult<()>
    where
        F: FnMut(&[ChatMessage]) -> ControlFlow<()>,
    {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::invalid_input("message is empty"));
        }
        if self.state.chat.typing {
            return Err(busy("coach reply"));
        }

        self.state.chat.messages.push(ChatMessage::user(text));
        self.state.chat.typing = true;
        let _ = observer(&self.state.chat.messages);

        let outcome = self.stream_reply(text, &mut observer).await;
        self.state.chat.typing = false;

        if let Err(e) = &outcome {
            warn!(error = %e, "Coach reply failed");
            let connection_error = catalog(self.language()).connection_error;
            self.state.chat.messages.push(ChatMessage::model(connection_error));
            self.state.chat.notice = Some(Notice::from(e));
            let _ = observer(&self.state.chat.messages);
        } else {
            self.state.chat.notice = None;
        }
        outcome
    }

    async fn stream_reply<F>(&mut self, text: &str, observer: &mut F) -> AppResult<()>
    where
        F: FnMut(&[ChatMessage]) -> ControlFlow<()>,
    {
        let mut stream = self.context.chat().send_message_stream(text).await?;
        let cancel = stream.cancel_handle();

        self.state.chat.messages.push(ChatMessage::model(""));
        let reply_index = self.state.chat.messages.len() - 1;
        if observer(&self.state.chat.messages).is_break() {
            cancel.cancel();
        }

        while let Some(fragment) = stream.next().await {
            let fragment = fragment?;
            self.state.chat.messages[reply_index].append(&fragment);
            if observer(&self.state.chat.messages).is_break() {
                cancel.cancel();
            }
        }

        if stream.is_cancelled() {
            debug!(chars = stream.reply_so_far().len(), "Reply cancelled");
        }
        self.context
            .chat_mut()
            .record_exchange(stream.user_text(), stream.reply_so_far());
        Ok(())
    }
}
