// ABOUTME: Shared test utilities for integration tests
// ABOUTME: Provides a scripted in-memory model provider and sample model payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `pitchiq`

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use futures_util::stream;
use pitchiq::coach::CoachClient;
use pitchiq::errors::{AppError, ErrorCode};
use pitchiq::llm::{
    GenerateRequest, GenerateResponse, LlmCapabilities, LlmProvider, TextChunk, TextStream,
};
use serde_json::json;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("warn")
            .with_test_writer()
            .try_init();
    });
}

/// One scripted answer
#[derive(Debug, Clone)]
pub enum Reply {
    /// Single-shot text; empty text behaves like an empty model response
    Text(String),
    /// The call fails with this code
    Fail(ErrorCode),
    /// A stream yielding these fragments, then finishing
    Fragments(Vec<&'static str>),
    /// A stream yielding these fragments, then failing
    BrokenStream(Vec<&'static str>),
}

impl Reply {
    pub fn json(value: &serde_json::Value) -> Self {
        Self::Text(value.to_string())
    }
}

/// In-memory provider answering from a queue and recording every request
pub struct ScriptedProvider {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<GenerateRequest>>,
    capabilities: LlmCapabilities,
}

impl ScriptedProvider {
    pub fn new(replies: Vec<Reply>) -> Arc<Self> {
        Self::with_capabilities(replies, LlmCapabilities::full_featured())
    }

    pub fn with_capabilities(replies: Vec<Reply>, capabilities: LlmCapabilities) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
            capabilities,
        })
    }

    /// Queue more answers
    pub fn push(&self, reply: Reply) {
        self.replies.lock().unwrap().push_back(reply);
    }

    /// Every request seen so far
    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn next_reply(&self, request: &GenerateRequest) -> Result<Reply, AppError> {
        self.requests.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| AppError::internal("no scripted reply left"))
    }
}

fn scripted_failure(code: ErrorCode) -> AppError {
    AppError::new(code, "scripted failure")
}

fn chunk(delta: &str) -> Result<TextChunk, AppError> {
    Ok(TextChunk {
        delta: delta.to_owned(),
        is_final: false,
        finish_reason: None,
    })
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn display_name(&self) -> &'static str {
        "Scripted Provider"
    }

    fn capabilities(&self) -> LlmCapabilities {
        self.capabilities
    }

    fn default_model(&self) -> &str {
        "scripted-model"
    }

    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, AppError> {
        let content = match self.next_reply(request)? {
            Reply::Text(text) if text.trim().is_empty() => {
                return Err(AppError::empty_response("scripted empty text"))
            }
            Reply::Text(text) => text,
            Reply::Fail(code) => return Err(scripted_failure(code)),
            Reply::Fragments(parts) | Reply::BrokenStream(parts) => parts.concat(),
        };
        Ok(GenerateResponse {
            content,
            model: "scripted-model".to_owned(),
            usage: None,
            finish_reason: Some("STOP".to_owned()),
        })
    }

    async fn generate_stream(&self, request: &GenerateRequest) -> Result<TextStream, AppError> {
        let items: Vec<Result<TextChunk, AppError>> = match self.next_reply(request)? {
            Reply::Fragments(parts) => parts
                .into_iter()
                .map(chunk)
                .chain(std::iter::once(Ok(TextChunk {
                    delta: String::new(),
                    is_final: true,
                    finish_reason: Some("STOP".to_owned()),
                })))
                .collect(),
            Reply::BrokenStream(parts) => parts
                .into_iter()
                .map(chunk)
                .chain(std::iter::once(Err(scripted_failure(
                    ErrorCode::ExternalServiceError,
                ))))
                .collect(),
            Reply::Text(text) => vec![chunk(&text)],
            Reply::Fail(code) => return Err(scripted_failure(code)),
        };
        Ok(Box::pin(stream::iter(items)))
    }
}

/// Coach client over a scripted provider
pub fn client(provider: &Arc<ScriptedProvider>) -> CoachClient {
    let provider: Arc<dyn LlmProvider> = provider.clone();
    CoachClient::new(provider)
}

// ============================================================================
// Sample Payloads
// ============================================================================

pub fn drill_json(title: &str) -> serde_json::Value {
    json!({
        "title": title,
        "category": "Technical",
        "difficulty": "Advanced",
        "duration": "15 mins",
        "description": "Receive on the half turn and play forward.",
        "equipment": ["Balls", "Cones"],
        "reps": "4 x 2 mins"
    })
}

pub fn drill_list_json() -> serde_json::Value {
    json!([
        drill_json("Half-Turn Receiving"),
        drill_json("Scan and Switch"),
        drill_json("One-Touch Wall Pass")
    ])
}

pub fn plan_json() -> serde_json::Value {
    json!({
        "title": "Ball Mastery Week",
        "level": "Intermediate",
        "weeklySchedule": [
            { "dayName": "Monday", "focus": "First touch", "drills": [drill_json("Wall Control")] },
            { "dayName": "Wednesday", "focus": "Dribbling", "drills": [drill_json("Cone Weave"), drill_json("1v1 Gates")] },
            { "dayName": "Friday", "focus": "Finishing", "drills": [] }
        ]
    })
}

pub fn scenario_json() -> serde_json::Value {
    json!({
        "title": "3v2 Counter Attack",
        "situation": "You carry the ball through midfield with two teammates against two defenders.",
        "formation": "4-3-3",
        "options": [
            { "id": "a", "text": "Drive at the center-back" },
            { "id": "b", "text": "Slip the runner in behind" },
            { "id": "c", "text": "Switch to the far winger" }
        ]
    })
}

pub fn analysis_json(score: u8) -> serde_json::Value {
    json!({
        "actionType": "Shot",
        "techniqueScore": score,
        "breakdown": "Plant foot is close to the ball and the hips are square.",
        "corrections": "Lock the ankle and land on the shooting foot.",
        "drillRecommendation": "Volley Rebounds"
    })
}
