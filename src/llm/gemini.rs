// ABOUTME: Google Gemini provider with schema-constrained, multimodal and streaming calls
// ABOUTME: Maps generate requests onto the generateContent and streamGenerateContent endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Gemini Provider
//!
//! [`LlmProvider`] over the Gemini REST API.
//!
//! ## Configuration
//!
//! The API key comes from [`CoachConfig`](crate::config::CoachConfig), which reads
//! `GEMINI_API_KEY` (or `API_KEY`). `PITCHIQ_API_BASE_URL` points the provider at a
//! different host.
//!
//! ## Example
//!
//! ```rust,no_run
//! use pitchiq::errors::AppError;
//! use pitchiq::llm::{GeminiProvider, GenerateRequest, LlmProvider, PromptMessage};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let provider = GeminiProvider::new("my-key");
//!     let request = GenerateRequest::new(vec![PromptMessage::user("Explain a third-man run.")]);
//!     let response = provider.generate(&request).await?;
//!     println!("{}", response.content);
//!     Ok(())
//! }
//! ```

use std::fmt::{Debug, Formatter, Result as FmtResult};

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, instrument, warn};

use super::sse_parser::create_sse_stream;
use super::{
    GenerateRequest, GenerateResponse, LlmCapabilities, LlmProvider, MessageRole, PromptMessage,
    ResponseFormat, TextChunk, TextStream, TokenUsage,
};
use crate::config::CoachConfig;
use crate::constants::model::{DEFAULT_API_BASE_URL, DEFAULT_MODEL};
use crate::errors::{AppError, ErrorCode};

const SERVICE: &str = "gemini";
const RETRY_MARKER: &str = "Please retry in ";

// ============================================================================
// Wire Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WireRequest {
    contents: Vec<WireContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<WireContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<WireGenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct WireContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<WirePart>,
}

/// Text, inline media, or a part kind we never send and skip on the way back
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum WirePart {
    Text {
        text: String,
    },
    Media {
        #[serde(rename = "inlineData")]
        inline_data: WireBlob,
    },
    Other(Value),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireBlob {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WireGenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<Value>,
}

/// Body of a `generateContent` answer and of every streamed event
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireResponse {
    candidates: Option<Vec<WireCandidate>>,
    usage_metadata: Option<WireUsage>,
    error: Option<WireError>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireCandidate {
    content: Option<WireContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireUsage {
    prompt_token_count: Option<u32>,
    candidates_token_count: Option<u32>,
    total_token_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct WireError {
    message: String,
    #[serde(default)]
    status: Option<String>,
}

impl WireResponse {
    fn first_candidate(&self) -> Option<&WireCandidate> {
        self.candidates.as_deref().and_then(<[_]>::first)
    }

    /// All text parts of the first candidate, in order
    fn text(&self) -> String {
        self.first_candidate()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|part| match part {
                        WirePart::Text { text } => Some(text.as_str()),
                        WirePart::Media { .. } | WirePart::Other(_) => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn finish_reason(&self) -> Option<String> {
        self.first_candidate().and_then(|c| c.finish_reason.clone())
    }

    fn usage(&self) -> Option<TokenUsage> {
        self.usage_metadata.as_ref().map(|u| TokenUsage {
            prompt_tokens: u.prompt_token_count.unwrap_or(0),
            completion_tokens: u.candidates_token_count.unwrap_or(0),
            total_tokens: u.total_token_count.unwrap_or(0),
        })
    }
}

fn wire_parts(message: &PromptMessage) -> Vec<WirePart> {
    message
        .media
        .iter()
        .map(|media| WirePart::Media {
            inline_data: WireBlob {
                mime_type: media.mime_type.clone(),
                data: media.data.clone(),
            },
        })
        .chain(std::iter::once(WirePart::Text {
            text: message.content.clone(),
        }))
        .collect()
}

/// System messages become `systemInstruction`; the rest become `contents` in order
fn to_wire(request: &GenerateRequest) -> WireRequest {
    let mut contents = Vec::with_capacity(request.messages.len());
    let mut system_instruction = None;

    for message in &request.messages {
        let role = match message.role {
            MessageRole::System => {
                system_instruction = Some(WireContent {
                    role: None,
                    parts: vec![WirePart::Text {
                        text: message.content.clone(),
                    }],
                });
                continue;
            }
            MessageRole::User => "user",
            MessageRole::Assistant => "model",
        };
        contents.push(WireContent {
            role: Some(role.to_owned()),
            parts: wire_parts(message),
        });
    }

    let (response_mime_type, response_schema) = match &request.response_format {
        ResponseFormat::Text => (None, None),
        ResponseFormat::Json { schema } => (Some("application/json"), Some(schema.clone())),
    };
    let generation_config = (request.temperature.is_some() || response_schema.is_some()).then(|| {
        WireGenerationConfig {
            temperature: request.temperature,
            response_mime_type,
            response_schema,
        }
    });

    WireRequest {
        contents,
        system_instruction,
        generation_config,
    }
}

// ============================================================================
// Error Mapping
// ============================================================================

/// Map a non-success HTTP answer onto an error code
fn classify_failure(status: u16, body: &str) -> AppError {
    let api_error = serde_json::from_str::<WireResponse>(body)
        .ok()
        .and_then(|r| r.error);
    let rejected_key = body.contains("API key not valid")
        || api_error
            .as_ref()
            .and_then(|e| e.status.as_deref())
            .is_some_and(|s| s == "UNAUTHENTICATED");
    let message = api_error.map_or_else(|| body.to_owned(), |e| e.message);

    match status {
        401 | 403 => AppError::new(ErrorCode::ExternalAuthFailed, message),
        400 if rejected_key => AppError::new(ErrorCode::ExternalAuthFailed, message),
        429 => AppError::new(ErrorCode::ExternalRateLimited, quota_message(&message)),
        500..=599 => AppError::new(
            ErrorCode::ExternalServiceUnavailable,
            format!("Gemini API error ({status}): {message}"),
        ),
        _ => AppError::external_service(SERVICE, format!("({status}) {message}")),
    }
}

/// Turn "... Please retry in 6.4s." into a whole-second hint
fn quota_message(message: &str) -> String {
    let seconds = message.find(RETRY_MARKER).and_then(|pos| {
        let rest = &message[pos + RETRY_MARKER.len()..];
        rest[..rest.find('s')?].parse::<f64>().ok()
    });
    match seconds {
        Some(seconds) => format!(
            "AI service quota exceeded. Please try again in {} seconds.",
            seconds.ceil() as u64
        ),
        None => "AI service quota exceeded. Please wait a moment and try again.".to_owned(),
    }
}

/// Decode one SSE data payload; undecodable events are skipped
fn parse_event(data: &str) -> Option<Result<TextChunk, AppError>> {
    let event = match serde_json::from_str::<WireResponse>(data) {
        Ok(event) => event,
        Err(e) => {
            warn!(error = %e, "Skipping undecodable stream event");
            return None;
        }
    };
    if let Some(api_error) = event.error {
        return Some(Err(AppError::external_service(SERVICE, api_error.message)));
    }
    let finish_reason = event.finish_reason();
    Some(Ok(TextChunk {
        delta: event.text(),
        is_final: finish_reason.is_some(),
        finish_reason,
    }))
}

// ============================================================================
// Provider
// ============================================================================

/// Google Gemini provider
pub struct GeminiProvider {
    api_key: String,
    client: Client,
    default_model: String,
    base_url: String,
}

impl GeminiProvider {
    /// Provider for the public endpoint and default model
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            client: Client::new(),
            default_model: DEFAULT_MODEL.to_owned(),
            base_url: DEFAULT_API_BASE_URL.to_owned(),
        }
    }

    /// Provider built from loaded configuration
    #[must_use]
    pub fn from_config(config: &CoachConfig) -> Self {
        Self::new(config.api_key.clone())
            .with_default_model(config.model.clone())
            .with_base_url(config.api_base_url.clone())
    }

    /// Use another default model
    #[must_use]
    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    /// Point the provider at a different API host
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    fn model_for<'a>(&'a self, request: &'a GenerateRequest) -> &'a str {
        request.model.as_deref().unwrap_or(&self.default_model)
    }

    /// POST to `{base}/models/{model}:{method}?key=...`, mapping transport and status failures
    async fn post(
        &self,
        model: &str,
        method: &str,
        request: &GenerateRequest,
    ) -> Result<Response, AppError> {
        let url = format!("{}/models/{model}:{method}", self.base_url);
        let mut builder = self
            .client
            .post(url)
            .query(&[("key", self.api_key.as_str())])
            .json(&to_wire(request));
        if request.stream {
            builder = builder.query(&[("alt", "sse")]);
        }

        let response = builder.send().await.map_err(|e| {
            let code = if e.is_connect() || e.is_timeout() {
                ErrorCode::ExternalServiceUnavailable
            } else {
                ErrorCode::ExternalServiceError
            };
            // the URL carries the key
            let e = e.without_url();
            AppError::new(code, format!("HTTP request to Gemini failed: {e}")).with_source(e)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_owned());
        error!(status = %status, "Gemini API error");
        Err(classify_failure(status.as_u16(), &body))
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    fn display_name(&self) -> &'static str {
        "Google Gemini"
    }

    fn capabilities(&self) -> LlmCapabilities {
        LlmCapabilities::full_featured()
    }

    fn default_model(&self) -> &str {
        &self.default_model
    }

    #[instrument(skip_all, fields(model = %self.model_for(request), media = request.has_media()))]
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, AppError> {
        let model = self.model_for(request);
        let body = self
            .post(model, "generateContent", request)
            .await?
            .text()
            .await
            .map_err(|e| {
                AppError::external_service(SERVICE, format!("Failed to read response: {e}"))
            })?;

        let answer: WireResponse = serde_json::from_str(&body).map_err(|e| {
            error!(error = %e, "Failed to parse Gemini envelope");
            AppError::external_service(SERVICE, format!("Malformed response: {e}"))
        })?;
        if let Some(api_error) = answer.error {
            return Err(AppError::external_service(SERVICE, api_error.message));
        }

        let content = answer.text();
        let finish_reason = answer.finish_reason();
        if content.trim().is_empty() {
            return Err(AppError::empty_response(format!(
                "Gemini returned no text (finish reason: {})",
                finish_reason.as_deref().unwrap_or("none")
            )));
        }
        debug!(chars = content.len(), "Received Gemini response");

        Ok(GenerateResponse {
            content,
            model: model.to_owned(),
            usage: answer.usage(),
            finish_reason,
        })
    }

    #[instrument(skip_all, fields(model = %self.model_for(request)))]
    async fn generate_stream(&self, request: &GenerateRequest) -> Result<TextStream, AppError> {
        let response = self
            .post(self.model_for(request), "streamGenerateContent", request)
            .await?;
        debug!("Gemini stream opened");
        Ok(create_sse_stream(response.bytes_stream(), parse_event, SERVICE))
    }
}

impl Debug for GeminiProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("GeminiProvider")
            .field("default_model", &self.default_model)
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}
