// ABOUTME: Generative-model provider abstraction used by every coaching feature
// ABOUTME: Defines prompt messages, generate requests and the provider trait with streaming support
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Model Provider Interface
//!
//! The coaching features talk to the hosted model only through [`LlmProvider`].
//! A [`GenerateRequest`] comes in four flavours:
//!
//! - **schema-constrained**: [`GenerateRequest::with_json_schema`] asks for JSON of a declared shape
//! - **freeform**: plain text back
//! - **streamed**: [`LlmProvider::generate_stream`] yields text fragments as they arrive
//! - **multimodal**: [`PromptMessage::with_media`] attaches base64 media ahead of the prompt
//!
//! ## Example
//!
//! ```rust,no_run
//! use pitchiq::llm::{GenerateRequest, LlmProvider, PromptMessage};
//!
//! async fn ask(provider: &dyn LlmProvider) {
//!     let request = GenerateRequest::new(vec![
//!         PromptMessage::system("You are a football coach."),
//!         PromptMessage::user("How do I shield the ball?"),
//!     ]);
//!     let answer = provider.generate(&request).await;
//! }
//! ```

mod gemini;
pub mod prompts;
pub mod sse_parser;

pub use gemini::GeminiProvider;

use std::pin::Pin;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio_stream::Stream;

use crate::errors::AppError;

// ============================================================================
// Capability Flags
// ============================================================================

bitflags::bitflags! {
    /// What a provider can do; the coach client checks these before each request
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct LlmCapabilities: u8 {
        /// Incremental text delivery
        const STREAMING = 0b0000_0001;
        /// Inline image or video input
        const VISION = 0b0000_0100;
        /// Output constrained to a response schema
        const JSON_MODE = 0b0000_1000;
    }
}

impl LlmCapabilities {
    /// Streaming text only: no media input, no schema output
    #[must_use]
    pub const fn streaming_only() -> Self {
        Self::STREAMING
    }

    /// Everything the coach needs (Gemini Flash)
    #[must_use]
    pub const fn full_featured() -> Self {
        Self::STREAMING.union(Self::VISION).union(Self::JSON_MODE)
    }

    /// Check if streaming is supported
    #[must_use]
    pub const fn supports_streaming(&self) -> bool {
        self.contains(Self::STREAMING)
    }

    /// Check if media input is supported
    #[must_use]
    pub const fn supports_vision(&self) -> bool {
        self.contains(Self::VISION)
    }

    /// Check if schema-constrained output is supported
    #[must_use]
    pub const fn supports_json_mode(&self) -> bool {
        self.contains(Self::JSON_MODE)
    }
}

// ============================================================================
// Prompt Messages
// ============================================================================

/// Who a prompt message speaks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Persona instruction
    System,
    /// The player
    User,
    /// The coach (earlier model turns)
    Assistant,
}

/// Binary media sent inline with a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineMedia {
    /// Declared media type, e.g. `video/mp4`
    pub mime_type: String,
    /// Standard base64 payload
    pub data: String,
}

/// One message of a prompt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptMessage {
    /// Speaker
    pub role: MessageRole,
    /// Text part
    pub content: String,
    /// Inline media sent ahead of the text
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub media: Vec<InlineMedia>,
}

impl PromptMessage {
    const fn text(role: MessageRole, content: String) -> Self {
        Self {
            role,
            content,
            media: Vec::new(),
        }
    }

    /// Persona instruction
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self::text(MessageRole::System, content.into())
    }

    /// Player turn
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::text(MessageRole::User, content.into())
    }

    /// Earlier coach turn
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::text(MessageRole::Assistant, content.into())
    }

    /// Attach inline media
    #[must_use]
    pub fn with_media(mut self, media: InlineMedia) -> Self {
        self.media.push(media);
        self
    }
}

// ============================================================================
// Requests and Responses
// ============================================================================

/// Output constraint for a request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponseFormat {
    /// Unconstrained text
    Text,
    /// JSON matching the given schema descriptor
    Json {
        /// Schema in the service's OpenAPI-subset dialect
        schema: Value,
    },
}

/// One call to the model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Prompt, oldest message first
    pub messages: Vec<PromptMessage>,
    /// Model override; the provider default applies when `None`
    pub model: Option<String>,
    /// Sampling temperature (0.0 - 2.0); the service default applies when `None`
    pub temperature: Option<f32>,
    /// Whether the answer is streamed
    pub stream: bool,
    /// Output constraint
    pub response_format: ResponseFormat,
}

impl GenerateRequest {
    /// Freeform, non-streamed request for `messages`
    #[must_use]
    pub const fn new(messages: Vec<PromptMessage>) -> Self {
        Self {
            messages,
            model: None,
            temperature: None,
            stream: false,
            response_format: ResponseFormat::Text,
        }
    }

    /// Pin the model
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the sampling temperature
    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Stream the answer
    #[must_use]
    pub const fn with_streaming(mut self) -> Self {
        self.stream = true;
        self
    }

    /// Require JSON output matching `schema`
    #[must_use]
    pub fn with_json_schema(mut self, schema: Value) -> Self {
        self.response_format = ResponseFormat::Json { schema };
        self
    }

    /// Whether any message carries inline media
    #[must_use]
    pub fn has_media(&self) -> bool {
        self.messages.iter().any(|m| !m.media.is_empty())
    }
}

/// Complete (non-streamed) answer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Concatenated text of the answer
    pub content: String,
    /// Model that answered
    pub model: String,
    /// Token accounting, when the service reports it
    pub usage: Option<TokenUsage>,
    /// Why generation stopped (`STOP`, `MAX_TOKENS`, `SAFETY`, ...)
    pub finish_reason: Option<String>,
}

/// Token accounting for one call
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Prompt tokens, media included
    pub prompt_tokens: u32,
    /// Answer tokens
    pub completion_tokens: u32,
    /// Sum of both
    pub total_tokens: u32,
}

/// One streamed fragment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextChunk {
    /// New text; may be empty on the final chunk
    pub delta: String,
    /// Last chunk of the answer
    pub is_final: bool,
    /// Why generation stopped, on the final chunk
    pub finish_reason: Option<String>,
}

/// Stream of answer fragments
pub type TextStream = Pin<Box<dyn Stream<Item = Result<TextChunk, AppError>> + Send>>;

// ============================================================================
// Provider Trait
// ============================================================================

/// A hosted generative model
///
/// Implemented by [`GeminiProvider`] for the real service and by scripted providers
/// in tests.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Name used in log lines and error messages
    fn display_name(&self) -> &'static str;

    /// What this provider supports
    fn capabilities(&self) -> LlmCapabilities;

    /// Model used when a request does not pin one
    fn default_model(&self) -> &str;

    /// Generate a complete answer
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, AppError>;

    /// Generate an answer as a stream of fragments
    async fn generate_stream(&self, request: &GenerateRequest) -> Result<TextStream, AppError>;
}
