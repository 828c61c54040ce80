// ABOUTME: Persistent coach chat session and its cancellable streamed reply
// ABOUTME: Keeps persona and turn history; each reply is a single-consumer fragment stream
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Coach Chat
//!
//! A [`CoachChat`] is bound to one language: the persona system instruction names
//! the reply language, so switching languages means creating a new session.
//!
//! [`CoachChat::send_message_stream`] returns a [`ReplyStream`] yielding text
//! fragments in receipt order. The consumer can stop it early through a
//! [`CancelHandle`]; a cancelled stream simply ends. Once the consumer is done it
//! hands the finished turn back with [`CoachChat::record_exchange`] so the next
//! request carries it as history.

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_util::stream::{AbortHandle, Abortable};
use tokio_stream::Stream;
use tracing::{debug, instrument};

use crate::errors::{AppError, AppResult};
use crate::llm::{prompts, GenerateRequest, LlmProvider, PromptMessage, TextStream};
use crate::models::Language;

/// Handle that stops a [`ReplyStream`] from another task
#[derive(Debug, Clone)]
pub struct CancelHandle(AbortHandle);

impl CancelHandle {
    /// Stop the stream; it yields no further fragments
    pub fn cancel(&self) {
        self.0.abort();
    }

    /// Whether `cancel` has been called
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.is_aborted()
    }
}

/// Text fragments of one coach reply
pub struct ReplyStream {
    inner: Abortable<TextStream>,
    handle: AbortHandle,
    user_text: String,
    reply: String,
}

impl ReplyStream {
    fn new(stream: TextStream, user_text: String) -> Self {
        let (handle, registration) = AbortHandle::new_pair();
        Self {
            inner: Abortable::new(stream, registration),
            handle,
            user_text,
            reply: String::new(),
        }
    }

    /// Handle for cancelling this stream
    #[must_use]
    pub fn cancel_handle(&self) -> CancelHandle {
        CancelHandle(self.handle.clone())
    }

    /// The user message this stream answers
    #[must_use]
    pub fn user_text(&self) -> &str {
        &self.user_text
    }

    /// Concatenation of every fragment yielded so far
    #[must_use]
    pub fn reply_so_far(&self) -> &str {
        &self.reply
    }

    /// Whether the consumer cancelled the stream
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.inner.is_aborted()
    }
}

impl Stream for ReplyStream {
    type Item = AppResult<String>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        loop {
            match Pin::new(&mut self.inner).poll_next(cx) {
                Poll::Ready(Some(Ok(chunk))) => {
                    if chunk.delta.is_empty() {
                        continue;
                    }
                    self.reply.push_str(&chunk.delta);
                    return Poll::Ready(Some(Ok(chunk.delta)));
                }
                Poll::Ready(Some(Err(e))) => return Poll::Ready(Some(Err(e))),
                Poll::Ready(None) => return Poll::Ready(None),
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}

/// A coach conversation bound to one language
pub struct CoachChat {
    provider: Arc<dyn LlmProvider>,
    language: Language,
    system_instruction: String,
    history: Vec<PromptMessage>,
    temperature: f32,
    model: String,
}

impl CoachChat {
    pub(crate) fn new(
        provider: Arc<dyn LlmProvider>,
        language: Language,
        temperature: f32,
        model: String,
    ) -> Self {
        Self {
            provider,
            language,
            system_instruction: prompts::coach_system_instruction(language),
            history: Vec::new(),
            temperature,
            model,
        }
    }

    /// Language the persona replies in
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Persona instruction sent with every turn
    #[must_use]
    pub fn system_instruction(&self) -> &str {
        &self.system_instruction
    }

    /// Completed turns, oldest first
    #[must_use]
    pub fn history(&self) -> &[PromptMessage] {
        &self.history
    }

    /// Send a user message and stream the reply
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank message, `UnsupportedCapability` if the
    /// provider cannot stream, or the provider error if the stream cannot be opened.
    #[instrument(skip(self, text), fields(language = %self.language, turns = self.history.len() / 2))]
    pub async fn send_message_stream(&self, text: &str) -> AppResult<ReplyStream> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::invalid_input("message is empty"));
        }
        if !self.provider.capabilities().supports_streaming() {
            return Err(AppError::unsupported(format!(
                "{} cannot stream replies",
                self.provider.display_name()
            )));
        }

        let mut messages = Vec::with_capacity(self.history.len() + 2);
        messages.push(PromptMessage::system(self.system_instruction.clone()));
        messages.extend(self.history.iter().cloned());
        messages.push(PromptMessage::user(text));

        let request = GenerateRequest::new(messages)
            .with_model(self.model.clone())
            .with_temperature(self.temperature)
            .with_streaming();

        let stream = self.provider.generate_stream(&request).await?;
        debug!("Reply stream opened");
        Ok(ReplyStream::new(stream, text.to_owned()))
    }

    /// Append a finished turn to the history
    ///
    /// Turns whose reply is empty are dropped so a failed exchange never leaves a
    /// dangling user message.
    pub fn record_exchange(&mut self, user_text: &str, reply: &str) {
        if reply.is_empty() {
            return;
        }
        self.history.push(PromptMessage::user(user_text));
        self.history.push(PromptMessage::assistant(reply));
    }
}
