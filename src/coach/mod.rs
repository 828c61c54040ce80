// ABOUTME: Coaching features built on the generative-model provider
// ABOUTME: Client operations, chat sessions, response schemas, payload decoding and video input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Coaching features
//!
//! [`CoachClient`] is the only type the application layer talks to. Requests are
//! built from [`crate::llm::prompts`] and [`schema`], and every payload passes
//! through [`decode`] before it becomes a domain model.

/// Persistent chat session and reply streams
pub mod chat;
/// Coach client operations
pub mod client;
/// Validating payload decode
pub mod decode;
/// Video clip input
pub mod media;
/// Response schema descriptors
pub mod schema;

pub use chat::{CancelHandle, CoachChat, ReplyStream};
pub use client::CoachClient;
pub use media::{VideoClip, MAX_INLINE_BYTES};
