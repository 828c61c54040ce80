// ABOUTME: SSE (Server-Sent Events) line-buffering parser for streamed model responses
// ABOUTME: Handles partial lines and split UTF-8 sequences across TCP chunk boundaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # SSE Stream Parser
//!
//! A line-buffering parser for Server-Sent Events used by the streaming chat path.
//! It handles three framing problems:
//!
//! 1. **Multiple events per TCP chunk**: every event in a batched chunk is emitted.
//! 2. **Partial JSON across TCP boundaries**: incomplete lines stay buffered until
//!    their newline arrives.
//! 3. **Split UTF-8 sequences**: bytes are buffered raw and only complete lines are
//!    decoded, so multi-byte characters (Chinese replies) never get mangled.
//!
//! The provider supplies a `parse_data` closure that converts each `data:` payload
//! into a `TextChunk`.

use std::collections::VecDeque;
use std::mem;
use std::pin::Pin;

use bytes::Bytes;
use futures_util::stream::unfold;
use futures_util::{future, Stream, StreamExt};

use super::{TextChunk, TextStream};
use crate::errors::AppError;

/// A parsed SSE event from the stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SseEvent {
    /// A `data:` payload (prefix stripped)
    Data(String),
    /// The `[DONE]` termination signal
    Done,
}

/// Line-buffering SSE parser
#[derive(Debug, Default)]
pub struct SseLineBuffer {
    /// Bytes not yet terminated by a newline
    buffer: Vec<u8>,
}

impl SseLineBuffer {
    /// Create a new empty line buffer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed raw bytes from a TCP chunk, returning any complete SSE events
    pub fn feed(&mut self, bytes: &[u8]) -> Vec<SseEvent> {
        self.buffer.extend_from_slice(bytes);

        let mut events = Vec::new();
        while let Some(newline_pos) = self.buffer.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=newline_pos).collect();
            if let Some(event) = Self::parse_line(&String::from_utf8_lossy(&line)) {
                events.push(event);
            }
        }
        events
    }

    /// Flush a trailing line that never received its newline
    pub fn flush(&mut self) -> Vec<SseEvent> {
        let remaining = mem::take(&mut self.buffer);
        Self::parse_line(&String::from_utf8_lossy(&remaining))
            .into_iter()
            .collect()
    }

    fn parse_line(line: &str) -> Option<SseEvent> {
        let trimmed = line.trim();
        // Non-data fields (event:, id:, retry:, comments) are ignored
        let data = trimmed.strip_prefix("data:")?.trim_start();
        if data.is_empty() {
            return None;
        }
        if data == "[DONE]" {
            return Some(SseEvent::Done);
        }
        Some(SseEvent::Data(data.to_owned()))
    }
}

/// Internal state for the SSE stream unfold
struct SseStreamState {
    parser: SseLineBuffer,
    pending: VecDeque<Result<TextChunk, AppError>>,
    stream_ended: bool,
}

impl SseStreamState {
    fn push_events<F>(&mut self, events: Vec<SseEvent>, parse_data: &F)
    where
        F: Fn(&str) -> Option<Result<TextChunk, AppError>>,
    {
        for event in events {
            match event {
                SseEvent::Data(json_str) => {
                    if let Some(result) = parse_data(&json_str) {
                        self.pending.push_back(result);
                    }
                }
                SseEvent::Done => self.pending.push_back(Ok(TextChunk {
                    delta: String::new(),
                    is_final: true,
                    finish_reason: Some("stop".to_owned()),
                })),
            }
        }
    }
}

type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, reqwest::Error>> + Send>>;

/// Create a buffered SSE stream from a raw byte stream
///
/// `parse_data` returns `None` to skip events that carry no output (metadata-only
/// chunks). Empty non-final deltas are filtered out.
pub fn create_sse_stream<S, F>(byte_stream: S, parse_data: F, provider_name: &'static str) -> TextStream
where
    S: Stream<Item = Result<Bytes, reqwest::Error>> + Send + 'static,
    F: Fn(&str) -> Option<Result<TextChunk, AppError>> + Send + 'static,
{
    let state = SseStreamState {
        parser: SseLineBuffer::new(),
        pending: VecDeque::new(),
        stream_ended: false,
    };
    let byte_stream: ByteStream = Box::pin(byte_stream);

    let stream = unfold(
        (byte_stream, state, parse_data),
        move |(mut byte_stream, mut state, parse_data)| async move {
            loop {
                if let Some(item) = state.pending.pop_front() {
                    return Some((item, (byte_stream, state, parse_data)));
                }
                if state.stream_ended {
                    return None;
                }

                match byte_stream.next().await {
                    Some(Ok(bytes)) => {
                        let events = state.parser.feed(&bytes);
                        state.push_events(events, &parse_data);
                    }
                    Some(Err(e)) => {
                        state.stream_ended = true;
                        let error = AppError::external_service(
                            provider_name,
                            format!("Stream read error: {e}"),
                        );
                        return Some((Err(error), (byte_stream, state, parse_data)));
                    }
                    None => {
                        state.stream_ended = true;
                        let events = state.parser.flush();
                        state.push_events(events, &parse_data);
                    }
                }
            }
        },
    );

    let filtered = stream.filter(|result| {
        future::ready(
            result
                .as_ref()
                .map_or(true, |chunk| !chunk.delta.is_empty() || chunk.is_final),
        )
    });

    Box::pin(filtered)
}
