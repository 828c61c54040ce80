// ABOUTME: Video clip input for technique analysis, read from disk or supplied as bytes
// ABOUTME: Infers the media type, enforces the inline size limit and base64-encodes the data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::path::Path;

use base64::{engine::general_purpose, Engine as _};
use tracing::debug;

use crate::errors::{AppError, AppResult};
use crate::llm::InlineMedia;

/// Largest clip sent inline; the service rejects bigger request bodies
pub const MAX_INLINE_BYTES: usize = 20 * 1024 * 1024;

/// A user-selected clip ready to attach to a request
#[derive(Clone, PartialEq, Eq)]
pub struct VideoClip {
    /// File name shown back to the user
    pub file_name: String,
    /// Declared media type, always `video/*`
    pub mime_type: String,
    /// Standard-alphabet base64 of the file bytes
    pub data_base64: String,
    /// Original size in bytes
    pub size_bytes: usize,
}

impl VideoClip {
    /// Read a clip from disk, inferring the media type from the extension
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the file cannot be read and `InvalidInput` if the
    /// extension is not a known video type or the file is empty or too large.
    pub async fn from_path(path: &Path) -> AppResult<Self> {
        let mime_type = mime_type_for(path).ok_or_else(|| {
            AppError::invalid_input(format!("{} is not a supported video file", path.display()))
        })?;
        let file_name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        let size = tokio::fs::metadata(path).await?.len();
        if size > MAX_INLINE_BYTES as u64 {
            return Err(AppError::invalid_input(format!(
                "video is {size} bytes; the limit is {MAX_INLINE_BYTES}"
            )));
        }
        let bytes = tokio::fs::read(path).await?;
        Self::from_bytes(file_name, mime_type, &bytes)
    }

    /// Wrap bytes the caller already holds
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the media type is not `video/*` or the payload is
    /// empty or over [`MAX_INLINE_BYTES`].
    pub fn from_bytes(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: &[u8],
    ) -> AppResult<Self> {
        let mime_type = mime_type.into();
        if !mime_type.starts_with("video/") {
            return Err(AppError::invalid_input(format!(
                "`{mime_type}` is not a video media type"
            )));
        }
        if bytes.is_empty() {
            return Err(AppError::invalid_input("video file is empty"));
        }
        if bytes.len() > MAX_INLINE_BYTES {
            return Err(AppError::invalid_input(format!(
                "video is {} bytes; the limit is {MAX_INLINE_BYTES}",
                bytes.len()
            )));
        }

        let clip = Self {
            file_name: file_name.into(),
            mime_type,
            data_base64: general_purpose::STANDARD.encode(bytes),
            size_bytes: bytes.len(),
        };
        debug!(file = %clip.file_name, mime = %clip.mime_type, bytes = clip.size_bytes, "Video clip loaded");
        Ok(clip)
    }

    /// Inline media part for a request
    #[must_use]
    pub fn to_inline_media(&self) -> InlineMedia {
        InlineMedia {
            mime_type: self.mime_type.clone(),
            data: self.data_base64.clone(),
        }
    }
}

impl Debug for VideoClip {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("VideoClip")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("size_bytes", &self.size_bytes)
            .finish_non_exhaustive()
    }
}

/// Video media type for a file extension
#[must_use]
pub fn mime_type_for(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match extension.as_str() {
        "mp4" => "video/mp4",
        "m4v" => "video/x-m4v",
        "mov" => "video/quicktime",
        "webm" => "video/webm",
        "mkv" => "video/x-matroska",
        "avi" => "video/x-msvideo",
        "mpeg" | "mpg" => "video/mpeg",
        "3gp" => "video/3gpp",
        "wmv" => "video/x-ms-wmv",
        _ => return None,
    };
    Some(mime)
}
