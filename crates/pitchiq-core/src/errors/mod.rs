// ABOUTME: Unified error handling with standard error codes for the coaching companion
// ABOUTME: Maps transport, empty-response, schema and input failures onto AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every fallible operation in the workspace returns [`AppResult`]. The error codes
//! follow the failure taxonomy of the generative-model boundary:
//!
//! 1. transport / auth failure (`External*`)
//! 2. empty response (`EmptyResponse`)
//! 3. schema / parse mismatch (`SchemaMismatch`)
//! 4. user input validation (`InvalidInput`)

use std::error::Error as StdError;
use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// User input failed local validation
    InvalidInput = 3000,
    /// A required value was not provided
    MissingRequiredField = 3001,

    // External Services (5000-5999)
    /// The generative-model service returned an error
    ExternalServiceError = 5000,
    /// The generative-model service could not be reached
    ExternalServiceUnavailable = 5001,
    /// The API credential was rejected
    ExternalAuthFailed = 5002,
    /// Quota or rate limit hit on the service side
    ExternalRateLimited = 5003,
    /// The service answered without any usable text
    EmptyResponse = 5004,
    /// The service text did not decode into the declared shape
    SchemaMismatch = 5005,
    /// The provider lacks a capability the request needs
    UnsupportedCapability = 5006,

    // Configuration (6000-6999)
    /// Required configuration is missing
    ConfigMissing = 6001,
    /// Configuration value could not be parsed
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    InternalError = 9000,
    /// Local file could not be read
    StorageError = 9002,
    /// Serialization of an outgoing payload failed
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required value is missing",
            Self::ExternalServiceError => "The coaching model service encountered an error",
            Self::ExternalServiceUnavailable => "The coaching model service is unavailable",
            Self::ExternalAuthFailed => "Authentication with the coaching model service failed",
            Self::ExternalRateLimited => "The coaching model service quota was exceeded",
            Self::EmptyResponse => "The coaching model returned an empty response",
            Self::SchemaMismatch => "The coaching model response did not match the expected shape",
            Self::UnsupportedCapability => "The configured model does not support this request",
            Self::ConfigMissing => "Required configuration is missing",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::StorageError => "File operation failed",
            Self::SerializationError => "Data serialization failed",
        }
    }

    /// Whether the failure originated on the service side of the boundary
    #[must_use]
    pub const fn is_external(&self) -> bool {
        matches!(
            self,
            Self::ExternalServiceError
                | Self::ExternalServiceUnavailable
                | Self::ExternalAuthFailed
                | Self::ExternalRateLimited
                | Self::EmptyResponse
                | Self::SchemaMismatch
        )
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
#[error("{}: {message}", .code.description())]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid user input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Configuration value missing
    #[must_use]
    pub fn config_missing(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigMissing, message)
    }

    /// Configuration value unparseable
    #[must_use]
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// External service error
    #[must_use]
    pub fn external_service(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceError,
            format!("{}: {}", service.into(), message.into()),
        )
    }

    /// Service answered but carried no text
    #[must_use]
    pub fn empty_response(context: impl Into<String>) -> Self {
        Self::new(ErrorCode::EmptyResponse, context)
    }

    /// Service text failed the validating decode
    #[must_use]
    pub fn schema_mismatch(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SchemaMismatch, message)
    }

    /// Provider is missing a capability
    #[must_use]
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::UnsupportedCapability, message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        Self::new(ErrorCode::StorageError, error.to_string()).with_source(error)
    }
}
