// ABOUTME: Environment configuration for the generative-model client and default language
// ABOUTME: Parses API key, model, base URL, language and temperatures with typed errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use std::env;
use std::fmt::{Debug, Formatter, Result as FmtResult};

use tracing::{debug, info};

use crate::constants::{env_config, model};
use crate::errors::{AppError, AppResult};
use crate::models::Language;

/// Settings for the coach client and the initial app context
#[derive(Clone)]
pub struct CoachConfig {
    /// Gemini API key
    pub api_key: String,
    /// Model identifier for every request
    pub model: String,
    /// API root, without trailing slash
    pub api_base_url: String,
    /// Language the app starts in
    pub language: Language,
    /// Sampling temperature for the coach chat
    pub chat_temperature: f32,
    /// Sampling temperature for drill generation
    pub drill_temperature: f32,
}

impl CoachConfig {
    /// Build a config with defaults around an API key
    #[must_use]
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model::DEFAULT_MODEL.to_owned(),
            api_base_url: model::DEFAULT_API_BASE_URL.to_owned(),
            language: Language::default(),
            chat_temperature: model::CHAT_TEMPERATURE,
            drill_temperature: model::DRILL_TEMPERATURE,
        }
    }

    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` when no API key is set and `ConfigInvalid` when a
    /// language or temperature value does not parse.
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let api_key = non_empty_var(env_config::GEMINI_API_KEY)
            .or_else(|| non_empty_var(env_config::API_KEY))
            .ok_or_else(|| {
                AppError::config_missing(format!(
                    "{} environment variable not set",
                    env_config::GEMINI_API_KEY
                ))
            })?;

        let mut config = Self::with_api_key(api_key);

        if let Some(model) = non_empty_var(env_config::MODEL) {
            config.model = model;
        }
        if let Some(base_url) = non_empty_var(env_config::API_BASE_URL) {
            config.api_base_url = base_url.trim_end_matches('/').to_owned();
        }
        if let Some(language) = non_empty_var(env_config::LANGUAGE) {
            config.language = language.parse().map_err(|e: AppError| {
                AppError::config_invalid(format!("{}: {}", env_config::LANGUAGE, e.message))
            })?;
        }
        config.chat_temperature =
            parse_temperature(env_config::CHAT_TEMPERATURE, config.chat_temperature)?;
        config.drill_temperature =
            parse_temperature(env_config::DRILL_TEMPERATURE, config.drill_temperature)?;

        debug!(config = ?config, "Configuration loaded");
        Ok(config)
    }
}

impl Debug for CoachConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("CoachConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("api_base_url", &self.api_base_url)
            .field("language", &self.language)
            .field("chat_temperature", &self.chat_temperature)
            .field("drill_temperature", &self.drill_temperature)
            .finish()
    }
}

/// Get an environment variable, treating blank values as unset
fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

/// Parse a sampling temperature in `0.0..=2.0`
fn parse_temperature(key: &str, default: f32) -> AppResult<f32> {
    let Some(raw) = non_empty_var(key) else {
        return Ok(default);
    };
    let value: f32 = raw
        .parse()
        .map_err(|_| AppError::config_invalid(format!("{key}: `{raw}` is not a number")))?;
    if !(0.0..=2.0).contains(&value) {
        return Err(AppError::config_invalid(format!(
            "{key}: {value} is outside 0.0..=2.0"
        )));
    }
    Ok(value)
}
