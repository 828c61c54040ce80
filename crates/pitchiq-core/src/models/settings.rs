// ABOUTME: Session settings: content language, color theme and active view
// ABOUTME: Language selects seed content, prompts and the coach persona
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Content language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    En,
    /// Simplified Chinese
    #[default]
    Zh,
}

impl Language {
    /// Short code, `en` or `zh`
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
        }
    }

    /// Language name used in "Respond in ..." prompt suffixes
    #[must_use]
    pub const fn response_language(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Zh => "Chinese",
        }
    }

    /// Language name used in the coach persona
    #[must_use]
    pub const fn persona_language(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Zh => "Chinese (Simplified)",
        }
    }

    /// The other language
    #[must_use]
    pub const fn toggled(&self) -> Self {
        match self {
            Self::En => Self::Zh,
            Self::Zh => Self::En,
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "zh" | "cn" | "chinese" => Ok(Self::Zh),
            other => Err(AppError::invalid_input(format!(
                "unsupported language `{other}` (expected en or zh)"
            ))),
        }
    }
}

/// Color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark (default)
    #[default]
    Dark,
    /// Light
    Light,
}

impl Theme {
    /// The other theme
    #[must_use]
    pub const fn toggled(&self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// Top-level screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    /// Stats overview
    #[default]
    Dashboard,
    /// Drill library and plan builder
    Drills,
    /// Video technique analyzer
    Analyst,
    /// Tactical decision simulator
    Tactics,
    /// Coach chat
    Coach,
}
