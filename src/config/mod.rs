// ABOUTME: Configuration module for the coaching companion
// ABOUTME: Loads model credentials, endpoint, language and sampling settings from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! All settings come from environment variables; see [`CoachConfig::from_env`].

/// Environment-driven configuration
pub mod environment;

pub use environment::CoachConfig;
