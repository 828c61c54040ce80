// ABOUTME: Core types and constants for the PitchIQ football coaching companion
// ABOUTME: Foundation crate with error handling, domain models, and localized seed content
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # PitchIQ Core
//!
//! Foundation crate providing the shared types of the coaching companion. It has no
//! network or runtime dependencies, so the client, controller and front end all
//! build on the same trusted model.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: Drills, plans, chat messages, scenarios, analysis results, stats
//! - **content**: Seed drills, initial stats and bilingual strings
//! - **constants**: Model defaults, environment variable names, id prefixes

/// Unified error handling system with standard error codes
pub mod errors;

/// Domain models exchanged between client, controller and views
pub mod models;

/// Static bilingual content tables
pub mod content;

/// Application constants organized by domain
pub mod constants;
