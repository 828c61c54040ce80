// ABOUTME: Static bilingual content: seed drills, initial stats and feature strings
// ABOUTME: Lookup tables keyed by Language, never mutated at runtime
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Localized Content Tables
//!
//! The seed drill library and the strings the controller needs (welcome message,
//! fallbacks, labels) for each [`Language`](crate::models::Language).

mod drills;
mod strings;

pub use drills::{initial_stats, seed_drills};
pub use strings::{catalog, Catalog};
