// ABOUTME: Player skill scores and aggregate training counters for the dashboard
// ABOUTME: Seed-only; nothing in the session mutates them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::DrillCategory;

/// Dashboard statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    /// Technical score, 0-100
    pub technical: u8,
    /// Physical score, 0-100
    pub physical: u8,
    /// Tactical score, 0-100
    pub tactical: u8,
    /// Mental score, 0-100
    pub mental: u8,
    /// Total logged training time
    pub training_hours: f64,
    /// Number of completed drills
    pub drills_completed: u32,
}

impl UserStats {
    /// Score for one skill area
    #[must_use]
    pub const fn score(&self, category: DrillCategory) -> u8 {
        match category {
            DrillCategory::Technical => self.technical,
            DrillCategory::Physical => self.physical,
            DrillCategory::Tactical => self.tactical,
            DrillCategory::Mental => self.mental,
        }
    }

    /// All four skill scores in radar order
    #[must_use]
    pub fn attributes(&self) -> [(DrillCategory, u8); 4] {
        DrillCategory::ALL.map(|c| (c, self.score(c)))
    }
}
