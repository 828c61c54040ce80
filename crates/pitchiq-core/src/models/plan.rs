// ABOUTME: Weekly training plan made of ordered training days
// ABOUTME: Created wholesale by a single generation call and replaced as a unit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::Drill;

/// One day of a weekly plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingDay {
    /// Label such as "Day 1" or "Tuesday"
    pub day_name: String,
    /// What the day works on
    pub focus: String,
    /// Drills in execution order
    pub drills: Vec<Drill>,
}

/// A generated one-week schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingPlan {
    /// Plan name
    pub title: String,
    /// Player level the plan targets
    pub level: String,
    /// Training days in order
    pub weekly_schedule: Vec<TrainingDay>,
}

impl TrainingPlan {
    /// Number of drills across all days
    #[must_use]
    pub fn total_drills(&self) -> usize {
        self.weekly_schedule.iter().map(|d| d.drills.len()).sum()
    }
}
