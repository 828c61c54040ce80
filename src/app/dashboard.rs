// ABOUTME: Dashboard summary assembled from stats, the active plan and localized labels
// ABOUTME: Produces the attribute radar values and the weekly-focus line
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::content::catalog;
use crate::models::{DrillCategory, Language, TrainingPlan, UserStats};

/// One radar axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeScore {
    /// Skill area
    pub category: DrillCategory,
    /// Localized axis label
    pub label: &'static str,
    /// Score 0-100
    pub score: u8,
}

/// Everything the dashboard shows
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    /// Raw statistics
    pub stats: UserStats,
    /// Localized "training hours" heading
    pub training_hours_label: &'static str,
    /// Localized hours unit
    pub hours_unit: &'static str,
    /// Localized "drills done" heading
    pub drills_done_label: &'static str,
    /// Localized radar heading
    pub attributes_label: &'static str,
    /// Radar axes in display order
    pub attributes: Vec<AttributeScore>,
    /// Localized weekly-focus heading
    pub weekly_focus_label: &'static str,
    /// "Following: <plan>" or the no-plan text
    pub weekly_focus: String,
}

impl DashboardSummary {
    /// Build the summary for `language`
    #[must_use]
    pub fn build(stats: &UserStats, plan: Option<&TrainingPlan>, language: Language) -> Self {
        let strings = catalog(language);
        let attributes = stats
            .attributes()
            .into_iter()
            .map(|(category, score)| AttributeScore {
                category,
                label: strings.category(category),
                score,
            })
            .collect();
        let weekly_focus = plan.map_or_else(
            || strings.no_plan.to_owned(),
            |plan| format!("{}: {}", strings.following, plan.title),
        );

        Self {
            stats: stats.clone(),
            training_hours_label: strings.training_hours,
            hours_unit: strings.hours,
            drills_done_label: strings.drills_done,
            attributes_label: strings.player_attributes,
            attributes,
            weekly_focus_label: strings.weekly_focus,
            weekly_focus,
        }
    }
}
