// ABOUTME: Video technique analysis result and its score banding
// ABOUTME: Scores above the threshold are styled as high, the rest as low
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Scores strictly above this value are in the high band
pub const HIGH_SCORE_THRESHOLD: u8 = 75;

/// Presentation band for a technique score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    /// Score above the threshold
    High,
    /// Score at or below the threshold
    Low,
}

impl ScoreBand {
    /// Band for a 0-100 score
    #[must_use]
    pub const fn for_score(score: u8) -> Self {
        if score > HIGH_SCORE_THRESHOLD {
            Self::High
        } else {
            Self::Low
        }
    }
}

/// Technique report for one analyzed clip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoAnalysisResult {
    /// Detected action, e.g. "Shooting"
    pub action_type: String,
    /// Technique score, 0-100
    pub technique_score: u8,
    /// Body mechanics analysis
    pub breakdown: String,
    /// Key mistakes and fixes
    pub corrections: String,
    /// Drill suggested to improve the action
    pub drill_recommendation: String,
}

impl VideoAnalysisResult {
    /// Presentation band for this result
    #[must_use]
    pub const fn score_band(&self) -> ScoreBand {
        ScoreBand::for_score(self.technique_score)
    }
}
