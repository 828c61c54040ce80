// ABOUTME: Drill record with its category and difficulty enumerations
// ABOUTME: Enum wire values are the capitalized English names the model is constrained to
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Skill area a drill trains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrillCategory {
    /// Ball mastery, passing, shooting
    Technical,
    /// Speed, stamina, strength
    Physical,
    /// Positioning and decision making
    Tactical,
    /// Focus and composure
    Mental,
}

impl DrillCategory {
    /// Every category in display order
    pub const ALL: [Self; 4] = [Self::Technical, Self::Physical, Self::Tactical, Self::Mental];

    /// Canonical wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Technical => "Technical",
            Self::Physical => "Physical",
            Self::Tactical => "Tactical",
            Self::Mental => "Mental",
        }
    }
}

impl Display for DrillCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for DrillCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| AppError::schema_mismatch(format!("unknown drill category `{s}`")))
    }
}

/// Player level a drill is designed for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    /// New to structured training
    Beginner,
    /// Regular club player (default form level)
    #[default]
    Intermediate,
    /// Competitive player
    Advanced,
    /// Professional standard
    Pro,
}

impl Difficulty {
    /// Every difficulty from easiest to hardest
    pub const ALL: [Self; 4] = [Self::Beginner, Self::Intermediate, Self::Advanced, Self::Pro];

    /// Canonical wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Pro => "Pro",
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| AppError::schema_mismatch(format!("unknown difficulty `{s}`")))
    }
}

/// A single training exercise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Drill {
    /// Unique identifier within the session
    pub id: String,
    /// Short drill name
    pub title: String,
    /// Skill area
    pub category: DrillCategory,
    /// Target level
    pub difficulty: Difficulty,
    /// Free-form duration, e.g. "15 mins"
    pub duration: String,
    /// Setup and execution instructions
    pub description: String,
    /// Equipment list, e.g. "5 Cones"
    pub equipment: Vec<String>,
    /// Suggested sets and reps, e.g. "3 sets of 12"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<String>,
}

impl Drill {
    /// Equipment joined for single-line display
    #[must_use]
    pub fn equipment_summary(&self) -> String {
        self.equipment.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_is_exact() {
        assert_eq!("Mental".parse::<DrillCategory>().ok(), Some(DrillCategory::Mental));
        assert!("mental".parse::<DrillCategory>().is_err());
        assert!("Speed".parse::<DrillCategory>().is_err());
    }

    #[test]
    fn test_difficulty_parse_accepts_form_casing() {
        assert_eq!("pro".parse::<Difficulty>().ok(), Some(Difficulty::Pro));
        assert_eq!(Difficulty::default(), Difficulty::Intermediate);
    }
}
