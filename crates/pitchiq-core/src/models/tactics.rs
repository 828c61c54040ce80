// ABOUTME: Tactical decision scenario with a fixed set of options
// ABOUTME: One active scenario at a time, replaced wholesale on request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// A decision the player can make
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioOption {
    /// Option identifier, unique within its scenario
    pub id: String,
    /// Decision text
    pub text: String,
}

/// A tactical situation on the pitch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TacticalScenario {
    /// Unique identifier within the session
    pub id: String,
    /// Scenario name
    pub title: String,
    /// Description of the situation
    pub situation: String,
    /// Formations involved
    pub formation: String,
    /// Decisions offered, in display order
    pub options: Vec<ScenarioOption>,
}

impl TacticalScenario {
    /// Look up an option by id
    #[must_use]
    pub fn option(&self, option_id: &str) -> Option<&ScenarioOption> {
        self.options.iter().find(|o| o.id == option_id)
    }
}
