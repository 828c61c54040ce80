// ABOUTME: Per-language feature strings used by the controller and the terminal front end
// ABOUTME: Covers the welcome message, fallbacks, dashboard lines and enum labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::{Difficulty, DrillCategory, Language};

/// Strings for one language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog {
    /// First coach message of every transcript
    pub welcome: &'static str,
    /// Placeholder shown while a response is pending
    pub loading: &'static str,
    /// Appended as a model message when a chat turn fails
    pub connection_error: &'static str,
    /// Tactical feedback when the model returns no text
    pub analysis_unavailable: &'static str,
    /// Tactical feedback when the evaluation call fails
    pub evaluation_error: &'static str,
    /// Dashboard line without an active plan
    pub no_plan: &'static str,
    /// Dashboard prefix for the active plan title
    pub following: &'static str,
    /// Unit label for training hours
    pub hours: &'static str,
    /// Typing indicator
    pub coach_typing: &'static str,
    /// Dashboard heading for training hours
    pub training_hours: &'static str,
    /// Dashboard heading for completed drills
    pub drills_done: &'static str,
    /// Dashboard heading for the attribute radar
    pub player_attributes: &'static str,
    /// Dashboard heading for the plan line
    pub weekly_focus: &'static str,
    categories: [&'static str; 4],
    difficulties: [&'static str; 4],
}

impl Catalog {
    /// Localized label for a category
    #[must_use]
    pub const fn category(&self, category: DrillCategory) -> &'static str {
        self.categories[category as usize]
    }

    /// Localized label for a difficulty
    #[must_use]
    pub const fn difficulty(&self, difficulty: Difficulty) -> &'static str {
        self.difficulties[difficulty as usize]
    }
}

const EN: Catalog = Catalog {
    welcome: "Welcome to PitchIQ. I'm your tactical analyst. Ask me about playing positions, tactical concepts, or mental preparation.",
    loading: "Loading...",
    connection_error: "Connection error.",
    analysis_unavailable: "Analysis unavailable.",
    evaluation_error: "Error evaluating decision.",
    no_plan: "No active plan. Generate one in Drills!",
    following: "Following",
    hours: "hrs",
    coach_typing: "Coach is typing...",
    training_hours: "Training Hours",
    drills_done: "Drills Done",
    player_attributes: "Player Attributes",
    weekly_focus: "Weekly Focus",
    categories: ["Technical", "Physical", "Tactical", "Mental"],
    difficulties: ["Beginner", "Intermediate", "Advanced", "Pro"],
};

const ZH: Catalog = Catalog {
    welcome: "欢迎来到PitchIQ。我是你的战术分析师。你可以问我关于位置、战术概念或心理准备的问题。",
    loading: "加载中...",
    connection_error: "连接错误。",
    analysis_unavailable: "暂无分析。",
    evaluation_error: "评估决策时出错。",
    no_plan: "暂无计划。请在训练页面生成！",
    following: "正在执行",
    hours: "小时",
    coach_typing: "教练正在输入...",
    training_hours: "训练时长",
    drills_done: "完成训练",
    player_attributes: "球员属性",
    weekly_focus: "本周重点",
    categories: ["技术", "体能", "战术", "心理"],
    difficulties: ["初学者", "中级", "高级", "职业"],
};

/// String table for a language
#[must_use]
pub const fn catalog(language: Language) -> &'static Catalog {
    match language {
        Language::En => &EN,
        Language::Zh => &ZH,
    }
}
