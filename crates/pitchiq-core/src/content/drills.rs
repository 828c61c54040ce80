// ABOUTME: Seed drill library and initial dashboard statistics per language
// ABOUTME: Seed drills keep stable ids 1..=3 so both languages line up
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::{Difficulty, Drill, DrillCategory, Language, UserStats};

/// Starting dashboard statistics
#[must_use]
pub const fn initial_stats() -> UserStats {
    UserStats {
        technical: 65,
        physical: 70,
        tactical: 50,
        mental: 60,
        training_hours: 12.5,
        drills_completed: 24,
    }
}

fn seed(
    id: &str,
    title: &str,
    category: DrillCategory,
    difficulty: Difficulty,
    duration: &str,
    description: &str,
    equipment: &[&str],
) -> Drill {
    Drill {
        id: id.to_owned(),
        title: title.to_owned(),
        category,
        difficulty,
        duration: duration.to_owned(),
        description: description.to_owned(),
        equipment: equipment.iter().map(|e| (*e).to_owned()).collect(),
        reps: None,
    }
}

/// Seed drill library for a language
#[must_use]
pub fn seed_drills(language: Language) -> Vec<Drill> {
    match language {
        Language::En => vec![
            seed(
                "1",
                "Cone Weave & Shoot",
                DrillCategory::Technical,
                Difficulty::Beginner,
                "15 mins",
                "Set up 5 cones in a line 1m apart. Dribble through using inside/outside of foot, then shoot at goal.",
                &["5 Cones", "1 Ball", "Goal"],
            ),
            seed(
                "2",
                "Box-to-Box Stamina",
                DrillCategory::Physical,
                Difficulty::Intermediate,
                "20 mins",
                "Sprint from one 18-yard box line to the other. Jog back. Repeat 10 times. Rest 2 mins. Do 2 sets.",
                &["Field"],
            ),
            seed(
                "3",
                "Wall Pass Mastery",
                DrillCategory::Technical,
                Difficulty::Intermediate,
                "10 mins",
                "Pass against a wall using one touch. Alternate feet. Focus on locking the ankle.",
                &["1 Ball", "Wall"],
            ),
        ],
        Language::Zh => vec![
            seed(
                "1",
                "绕桩射门",
                DrillCategory::Technical,
                Difficulty::Beginner,
                "15 分钟",
                "将5个标志桶排成一列，间距1米。使用脚内侧/外侧绕桩盘带，然后射门。",
                &["5个标志桶", "1个足球", "球门"],
            ),
            seed(
                "2",
                "禁区往返跑",
                DrillCategory::Physical,
                Difficulty::Intermediate,
                "20 分钟",
                "从一个18码线冲刺到另一个。慢跑返回。重复10次。休息2分钟。做2组。",
                &["足球场"],
            ),
            seed(
                "3",
                "墙球练习",
                DrillCategory::Technical,
                Difficulty::Intermediate,
                "10 分钟",
                "对着墙壁进行一脚传球。左右脚交替。专注于锁紧脚踝。",
                &["1个足球", "墙壁"],
            ),
        ],
    }
}
