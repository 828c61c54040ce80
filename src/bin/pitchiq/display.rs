// ABOUTME: Output formatting helpers for the pitchiq terminal front end
// ABOUTME: Prints dashboard, drills, plans, analyses and scenarios with localized labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pitchiq::app::DashboardSummary;
use pitchiq::content::catalog;
use pitchiq::models::{
    Drill, Language, ScoreBand, TacticalScenario, TrainingPlan, VideoAnalysisResult,
};

const BAR_WIDTH: usize = 20;

fn bar(score: u8) -> String {
    let filled = usize::from(score.min(100)) * BAR_WIDTH / 100;
    format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

/// Dashboard cards, radar values and weekly focus
pub fn dashboard(summary: &DashboardSummary) {
    println!(
        "{}: {} {}",
        summary.training_hours_label, summary.stats.training_hours, summary.hours_unit
    );
    println!(
        "{}: {}",
        summary.drills_done_label, summary.stats.drills_completed
    );
    println!("\n{}", summary.attributes_label);
    for attribute in &summary.attributes {
        println!("  {:<10} {} {:>3}", attribute.label, bar(attribute.score), attribute.score);
    }
    println!("\n{}", summary.weekly_focus_label);
    println!("  {}", summary.weekly_focus);
}

/// One drill card
pub fn drill(drill: &Drill, language: Language) {
    let strings = catalog(language);
    println!("{}", "=".repeat(60));
    println!("{}", drill.title);
    println!(
        "  {} | {} | {}",
        strings.category(drill.category),
        strings.difficulty(drill.difficulty),
        drill.duration
    );
    if let Some(reps) = &drill.reps {
        println!("  {reps}");
    }
    println!("  {}", drill.description);
    if !drill.equipment.is_empty() {
        println!("  [{}]", drill.equipment_summary());
    }
}

/// A weekly plan, day by day
pub fn plan(plan: &TrainingPlan, language: Language) {
    println!("\n{} ({})", plan.title, plan.level);
    for day in &plan.weekly_schedule {
        println!("\n## {}: {}", day.day_name, day.focus);
        for item in &day.drills {
            drill(item, language);
        }
    }
    println!();
}

/// Technique analysis result
pub fn analysis(result: &VideoAnalysisResult) {
    let band = match result.score_band() {
        ScoreBand::High => "high",
        ScoreBand::Low => "needs work",
    };
    println!("\n{}", result.action_type);
    println!("  {} {}/100 ({band})", bar(result.technique_score), result.technique_score);
    println!("\n{}", result.breakdown);
    println!("\n{}", result.corrections);
    println!("\n-> {}", result.drill_recommendation);
}

/// Scenario with numbered options
pub fn scenario(scenario: &TacticalScenario) {
    println!("\n{} [{}]", scenario.title, scenario.formation);
    println!("{}\n", scenario.situation);
    for (index, option) in scenario.options.iter().enumerate() {
        println!("  {}. {}", index + 1, option.text);
    }
}
