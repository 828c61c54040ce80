// ABOUTME: Command implementations for the pitchiq terminal front end
// ABOUTME: Each command drives the app controller and prints the resulting state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use std::io::{self, Write};
use std::ops::ControlFlow;
use std::path::Path;

use anyhow::{bail, Context, Result};
use pitchiq::app::{AppController, DashboardSummary};
use pitchiq::coach::CoachClient;
use pitchiq::config::CoachConfig;
use pitchiq::constants::env_config;
use pitchiq::content::{catalog, initial_stats};
use pitchiq::models::{ChatRole, Difficulty, Language};
use tokio::io::{stdin, AsyncBufReadExt, BufReader};
use tracing::info;

use crate::display;

fn controller(lang: Option<Language>) -> Result<AppController> {
    let config = CoachConfig::from_env()?;
    let language = lang.unwrap_or(config.language);
    info!(model = %config.model, language = %language, "Coach client ready");
    Ok(AppController::new(CoachClient::from_config(&config), language))
}

/// Print the dashboard; needs no API key
pub fn stats(lang: Option<Language>) -> Result<()> {
    let language = match lang {
        Some(language) => language,
        None => env::var(env_config::LANGUAGE)
            .ok()
            .map(|v| v.parse::<Language>())
            .transpose()?
            .unwrap_or_default(),
    };
    display::dashboard(&DashboardSummary::build(&initial_stats(), None, language));
    Ok(())
}

/// Generate and print custom drills
pub async fn drills(lang: Option<Language>, focus: &str, level: Difficulty) -> Result<()> {
    let mut app = controller(lang)?;
    app.set_drill_level(level);
    app.set_drill_prompt(focus);
    app.open_drill_form();

    let count = app.generate_drills().await?;
    let language = app.language();
    for drill in &app.state().drills.drills[..count] {
        display::drill(drill, language);
    }
    Ok(())
}

/// Generate and print a weekly plan
pub async fn plan(
    lang: Option<Language>,
    goal: Option<String>,
    days: Option<String>,
    level: Difficulty,
) -> Result<()> {
    let mut app = controller(lang)?;
    app.set_drill_level(level);
    if let Some(goal) = goal {
        app.set_plan_goal(goal);
    }
    if let Some(days) = days {
        app.set_plan_days(days);
    }
    app.open_plan_form();

    app.generate_plan().await?;
    let language = app.language();
    if let Some(plan) = &app.state().plan.active {
        display::plan(plan, language);
    }
    display::dashboard(&app.dashboard());
    Ok(())
}

/// Analyze a clip and print the result
pub async fn analyze(lang: Option<Language>, file: &Path) -> Result<()> {
    let mut app = controller(lang)?;
    app.select_video(file)
        .await
        .with_context(|| format!("cannot use {}", file.display()))?;

    println!("{}", catalog(app.language()).loading);
    app.analyze_video().await?;
    if let Some(result) = &app.state().video.result {
        display::analysis(result);
    }
    Ok(())
}

/// Load a scenario, read the player's choice and print the coach's verdict
pub async fn tactics(lang: Option<Language>) -> Result<()> {
    let mut app = controller(lang)?;
    app.load_new_scenario().await?;

    let Some(scenario) = app.state().tactics.scenario.clone() else {
        bail!("no scenario was loaded");
    };
    display::scenario(&scenario);

    print!("> ");
    io::stdout().flush()?;
    let mut lines = BufReader::new(stdin()).lines();
    let Some(answer) = lines.next_line().await? else {
        return Ok(());
    };
    let choice: usize = answer
        .trim()
        .parse()
        .with_context(|| format!("`{}` is not an option number", answer.trim()))?;
    let Some(option) = choice.checked_sub(1).and_then(|i| scenario.options.get(i)) else {
        bail!("choose a number between 1 and {}", scenario.options.len());
    };

    println!("{}", catalog(app.language()).loading);
    app.choose_option(&option.id).await?;
    if let Some(feedback) = &app.state().tactics.feedback {
        println!("\n{feedback}");
    }
    Ok(())
}

/// Interactive coach chat; `/quit` or end of input leaves
pub async fn chat(lang: Option<Language>) -> Result<()> {
    let mut app = controller(lang)?;
    if let Some(welcome) = app.state().chat.messages.first() {
        println!("{}\n", welcome.text);
    }

    let mut lines = BufReader::new(stdin()).lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "/quit" {
            break;
        }

        let mut seen = app.state().chat.messages.len();
        let mut printed = 0;
        let outcome = app
            .send_message(line, |messages| {
                if messages.len() != seen {
                    seen = messages.len();
                    printed = 0;
                }
                if let Some(last) = messages.last().filter(|m| m.role == ChatRole::Model) {
                    print!("{}", &last.text[printed..]);
                    printed = last.text.len();
                    let _ = io::stdout().flush();
                }
                ControlFlow::Continue(())
            })
            .await;
        println!("\n");
        if let Err(e) = outcome {
            info!(error = %e, "Chat turn failed");
        }
    }
    Ok(())
}
