// ABOUTME: PitchIQ terminal front end for the football coaching companion
// ABOUTME: Parses commands, sets up logging and configuration, and dispatches to the controller
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Dashboard (no API key needed)
//! pitchiq stats
//!
//! # Three drills for a focus area
//! pitchiq --lang en drills --focus "weak foot finishing" --level advanced
//!
//! # Weekly plan
//! pitchiq plan --goal "Speed & Agility" --days "4 days/week"
//!
//! # Technique analysis of a clip
//! pitchiq analyze ./shot.mp4
//!
//! # Decision simulator and coach chat
//! pitchiq tactics
//! pitchiq chat
//! ```

mod commands;
mod display;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pitchiq::logging::LoggingConfig;
use pitchiq::models::{Difficulty, Language};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pitchiq",
    about = "PitchIQ football coaching companion",
    long_about = "Drills, weekly plans, video technique analysis, tactical scenarios and a streamed coach chat."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Language for prompts and replies (en or zh); defaults to PITCHIQ_LANGUAGE
    #[arg(long, global = true)]
    lang: Option<Language>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Show the dashboard
    Stats,

    /// Generate custom drills
    Drills {
        /// What the drills should work on
        #[arg(long)]
        focus: String,

        /// Player level
        #[arg(long, default_value = "intermediate")]
        level: Difficulty,
    },

    /// Generate a one-week training plan
    Plan {
        /// Primary goal
        #[arg(long)]
        goal: Option<String>,

        /// Availability, e.g. "3 days/week"
        #[arg(long)]
        days: Option<String>,

        /// Player level
        #[arg(long, default_value = "intermediate")]
        level: Difficulty,
    },

    /// Analyze the technique in a video clip
    Analyze {
        /// Path to the clip
        file: PathBuf,
    },

    /// Play through a tactical scenario
    Tactics,

    /// Chat with the coach
    Chat,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".into();
    }
    logging.init()?;

    match cli.command {
        Command::Stats => commands::stats(cli.lang),
        Command::Drills { focus, level } => commands::drills(cli.lang, &focus, level).await,
        Command::Plan { goal, days, level } => commands::plan(cli.lang, goal, days, level).await,
        Command::Analyze { file } => commands::analyze(cli.lang, &file).await,
        Command::Tactics => commands::tactics(cli.lang).await,
        Command::Chat => commands::chat(cli.lang).await,
    }
}
