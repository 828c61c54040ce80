// ABOUTME: Integration tests for the application controller state transitions
// ABOUTME: Drives every user action against a scripted provider and inspects the resulting state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::ops::ControlFlow;
use std::sync::Arc;

use common::{
    analysis_json, client, drill_list_json, init_test_logging, plan_json, scenario_json, Reply,
    ScriptedProvider,
};
use pitchiq::app::AppController;
use pitchiq::content::{catalog, seed_drills};
use pitchiq::errors::ErrorCode;
use pitchiq::models::{ChatRole, Difficulty, Language, ScoreBand, Theme, View};

fn controller(provider: &Arc<ScriptedProvider>, language: Language) -> AppController {
    init_test_logging();
    AppController::new(client(provider), language)
}

fn ignore(_: &[pitchiq::models::ChatMessage]) -> ControlFlow<()> {
    ControlFlow::Continue(())
}

// ============================================================================
// Settings
// ============================================================================

#[test]
fn test_initial_state() {
    let provider = ScriptedProvider::new(vec![]);
    let app = controller(&provider, Language::En);
    let state = app.state();

    assert_eq!(state.view, View::Dashboard);
    assert_eq!(app.theme(), Theme::Dark);
    assert_eq!(state.drills.drills, seed_drills(Language::En));
    assert_eq!(state.chat.messages.len(), 1);
    assert_eq!(state.chat.messages[0].role, ChatRole::Model);
    assert_eq!(state.chat.messages[0].text, catalog(Language::En).welcome);
    assert!(state.plan.active.is_none());
}

#[tokio::test]
async fn test_language_switch_resets_chat_and_library() {
    let provider = ScriptedProvider::new(vec![
        Reply::Fragments(vec!["Stay compact."]),
        Reply::json(&drill_list_json()),
    ]);
    let mut app = controller(&provider, Language::En);

    app.send_message("Defending tips?", ignore).await.unwrap();
    app.set_drill_prompt("pressing");
    app.generate_drills().await.unwrap();
    assert_eq!(app.state().chat.messages.len(), 3);
    assert_eq!(app.state().drills.drills.len(), 6);

    app.toggle_language();

    assert_eq!(app.language(), Language::Zh);
    let messages = &app.state().chat.messages;
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].text, catalog(Language::Zh).welcome);
    assert_eq!(app.state().drills.drills, seed_drills(Language::Zh));
    assert!(app.context().chat().history().is_empty());
    assert!(app
        .context()
        .chat()
        .system_instruction()
        .contains("Chinese (Simplified)"));
}

#[test]
fn test_setting_same_language_keeps_transcript() {
    let provider = ScriptedProvider::new(vec![]);
    let mut app = controller(&provider, Language::En);
    app.set_view(View::Coach);
    app.toggle_theme();

    app.set_language(Language::En);

    assert_eq!(app.state().view, View::Coach);
    assert_eq!(app.theme(), Theme::Light);
    assert_eq!(app.language(), Language::En);
}

// ============================================================================
// Drills and Plans
// ============================================================================

#[tokio::test]
async fn test_generated_drills_are_prepended_and_form_closes() {
    let provider = ScriptedProvider::new(vec![Reply::json(&drill_list_json())]);
    let mut app = controller(&provider, Language::En);
    app.open_drill_form();
    app.set_drill_level(Difficulty::Pro);
    app.set_drill_prompt("scanning before receiving");

    let added = app.generate_drills().await.unwrap();

    let drills = &app.state().drills;
    assert_eq!(added, 3);
    assert_eq!(drills.drills.len(), 6);
    assert_eq!(drills.drills[0].title, "Half-Turn Receiving");
    assert_eq!(drills.drills[3].id, "1");
    assert!(!drills.form_open);
    assert!(drills.prompt.is_empty());
    assert!(!drills.generating);
    assert!(drills.notice.is_none());
    assert!(provider.requests()[0].messages[0].content.contains("Pro"));
}

#[tokio::test]
async fn test_empty_drill_prompt_never_calls_client() {
    let provider = ScriptedProvider::new(vec![]);
    let mut app = controller(&provider, Language::En);
    app.set_drill_prompt("   ");

    let err = app.generate_drills().await.unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert_eq!(provider.request_count(), 0);
    assert_eq!(app.state().drills.drills.len(), 3);
}

#[tokio::test]
async fn test_failed_drill_generation_keeps_library_and_sets_notice() {
    let provider = ScriptedProvider::new(vec![
        Reply::Fail(ErrorCode::ExternalRateLimited),
        Reply::json(&serde_json::json!([])),
    ]);
    let mut app = controller(&provider, Language::En);
    app.open_drill_form();
    app.set_drill_prompt("crossing");

    let err = app.generate_drills().await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalRateLimited);
    let drills = &app.state().drills;
    assert_eq!(drills.drills, seed_drills(Language::En));
    assert!(drills.form_open);
    assert_eq!(drills.prompt, "crossing");
    assert!(!drills.generating);
    assert_eq!(
        drills.notice.as_ref().map(|n| n.code),
        Some(ErrorCode::ExternalRateLimited)
    );

    let err = app.generate_drills().await.unwrap_err();
    assert_eq!(err.code, ErrorCode::EmptyResponse);
    assert_eq!(app.state().drills.drills.len(), 3);
}

#[tokio::test]
async fn test_plan_becomes_weekly_focus() {
    let provider = ScriptedProvider::new(vec![Reply::json(&plan_json())]);
    let mut app = controller(&provider, Language::En);
    app.open_plan_form();
    app.set_plan_goal("Ball mastery");
    app.set_plan_days("3 days/week");

    app.generate_plan().await.unwrap();

    let plan = &app.state().plan;
    assert!(!plan.form_open);
    assert_eq!(plan.active.as_ref().unwrap().title, "Ball Mastery Week");
    let dashboard = app.dashboard();
    assert_eq!(dashboard.weekly_focus_label, "Weekly Focus");
    assert!(dashboard.weekly_focus.contains("Ball Mastery Week"));

    app.clear_plan();
    assert!(app.state().plan.active.is_none());
    assert_eq!(app.dashboard().weekly_focus, catalog(Language::En).no_plan);
}

#[tokio::test]
async fn test_failed_plan_keeps_previous_plan() {
    let provider = ScriptedProvider::new(vec![
        Reply::json(&plan_json()),
        Reply::Text("{ broken".into()),
    ]);
    let mut app = controller(&provider, Language::En);
    app.generate_plan().await.unwrap();

    let err = app.generate_plan().await.unwrap_err();

    assert_eq!(err.code, ErrorCode::SchemaMismatch);
    assert_eq!(
        app.state().plan.active.as_ref().unwrap().title,
        "Ball Mastery Week"
    );
    assert!(app.state().plan.notice.is_some());
}

// ============================================================================
// Video
// ============================================================================

#[tokio::test]
async fn test_video_analysis_result_and_band() {
    let provider = ScriptedProvider::new(vec![Reply::json(&analysis_json(82))]);
    let mut app = controller(&provider, Language::En);

    let err = app.analyze_video().await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert_eq!(provider.request_count(), 0);

    app.select_video_bytes("volley.mp4", "video/mp4", b"frames")
        .unwrap();
    app.analyze_video().await.unwrap();

    let result = app.state().video.result.as_ref().unwrap();
    assert_eq!(result.technique_score, 82);
    assert_eq!(result.score_band(), ScoreBand::High);
    assert!(!app.state().video.analyzing);

    app.select_video_bytes("other.webm", "video/webm", b"more frames")
        .unwrap();
    assert!(app.state().video.result.is_none());
}

#[tokio::test]
async fn test_video_failure_sets_notice() {
    let provider = ScriptedProvider::new(vec![Reply::Fail(ErrorCode::ExternalServiceUnavailable)]);
    let mut app = controller(&provider, Language::En);
    app.select_video_bytes("shot.mov", "video/quicktime", b"frames")
        .unwrap();

    assert!(app.analyze_video().await.is_err());
    let video = &app.state().video;
    assert!(video.result.is_none());
    assert!(video.clip.is_some());
    assert_eq!(
        video.notice.as_ref().map(|n| n.code),
        Some(ErrorCode::ExternalServiceUnavailable)
    );
}

#[test]
fn test_non_video_bytes_rejected() {
    let provider = ScriptedProvider::new(vec![]);
    let mut app = controller(&provider, Language::En);

    let err = app
        .select_video_bytes("notes.txt", "text/plain", b"hello")
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(app.state().video.clip.is_none());
}

// ============================================================================
// Tactics
// ============================================================================

#[tokio::test]
async fn test_tactical_flow_locks_options_and_resets() {
    let provider = ScriptedProvider::new(vec![
        Reply::json(&scenario_json()),
        Reply::Text("Slipping the runner exploits the space behind.".into()),
        Reply::json(&scenario_json()),
    ]);
    let mut app = controller(&provider, Language::En);

    app.load_new_scenario().await.unwrap();
    let first_id = app.state().tactics.scenario.as_ref().unwrap().id.clone();
    assert!(!app.state().tactics.options_locked());

    app.choose_option("b").await.unwrap();
    let tactics = &app.state().tactics;
    assert!(tactics.options_locked());
    assert_eq!(tactics.selected_option.as_deref(), Some("b"));
    assert_eq!(
        tactics.feedback.as_deref(),
        Some("Slipping the runner exploits the space behind.")
    );
    assert!(provider.requests()[1].messages[0]
        .content
        .contains("Slip the runner in behind"));

    let err = app.choose_option("a").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert_eq!(provider.request_count(), 2);

    app.load_new_scenario().await.unwrap();
    let tactics = &app.state().tactics;
    assert!(tactics.feedback.is_none());
    assert!(tactics.selected_option.is_none());
    assert_ne!(tactics.scenario.as_ref().unwrap().id, first_id);
}

#[tokio::test]
async fn test_choose_option_validation() {
    let provider = ScriptedProvider::new(vec![Reply::json(&scenario_json())]);
    let mut app = controller(&provider, Language::En);

    let err = app.choose_option("a").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);

    app.load_new_scenario().await.unwrap();
    let err = app.choose_option("zzz").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(!app.state().tactics.options_locked());
}

#[tokio::test]
async fn test_failed_evaluation_shows_fallback() {
    let provider = ScriptedProvider::new(vec![
        Reply::json(&scenario_json()),
        Reply::Fail(ErrorCode::ExternalServiceError),
    ]);
    let mut app = controller(&provider, Language::En);
    app.load_new_scenario().await.unwrap();

    app.choose_option("c").await.unwrap();

    let tactics = &app.state().tactics;
    assert!(tactics.options_locked());
    assert_eq!(
        tactics.feedback.as_deref(),
        Some(catalog(Language::En).evaluation_error)
    );
    assert!(!tactics.evaluating);
}

#[tokio::test]
async fn test_failed_scenario_keeps_previous() {
    let provider = ScriptedProvider::new(vec![
        Reply::json(&scenario_json()),
        Reply::Fail(ErrorCode::ExternalServiceUnavailable),
    ]);
    let mut app = controller(&provider, Language::En);
    app.load_new_scenario().await.unwrap();

    assert!(app.load_new_scenario().await.is_err());

    let tactics = &app.state().tactics;
    assert_eq!(
        tactics.scenario.as_ref().unwrap().title,
        "3v2 Counter Attack"
    );
    assert!(tactics.notice.is_some());
    assert!(!tactics.loading_scenario);
}

// ============================================================================
// Chat
// ============================================================================

#[tokio::test]
async fn test_chat_streams_into_transcript() {
    let provider = ScriptedProvider::new(vec![Reply::Fragments(vec!["Hel", "lo", " there"])]);
    let mut app = controller(&provider, Language::En);

    let mut snapshots = Vec::new();
    app.send_message("Hi coach", |messages| {
        snapshots.push(messages.last().map(|m| m.text.clone()).unwrap_or_default());
        ControlFlow::Continue(())
    })
    .await
    .unwrap();

    assert_eq!(snapshots, ["Hi coach", "", "Hel", "Hello", "Hello there"]);
    let messages = &app.state().chat.messages;
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1].role, ChatRole::User);
    assert_eq!(messages[2].role, ChatRole::Model);
    assert_eq!(messages[2].text, "Hello there");
    assert!(!app.state().chat.typing);
    assert_eq!(app.context().chat().history().len(), 2);
}

#[tokio::test]
async fn test_observer_break_cancels_reply() {
    let provider = ScriptedProvider::new(vec![Reply::Fragments(vec!["One", " two", " three"])]);
    let mut app = controller(&provider, Language::En);

    app.send_message("Count", |messages| {
        let last = messages.last().map(|m| m.text.as_str()).unwrap_or_default();
        if last == "One" {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    })
    .await
    .unwrap();

    let messages = &app.state().chat.messages;
    assert_eq!(messages.last().unwrap().text, "One");
    let history = app.context().chat().history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[1].content, "One");
}

#[tokio::test]
async fn test_chat_failure_appends_connection_error() {
    let provider = ScriptedProvider::new(vec![Reply::Fail(ErrorCode::ExternalServiceUnavailable)]);
    let mut app = controller(&provider, Language::En);

    let err = app.send_message("Hello?", ignore).await.unwrap_err();

    assert_eq!(err.code, ErrorCode::ExternalServiceUnavailable);
    let messages = &app.state().chat.messages;
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1].text, "Hello?");
    assert_eq!(messages[2].role, ChatRole::Model);
    assert_eq!(messages[2].text, "Connection error.");
    assert!(!app.state().chat.typing);
    assert!(app.state().chat.notice.is_some());
    assert!(app.context().chat().history().is_empty());
}

#[tokio::test]
async fn test_reply_broken_mid_stream_keeps_partial_text() {
    let provider = ScriptedProvider::new(vec![Reply::BrokenStream(vec!["Good "])]);
    let mut app = controller(&provider, Language::En);

    let err = app.send_message("Heading drills?", ignore).await.unwrap_err();

    assert_eq!(err.code, ErrorCode::ExternalServiceError);
    let texts: Vec<&str> = app
        .state()
        .chat
        .messages
        .iter()
        .map(|m| m.text.as_str())
        .collect();
    assert_eq!(
        texts,
        [
            catalog(Language::En).welcome,
            "Heading drills?",
            "Good ",
            "Connection error."
        ]
    );
    assert!(!app.state().chat.typing);
    assert_eq!(
        app.state().chat.notice.as_ref().map(|n| n.code),
        Some(ErrorCode::ExternalServiceError)
    );
    assert!(app.context().chat().history().is_empty());
}

#[tokio::test]
async fn test_blank_chat_message_is_ignored() {
    let provider = ScriptedProvider::new(vec![]);
    let mut app = controller(&provider, Language::En);

    assert!(app.send_message("   ", ignore).await.is_err());
    assert_eq!(app.state().chat.messages.len(), 1);
    assert_eq!(provider.request_count(), 0);
}
