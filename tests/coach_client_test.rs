// ABOUTME: Integration tests for the coaching client over a scripted provider
// ABOUTME: Covers request shape, decoding, id assignment and degraded fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::collections::HashSet;

use common::{
    analysis_json, client, drill_list_json, init_test_logging, plan_json, scenario_json, Reply,
    ScriptedProvider,
};
use pitchiq::coach::VideoClip;
use pitchiq::errors::ErrorCode;
use pitchiq::llm::{LlmCapabilities, MessageRole, ResponseFormat};
use pitchiq::models::{Difficulty, DrillCategory, Language, ScoreBand};
use serde_json::json;

fn clip() -> VideoClip {
    VideoClip::from_bytes("shot.mp4", "video/mp4", b"not really a video").unwrap()
}

// ============================================================================
// Drills
// ============================================================================

#[tokio::test]
async fn test_drills_decode_with_fresh_generated_ids() {
    init_test_logging();
    let provider = ScriptedProvider::new(vec![
        Reply::json(&drill_list_json()),
        Reply::json(&drill_list_json()),
    ]);
    let coach = client(&provider);

    let first = coach
        .try_generate_custom_drills("half turns", "Advanced", Language::En)
        .await
        .unwrap();
    let second = coach
        .generate_custom_drills("half turns", "Advanced", Language::En)
        .await;

    assert_eq!(first.len(), 3);
    assert_eq!(first[0].title, "Half-Turn Receiving");
    assert_eq!(first[0].category, DrillCategory::Technical);
    assert_eq!(first[0].difficulty, Difficulty::Advanced);
    assert_eq!(first[0].reps.as_deref(), Some("4 x 2 mins"));

    let ids: HashSet<_> = first.iter().chain(&second).map(|d| d.id.clone()).collect();
    assert_eq!(ids.len(), 6, "every generated drill gets its own id");
    assert!(ids.iter().all(|id| id.starts_with("gen-")));
}

#[tokio::test]
async fn test_drill_request_uses_schema_and_drill_temperature() {
    let provider = ScriptedProvider::new(vec![Reply::json(&drill_list_json())]);
    client(&provider)
        .generate_custom_drills("weak foot finishing", "Beginner", Language::Zh)
        .await;

    let requests = provider.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.temperature, Some(0.5));
    assert_eq!(request.model.as_deref(), Some("scripted-model"));
    assert!(!request.stream);
    match &request.response_format {
        ResponseFormat::Json { schema } => assert_eq!(schema["type"], "ARRAY"),
        ResponseFormat::Text => panic!("drill request must be schema constrained"),
    }

    let prompt = &request.messages[0].content;
    assert_eq!(request.messages[0].role, MessageRole::User);
    assert!(prompt.contains("weak foot finishing"));
    assert!(prompt.contains("Beginner"));
    assert!(prompt.ends_with("Respond in Chinese."));
}

#[tokio::test]
async fn test_blank_focus_never_reaches_provider() {
    let provider = ScriptedProvider::new(vec![]);
    let err = client(&provider)
        .try_generate_custom_drills("   ", "Beginner", Language::En)
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert_eq!(provider.request_count(), 0);
}

#[tokio::test]
async fn test_malformed_drills_degrade_to_empty_list() {
    init_test_logging();
    let provider = ScriptedProvider::new(vec![
        Reply::Text("definitely not json".into()),
        Reply::json(&json!([{ "title": "Missing everything" }])),
        Reply::Fail(ErrorCode::ExternalRateLimited),
    ]);
    let coach = client(&provider);

    let err = coach
        .try_generate_custom_drills("pressing", "Beginner", Language::En)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::SchemaMismatch);

    assert!(coach
        .generate_custom_drills("pressing", "Beginner", Language::En)
        .await
        .is_empty());
    assert!(coach
        .generate_custom_drills("pressing", "Beginner", Language::En)
        .await
        .is_empty());
}

// ============================================================================
// Training Plan
// ============================================================================

#[tokio::test]
async fn test_training_plan_assigns_plan_ids() {
    let provider = ScriptedProvider::new(vec![Reply::json(&plan_json())]);
    let plan = client(&provider)
        .generate_training_plan("Intermediate", "Ball mastery", "3 days/week", Language::En)
        .await
        .unwrap();

    assert_eq!(plan.title, "Ball Mastery Week");
    assert_eq!(plan.weekly_schedule.len(), 3);
    assert_eq!(plan.total_drills(), 3);
    assert!(plan.weekly_schedule[2].drills.is_empty());
    assert!(plan
        .weekly_schedule
        .iter()
        .flat_map(|day| &day.drills)
        .all(|d| d.id.starts_with("plan-")));

    let prompt = &provider.requests()[0].messages[0].content;
    assert!(prompt.contains("Ball mastery"));
    assert!(prompt.contains("3 days/week"));
    assert_eq!(provider.requests()[0].temperature, None);
}

#[tokio::test]
async fn test_training_plan_failures_become_none() {
    let provider = ScriptedProvider::new(vec![
        Reply::json(&json!({ "title": "Empty", "level": "Pro", "weeklySchedule": [] })),
        Reply::Fail(ErrorCode::ExternalServiceUnavailable),
    ]);
    let coach = client(&provider);

    for _ in 0..2 {
        assert!(coach
            .generate_training_plan("Pro", "Speed", "2 days/week", Language::En)
            .await
            .is_none());
    }
}

// ============================================================================
// Video Analysis
// ============================================================================

#[tokio::test]
async fn test_video_analysis_sends_inline_clip() {
    let provider = ScriptedProvider::new(vec![Reply::json(&analysis_json(82))]);
    let result = client(&provider)
        .try_analyze_video_technique(&clip(), Language::En)
        .await
        .unwrap();

    assert_eq!(result.technique_score, 82);
    assert_eq!(result.score_band(), ScoreBand::High);
    assert_eq!(result.drill_recommendation, "Volley Rebounds");

    let request = &provider.requests()[0];
    assert!(request.has_media());
    let media = &request.messages[0].media[0];
    assert_eq!(media.mime_type, "video/mp4");
    assert_eq!(media.data, clip().data_base64);
}

#[tokio::test]
async fn test_video_analysis_rejects_out_of_range_score() {
    let mut payload = analysis_json(0);
    payload["techniqueScore"] = json!(140);
    let provider = ScriptedProvider::new(vec![Reply::json(&payload)]);

    let err = client(&provider)
        .try_analyze_video_technique(&clip(), Language::En)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::SchemaMismatch);
}

#[tokio::test]
async fn test_video_analysis_requires_vision() {
    let provider = ScriptedProvider::with_capabilities(
        vec![Reply::json(&analysis_json(60))],
        LlmCapabilities::STREAMING | LlmCapabilities::JSON_MODE,
    );
    let coach = client(&provider);

    let err = coach
        .try_analyze_video_technique(&clip(), Language::En)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::UnsupportedCapability);
    assert_eq!(provider.request_count(), 0);
    assert!(coach
        .analyze_video_technique(&clip(), Language::En)
        .await
        .is_none());
}

// ============================================================================
// Tactics
// ============================================================================

#[tokio::test]
async fn test_tactical_scenario_keeps_distinct_option_ids() {
    let provider = ScriptedProvider::new(vec![Reply::json(&scenario_json())]);
    let scenario = client(&provider)
        .generate_tactical_scenario(Language::En)
        .await
        .unwrap();

    assert!(scenario.id.starts_with("scenario-"));
    let ids: Vec<_> = scenario.options.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, ["a", "b", "c"]);
}

#[tokio::test]
async fn test_tactical_scenario_repairs_missing_and_duplicate_ids() {
    let payload = json!({
        "title": "Build-up under pressure",
        "situation": "Their striker presses your center-back.",
        "formation": "4-2-3-1",
        "options": [
            { "id": "x", "text": "Play into the pivot" },
            { "id": "x", "text": "Go long" },
            { "text": "Recycle to the keeper" }
        ]
    });
    let provider = ScriptedProvider::new(vec![Reply::json(&payload)]);
    let scenario = client(&provider)
        .try_generate_tactical_scenario(Language::En)
        .await
        .unwrap();

    let ids: HashSet<_> = scenario.options.iter().map(|o| o.id.clone()).collect();
    assert_eq!(ids.len(), 3);
    assert!(!scenario.options.iter().any(|o| o.id.trim().is_empty()));
}

#[tokio::test]
async fn test_evaluate_decision_returns_feedback_text() {
    let provider = ScriptedProvider::new(vec![Reply::Text(
        "  Good choice: the runner has space behind.  ".into(),
    )]);
    let feedback = client(&provider)
        .evaluate_tactical_decision("3v2 break", "Slip the runner in", Language::En)
        .await;

    assert_eq!(feedback, "Good choice: the runner has space behind.");
    let request = &provider.requests()[0];
    assert!(matches!(request.response_format, ResponseFormat::Text));
    assert!(request.messages[0].content.contains("Slip the runner in"));
}

#[tokio::test]
async fn test_evaluate_decision_fallbacks_are_localized() {
    init_test_logging();
    let provider = ScriptedProvider::new(vec![
        Reply::Text(String::new()),
        Reply::Fail(ErrorCode::ExternalServiceUnavailable),
        Reply::Fail(ErrorCode::ExternalAuthFailed),
    ]);
    let coach = client(&provider);

    assert_eq!(
        coach
            .evaluate_tactical_decision("s", "d", Language::En)
            .await,
        "Analysis unavailable."
    );
    assert_eq!(
        coach
            .evaluate_tactical_decision("s", "d", Language::En)
            .await,
        "Error evaluating decision."
    );
    let chinese = coach.evaluate_tactical_decision("s", "d", Language::Zh).await;
    assert_ne!(chinese, "Error evaluating decision.");
    assert!(!chinese.is_empty());
}

#[tokio::test]
async fn test_structured_calls_require_json_mode() {
    let provider =
        ScriptedProvider::with_capabilities(vec![], LlmCapabilities::streaming_only());
    let err = client(&provider)
        .try_generate_tactical_scenario(Language::En)
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::UnsupportedCapability);
    assert_eq!(provider.request_count(), 0);
}
