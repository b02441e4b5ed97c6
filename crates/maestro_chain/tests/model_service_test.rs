//! Tests for single-call generation with cross-provider fallback.

mod test_utils;

use maestro_chain::{ModelService, ModelServiceConfig};
use maestro_core::{ErrorCode, GenerationRequest, Provider};
use test_utils::{MockDriver, driver_set, err, ok};

fn request(prompt: &str) -> GenerationRequest {
    GenerationRequest::builder().prompt(prompt).build().unwrap()
}

fn service(
    gemini: &std::sync::Arc<MockDriver>,
    claude: &std::sync::Arc<MockDriver>,
) -> ModelService {
    ModelService::new(
        driver_set(gemini, claude),
        ModelServiceConfig::builder().build().unwrap(),
    )
}

#[tokio::test]
async fn primary_success_skips_fallback() {
    test_utils::init_tracing();
    let gemini = MockDriver::scripted(Provider::Gemini, vec![ok("primary answer")]);
    let claude = MockDriver::scripted(Provider::Claude, vec![]);

    let response = service(&gemini, &claude)
        .generate(Provider::Gemini, &request("hello"))
        .await;

    assert!(*response.outcome().success());
    assert_eq!(response.outcome().content(), "primary answer");
    assert_eq!(*response.model_used(), Provider::Gemini);
    assert!(!*response.used_fallback());
    assert_eq!(gemini.calls(), 1);
    assert_eq!(claude.calls(), 0);
}

#[tokio::test]
async fn fallback_content_wins_when_primary_fails() {
    let gemini = MockDriver::scripted(Provider::Gemini, vec![err(Provider::Gemini, "rate limited")]);
    let claude = MockDriver::scripted(Provider::Claude, vec![ok("from fallback")]);

    let response = service(&gemini, &claude)
        .generate(Provider::Gemini, &request("hello"))
        .await;

    assert!(*response.outcome().success());
    assert_eq!(response.outcome().content(), "from fallback");
    assert_eq!(*response.model_used(), Provider::Claude);
    assert!(*response.used_fallback());
    assert_eq!(gemini.calls(), 1);
    assert_eq!(claude.calls(), 1);
}

#[tokio::test]
async fn total_failure_composes_both_errors() {
    let gemini = MockDriver::scripted(Provider::Gemini, vec![err(Provider::Gemini, "gemini boom")]);
    let claude = MockDriver::scripted(Provider::Claude, vec![err(Provider::Claude, "claude boom")]);

    let response = service(&gemini, &claude)
        .generate(Provider::Gemini, &request("hello"))
        .await;

    assert!(!*response.outcome().success());
    assert!(response.outcome().content().is_empty());
    assert!(*response.used_fallback());
    assert_eq!(
        *response.outcome().error_code(),
        Some(ErrorCode::AllModelsFailed)
    );

    let error = response.outcome().error().as_deref().unwrap();
    assert!(error.contains("gemini boom"));
    assert!(error.contains("claude boom"));
}

#[tokio::test]
async fn fallback_receives_the_identical_request() {
    let gemini = MockDriver::scripted(Provider::Gemini, vec![err(Provider::Gemini, "down")]);
    let claude = MockDriver::scripted(Provider::Claude, vec![ok("answer")]);

    service(&gemini, &claude)
        .generate(Provider::Gemini, &request("the prompt"))
        .await;

    let primary_seen = gemini.seen();
    let fallback_seen = claude.seen();
    assert_eq!(primary_seen[0].1, fallback_seen[0].1);
}

#[tokio::test]
async fn default_system_prompt_is_substituted() {
    let gemini = MockDriver::scripted(Provider::Gemini, vec![ok("answer")]);
    let claude = MockDriver::scripted(Provider::Claude, vec![]);
    let service = ModelService::new(
        driver_set(&gemini, &claude),
        ModelServiceConfig::builder()
            .default_system_prompt("minimal test prompt")
            .build()
            .unwrap(),
    );

    service.generate(Provider::Gemini, &request("hello")).await;

    let (_, seen) = &gemini.seen()[0];
    assert_eq!(seen.system_prompt().as_deref(), Some("minimal test prompt"));
}

#[tokio::test]
async fn caller_system_prompt_wins_over_default() {
    let gemini = MockDriver::scripted(Provider::Gemini, vec![ok("answer")]);
    let claude = MockDriver::scripted(Provider::Claude, vec![]);
    let service = ModelService::new(
        driver_set(&gemini, &claude),
        ModelServiceConfig::builder()
            .default_system_prompt("minimal test prompt")
            .build()
            .unwrap(),
    );

    let request = GenerationRequest::builder()
        .prompt("hello")
        .system_prompt(Some("caller prompt".to_string()))
        .build()
        .unwrap();
    service.generate(Provider::Gemini, &request).await;

    let (_, seen) = &gemini.seen()[0];
    assert_eq!(seen.system_prompt().as_deref(), Some("caller prompt"));
}

#[tokio::test]
async fn primary_claude_falls_back_to_gemini() {
    let gemini = MockDriver::scripted(Provider::Gemini, vec![ok("gemini rescue")]);
    let claude = MockDriver::scripted(Provider::Claude, vec![err(Provider::Claude, "overloaded")]);

    let response = service(&gemini, &claude)
        .generate(Provider::Claude, &request("hello"))
        .await;

    assert!(*response.outcome().success());
    assert_eq!(*response.model_used(), Provider::Gemini);
    assert!(*response.used_fallback());
}
