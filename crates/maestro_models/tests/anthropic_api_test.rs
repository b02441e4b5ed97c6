//! Live Anthropic API tests, gated behind the `api` feature.

use maestro_core::{GenerationRequest, Provider};
use maestro_interface::ModelDriver;
use maestro_models::AnthropicClient;

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_anthropic_simple_generation() {
    dotenvy::dotenv().ok();
    let client = AnthropicClient::from_env().expect("ANTHROPIC_API_KEY must be set for API tests");

    let request = GenerationRequest::builder()
        .prompt("Say 'test' and nothing else.")
        .max_tokens(Some(32u32))
        .build()
        .expect("Valid request");

    let generation = client
        .generate(Provider::Claude.default_model_id(), &request)
        .await
        .expect("API call succeeded");

    assert!(!generation.content().is_empty());
    assert!(generation.usage().total() > 0);
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_anthropic_with_system_prompt() {
    dotenvy::dotenv().ok();
    let client = AnthropicClient::from_env().expect("ANTHROPIC_API_KEY must be set for API tests");

    let request = GenerationRequest::builder()
        .prompt("What are you?")
        .system_prompt(Some("Answer in exactly three words.".to_string()))
        .temperature(Some(0.0))
        .max_tokens(Some(32u32))
        .build()
        .expect("Valid request");

    let generation = client
        .generate(Provider::Claude.default_model_id(), &request)
        .await
        .expect("API call succeeded");

    assert!(!generation.content().is_empty());
}
