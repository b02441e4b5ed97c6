//! Live Gemini API tests, gated behind the `api` feature.

use maestro_core::{GenerationRequest, Provider};
use maestro_interface::ModelDriver;
use maestro_models::GeminiClient;

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_gemini_simple_generation() {
    dotenvy::dotenv().ok();
    let client = GeminiClient::from_env().expect("GEMINI_API_KEY must be set for API tests");

    let request = GenerationRequest::builder()
        .prompt("Say 'test' and nothing else.")
        .max_tokens(Some(32u32))
        .build()
        .expect("Valid request");

    let generation = client
        .generate(Provider::Gemini.default_model_id(), &request)
        .await
        .expect("API call succeeded");

    assert!(!generation.content().is_empty());
}
