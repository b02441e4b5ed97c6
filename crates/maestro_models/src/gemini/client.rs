//! Gemini HTTP client.

use crate::gemini::{GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use derive_getters::Getters;
use maestro_core::{GenerationRequest, Provider};
use maestro_error::{GeminiErrorKind, ModelsError, ModelsErrorKind, ModelsResult};
use maestro_interface::{Generation, ModelDriver};
use tracing::{debug, error};

fn gemini_error(kind: GeminiErrorKind) -> ModelsError {
    ModelsError::new(ModelsErrorKind::Gemini(kind))
}

/// Gemini API configuration.
#[derive(Debug, Clone, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct GeminiConfig {
    api_key: String,
    #[builder(default = "\"https://generativelanguage.googleapis.com\".to_string()")]
    endpoint: String,
}

impl GeminiConfig {
    /// Creates a builder for GeminiConfig.
    pub fn builder() -> GeminiConfigBuilder {
        GeminiConfigBuilder::default()
    }

    /// Reads the configuration from `GEMINI_API_KEY`.
    pub fn from_env() -> ModelsResult<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| gemini_error(GeminiErrorKind::MissingApiKey))?;
        GeminiConfig::builder()
            .api_key(api_key)
            .build()
            .map_err(|e| gemini_error(GeminiErrorKind::ClientCreation(e.to_string())))
    }
}

/// Gemini HTTP client.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Creates a new Gemini client.
    #[tracing::instrument(skip(config))]
    pub fn new(config: GeminiConfig) -> ModelsResult<Self> {
        use std::time::Duration;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| gemini_error(GeminiErrorKind::ClientCreation(e.to_string())))?;

        Ok(Self { client, config })
    }

    /// Creates a client configured from the environment.
    pub fn from_env() -> ModelsResult<Self> {
        Self::new(GeminiConfig::from_env()?)
    }

    /// Sends a generateContent request for the given model.
    #[tracing::instrument(skip(self, request), fields(model = %model_id))]
    pub async fn generate_content(
        &self,
        model_id: &str,
        request: &GenerateContentRequest,
    ) -> ModelsResult<GenerateContentResponse> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.endpoint(),
            model_id
        );

        debug!(model = %model_id, contents = request.contents.len(), "Sending Gemini request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", self.config.api_key())
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(model = %model_id, error = ?e, "Gemini HTTP request failed");
                gemini_error(GeminiErrorKind::Http(e.to_string()))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(model = %model_id, status = %status, "Gemini API error");
            return Err(gemini_error(GeminiErrorKind::Api {
                status: status.as_u16(),
                message: body,
            }));
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| gemini_error(GeminiErrorKind::Parse(e.to_string())))
    }
}

#[async_trait]
impl ModelDriver for GeminiClient {
    fn provider(&self) -> Provider {
        Provider::Gemini
    }

    async fn generate(
        &self,
        model_id: &str,
        request: &GenerationRequest,
    ) -> ModelsResult<Generation> {
        let wire = GenerateContentRequest::from_generation(request);
        let response = self.generate_content(model_id, &wire).await?;

        let text = response.text();
        if text.is_empty() {
            return Err(gemini_error(GeminiErrorKind::EmptyResponse));
        }

        let usage = response.token_usage();
        let cost = crate::pricing::cost_usd(model_id, &usage);
        Ok(Generation::new(text, usage, cost))
    }
}
