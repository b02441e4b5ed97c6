//! Anthropic HTTP client.

use crate::anthropic::{AnthropicRequest, AnthropicResponse};
use async_trait::async_trait;
use derive_getters::Getters;
use maestro_core::{GenerationRequest, Provider};
use maestro_error::{AnthropicErrorKind, ModelsError, ModelsErrorKind, ModelsResult};
use maestro_interface::{Generation, ModelDriver};
use tracing::{debug, error};

fn anthropic_error(kind: AnthropicErrorKind) -> ModelsError {
    ModelsError::new(ModelsErrorKind::Anthropic(kind))
}

/// Anthropic API configuration.
#[derive(Debug, Clone, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct AnthropicConfig {
    api_key: String,
    #[builder(default = "\"https://api.anthropic.com\".to_string()")]
    endpoint: String,
}

impl AnthropicConfig {
    /// Creates a builder for AnthropicConfig.
    pub fn builder() -> AnthropicConfigBuilder {
        AnthropicConfigBuilder::default()
    }

    /// Reads the configuration from `ANTHROPIC_API_KEY`.
    pub fn from_env() -> ModelsResult<Self> {
        let api_key = std::env::var("ANTHROPIC_API_KEY")
            .map_err(|_| anthropic_error(AnthropicErrorKind::MissingApiKey))?;
        AnthropicConfig::builder()
            .api_key(api_key)
            .build()
            .map_err(|e| anthropic_error(AnthropicErrorKind::ClientCreation(e.to_string())))
    }
}

/// Anthropic HTTP client.
#[derive(Debug, Clone)]
pub struct AnthropicClient {
    client: reqwest::Client,
    config: AnthropicConfig,
}

impl AnthropicClient {
    /// Creates a new Anthropic client.
    #[tracing::instrument(skip(config))]
    pub fn new(config: AnthropicConfig) -> ModelsResult<Self> {
        use std::time::Duration;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| anthropic_error(AnthropicErrorKind::ClientCreation(e.to_string())))?;

        Ok(Self { client, config })
    }

    /// Creates a client configured from the environment.
    pub fn from_env() -> ModelsResult<Self> {
        Self::new(AnthropicConfig::from_env()?)
    }

    /// Sends a messages-API request.
    #[tracing::instrument(skip(self, request), fields(model = %request.model()))]
    pub async fn messages(&self, request: &AnthropicRequest) -> ModelsResult<AnthropicResponse> {
        let url = format!("{}/v1/messages", self.config.endpoint());

        debug!(model = %request.model(), messages = request.messages().len(), "Sending Anthropic request");

        let response = self
            .client
            .post(&url)
            .header("x-api-key", self.config.api_key())
            .header("anthropic-version", "2023-06-01")
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(model = %request.model(), error = ?e, "Anthropic HTTP request failed");
                anthropic_error(AnthropicErrorKind::Http(e.to_string()))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(model = %request.model(), status = %status, "Anthropic API error");
            return Err(anthropic_error(AnthropicErrorKind::Api {
                status: status.as_u16(),
                message: body,
            }));
        }

        response
            .json::<AnthropicResponse>()
            .await
            .map_err(|e| anthropic_error(AnthropicErrorKind::Parse(e.to_string())))
    }
}

#[async_trait]
impl ModelDriver for AnthropicClient {
    fn provider(&self) -> Provider {
        Provider::Claude
    }

    async fn generate(
        &self,
        model_id: &str,
        request: &GenerationRequest,
    ) -> ModelsResult<Generation> {
        let wire = AnthropicRequest::from_generation(model_id, request);
        let response = self.messages(&wire).await?;

        let text = response.text();
        if text.is_empty() {
            return Err(anthropic_error(AnthropicErrorKind::EmptyResponse));
        }

        let usage = response.token_usage();
        let cost = crate::pricing::cost_usd(model_id, &usage);
        Ok(Generation::new(text, usage, cost))
    }
}
