//! Single-call generation with automatic cross-provider fallback.

use crate::ModelServiceConfig;
use maestro_core::{ErrorCode, GenerationRequest, Provider, ProviderOutcome};
use maestro_error::ModelsResult;
use maestro_interface::{DriverSet, Generation};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// The result of one logical "ask a model" operation.
///
/// `used_fallback` means the fallback provider was *attempted*: it is true
/// both when the fallback produced the content and when both providers
/// failed. When it is true, the primary attempt necessarily failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ModelServiceResponse {
    /// The outcome of the attempt that produced this response
    #[serde(flatten)]
    outcome: ProviderOutcome,
    /// The provider of the last attempt
    model_used: Provider,
    /// Whether the fallback provider was attempted
    used_fallback: bool,
}

/// Executes exactly one logical generation with single-level fallback.
///
/// On primary failure the partner provider is tried once with the identical
/// request; there are no further retries, no queuing, and no service-level
/// timeout (drivers own their timeouts).
#[derive(Debug, Clone)]
pub struct ModelService {
    drivers: DriverSet,
    config: ModelServiceConfig,
}

impl ModelService {
    /// Creates a model service over the given drivers.
    pub fn new(drivers: DriverSet, config: ModelServiceConfig) -> Self {
        Self { drivers, config }
    }

    /// Generates a completion, falling back to the partner provider if the
    /// primary fails.
    ///
    /// When the request carries no system prompt, the configured default is
    /// substituted before either provider sees the request; a
    /// caller-supplied system prompt always wins.
    #[tracing::instrument(skip(self, request), fields(primary = %primary))]
    pub async fn generate(
        &self,
        primary: Provider,
        request: &GenerationRequest,
    ) -> ModelServiceResponse {
        let started = Instant::now();
        let fallback = primary.partner();
        let effective = request.with_default_system_prompt(self.config.default_system_prompt());

        info!(primary = %primary, "Attempting primary provider");
        let primary_error = match self.attempt(primary, &effective).await {
            Ok(generation) => {
                debug!(primary = %primary, "Primary provider succeeded");
                return ModelServiceResponse {
                    outcome: ProviderOutcome::succeeded(
                        generation.content().clone(),
                        *generation.usage(),
                        *generation.cost_usd(),
                        elapsed_ms(&started),
                    ),
                    model_used: primary,
                    used_fallback: false,
                };
            }
            Err(e) => e,
        };

        warn!(
            primary = %primary,
            fallback = %fallback,
            error = %primary_error,
            "Primary provider failed, attempting fallback"
        );

        match self.attempt(fallback, &effective).await {
            Ok(generation) => {
                info!(fallback = %fallback, "Fallback provider succeeded");
                ModelServiceResponse {
                    outcome: ProviderOutcome::succeeded(
                        generation.content().clone(),
                        *generation.usage(),
                        *generation.cost_usd(),
                        elapsed_ms(&started),
                    ),
                    model_used: fallback,
                    used_fallback: true,
                }
            }
            Err(fallback_error) => {
                error!(
                    primary = %primary,
                    fallback = %fallback,
                    "Both providers failed"
                );
                let composed = format!(
                    "All models failed. {}: {}; {}: {}",
                    primary, primary_error, fallback, fallback_error
                );
                ModelServiceResponse {
                    outcome: ProviderOutcome::failed(composed, elapsed_ms(&started))
                        .with_error_code(ErrorCode::AllModelsFailed),
                    model_used: fallback,
                    used_fallback: true,
                }
            }
        }
    }

    async fn attempt(
        &self,
        provider: Provider,
        request: &GenerationRequest,
    ) -> ModelsResult<Generation> {
        self.drivers
            .driver_for(provider)
            .generate(provider.default_model_id(), request)
            .await
    }
}

fn elapsed_ms(started: &Instant) -> u64 {
    started.elapsed().as_millis() as u64
}
