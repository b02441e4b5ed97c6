//! The tiered orchestration pipeline.

use crate::response::{ChainStepResult, ChainValidation, TierChainResponse};
use crate::{ChainConfig, PerformanceTier, StageRole, StageSpec, prompts, validator};
use maestro_core::GenerationRequest;
use maestro_error::ChainResult;
use maestro_interface::DriverSet;
use std::time::Instant;
use tracing::{debug, error, warn};

/// Runs a tier-specific ordered pipeline of dependent model calls.
///
/// Stages execute strictly in sequence: each stage's prompt embeds the
/// previous stage's output, so there is no parallelism within one
/// execution. Distinct executions share nothing and may run concurrently.
#[derive(Debug, Clone)]
pub struct TierChain {
    drivers: DriverSet,
    config: ChainConfig,
}

impl TierChain {
    /// Creates a chain over the given drivers.
    pub fn new(drivers: DriverSet, config: ChainConfig) -> Self {
        Self { drivers, config }
    }

    /// Executes the tier's pipeline and returns a consolidated result.
    ///
    /// Never returns an error: every failure path produces a response with
    /// `success == false` and a populated error code. A stage that produces
    /// no output aborts the chain but preserves the partial audit trail; an
    /// error escaping the pipeline itself loses the trail and reports only
    /// wall-clock latency from the true start.
    #[tracing::instrument(skip(self, request), fields(tier = %tier))]
    pub async fn execute(
        &self,
        request: &GenerationRequest,
        tier: PerformanceTier,
    ) -> TierChainResponse {
        let started = Instant::now();

        match self.run_pipeline(request, tier, &started).await {
            Ok(response) => response,
            Err(e) => {
                error!(tier = %tier, error = %e, "Chain execution failed outside a stage");
                TierChainResponse::execution_failed(
                    tier,
                    e.to_string(),
                    started.elapsed().as_millis() as u64,
                )
            }
        }
    }

    async fn run_pipeline(
        &self,
        request: &GenerationRequest,
        tier: PerformanceTier,
        started: &Instant,
    ) -> ChainResult<TierChainResponse> {
        let mut steps: Vec<ChainStepResult> = Vec::new();
        let mut total_tokens: u64 = 0;
        let mut total_cost_usd: f64 = 0.0;

        let mut analysis = String::new();
        let mut strategy: Option<String> = None;
        let mut content = String::new();

        for spec in tier.stages() {
            let prompt = match spec.role {
                StageRole::Analyzer => prompts::analyzer(tier, request)?,
                StageRole::Strategist => prompts::strategist(&analysis, request),
                StageRole::Implementer => {
                    let basis = strategy.as_deref().unwrap_or(&analysis);
                    prompts::implementer(tier, basis, request)
                }
            };

            let system_prompt = match spec.role {
                StageRole::Implementer => Some(
                    request
                        .system_prompt()
                        .clone()
                        .unwrap_or_else(|| self.config.implementer_prompt(tier).to_string()),
                ),
                _ => None,
            };

            let step = self.run_stage(spec, prompt, system_prompt).await;

            // Totals accumulate before the success check: a failed call may
            // still have billed partial input tokens.
            total_tokens += step.usage().total();
            total_cost_usd += *step.cost_usd();

            let output = step.output().clone();
            steps.push(step);

            if output.is_empty() {
                warn!(tier = %tier, role = %spec.role, "Stage produced no output, aborting chain");
                return Ok(TierChainResponse::step_failed(
                    tier,
                    steps,
                    total_tokens,
                    total_cost_usd,
                    started.elapsed().as_millis() as u64,
                    format!("{} stage produced no output", spec.role),
                ));
            }

            match spec.role {
                StageRole::Analyzer => analysis = output,
                StageRole::Strategist => strategy = Some(output),
                StageRole::Implementer => content = output,
            }
        }

        let validation = ChainValidation::new(validator::validate(&content));

        Ok(TierChainResponse::succeeded(
            tier,
            content,
            strategy,
            validation,
            steps,
            total_tokens,
            total_cost_usd,
            started.elapsed().as_millis() as u64,
        ))
    }

    /// Runs one stage: builds the stage request, times the provider call,
    /// and converts a driver error into an empty-output step so a single
    /// failing call never aborts the process.
    async fn run_stage(
        &self,
        spec: &StageSpec,
        prompt: String,
        system_prompt: Option<String>,
    ) -> ChainStepResult {
        let stage_started = Instant::now();
        debug!(role = %spec.role, provider = %spec.provider, model = spec.model_id, "Running stage");

        let request = match GenerationRequest::builder()
            .prompt(prompt)
            .system_prompt(system_prompt)
            .temperature(Some(spec.temperature))
            .max_tokens(Some(spec.max_tokens))
            .build()
        {
            Ok(request) => request,
            Err(e) => {
                warn!(role = %spec.role, error = %e, "Stage request construction failed");
                return ChainStepResult::failed(
                    spec,
                    stage_started.elapsed().as_millis() as u64,
                );
            }
        };

        let result = self
            .drivers
            .driver_for(spec.provider)
            .generate(spec.model_id, &request)
            .await;
        let latency_ms = stage_started.elapsed().as_millis() as u64;

        match result {
            Ok(generation) => {
                debug!(
                    role = %spec.role,
                    tokens = generation.usage().total(),
                    latency_ms,
                    "Stage completed"
                );
                ChainStepResult::completed(
                    spec,
                    generation.content().clone(),
                    *generation.usage(),
                    *generation.cost_usd(),
                    latency_ms,
                )
            }
            Err(e) => {
                warn!(role = %spec.role, error = %e, "Stage provider call failed");
                ChainStepResult::failed(spec, latency_ms)
            }
        }
    }
}
