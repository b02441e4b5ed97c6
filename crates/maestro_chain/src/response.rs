//! Chain response types: the per-stage audit trail and the consolidated
//! execution result.

use crate::validator::ValidationResult;
use crate::{PerformanceTier, StageRole, StageSpec};
use maestro_core::{ErrorCode, Provider, TokenUsage};
use serde::{Deserialize, Serialize};

/// The record of one executed pipeline stage.
///
/// One instance is appended per stage in execution order, regardless of
/// whether the stage succeeded; the resulting sequence is the audit trail of
/// the chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ChainStepResult {
    /// The stage's role in the pipeline
    role: StageRole,
    /// Provider the stage called
    provider: Provider,
    /// Concrete model id used
    model_id: String,
    /// Stage output; empty string on failure
    output: String,
    /// Token counts billed for the stage
    usage: TokenUsage,
    /// Estimated cost of the stage in USD
    cost_usd: f64,
    /// Wall-clock latency of the stage in milliseconds
    latency_ms: u64,
}

impl ChainStepResult {
    /// Records a completed stage call.
    pub fn completed(
        spec: &StageSpec,
        output: impl Into<String>,
        usage: TokenUsage,
        cost_usd: f64,
        latency_ms: u64,
    ) -> Self {
        Self {
            role: spec.role,
            provider: spec.provider,
            model_id: spec.model_id.to_string(),
            output: output.into(),
            usage,
            cost_usd,
            latency_ms,
        }
    }

    /// Records a stage whose provider call failed: empty output, zero
    /// tokens and cost.
    pub fn failed(spec: &StageSpec, latency_ms: u64) -> Self {
        Self::completed(spec, String::new(), TokenUsage::default(), 0.0, latency_ms)
    }
}

/// Deterministic validation results attached to a successful execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ChainValidation {
    /// Structural well-formedness of embedded code in the final output
    syntactic: ValidationResult,
}

impl ChainValidation {
    /// Wraps a syntactic validation result.
    pub fn new(syntactic: ValidationResult) -> Self {
        Self { syntactic }
    }
}

/// The consolidated result of one chain execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct TierChainResponse {
    /// Whether every stage completed and produced output
    success: bool,
    /// The tier that was executed
    tier: PerformanceTier,
    /// Final implementer output; empty on failure
    content: String,
    /// Strategist output; present only on successful craft executions
    #[serde(skip_serializing_if = "Option::is_none")]
    strategy: Option<String>,
    /// Deterministic validation of the final output; present on success
    #[serde(skip_serializing_if = "Option::is_none")]
    validation: Option<ChainValidation>,
    /// Per-stage audit trail in execution order
    steps: Vec<ChainStepResult>,
    /// Tokens billed across all executed stages, including failed ones
    total_tokens: u64,
    /// Estimated USD cost across all executed stages, including failed ones
    total_cost_usd: f64,
    /// Wall-clock latency of the whole execution in milliseconds
    total_latency_ms: u64,
    /// Flat tier credits charged; zero on failure
    credits_used: u32,
    /// Error description when the execution failed
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    /// Stable error code when the execution failed
    #[serde(skip_serializing_if = "Option::is_none")]
    error_code: Option<ErrorCode>,
}

impl TierChainResponse {
    /// Builds the response for a fully successful execution.
    ///
    /// Credits come from the flat per-tier table, never from measured
    /// usage.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn succeeded(
        tier: PerformanceTier,
        content: String,
        strategy: Option<String>,
        validation: ChainValidation,
        steps: Vec<ChainStepResult>,
        total_tokens: u64,
        total_cost_usd: f64,
        total_latency_ms: u64,
    ) -> Self {
        Self {
            success: true,
            tier,
            content,
            strategy,
            validation: Some(validation),
            steps,
            total_tokens,
            total_cost_usd,
            total_latency_ms,
            credits_used: tier.credits(),
            error: None,
            error_code: None,
        }
    }

    /// Builds the response for a stage that produced no output.
    ///
    /// The partial audit trail and the totals accumulated so far are
    /// preserved.
    pub(crate) fn step_failed(
        tier: PerformanceTier,
        steps: Vec<ChainStepResult>,
        total_tokens: u64,
        total_cost_usd: f64,
        total_latency_ms: u64,
        error: String,
    ) -> Self {
        Self {
            success: false,
            tier,
            content: String::new(),
            strategy: None,
            validation: None,
            steps,
            total_tokens,
            total_cost_usd,
            total_latency_ms,
            credits_used: 0,
            error: Some(error),
            error_code: Some(ErrorCode::ChainStepFailed),
        }
    }

    /// Builds the response for an error that escaped the staged pipeline.
    ///
    /// No audit trail is available on this path; only the wall-clock
    /// latency from the true start is reported.
    pub(crate) fn execution_failed(
        tier: PerformanceTier,
        error: String,
        total_latency_ms: u64,
    ) -> Self {
        Self {
            success: false,
            tier,
            content: String::new(),
            strategy: None,
            validation: None,
            steps: Vec::new(),
            total_tokens: 0,
            total_cost_usd: 0.0,
            total_latency_ms,
            credits_used: 0,
            error: Some(error),
            error_code: Some(ErrorCode::ChainExecutionFailed),
        }
    }
}
