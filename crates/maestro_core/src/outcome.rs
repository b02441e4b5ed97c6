//! Provider call outcomes and token accounting.

use serde::{Deserialize, Serialize};

/// Token counts for one provider call.
///
/// # Examples
///
/// ```
/// use maestro_core::TokenUsage;
///
/// let usage = TokenUsage::new(150, 50);
/// assert_eq!(usage.total(), 200);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_getters::Getters,
)]
pub struct TokenUsage {
    /// Number of tokens in the input/prompt.
    input_tokens: u64,
    /// Number of tokens in the generated output.
    output_tokens: u64,
}

impl TokenUsage {
    /// Creates new token usage data.
    pub fn new(input_tokens: u64, output_tokens: u64) -> Self {
        Self {
            input_tokens,
            output_tokens,
        }
    }

    /// Total tokens consumed by the call.
    pub fn total(&self) -> u64 {
        self.input_tokens + self.output_tokens
    }
}

/// Stable error codes surfaced to callers on failure responses.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Both the primary and the fallback provider failed
    AllModelsFailed,
    /// A pipeline stage produced no output; partial audit trail preserved
    ChainStepFailed,
    /// The pipeline failed outside a stage; audit trail unavailable
    ChainExecutionFailed,
}

/// The immutable record of one provider call.
///
/// Produced once per call and never mutated afterwards. A failed call still
/// carries whatever usage the provider billed before failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ProviderOutcome {
    /// Whether the call produced usable content
    success: bool,
    /// Generated text; empty on failure
    content: String,
    /// Token counts reported by the provider
    usage: TokenUsage,
    /// Estimated cost of the call in USD
    cost_usd: f64,
    /// Wall-clock latency of the call in milliseconds
    latency_ms: u64,
    /// Error description when the call failed
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    /// Stable error code when the call failed
    #[serde(skip_serializing_if = "Option::is_none")]
    error_code: Option<ErrorCode>,
}

impl ProviderOutcome {
    /// Records a successful call.
    pub fn succeeded(
        content: impl Into<String>,
        usage: TokenUsage,
        cost_usd: f64,
        latency_ms: u64,
    ) -> Self {
        Self {
            success: true,
            content: content.into(),
            usage,
            cost_usd,
            latency_ms,
            error: None,
            error_code: None,
        }
    }

    /// Records a failed call with empty content and zero cost.
    pub fn failed(error: impl Into<String>, latency_ms: u64) -> Self {
        Self {
            success: false,
            content: String::new(),
            usage: TokenUsage::default(),
            cost_usd: 0.0,
            latency_ms,
            error: Some(error.into()),
            error_code: None,
        }
    }

    /// Attaches a stable error code to a failed outcome.
    pub fn with_error_code(mut self, code: ErrorCode) -> Self {
        self.error_code = Some(code);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_outcome_is_empty_and_unbilled() {
        let outcome = ProviderOutcome::failed("upstream timeout", 1200);
        assert!(!*outcome.success());
        assert!(outcome.content().is_empty());
        assert_eq!(outcome.usage().total(), 0);
        assert_eq!(*outcome.cost_usd(), 0.0);
        assert_eq!(outcome.error().as_deref(), Some("upstream timeout"));
    }

    #[test]
    fn error_codes_serialize_screaming_snake() {
        assert_eq!(
            serde_json::to_string(&ErrorCode::AllModelsFailed).unwrap(),
            "\"ALL_MODELS_FAILED\""
        );
        assert_eq!(ErrorCode::ChainStepFailed.to_string(), "CHAIN_STEP_FAILED");
    }
}
