//! Injectable configuration for the orchestration services.
//!
//! Default system prompts are configuration values injected at construction
//! time, not module constants, so tests and embedders can substitute minimal
//! prompts without string-matching the production defaults.

use crate::PerformanceTier;
use derive_getters::Getters;

const DEFAULT_ASSISTANT_PROMPT: &str = "You are an AI assistant that helps site \
administrators operate their sites through conversation. You can create and edit \
pages and posts, manage plugins, and run scoped maintenance operations. Always \
explain what you are about to change, prefer the smallest change that satisfies \
the request, and never perform destructive operations without an explicit \
instruction. When the user's request is ambiguous, ask for clarification instead \
of guessing.";

const FLOW_IMPLEMENTER_PROMPT: &str = "You are the implementer in a fast \
two-stage pipeline. Produce a working result quickly: favor direct, minimal \
implementations over exhaustive ones, and keep commentary short.";

const CRAFT_IMPLEMENTER_PROMPT: &str = "You are the implementer in a three-stage \
pipeline and the strategy has already been worked out. Follow it thoroughly: \
handle edge cases, validate and sanitize all inputs, respect security \
boundaries, and document every non-obvious decision in the output.";

/// Configuration for [`crate::ModelService`].
///
/// # Examples
///
/// ```
/// use maestro_chain::ModelServiceConfig;
///
/// let config = ModelServiceConfig::builder().build().unwrap();
/// assert!(!config.default_system_prompt().is_empty());
/// ```
#[derive(Debug, Clone, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ModelServiceConfig {
    /// Substituted when a request carries no system prompt of its own
    #[builder(default = "DEFAULT_ASSISTANT_PROMPT.to_string()")]
    default_system_prompt: String,
}

impl ModelServiceConfig {
    /// Creates a builder for ModelServiceConfig.
    pub fn builder() -> ModelServiceConfigBuilder {
        ModelServiceConfigBuilder::default()
    }
}

impl Default for ModelServiceConfig {
    fn default() -> Self {
        ModelServiceConfig::builder().build().expect("default config is valid")
    }
}

/// Configuration for [`crate::TierChain`].
#[derive(Debug, Clone, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ChainConfig {
    /// Implementer system prompt for the flow tier, used when the caller
    /// supplies none
    #[builder(default = "FLOW_IMPLEMENTER_PROMPT.to_string()")]
    flow_implementer_prompt: String,
    /// Implementer system prompt for the craft tier, used when the caller
    /// supplies none
    #[builder(default = "CRAFT_IMPLEMENTER_PROMPT.to_string()")]
    craft_implementer_prompt: String,
}

impl ChainConfig {
    /// Creates a builder for ChainConfig.
    pub fn builder() -> ChainConfigBuilder {
        ChainConfigBuilder::default()
    }

    /// The default implementer system prompt for a tier.
    pub fn implementer_prompt(&self, tier: PerformanceTier) -> &str {
        match tier {
            PerformanceTier::Flow => &self.flow_implementer_prompt,
            PerformanceTier::Craft => &self.craft_implementer_prompt,
        }
    }
}

impl Default for ChainConfig {
    fn default() -> Self {
        ChainConfig::builder().build().expect("default config is valid")
    }
}
