//! The model driver capability trait.

use async_trait::async_trait;
use maestro_core::{GenerationRequest, Provider, TokenUsage};
use maestro_error::ModelsResult;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Raw output of one driver call: generated text, token accounting, and the
/// driver's cost estimate.
///
/// Latency is the orchestration layer's business; drivers report what the
/// provider itself returns plus the price of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Generation {
    /// Generated text
    content: String,
    /// Token counts reported by the provider
    usage: TokenUsage,
    /// Estimated cost of the call in USD
    cost_usd: f64,
}

impl Generation {
    /// Creates a new generation record.
    pub fn new(content: impl Into<String>, usage: TokenUsage, cost_usd: f64) -> Self {
        Self {
            content: content.into(),
            usage,
            cost_usd,
        }
    }
}

/// Uniform capability contract implemented by every provider integration.
///
/// Timeouts are the driver's responsibility; the orchestration layer never
/// imposes its own deadline and treats an `Err` as a normal failed call.
#[async_trait]
pub trait ModelDriver: Send + Sync {
    /// The provider this driver speaks to.
    fn provider(&self) -> Provider;

    /// Generates a completion for the request against the given model id.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails, the provider rejects the
    /// request, or the response cannot be interpreted.
    async fn generate(
        &self,
        model_id: &str,
        request: &GenerationRequest,
    ) -> ModelsResult<Generation>;
}

/// Both provider drivers, paired for fallback routing.
///
/// Cloning is cheap; drivers are shared behind `Arc` and hold no per-call
/// state, so one set serves any number of concurrent executions.
#[derive(Clone)]
pub struct DriverSet {
    gemini: Arc<dyn ModelDriver>,
    claude: Arc<dyn ModelDriver>,
}

impl DriverSet {
    /// Creates a driver set from the two provider drivers.
    pub fn new(gemini: Arc<dyn ModelDriver>, claude: Arc<dyn ModelDriver>) -> Self {
        Self { gemini, claude }
    }

    /// Returns the driver for the given provider.
    ///
    /// Total over [`Provider`]: every identity resolves to a driver.
    pub fn driver_for(&self, provider: Provider) -> &Arc<dyn ModelDriver> {
        match provider {
            Provider::Gemini => &self.gemini,
            Provider::Claude => &self.claude,
        }
    }
}

impl std::fmt::Debug for DriverSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DriverSet")
            .field("gemini", &self.gemini.provider())
            .field("claude", &self.claude.provider())
            .finish()
    }
}
