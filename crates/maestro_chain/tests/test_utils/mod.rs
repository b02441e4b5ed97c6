//! Test utilities for chain tests.
//!
//! Provides a scripted mock driver so orchestration behavior can be tested
//! without any provider traffic.

#![allow(dead_code)]

use async_trait::async_trait;
use maestro_core::{GenerationRequest, Provider, TokenUsage};
use maestro_error::{
    AnthropicErrorKind, GeminiErrorKind, ModelsError, ModelsErrorKind, ModelsResult,
};
use maestro_interface::{DriverSet, Generation, ModelDriver};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};

static TRACING: Once = Once::new();

/// Installs a compact subscriber once so failing tests show chain logs.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A driver that replays a scripted sequence of results and records every
/// request it receives.
pub struct MockDriver {
    provider: Provider,
    script: Mutex<VecDeque<ModelsResult<Generation>>>,
    calls: AtomicUsize,
    seen: Mutex<Vec<(String, GenerationRequest)>>,
}

impl MockDriver {
    /// Creates a mock driver that will answer with `script` in order.
    pub fn scripted(provider: Provider, script: Vec<ModelsResult<Generation>>) -> Arc<Self> {
        Arc::new(Self {
            provider,
            script: Mutex::new(script.into()),
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        })
    }

    /// Number of times `generate` was invoked.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The requests received so far, with the model id of each call.
    pub fn seen(&self) -> Vec<(String, GenerationRequest)> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelDriver for MockDriver {
    fn provider(&self) -> Provider {
        self.provider
    }

    async fn generate(
        &self,
        model_id: &str,
        request: &GenerationRequest,
    ) -> ModelsResult<Generation> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen
            .lock()
            .unwrap()
            .push((model_id.to_string(), request.clone()));
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(transport_error(self.provider, "mock script exhausted")))
    }
}

/// A successful generation with fixed small usage.
pub fn ok(content: &str) -> ModelsResult<Generation> {
    ok_with(content, 10, 5, 0.001)
}

/// A successful generation with explicit usage and cost.
pub fn ok_with(
    content: &str,
    input_tokens: u64,
    output_tokens: u64,
    cost_usd: f64,
) -> ModelsResult<Generation> {
    Ok(Generation::new(
        content,
        TokenUsage::new(input_tokens, output_tokens),
        cost_usd,
    ))
}

/// A provider-appropriate transport failure.
pub fn err(provider: Provider, message: &str) -> ModelsResult<Generation> {
    Err(transport_error(provider, message))
}

fn transport_error(provider: Provider, message: &str) -> ModelsError {
    match provider {
        Provider::Gemini => ModelsError::new(ModelsErrorKind::Gemini(GeminiErrorKind::Http(
            message.to_string(),
        ))),
        Provider::Claude => ModelsError::new(ModelsErrorKind::Anthropic(
            AnthropicErrorKind::Http(message.to_string()),
        )),
    }
}

/// Pairs two mock drivers into a driver set.
pub fn driver_set(gemini: &Arc<MockDriver>, claude: &Arc<MockDriver>) -> DriverSet {
    DriverSet::new(gemini.clone(), claude.clone())
}
