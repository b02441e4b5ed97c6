//! Tiered orchestration chain for Maestro.
//!
//! Two services live here. [`ModelService`] performs one logical "ask a
//! model" operation with automatic single-level fallback to the partner
//! provider. [`TierChain`] runs a tier-specific pipeline of dependent model
//! calls (analyzer, strategist, implementer), threading each stage's output
//! into the next stage's prompt, and finishes with a deterministic syntactic
//! check of the final output.
//!
//! Both services are stateless between calls: every execution builds its own
//! request and response values, so any number of executions may run
//! concurrently over one shared [`maestro_interface::DriverSet`].
//!
//! # Examples
//!
//! ```no_run
//! use std::sync::Arc;
//! use maestro_chain::{ChainConfig, PerformanceTier, TierChain};
//! use maestro_core::GenerationRequest;
//! use maestro_interface::DriverSet;
//! use maestro_models::{AnthropicClient, GeminiClient};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let drivers = DriverSet::new(
//!     Arc::new(GeminiClient::from_env()?),
//!     Arc::new(AnthropicClient::from_env()?),
//! );
//! let chain = TierChain::new(drivers, ChainConfig::default());
//!
//! let request = GenerationRequest::builder()
//!     .prompt("Create an about page for a bakery")
//!     .build()?;
//! let response = chain.execute(&request, PerformanceTier::Flow).await;
//! println!("{} steps, {} tokens", response.steps().len(), response.total_tokens());
//! # Ok(())
//! # }
//! ```

mod config;
mod model_service;
mod prompts;
mod response;
mod service;
mod tier;
pub mod validator;

pub use config::{
    ChainConfig, ChainConfigBuilder, ModelServiceConfig, ModelServiceConfigBuilder,
};
pub use model_service::{ModelService, ModelServiceResponse};
pub use response::{ChainStepResult, ChainValidation, TierChainResponse};
pub use service::TierChain;
pub use tier::{PerformanceTier, StageRole, StageSpec};
pub use validator::ValidationResult;
