//! LLM provider integrations for Maestro.
//!
//! Each provider module owns its wire types and an HTTP client implementing
//! [`maestro_interface::ModelDriver`]. The orchestration layer never sees
//! wire formats; it receives a [`maestro_interface::Generation`] or a
//! provider error.

#[cfg(feature = "anthropic")]
pub mod anthropic;
#[cfg(feature = "gemini")]
pub mod gemini;
pub mod pricing;

#[cfg(feature = "anthropic")]
pub use anthropic::{AnthropicClient, AnthropicConfig};
#[cfg(feature = "gemini")]
pub use gemini::{GeminiClient, GeminiConfig};
