//! Generation request types.

use crate::{Attachment, Message};
use serde::{Deserialize, Serialize};

/// A single generation request as handed to the orchestration services.
///
/// Built via [`GenerationRequest::builder`], which enforces the request
/// invariants: the prompt must be non-empty unless at least one attachment
/// is present, and the temperature (when set) must lie in `[0, 2]`.
///
/// # Examples
///
/// ```
/// use maestro_core::GenerationRequest;
///
/// let request = GenerationRequest::builder()
///     .prompt("Create an about page for a bakery")
///     .temperature(Some(0.7))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.prompt(), "Create an about page for a bakery");
/// assert!(request.history().is_empty());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into), build_fn(validate = "GenerationRequestBuilder::validate"))]
pub struct GenerationRequest {
    /// The raw user request
    #[builder(default)]
    prompt: String,
    /// Caller-supplied system prompt; when absent the services substitute
    /// their configured default
    #[builder(default)]
    system_prompt: Option<String>,
    /// Sampling temperature in `[0, 2]`
    #[builder(default)]
    temperature: Option<f32>,
    /// Output token budget
    #[builder(default)]
    max_tokens: Option<u32>,
    /// Prior conversation turns, oldest first
    #[builder(default)]
    history: Vec<Message>,
    /// Files attached to the request
    #[builder(default)]
    attachments: Vec<Attachment>,
    /// Opaque structured description of the caller's environment, embedded
    /// verbatim into analyzer prompts
    #[builder(default)]
    context: Option<serde_json::Value>,
}

impl GenerationRequest {
    /// Returns a builder for constructing a GenerationRequest.
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }

    /// Returns a copy of this request with the system prompt filled from
    /// `default` when the caller did not supply one.
    ///
    /// A caller-supplied system prompt always wins.
    pub fn with_default_system_prompt(&self, default: &str) -> Self {
        let mut request = self.clone();
        if request.system_prompt.is_none() {
            request.system_prompt = Some(default.to_string());
        }
        request
    }
}

impl GenerationRequestBuilder {
    fn validate(&self) -> Result<(), String> {
        let prompt_empty = self
            .prompt
            .as_ref()
            .is_none_or(|p| p.trim().is_empty());
        let no_attachments = self
            .attachments
            .as_ref()
            .is_none_or(|a| a.is_empty());
        if prompt_empty && no_attachments {
            return Err("prompt must be non-empty unless attachments are present".to_string());
        }

        if let Some(Some(t)) = self.temperature {
            if !(0.0..=2.0).contains(&t) {
                return Err(format!("temperature {} outside [0, 2]", t));
            }
        }

        Ok(())
    }
}
