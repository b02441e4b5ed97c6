//! Gemini provider integration.

mod client;
mod types;

pub use client::{GeminiClient, GeminiConfig, GeminiConfigBuilder};
pub use types::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    InlineData, Part, ResponseContent, SystemInstruction, UsageMetadata,
};
