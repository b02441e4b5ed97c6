//! Anthropic provider integration.

mod client;
mod types;

pub use client::{AnthropicClient, AnthropicConfig, AnthropicConfigBuilder};
pub use types::{
    AnthropicRequest, AnthropicResponse, AnthropicUsage, ContentBlock, MediaSource,
    RequestMessage, ResponseContent,
};
