//! Anthropic messages-API wire types.

use derive_getters::Getters;
use maestro_core::{GenerationRequest, Role, TokenUsage};
use serde::{Deserialize, Serialize};

/// Base64 media source for image and document blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaSource {
    #[serde(rename = "type")]
    pub source_type: String,
    pub media_type: String,
    pub data: String,
}

impl MediaSource {
    /// Creates a base64 media source.
    pub fn base64(media_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            source_type: "base64".to_string(),
            media_type: media_type.into(),
            data: data.into(),
        }
    }
}

/// One content block of a request message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    /// Plain text block
    Text { text: String },
    /// Base64 image block
    Image { source: MediaSource },
    /// Base64 document block (PDF and friends)
    Document { source: MediaSource },
}

impl ContentBlock {
    /// Creates a text block.
    pub fn text(text: impl Into<String>) -> Self {
        ContentBlock::Text { text: text.into() }
    }
}

/// One request message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestMessage {
    pub role: String,
    pub content: Vec<ContentBlock>,
}

/// Messages-API request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct AnthropicRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<RequestMessage>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

impl AnthropicRequest {
    /// Creates a builder for AnthropicRequest.
    pub fn builder() -> AnthropicRequestBuilder {
        AnthropicRequestBuilder::default()
    }

    /// Maps a generic generation request onto the messages API.
    ///
    /// History turns come first, then the live prompt and any attachments as
    /// one user message. System turns in the history fold into the system
    /// string alongside the request's system prompt.
    pub fn from_generation(model_id: &str, request: &GenerationRequest) -> Self {
        let mut system_parts: Vec<String> = Vec::new();
        if let Some(prompt) = request.system_prompt() {
            system_parts.push(prompt.clone());
        }

        let mut messages: Vec<RequestMessage> = Vec::new();
        for message in request.history() {
            match message.role() {
                Role::System => system_parts.push(message.content().clone()),
                role => messages.push(RequestMessage {
                    role: role.to_string(),
                    content: vec![ContentBlock::text(message.content().clone())],
                }),
            }
        }

        let mut content = Vec::new();
        if !request.prompt().is_empty() {
            content.push(ContentBlock::text(request.prompt().clone()));
        }
        for attachment in request.attachments() {
            let media_type = attachment
                .mime()
                .clone()
                .unwrap_or_else(|| "application/octet-stream".to_string());
            let source = MediaSource::base64(media_type.clone(), attachment.data().clone());
            if media_type.starts_with("image/") {
                content.push(ContentBlock::Image { source });
            } else {
                content.push(ContentBlock::Document { source });
            }
        }
        messages.push(RequestMessage {
            role: "user".to_string(),
            content,
        });

        let system = if system_parts.is_empty() {
            None
        } else {
            Some(system_parts.join("\n\n"))
        };

        Self {
            model: model_id.to_string(),
            max_tokens: request.max_tokens().unwrap_or(4096),
            messages,
            system,
            temperature: *request.temperature(),
        }
    }
}

/// One response content block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ResponseContent {
    #[serde(rename = "type")]
    content_type: String,
    #[serde(default)]
    text: String,
}

/// Token accounting reported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct AnthropicUsage {
    input_tokens: u64,
    output_tokens: u64,
}

/// Messages-API response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct AnthropicResponse {
    id: String,
    role: String,
    content: Vec<ResponseContent>,
    model: String,
    stop_reason: Option<String>,
    usage: AnthropicUsage,
}

impl AnthropicResponse {
    /// Concatenates the text content blocks.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter(|block| block.content_type() == "text")
            .map(|block| block.text().as_str())
            .collect::<Vec<_>>()
            .join("")
    }

    /// Extracts token usage.
    pub fn token_usage(&self) -> TokenUsage {
        TokenUsage::new(*self.usage.input_tokens(), *self.usage.output_tokens())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_system_history_into_system_string() {
        let request = GenerationRequest::builder()
            .prompt("do the thing")
            .system_prompt(Some("you are terse".to_string()))
            .history(vec![
                maestro_core::Message::new(Role::System, "site uses PHP 8.2"),
                maestro_core::Message::new(Role::User, "hi"),
            ])
            .build()
            .unwrap();

        let wire = AnthropicRequest::from_generation("claude-sonnet-4-20250514", &request);
        assert_eq!(wire.messages().len(), 2);
        let system = wire.system().as_deref().unwrap();
        assert!(system.contains("terse"));
        assert!(system.contains("PHP 8.2"));
    }

    #[test]
    fn attachments_become_typed_blocks() {
        let request = GenerationRequest::builder()
            .prompt("describe these")
            .attachments(vec![
                maestro_core::Attachment::new("a.png", Some("image/png".to_string()), "aGk="),
                maestro_core::Attachment::new(
                    "b.pdf",
                    Some("application/pdf".to_string()),
                    "aGk=",
                ),
            ])
            .build()
            .unwrap();

        let wire = AnthropicRequest::from_generation("claude-sonnet-4-20250514", &request);
        let content = &wire.messages().last().unwrap().content;
        assert!(matches!(content[1], ContentBlock::Image { .. }));
        assert!(matches!(content[2], ContentBlock::Document { .. }));
    }

    #[test]
    fn response_text_skips_non_text_blocks() {
        let body = serde_json::json!({
            "id": "msg_1",
            "role": "assistant",
            "content": [
                {"type": "text", "text": "{\"intent\":"},
                {"type": "text", "text": "\"create_page\"}"}
            ],
            "model": "claude-sonnet-4-20250514",
            "stop_reason": "end_turn",
            "usage": {"input_tokens": 20, "output_tokens": 9}
        });
        let response: AnthropicResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.text(), "{\"intent\":\"create_page\"}");
        assert_eq!(response.token_usage(), TokenUsage::new(20, 9));
    }
}
