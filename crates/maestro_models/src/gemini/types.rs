//! Gemini generateContent wire types.

use derive_getters::Getters;
use maestro_core::{GenerationRequest, Role, TokenUsage};
use serde::{Deserialize, Serialize};

/// One part of a content entry: either text or inline media.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

impl Part {
    /// Creates a text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }

    /// Creates an inline media part from base64 data.
    pub fn inline(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData {
                mime_type: mime_type.into(),
                data: data.into(),
            }),
        }
    }
}

/// Base64 media payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

/// A role-tagged group of parts in the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

/// System instruction block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemInstruction {
    pub parts: Vec<Part>,
}

/// Sampling configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

/// generateContent request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<SystemInstruction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Maps a generic generation request onto the Gemini wire format.
    ///
    /// History turns come first, then the live prompt and any attachments as
    /// one user entry. Gemini has no assistant role on the wire; assistant
    /// turns map to `model`, everything else to `user`.
    pub fn from_generation(request: &GenerationRequest) -> Self {
        let mut contents: Vec<Content> = request
            .history()
            .iter()
            .map(|message| Content {
                role: wire_role(*message.role()),
                parts: vec![Part::text(message.content().clone())],
            })
            .collect();

        let mut parts = Vec::new();
        if !request.prompt().is_empty() {
            parts.push(Part::text(request.prompt().clone()));
        }
        for attachment in request.attachments() {
            let mime = attachment
                .mime()
                .clone()
                .unwrap_or_else(|| "application/octet-stream".to_string());
            parts.push(Part::inline(mime, attachment.data().clone()));
        }
        contents.push(Content {
            role: "user".to_string(),
            parts,
        });

        let system_instruction = request.system_prompt().as_ref().map(|prompt| {
            SystemInstruction {
                parts: vec![Part::text(prompt.clone())],
            }
        });

        let generation_config = Some(GenerationConfig {
            temperature: *request.temperature(),
            max_output_tokens: *request.max_tokens(),
        });

        Self {
            contents,
            system_instruction,
            generation_config,
        }
    }
}

fn wire_role(role: Role) -> String {
    match role {
        Role::Assistant => "model".to_string(),
        Role::User | Role::System => "user".to_string(),
    }
}

/// Content block of a response candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ResponseContent {
    #[serde(default)]
    parts: Vec<Part>,
    role: Option<String>,
}

/// One generated candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    content: Option<ResponseContent>,
    finish_reason: Option<String>,
}

/// Token accounting reported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, Default)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u64,
    #[serde(default)]
    candidates_token_count: u64,
    #[serde(default)]
    total_token_count: u64,
}

/// generateContent response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    usage_metadata: Option<UsageMetadata>,
}

impl GenerateContentResponse {
    /// Concatenates the text parts of the first candidate.
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content().as_ref())
            .map(|content| {
                content
                    .parts()
                    .iter()
                    .filter_map(|part| part.text.as_deref())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }

    /// Extracts token usage, defaulting to zero when the API omits it.
    pub fn token_usage(&self) -> TokenUsage {
        let metadata = self.usage_metadata.unwrap_or_default();
        TokenUsage::new(
            *metadata.prompt_token_count(),
            *metadata.candidates_token_count(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_history_and_attachments() {
        let request = GenerationRequest::builder()
            .prompt("Summarize the attachment")
            .history(vec![
                maestro_core::Message::new(Role::User, "hi"),
                maestro_core::Message::new(Role::Assistant, "hello"),
            ])
            .attachments(vec![maestro_core::Attachment::new(
                "a.png",
                Some("image/png".to_string()),
                "aGVsbG8=",
            )])
            .build()
            .unwrap();

        let wire = GenerateContentRequest::from_generation(&request);
        assert_eq!(wire.contents.len(), 3);
        assert_eq!(wire.contents[1].role, "model");
        let last = &wire.contents[2];
        assert_eq!(last.role, "user");
        assert_eq!(last.parts.len(), 2);
        assert!(last.parts[1].inline_data.is_some());
    }

    #[test]
    fn serializes_camel_case() {
        let request = GenerationRequest::builder()
            .prompt("hi")
            .system_prompt(Some("be brief".to_string()))
            .temperature(Some(0.3))
            .max_tokens(Some(2000))
            .build()
            .unwrap();

        let wire = GenerateContentRequest::from_generation(&request);
        let json = serde_json::to_string(&wire).unwrap();
        assert!(json.contains("systemInstruction"));
        assert!(json.contains("maxOutputTokens"));
        assert!(!json.contains("inlineData"));
    }

    #[test]
    fn extracts_text_and_usage() {
        let body = serde_json::json!({
            "candidates": [{
                "content": {"parts": [{"text": "intent: "}, {"text": "create page"}], "role": "model"},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 12, "candidatesTokenCount": 5, "totalTokenCount": 17}
        });
        let response: GenerateContentResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.text(), "intent: create page");
        assert_eq!(response.token_usage(), TokenUsage::new(12, 5));
    }

    #[test]
    fn empty_response_yields_empty_text() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(response.text(), "");
        assert_eq!(response.token_usage(), TokenUsage::new(0, 0));
    }
}
