//! Anthropic-specific error types.

/// Anthropic-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnthropicErrorKind {
    /// API key not found in environment
    MissingApiKey,
    /// Failed to construct the HTTP client or its configuration
    ClientCreation(String),
    /// HTTP transport failed before a response arrived
    Http(String),
    /// API returned a non-success status
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or error message
        message: String,
    },
    /// Response body could not be deserialized
    Parse(String),
    /// Response carried no text content blocks
    EmptyResponse,
}

impl std::fmt::Display for AnthropicErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnthropicErrorKind::MissingApiKey => {
                write!(f, "ANTHROPIC_API_KEY environment variable not set")
            }
            AnthropicErrorKind::ClientCreation(msg) => {
                write!(f, "Failed to create Anthropic client: {}", msg)
            }
            AnthropicErrorKind::Http(msg) => write!(f, "Anthropic HTTP request failed: {}", msg),
            AnthropicErrorKind::Api { status, message } => {
                write!(f, "Anthropic API error {}: {}", status, message)
            }
            AnthropicErrorKind::Parse(msg) => {
                write!(f, "Failed to parse Anthropic response: {}", msg)
            }
            AnthropicErrorKind::EmptyResponse => {
                write!(f, "Anthropic response contained no text content")
            }
        }
    }
}
