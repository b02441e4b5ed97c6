//! Gemini-specific error types.

/// Gemini-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GeminiErrorKind {
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
    /// Response carried no candidates or no text parts
    EmptyResponse,
}

impl std::fmt::Display for GeminiErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeminiErrorKind::MissingApiKey => {
                write!(f, "GEMINI_API_KEY environment variable not set")
            }
            GeminiErrorKind::ClientCreation(msg) => {
                write!(f, "Failed to create Gemini client: {}", msg)
            }
            GeminiErrorKind::Http(msg) => write!(f, "Gemini HTTP request failed: {}", msg),
            GeminiErrorKind::Api { status, message } => {
                write!(f, "Gemini API error {}: {}", status, message)
            }
            GeminiErrorKind::Parse(msg) => write!(f, "Failed to parse Gemini response: {}", msg),
            GeminiErrorKind::EmptyResponse => {
                write!(f, "Gemini response contained no generated text")
            }
        }
    }
}
