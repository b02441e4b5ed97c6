//! Provider integration error types.

use crate::{AnthropicErrorKind, GeminiErrorKind};

/// Specific error conditions for provider integrations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ModelsErrorKind {
    /// Error from the Gemini integration
    Gemini(GeminiErrorKind),
    /// Error from the Anthropic integration
    Anthropic(AnthropicErrorKind),
}

impl std::fmt::Display for ModelsErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelsErrorKind::Gemini(kind) => write!(f, "{}", kind),
            ModelsErrorKind::Anthropic(kind) => write!(f, "{}", kind),
        }
    }
}

/// Error type for provider operations.
///
/// # Examples
///
/// ```
/// use maestro_error::{GeminiErrorKind, ModelsError, ModelsErrorKind};
///
/// let err = ModelsError::new(ModelsErrorKind::Gemini(GeminiErrorKind::EmptyResponse));
/// assert!(format!("{}", err).contains("no generated text"));
/// ```
#[derive(Debug, Clone)]
pub struct ModelsError {
    /// The specific error condition
    pub kind: ModelsErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ModelsError {
    /// Create a new ModelsError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ModelsErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for ModelsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Models Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for ModelsError {}

/// Result alias for provider operations.
pub type ModelsResult<T> = Result<T, ModelsError>;
