//! Orchestration chain error types.

/// Specific error conditions for chain orchestration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChainErrorKind {
    /// Caller context payload could not be serialized for prompt embedding
    ContextSerialization(String),
    /// Request failed chain-level validation
    InvalidRequest(String),
}

impl std::fmt::Display for ChainErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChainErrorKind::ContextSerialization(msg) => {
                write!(f, "Failed to serialize caller context: {}", msg)
            }
            ChainErrorKind::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
        }
    }
}

/// Error type for chain operations.
///
/// # Examples
///
/// ```
/// use maestro_error::{ChainError, ChainErrorKind};
///
/// let err = ChainError::new(ChainErrorKind::InvalidRequest("empty prompt".into()));
/// assert!(format!("{}", err).contains("empty prompt"));
/// ```
#[derive(Debug, Clone)]
pub struct ChainError {
    /// The specific error condition
    pub kind: ChainErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ChainError {
    /// Create a new ChainError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ChainErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for ChainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Chain Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for ChainError {}

/// Result alias for chain operations.
pub type ChainResult<T> = Result<T, ChainError>;
