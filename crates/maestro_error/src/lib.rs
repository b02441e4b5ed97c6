//! Error types for the Maestro orchestration library.
//!
//! Each domain gets its own kind enum plus a located error struct that
//! captures the construction site via `#[track_caller]`. The top-level
//! [`MaestroError`] unifies them for callers that cross crate boundaries.

mod anthropic;
mod chain;
mod gemini;
mod models;

pub use anthropic::AnthropicErrorKind;
pub use chain::{ChainError, ChainErrorKind, ChainResult};
pub use gemini::GeminiErrorKind;
pub use models::{ModelsError, ModelsErrorKind, ModelsResult};

/// Unified error type spanning all Maestro domains.
///
/// # Examples
///
/// ```
/// use maestro_error::{ChainError, ChainErrorKind, MaestroError};
///
/// fn check() -> Result<(), MaestroError> {
///     Err(ChainError::new(ChainErrorKind::InvalidRequest("empty prompt".into())).into())
/// }
///
/// assert!(matches!(check(), Err(MaestroError::Chain(_))));
/// ```
#[derive(Debug, Clone, derive_more::From)]
pub enum MaestroError {
    /// Provider integration error
    Models(ModelsError),
    /// Orchestration chain error
    Chain(ChainError),
}

impl std::fmt::Display for MaestroError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaestroError::Models(e) => write!(f, "{}", e),
            MaestroError::Chain(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for MaestroError {}

/// Result alias for operations that can fail anywhere in Maestro.
pub type MaestroResult<T> = Result<T, MaestroError>;
