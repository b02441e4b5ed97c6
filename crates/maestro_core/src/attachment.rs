//! File attachment types for multimodal requests.

use base64::Engine;
use serde::{Deserialize, Serialize};

/// A file attached to a generation request, carried as base64.
///
/// # Examples
///
/// ```
/// use maestro_core::Attachment;
///
/// let attachment = Attachment::new("hello.txt", Some("text/plain".to_string()), "aGVsbG8=");
///
/// assert_eq!(attachment.name(), "hello.txt");
/// assert_eq!(attachment.decode().unwrap(), b"hello");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct Attachment {
    /// Original file name, used for context in prompts
    name: String,
    /// MIME type, e.g., "image/png" or "application/pdf"
    mime: Option<String>,
    /// Base64-encoded file content
    data: String,
}

impl Attachment {
    /// Creates a new attachment from base64 data.
    pub fn new(name: impl Into<String>, mime: Option<String>, data: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mime,
            data: data.into(),
        }
    }

    /// Returns a builder for constructing an Attachment.
    pub fn builder() -> AttachmentBuilder {
        AttachmentBuilder::default()
    }

    /// Decodes the base64 payload into raw bytes.
    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        base64::engine::general_purpose::STANDARD.decode(&self.data)
    }
}
