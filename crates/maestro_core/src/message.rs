//! Message types for conversation history.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A single turn of conversation history.
///
/// # Examples
///
/// ```
/// use maestro_core::{Message, Role};
///
/// let message = Message::new(Role::User, "Create an about page");
///
/// assert_eq!(*message.role(), Role::User);
/// assert_eq!(message.content(), "Create an about page");
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
pub struct Message {
    /// The role of the message sender
    role: Role,
    /// The text content of the message
    content: String,
}

impl Message {
    /// Creates a new message with the given role and content.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Returns a builder for constructing a Message.
    pub fn builder() -> MessageBuilder {
        MessageBuilder::default()
    }
}
