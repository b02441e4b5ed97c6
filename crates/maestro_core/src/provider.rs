//! Provider identity for the two supported model backends.

use serde::{Deserialize, Serialize};

/// The supported model providers.
///
/// This is a closed set: every orchestration decision matches exhaustively
/// over it, so adding or removing a provider is a compile-time-checked
/// change rather than a string-table edit.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Provider {
    /// Google Gemini
    Gemini,
    /// Anthropic Claude
    Claude,
}

impl Provider {
    /// Returns the fallback partner for this provider.
    ///
    /// The mapping is a total two-element cycle: each provider's partner is
    /// always the other one, so `p.partner().partner() == p`.
    ///
    /// # Examples
    ///
    /// ```
    /// use maestro_core::Provider;
    ///
    /// assert_eq!(Provider::Gemini.partner(), Provider::Claude);
    /// assert_eq!(Provider::Claude.partner(), Provider::Gemini);
    /// ```
    pub fn partner(&self) -> Provider {
        match self {
            Provider::Gemini => Provider::Claude,
            Provider::Claude => Provider::Gemini,
        }
    }

    /// Returns the default model id used for single-call generation.
    pub fn default_model_id(&self) -> &'static str {
        match self {
            Provider::Gemini => "gemini-2.5-flash",
            Provider::Claude => "claude-sonnet-4-20250514",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn partner_is_a_two_cycle() {
        for provider in Provider::iter() {
            assert_ne!(provider.partner(), provider);
            assert_eq!(provider.partner().partner(), provider);
        }
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Provider::Gemini).unwrap(),
            "\"gemini\""
        );
        assert_eq!(Provider::Claude.to_string(), "claude");
    }
}
