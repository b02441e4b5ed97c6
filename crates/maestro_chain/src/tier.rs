//! Performance tiers and their stage tables.

use maestro_core::Provider;
use serde::{Deserialize, Serialize};

/// A named pipeline configuration trading speed and cost against
/// thoroughness.
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
pub enum PerformanceTier {
    /// Two real stages: quick analysis, then implementation.
    Flow,
    /// Three real stages: deep analysis, strategy, then implementation.
    Craft,
}

/// One role within a tier's pipeline, bound to one provider.
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
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StageRole {
    Analyzer,
    Strategist,
    Implementer,
}

/// Static definition of one pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageSpec {
    /// The stage's role in the pipeline
    pub role: StageRole,
    /// Provider the stage calls
    pub provider: Provider,
    /// Concrete model id for the call
    pub model_id: &'static str,
    /// Sampling temperature for the stage
    pub temperature: f32,
    /// Output token budget for the stage
    pub max_tokens: u32,
}

const FLOW_STAGES: &[StageSpec] = &[
    StageSpec {
        role: StageRole::Analyzer,
        provider: Provider::Gemini,
        model_id: "gemini-2.5-flash",
        temperature: 0.3,
        max_tokens: 2000,
    },
    StageSpec {
        role: StageRole::Implementer,
        provider: Provider::Claude,
        model_id: "claude-sonnet-4-20250514",
        temperature: 0.7,
        max_tokens: 8000,
    },
];

const CRAFT_STAGES: &[StageSpec] = &[
    StageSpec {
        role: StageRole::Analyzer,
        provider: Provider::Gemini,
        model_id: "gemini-2.5-flash",
        temperature: 0.3,
        max_tokens: 2000,
    },
    StageSpec {
        role: StageRole::Strategist,
        provider: Provider::Gemini,
        model_id: "gemini-2.5-pro",
        temperature: 0.5,
        max_tokens: 4000,
    },
    StageSpec {
        role: StageRole::Implementer,
        provider: Provider::Claude,
        model_id: "claude-opus-4-20250514",
        temperature: 0.7,
        max_tokens: 8000,
    },
];

impl PerformanceTier {
    /// The ordered stage table for this tier.
    ///
    /// The mapping is total and static; pipeline shape never depends on
    /// request content.
    pub fn stages(&self) -> &'static [StageSpec] {
        match self {
            PerformanceTier::Flow => FLOW_STAGES,
            PerformanceTier::Craft => CRAFT_STAGES,
        }
    }

    /// Flat credits charged for one successful execution of this tier.
    ///
    /// Billing is flat-rate per tier, independent of the chain's actual
    /// token usage or cost.
    pub fn credits(&self) -> u32 {
        match self {
            PerformanceTier::Flow => 1,
            PerformanceTier::Craft => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn stage_tables_are_ordered() {
        let flow: Vec<_> = PerformanceTier::Flow.stages().iter().map(|s| s.role).collect();
        assert_eq!(flow, vec![StageRole::Analyzer, StageRole::Implementer]);

        let craft: Vec<_> = PerformanceTier::Craft.stages().iter().map(|s| s.role).collect();
        assert_eq!(
            craft,
            vec![
                StageRole::Analyzer,
                StageRole::Strategist,
                StageRole::Implementer
            ]
        );
    }

    #[test]
    fn every_tier_ends_with_an_implementer() {
        for tier in PerformanceTier::iter() {
            assert_eq!(tier.stages().last().unwrap().role, StageRole::Implementer);
            assert!(tier.credits() > 0);
        }
    }
}
