pub mod default;
pub mod team;
pub mod tiering;

use crate::model::ConsequenceType;
use crate::tiering::config::ClassifyConfig;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierStrategy {
    Default,
    Team,
    Tiering,
}

impl TierStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            TierStrategy::Default => "default",
            TierStrategy::Team => "team",
            TierStrategy::Tiering => "tiering",
        }
    }

    /// Strategies whose configuration must include at least one panel.
    pub fn requires_panels(&self) -> bool {
        matches!(self, TierStrategy::Team | TierStrategy::Tiering)
    }
}

impl FromStr for TierStrategy {
    type Err = String;

    fn from_str(strategy: &str) -> Result<Self, Self::Err> {
        match strategy {
            "default" => Ok(TierStrategy::Default),
            "team" => Ok(TierStrategy::Team),
            "tiering" => Ok(TierStrategy::Tiering),
            _ => Err(format!("Invalid tier strategy: {}", strategy)),
        }
    }
}

pub(crate) fn biotype_allowed(consequence_type: &ConsequenceType, config: &ClassifyConfig) -> bool {
    consequence_type
        .biotype
        .as_deref()
        .is_some_and(|biotype| config.biotypes.contains(biotype))
}

pub(crate) fn so_term_allowed(consequence_type: &ConsequenceType, config: &ClassifyConfig) -> bool {
    consequence_type
        .sequence_ontology_terms
        .iter()
        .any(|term| config.so_terms.contains(term.name.as_str()))
}
