use thiserror::Error;

/// Fatal configuration problems. Data gaps (missing annotation, lookup
/// misses) are not errors and degrade to empty outputs instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{analysis} analysis requires at least one disease panel")]
    MissingPanels { analysis: &'static str },
    #[error("disease panels were provided but none of their genes match any input variant")]
    NoPanelGeneMatch,
}

impl From<ConfigError> for String {
    fn from(error: ConfigError) -> Self {
        error.to_string()
    }
}
