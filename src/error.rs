use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChampionError {
    /// The body was not well-formed JSON, or a field held an incompatible JSON type.
    #[error("malformed champion input: {0}")]
    MalformedInput(#[source] serde_json::Error),
    #[error("failed to serialize champion: {0}")]
    Serialize(#[source] serde_json::Error),
}
