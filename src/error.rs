use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A landmark frame did not carry exactly one point per hand joint.
    #[error("expected {expected} hand landmarks, found {found}")]
    LandmarkCount { expected: usize, found: usize },

    #[error("gesture `{0}` is already in the catalog")]
    DuplicateGesture(String),

    #[error("invalid recognizer config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("malformed landmark record: {0}")]
    Json(#[from] serde_json::Error),
}
