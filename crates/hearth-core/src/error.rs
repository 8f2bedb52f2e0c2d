//! Error types for Hearth

use crate::ObjectId;
use thiserror::Error;

/// The main error type for Hearth operations
#[derive(Debug, Error)]
pub enum HearthError {
    #[error("Object not found: {0}")]
    ObjectNotFound(ObjectId),

    #[error("No free object id left in this level")]
    IdSpaceExhausted,

    #[error("Component not found: {0}")]
    ComponentNotFound(String),

    #[error("Unknown game object type: {0}")]
    UnknownObjectType(String),

    #[error("Passable tiles array has wrong size: expected {expected}, got {got}")]
    PassabilitySizeMismatch { expected: usize, got: usize },

    #[error("{kind} config not found: {id}")]
    ConfigNotFound { kind: String, id: u32 },

    #[error("Duplicate {kind} config id: {id}")]
    DuplicateConfig { kind: String, id: u32 },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("TOML serialization error: {0}")]
    TomlSerError(String),
}

/// Result type alias for Hearth operations
pub type Result<T> = std::result::Result<T, HearthError>;

impl From<toml::de::Error> for HearthError {
    fn from(err: toml::de::Error) -> Self {
        HearthError::TomlParseError(err.to_string())
    }
}

impl From<toml::ser::Error> for HearthError {
    fn from(err: toml::ser::Error) -> Self {
        HearthError::TomlSerError(err.to_string())
    }
}
