use std::io;

/// Errors that can occur while loading or interpreting frontend options
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Unknown action '{0}', expected one of: {expected}", expected = crate::types::Action::token_list())]
    UnknownAction(String),
}

/// Result type alias for frontend-options operations
pub type Result<T> = std::result::Result<T, Error>;
