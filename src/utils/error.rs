use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Import request failed with HTTP status {status}")]
    HttpError { status: u16 },

    #[error("Response body is not valid JSON: {message}")]
    ParseError { message: String },

    #[error("Network error: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Storage error: {message}")]
    StorageError { message: String },

    #[error("Configuration error in '{field}': {reason}")]
    ConfigError { field: String, reason: String },
}

impl ImportError {
    pub fn validation(message: impl Into<String>) -> Self {
        ImportError::ValidationError {
            message: message.into(),
        }
    }

    pub fn config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ImportError::ConfigError {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ImportError>;
