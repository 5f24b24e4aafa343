//! Error types for the figpress converter

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Node at {path} is missing required field '{field}'")]
    MissingField { path: String, field: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Invalid format: {message}")]
    InvalidFormat { message: String },
}

pub type Result<T> = std::result::Result<T, ConvertError>;

impl ConvertError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn missing_field(path: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingField {
            path: path.into(),
            field: field.into(),
        }
    }

    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }

    /// Whether the error comes from the shape of the input rather than I/O
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::InvalidInput { .. } | Self::MissingField { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        let err = ConvertError::missing_field("[0].children[1]", "type");
        assert_eq!(
            err.to_string(),
            "Node at [0].children[1] is missing required field 'type'"
        );
        assert!(err.is_structural());
    }

    #[test]
    fn test_io_is_not_structural() {
        let err = ConvertError::from(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
        assert!(!err.is_structural());
    }
}
